use pretty_assertions::assert_eq;
use std_util::prelude::*;
use tablesmith_core::{Column, GenerationOptions, SqlType, Table};
use tablesmith_pages::desktop_form;

fn game() -> Table {
    Table::builder("Game")
        .column(Column::new("Id", SqlType::Int).primary_key().identity())
        .column(Column::new("Name", SqlType::NVarChar).length(50).nullable())
        .column(Column::new("Disabled", SqlType::Bit))
        .build()
        .unwrap()
}

#[test]
fn game_form() {
    let pair = assert_ok!(desktop_form(&game(), &GenerationOptions::default()));

    assert_eq!(pair.code.file_name(), "GameForm.cs");
    assert_eq!(
        pair.code.body,
        r#"// <auto-generated />
using System;
using System.Globalization;
using System.Windows.Forms;
using System.Xml;

namespace Data
{
    /// <summary>
    /// Desktop editor for one row of [dbo].[Game]
    /// </summary>
    public partial class GameForm : Form
    {
        private readonly GameDal _dal;
        private readonly Game _game;

        public GameForm(GameDal dal, Game item)
        {
            InitializeComponent();
            _dal = dal;
            _game = item ?? new Game();
            BindControls();
        }

        private void BindControls()
        {
            idValue.Text = Convert.ToString(_game.Id, CultureInfo.InvariantCulture);
            nameTextBox.Text = _game.Name;
            disabledCheckBox.Checked = _game.Disabled;
        }

        private void FillObject()
        {
            _game.Name = nameTextBox.Text.Length == 0 ? null : nameTextBox.Text;
            _game.Disabled = disabledCheckBox.Checked;
        }

        private void saveButton_Click(object sender, EventArgs e)
        {
            FillObject();
            _dal.Save(_game);
            DialogResult = DialogResult.OK;
            Close();
        }
    }
}
"#
    );
}

#[test]
fn game_designer() {
    let pair = assert_ok!(desktop_form(&game(), &GenerationOptions::default()));
    let designer = &pair.layout.body;

    assert_eq!(pair.layout.file_name(), "GameForm.Designer.cs");
    assert!(designer.starts_with(
        "// <auto-generated />\nnamespace Data\n{\n    partial class GameForm\n    {\n        private System.Windows.Forms.Label idLabel;\n        private System.Windows.Forms.TextBox idValue;\n"
    ));
    assert_contains!(designer, "this.idValue.ReadOnly = true;");
    assert_contains!(designer, "this.nameTextBox.MaxLength = 50;");
    assert_contains!(designer, "this.nameTextBox.Location = new System.Drawing.Point(140, 40);");
    assert_contains!(designer, "this.disabledCheckBox.Location = new System.Drawing.Point(140, 68);");
    assert_contains!(designer, "this.saveButton.Location = new System.Drawing.Point(140, 96);");
    assert_contains!(designer, "this.ClientSize = new System.Drawing.Size(412, 131);");
    assert_contains!(designer, "this.Text = \"Game\";");
    assert_contains!(
        designer,
        "this.saveButton.Click += new System.EventHandler(this.saveButton_Click);"
    );
}

#[test]
fn date_pickers() {
    let table = Table::builder("Member")
        .column(Column::new("Id", SqlType::Int).primary_key())
        .column(Column::new("Born", SqlType::Date).nullable())
        .column(Column::new("Joined", SqlType::DateTime))
        .column(Column::new("Biography", SqlType::NVarChar).max())
        .build()
        .unwrap();

    let pair = assert_ok!(desktop_form(&table, &GenerationOptions::default()));

    assert_contains!(
        pair.code.body,
        "            bornPicker.Checked = _member.Born.HasValue;
            if (_member.Born.HasValue)
            {
                bornPicker.Value = _member.Born.Value < bornPicker.MinDate ? bornPicker.MinDate : _member.Born.Value;
            }
"
    );
    assert_contains!(
        pair.code.body,
        "joinedPicker.Value = _member.Joined < joinedPicker.MinDate ? joinedPicker.MinDate : _member.Joined;"
    );
    assert_contains!(
        pair.code.body,
        "_member.Born = bornPicker.Checked ? bornPicker.Value.Date : (DateTime?)null;"
    );
    assert_contains!(pair.code.body, "_member.Joined = joinedPicker.Value;");

    let designer = &pair.layout.body;
    assert_contains!(designer, "private System.Windows.Forms.DateTimePicker bornPicker;");
    assert_contains!(designer, "this.bornPicker.ShowCheckBox = true;");
    assert_contains!(
        designer,
        "this.joinedPicker.Format = System.Windows.Forms.DateTimePickerFormat.Custom;"
    );
    assert_contains!(designer, "this.biographyTextBox.Multiline = true;");
    assert_contains!(
        designer,
        "this.biographyTextBox.Size = new System.Drawing.Size(260, 166);"
    );
}

#[test]
fn keyless_tables_degrade() {
    let table = Table::builder("Log")
        .column(Column::new("Message", SqlType::NVarChar).max())
        .build()
        .unwrap();

    let pair = assert_ok!(desktop_form(&table, &GenerationOptions::default()));
    assert!(pair.layout.degraded && pair.code.degraded);
    assert_eq!(pair.layout.file_name(), "LogForm.Designer.cs");
    assert_eq!(
        pair.code.body,
        "// LogForm was not generated: table [dbo].[Log] has no primary key.\n"
    );
}
