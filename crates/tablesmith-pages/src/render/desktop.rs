use super::{Field, Render};
use crate::{Control, DateMode, Pair};

use tablesmith_codegen::DalMethod;
use tablesmith_core::{mapping, Artifact, SourceWriter, SqlType};

const LABEL_X: u32 = 12;
const INPUT_X: u32 = 140;
const INPUT_WIDTH: u32 = 260;
const INPUT_HEIGHT: u32 = 20;
const LINE_HEIGHT: u32 = 16;
const ROW_GAP: u32 = 8;
const MARGIN: u32 = 12;

impl Render<'_> {
    /// WinForms editor for one row: the form class and its designer half.
    pub(crate) fn render_desktop(&self) -> Pair {
        let name = format!("{}Form", self.names.class_name);
        let designer = Artifact::source(format!("{name}.Designer"), "");

        if let Some(reason) = self.missing_key() {
            let code = Artifact::source(name.clone(), "");
            return self.degraded_pair(&name, designer, code, &reason);
        }

        Pair {
            layout: Artifact {
                body: self.designer(&name),
                ..designer
            },
            code: Artifact::source(name.clone(), self.form(&name)),
        }
    }

    fn form(&self, form: &str) -> String {
        let class = &self.names.class_name;
        let dal = &self.names.dal_name;
        let item = format!("_{}", self.names.local_name.trim_start_matches('@'));
        let mut w = SourceWriter::new();

        self.preamble(
            &mut w,
            &["System", "System.Globalization", "System.Windows.Forms", "System.Xml"],
        );
        self.summary(&mut w, &format!("Desktop editor for one row of {}", self.names.qualified));
        w.open(format!("public partial class {form} : Form"));

        w.line(format!("private readonly {dal} _dal;"));
        w.line(format!("private readonly {class} {item};"));
        w.blank();

        w.block(format!("public {form}({dal} dal, {class} item)"), |w| {
            w.line("InitializeComponent();");
            w.line("_dal = dal;");
            w.line(format!("{item} = item ?? new {class}();"));
            w.line("BindControls();");
        });
        w.blank();

        w.block("private void BindControls()", |w| {
            for field in self.rendered() {
                let id = variable(field);
                let expr = format!("{item}.{}", field.names.property);

                if let Control::Date(_) = field.control {
                    self.bind_picker(w, field, &id, &expr);
                } else {
                    w.line(self.bind(field, &id, &expr));
                }
            }
        });
        w.blank();

        w.block("private void FillObject()", |w| {
            for field in self.rendered() {
                let id = variable(field);
                let expr = format!("{item}.{}", field.names.property);

                if let Control::Date(_) = field.control {
                    w.line(self.fill_picker(field, &id, &expr));
                } else if let Some(line) = self.fill(field, &id, &expr) {
                    w.line(line);
                }
            }
        });
        w.blank();

        w.block("private void saveButton_Click(object sender, EventArgs e)", |w| {
            w.line("FillObject();");
            w.line(format!("_dal.{}({item});", DalMethod::Save.name()));
            w.line("DialogResult = DialogResult.OK;");
            w.line("Close();");
        });

        w.close();
        w.close();
        w.finish()
    }

    fn bind_picker(&self, w: &mut SourceWriter, field: &Field<'_>, id: &str, expr: &str) {
        if mapping::holds_null(field.column, self.options) {
            w.line(format!("{id}.Checked = {expr}.HasValue;"));
            w.block(format!("if ({expr}.HasValue)"), |w| {
                let value = to_picker(&field.column.ty, &format!("{expr}.Value"));
                w.line(clamp(id, &value));
            });
        } else {
            w.line(clamp(id, &to_picker(&field.column.ty, expr)));
        }
    }

    fn fill_picker(&self, field: &Field<'_>, id: &str, expr: &str) -> String {
        let value = from_picker(&field.column.ty, &format!("{id}.Value"));

        if mapping::holds_null(field.column, self.options) {
            let ty = mapping::csharp_type(field.column, self.options);
            format!("{expr} = {id}.Checked ? {value} : ({ty})null;")
        } else {
            format!("{expr} = {value};")
        }
    }

    fn designer(&self, form: &str) -> String {
        let mut w = SourceWriter::new();

        w.line("// <auto-generated />");
        w.open(format!("namespace {}", self.options.namespace));
        w.open(format!("partial class {form}"));

        let fields: Vec<_> = self.rendered().collect();

        for field in &fields {
            w.line(format!("private System.Windows.Forms.Label {};", label(field)));
            w.line(format!(
                "private System.Windows.Forms.{} {};",
                control_type(field.control),
                variable(field)
            ));
        }
        w.line("private System.Windows.Forms.Button saveButton;");
        w.blank();

        w.block("private void InitializeComponent()", |w| {
            for field in &fields {
                w.line(format!("this.{} = new System.Windows.Forms.Label();", label(field)));
                w.line(format!(
                    "this.{} = new System.Windows.Forms.{}();",
                    variable(field),
                    control_type(field.control)
                ));
            }
            w.line("this.saveButton = new System.Windows.Forms.Button();");
            w.line("this.SuspendLayout();");

            let mut y = MARGIN;
            for field in &fields {
                let height = self.layout_field(w, field, y);
                y += height.max(INPUT_HEIGHT) + ROW_GAP;
            }

            designer_section(w, "saveButton");
            w.line(format!("this.saveButton.Location = new System.Drawing.Point({INPUT_X}, {y});"));
            w.line("this.saveButton.Name = \"saveButton\";");
            w.line("this.saveButton.Size = new System.Drawing.Size(75, 23);");
            w.line("this.saveButton.Text = \"Save\";");
            w.line("this.saveButton.Click += new System.EventHandler(this.saveButton_Click);");

            designer_section(w, form);
            w.line(format!(
                "this.ClientSize = new System.Drawing.Size({}, {});",
                INPUT_X + INPUT_WIDTH + MARGIN,
                y + 23 + MARGIN
            ));
            for field in &fields {
                w.line(format!("this.Controls.Add(this.{});", label(field)));
                w.line(format!("this.Controls.Add(this.{});", variable(field)));
            }
            w.line("this.Controls.Add(this.saveButton);");
            w.line(format!("this.Name = \"{form}\";"));
            w.line(format!("this.Text = \"{}\";", self.names.display_name));
            w.line("this.ResumeLayout(false);");
            w.line("this.PerformLayout();");
        });

        w.close();
        w.close();
        w.finish()
    }

    /// Positions the label and control of `field` at `y`; returns the
    /// control's height
    fn layout_field(&self, w: &mut SourceWriter, field: &Field<'_>, y: u32) -> u32 {
        let label = label(field);
        let id = variable(field);

        designer_section(w, &label);
        w.line(format!("this.{label}.AutoSize = true;"));
        w.line(format!("this.{label}.Location = new System.Drawing.Point({LABEL_X}, {});", y + 3));
        w.line(format!("this.{label}.Name = \"{label}\";"));
        w.line(format!("this.{label}.Text = \"{}\";", field.names.display));

        designer_section(w, &id);
        w.line(format!("this.{id}.Location = new System.Drawing.Point({INPUT_X}, {y});"));
        w.line(format!("this.{id}.Name = \"{id}\";"));

        let mut height = INPUT_HEIGHT;

        match field.control {
            Control::CheckBox => {
                w.line(format!("this.{id}.AutoSize = true;"));
            }
            Control::Date(mode) => {
                match mode {
                    DateMode::Date => {
                        w.line(format!("this.{id}.Format = System.Windows.Forms.DateTimePickerFormat.Short;"));
                    }
                    DateMode::DateTime => {
                        w.line(format!("this.{id}.Format = System.Windows.Forms.DateTimePickerFormat.Custom;"));
                        w.line(format!("this.{id}.CustomFormat = \"yyyy-MM-dd HH:mm\";"));
                    }
                    DateMode::Time => {
                        w.line(format!("this.{id}.Format = System.Windows.Forms.DateTimePickerFormat.Time;"));
                        w.line(format!("this.{id}.ShowUpDown = true;"));
                    }
                }
                if mapping::holds_null(field.column, self.options) {
                    w.line(format!("this.{id}.ShowCheckBox = true;"));
                }
                w.line(format!("this.{id}.Size = new System.Drawing.Size({INPUT_WIDTH}, {height});"));
            }
            Control::MultiLine { rows } => {
                height = rows * LINE_HEIGHT + 6;
                w.line(format!("this.{id}.Multiline = true;"));
                w.line(format!("this.{id}.ScrollBars = System.Windows.Forms.ScrollBars.Vertical;"));
                if field.column.length > 0 {
                    w.line(format!("this.{id}.MaxLength = {};", field.column.length));
                }
                w.line(format!("this.{id}.Size = new System.Drawing.Size({INPUT_WIDTH}, {height});"));
            }
            Control::SingleLine { max_length } => {
                if let Some(max_length) = max_length {
                    w.line(format!("this.{id}.MaxLength = {max_length};"));
                }
                w.line(format!("this.{id}.Size = new System.Drawing.Size({INPUT_WIDTH}, {height});"));
            }
            Control::ReadOnly | Control::Omitted => {
                w.line(format!("this.{id}.ReadOnly = true;"));
                w.line(format!("this.{id}.Size = new System.Drawing.Size({INPUT_WIDTH}, {height});"));
            }
        }

        height
    }
}

/// `nameTextBox`, `disabledCheckBox`
fn variable(field: &Field<'_>) -> String {
    format!(
        "{}{}",
        field.names.local.trim_start_matches('@'),
        field.control.suffix()
    )
}

fn label(field: &Field<'_>) -> String {
    format!("{}Label", field.names.local.trim_start_matches('@'))
}

fn control_type(control: Control) -> &'static str {
    match control {
        Control::CheckBox => "CheckBox",
        Control::Date(_) => "DateTimePicker",
        _ => "TextBox",
    }
}

fn designer_section(w: &mut SourceWriter, name: &str) {
    w.line("//");
    w.line(format!("// {name}"));
    w.line("//");
}

fn clamp(id: &str, value: &str) -> String {
    format!("{id}.Value = {value} < {id}.MinDate ? {id}.MinDate : {value};")
}

/// The `DateTime` shown by a picker for a stored value
fn to_picker(ty: &SqlType, expr: &str) -> String {
    match ty {
        SqlType::Time => format!("DateTime.Today + {expr}"),
        SqlType::DateTimeOffset => format!("{expr}.DateTime"),
        _ => expr.to_string(),
    }
}

fn from_picker(ty: &SqlType, expr: &str) -> String {
    match ty {
        SqlType::Time => format!("{expr}.TimeOfDay"),
        SqlType::DateTimeOffset => format!("new DateTimeOffset({expr})"),
        SqlType::Date => format!("{expr}.Date"),
        _ => expr.to_string(),
    }
}
