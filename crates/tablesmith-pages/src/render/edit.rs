use super::{web::control_id, Render};
use crate::Pair;

use tablesmith_codegen::DalMethod;
use tablesmith_core::{Artifact, ArtifactKind, SourceWriter};

impl Render<'_> {
    /// Form editing one row, saved through the upsert procedure.
    pub(crate) fn render_edit(&self) -> Pair {
        let name = self.page_name("Edit");

        if let Some(reason) = self.missing_key() {
            let layout = Artifact::new(name.clone(), ArtifactKind::Markup(self.markup()), "");
            let code = Artifact::source(format!("{name}.{}", self.markup_extension()), "");
            return self.degraded_pair(&name, layout, code, &reason);
        }

        let title = format!("Edit {}", self.names.display_name);
        let content = |w: &mut SourceWriter| {
            w.line("<div class=\"tablesmith-edit\">");
            w.indented(|w| {
                w.line(format!("<h1>{title}</h1>"));
                self.field_rows(w, |field| self.input(field));
                w.line("<div class=\"tablesmith-buttons\">");
                w.indented(|w| {
                    w.line("<asp:Button ID=\"SaveButton\" runat=\"server\" Text=\"Save\" OnClick=\"SaveButton_Click\" />");
                    w.line("<asp:Button ID=\"DeleteButton\" runat=\"server\" Text=\"Delete\" OnClick=\"DeleteButton_Click\" CausesValidation=\"false\" />");
                });
                w.line("</div>");
            });
            w.line("</div>");
        };

        self.web_pair("Edit", &title, content, self.edit_code())
    }

    fn edit_code(&self) -> String {
        let class = &self.names.class_name;
        let item = &self.names.local_name;
        let list = self.page_url("List");
        let mut w = SourceWriter::new();

        self.open_code_behind(&mut w, "Edit", &format!("Edits one row of {}", self.names.qualified));
        w.blank();

        w.block("protected void Page_Load(object sender, EventArgs e)", |w| {
            w.block("if (IsPostBack)", |w| {
                w.line("return;");
            });
            w.blank();
            w.line(format!("{class} {item} = LoadFromQuery();"));
            w.block(format!("if ({item} != null)"), |w| {
                w.line(format!("BindControls({item});"));
            });
        });
        w.blank();

        w.block("protected void SaveButton_Click(object sender, EventArgs e)", |w| {
            w.line(format!("{class} {item} = LoadFromQuery() ?? new {class}();"));
            w.line(format!("FillObject({item});"));
            w.line(format!("{};", self.call(DalMethod::Save, &[item.clone()])));
            w.line(format!("Response.Redirect({});", super::literal(&list)));
        });
        w.blank();

        w.block("protected void DeleteButton_Click(object sender, EventArgs e)", |w| {
            w.block(format!("if ({})", self.query_test("!=", " && ")), |w| {
                w.line(format!("{};", self.call(DalMethod::DeleteSingle, &self.query_keys())));
            });
            w.line(format!("Response.Redirect({});", super::literal(&list)));
        });
        w.blank();

        self.expand_query_load(&mut w);
        w.blank();

        w.block(format!("private void BindControls({class} {item})"), |w| {
            for field in self.rendered() {
                w.line(self.bind(field, &control_id(field), &format!("{item}.{}", field.names.property)));
            }
        });
        w.blank();

        w.block(format!("private void FillObject({class} {item})"), |w| {
            for field in self.rendered() {
                let expr = format!("{item}.{}", field.names.property);
                if let Some(line) = self.fill(field, &control_id(field), &expr) {
                    w.line(line);
                }
            }
        });

        w.close();
        w.close();
        w.finish()
    }
}
