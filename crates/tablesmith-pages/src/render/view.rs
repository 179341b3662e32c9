use super::Render;
use crate::Pair;

use tablesmith_core::{Artifact, ArtifactKind, SourceWriter};

impl Render<'_> {
    /// Read-only display of one row.
    pub(crate) fn render_view(&self) -> Pair {
        let name = self.page_name("View");

        if let Some(reason) = self.missing_key() {
            let layout = Artifact::new(name.clone(), ArtifactKind::Markup(self.markup()), "");
            let code = Artifact::source(format!("{name}.{}", self.markup_extension()), "");
            return self.degraded_pair(&name, layout, code, &reason);
        }

        let title = self.names.display_name.clone();
        let content = |w: &mut SourceWriter| {
            w.line("<div class=\"tablesmith-view\">");
            w.indented(|w| {
                w.line(format!("<h1>{title}</h1>"));
                self.field_rows(w, |field| {
                    Some(format!(
                        "<asp:Label ID=\"{}Value\" runat=\"server\" />",
                        field.names.property
                    ))
                });
                w.line("<asp:HyperLink ID=\"EditLink\" runat=\"server\" Text=\"Edit\" />");
            });
            w.line("</div>");
        };

        self.web_pair("View", &title, content, self.view_code())
    }

    fn view_code(&self) -> String {
        let class = &self.names.class_name;
        let item = &self.names.local_name;
        let mut w = SourceWriter::new();

        self.open_code_behind(&mut w, "View", &format!("Shows one row of {}", self.names.qualified));
        w.blank();

        w.block("protected void Page_Load(object sender, EventArgs e)", |w| {
            w.line(format!("{class} {item} = LoadFromQuery();"));
            w.block(format!("if ({item} == null)"), |w| {
                w.line("return;");
            });
            w.blank();
            for field in self.rendered() {
                let expr = format!("{item}.{}", field.names.property);
                w.line(format!(
                    "{}Value.Text = {};",
                    field.names.property,
                    self.display_text(field, &expr)
                ));
            }
            w.line(format!(
                "EditLink.NavigateUrl = {} + Request.Url.Query;",
                super::literal(&self.page_url("Edit"))
            ));
        });
        w.blank();

        self.expand_query_load(&mut w);

        w.close();
        w.close();
        w.finish()
    }
}
