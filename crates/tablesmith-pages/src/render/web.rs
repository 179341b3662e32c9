use super::{Field, Render};
use crate::{Control, DateMode, Pair};

use tablesmith_core::{Artifact, ArtifactKind, Markup, SourceWriter};

/// `using` directives shared by every code-behind class
pub(super) const USINGS: &[&str] = &[
    "System",
    "System.Configuration",
    "System.Globalization",
    "System.Web.UI",
    "System.Web.UI.WebControls",
    "System.Xml",
];

impl Render<'_> {
    /// `GameEdit`, `GameList`, ...
    pub(super) fn page_name(&self, page: &str) -> String {
        format!("{}{page}", self.names.class_name)
    }

    pub(super) fn markup(&self) -> Markup {
        if self.options.embedded_control {
            Markup::Control
        } else {
            Markup::Page
        }
    }

    pub(super) fn markup_extension(&self) -> &'static str {
        ArtifactKind::Markup(self.markup()).extension()
    }

    /// Link target of another page of the same table. Embedded controls are
    /// hosted by pages of the same name.
    pub(super) fn page_url(&self, page: &str) -> String {
        format!("{}.aspx", self.page_name(page))
    }

    /// The markup file and its code-behind class
    pub(super) fn web_pair(
        &self,
        page: &str,
        title: &str,
        content: impl FnOnce(&mut SourceWriter),
        code: String,
    ) -> Pair {
        let name = self.page_name(page);
        let markup = self.markup();
        let extension = self.markup_extension();

        let mut w = SourceWriter::new();
        w.line(format!(
            "<%@ {} Language=\"C#\" AutoEventWireup=\"true\" CodeBehind=\"{name}.{extension}.cs\" Inherits=\"{}.{name}\" %>",
            directive(markup),
            self.options.namespace
        ));
        w.blank();

        if markup == Markup::Control {
            content(&mut w);
        } else {
            w.line("<!DOCTYPE html>");
            w.line("<html>");
            w.line("<head runat=\"server\">");
            w.indented(|w| {
                w.line(format!("<title>{title}</title>"));
                w.line(format!(
                    "<link rel=\"stylesheet\" type=\"text/css\" href=\"{}.css\" />",
                    self.options.stylesheet
                ));
            });
            w.line("</head>");
            w.line("<body>");
            w.indented(|w| {
                w.line("<form id=\"form\" runat=\"server\">");
                w.indented(content);
                w.line("</form>");
            });
            w.line("</body>");
            w.line("</html>");
        }

        Pair {
            layout: Artifact::new(name.clone(), ArtifactKind::Markup(markup), w.finish()),
            code: Artifact::source(format!("{name}.{extension}"), code),
        }
    }

    /// Opens the code-behind class of `page`
    pub(super) fn open_code_behind(&self, w: &mut SourceWriter, page: &str, summary: &str) {
        let base = match self.markup() {
            Markup::Control => "UserControl",
            _ => "Page",
        };

        self.preamble(w, USINGS);
        self.summary(w, summary);
        w.open(format!("public partial class {} : {base}", self.page_name(page)));
        self.dal_property(w);
    }

    /// The edit control of `field`
    pub(super) fn input(&self, field: &Field<'_>) -> Option<String> {
        let id = control_id(field);

        let tag = match field.control {
            Control::CheckBox => format!("<asp:CheckBox ID=\"{id}\" runat=\"server\" />"),
            Control::Date(mode) => format!(
                "<asp:TextBox ID=\"{id}\" runat=\"server\" TextMode=\"{}\" />",
                text_mode(mode)
            ),
            Control::MultiLine { rows } => format!(
                "<asp:TextBox ID=\"{id}\" runat=\"server\" TextMode=\"MultiLine\" Rows=\"{rows}\" />"
            ),
            Control::SingleLine {
                max_length: Some(max_length),
            } => format!("<asp:TextBox ID=\"{id}\" runat=\"server\" MaxLength=\"{max_length}\" />"),
            Control::SingleLine { max_length: None } => {
                format!("<asp:TextBox ID=\"{id}\" runat=\"server\" />")
            }
            Control::ReadOnly => format!("<asp:Label ID=\"{id}\" runat=\"server\" />"),
            Control::Omitted => return None,
        };

        Some(tag)
    }

    /// One `<tr>` per field: header cell, then `cell`
    pub(super) fn field_rows(&self, w: &mut SourceWriter, cell: impl Fn(&Field<'_>) -> Option<String>) {
        w.line("<table>");
        w.indented(|w| {
            for field in self.rendered() {
                let Some(content) = cell(field) else { continue };

                w.line("<tr>");
                w.indented(|w| {
                    w.line(format!("<th>{}</th>", field.names.display));
                    w.line(format!("<td>{content}</td>"));
                });
                w.line("</tr>");
            }
        });
        w.line("</table>");
    }

    /// Query-string condition naming a row; `==` tests for a missing key
    pub(super) fn query_test(&self, op: &str, join: &str) -> String {
        self.key_fields()
            .map(|field| format!("Request.QueryString[{}] {op} null", super::literal(&field.names.property)))
            .collect::<Vec<_>>()
            .join(join)
    }

    /// Key arguments read from the query string, in key order
    pub(super) fn query_keys(&self) -> Vec<String> {
        self.key_fields()
            .map(|field| {
                let text = format!("Request.QueryString[{}]", super::literal(&field.names.property));
                super::from_text(&field.column.ty, &text)
            })
            .collect()
    }

    /// `LoadFromQuery()`: the row named by the query string, or `null`
    pub(super) fn expand_query_load(&self, w: &mut SourceWriter) {
        let class = &self.names.class_name;
        let load = self.call(tablesmith_codegen::DalMethod::LoadSingle, &self.query_keys());

        w.line("/// The row named by the query string, if any");
        w.block(format!("private {class} LoadFromQuery()"), |w| {
            w.block(format!("if ({})", self.query_test("==", " || ")), |w| {
                w.line("return null;");
            });
            w.blank();
            w.line(format!("return {load};"));
        });
    }
}

/// `NameTextBox`, `DisabledCheckBox`, `IdValue`
pub(super) fn control_id(field: &Field<'_>) -> String {
    format!("{}{}", field.names.property, field.control.suffix())
}

fn directive(markup: Markup) -> &'static str {
    match markup {
        Markup::Control => "Control",
        _ => "Page",
    }
}

fn text_mode(mode: DateMode) -> &'static str {
    match mode {
        DateMode::Date => "Date",
        DateMode::DateTime => "DateTimeLocal",
        DateMode::Time => "Time",
    }
}
