use super::Render;
use crate::Pair;

use tablesmith_codegen::DalMethod;
use tablesmith_core::{mapping, Artifact, ArtifactKind, Markup, SourceWriter};

impl Render<'_> {
    /// Minimal MVC controller over the data-access class, with the view
    /// listing every row.
    pub(crate) fn render_service(&self) -> Pair {
        let class = &self.names.class_name;

        Pair {
            layout: Artifact::new(
                format!("{class}Index"),
                ArtifactKind::Markup(Markup::View),
                self.index_view(),
            ),
            code: Artifact::source(format!("{class}Controller"), self.controller()),
        }
    }

    fn controller(&self) -> String {
        let class = &self.names.class_name;
        let item = &self.names.local_name;
        let mut w = SourceWriter::new();

        self.preamble(&mut w, &["System.Configuration", "System.Web.Mvc"]);
        self.summary(&mut w, &format!("Serves the rows of {}", self.names.qualified));
        w.open(format!("public class {class}Controller : Controller"));
        self.dal_property(&mut w);
        w.blank();

        w.block("public ActionResult Index()", |w| {
            w.line(format!(
                "return View({}, {});",
                super::literal(&format!("{class}Index")),
                self.call(DalMethod::LoadAll, &[])
            ));
        });

        if let Some(reason) = self.missing_key() {
            w.blank();
            for action in ["Details", "Save", "Delete"] {
                w.line(format!("// {action} is not available: {reason}."));
            }
            w.close();
            w.close();
            return w.finish();
        }

        let (arguments, keys) = self.action_keys();
        w.blank();

        w.block(format!("public ActionResult Details({arguments})"), |w| {
            w.line(format!("{class} {item} = {};", self.call(DalMethod::LoadSingle, &keys)));
            w.block(format!("if ({item} == null)"), |w| {
                w.line("return HttpNotFound();");
            });
            w.line(format!("return Json({item}, JsonRequestBehavior.AllowGet);"));
        });
        w.blank();

        w.line("[HttpPost]");
        w.block(format!("public ActionResult Save({class} {item})"), |w| {
            w.line(format!("{};", self.call(DalMethod::Save, &[item.clone()])));
            w.line("return RedirectToAction(\"Index\");");
        });
        w.blank();

        w.line("[HttpPost]");
        w.block(format!("public ActionResult Delete({arguments})"), |w| {
            w.line(format!("{};", self.call(DalMethod::DeleteSingle, &keys)));
            w.line("return RedirectToAction(\"Index\");");
        });

        w.close();
        w.close();
        w.finish()
    }

    /// Action parameters naming one row, and the matching call arguments
    fn action_keys(&self) -> (String, Vec<String>) {
        let arguments = self
            .key_fields()
            .map(|field| {
                format!(
                    "{} {}",
                    mapping::storage_type(&field.column.ty),
                    field.names.local
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        let keys = self.key_fields().map(|field| field.names.local.clone()).collect();

        (arguments, keys)
    }

    fn index_view(&self) -> String {
        let mut w = SourceWriter::new();

        w.line(format!(
            "@model IEnumerable<{}.{}>",
            self.options.namespace, self.names.class_name
        ));
        w.blank();
        w.line(format!("<h2>{} List</h2>", self.names.display_name));
        w.blank();
        w.line("<table class=\"tablesmith-grid\">");
        w.indented(|w| {
            w.line("<tr>");
            w.indented(|w| {
                for field in self.rendered() {
                    w.line(format!("<th>{}</th>", field.names.display));
                }
                if self.table.has_primary_key() {
                    w.line("<th></th>");
                }
            });
            w.line("</tr>");
        });
        w.line("@foreach (var item in Model)");
        w.line("{");
        w.indented(|w| {
            w.line("<tr>");
            w.indented(|w| {
                for field in self.rendered() {
                    w.line(format!("<td>@item.{}</td>", field.names.property));
                }
                if self.table.has_primary_key() {
                    let route = self
                        .key_fields()
                        .map(|field| format!("{} = item.{}", field.names.local, field.names.property))
                        .collect::<Vec<_>>()
                        .join(", ");
                    w.line(format!(
                        "<td>@Html.ActionLink(\"Details\", \"Details\", new {{ {route} }})</td>"
                    ));
                }
            });
            w.line("</tr>");
        });
        w.line("}");
        w.line("</table>");

        w.finish()
    }
}
