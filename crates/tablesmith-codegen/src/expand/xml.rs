use super::{string_literal, summary, xml_escape, Expand};

use tablesmith_core::{mapping, Error, Result, Row, SourceWriter};

impl Expand<'_> {
    /// Root element of the data file
    fn xml_root(&self) -> String {
        format!("{}List", self.names.class_name)
    }

    /// `rows` as an XML document: one element per row, one child element per
    /// non-null value in declared column order.
    pub(crate) fn expand_xml_data(&self, rows: &[Row]) -> Result<String> {
        for row in rows {
            if let Some((column, _)) = row.iter().find(|(column, _)| self.table.column(column).is_none()) {
                return Err(Error::unknown_column(self.table.name(), column));
            }
        }

        let class = &self.names.class_name;
        let mut w = SourceWriter::with_indent("  ");

        w.line("<?xml version=\"1.0\" encoding=\"utf-8\"?>");
        w.line(format!("<{}>", self.xml_root()));
        w.indented(|w| {
            for row in rows {
                w.line(format!("<{class}>"));
                w.indented(|w| {
                    for (column, names) in &self.columns {
                        if let Some(value) = row.get(&column.name) {
                            let element = &names.property;
                            w.line(format!("<{element}>{}</{element}>", xml_escape(value)));
                        }
                    }
                });
                w.line(format!("</{class}>"));
            }
        });
        w.line(format!("</{}>", self.xml_root()));

        Ok(w.finish())
    }

    /// A class reading the data file back into data objects
    pub(crate) fn expand_xml_loader(&self) -> String {
        let class = &self.names.class_name;
        let item = &self.names.local_name;
        let mut w = SourceWriter::new();

        self.preamble(&mut w, &["System", "System.Collections.Generic", "System.Xml"]);

        summary(&mut w, &format!("Reads {class} rows from XML data files"));
        w.open(format!("public static class {class}XmlLoader"));

        w.block(format!("public static List<{class}> Load(string path)"), |w| {
            w.line("XmlDocument document = new XmlDocument();");
            w.line("document.Load(path);");
            w.line("return Load(document);");
        });
        w.blank();

        w.block(format!("public static List<{class}> Load(XmlDocument document)"), |w| {
            w.line(format!("List<{class}> list = new List<{class}>();"));
            let path = string_literal(&format!("/{}/{class}", self.xml_root()));
            w.block(format!("foreach (XmlNode node in document.SelectNodes({path}))"), |w| {
                w.line(format!("{class} {item} = new {class}();"));
                w.line("XmlNode value;");

                for (column, names) in &self.columns {
                    w.blank();
                    w.line(format!(
                        "value = node.SelectSingleNode({});",
                        string_literal(&names.property)
                    ));
                    w.block("if (value != null)", |w| {
                        w.line(format!(
                            "{item}.{} = {};",
                            names.property,
                            mapping::xml_parse(&column.ty, "value.InnerText")
                        ));
                    });
                }

                w.blank();
                w.line(format!("list.Add({item});"));
            });
            w.line("return list;");
        });

        w.close();
        w.close();
        w.finish()
    }
}
