use super::{summary, Expand};

use tablesmith_core::{mapping, SourceWriter};

impl Expand<'_> {
    /// The data object: one property per column, row loading and copying.
    pub(crate) fn expand_object(&self) -> String {
        let mut w = SourceWriter::new();
        let class = &self.names.class_name;

        self.preamble(&mut w, &["System", "System.Data", "System.Globalization"]);

        summary(&mut w, &format!("One row of {}", self.names.qualified));
        w.line("[Serializable]");
        w.open(format!(
            "public partial class {class} : {}",
            self.names.interface_name
        ));

        self.expand_fields(&mut w);
        w.blank();
        self.expand_constructors(&mut w);
        w.blank();
        self.expand_properties(&mut w);
        w.blank();
        self.expand_load(&mut w);
        w.blank();
        self.expand_copy_to(&mut w);

        w.close();
        w.close();
        w.finish()
    }

    fn expand_fields(&self, w: &mut SourceWriter) {
        for (column, names) in &self.columns {
            w.line(format!(
                "private {} {} = {};",
                self.property_type(column),
                names.field,
                mapping::default_value(column, self.options)
            ));
        }

        if self.options.dirty_flag {
            w.line("private bool _isDirty;");
        }
    }

    fn expand_constructors(&self, w: &mut SourceWriter) {
        let class = &self.names.class_name;

        w.block(format!("public {class}()"), |_| {});
        w.blank();
        w.block(format!("public {class}(DataRow row)"), |w| {
            w.line("Load(row);");
        });
    }

    fn expand_properties(&self, w: &mut SourceWriter) {
        for (i, (column, names)) in self.columns.iter().enumerate() {
            if i > 0 {
                w.blank();
            }

            let field = &names.field;
            w.block(
                format!("public {} {}", self.property_type(column), names.property),
                |w| {
                    w.line(format!("get {{ return {field}; }}"));
                    if self.options.dirty_flag {
                        w.line(format!("set {{ {field} = value; _isDirty = true; }}"));
                    } else {
                        w.line(format!("set {{ {field} = value; }}"));
                    }
                },
            );
        }

        if self.options.dirty_flag {
            w.blank();
            w.block("public bool IsDirty", |w| {
                w.line("get { return _isDirty; }");
                w.line("set { _isDirty = value; }");
            });
        }
    }

    /// Row to object. Every column is read, engine-assigned ones included.
    fn expand_load(&self, w: &mut SourceWriter) {
        w.block("public void Load(DataRow row)", |w| {
            for (column, names) in &self.columns {
                w.line(format!("{} = {};", names.field, self.read_row(column)));
            }

            if self.options.dirty_flag {
                w.line("_isDirty = false;");
            }
        });
    }

    /// Object to row. Identity and rowversion columns belong to the engine
    /// and are left alone.
    fn expand_copy_to(&self, w: &mut SourceWriter) {
        w.block("public void CopyTo(DataRow row)", |w| {
            for (column, names) in &self.columns {
                if !column.is_writable() {
                    continue;
                }

                w.line(format!(
                    "row[{}] = {};",
                    super::string_literal(&column.name),
                    self.db_value(column, &names.field)
                ));
            }
        });
    }
}
