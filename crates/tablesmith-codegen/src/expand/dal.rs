use super::{string_literal, summary, Expand};
use crate::DalMethod;

use tablesmith_core::{
    mapping,
    procedure::{
        procedure_name, ID_LIST, INCLUDE_DISABLED, SEARCH_STRING, SEARCH_STRING_LENGTH, SKIP,
        TAKE,
    },
    Archetype, Column, ColumnNames, Error, Result, Selection, SourceWriter,
};

impl Expand<'_> {
    /// The data-access class: one method per procedure, each calling it by
    /// its canonical name.
    pub(crate) fn expand_dal(&self, selection: &Selection) -> Result<String> {
        let searchable = !self.table.resolve(&selection.search)?.is_empty();
        let criteria = self.resolve_criteria(selection)?;

        let mut w = SourceWriter::new();
        let dal = &self.names.dal_name;
        let xml_ids = self.uses_id_list() && !self.options.dialect.supports_string_split();

        let mut usings = vec![
            "System",
            "System.Collections.Generic",
            "System.Data",
            "System.Data.SqlClient",
        ];
        if xml_ids {
            usings.extend(["System.Globalization", "System.Security", "System.Text"]);
        }
        self.preamble(&mut w, &usings);

        summary(&mut w, &format!("Stored-procedure access to {}", self.names.qualified));
        w.open(format!("public partial class {dal}"));

        w.line("private readonly string _connectionString;");
        w.blank();
        w.block(format!("public {dal}(string connectionString)"), |w| {
            w.line("_connectionString = connectionString;");
        });

        for method in DalMethod::FIXED {
            w.blank();
            self.expand_dal_method(&mut w, &method, &[], searchable);
        }

        for columns in &criteria {
            w.blank();
            let method = DalMethod::load_by(&self.names, columns);
            self.expand_dal_method(&mut w, &method, columns, searchable);
        }

        w.blank();
        self.expand_dal_helpers(&mut w, xml_ids);

        w.close();
        w.close();
        Ok(w.finish())
    }

    fn resolve_criteria<'s>(&'s self, selection: &Selection) -> Result<Vec<Vec<&'s Column>>> {
        selection
            .criteria
            .iter()
            .map(|fields| {
                if fields.is_empty() {
                    return Err(Error::invalid_argument(format!(
                        "empty criteria field list for table `{}`",
                        self.table.name()
                    )));
                }
                self.table.resolve(fields)
            })
            .collect()
    }

    fn uses_id_list(&self) -> bool {
        self.table.single_key().is_some()
    }

    /// Why `method` cannot be generated for this table, if it cannot
    fn unavailable(&self, method: &DalMethod, searchable: bool) -> Option<String> {
        let archetype = method.archetype();

        if archetype.takes_search() && !searchable {
            return Some("no search fields were selected".to_string());
        }

        if archetype.requires_primary_key() && !self.table.has_primary_key() {
            return Some(format!("table {} has no primary key", self.names.qualified));
        }

        if archetype.requires_single_key() && !self.uses_id_list() {
            return Some(format!(
                "table {} has a composite primary key",
                self.names.qualified
            ));
        }

        None
    }

    /// `differentiators` are the criteria columns of a [`DalMethod::LoadBy`]
    /// and empty otherwise.
    fn expand_dal_method(
        &self,
        w: &mut SourceWriter,
        method: &DalMethod,
        differentiators: &[&Column],
        searchable: bool,
    ) {
        if let Some(reason) = self.unavailable(method, searchable) {
            w.line(format!("// {} is not available: {reason}.", method.name()));
            return;
        }

        let class = &self.names.class_name;
        let name = method.name();
        let target = self.call_target(method.archetype(), differentiators);

        match method {
            DalMethod::LoadAll => {
                let signature = self.signature(format!("List<{class}> {name}("), vec![]);
                command(w, signature, &target, |w| {
                    self.disabled_argument(w);
                    w.line("return Fill(command);");
                });
            }
            DalMethod::LoadList | DalMethod::DeleteList => {
                let ret = if *method == DalMethod::LoadList {
                    format!("List<{class}>")
                } else {
                    "int".to_string()
                };
                let key = self.key_type();
                let signature = format!("public {ret} {name}(IEnumerable<{key}> ids)");
                command(w, signature, &target, |w| {
                    self.id_list_argument(w);
                    if *method == DalMethod::LoadList {
                        w.line("return Fill(command);");
                    } else {
                        w.line("return Execute(command);");
                    }
                });
            }
            DalMethod::LoadAllPaged => {
                let signature = self.signature(
                    format!("List<{class}> {name}("),
                    vec![
                        "int skip".to_string(),
                        "int take".to_string(),
                        "string searchString".to_string(),
                    ],
                );
                command(w, signature, &target, |w| {
                    search_argument(w);
                    w.line(format!(
                        "command.Parameters.Add({}, SqlDbType.Int).Value = skip;",
                        string_literal(SKIP)
                    ));
                    w.line(format!(
                        "command.Parameters.Add({}, SqlDbType.Int).Value = take;",
                        string_literal(TAKE)
                    ));
                    self.disabled_argument(w);
                    w.line("return Fill(command);");
                });
            }
            DalMethod::LoadSingle => {
                let signature = format!("public {class} {name}({})", self.key_arguments());
                command(w, signature, &target, |w| {
                    self.key_parameters(w);
                    w.line(format!("List<{class}> list = Fill(command);"));
                    w.line("return list.Count == 0 ? null : list[0];");
                });
            }
            DalMethod::Save => self.expand_save(w, &target),
            DalMethod::DeleteSingle => {
                let signature = format!("public int {name}({})", self.key_arguments());
                command(w, signature, &target, |w| {
                    self.key_parameters(w);
                    w.line("return Execute(command);");
                });
            }
            DalMethod::DeleteAll => {
                command(w, format!("public int {name}()"), &target, |w| {
                    w.line("return Execute(command);");
                });
            }
            DalMethod::CountAll => {
                let signature = self.signature(format!("int {name}("), vec![]);
                command(w, signature, &target, |w| {
                    self.disabled_argument(w);
                    w.line("return Convert.ToInt32(Scalar(command));");
                });
            }
            DalMethod::CountSearch => {
                let signature =
                    self.signature(format!("int {name}("), vec!["string searchString".to_string()]);
                command(w, signature, &target, |w| {
                    search_argument(w);
                    self.disabled_argument(w);
                    w.line("return Convert.ToInt32(Scalar(command));");
                });
            }
            DalMethod::LoadBy(_) => self.expand_load_by(w, &name, &target, differentiators),
        }
    }

    fn expand_load_by(&self, w: &mut SourceWriter, name: &str, target: &str, columns: &[&Column]) {
        let class = &self.names.class_name;

        let arguments = columns
            .iter()
            .map(|column| {
                let names = self.names.column(column);
                format!("{} {}", self.property_type(column), names.local)
            })
            .collect();

        let signature = self.signature(format!("List<{class}> {name}("), arguments);
        command(w, signature, target, |w| {
            for column in columns {
                let names = self.names.column(column);
                w.line(format!(
                    "{}.Value = {};",
                    self.parameter(column, &names),
                    self.db_value(column, &names.local)
                ));
            }
            self.disabled_argument(w);
            w.line("return Fill(command);");
        });
    }

    /// Upsert through the set procedure; identity values are copied back.
    fn expand_save(&self, w: &mut SourceWriter, target: &str) {
        let class = &self.names.class_name;
        let item = &self.names.local_name;

        command(w, format!("public void Save({class} {item})"), target, |w| {
            for (column, names) in &self.columns {
                if !(column.is_writable() || column.identity) {
                    continue;
                }

                let value = self.db_value(column, &format!("{item}.{}", names.property));

                if column.identity {
                    let local = identity_local(names);
                    w.line(format!("SqlParameter {local} = {};", self.parameter(column, names)));
                    w.line(format!("{local}.Direction = ParameterDirection.InputOutput;"));
                    w.line(format!("{local}.Value = {value};"));
                } else {
                    w.line(format!("{}.Value = {value};", self.parameter(column, names)));
                }
            }

            w.line("Execute(command);");

            for (column, names) in &self.columns {
                if column.identity {
                    let local = identity_local(names);
                    w.line(format!(
                        "{item}.{} = {};",
                        names.property,
                        mapping::convert(&column.ty, &format!("{local}.Value"))
                    ));
                }
            }

            if self.options.dirty_flag {
                w.line(format!("{item}.IsDirty = false;"));
            }
        });
    }

    fn expand_dal_helpers(&self, w: &mut SourceWriter, xml_ids: bool) {
        let class = &self.names.class_name;

        w.block("private SqlCommand CreateCommand(string procedure)", |w| {
            w.line("SqlCommand command = new SqlCommand(procedure, new SqlConnection(_connectionString));");
            w.line("command.CommandType = CommandType.StoredProcedure;");
            w.line("return command;");
        });
        w.blank();

        w.block(format!("private List<{class}> Fill(SqlCommand command)"), |w| {
            w.line("DataTable table = new DataTable();");
            w.line("using (command.Connection)");
            w.block("using (SqlDataAdapter adapter = new SqlDataAdapter(command))", |w| {
                w.line("adapter.Fill(table);");
            });
            w.blank();
            w.line(format!("List<{class}> list = new List<{class}>(table.Rows.Count);"));
            w.block("foreach (DataRow row in table.Rows)", |w| {
                w.line(format!("list.Add(new {class}(row));"));
            });
            w.line("return list;");
        });
        w.blank();

        w.block("private int Execute(SqlCommand command)", |w| {
            w.block("using (command.Connection)", |w| {
                w.line("command.Connection.Open();");
                w.line("return command.ExecuteNonQuery();");
            });
        });
        w.blank();

        w.block("private object Scalar(SqlCommand command)", |w| {
            w.block("using (command.Connection)", |w| {
                w.line("command.Connection.Open();");
                w.line("return command.ExecuteScalar();");
            });
        });

        if xml_ids {
            w.blank();
            w.block("private static string ToIdDocument<T>(IEnumerable<T> ids)", |w| {
                w.line("StringBuilder xml = new StringBuilder(\"<ids>\");");
                w.block("foreach (T id in ids)", |w| {
                    w.line("string text = Convert.ToString(id, CultureInfo.InvariantCulture);");
                    w.line("xml.Append(\"<id>\").Append(SecurityElement.Escape(text)).Append(\"</id>\");");
                });
                w.line("return xml.Append(\"</ids>\").ToString();");
            });
        }
    }

    fn call_target(&self, archetype: Archetype, differentiators: &[&Column]) -> String {
        procedure_name(self.table, archetype, differentiators, self.options).qualified()
    }

    /// `public {head}{arguments})`, appending the disabled switch when the
    /// table has one
    fn signature(&self, head: String, mut arguments: Vec<String>) -> String {
        if self.options.disabled_filter_column(self.table).is_some() {
            arguments.push("bool includeDisabled = false".to_string());
        }
        format!("public {head}{})", arguments.join(", "))
    }

    fn disabled_argument(&self, w: &mut SourceWriter) {
        if self.options.disabled_filter_column(self.table).is_some() {
            w.line(format!(
                "command.Parameters.Add({}, SqlDbType.Bit).Value = includeDisabled;",
                string_literal(INCLUDE_DISABLED)
            ));
        }
    }

    fn id_list_argument(&self, w: &mut SourceWriter) {
        if self.options.dialect.supports_string_split() {
            w.line(format!(
                "command.Parameters.Add({}, SqlDbType.NVarChar, -1).Value = string.Join(\",\", ids);",
                string_literal(ID_LIST)
            ));
        } else {
            w.line(format!(
                "command.Parameters.Add({}, SqlDbType.Xml).Value = ToIdDocument(ids);",
                string_literal(ID_LIST)
            ));
        }
    }

    fn key_type(&self) -> String {
        self.table
            .single_key()
            .map(|key| mapping::storage_type(&key.ty))
            .unwrap_or_default()
    }

    fn key_arguments(&self) -> String {
        self.table
            .primary_key_columns()
            .map(|column| {
                format!(
                    "{} {}",
                    mapping::storage_type(&column.ty),
                    self.names.column(column).local
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn key_parameters(&self, w: &mut SourceWriter) {
        for column in self.table.primary_key_columns() {
            let names = self.names.column(column);
            w.line(format!("{}.Value = {};", self.parameter(column, &names), names.local));
        }
    }

    /// `command.Parameters.Add("@Name", SqlDbType.NVarChar, 50)`
    fn parameter(&self, column: &Column, names: &ColumnNames) -> String {
        let mut add = format!(
            "command.Parameters.Add({}, {}",
            string_literal(&names.parameter),
            mapping::sql_db_type(&column.ty)
        );
        if let Some(size) = mapping::sql_db_size(column) {
            add.push_str(&format!(", {size}"));
        }
        add.push(')');
        add
    }
}

/// A method body wrapped in a `using` block owning the command
fn command(w: &mut SourceWriter, signature: String, target: &str, body: impl FnOnce(&mut SourceWriter)) {
    w.block(signature, |w| {
        w.block(
            format!("using (SqlCommand command = CreateCommand({}))", string_literal(target)),
            body,
        );
    });
}

fn search_argument(w: &mut SourceWriter) {
    w.line(format!(
        "command.Parameters.Add({}, SqlDbType.NVarChar, {SEARCH_STRING_LENGTH}).Value = (object)searchString ?? DBNull.Value;",
        string_literal(SEARCH_STRING)
    ));
}

fn identity_local(names: &ColumnNames) -> String {
    format!("{}Parameter", names.local.trim_start_matches('@'))
}
