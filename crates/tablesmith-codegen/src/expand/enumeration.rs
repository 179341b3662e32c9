use super::{summary, Expand};

use tablesmith_core::{BaseType, Column, Error, Name, Result, Row, SourceWriter, SqlType};

use std::collections::{HashMap, HashSet};

impl Expand<'_> {
    /// An enum with one member per row, named by `name_column` and valued
    /// by `value_column`.
    pub(crate) fn expand_enum(
        &self,
        name_column: &str,
        value_column: &str,
        rows: &[Row],
    ) -> Result<String> {
        let resolved = self.table.resolve(&[name_column, value_column])?;
        let (name_column, value_column) = (resolved[0], resolved[1]);

        if value_column.base_type() != BaseType::Integer {
            return Err(Error::invalid_argument(format!(
                "enum value column `{}` of table `{}` is not an integer",
                value_column.name,
                self.table.name()
            )));
        }

        let members = members(name_column, value_column, rows)?;

        let mut w = SourceWriter::new();
        self.preamble(&mut w, &["System"]);

        summary(
            &mut w,
            &format!("Rows of {} by {}", self.names.qualified, name_column.name),
        );
        let underlying = match value_column.ty {
            SqlType::BigInt => " : long",
            SqlType::SmallInt => " : short",
            SqlType::TinyInt => " : byte",
            _ => "",
        };
        w.block(
            format!("public enum {}{underlying}", self.names.enum_name),
            |w| {
                for (name, value) in &members {
                    w.line(format!("{name} = {value},"));
                }
            },
        );

        w.close();
        Ok(w.finish())
    }
}

/// Sanitized member names and their values, in row order. Repeated names get
/// the lowest numeric suffix, starting at 2, that no earlier member uses.
fn members(name_column: &Column, value_column: &Column, rows: &[Row]) -> Result<Vec<(String, i64)>> {
    let mut used = HashSet::<String>::new();
    let mut next_suffix = HashMap::<String, usize>::new();
    let mut members = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let raw_value = row.get(&value_column.name).unwrap_or_default().trim();
        let value = raw_value.parse::<i64>().map_err(|_| {
            Error::invalid_argument(format!(
                "row {} has `{raw_value}` in enum value column `{}`",
                i + 1,
                value_column.name
            ))
        })?;

        let base = Name::new(row.get(&name_column.name).unwrap_or_default()).class_name();
        let name = if used.contains(&base) {
            let suffix = next_suffix.entry(base.clone()).or_insert(2);
            while used.contains(&format!("{base}{suffix}")) {
                *suffix += 1;
            }
            let name = format!("{base}{suffix}");
            *suffix += 1;
            name
        } else {
            base
        };

        used.insert(name.clone());
        members.push((name, value));
    }

    Ok(members)
}
