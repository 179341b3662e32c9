mod dal;
mod enumeration;
mod interface;
mod object;
mod xml;

use tablesmith_core::{
    mapping, Column, ColumnNames, GenerationOptions, Result, SourceWriter, Table, TableNames,
};

pub(crate) struct Expand<'a> {
    /// The table being expanded
    table: &'a Table,

    names: TableNames,

    /// Every column with its names, in declared order
    columns: Vec<(&'a Column, ColumnNames)>,

    options: &'a GenerationOptions,
}

impl<'a> Expand<'a> {
    pub(crate) fn new(table: &'a Table, options: &'a GenerationOptions) -> Result<Expand<'a>> {
        table.ensure_columns()?;

        let names = TableNames::new(table);
        let columns = names.columns(table);

        Ok(Expand {
            table,
            names,
            columns,
            options,
        })
    }

    pub(crate) fn names(&self) -> &TableNames {
        &self.names
    }

    /// Writes the file header, `using` directives, and opens the namespace.
    fn preamble(&self, w: &mut SourceWriter, usings: &[&str]) {
        w.line("// <auto-generated />");
        for using in usings {
            w.line(format!("using {using};"));
        }
        w.blank();
        w.open(format!("namespace {}", self.options.namespace));
    }

    fn property_type(&self, column: &Column) -> String {
        mapping::csharp_type(column, self.options)
    }

    /// Whether the property of `column` can hold `null`
    fn holds_null(&self, column: &Column) -> bool {
        mapping::holds_null(column, self.options)
    }

    /// Reads `column` from `DataRow row`, guarding `DBNull` for nullable
    /// columns.
    fn read_row(&self, column: &Column) -> String {
        let cell = format!("row[{}]", string_literal(&column.name));
        let value = mapping::convert(&column.ty, &cell);

        if !column.nullable {
            return value;
        }

        let null = if !self.holds_null(column) {
            mapping::zero_value(&column.ty)
        } else if mapping::is_value_type(&column.ty) {
            format!("({})null", self.property_type(column))
        } else {
            "null".to_string()
        };

        format!(
            "row.IsNull({}) ? {null} : {value}",
            string_literal(&column.name)
        )
    }

    /// `expr`, or `(object)expr ?? DBNull.Value` when it may be null
    fn db_value(&self, column: &Column, expr: &str) -> String {
        if self.holds_null(column) {
            format!("(object){expr} ?? DBNull.Value")
        } else {
            expr.to_string()
        }
    }
}

fn summary(w: &mut SourceWriter, text: &str) {
    w.line("/// <summary>");
    w.line(format!("/// {}", xml_escape(text)));
    w.line("/// </summary>");
}

/// A C# string literal
pub(crate) fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            ch => out.push(ch),
        }
    }
    out.push('"');
    out
}

pub(crate) fn xml_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            ch => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals() {
        assert_eq!(string_literal("Name"), "\"Name\"");
        assert_eq!(string_literal("a\"b\\c"), "\"a\\\"b\\\\c\"");
        assert_eq!(xml_escape("Tom & <Jerry>"), "Tom &amp; &lt;Jerry&gt;");
    }
}
