mod desktop;
mod edit;
mod list;
mod service;
mod view;
mod web;

use crate::{Control, Pair};

use tablesmith_codegen::DalMethod;
use tablesmith_core::{
    mapping, Artifact, ArtifactKind, BaseType, Column, ColumnNames, GenerationOptions, Markup, Result,
    SourceWriter, SqlType, Table, TableNames,
};

pub(crate) struct Render<'a> {
    table: &'a Table,

    names: TableNames,

    /// Every column with its names and control, in declared order
    fields: Vec<Field<'a>>,

    options: &'a GenerationOptions,
}

struct Field<'a> {
    column: &'a Column,
    names: ColumnNames,
    control: Control,
}

impl<'a> Render<'a> {
    pub(crate) fn new(table: &'a Table, options: &'a GenerationOptions) -> Result<Render<'a>> {
        table.ensure_columns()?;

        let names = TableNames::new(table);
        let fields = names
            .columns(table)
            .into_iter()
            .map(|(column, names)| Field {
                column,
                names,
                control: Control::for_column(column, options),
            })
            .collect();

        Ok(Render {
            table,
            names,
            fields,
            options,
        })
    }

    /// Fields that get a control, in declared order
    fn rendered(&self) -> impl Iterator<Item = &Field<'a>> + '_ {
        self.fields.iter().filter(|field| field.control.is_rendered())
    }

    fn key_fields(&self) -> impl Iterator<Item = &Field<'a>> + '_ {
        self.fields.iter().filter(|field| field.column.primary_key)
    }

    /// Why pages addressing one row cannot be generated
    fn missing_key(&self) -> Option<String> {
        if self.table.has_primary_key() {
            None
        } else {
            Some(format!("table {} has no primary key", self.names.qualified))
        }
    }

    /// Same file header as the object model, so both land in one namespace
    fn preamble(&self, w: &mut SourceWriter, usings: &[&str]) {
        w.line("// <auto-generated />");
        for using in usings {
            w.line(format!("using {using};"));
        }
        w.blank();
        w.open(format!("namespace {}", self.options.namespace));
    }

    fn summary(&self, w: &mut SourceWriter, text: &str) {
        w.line("/// <summary>");
        w.line(format!("/// {text}"));
        w.line("/// </summary>");
    }

    /// A connection-scoped data-access instance
    fn dal_property(&self, w: &mut SourceWriter) {
        let dal = &self.names.dal_name;
        w.block(format!("private {dal} Dal"), |w| {
            w.line(format!(
                "get {{ return new {dal}(ConfigurationManager.ConnectionStrings[{}].ConnectionString); }}",
                literal(&self.options.namespace)
            ));
        });
    }

    /// `Dal.{method}(args)`
    fn call(&self, method: DalMethod, args: &[String]) -> String {
        format!("Dal.{}({})", method.name(), args.join(", "))
    }

    /// The property value parsed from the text in `expr`, empty text meaning
    /// `null` when the property can hold it
    fn parse_text(&self, column: &Column, expr: &str) -> String {
        let value = from_text(&column.ty, expr);

        if !mapping::holds_null(column, self.options) {
            return value;
        }

        let null = if mapping::is_value_type(&column.ty) {
            format!("({})null", mapping::csharp_type(column, self.options))
        } else {
            "null".to_string()
        };

        format!("{expr}.Length == 0 ? {null} : {value}")
    }

    /// Text shown for the property read by `expr`
    fn display_text(&self, field: &Field<'_>, expr: &str) -> String {
        match field.control {
            Control::Date(mode) => format!(
                "string.Format(CultureInfo.InvariantCulture, {}, {expr})",
                literal(&format!("{{0:{}}}", mode.format()))
            ),
            _ if is_text(&field.column.ty) => expr.to_string(),
            _ => format!("Convert.ToString({expr}, CultureInfo.InvariantCulture)"),
        }
    }

    /// Shows the property read by `expr` in control `id`
    fn bind(&self, field: &Field<'_>, id: &str, expr: &str) -> String {
        match field.control {
            Control::CheckBox if mapping::holds_null(field.column, self.options) => {
                format!("{id}.Checked = {expr} == true;")
            }
            Control::CheckBox => format!("{id}.Checked = {expr};"),
            _ => format!("{id}.Text = {};", self.display_text(field, expr)),
        }
    }

    /// Writes the value of control `id` back into the property at `expr`
    fn fill(&self, field: &Field<'_>, id: &str, expr: &str) -> Option<String> {
        let line = match field.control {
            Control::CheckBox => format!("{expr} = {id}.Checked;"),
            control if control.is_editable() => format!(
                "{expr} = {};",
                self.parse_text(field.column, &format!("{id}.Text"))
            ),
            _ => return None,
        };

        Some(line)
    }

    /// `layout` and `code` with their bodies replaced by a comment naming
    /// the gap
    fn degraded_pair(&self, name: &str, layout: Artifact, code: Artifact, reason: &str) -> Pair {
        let text = format!("{name} was not generated: {reason}.");

        Pair {
            layout: commented(layout, &text),
            code: commented(code, &text),
        }
    }
}

fn commented(artifact: Artifact, text: &str) -> Artifact {
    let body = match artifact.kind {
        ArtifactKind::Markup(Markup::View) => format!("@* {text} *@\n"),
        ArtifactKind::Markup(_) => format!("<%-- {text} --%>\n"),
        _ => format!("// {text}\n"),
    };

    Artifact { body, ..artifact }.degraded()
}

/// Parses non-empty text into the storage type of `ty`.
fn from_text(ty: &SqlType, expr: &str) -> String {
    match ty {
        SqlType::Time => format!("TimeSpan.Parse({expr}, CultureInfo.InvariantCulture)"),
        SqlType::DateTimeOffset => {
            format!("DateTimeOffset.Parse({expr}, CultureInfo.InvariantCulture)")
        }
        ty if ty.base_type() == BaseType::Time => {
            format!("DateTime.Parse({expr}, CultureInfo.InvariantCulture)")
        }
        ty => mapping::xml_parse(ty, expr),
    }
}

/// Types stored as `string`
fn is_text(ty: &SqlType) -> bool {
    mapping::storage_type(ty) == "string"
}

/// A C# string literal
fn literal(value: &str) -> String {
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
