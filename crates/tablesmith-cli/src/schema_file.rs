use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tablesmith::{Column, Row, Selection, SqlType, Table, TableJob};

const SCHEMA_FILE_VERSION: u32 = 1;

/// Table descriptions consumed by `tablesmith generate`
///
/// ```toml
/// version = 1
///
/// [[tables]]
/// name = "Game"
/// search = ["Name"]
///
/// [[tables.columns]]
/// name = "Id"
/// type = "int"
/// primary_key = true
/// identity = true
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaFile {
    /// Schema file format version
    version: u32,

    #[serde(default)]
    pub tables: Vec<TableEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableEntry {
    pub name: String,

    #[serde(default)]
    pub schema: String,

    #[serde(default)]
    pub database: String,

    /// In declared order
    #[serde(default)]
    pub columns: Vec<ColumnEntry>,

    #[serde(default)]
    pub sort: Vec<String>,

    #[serde(default)]
    pub search: Vec<String>,

    /// One differentiator list per select-by procedure
    #[serde(default)]
    pub criteria: Vec<Vec<String>>,

    /// Materialized data, keyed by column name
    #[serde(default)]
    pub rows: Vec<toml::Table>,

    #[serde(default, rename = "enum")]
    pub enumeration: Option<EnumEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnEntry {
    pub name: String,

    /// Raw type name, e.g. `nvarchar`
    #[serde(rename = "type")]
    pub ty: String,

    /// `-1` for `MAX`
    #[serde(default)]
    pub length: i32,

    #[serde(default)]
    pub precision: u8,

    #[serde(default)]
    pub scale: u8,

    #[serde(default)]
    pub nullable: bool,

    #[serde(default)]
    pub primary_key: bool,

    #[serde(default)]
    pub identity: bool,

    #[serde(default)]
    pub default: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumEntry {
    /// Column naming the members
    pub name: String,

    /// Integer column valuing the members
    pub value: String,
}

impl SchemaFile {
    /// Load a schema file from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read schema file {}", path.display()))?;
        contents
            .parse()
            .with_context(|| format!("failed to parse schema file {}", path.display()))
    }

    /// One job per table, in file order
    pub fn jobs(&self) -> Result<Vec<TableJob>> {
        self.tables.iter().map(TableEntry::to_job).collect()
    }
}

impl FromStr for SchemaFile {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let file: SchemaFile = toml::from_str(s)?;

        if file.version != SCHEMA_FILE_VERSION {
            bail!(
                "Unsupported schema file version: {}. Expected version {}",
                file.version,
                SCHEMA_FILE_VERSION
            );
        }

        Ok(file)
    }
}

impl TableEntry {
    pub fn to_job(&self) -> Result<TableJob> {
        let table = Table::builder(&self.name)
            .schema(&self.schema)
            .database(&self.database)
            .columns(self.columns.iter().map(ColumnEntry::to_column))
            .build()?;

        let mut selection = Selection::new()
            .sort(self.sort.iter().cloned())
            .search(self.search.iter().cloned());
        for criteria in &self.criteria {
            selection = selection.criteria(criteria.iter().cloned());
        }

        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                to_row(&table, row).with_context(|| format!("{}: row {}", self.name, i + 1))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut job = TableJob::new(table).selection(selection).rows(rows);
        if let Some(enumeration) = &self.enumeration {
            job = job.enumeration(&enumeration.name, &enumeration.value);
        }

        Ok(job)
    }
}

impl ColumnEntry {
    pub fn to_column(&self) -> Column {
        let mut column = Column::new(&self.name, SqlType::parse(&self.ty));
        column.length = self.length;
        column.precision = self.precision;
        column.scale = self.scale;
        column.nullable = self.nullable;
        column.primary_key = self.primary_key;
        column.identity = self.identity;
        column.default = self.default.clone();
        column
    }
}

/// Values follow the table's column order; absent keys stay `NULL`.
fn to_row(table: &Table, values: &toml::Table) -> Result<Row> {
    if let Some(unknown) = values.keys().find(|key| table.column(key).is_none()) {
        bail!("table `{}` has no column `{}`", table.name(), unknown);
    }

    let mut row = Row::new();
    for column in table.columns() {
        let Some(value) = values.get(&column.name) else {
            continue;
        };

        let text = match value {
            toml::Value::String(value) => value.clone(),
            toml::Value::Integer(value) => value.to_string(),
            toml::Value::Float(value) => value.to_string(),
            toml::Value::Boolean(value) => value.to_string(),
            toml::Value::Datetime(value) => value.to_string(),
            toml::Value::Array(_) | toml::Value::Table(_) => {
                bail!("column `{}` holds a nested value", column.name)
            }
        };
        row.insert(&column.name, text);
    }

    Ok(row)
}
