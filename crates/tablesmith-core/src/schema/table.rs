use super::{Column, TableBuilder};
use crate::{Error, Result};

use indexmap::IndexMap;

/// A database table
///
/// Tables are built once by the schema loader and are read-only afterwards.
/// Column order is the declared order and is preserved by every generator.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub(super) name: String,
    pub(super) schema: String,
    pub(super) database: String,
    pub(super) columns: IndexMap<String, Column>,
    pub(super) primary_key: Vec<String>,
}

impl Table {
    pub fn builder(name: impl Into<String>) -> TableBuilder {
        TableBuilder::new(name)
    }

    /// Name of the table
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owning schema, `dbo` unless specified
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// Owning database name, possibly empty
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Columns in declared order
    pub fn columns(&self) -> impl ExactSizeIterator<Item = &Column> + '_ {
        self.columns.values()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    /// Declared position of a column
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.get_index_of(name)
    }

    /// Names of the primary key columns, in declared order
    pub fn primary_key(&self) -> &[String] {
        &self.primary_key
    }

    pub fn primary_key_columns(&self) -> impl ExactSizeIterator<Item = &Column> + '_ {
        self.primary_key.iter().map(|name| &self.columns[name.as_str()])
    }

    pub fn has_primary_key(&self) -> bool {
        !self.primary_key.is_empty()
    }

    /// The primary key column when the key has exactly one column
    pub fn single_key(&self) -> Option<&Column> {
        match &self.primary_key[..] {
            [name] => Some(&self.columns[name.as_str()]),
            _ => None,
        }
    }

    /// The identity column, if any
    pub fn identity(&self) -> Option<&Column> {
        self.columns().find(|column| column.identity)
    }

    /// Columns that are not part of the primary key, in declared order
    pub fn non_key_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns().filter(|column| !column.primary_key)
    }

    /// Resolves caller-supplied column names, keeping the caller's order.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&Column>> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.column(name)
                    .ok_or_else(|| Error::unknown_column(&self.name, name))
            })
            .collect()
    }

    /// Fails when the table has no column to generate anything from.
    pub fn ensure_columns(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(Error::invalid_argument(format!(
                "table `{}` has no columns",
                self.name
            )));
        }
        Ok(())
    }
}
