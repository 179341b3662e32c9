use super::{Column, Table};
use crate::{Error, Result};

use indexmap::IndexMap;

/// Assembles a [`Table`], deriving its primary key from the column flags.
#[derive(Debug)]
pub struct TableBuilder {
    name: String,
    schema: String,
    database: String,
    columns: Vec<Column>,
}

impl TableBuilder {
    pub(super) fn new(name: impl Into<String>) -> Self {
        TableBuilder {
            name: name.into(),
            schema: "dbo".to_string(),
            database: String::new(),
            columns: vec![],
        }
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        self.columns.extend(columns);
        self
    }

    pub fn build(self) -> Result<Table> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_schema("table name is empty"));
        }

        let mut columns = IndexMap::with_capacity(self.columns.len());

        for column in self.columns {
            if column.name.trim().is_empty() {
                return Err(Error::invalid_schema(format!(
                    "table `{}` has a column without a name",
                    self.name
                )));
            }

            if columns.contains_key(&column.name) {
                return Err(Error::invalid_schema(format!(
                    "table `{}` declares column `{}` twice",
                    self.name, column.name
                )));
            }

            columns.insert(column.name.clone(), column);
        }

        let primary_key = columns
            .values()
            .filter(|column| column.primary_key)
            .map(|column| column.name.clone())
            .collect();

        let schema = if self.schema.trim().is_empty() {
            "dbo".to_string()
        } else {
            self.schema
        };

        Ok(Table {
            name: self.name,
            schema,
            database: self.database,
            columns,
            primary_key,
        })
    }
}
