use tablesmith_core::Table;

use std::fmt;

/// Schema-qualified table name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName {
    pub schema: String,
    pub name: String,
}

impl From<&Table> for TableName {
    fn from(table: &Table) -> Self {
        TableName {
            schema: table.schema().to_string(),
            name: table.name().to_string(),
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.schema, self.name)
    }
}
