use super::{Expr, TableName};

/// `DELETE FROM from WHERE filter`
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub from: TableName,
    pub filter: Option<Expr>,
}
