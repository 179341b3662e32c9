use super::{Expr, TableName};

/// `UPDATE target SET assignments WHERE filter`
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub target: TableName,
    pub assignments: Vec<Assignment>,
    pub filter: Option<Expr>,
}

/// `[column] = value`
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: Expr,
}
