use super::{Expr, TableName};

/// `INSERT INTO target (columns) VALUES (values)`.
///
/// With no columns this renders as `DEFAULT VALUES`.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub target: TableName,
    pub columns: Vec<String>,
    pub values: Vec<Expr>,
}
