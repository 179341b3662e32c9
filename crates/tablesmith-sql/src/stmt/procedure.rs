use super::{Param, Statement};
use tablesmith_core::ProcedureName;

/// A stored procedure definition
#[derive(Debug, Clone, PartialEq)]
pub struct Procedure {
    pub name: ProcedureName,

    /// One-line description written above the definition
    pub summary: String,

    pub params: Vec<Param>,

    pub body: Vec<Statement>,
}
