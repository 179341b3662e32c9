mod delete;
pub use delete::Delete;

mod expr;
pub use expr::{BinaryOp, Expr, IdList};

mod insert;
pub use insert::Insert;

mod name;
pub use name::TableName;

mod param;
pub use param::{Param, ParamType};

mod procedure;
pub use procedure::Procedure;

mod select;
pub use select::{Direction, OrderBy, Page, Projection, Select};

mod update;
pub use update::{Assignment, Update};

/// A statement inside a procedure body
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),

    /// `SET @target = value`
    Assign { target: String, value: Expr },

    /// `IF EXISTS (query) BEGIN then END ELSE BEGIN otherwise END`.
    ///
    /// With an empty `then` branch this renders as `IF NOT EXISTS`.
    IfExists {
        query: Box<Select>,
        then: Vec<Statement>,
        otherwise: Vec<Statement>,
    },
}

impl Statement {
    pub fn assign(target: impl Into<String>, value: Expr) -> Statement {
        Statement::Assign {
            target: target.into(),
            value,
        }
    }
}
