use tablesmith_core::{mapping, Column, Dialect};

/// A procedure parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// Parameter name including the leading `@`
    pub name: String,

    pub ty: ParamType,

    /// Default value literal
    pub default: Option<String>,

    /// `OUTPUT` parameters are read back by the caller
    pub output: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParamType {
    /// Rendered type syntax
    Sql(String),

    /// A list of key values; its type depends on the dialect
    IdList,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Param {
        Param {
            name: name.into(),
            ty: ParamType::Sql(ty.into()),
            default: None,
            output: false,
        }
    }

    /// A parameter carrying a column value
    pub fn column(name: impl Into<String>, column: &Column, dialect: Dialect) -> Param {
        Param::new(name, mapping::sql_type_syntax(column, dialect))
    }

    pub fn id_list(name: impl Into<String>) -> Param {
        Param {
            name: name.into(),
            ty: ParamType::IdList,
            default: None,
            output: false,
        }
    }

    pub fn default(mut self, literal: impl Into<String>) -> Param {
        self.default = Some(literal.into());
        self
    }

    pub fn output(mut self) -> Param {
        self.output = true;
        self
    }
}
