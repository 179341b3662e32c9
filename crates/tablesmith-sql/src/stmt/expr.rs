/// A scalar or boolean expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column of the statement's table, by raw name
    Column(String),

    /// A parameter, including the leading `@`
    Param(String),

    /// A literal rendered as-is
    Literal(String),

    BinaryOp {
        lhs: Box<Expr>,
        op: BinaryOp,
        rhs: Box<Expr>,
    },

    And(Vec<Expr>),

    Or(Vec<Expr>),

    IsNull {
        expr: Box<Expr>,
        negate: bool,
    },

    /// `expr LIKE '%' + pattern + '%'`
    Contains {
        expr: Box<Expr>,
        pattern: Box<Expr>,
    },

    /// `CAST(expr AS ty)`
    Cast {
        expr: Box<Expr>,
        ty: String,
    },

    /// `expr IN (...)` over the values of an id-list parameter
    InIdList {
        expr: Box<Expr>,
        list: IdList,
    },

    /// Function call such as `SCOPE_IDENTITY()`
    Func {
        name: String,
        args: Vec<Expr>,
    },
}

/// An id-list parameter and the SQL type of its values
#[derive(Debug, Clone, PartialEq)]
pub struct IdList {
    pub param: String,
    pub item_ty: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Eq,
    Ne,
}

impl Expr {
    pub fn column(name: impl Into<String>) -> Expr {
        Expr::Column(name.into())
    }

    pub fn param(name: impl Into<String>) -> Expr {
        Expr::Param(name.into())
    }

    pub fn literal(value: impl Into<String>) -> Expr {
        Expr::Literal(value.into())
    }

    pub fn eq(lhs: Expr, rhs: Expr) -> Expr {
        Expr::BinaryOp {
            lhs: Box::new(lhs),
            op: BinaryOp::Eq,
            rhs: Box::new(rhs),
        }
    }

    pub fn is_null(expr: Expr) -> Expr {
        Expr::IsNull {
            expr: Box::new(expr),
            negate: false,
        }
    }

    pub fn contains(expr: Expr, pattern: Expr) -> Expr {
        Expr::Contains {
            expr: Box::new(expr),
            pattern: Box::new(pattern),
        }
    }

    pub fn cast(expr: Expr, ty: impl Into<String>) -> Expr {
        Expr::Cast {
            expr: Box::new(expr),
            ty: ty.into(),
        }
    }

    pub fn in_id_list(expr: Expr, list: IdList) -> Expr {
        Expr::InIdList {
            expr: Box::new(expr),
            list,
        }
    }

    pub fn func(name: impl Into<String>) -> Expr {
        Expr::Func {
            name: name.into(),
            args: vec![],
        }
    }

    /// Conjunction of `operands`; a single operand is returned unwrapped
    pub fn and_from_vec(mut operands: Vec<Expr>) -> Option<Expr> {
        match operands.len() {
            0 => None,
            1 => operands.pop(),
            _ => Some(Expr::And(operands)),
        }
    }
}
