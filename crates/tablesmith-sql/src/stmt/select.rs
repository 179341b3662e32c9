use super::{Expr, TableName};

/// A `SELECT` query over one table
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub projection: Projection,

    pub from: TableName,

    pub filter: Option<Expr>,

    pub order_by: Vec<OrderBy>,

    /// Restricts the result to one page; requires a non-empty `order_by`
    pub page: Option<Page>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    /// Raw column names, in declared order
    Columns(Vec<String>),

    /// `COUNT(*)`
    Count,

    /// `1`, for existence checks
    One,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub column: String,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// Parameters bounding a page of results
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Number of rows to skip
    pub skip: String,

    /// Number of rows to return
    pub take: String,
}

impl Select {
    pub fn new(projection: Projection, from: impl Into<TableName>) -> Select {
        Select {
            projection,
            from: from.into(),
            filter: None,
            order_by: vec![],
            page: None,
        }
    }

    pub fn filter(mut self, filter: Option<Expr>) -> Select {
        self.filter = filter;
        self
    }

    pub fn order_by(mut self, order_by: Vec<OrderBy>) -> Select {
        self.order_by = order_by;
        self
    }

    pub fn page(mut self, page: Page) -> Select {
        self.page = Some(page);
        self
    }
}

impl OrderBy {
    pub fn asc(column: impl Into<String>) -> OrderBy {
        OrderBy {
            column: column.into(),
            direction: Direction::Asc,
        }
    }
}
