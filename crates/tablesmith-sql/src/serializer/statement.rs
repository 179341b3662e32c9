use super::{Comma, Formatter, Ident, Lines, Newline, ToSql};

use crate::stmt::{
    self, Assignment, Delete, Direction, Insert, OrderBy, Page, Projection, Select, Statement,
    Update,
};

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::Select(stmt) => fmt!(f, stmt ";"),
            Statement::Insert(stmt) => fmt!(f, stmt ";"),
            Statement::Update(stmt) => fmt!(f, stmt ";"),
            Statement::Delete(stmt) => fmt!(f, stmt ";"),
            Statement::Assign { target, value } => fmt!(f, "SET " target " = " value ";"),
            Statement::IfExists {
                query,
                then,
                otherwise,
            } => {
                let keyword = if then.is_empty() {
                    "IF NOT EXISTS ("
                } else {
                    "IF EXISTS ("
                };

                fmt!(f, keyword);
                f.inlined(|f| fmt!(f, &**query));
                fmt!(f, ")");

                if then.is_empty() {
                    block(otherwise, f);
                } else {
                    block(then, f);

                    if !otherwise.is_empty() {
                        fmt!(f, Newline "ELSE");
                        block(otherwise, f);
                    }
                }
            }
        }
    }
}

fn block(stmts: &[Statement], f: &mut Formatter<'_>) {
    fmt!(f, Newline "BEGIN");
    f.nested(|f| {
        for (i, stmt) in stmts.iter().enumerate() {
            if i > 0 {
                fmt!(f, "\n");
            }
            fmt!(f, Newline stmt);
        }
    });
    fmt!(f, Newline "END");
}

impl ToSql for &Select {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match (&self.projection, &self.page) {
            (Projection::Columns(columns), Some(page))
                if !f.serializer.dialect.supports_offset_fetch() =>
            {
                numbered(self, columns, page, f)
            }
            _ => plain(self, f),
        }
    }
}

fn plain(select: &Select, f: &mut Formatter<'_>) {
    fmt!(f, "SELECT");

    match &select.projection {
        Projection::Columns(columns) => f.nested(|f| fmt!(f, Lines(columns.iter().map(Ident)))),
        Projection::Count => fmt!(f, " COUNT(*)"),
        Projection::One => fmt!(f, " 1"),
    }

    let from = &select.from;
    fmt!(f, Newline "FROM " from);

    if let Some(filter) = &select.filter {
        fmt!(f, Newline "WHERE " filter);
    }

    if !select.order_by.is_empty() {
        fmt!(f, Newline "ORDER BY " Comma(&select.order_by));
    }

    if let Some(Page { skip, take }) = &select.page {
        fmt!(f, Newline "OFFSET " skip " ROWS" Newline "FETCH NEXT " take " ROWS ONLY");
    }
}

/// Pagination through a `ROW_NUMBER()` CTE, for servers without
/// `OFFSET ... FETCH`.
fn numbered(select: &Select, columns: &[String], page: &Page, f: &mut Formatter<'_>) {
    fmt!(f, "WITH [Paged] AS" Newline "(");

    f.nested(|f| {
        fmt!(f, Newline "SELECT");
        f.nested(|f| {
            for column in columns {
                fmt!(f, Newline Ident(column) ",");
            }
            fmt!(f, Newline "ROW_NUMBER() OVER (ORDER BY " Comma(&select.order_by) ") AS [RowNumber]");
        });
        let from = &select.from;
        fmt!(f, Newline "FROM " from);

        if let Some(filter) = &select.filter {
            fmt!(f, Newline "WHERE " filter);
        }
    });

    fmt!(f, Newline ")" Newline "SELECT");
    f.nested(|f| fmt!(f, Lines(columns.iter().map(Ident))));
    let Page { skip, take } = page;
    fmt!(
        f,
        Newline "FROM [Paged]"
        Newline "WHERE [RowNumber] BETWEEN " skip " + 1 AND " skip " + " take
        Newline "ORDER BY [RowNumber]"
    );
}

impl ToSql for &OrderBy {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let direction = match self.direction {
            Direction::Asc => " ASC",
            Direction::Desc => " DESC",
        };
        fmt!(f, Ident(&self.column) direction);
    }
}

impl ToSql for &Insert {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let target = &self.target;
        fmt!(f, "INSERT INTO " target);

        if self.columns.is_empty() {
            fmt!(f, " DEFAULT VALUES");
            return;
        }

        fmt!(f, Newline "(");
        f.nested(|f| fmt!(f, Lines(self.columns.iter().map(Ident))));
        fmt!(f, Newline ")" Newline "VALUES" Newline "(");
        f.nested(|f| fmt!(f, Lines(&self.values)));
        fmt!(f, Newline ")");
    }
}

impl ToSql for &Update {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let target = &self.target;
        fmt!(f, "UPDATE " target Newline "SET");
        f.nested(|f| fmt!(f, Lines(&self.assignments)));

        if let Some(filter) = &self.filter {
            fmt!(f, Newline "WHERE " filter);
        }
    }
}

impl ToSql for &Assignment {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let value = &self.value;
        fmt!(f, Ident(&self.column) " = " value);
    }
}

impl ToSql for &Delete {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let from = &self.from;
        fmt!(f, "DELETE FROM " from);

        if let Some(filter) = &self.filter {
            fmt!(f, Newline "WHERE " filter);
        }
    }
}

impl ToSql for &stmt::TableName {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Ident(&self.schema) "." Ident(&self.name));
    }
}
