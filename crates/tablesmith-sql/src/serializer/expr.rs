use super::{Comma, Delimited, Formatter, ToSql};

use crate::stmt::{BinaryOp, Expr, IdList};

impl ToSql for &Expr {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Expr::Column(name) => fmt!(f, super::Ident(name)),
            Expr::Param(name) | Expr::Literal(name) => fmt!(f, name),
            Expr::BinaryOp { lhs, op, rhs } => {
                let (lhs, op, rhs) = (&**lhs, *op, &**rhs);
                fmt!(f, lhs " " op " " rhs);
            }
            Expr::And(operands) => fmt!(f, Delimited(operands, " AND ")),
            Expr::Or(operands) => fmt!(f, "(" Delimited(operands, " OR ") ")"),
            Expr::IsNull { expr, negate } => {
                let expr = &**expr;
                if *negate {
                    fmt!(f, expr " IS NOT NULL");
                } else {
                    fmt!(f, expr " IS NULL");
                }
            }
            Expr::Contains { expr, pattern } => {
                let (expr, pattern) = (&**expr, &**pattern);
                fmt!(f, expr " LIKE '%' + " pattern " + '%'");
            }
            Expr::Cast { expr, ty } => {
                let expr = &**expr;
                fmt!(f, "CAST(" expr " AS " ty ")");
            }
            Expr::InIdList { expr, list } => {
                let expr = &**expr;
                fmt!(f, expr " IN (" list ")");
            }
            Expr::Func { name, args } => fmt!(f, name "(" Comma(args) ")"),
        }
    }
}

impl ToSql for BinaryOp {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let op = match self {
            BinaryOp::Eq => "=",
            BinaryOp::Ne => "<>",
        };
        fmt!(f, op);
    }
}

/// Expands an id list into a single-column subquery
impl ToSql for &IdList {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let IdList { param, item_ty } = self;

        if f.serializer.dialect.supports_string_split() {
            fmt!(f, "SELECT CAST([value] AS " item_ty ") FROM STRING_SPLIT(" param ", ',')");
        } else {
            fmt!(
                f,
                "SELECT [List].[Item].value('.', '" item_ty "') FROM " param ".nodes('/ids/id') AS [List]([Item])"
            );
        }
    }
}
