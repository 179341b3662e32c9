#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited, Lines};

mod flavor;

mod ident;
use ident::Ident;

// Fragment serializers
mod expr;
mod procedure;
mod statement;

use crate::stmt::Procedure;

use tablesmith_core::Dialect;

/// Serializes procedure definitions to T-SQL scripts
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Target server version; selects the drop guard, pagination and id-list
    /// syntax.
    dialect: Dialect,

    /// Principal granted `EXECUTE` on every procedure, if any
    grant: Option<&'a str>,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Current block depth, used to indent new lines
    depth: usize,

    /// When true, line breaks collapse into single spaces
    inline: bool,
}

/// Line break followed by indentation for the current depth
struct Newline;

impl Serializer<'_> {
    /// Renders the complete script for `procedure`: drop guard, definition
    /// and optional grant, separated into `GO` batches.
    pub fn serialize(&self, procedure: &Procedure) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            depth: 0,
            inline: false,
        };

        procedure.to_sql(&mut fmt);

        log::trace!("serialized {}", procedure.name);
        ret
    }
}

impl Formatter<'_> {
    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        debug_assert!(self.depth > 0);
        self.depth -= 1;
    }

    /// Runs `f` one level deeper
    fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.indent();
        f(self);
        self.dedent();
    }

    /// Runs `f` with line breaks collapsed
    fn inlined(&mut self, f: impl FnOnce(&mut Self)) {
        let prev = std::mem::replace(&mut self.inline, true);
        f(self);
        self.inline = prev;
    }
}

impl ToSql for Newline {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if f.inline {
            f.dst.push(' ');
        } else {
            f.dst.push('\n');
            for _ in 0..f.depth {
                f.dst.push_str("    ");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stmt::{Expr, OrderBy, Projection, Select, TableName};

    fn render(serializer: &Serializer<'_>, f: impl FnOnce(&mut Formatter<'_>)) -> String {
        let mut dst = String::new();
        let mut fmt = Formatter {
            serializer,
            dst: &mut dst,
            depth: 0,
            inline: false,
        };
        f(&mut fmt);
        dst
    }

    fn game() -> TableName {
        TableName {
            schema: "dbo".to_string(),
            name: "Game".to_string(),
        }
    }

    #[test]
    fn identifiers_escape_closing_brackets() {
        let serializer = Serializer::sql_server(Dialect::SqlServer2012);
        assert_eq!(render(&serializer, |f| fmt!(f, Ident("a]b"))), "[a]]b]");
    }

    #[test]
    fn inlined_select_stays_on_one_line() {
        let serializer = Serializer::sql_server(Dialect::SqlServer2012);
        let select = Select::new(Projection::Columns(vec!["Id".into(), "Name".into()]), game())
            .filter(Some(Expr::eq(Expr::column("Id"), Expr::param("@Id"))))
            .order_by(vec![OrderBy::asc("Name")]);

        let sql = render(&serializer, |f| f.inlined(|f| fmt!(f, &select)));
        assert_eq!(
            sql,
            "SELECT [Id], [Name] FROM [dbo].[Game] WHERE [Id] = @Id ORDER BY [Name] ASC"
        );
    }

    #[test]
    fn nested_boolean_expressions() {
        let serializer = Serializer::sql_server(Dialect::SqlServer2012);
        let expr = Expr::And(vec![
            Expr::Or(vec![Expr::column("A"), Expr::column("B")]),
            Expr::IsNull {
                expr: Box::new(Expr::column("C")),
                negate: true,
            },
        ]);

        assert_eq!(
            render(&serializer, |f| fmt!(f, &expr)),
            "([A] OR [B]) AND [C] IS NOT NULL"
        );
    }
}
