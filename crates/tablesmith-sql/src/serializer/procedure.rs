use super::{Formatter, Ident, Lines, Newline, ToSql};

use crate::stmt::{Param, ParamType, Procedure};

impl ToSql for &Procedure {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let qualified = &self.name.qualified();
        let summary = &self.summary;

        fmt!(f, "-- " summary "\n");
        drop_guard(qualified, f);
        fmt!(f, "GO\n\nCREATE PROCEDURE " qualified);
        f.nested(|f| fmt!(f, Lines(&self.params)));
        fmt!(f, "\nAS\nBEGIN");

        f.nested(|f| {
            fmt!(f, Newline "SET NOCOUNT ON;");

            for stmt in &self.body {
                fmt!(f, "\n" Newline stmt);
            }
        });

        fmt!(f, "\nEND\nGO\n");

        if let Some(principal) = f.serializer.grant {
            fmt!(f, "\nGRANT EXECUTE ON " qualified " TO " Ident(principal) ";\nGO\n");
        }
    }
}

fn drop_guard(qualified: &String, f: &mut Formatter<'_>) {
    if f.serializer.dialect.supports_drop_if_exists() {
        fmt!(f, "DROP PROCEDURE IF EXISTS " qualified ";\n");
    } else {
        let literal = &format!("N'{}'", qualified.replace('\'', "''"));
        fmt!(
            f,
            "IF OBJECT_ID(" literal ", N'P') IS NOT NULL\n    DROP PROCEDURE " qualified ";\n"
        );
    }
}

impl ToSql for &Param {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let id_list_type = f.serializer.id_list_type();

        fmt!(f, &self.name " ");

        match &self.ty {
            ParamType::Sql(ty) => fmt!(f, ty),
            ParamType::IdList => fmt!(f, id_list_type),
        }

        if let Some(default) = &self.default {
            fmt!(f, " = " default);
        }

        if self.output {
            fmt!(f, " OUTPUT");
        }
    }
}
