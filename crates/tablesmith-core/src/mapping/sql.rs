use super::sentinel;
use crate::{Column, Dialect, SqlType};

/// T-SQL type syntax for a column, as used in parameter and table
/// declarations.
///
/// Length-carrying types render their declared length, `MAX` for unbounded
/// columns, and `MAX` (or `1` for fixed-width types) when no length was
/// reported. Decimals render precision and scale.
pub fn sql_type_syntax(column: &Column, dialect: Dialect) -> String {
    use SqlType::*;

    let ty = &column.ty;

    if !dialect.supports_date_types() {
        match ty {
            Date | DateTime2 => return "DATETIME".to_string(),
            Time | DateTimeOffset => {
                return format!("/* No mapping available for {ty} before SQL Server 2008 */")
            }
            _ => {}
        }
    }

    match ty {
        BigInt => "BIGINT".to_string(),
        Binary => format!("BINARY({})", length(column)),
        Bit => "BIT".to_string(),
        Char => format!("CHAR({})", length(column)),
        Date => "DATE".to_string(),
        DateTime => "DATETIME".to_string(),
        DateTime2 => fractional("DATETIME2", column),
        DateTimeOffset => fractional("DATETIMEOFFSET", column),
        Decimal => {
            let precision = if column.precision == 0 { 18 } else { column.precision };
            format!("DECIMAL({}, {})", precision, column.scale)
        }
        Float => "FLOAT".to_string(),
        Image => "IMAGE".to_string(),
        Int => "INT".to_string(),
        Money => "MONEY".to_string(),
        NChar => format!("NCHAR({})", length(column)),
        NText => "NTEXT".to_string(),
        NVarChar => format!("NVARCHAR({})", length(column)),
        Real => "REAL".to_string(),
        SmallDateTime => "SMALLDATETIME".to_string(),
        SmallInt => "SMALLINT".to_string(),
        SmallMoney => "SMALLMONEY".to_string(),
        Text => "TEXT".to_string(),
        Time => fractional("TIME", column),
        Timestamp => "TIMESTAMP".to_string(),
        TinyInt => "TINYINT".to_string(),
        UniqueIdentifier => "UNIQUEIDENTIFIER".to_string(),
        VarBinary => format!("VARBINARY({})", length(column)),
        VarChar => format!("VARCHAR({})", length(column)),
        Variant => "SQL_VARIANT".to_string(),
        Xml => "XML".to_string(),
        Udt | Structured | Other(_) => sentinel(ty),
    }
}

fn length(column: &Column) -> String {
    match column.length {
        n if n > 0 => n.to_string(),
        _ if column.ty.accepts_max() => "MAX".to_string(),
        _ => "1".to_string(),
    }
}

/// Fractional seconds precision is only written when reported
fn fractional(keyword: &str, column: &Column) -> String {
    if column.scale == 0 {
        keyword.to_string()
    } else {
        format!("{keyword}({})", column.scale.min(7))
    }
}

/// The `SqlDbType` member used when building a command parameter.
pub fn sql_db_type(ty: &SqlType) -> String {
    if ty.is_unmapped() {
        return sentinel(ty);
    }

    format!("SqlDbType.{ty}")
}

/// Parameter size for length-carrying types; `-1` means `MAX`.
pub fn sql_db_size(column: &Column) -> Option<i32> {
    if column.ty.is_unbounded() {
        return None;
    }

    if !column.ty.carries_length() {
        return None;
    }

    Some(if column.is_max() || column.length <= 0 {
        if column.ty.accepts_max() {
            -1
        } else {
            1
        }
    } else {
        column.length
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syntax(column: Column) -> String {
        sql_type_syntax(&column, Dialect::SqlServer2012)
    }

    #[test]
    fn lengths() {
        assert_eq!(syntax(Column::new("Name", SqlType::NVarChar).length(50)), "NVARCHAR(50)");
        assert_eq!(syntax(Column::new("Body", SqlType::NVarChar).max()), "NVARCHAR(MAX)");
        assert_eq!(syntax(Column::new("Blob", SqlType::VarBinary)), "VARBINARY(MAX)");
        assert_eq!(syntax(Column::new("Flag", SqlType::Char)), "CHAR(1)");
    }

    #[test]
    fn precision_and_scale() {
        assert_eq!(
            syntax(Column::new("Price", SqlType::Decimal).precision(10, 2)),
            "DECIMAL(10, 2)"
        );
        assert_eq!(syntax(Column::new("Qty", SqlType::Decimal)), "DECIMAL(18, 0)");
        assert_eq!(
            syntax(Column::new("At", SqlType::DateTime2).precision(0, 3)),
            "DATETIME2(3)"
        );
    }

    #[test]
    fn dialect_fallbacks() {
        let date = Column::new("Born", SqlType::Date);
        assert_eq!(sql_type_syntax(&date, Dialect::SqlServer2005), "DATETIME");
        assert_eq!(sql_type_syntax(&date, Dialect::SqlServer2008), "DATE");

        let time = Column::new("Opens", SqlType::Time);
        assert!(super::super::is_sentinel(&sql_type_syntax(
            &time,
            Dialect::SqlServer2005
        )));
    }

    #[test]
    fn unmapped() {
        let column = Column::new("Shape", SqlType::Udt);
        assert_eq!(syntax(column), "/* No mapping available for Udt */");
        assert_eq!(sql_db_type(&SqlType::Structured), "/* No mapping available for Structured */");
    }

    #[test]
    fn db_types_and_sizes() {
        assert_eq!(sql_db_type(&SqlType::NVarChar), "SqlDbType.NVarChar");
        assert_eq!(sql_db_type(&SqlType::UniqueIdentifier), "SqlDbType.UniqueIdentifier");
        assert_eq!(sql_db_size(&Column::new("Name", SqlType::NVarChar).length(50)), Some(50));
        assert_eq!(sql_db_size(&Column::new("Body", SqlType::NVarChar).max()), Some(-1));
        assert_eq!(sql_db_size(&Column::new("Id", SqlType::Int)), None);
        assert_eq!(sql_db_size(&Column::new("Notes", SqlType::NText)), None);
    }
}
