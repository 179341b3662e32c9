use std::fmt;

/// Storage type of a column, as reported by the schema loader.
///
/// The set is closed apart from [`SqlType::Other`], which carries any raw type
/// name the loader could not classify. Every mapping in [`crate::mapping`] is
/// total over this enumeration; types without a mapping resolve to a visible
/// sentinel instead of a guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SqlType {
    BigInt,
    Binary,
    Bit,
    Char,
    Date,
    DateTime,
    DateTime2,
    DateTimeOffset,
    Decimal,
    Float,
    Image,
    Int,
    Money,
    NChar,
    NText,
    NVarChar,
    Real,
    SmallDateTime,
    SmallInt,
    SmallMoney,
    Text,
    Time,
    /// `rowversion`; written by the engine, never by callers
    Timestamp,
    TinyInt,
    UniqueIdentifier,
    VarBinary,
    VarChar,
    /// `sql_variant`
    Variant,
    Xml,
    /// CLR user-defined types (`geography`, `hierarchyid`, ...)
    Udt,
    /// Table-valued types
    Structured,
    /// Unclassified raw type name
    Other(String),
}

/// Semantic grouping of [`SqlType`] used to pick rendering and control logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    Bool,
    Integer,
    Float,
    String,
    Time,
    Guid,
}

impl SqlType {
    /// Classifies a raw type name such as `nvarchar` or `NUMERIC`.
    ///
    /// Never fails: unknown names become [`SqlType::Other`].
    pub fn parse(raw: &str) -> SqlType {
        let lower = raw.trim().to_ascii_lowercase();
        let base = lower.split('(').next().unwrap_or(&lower).trim();

        match base {
            "bigint" => SqlType::BigInt,
            "binary" => SqlType::Binary,
            "bit" => SqlType::Bit,
            "char" => SqlType::Char,
            "date" => SqlType::Date,
            "datetime" => SqlType::DateTime,
            "datetime2" => SqlType::DateTime2,
            "datetimeoffset" => SqlType::DateTimeOffset,
            "decimal" | "numeric" => SqlType::Decimal,
            "float" => SqlType::Float,
            "image" => SqlType::Image,
            "int" | "integer" => SqlType::Int,
            "money" => SqlType::Money,
            "nchar" => SqlType::NChar,
            "ntext" => SqlType::NText,
            "nvarchar" => SqlType::NVarChar,
            "real" => SqlType::Real,
            "smalldatetime" => SqlType::SmallDateTime,
            "smallint" => SqlType::SmallInt,
            "smallmoney" => SqlType::SmallMoney,
            "text" => SqlType::Text,
            "time" => SqlType::Time,
            "timestamp" | "rowversion" => SqlType::Timestamp,
            "tinyint" => SqlType::TinyInt,
            "uniqueidentifier" => SqlType::UniqueIdentifier,
            "varbinary" => SqlType::VarBinary,
            "varchar" => SqlType::VarChar,
            "sql_variant" | "variant" => SqlType::Variant,
            "xml" => SqlType::Xml,
            "udt" | "geography" | "geometry" | "hierarchyid" => SqlType::Udt,
            "structured" => SqlType::Structured,
            _ => SqlType::Other(raw.trim().to_string()),
        }
    }

    pub fn base_type(&self) -> BaseType {
        use SqlType::*;

        match self {
            Bit => BaseType::Bool,
            BigInt | Int | SmallInt | TinyInt => BaseType::Integer,
            Decimal | Float | Money | Real | SmallMoney => BaseType::Float,
            Date | DateTime | DateTime2 | DateTimeOffset | SmallDateTime | Time => BaseType::Time,
            UniqueIdentifier => BaseType::Guid,
            Char | NChar | NText | NVarChar | Text | VarChar | Xml => BaseType::String,
            // No dedicated group; rendered as plain text
            Binary | Image | Timestamp | VarBinary | Variant | Udt | Structured | Other(_) => {
                BaseType::String
            }
        }
    }

    /// Types whose DDL carries a length (`NVARCHAR(50)`).
    pub fn carries_length(&self) -> bool {
        matches!(
            self,
            SqlType::Binary
                | SqlType::Char
                | SqlType::NChar
                | SqlType::NVarChar
                | SqlType::VarBinary
                | SqlType::VarChar
        )
    }

    /// Types that accept `MAX` as their length.
    pub fn accepts_max(&self) -> bool {
        matches!(
            self,
            SqlType::NVarChar | SqlType::VarBinary | SqlType::VarChar
        )
    }

    /// Legacy types that are always unbounded.
    pub fn is_unbounded(&self) -> bool {
        matches!(self, SqlType::Image | SqlType::NText | SqlType::Text)
    }

    pub fn is_binary(&self) -> bool {
        matches!(
            self,
            SqlType::Binary | SqlType::Image | SqlType::Timestamp | SqlType::VarBinary
        )
    }

    /// Unicode character types, whose byte length is twice their char length.
    pub fn is_unicode(&self) -> bool {
        matches!(self, SqlType::NChar | SqlType::NText | SqlType::NVarChar)
    }

    /// Types that no mapping table knows how to represent.
    pub fn is_unmapped(&self) -> bool {
        matches!(self, SqlType::Udt | SqlType::Structured | SqlType::Other(_))
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlType::Other(name) => f.write_str(name),
            ty => write!(f, "{ty:?}"),
        }
    }
}

impl From<&str> for SqlType {
    fn from(value: &str) -> Self {
        SqlType::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_names() {
        assert_eq!(SqlType::parse("NVARCHAR"), SqlType::NVarChar);
        assert_eq!(SqlType::parse("nvarchar(50)"), SqlType::NVarChar);
        assert_eq!(SqlType::parse("numeric"), SqlType::Decimal);
        assert_eq!(SqlType::parse("rowversion"), SqlType::Timestamp);
        assert_eq!(SqlType::parse("geography"), SqlType::Udt);
    }

    #[test]
    fn parse_unknown_name_is_preserved() {
        assert_eq!(
            SqlType::parse(" vector "),
            SqlType::Other("vector".to_string())
        );
        assert_eq!(SqlType::parse("vector").to_string(), "vector");
    }

    #[test]
    fn base_type_groups() {
        assert_eq!(SqlType::Bit.base_type(), BaseType::Bool);
        assert_eq!(SqlType::TinyInt.base_type(), BaseType::Integer);
        assert_eq!(SqlType::Money.base_type(), BaseType::Float);
        assert_eq!(SqlType::DateTimeOffset.base_type(), BaseType::Time);
        assert_eq!(SqlType::UniqueIdentifier.base_type(), BaseType::Guid);
        assert_eq!(SqlType::Xml.base_type(), BaseType::String);
    }

    #[test]
    fn display_uses_type_name() {
        assert_eq!(SqlType::NVarChar.to_string(), "NVarChar");
        assert_eq!(SqlType::Udt.to_string(), "Udt");
    }
}
