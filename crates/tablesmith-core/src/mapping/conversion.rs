use super::sentinel;
use crate::SqlType;

/// Name of the conversion applied to a loosely typed row value.
///
/// Either a `Convert.To*` method or a parenthesized cast such as `(Guid)`.
/// `sql_variant` values are used as-is and yield an empty name.
pub fn conversion_name(ty: &SqlType) -> String {
    use SqlType::*;

    match ty {
        BigInt => "Convert.ToInt64",
        Binary | Image | Timestamp | VarBinary => "(byte[])",
        Bit => "Convert.ToBoolean",
        Char | NChar | NText | NVarChar | Text | VarChar | Xml => "Convert.ToString",
        Date | DateTime | DateTime2 | SmallDateTime => "Convert.ToDateTime",
        DateTimeOffset => "(DateTimeOffset)",
        Decimal | Money | SmallMoney => "Convert.ToDecimal",
        Float => "Convert.ToDouble",
        Int => "Convert.ToInt32",
        Real => "Convert.ToSingle",
        SmallInt => "Convert.ToInt16",
        Time => "(TimeSpan)",
        TinyInt => "Convert.ToByte",
        UniqueIdentifier => "(Guid)",
        Variant => "",
        Udt | Structured | Other(_) => return sentinel(ty),
    }
    .to_string()
}

/// Applies the conversion of `ty` to `expr`.
pub fn convert(ty: &SqlType, expr: &str) -> String {
    let name = conversion_name(ty);

    if ty.is_unmapped() {
        format!("{name} {expr}")
    } else if name.is_empty() {
        expr.to_string()
    } else if name.starts_with('(') {
        format!("{name}{expr}")
    } else {
        format!("{name}({expr})")
    }
}

/// Parses the text of an XML element or attribute into the storage type of
/// `ty`.
pub fn xml_parse(ty: &SqlType, expr: &str) -> String {
    use SqlType::*;

    match ty {
        BigInt => format!("XmlConvert.ToInt64({expr})"),
        Binary | Image | Timestamp | VarBinary => format!("Convert.FromBase64String({expr})"),
        Bit => format!("XmlConvert.ToBoolean({expr})"),
        Char | NChar | NText | NVarChar | Text | VarChar | Xml | Variant => expr.to_string(),
        Date | DateTime | DateTime2 | SmallDateTime => {
            format!("XmlConvert.ToDateTime({expr}, XmlDateTimeSerializationMode.RoundtripKind)")
        }
        DateTimeOffset => format!("XmlConvert.ToDateTimeOffset({expr})"),
        Decimal | Money | SmallMoney => format!("XmlConvert.ToDecimal({expr})"),
        Float => format!("XmlConvert.ToDouble({expr})"),
        Int => format!("XmlConvert.ToInt32({expr})"),
        Real => format!("XmlConvert.ToSingle({expr})"),
        SmallInt => format!("XmlConvert.ToInt16({expr})"),
        Time => format!("XmlConvert.ToTimeSpan({expr})"),
        TinyInt => format!("XmlConvert.ToByte({expr})"),
        UniqueIdentifier => format!("XmlConvert.ToGuid({expr})"),
        Udt | Structured | Other(_) => format!("{} {expr}", sentinel(ty)),
    }
}

/// Formats a non-null value of the storage type of `ty` as XML text.
pub fn xml_format(ty: &SqlType, expr: &str) -> String {
    use SqlType::*;

    match ty {
        Binary | Image | Timestamp | VarBinary => format!("Convert.ToBase64String({expr})"),
        Char | NChar | NText | NVarChar | Text | VarChar | Xml => expr.to_string(),
        Variant => format!("Convert.ToString({expr}, CultureInfo.InvariantCulture)"),
        Date | DateTime | DateTime2 | SmallDateTime => {
            format!("XmlConvert.ToString({expr}, XmlDateTimeSerializationMode.RoundtripKind)")
        }
        BigInt | Bit | DateTimeOffset | Decimal | Float | Int | Money | Real | SmallInt
        | SmallMoney | Time | TinyInt | UniqueIdentifier => format!("XmlConvert.ToString({expr})"),
        Udt | Structured | Other(_) => format!("{} {expr}", sentinel(ty)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_conversions() {
        assert_eq!(convert(&SqlType::Int, "row[\"Id\"]"), "Convert.ToInt32(row[\"Id\"])");
        assert_eq!(
            convert(&SqlType::NVarChar, "row[\"Name\"]"),
            "Convert.ToString(row[\"Name\"])"
        );
        assert_eq!(
            convert(&SqlType::Bit, "row[\"Disabled\"]"),
            "Convert.ToBoolean(row[\"Disabled\"])"
        );
    }

    #[test]
    fn cast_conversions() {
        assert_eq!(convert(&SqlType::UniqueIdentifier, "value"), "(Guid)value");
        assert_eq!(convert(&SqlType::VarBinary, "value"), "(byte[])value");
        assert_eq!(convert(&SqlType::Variant, "value"), "value");
    }

    #[test]
    fn unmapped_conversion_is_visible() {
        assert_eq!(
            convert(&SqlType::Structured, "value"),
            "/* No mapping available for Structured */ value"
        );
    }

    #[test]
    fn xml_round_trip_functions() {
        assert_eq!(xml_parse(&SqlType::Int, "text"), "XmlConvert.ToInt32(text)");
        assert_eq!(xml_parse(&SqlType::NVarChar, "text"), "text");
        assert_eq!(xml_format(&SqlType::Bit, "value"), "XmlConvert.ToString(value)");
        assert_eq!(
            xml_format(&SqlType::Image, "value"),
            "Convert.ToBase64String(value)"
        );
    }

    #[test]
    fn xml_functions_cover_every_type() {
        use SqlType::*;

        let types = [
            BigInt, Binary, Bit, Char, Date, DateTime, DateTime2, DateTimeOffset, Decimal, Float,
            Image, Int, Money, NChar, NText, NVarChar, Real, SmallDateTime, SmallInt, SmallMoney,
            Text, Time, Timestamp, TinyInt, UniqueIdentifier, VarBinary, VarChar, Variant, Xml,
            Udt, Structured, Other("hierarchy".to_string()),
        ];

        for ty in &types {
            let parsed = xml_parse(ty, "text");
            let formatted = xml_format(ty, "value");
            assert!(parsed.contains("text"), "{ty:?}: {parsed}");
            assert!(formatted.contains("value"), "{ty:?}: {formatted}");
            assert_eq!(super::super::is_sentinel(&formatted), ty.is_unmapped(), "{ty:?}");
        }

        assert_eq!(xml_format(&Money, "value"), "XmlConvert.ToString(value)");
        assert_eq!(xml_parse(&SmallMoney, "text"), "XmlConvert.ToDecimal(text)");
    }
}
