use super::sentinel;
use crate::{Column, GenerationOptions, SqlType};

/// The C# type storing values of `ty`, ignoring nullability.
pub fn storage_type(ty: &SqlType) -> String {
    use SqlType::*;

    match ty {
        BigInt => "long",
        Binary | Image | Timestamp | VarBinary => "byte[]",
        Bit => "bool",
        Char | NChar | NText | NVarChar | Text | VarChar | Xml => "string",
        Date | DateTime | DateTime2 | SmallDateTime => "DateTime",
        DateTimeOffset => "DateTimeOffset",
        Decimal | Money | SmallMoney => "decimal",
        Float => "double",
        Int => "int",
        Real => "float",
        SmallInt => "short",
        Time => "TimeSpan",
        TinyInt => "byte",
        UniqueIdentifier => "Guid",
        Variant => "object",
        Udt | Structured | Other(_) => return sentinel(ty),
    }
    .to_string()
}

/// Whether the C# storage type of `ty` is a value type, which needs `?` to
/// hold `null`.
pub fn is_value_type(ty: &SqlType) -> bool {
    use SqlType::*;

    match ty {
        BigInt | Bit | Date | DateTime | DateTime2 | DateTimeOffset | Decimal | Float | Int
        | Money | Real | SmallDateTime | SmallInt | SmallMoney | Time | TinyInt
        | UniqueIdentifier => true,
        Binary | Char | Image | NChar | NText | NVarChar | Text | Timestamp | VarBinary
        | VarChar | Variant | Xml | Udt | Structured | Other(_) => false,
    }
}

/// The nullable-aware C# type of a column's property.
///
/// Nullable value-type columns become `T?` unless
/// `convert_nullable_fields` is set, in which case `NULL` is read as the
/// type's zero value instead. Nullable reference-type columns are annotated
/// with `?` only when `nullable_references` is set.
pub fn csharp_type(column: &Column, options: &GenerationOptions) -> String {
    let ty = storage_type(&column.ty);

    if column.ty.is_unmapped() || !column.nullable {
        return ty;
    }

    if is_value_type(&column.ty) {
        if options.convert_nullable_fields {
            ty
        } else {
            format!("{ty}?")
        }
    } else if options.nullable_references {
        format!("{ty}?")
    } else {
        ty
    }
}

/// Whether the property of `column` can hold `null`. Nullable value-type
/// columns cannot under `convert_nullable_fields`.
pub fn holds_null(column: &Column, options: &GenerationOptions) -> bool {
    column.nullable && !(options.convert_nullable_fields && is_value_type(&column.ty))
}
