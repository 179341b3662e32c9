use super::{csharp::is_value_type, sentinel};
use crate::{BaseType, Column, GenerationOptions, SqlType};

/// The C# literal a property starts out with.
///
/// An explicit schema default is translated preserving its meaning. Without
/// one, non-nullable columns (and nullable value-type columns under
/// `convert_nullable_fields`) get the type's zero value and nullable columns
/// get `null`.
pub fn default_value(column: &Column, options: &GenerationOptions) -> String {
    if column.ty.is_unmapped() {
        return sentinel(&column.ty);
    }

    if column.has_default() {
        return translate_default(column);
    }

    let converted = options.convert_nullable_fields && is_value_type(&column.ty);

    if column.nullable && !converted {
        "null".to_string()
    } else {
        zero_value(&column.ty)
    }
}

/// The zero value of the C# storage type of `ty`.
pub fn zero_value(ty: &SqlType) -> String {
    use SqlType::*;

    match ty {
        BigInt | Int | SmallInt | TinyInt => "0",
        Binary | Image | Timestamp | VarBinary => "new byte[0]",
        Bit => "false",
        Char | NChar | NText | NVarChar | Text | VarChar | Xml => "string.Empty",
        Date | DateTime | DateTime2 | SmallDateTime => "DateTime.MinValue",
        DateTimeOffset => "DateTimeOffset.MinValue",
        Decimal | Money | SmallMoney => "0m",
        Float => "0d",
        Real => "0f",
        Time => "TimeSpan.Zero",
        UniqueIdentifier => "Guid.Empty",
        Variant => "null",
        Udt | Structured | Other(_) => return sentinel(ty),
    }
    .to_string()
}

fn translate_default(column: &Column) -> String {
    let expr = strip_parens(&column.default);
    let lower = expr.to_ascii_lowercase();

    if lower == "null" {
        return "null".to_string();
    }

    let translated = match column.base_type() {
        BaseType::Bool => bool_literal(expr),
        BaseType::Integer => numeric_literal(expr).map(str::to_string),
        BaseType::Float => numeric_literal(expr).map(|n| match column.ty {
            SqlType::Real => format!("{n}f"),
            SqlType::Float => {
                if n.contains(['.', 'e', 'E']) {
                    n.to_string()
                } else {
                    format!("{n}d")
                }
            }
            _ => format!("{n}m"),
        }),
        BaseType::Time => time_literal(&column.ty, expr, &lower),
        BaseType::Guid => match lower.as_str() {
            "newid()" | "newsequentialid()" => Some("Guid.NewGuid()".to_string()),
            _ => string_literal(expr).map(|s| format!("new Guid({})", quote(&s))),
        },
        BaseType::String if column.ty.is_binary() || column.ty == SqlType::Variant => None,
        BaseType::String => string_literal(expr).map(|s| quote(&s)),
    };

    translated.unwrap_or_else(|| {
        // Not expressible in C#; keep the zero value but leave a trace
        format!("{} /* SQL default: {} */", zero_value(&column.ty), column.default.trim())
    })
}

/// `((0))` → `0`, `(getdate())` → `getdate()`
fn strip_parens(expr: &str) -> &str {
    let mut expr = expr.trim();

    while expr.starts_with('(') && expr.ends_with(')') && balanced(&expr[1..expr.len() - 1]) {
        expr = expr[1..expr.len() - 1].trim();
    }

    expr
}

fn balanced(expr: &str) -> bool {
    let mut depth = 0i32;
    for ch in expr.chars() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

fn bool_literal(expr: &str) -> Option<String> {
    let value = string_literal(expr).unwrap_or_else(|| expr.to_string());

    match value.to_ascii_lowercase().as_str() {
        "1" | "true" => Some("true".to_string()),
        "0" | "false" => Some("false".to_string()),
        _ => None,
    }
}

fn numeric_literal(expr: &str) -> Option<&str> {
    let digits = expr.strip_prefix('-').unwrap_or(expr);
    let valid = !digits.is_empty()
        && digits.chars().all(|ch| ch.is_ascii_digit() || ch == '.')
        && digits.chars().filter(|ch| *ch == '.').count() <= 1;

    valid.then_some(expr)
}

fn time_literal(ty: &SqlType, expr: &str, lower: &str) -> Option<String> {
    let offset = *ty == SqlType::DateTimeOffset;

    match lower {
        "getdate()" | "current_timestamp" | "sysdatetime()" if offset => {
            Some("DateTimeOffset.Now".to_string())
        }
        "getdate()" | "current_timestamp" | "sysdatetime()" if *ty == SqlType::Time => {
            Some("DateTime.Now.TimeOfDay".to_string())
        }
        "getdate()" | "current_timestamp" | "sysdatetime()" => Some("DateTime.Now".to_string()),
        "getutcdate()" | "sysutcdatetime()" if offset => Some("DateTimeOffset.UtcNow".to_string()),
        "getutcdate()" | "sysutcdatetime()" => Some("DateTime.UtcNow".to_string()),
        "sysdatetimeoffset()" => Some("DateTimeOffset.Now".to_string()),
        _ => {
            let text = quote(&string_literal(expr)?);
            Some(match ty {
                SqlType::Time => format!("TimeSpan.Parse({text}, CultureInfo.InvariantCulture)"),
                SqlType::DateTimeOffset => {
                    format!("DateTimeOffset.Parse({text}, CultureInfo.InvariantCulture)")
                }
                _ => format!("DateTime.Parse({text}, CultureInfo.InvariantCulture)"),
            })
        }
    }
}

/// `'abc'` or `N'abc'` → `abc`, undoubling embedded quotes
fn string_literal(expr: &str) -> Option<String> {
    let expr = expr.strip_prefix(['N', 'n']).unwrap_or(expr);
    let inner = expr.strip_prefix('\'')?.strip_suffix('\'')?;
    Some(inner.replace("''", "'"))
}

/// C# string literal
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch => out.push(ch),
        }
    }
    out.push('"');
    out
}
