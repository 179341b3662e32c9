//! Type transforms from a column's SQL type to every representation the
//! generators need.
//!
//! Each transform is total over [`SqlType`](crate::SqlType). Types without a
//! mapping produce [`sentinel`] text at the point of use, so a single gap
//! never aborts a batch and is easy to find by inspection.

mod conversion;
pub use conversion::{conversion_name, convert, xml_parse, xml_format};

mod csharp;
pub use csharp::{csharp_type, holds_null, is_value_type, storage_type};

mod default;
pub use default::{default_value, zero_value};

mod sql;
pub use sql::{sql_db_size, sql_db_type, sql_type_syntax};

use crate::SqlType;

/// Marker embedded wherever a type has no mapping.
pub fn sentinel(ty: &SqlType) -> String {
    format!("/* No mapping available for {ty} */")
}

/// Returns `true` if `text` contains a [`sentinel`] marker.
pub fn is_sentinel(text: &str) -> bool {
    text.contains("/* No mapping available for ")
}
