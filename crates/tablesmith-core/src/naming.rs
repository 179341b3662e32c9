//! Identifier normalization and the identifier-domain transforms shared by
//! every generator.
//!
//! All transforms are pure: the same input always produces the same output.
//! Generators never derive names on their own; they read them from
//! [`TableNames`] and [`ColumnNames`] so that independently generated
//! artifacts agree with each other.

mod keywords;

mod name;
pub use name::Name;

mod normalize;
pub use normalize::{is_blacklisted, normalize_identifier, prefix_if_numeric, PLACEHOLDER};

mod table_names;
pub use table_names::{ColumnNames, TableNames};
