mod builder;
pub use builder::TableBuilder;

mod column;
pub use column::Column;

mod table;
pub use table::Table;

mod ty;
pub use ty::{BaseType, SqlType};
