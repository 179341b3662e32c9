#[macro_use]
mod error;
pub use error::Error;

pub mod artifact;
pub use artifact::{Artifact, ArtifactKind, Markup};

pub mod mapping;

pub mod naming;
pub use naming::{ColumnNames, Name, TableNames};

mod options;
pub use options::{Dialect, GenerationOptions};

pub mod procedure;
pub use procedure::{Archetype, ProcedureName};

mod row;
pub use row::Row;

pub mod schema;
pub use schema::{BaseType, Column, SqlType, Table};

mod selection;
pub use selection::Selection;

pub mod writer;
pub use writer::SourceWriter;

/// A Result type alias that uses Tablesmith's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
