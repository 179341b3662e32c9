//! Metadata-driven code generation for SQL Server tables.
//!
//! Every generator is a pure function from a [`Table`] and
//! [`GenerationOptions`] to [`Artifact`] text. [`Batch`] runs many of them
//! over many tables, keeping one failure from stopping the rest.

mod batch;
pub use batch::{Batch, EnumSource, Failure, Report, TableJob, Target};

pub use tablesmith_codegen as codegen;
pub use tablesmith_pages as pages;
pub use tablesmith_sql as sql;

pub use tablesmith_core::{
    mapping, naming, procedure, schema, Archetype, Artifact, ArtifactKind, BaseType, Column,
    Dialect, Error, GenerationOptions, Markup, Result, Row, Selection, SqlType, Table,
};
