//! C# object-model generation: data objects, data-access classes,
//! interfaces, enums and XML loaders.
//!
//! Every data-access call target comes from
//! [`procedure_name`](tablesmith_core::procedure::procedure_name), the same
//! function that names the procedures the SQL generator creates.

mod dal_method;
pub use dal_method::DalMethod;

mod expand;
use expand::Expand;

use tablesmith_core::{Artifact, ArtifactKind, GenerationOptions, Result, Row, Selection, Table};

/// The data object class, named after the table.
pub fn data_object(table: &Table, options: &GenerationOptions) -> Result<Artifact> {
    let expand = Expand::new(table, options)?;
    Ok(Artifact::source(
        expand.names().class_name.clone(),
        expand.expand_object(),
    ))
}

/// The data-access class wrapping every procedure of the table.
///
/// One `LoadBy` method is generated per criteria list of `selection`;
/// search methods need `selection` to carry search fields.
pub fn data_access(
    table: &Table,
    selection: &Selection,
    options: &GenerationOptions,
) -> Result<Artifact> {
    let expand = Expand::new(table, options)?;
    Ok(Artifact::source(
        expand.names().dal_name.clone(),
        expand.expand_dal(selection)?,
    ))
}

pub fn interface(table: &Table, options: &GenerationOptions) -> Result<Artifact> {
    let expand = Expand::new(table, options)?;
    Ok(Artifact::source(
        expand.names().interface_name.clone(),
        expand.expand_interface(),
    ))
}

/// An enum over materialized `rows`, with members named by `name_column` and
/// valued by the integer `value_column`.
pub fn enumeration(
    table: &Table,
    name_column: &str,
    value_column: &str,
    rows: &[Row],
    options: &GenerationOptions,
) -> Result<Artifact> {
    let expand = Expand::new(table, options)?;
    Ok(Artifact::source(
        expand.names().enum_name.clone(),
        expand.expand_enum(name_column, value_column, rows)?,
    ))
}

/// `rows` as an XML data file readable by the [`xml_loader`] class.
pub fn xml_data(table: &Table, rows: &[Row], options: &GenerationOptions) -> Result<Artifact> {
    let expand = Expand::new(table, options)?;
    Ok(Artifact::new(
        expand.names().class_name.clone(),
        ArtifactKind::DataFile,
        expand.expand_xml_data(rows)?,
    ))
}

pub fn xml_loader(table: &Table, options: &GenerationOptions) -> Result<Artifact> {
    let expand = Expand::new(table, options)?;
    Ok(Artifact::source(
        format!("{}XmlLoader", expand.names().class_name),
        expand.expand_xml_loader(),
    ))
}
