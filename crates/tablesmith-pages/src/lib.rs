//! Presentation pages bound to the generated object model: web edit, list
//! and view pages, a desktop form, an MVC controller, and the stylesheet they
//! share.
//!
//! Pages talk to the data-access class through [`DalMethod`] names and to
//! data objects through the same [`TableNames`](tablesmith_core::TableNames)
//! the object model is generated from.
//!
//! [`DalMethod`]: tablesmith_codegen::DalMethod

mod control;
pub use control::{Control, DateMode};

mod render;
use render::Render;

mod style;

use tablesmith_core::{Artifact, ArtifactKind, GenerationOptions, Result, Selection, Table};

/// A layout artifact (markup, designer or view) and the code behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub layout: Artifact,
    pub code: Artifact,
}

impl IntoIterator for Pair {
    type Item = Artifact;
    type IntoIter = std::array::IntoIter<Artifact, 2>;

    fn into_iter(self) -> Self::IntoIter {
        [self.layout, self.code].into_iter()
    }
}

/// Page editing one row. Degraded for tables without a primary key.
pub fn edit_page(table: &Table, options: &GenerationOptions) -> Result<Pair> {
    Ok(Render::new(table, options)?.render_edit())
}

/// Page listing every row, searchable when `selection` carries search
/// fields.
pub fn list_page(table: &Table, selection: &Selection, options: &GenerationOptions) -> Result<Pair> {
    Render::new(table, options)?.render_list(selection)
}

/// Page showing one row. Degraded for tables without a primary key.
pub fn view_page(table: &Table, options: &GenerationOptions) -> Result<Pair> {
    Ok(Render::new(table, options)?.render_view())
}

pub fn desktop_form(table: &Table, options: &GenerationOptions) -> Result<Pair> {
    Ok(Render::new(table, options)?.render_desktop())
}

pub fn service_controller(table: &Table, options: &GenerationOptions) -> Result<Pair> {
    Ok(Render::new(table, options)?.render_service())
}

/// The stylesheet referenced by every page, named by
/// [`GenerationOptions::stylesheet`].
pub fn stylesheet(options: &GenerationOptions) -> Artifact {
    Artifact::new(options.stylesheet.clone(), ArtifactKind::Stylesheet, style::render())
}
