//! T-SQL stored-procedure generation.
//!
//! [`generate`] builds a [`stmt::Procedure`] tree for one table and archetype
//! and renders it with a dialect-aware [`Serializer`] into a script artifact.

mod archetype;
use archetype::{Build, Context};

pub mod serializer;
pub use serializer::Serializer;

pub mod stmt;

use tablesmith_core::{
    Archetype, Artifact, Column, Error, GenerationOptions, ProcedureName, Result, Selection, Table,
};

/// Generates the script for one archetype.
///
/// [`SelectManyBy`](Archetype::SelectManyBy) uses the first criteria list of
/// `selection`; see [`select_many_by`] to pick the list explicitly.
pub fn generate(
    table: &Table,
    archetype: Archetype,
    selection: &Selection,
    options: &GenerationOptions,
) -> Result<Artifact> {
    if archetype.takes_differentiators() {
        let Some(criteria) = selection.criteria.first() else {
            return Err(Error::invalid_argument(format!(
                "no criteria fields given for table `{}`",
                table.name()
            )));
        };
        return select_many_by(table, criteria, selection, options);
    }

    let cx = Context::new(table, options, selection)?;
    render(&cx, archetype, &[])
}

/// Generates the select-by script for one list of differentiator columns.
pub fn select_many_by<S: AsRef<str>>(
    table: &Table,
    differentiators: &[S],
    selection: &Selection,
    options: &GenerationOptions,
) -> Result<Artifact> {
    let cx = Context::new(table, options, selection)?;
    let columns = table.resolve(differentiators)?;
    render(&cx, Archetype::SelectManyBy, &columns)
}

/// Generates every archetype for `table`: one select-by script per criteria
/// list and one script for each other archetype. Search archetypes are
/// skipped when `selection` has no search fields.
pub fn generate_all(
    table: &Table,
    selection: &Selection,
    options: &GenerationOptions,
) -> Result<Vec<Artifact>> {
    let mut artifacts = vec![];

    for archetype in Archetype::ALL {
        if archetype.takes_search() && selection.search.is_empty() {
            continue;
        }

        if archetype.takes_differentiators() {
            for criteria in &selection.criteria {
                artifacts.push(select_many_by(table, criteria, selection, options)?);
            }
        } else {
            artifacts.push(generate(table, archetype, selection, options)?);
        }
    }

    Ok(artifacts)
}

fn render(cx: &Context<'_>, archetype: Archetype, differentiators: &[&Column]) -> Result<Artifact> {
    let name = cx.procedure_name(archetype, differentiators);

    let result = archetype::build(cx, archetype, differentiators)
        .map_err(|err| err.context(tablesmith_core::err!("procedure {}", name.name())))?;

    Ok(match result {
        Build::Procedure(procedure) => {
            let body = Serializer::new(cx.options).serialize(&procedure);
            Artifact::script(name.name(), body)
        }
        Build::Degraded(reason) => degraded(&name, &reason),
    })
}

fn degraded(name: &ProcedureName, reason: &str) -> Artifact {
    let body = format!("-- {name} was not generated: {reason}.\n");
    Artifact::script(name.name(), body).degraded()
}
