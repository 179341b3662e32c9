use tablesmith_core::{Artifact, Error, GenerationOptions, Result, Row, Selection, Table};

use std::fmt;
use std::str::FromStr;

/// One family of artifacts generated per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// One script per procedure archetype
    Procedures,
    DataObject,
    DataAccess,
    Interface,

    /// Needs an [`EnumSource`] on the job
    Enumeration,

    /// Needs rows on the job
    XmlData,
    XmlLoader,
    EditPage,
    ListPage,
    ViewPage,
    DesktopForm,
    ServiceController,
}

impl Target {
    pub const ALL: [Target; 12] = [
        Target::Procedures,
        Target::DataObject,
        Target::DataAccess,
        Target::Interface,
        Target::Enumeration,
        Target::XmlData,
        Target::XmlLoader,
        Target::EditPage,
        Target::ListPage,
        Target::ViewPage,
        Target::DesktopForm,
        Target::ServiceController,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Target::Procedures => "procedures",
            Target::DataObject => "data-object",
            Target::DataAccess => "data-access",
            Target::Interface => "interface",
            Target::Enumeration => "enum",
            Target::XmlData => "xml-data",
            Target::XmlLoader => "xml-loader",
            Target::EditPage => "edit-page",
            Target::ListPage => "list-page",
            Target::ViewPage => "view-page",
            Target::DesktopForm => "desktop-form",
            Target::ServiceController => "service",
        }
    }

    /// Pages reference the shared stylesheet
    fn is_page(self) -> bool {
        matches!(
            self,
            Target::EditPage | Target::ListPage | Target::ViewPage | Target::ServiceController
        )
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> core::result::Result<Target, String> {
        Target::ALL
            .into_iter()
            .find(|target| target.name() == s)
            .ok_or_else(|| {
                let names: Vec<_> = Target::ALL.iter().map(|target| target.name()).collect();
                format!("unknown target `{s}`; expected one of {}", names.join(", "))
            })
    }
}

/// Columns projected into an enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumSource {
    pub name_column: String,
    pub value_column: String,
}

/// A table together with the caller's field lists and data.
#[derive(Debug, Clone)]
pub struct TableJob {
    pub table: Table,
    pub selection: Selection,

    /// Materialized rows for data files and enums
    pub rows: Vec<Row>,

    pub enumeration: Option<EnumSource>,
}

impl TableJob {
    pub fn new(table: Table) -> TableJob {
        TableJob {
            table,
            selection: Selection::default(),
            rows: vec![],
            enumeration: None,
        }
    }

    pub fn selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self
    }

    pub fn enumeration(mut self, name_column: impl Into<String>, value_column: impl Into<String>) -> Self {
        self.enumeration = Some(EnumSource {
            name_column: name_column.into(),
            value_column: value_column.into(),
        });
        self
    }
}

/// A (table, target) pair that returned an error
#[derive(Debug, Clone)]
pub struct Failure {
    pub table: String,
    pub target: Target,
    pub error: Error,
}

/// Everything a batch produced
#[derive(Debug, Default)]
pub struct Report {
    /// In table order, then target order
    pub artifacts: Vec<Artifact>,
    pub failures: Vec<Failure>,
}

impl Report {
    /// Artifacts standing in for something a schema gap prevented
    pub fn degraded(&self) -> impl Iterator<Item = &Artifact> + '_ {
        self.artifacts.iter().filter(|artifact| artifact.degraded)
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.degraded().next().is_none()
    }
}

/// Runs a set of targets over a set of tables.
///
/// Each (table, target) pair is generated on its own: a contract violation
/// is recorded as a [`Failure`] and the batch moves on.
#[derive(Debug, Default)]
pub struct Batch {
    targets: Vec<Target>,
    jobs: Vec<TableJob>,
}

impl Batch {
    pub fn new() -> Batch {
        Batch::default()
    }

    pub fn target(&mut self, target: Target) -> &mut Self {
        if !self.targets.contains(&target) {
            self.targets.push(target);
        }
        self
    }

    pub fn targets(&mut self, targets: impl IntoIterator<Item = Target>) -> &mut Self {
        for target in targets {
            self.target(target);
        }
        self
    }

    pub fn table(&mut self, job: TableJob) -> &mut Self {
        self.jobs.push(job);
        self
    }

    pub fn run(&self, options: &GenerationOptions) -> Report {
        let mut report = Report::default();

        for job in &self.jobs {
            for &target in &self.targets {
                match generate(job, target, options) {
                    Ok(artifacts) => {
                        for artifact in artifacts {
                            record(&mut report, artifact);
                        }
                    }
                    Err(error) => {
                        log::error!("{}: {target}: {error}", job.table.name());
                        report.failures.push(Failure {
                            table: job.table.name().to_string(),
                            target,
                            error,
                        });
                    }
                }
            }
        }

        if self.targets.iter().any(|target| target.is_page()) && !self.jobs.is_empty() {
            record(&mut report, tablesmith_pages::stylesheet(options));
        }

        report
    }
}

fn record(report: &mut Report, artifact: Artifact) {
    if artifact.degraded {
        log::warn!("{} degraded: {}", artifact.file_name(), artifact.body.trim());
    } else {
        log::debug!("generated {}", artifact.file_name());
    }
    report.artifacts.push(artifact);
}

fn generate(job: &TableJob, target: Target, options: &GenerationOptions) -> Result<Vec<Artifact>> {
    let table = &job.table;
    let selection = &job.selection;

    let artifacts = match target {
        Target::Procedures => tablesmith_sql::generate_all(table, selection, options)?,
        Target::DataObject => vec![tablesmith_codegen::data_object(table, options)?],
        Target::DataAccess => vec![tablesmith_codegen::data_access(table, selection, options)?],
        Target::Interface => vec![tablesmith_codegen::interface(table, options)?],
        Target::Enumeration => {
            let Some(source) = &job.enumeration else {
                log::debug!("{}: no enum columns given, skipping {target}", table.name());
                return Ok(vec![]);
            };
            vec![tablesmith_codegen::enumeration(
                table,
                &source.name_column,
                &source.value_column,
                &job.rows,
                options,
            )?]
        }
        Target::XmlData => {
            if job.rows.is_empty() {
                log::debug!("{}: no rows given, skipping {target}", table.name());
                return Ok(vec![]);
            }
            vec![tablesmith_codegen::xml_data(table, &job.rows, options)?]
        }
        Target::XmlLoader => vec![tablesmith_codegen::xml_loader(table, options)?],
        Target::EditPage => tablesmith_pages::edit_page(table, options)?.into_iter().collect(),
        Target::ListPage => tablesmith_pages::list_page(table, selection, options)?
            .into_iter()
            .collect(),
        Target::ViewPage => tablesmith_pages::view_page(table, options)?.into_iter().collect(),
        Target::DesktopForm => tablesmith_pages::desktop_form(table, options)?
            .into_iter()
            .collect(),
        Target::ServiceController => tablesmith_pages::service_controller(table, options)?
            .into_iter()
            .collect(),
    };

    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_names_round_trip() {
        for target in Target::ALL {
            assert_eq!(target.name().parse::<Target>(), Ok(target));
        }
        assert!("pages".parse::<Target>().unwrap_err().contains("edit-page"));
    }

    #[test]
    fn targets_are_deduplicated() {
        let mut batch = Batch::new();
        batch.targets([Target::Interface, Target::Interface, Target::DataObject]);
        assert_eq!(batch.targets, [Target::Interface, Target::DataObject]);
    }
}
