use crate::{Config, SchemaFile, load_options, write_flat};
use anyhow::{Result, bail};
use clap::Parser;
use console::style;
use std::path::PathBuf;
use tablesmith::{Batch, Report, Target};

#[derive(Parser, Debug)]
pub struct GenerateCommand {
    /// Schema file describing the tables
    #[arg(short, long)]
    schema: PathBuf,

    /// Generation options file; defaults apply when omitted
    #[arg(long)]
    options: Option<PathBuf>,

    /// Directory receiving the artifacts; they are printed when omitted
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Artifact family to generate; repeat for several. All when omitted
    #[arg(short, long = "target")]
    targets: Vec<Target>,
}

impl GenerateCommand {
    pub(crate) fn run(self, config: &Config) -> Result<()> {
        let file = SchemaFile::load(&self.schema)?;
        let options = match &self.options {
            Some(path) => load_options(path)?,
            None => config.options.clone(),
        };

        let mut batch = Batch::new();
        if self.targets.is_empty() {
            batch.targets(config.targets.iter().copied());
        } else {
            batch.targets(self.targets.iter().copied());
        }
        for job in file.jobs()? {
            batch.table(job);
        }

        let report = batch.run(&options);

        match &self.out {
            Some(dir) => {
                println!();
                println!(
                    "  {}",
                    style("Generate Artifacts").cyan().bold().underlined()
                );
                println!();

                let written = write_flat(dir, &report.artifacts)?;
                for (path, artifact) in written.iter().zip(&report.artifacts) {
                    if artifact.degraded {
                        println!(
                            "  {} {}",
                            style("!").yellow().bold(),
                            style(format!("Degraded: {}", path.display())).yellow()
                        );
                    } else {
                        println!(
                            "  {} {}",
                            style("✓").green().bold(),
                            style(format!("Created: {}", path.display())).dim()
                        );
                    }
                }
            }
            None => print_artifacts(&report),
        }

        summarize(&report)
    }
}

fn print_artifacts(report: &Report) {
    for artifact in &report.artifacts {
        println!("{}", style(format!("// {}", artifact.file_name())).dim());
        print!("{}", artifact.body);
        println!();
    }
}

fn summarize(report: &Report) -> Result<()> {
    for failure in &report.failures {
        eprintln!(
            "  {} {}",
            style("✖").red().bold(),
            style(format!(
                "{} ({}): {}",
                failure.table, failure.target, failure.error
            ))
            .red()
        );
    }

    if !report.failures.is_empty() {
        bail!(
            "{} of the requested table targets failed",
            report.failures.len()
        );
    }

    let degraded = report.degraded().count();
    eprintln!();
    eprintln!(
        "  {}",
        style(format!(
            "Generated {} artifacts ({} degraded)",
            report.artifacts.len(),
            degraded
        ))
        .green()
        .bold()
    );
    eprintln!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_parse_from_names() {
        let cmd = GenerateCommand::try_parse_from([
            "generate",
            "--schema",
            "schema.toml",
            "--target",
            "procedures",
            "-t",
            "edit-page",
        ])
        .unwrap();

        assert_eq!(cmd.targets, [Target::Procedures, Target::EditPage]);
        assert!(cmd.out.is_none());

        let err = GenerateCommand::try_parse_from([
            "generate",
            "--schema",
            "schema.toml",
            "--target",
            "pages",
        ])
        .unwrap_err();
        assert!(err.to_string().contains("unknown target `pages`"));
    }
}
