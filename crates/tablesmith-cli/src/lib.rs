mod config;
mod generate;
mod options_file;
mod schema_file;
mod targets;
mod writer;

pub use config::Config;
pub use generate::GenerateCommand;
pub use options_file::load_options;
pub use schema_file::{ColumnEntry, EnumEntry, SchemaFile, TableEntry};
pub use targets::TargetsCommand;
pub use writer::write_flat;

use anyhow::Result;
use clap::Parser;

/// Tablesmith command-line front end
pub struct TablesmithCli {
    config: Config,
}

impl TablesmithCli {
    /// Create a new TablesmithCli instance with the default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create a new TablesmithCli instance with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse and execute CLI commands from command-line arguments
    pub fn parse_and_run(&self) -> Result<()> {
        let cli = Cli::parse();
        self.run(cli)
    }

    /// Parse and execute CLI commands from an iterator of arguments
    pub fn parse_from<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;
        self.run(cli)
    }

    fn run(&self, cli: Cli) -> Result<()> {
        match cli.command {
            Command::Generate(cmd) => cmd.run(&self.config),
            Command::Targets(cmd) => cmd.run(),
        }
    }
}

impl Default for TablesmithCli {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Parser, Debug)]
#[command(name = "tablesmith")]
#[command(about = "Tablesmith - data-access code generator for relational tables")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Generate artifacts for every table in a schema file
    Generate(GenerateCommand),

    /// List the artifact families that can be generated
    Targets(TargetsCommand),
}
