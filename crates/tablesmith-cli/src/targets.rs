use anyhow::Result;
use clap::Parser;
use console::style;
use tablesmith::Target;

#[derive(Parser, Debug)]
pub struct TargetsCommand {}

impl TargetsCommand {
    pub(crate) fn run(self) -> Result<()> {
        println!();
        println!("  {}", style("Targets").cyan().bold().underlined());
        println!();

        for target in Target::ALL {
            println!("  {} {}", style("•").dim(), target);
        }

        println!();
        Ok(())
    }
}
