use clap::Args;
use eyre::Result;
use pbgen_codegen_typescript::PrismaAdapters;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ProvidersCommand {}

impl ProvidersCommand {
    /// Run the providers command
    pub fn run(&self) -> Result<()> {
        ops::providers(&PrismaAdapters::new()).render(&mut TerminalOutput::new());
        Ok(())
    }
}
