use clap::Args;
use eyre::Result;

use super::ProjectArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub project: ProjectArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let root = self.project.root()?;
        let config = self.project.config(&root);

        let report = ops::check(&root, &config)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
