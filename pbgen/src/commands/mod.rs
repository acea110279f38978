mod check;
mod generate;
mod providers;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{ArgAction, Args, Parser, Subcommand};
use eyre::{Context, Result};
use generate::GenerateCommand;
use pbgen_manifest::Config;
use providers::ProvidersCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for pbgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "pbgen")]
#[command(version)]
#[command(about = "Generate a Prisma client bootstrap file from schema.prisma")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Providers(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the bootstrap file if it does not exist yet
    Generate(GenerateCommand),

    /// Inspect the schema and dependencies without writing anything
    Check(CheckCommand),

    /// List supported datasource providers and their adapter packages
    Providers(ProvidersCommand),
}

/// Project location flags shared by commands that read a project.
#[derive(Args)]
pub(crate) struct ProjectArgs {
    /// Project root containing package.json and pbgen.toml
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Bootstrap file path, relative to the root (overrides pbgen.toml)
    #[arg(short, long)]
    pub target: Option<PathBuf>,

    /// Prisma schema path, relative to the root (overrides pbgen.toml)
    #[arg(short, long)]
    pub schema: Option<PathBuf>,
}

impl ProjectArgs {
    /// Absolute project root.
    pub fn root(&self) -> Result<PathBuf> {
        std::path::absolute(&self.root)
            .wrap_err_with(|| format!("failed to resolve root '{}'", self.root.display()))
    }

    /// Load `pbgen.toml` from `root` and apply flag overrides.
    pub fn config(&self, root: &Path) -> Config {
        let mut config = Config::discover(root).unwrap_or_exit();
        if let Some(target) = &self.target {
            config.target = target.clone();
        }
        if let Some(schema) = &self.schema {
            config.schema = schema.clone();
        }
        tracing::debug!(root = %root.display(), ?config, "resolved configuration");
        config
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_flags() {
        let cli = Cli::parse_from([
            "pbgen",
            "-vv",
            "generate",
            "--root",
            "app",
            "--target",
            "lib/db.ts",
            "--dry-run",
        ]);
        assert_eq!(cli.verbose(), 2);
        match cli.command {
            Commands::Generate(cmd) => {
                assert_eq!(cmd.project.root, PathBuf::from("app"));
                assert_eq!(cmd.project.target, Some(PathBuf::from("lib/db.ts")));
                assert_eq!(cmd.project.schema, None);
                assert!(cmd.dry_run);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_flags_override_config_file() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("pbgen.toml"),
            "target = \"lib/prisma.ts\"\nschema = \"db/schema.prisma\"\n",
        )
        .unwrap();

        let args = ProjectArgs {
            root: temp.path().to_path_buf(),
            target: None,
            schema: Some(PathBuf::from("other/schema.prisma")),
        };
        let config = args.config(temp.path());

        assert_eq!(config.target, PathBuf::from("lib/prisma.ts"));
        assert_eq!(config.schema, PathBuf::from("other/schema.prisma"));
    }
}
