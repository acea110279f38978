//! `pbgen.toml` configuration.
//!
//! The file is optional. Every key has a conventional default so a project
//! without a config file gets a Nuxt-style layout.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use miette::SourceSpan;
use serde::Deserialize;

use crate::{Error, Result, error::SourceContext};

/// Name of the config file looked up in the project root.
pub const CONFIG_FILE: &str = "pbgen.toml";
/// Conventional location of the generated bootstrap file.
pub const DEFAULT_TARGET: &str = "server/utils/prisma.ts";
/// Conventional location of the Prisma schema.
pub const DEFAULT_SCHEMA: &str = "prisma/schema.prisma";

const TARGET_EXTENSIONS: &[&str] = &["ts", "mts", "js", "mjs"];

/// Generator configuration. Relative paths are relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Where the bootstrap file is written.
    #[serde(default = "default_target")]
    pub target: PathBuf,

    /// Where the Prisma schema is read from.
    #[serde(default = "default_schema")]
    pub schema: PathBuf,

    /// Create a default `prisma.config.ts` when the project has none.
    #[serde(default)]
    pub scaffold_prisma_config: bool,
}

fn default_target() -> PathBuf {
    PathBuf::from(DEFAULT_TARGET)
}

fn default_schema() -> PathBuf {
    PathBuf::from(DEFAULT_SCHEMA)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: default_target(),
            schema: default_schema(),
            scaffold_prisma_config: false,
        }
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE)
    }
}

impl Config {
    /// Load `pbgen.toml` from `root`, falling back to defaults when absent.
    pub fn discover(root: impl AsRef<Path>) -> Result<Self> {
        let path = root.as_ref().join(CONFIG_FILE);
        if path.is_file() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse a config file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse config content with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let source_ctx = SourceContext::new(content, filename);
        let config: Config =
            toml::from_str(content).map_err(|e| source_ctx.config_parse_error(e))?;
        config.validate(&source_ctx)?;
        Ok(config)
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        let extension = self.target.extension().and_then(|e| e.to_str());
        if !extension.is_some_and(|ext| TARGET_EXTENSIONS.contains(&ext)) {
            return Err(ctx.validation_error_at(
                format!(
                    "target '{}' must be a {} file",
                    self.target.display(),
                    TARGET_EXTENSIONS
                        .iter()
                        .map(|e| format!(".{}", e))
                        .collect::<Vec<_>>()
                        .join("/")
                ),
                key_span(ctx.src(), "target"),
            ));
        }
        Ok(())
    }
}

/// Span of a top-level `key = value` line.
fn key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let rest = trimmed.strip_prefix(key);
        if rest.is_some_and(|r| r.trim_start().starts_with('=')) {
            let start = offset + (line.len() - trimmed.len());
            return Some(SourceSpan::from((start, line.trim().len())));
        }
        offset += line.len();
    }
    None
}
