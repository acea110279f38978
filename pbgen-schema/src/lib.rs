//! Prisma schema inspection for the pbgen bootstrap generator.
//!
//! Reads `schema.prisma` and extracts the two facts the generator needs: where
//! the Prisma client is emitted and which datasource provider is in use.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod extract;

use std::path::{Path, PathBuf};

pub use error::{Error, Result};
pub use extract::{Directive, SchemaExtraction, extract};

/// Facts derived from a schema file. Recomputed on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaInfo {
    /// Absolute location of the generated Prisma client, if declared.
    pub output_path: Option<PathBuf>,
    /// Datasource provider identifier, as written in the schema.
    pub provider: Option<String>,
}

impl SchemaInfo {
    /// Build schema info from raw directives.
    ///
    /// A relative `output` is resolved against the schema file's directory,
    /// which is how Prisma itself interprets it.
    pub fn from_extraction(schema_path: &Path, extraction: SchemaExtraction) -> Self {
        let schema_dir = schema_path.parent().unwrap_or(Path::new(""));
        Self {
            output_path: extraction
                .output
                .map(|output| pbgen_core::absolutize(schema_dir, Path::new(&output))),
            provider: extraction.provider,
        }
    }

    /// Read and extract the schema at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = read_schema(path)?;
        Ok(Self::from_extraction(path, extract(&text)))
    }

    /// Directives the schema did not declare.
    pub fn missing_directives(&self) -> Vec<Directive> {
        let mut missing = Vec::new();
        if self.output_path.is_none() {
            missing.push(Directive::Output);
        }
        if self.provider.is_none() {
            missing.push(Directive::Provider);
        }
        missing
    }
}

/// Read the raw schema text.
///
/// A missing file yields [`Error::NotFound`]; any other failure yields
/// [`Error::Read`].
pub fn read_schema(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| Error::io(path, e))
}
