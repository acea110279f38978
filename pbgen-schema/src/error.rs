use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for pbgen-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// The schema has not been created yet. Expected on a fresh project.
    #[error("schema file not found at '{path}'")]
    #[diagnostic(
        code(pbgen::schema_not_found),
        help("install Prisma and initialize the schema with: npx prisma init")
    )]
    NotFound { path: PathBuf },

    #[error("failed to read schema file '{path}'")]
    #[diagnostic(
        code(pbgen::schema_read),
        help("check the file permissions and that the schema is valid UTF-8")
    )]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Classify an I/O failure while reading the schema at `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        let path = path.into();
        Box::new(match source.kind() {
            std::io::ErrorKind::NotFound => Error::NotFound { path },
            _ => Error::Read { path, source },
        })
    }

    /// Whether this is the expected "schema not initialized yet" case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
