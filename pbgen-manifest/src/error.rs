use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for pbgen-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a config parse error from a toml error.
    pub fn config_parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ConfigParse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a config validation error pointing at `span`.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create a package.json parse error from a serde_json error.
    pub fn manifest_parse_error(&self, path: PathBuf, source: serde_json::Error) -> Box<Error> {
        let span = offset_of(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 1)));
        Box::new(Error::ManifestParse {
            path,
            src: self.named_source(),
            span,
            source,
        })
    }
}

/// Byte offset of a 1-based line/column pair, if it lies inside `src`.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    (offset < src.len()).then_some(offset)
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(pbgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse pbgen.toml")]
    #[diagnostic(code(pbgen::config_parse))]
    ConfigParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(pbgen::config_invalid))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("package.json not found at '{path}'")]
    #[diagnostic(
        code(pbgen::manifest_not_found),
        help("run pbgen from the project root, or pass --root")
    )]
    ManifestNotFound { path: PathBuf },

    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(pbgen::manifest_read),
        help("check that package.json is a readable file")
    )]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{path}'")]
    #[diagnostic(code(pbgen::manifest_parse))]
    ManifestParse {
        path: PathBuf,
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid JSON here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing adapter package '{package}'")]
    #[diagnostic(code(pbgen::dependency_missing), help("install it with: {install}"))]
    DependencyMissing {
        /// Exact npm package name.
        package: String,
        /// Shell command that installs the package.
        install: String,
    },
}

impl Error {
    /// Create a dependency-missing error with the npm install suggestion.
    pub fn dependency_missing(package: impl Into<String>) -> Box<Self> {
        let package = package.into();
        let install = format!("npm install {}", package);
        Box::new(Error::DependencyMissing { package, install })
    }
}
