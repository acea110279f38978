//! Diagnostic types for the generation pipeline.
//!
//! Failures on optional branches (schema directives, adapter resolution,
//! dependency verification) are downgraded to diagnostics so generation can
//! continue with a plain client.

use std::{error::Error as _, fmt};

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// A fatal error that prevents further processing.
    Error,
    /// A warning that doesn't prevent processing but should be addressed.
    Warning,
    /// Informational message about the generation process.
    Info,
}

impl Severity {
    /// Returns true if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns true if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message from a pipeline phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The phase that produced this diagnostic.
    pub phase: String,
    /// The diagnostic message.
    pub message: String,
    /// Stable identifier, e.g. `pbgen::dependency_missing`.
    pub code: Option<String>,
    /// Remediation hint.
    pub help: Option<String>,
    /// Optional location, usually a file path.
    pub location: Option<String>,
}

impl Diagnostic {
    fn new(severity: Severity, phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            phase: phase.into(),
            message: message.into(),
            code: None,
            help: None,
            location: None,
        }
    }

    /// Create a new error diagnostic.
    pub fn error(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, phase, message)
    }

    /// Create a new warning diagnostic.
    pub fn warning(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, phase, message)
    }

    /// Create a new info diagnostic.
    pub fn info(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, phase, message)
    }

    /// Downgrade a domain error to a diagnostic, keeping its code and help.
    ///
    /// The message includes the error's source chain.
    pub fn from_error(
        severity: Severity,
        phase: impl Into<String>,
        err: &dyn miette::Diagnostic,
    ) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }

        Self {
            code: err.code().map(|c| c.to_string()),
            help: err.help().map(|h| h.to_string()),
            ..Self::new(severity, phase, message)
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the diagnostic code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set the remediation hint.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Whether this diagnostic carries `code`.
    pub fn is(&self, code: &str) -> bool {
        self.code.as_deref() == Some(code)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_diagnostic_warning() {
        let diag = Diagnostic::warning("read-schema", "no output directive");
        assert!(diag.severity.is_warning());
        assert_eq!(diag.phase, "read-schema");
        assert_eq!(diag.code, None);
    }

    #[test]
    fn test_diagnostic_with_location() {
        let diag = Diagnostic::info("read-schema", "schema not found").at("prisma/schema.prisma");
        assert_eq!(
            diag.to_string(),
            "info: schema not found (at prisma/schema.prisma)"
        );
    }

    #[test]
    fn test_from_error_keeps_code_and_help() {
        let err = pbgen_manifest::Error::dependency_missing("@prisma/adapter-pg");
        let diag = Diagnostic::from_error(Severity::Warning, "verify-dependency", err.as_ref());

        assert!(diag.is("pbgen::dependency_missing"));
        assert_eq!(
            diag.message,
            "missing adapter package '@prisma/adapter-pg'"
        );
        assert_eq!(
            diag.help.as_deref(),
            Some("install it with: npm install @prisma/adapter-pg")
        );
    }

    #[test]
    fn test_from_error_includes_source_chain() {
        let err = pbgen_schema::Error::io(
            PathBuf::from("schema.prisma"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
        );
        let diag = Diagnostic::from_error(Severity::Warning, "read-schema", err.as_ref());

        assert!(diag.is("pbgen::schema_read"));
        assert_eq!(
            diag.message,
            "failed to read schema file 'schema.prisma': permission denied"
        );
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Info.to_string(), "info");
    }
}
