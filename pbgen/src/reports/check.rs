//! Check command report data structures.

use std::path::PathBuf;

use pbgen_codegen::pipeline::{Diagnostic, Severity};

use super::{
    diagnostics::render_diagnostics,
    output::{Output, Report},
};

/// Report data from project inspection.
#[derive(Debug)]
pub struct CheckReport {
    /// Absolute schema path.
    pub schema_path: PathBuf,
    /// Absolute client output path declared by the schema.
    pub output_path: Option<PathBuf>,
    /// Datasource provider declared by the schema.
    pub provider: Option<String>,
    /// Import specifier the bootstrap would use for the client.
    pub client_import: String,
    /// Adapter package that would be wired, if any.
    pub adapter: Option<String>,
    /// Bootstrap file path.
    pub target: PathBuf,
    /// Whether the bootstrap file exists already.
    pub target_exists: bool,
    /// Diagnostics from the pipeline.
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Whether generation would run without warnings.
    pub fn is_ready(&self) -> bool {
        self.diagnostics
            .iter()
            .all(|d| matches!(d.severity, Severity::Info))
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(out, &self.diagnostics);
        if !self.diagnostics.is_empty() {
            out.newline();
        }

        out.key_value("Schema", &self.schema_path.display().to_string());
        out.key_value(
            "Client output",
            &self
                .output_path
                .as_ref()
                .map_or_else(|| "(default)".to_string(), |p| p.display().to_string()),
        );
        out.key_value("Provider", self.provider.as_deref().unwrap_or("(none)"));
        out.key_value("Client import", &self.client_import);
        out.key_value("Adapter", self.adapter.as_deref().unwrap_or("(none)"));
        out.key_value(
            "Bootstrap file",
            &format!(
                "{} ({})",
                self.target.display(),
                if self.target_exists {
                    "exists, generate is a no-op"
                } else {
                    "missing, generate will create it"
                }
            ),
        );

        if self.is_ready() {
            out.newline();
            out.preformatted("✓ project is ready for generation");
        }
    }
}
