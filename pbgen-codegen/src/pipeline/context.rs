//! Generation context passed through pipeline phases.

use std::path::{Path, PathBuf};

use pbgen_core::absolutize;
use pbgen_manifest::PACKAGE_JSON;
use pbgen_schema::SchemaInfo;

use super::diagnostic::{Diagnostic, Severity};
use crate::{adapters::AdapterDescriptor, language::BootstrapPlan};

/// Paths one generation run operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationInputs {
    /// Project root directory.
    pub root: PathBuf,
    /// Where the bootstrap file is written.
    pub target: PathBuf,
    /// The Prisma schema.
    pub schema: PathBuf,
    /// The project's `package.json`.
    pub manifest: PathBuf,
}

impl GenerationInputs {
    /// Resolve `target` and `schema` against `root`.
    pub fn new(root: impl Into<PathBuf>, target: impl AsRef<Path>, schema: impl AsRef<Path>) -> Self {
        let root = root.into();
        Self {
            target: absolutize(&root, target.as_ref()),
            schema: absolutize(&root, schema.as_ref()),
            manifest: root.join(PACKAGE_JSON),
            root,
        }
    }
}

/// Context passed through all pipeline phases.
///
/// Carries the state of one run, accumulating results and diagnostics.
#[derive(Debug)]
pub struct GenerationContext {
    /// The paths this run operates on.
    pub inputs: GenerationInputs,
    /// Schema facts (populated by ReadSchemaPhase when the schema is readable).
    pub schema: Option<SchemaInfo>,
    /// The adapter to wire (set by ResolveAdapterPhase, cleared by
    /// VerifyDependencyPhase when the package is not installed).
    pub adapter: Option<AdapterDescriptor>,
    /// Diagnostics collected during the run.
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationContext {
    /// Create a new generation context.
    pub fn new(inputs: GenerationInputs) -> Self {
        Self {
            inputs,
            schema: None,
            adapter: None,
            diagnostics: Vec::new(),
        }
    }

    /// The datasource provider, if the schema declared one.
    pub fn provider(&self) -> Option<&str> {
        self.schema.as_ref().and_then(|s| s.provider.as_deref())
    }

    /// The absolute client output path, if the schema declared one.
    pub fn output_path(&self) -> Option<&Path> {
        self.schema.as_ref().and_then(|s| s.output_path.as_deref())
    }

    /// Resolve everything the language generator needs.
    pub fn plan(&self) -> BootstrapPlan {
        BootstrapPlan::new(
            self.output_path(),
            &self.inputs.target,
            self.adapter.clone(),
        )
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Add a diagnostic.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Find the first diagnostic with `code`.
    pub fn find(&self, code: &str) -> Option<&Diagnostic> {
        self.diagnostics.iter().find(|d| d.is(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_resolve_against_root() {
        let inputs = GenerationInputs::new("/app", "server/utils/prisma.ts", "prisma/schema.prisma");
        assert_eq!(inputs.target, PathBuf::from("/app/server/utils/prisma.ts"));
        assert_eq!(inputs.schema, PathBuf::from("/app/prisma/schema.prisma"));
        assert_eq!(inputs.manifest, PathBuf::from("/app/package.json"));
    }

    #[test]
    fn test_inputs_keep_absolute_paths() {
        let inputs = GenerationInputs::new("/app", "/srv/prisma.ts", "/db/schema.prisma");
        assert_eq!(inputs.target, PathBuf::from("/srv/prisma.ts"));
        assert_eq!(inputs.schema, PathBuf::from("/db/schema.prisma"));
    }

    #[test]
    fn test_context_creation() {
        let ctx = GenerationContext::new(GenerationInputs::new("/app", "a.ts", "schema.prisma"));
        assert!(ctx.schema.is_none());
        assert!(ctx.adapter.is_none());
        assert!(ctx.diagnostics.is_empty());
        assert_eq!(ctx.plan().client_import, "@prisma/client");
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = GenerationContext::new(GenerationInputs::new("/app", "a.ts", "schema.prisma"));

        ctx.add_warning("test", "test warning");
        ctx.add_diagnostic(Diagnostic::info("test", "just info").with_code("pbgen::test"));

        assert!(!ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.warning_count(), 1);
        assert_eq!(ctx.find("pbgen::test").map(|d| d.message.as_str()), Some("just info"));
    }

    #[test]
    fn test_plan_uses_schema_output() {
        let mut ctx = GenerationContext::new(GenerationInputs::new(
            "/app",
            "server/utils/prisma.ts",
            "prisma/schema.prisma",
        ));
        ctx.schema = Some(SchemaInfo {
            output_path: Some(PathBuf::from("/app/generated/client")),
            provider: Some("sqlite".into()),
        });

        assert_eq!(ctx.provider(), Some("sqlite"));
        assert_eq!(ctx.plan().client_import, "../../generated/client");
    }
}
