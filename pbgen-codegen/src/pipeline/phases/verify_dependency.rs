//! Dependency verification phase.

use eyre::Result;
use tracing::{info, warn};

use crate::pipeline::{Diagnostic, GenerationContext, Phase, Severity};

/// Checks that the resolved adapter package is declared in `package.json`.
///
/// Any failure (missing, unreadable or malformed manifest, undeclared
/// package) clears the adapter so the client is generated without it.
pub struct VerifyDependencyPhase;

impl VerifyDependencyPhase {
    pub const NAME: &'static str = "verify-dependency";
}

impl Phase for VerifyDependencyPhase {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Verify the adapter package is declared in package.json"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let Some(adapter) = &ctx.adapter else {
            return Ok(());
        };
        let package = adapter.required_dependency.clone();

        match pbgen_manifest::verify(&package, &ctx.inputs.manifest) {
            Ok(()) => {
                info!(package = %package, "adapter package found");
            }
            Err(err) => {
                warn!(package = %package, error = %err, "adapter disabled");
                ctx.adapter = None;
                ctx.add_diagnostic(
                    Diagnostic::from_error(Severity::Warning, Self::NAME, err.as_ref())
                        .at(ctx.inputs.manifest.display().to_string()),
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::{adapters::AdapterResolver, pipeline::GenerationInputs, testing::StubResolver};

    fn context(temp: &TempDir) -> GenerationContext {
        let mut ctx = GenerationContext::new(GenerationInputs::new(
            temp.path(),
            "server/utils/prisma.ts",
            "prisma/schema.prisma",
        ));
        ctx.adapter = StubResolver.resolve("postgresql").ok();
        ctx
    }

    #[test]
    fn test_declared_dependency_keeps_adapter() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{ "dependencies": { "@prisma/adapter-pg": "^6.0.0" } }"#,
        )
        .unwrap();
        let mut ctx = context(&temp);

        VerifyDependencyPhase.run(&mut ctx).unwrap();

        assert!(ctx.adapter.is_some());
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_dev_dependency_keeps_adapter() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{ "devDependencies": { "@prisma/adapter-pg": "^6.0.0" } }"#,
        )
        .unwrap();
        let mut ctx = context(&temp);

        VerifyDependencyPhase.run(&mut ctx).unwrap();

        assert!(ctx.adapter.is_some());
    }

    #[test]
    fn test_missing_dependency_clears_adapter() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), r#"{ "dependencies": {} }"#).unwrap();
        let mut ctx = context(&temp);

        VerifyDependencyPhase.run(&mut ctx).unwrap();

        assert!(ctx.adapter.is_none());
        let diag = ctx.find("pbgen::dependency_missing").unwrap();
        assert!(diag.message.contains("@prisma/adapter-pg"));
        assert_eq!(
            diag.help.as_deref(),
            Some("install it with: npm install @prisma/adapter-pg")
        );
    }

    #[test]
    fn test_missing_manifest_clears_adapter() {
        let temp = TempDir::new().unwrap();
        let mut ctx = context(&temp);

        VerifyDependencyPhase.run(&mut ctx).unwrap();

        assert!(ctx.adapter.is_none());
        assert!(ctx.find("pbgen::manifest_not_found").is_some());
    }

    #[test]
    fn test_unreadable_manifest_clears_adapter() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("package.json")).unwrap();
        let mut ctx = context(&temp);

        VerifyDependencyPhase.run(&mut ctx).unwrap();

        assert!(ctx.adapter.is_none());
        let diag = ctx.find("pbgen::manifest_read").unwrap();
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(
            diag.help.as_deref(),
            Some("check that package.json is a readable file")
        );
    }

    #[test]
    fn test_malformed_manifest_clears_adapter() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{ not json").unwrap();
        let mut ctx = context(&temp);

        VerifyDependencyPhase.run(&mut ctx).unwrap();

        assert!(ctx.adapter.is_none());
        assert!(ctx.find("pbgen::manifest_parse").is_some());
    }

    #[test]
    fn test_without_adapter_does_nothing() {
        let temp = TempDir::new().unwrap();
        let mut ctx = context(&temp);
        ctx.adapter = None;

        VerifyDependencyPhase.run(&mut ctx).unwrap();

        assert!(ctx.diagnostics.is_empty());
    }
}
