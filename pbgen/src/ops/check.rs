//! Check operation - read-only inspection of the project.

use std::path::Path;

use eyre::{Context, Result};
use pbgen_manifest::Config;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the pipeline phases without rendering or writing, and reports what
/// a `generate` would produce.
pub fn check(root: &Path, config: &Config) -> Result<CheckReport> {
    let inputs = super::inputs(root, config);
    let target_exists = inputs
        .target
        .try_exists()
        .wrap_err_with(|| format!("failed to check '{}'", inputs.target.display()))?;

    let ctx = super::pipeline()
        .run(inputs)
        .wrap_err("Validation failed")?;
    let plan = ctx.plan();

    Ok(CheckReport {
        schema_path: ctx.inputs.schema.clone(),
        output_path: ctx.output_path().map(Path::to_path_buf),
        provider: ctx.provider().map(str::to_string),
        client_import: plan.client_import,
        adapter: plan.adapter.map(|a| a.required_dependency),
        target: ctx.inputs.target.clone(),
        target_exists,
        diagnostics: ctx.diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_check_reports_missing_dependency() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("prisma")).unwrap();
        fs::write(
            temp.path().join("prisma/schema.prisma"),
            "datasource db {\n  provider = \"sqlite\"\n}\n",
        )
        .unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();

        let report = check(temp.path(), &Config::default()).unwrap();

        assert!(!report.is_ready());
        assert_eq!(report.provider.as_deref(), Some("sqlite"));
        assert_eq!(report.client_import, "@prisma/client");
        assert_eq!(report.adapter, None);
        assert!(!report.target_exists);
        assert!(
            report
                .diagnostics
                .iter()
                .any(|d| d.is("pbgen::dependency_missing")
                    && d.message.contains("@prisma/adapter-better-sqlite3"))
        );
        assert!(!temp.path().join("server").exists());
    }

    #[test]
    fn test_check_without_schema() {
        let temp = TempDir::new().unwrap();

        let report = check(temp.path(), &Config::default()).unwrap();

        assert!(report.is_ready());
        assert_eq!(report.output_path, None);
        assert_eq!(report.provider, None);
        assert!(
            report
                .diagnostics
                .iter()
                .any(|d| d.is("pbgen::schema_not_found"))
        );
    }
}
