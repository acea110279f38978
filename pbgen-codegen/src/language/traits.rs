//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use pbgen_core::{relative_to, to_import_specifier};

use crate::adapters::AdapterDescriptor;

/// Import path used when the schema does not relocate the generated client.
pub const DEFAULT_CLIENT_IMPORT: &str = "@prisma/client";

/// Resolved inputs for rendering one bootstrap file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapPlan {
    /// Module specifier the Prisma client is imported from.
    pub client_import: String,
    /// Adapter to wire, if one resolved and is installed.
    pub adapter: Option<AdapterDescriptor>,
}

impl BootstrapPlan {
    /// Plan a bootstrap file written to `target`.
    ///
    /// `output_path` is the absolute location of the generated client, as
    /// declared by the schema. Without one the default package import is used.
    pub fn new(
        output_path: Option<&Path>,
        target: &Path,
        adapter: Option<AdapterDescriptor>,
    ) -> Self {
        let client_import = match output_path {
            Some(output) => {
                let target_dir = target.parent().unwrap_or(Path::new(""));
                to_import_specifier(&relative_to(output, target_dir))
            }
            None => DEFAULT_CLIENT_IMPORT.to_string(),
        };
        Self {
            client_import,
            adapter,
        }
    }
}

/// Trait for language-specific bootstrap generators.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "typescript")
    fn language(&self) -> &'static str;

    /// Render the bootstrap source. Must be a pure function of `plan`.
    fn render_bootstrap(&self, plan: &BootstrapPlan) -> String;

    /// Preview the bootstrap file without writing to disk.
    fn preview(&self, target: &Path, plan: &BootstrapPlan) -> PreviewFile {
        PreviewFile {
            path: target.to_path_buf(),
            content: self.render_bootstrap(plan),
        }
    }
}

/// A generated file for preview
#[derive(Debug, Clone)]
pub struct PreviewFile {
    /// Where the file would be written
    pub path: PathBuf,
    /// File content
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_client_import() {
        let plan = BootstrapPlan::new(None, Path::new("/app/server/utils/prisma.ts"), None);
        assert_eq!(plan.client_import, "@prisma/client");
    }

    #[test]
    fn test_relative_client_import() {
        let plan = BootstrapPlan::new(
            Some(Path::new("/app/generated/client")),
            Path::new("/app/server/utils/prisma.ts"),
            None,
        );
        assert_eq!(plan.client_import, "../../generated/client");
    }

    #[test]
    fn test_sibling_client_import_is_prefixed() {
        let plan = BootstrapPlan::new(
            Some(Path::new("/app/server/utils/client")),
            Path::new("/app/server/utils/prisma.ts"),
            None,
        );
        assert_eq!(plan.client_import, "./client");
    }

    #[test]
    fn test_dot_directory_client_import_is_relative() {
        let plan = BootstrapPlan::new(
            Some(Path::new("/app/.generated/client")),
            Path::new("/app/db.ts"),
            None,
        );
        assert_eq!(plan.client_import, "./.generated/client");
    }
}
