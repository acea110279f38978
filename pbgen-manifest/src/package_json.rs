//! Dependency declarations of the consuming project's `package.json`.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Error, Result, error::SourceContext};

/// The subset of `package.json` the verifier reads. Versions are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPackageJson {
    #[serde(default)]
    dependencies: IndexMap<String, serde_json::Value>,
    #[serde(default)]
    dev_dependencies: IndexMap<String, serde_json::Value>,
}

/// Declared dependency names of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestInfo {
    pub dependencies: BTreeSet<String>,
    pub dev_dependencies: BTreeSet<String>,
}

impl ManifestInfo {
    /// Read and parse the `package.json` at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Box::new(Error::ManifestNotFound {
                path: path.to_path_buf(),
            }),
            _ => Box::new(Error::ManifestRead {
                path: path.to_path_buf(),
                source: e,
            }),
        })?;
        Self::parse(&content, path)
    }

    /// Parse `package.json` content; `path` is used for error reporting.
    pub fn parse(content: &str, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let raw: RawPackageJson = serde_json::from_str(content).map_err(|e| {
            SourceContext::new(content, path.display().to_string()).manifest_parse_error(path, e)
        })?;

        Ok(Self {
            dependencies: raw.dependencies.into_keys().collect(),
            dev_dependencies: raw.dev_dependencies.into_keys().collect(),
        })
    }

    /// Whether `package` is declared as a runtime or development dependency.
    pub fn declares(&self, package: &str) -> bool {
        self.dependencies.contains(package) || self.dev_dependencies.contains(package)
    }

    /// Require `package` to be declared.
    pub fn require(&self, package: &str) -> Result<()> {
        if self.declares(package) {
            Ok(())
        } else {
            Err(Error::dependency_missing(package))
        }
    }
}

/// Verify that `package` is declared in the manifest at `manifest_path`.
///
/// Fails with [`Error::ManifestNotFound`], [`Error::ManifestRead`] or
/// [`Error::ManifestParse`] when the manifest cannot be used, and with
/// [`Error::DependencyMissing`] when the package is not declared.
pub fn verify(package: &str, manifest_path: impl AsRef<Path>) -> Result<()> {
    ManifestInfo::load(manifest_path)?.require(package)
}
