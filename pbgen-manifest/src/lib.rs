//! Project manifests for the pbgen bootstrap generator.
//!
//! - [`ManifestInfo`] / [`verify`] read the consuming project's `package.json`
//!   and check that an adapter package is declared.
//! - [`Config`] reads the optional `pbgen.toml`.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod package_json;

pub use config::{CONFIG_FILE, Config, DEFAULT_SCHEMA, DEFAULT_TARGET};
pub use error::{Error, Result, SourceContext};
pub use package_json::{ManifestInfo, verify};

/// File name of the dependency manifest in the project root.
pub const PACKAGE_JSON: &str = "package.json";
