//! Core utilities and types for the pbgen bootstrap generator.
//!
//! This crate provides the file-writing and path primitives shared by the
//! other pbgen crates.

mod file;
pub mod paths;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult, write_file};
// Path utilities
pub use paths::{absolutize, normalize, relative_to, to_import_specifier};
