//! Built-in pipeline phases.
//!
//! - [`ReadSchemaPhase`] - reads the schema and extracts its directives
//! - [`ResolveAdapterPhase`] - maps the datasource provider to an adapter
//! - [`VerifyDependencyPhase`] - checks the adapter package is declared

mod read_schema;
mod resolve_adapter;
mod verify_dependency;

pub use read_schema::{MISSING_DIRECTIVE, ReadSchemaPhase};
pub use resolve_adapter::ResolveAdapterPhase;
pub use verify_dependency::VerifyDependencyPhase;
