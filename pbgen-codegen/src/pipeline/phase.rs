//! Pipeline phase trait.

use eyre::Result;

use super::GenerationContext;

/// A phase in the generation pipeline.
///
/// Phases run in order and read or modify the generation context.
///
/// Built-in phases:
/// - `ReadSchemaPhase` - reads the schema and extracts its directives
/// - `ResolveAdapterPhase` - maps the datasource provider to an adapter
/// - `VerifyDependencyPhase` - checks the adapter package is declared
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and plugin hooks).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the generation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues should
    /// be recorded as diagnostics instead.
    fn run(&self, ctx: &mut GenerationContext) -> Result<()>;
}
