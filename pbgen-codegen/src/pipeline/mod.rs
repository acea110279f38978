//! Generation pipeline for the bootstrap file.
//!
//! The [`Pipeline`] runs the built-in phases in order and collects
//! diagnostics in a [`GenerationContext`]:
//!
//! - read the schema (`ReadSchemaPhase`)
//! - resolve the driver adapter (`ResolveAdapterPhase`)
//! - verify the adapter package is installed (`VerifyDependencyPhase`)
//!
//! [`Pipeline::ensure`] wraps the phases in the existence gate: when the
//! target already exists nothing is read and nothing is written.
//!
//! # Example
//!
//! ```ignore
//! let pipeline = Pipeline::new(PrismaAdapters).plugin(TracingPlugin);
//! let outcome = pipeline.ensure(inputs, &TypeScriptGenerator)?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::{GenerationContext, GenerationInputs};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::{Plugin, TracingPlugin};
pub use runner::{EnsureOutcome, Pipeline};
