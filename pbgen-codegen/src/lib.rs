//! Shared code generation utilities for the pbgen bootstrap generator.
//!
//! This crate provides language-agnostic abstractions used by
//! language-specific generators (e.g., `pbgen-codegen-typescript`).
//!
//! # Module Organization
//!
//! - [`adapters`] - Driver adapter abstractions (AdapterDescriptor, AdapterResolver)
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, BootstrapPlan)
//! - [`pipeline`] - Generation phases, diagnostics and the existence gate

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod adapters;
pub mod builder;
pub mod language;
pub mod pipeline;

#[cfg(test)]
pub(crate) mod testing;
