//! Core operations.
//!
//! This module contains the business logic for pbgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod providers;

use std::path::Path;

pub use check::check;
pub use generate::{GenerateOptions, generate};
use pbgen_codegen::pipeline::{GenerationInputs, Pipeline, TracingPlugin};
use pbgen_codegen_typescript::PrismaAdapters;
use pbgen_manifest::Config;
pub use providers::providers;

/// The pipeline every command runs: Prisma driver adapters, phase tracing.
fn pipeline() -> Pipeline {
    Pipeline::new(PrismaAdapters::new()).plugin(TracingPlugin)
}

fn inputs(root: &Path, config: &Config) -> GenerationInputs {
    GenerationInputs::new(root, &config.target, &config.schema)
}
