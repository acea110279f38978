//! TypeScript code generator for the pbgen Prisma bootstrap generator.
//!
//! This crate renders the bootstrap module a Nuxt server imports to get its
//! Prisma client, and knows which Prisma driver adapter each datasource
//! provider needs.
//!
//! # Usage
//!
//! ```ignore
//! use pbgen_codegen::pipeline::{GenerationInputs, Pipeline};
//! use pbgen_codegen_typescript::{Generator, PrismaAdapters};
//!
//! let inputs = GenerationInputs::new(root, "server/utils/prisma.ts", "prisma/schema.prisma");
//! let outcome = Pipeline::new(PrismaAdapters).ensure(inputs, &Generator)?;
//! ```
//!
//! # Generated Output
//!
//! - `server/utils/prisma.ts` - lazily created client, teardown hook and the
//!   `Prisma` namespace re-export
//! - `prisma.config.ts` - optional Prisma CLI config scaffold

mod code_file;
mod generator;

pub mod adapters;
pub mod ast;
pub mod files;

pub use adapters::{DriverFamily, PrismaAdapters};
pub use code_file::{CodeFile, RawCode};
pub use generator::Generator;
pub use pbgen_codegen::language::{BootstrapPlan, LanguageCodegen, PreviewFile};
