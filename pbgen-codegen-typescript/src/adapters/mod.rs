//! Driver adapter implementations for TypeScript code generation.
//!
//! - [`PrismaAdapters`] - Prisma driver adapters keyed by datasource provider

mod prisma;

pub use prisma::{DriverFamily, PrismaAdapters};
