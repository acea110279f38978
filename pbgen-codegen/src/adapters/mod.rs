//! Driver adapter abstractions.
//!
//! A Prisma driver adapter is the JavaScript package that connects the
//! generated client to a database driver. The language generator supplies a
//! concrete [`AdapterResolver`]; the pipeline only deals in descriptors.
//!
//! - [`AdapterDescriptor`] - what the bootstrap needs to wire one adapter
//! - [`ImportSpec`] - an import statement the adapter snippet depends on
//! - [`AdapterResolver`] - provider identifier to descriptor lookup

mod descriptor;
mod resolver;

pub use descriptor::{AdapterDescriptor, ImportSpec};
pub use resolver::{AdapterResolver, ProviderInfo, UnknownProvider};
