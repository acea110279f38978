//! TypeScript file generators.

mod bootstrap_ts;
mod prisma_config_ts;

pub use bootstrap_ts::BootstrapTs;
pub use prisma_config_ts::{PRISMA_CONFIG_FILE, PrismaConfigTs};

/// First line of every file pbgen owns.
pub const GENERATED_HEADER: &str =
    "// Generated by pbgen. pbgen never overwrites this file; delete it to regenerate.";
