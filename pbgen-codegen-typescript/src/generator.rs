//! TypeScript bootstrap generator.

use pbgen_codegen::language::{BootstrapPlan, LanguageCodegen};

use crate::files::BootstrapTs;

/// Renders the Prisma client bootstrap module in TypeScript.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator;

impl Generator {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn render_bootstrap(&self, plan: &BootstrapPlan) -> String {
        BootstrapTs::new(plan).render()
    }
}
