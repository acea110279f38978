//! TypeScript export builder.

use pbgen_codegen::builder::{CodeFragment, Renderable};

/// Builder for `export { ... }` statements.
#[derive(Debug, Clone, Default)]
pub struct Export {
    named: Vec<String>,
}

impl Export {
    pub fn new() -> Self {
        Self::default()
    }

    /// Export a named item.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Render the export statement. Empty when nothing is exported.
    pub fn build(&self) -> String {
        if self.named.is_empty() {
            return String::new();
        }
        format!("export {{ {} }};", self.named.join(", "))
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = self.build();
        if export.is_empty() {
            Vec::new()
        } else {
            vec![CodeFragment::line(export)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_export() {
        assert_eq!(Export::new().named("Prisma").build(), "export { Prisma };");
        assert_eq!(
            Export::new().named("getPrisma").named("Prisma").build(),
            "export { getPrisma, Prisma };"
        );
    }

    #[test]
    fn test_empty_export_renders_nothing() {
        assert!(Export::new().to_fragments().is_empty());
    }
}
