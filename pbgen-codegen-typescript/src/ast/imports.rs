//! TypeScript import builder.

use pbgen_codegen::{
    adapters::ImportSpec,
    builder::{CodeFragment, Renderable},
};

/// Builder for TypeScript import statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    from: String,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Import a named export under a local alias (`name as alias`).
    pub fn named_as(mut self, name: impl Into<String>, alias: impl Into<String>) -> Self {
        self.named
            .push(format!("{} as {}", name.into(), alias.into()));
        self
    }

    /// The module this import reads from.
    pub fn module(&self) -> &str {
        &self.from
    }

    /// Whether this import only runs the module for its side effects.
    pub fn is_side_effect(&self) -> bool {
        self.named.is_empty()
    }

    /// Render the import statement.
    pub fn build(&self) -> String {
        if self.named.is_empty() {
            return format!("import \"{}\";", self.from);
        }
        format!(
            "import {{ {} }} from \"{}\";",
            self.named.join(", "),
            self.from
        )
    }
}

impl From<&ImportSpec> for Import {
    fn from(spec: &ImportSpec) -> Self {
        spec.symbols
            .iter()
            .zip(&spec.aliases)
            .fold(Import::new(&spec.module), |import, (symbol, alias)| {
                match alias {
                    Some(alias) => import.named_as(symbol, alias),
                    None => import.named(symbol),
                }
            })
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.build())]
    }
}
