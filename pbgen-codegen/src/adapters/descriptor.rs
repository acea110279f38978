/// An import the generated file needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    /// Module/package path
    pub module: String,
    /// Symbols to import (empty = side-effect import of the module itself)
    pub symbols: Vec<String>,
    /// Local aliases, parallel to `symbols` (`None` = no alias)
    pub aliases: Vec<Option<String>>,
}

impl ImportSpec {
    /// Create a new import specification.
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            symbols: Vec::new(),
            aliases: Vec::new(),
        }
    }

    /// Add a symbol to import.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.push(symbol.into());
        self.aliases.push(None);
        self
    }

    /// Add a symbol imported under a local alias.
    pub fn symbol_as(mut self, symbol: impl Into<String>, alias: impl Into<String>) -> Self {
        self.symbols.push(symbol.into());
        self.aliases.push(Some(alias.into()));
        self
    }

    /// Whether this import only runs the module for its side effects.
    pub fn is_side_effect(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Everything the bootstrap file needs to wire one driver adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterDescriptor {
    /// npm package that must be declared by the consuming project.
    pub required_dependency: String,
    /// Adapter class exported by `required_dependency`.
    pub adapter_symbol: String,
    /// Statements that construct a value named `adapter`. Emitted verbatim.
    pub init_snippet: String,
    /// Imports the snippet relies on besides the adapter itself.
    pub extra_imports: Vec<ImportSpec>,
}

impl AdapterDescriptor {
    /// The import of the adapter class itself.
    pub fn adapter_import(&self) -> ImportSpec {
        ImportSpec::new(&self.required_dependency).symbol(&self.adapter_symbol)
    }
}
