//! CodeFile abstraction for structured TypeScript file generation.
//!
//! Organizes a file into a leading comment, imports, body and exports.

use pbgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::{Export, Import};

/// A structured representation of a TypeScript file.
///
/// Sections are rendered in order with one blank line between them, and
/// one blank line between body elements.
///
/// ```ignore
/// let file = CodeFile::new()
///     .header(GENERATED_HEADER)
///     .import(Import::new("@prisma/client").named("PrismaClient"))
///     .add(RawCode::new("const client = new PrismaClient();"))
///     .export(Export::new().named("client"))
///     .render();
/// ```
#[derive(Default)]
pub struct CodeFile {
    header: Vec<String>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
    exports: Vec<Export>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the leading comment, one line per line of `text`.
    pub fn header(mut self, text: &str) -> Self {
        self.header = text.lines().map(str::to_string).collect();
        self
    }

    /// Add an import statement. Exact duplicates are dropped.
    pub fn import(mut self, import: Import) -> Self {
        if !self.imports.contains(&import) {
            self.imports.push(import);
        }
        self
    }

    /// Add imports from an iterator.
    pub fn imports(self, imports: impl IntoIterator<Item = Import>) -> Self {
        imports.into_iter().fold(self, Self::import)
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        let fragments = node.to_fragments();
        if !fragments.is_empty() {
            self.body.push(fragments);
        }
        self
    }

    /// Add a body element only when `node` is present.
    pub fn add_opt<R: Renderable>(self, node: Option<R>) -> Self {
        match node {
            Some(node) => self.add(node),
            None => self,
        }
    }

    /// Add an export statement.
    pub fn export(mut self, export: Export) -> Self {
        self.exports.push(export);
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        let mut section_open = false;
        let mut start_section = |builder: &mut CodeBuilder| {
            if section_open {
                builder.push_blank();
            }
            section_open = true;
        };

        if !self.header.is_empty() {
            start_section(&mut builder);
            for line in &self.header {
                builder.push_line(line);
            }
        }

        if !self.imports.is_empty() {
            start_section(&mut builder);
            for import in &self.imports {
                builder.emit(import);
            }
        }

        for fragments in &self.body {
            start_section(&mut builder);
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        if !self.exports.is_empty() {
            start_section(&mut builder);
            for export in &self.exports {
                builder.emit(export);
            }
        }

        builder.build()
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
            && self.imports.is_empty()
            && self.body.is_empty()
            && self.exports.is_empty()
    }
}

/// A raw code fragment that implements Renderable.
///
/// Lines are emitted verbatim at the current indentation.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    /// Create a new raw code fragment.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        CodeFragment::lines(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file() {
        let file = CodeFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_imports_only() {
        let code = CodeFile::new()
            .import(Import::new("@prisma/client").named("PrismaClient"))
            .render();
        assert_eq!(code, "import { PrismaClient } from \"@prisma/client\";\n");
    }

    #[test]
    fn test_duplicate_imports_are_dropped() {
        let code = CodeFile::new()
            .import(Import::new("dotenv/config"))
            .imports([Import::new("dotenv/config"), Import::new("undici").named("fetch")])
            .render();
        assert_eq!(
            code,
            "import \"dotenv/config\";\nimport { fetch } from \"undici\";\n"
        );
    }

    #[test]
    fn test_full_file() {
        let code = CodeFile::new()
            .header("// Generated.")
            .import(Import::new("@prisma/client").named("PrismaClient"))
            .add(RawCode::new("const a = 1;"))
            .add(RawCode::new("const b = 2;\n"))
            .add_opt(None::<RawCode>)
            .export(Export::new().named("a"))
            .render();

        assert_eq!(
            code,
            "// Generated.\n\nimport { PrismaClient } from \"@prisma/client\";\n\nconst a = 1;\n\nconst b = 2;\n\nexport { a };\n"
        );
    }

    #[test]
    fn test_raw_code_keeps_interior_blank_lines() {
        let code = CodeFile::new()
            .add(RawCode::new("const a = 1;\n\nconst b = 2;"))
            .render();
        assert_eq!(code, "const a = 1;\n\nconst b = 2;\n");
    }
}
