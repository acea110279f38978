//! TypeScript const declaration builder.

use pbgen_codegen::builder::{CodeFragment, Renderable};

/// Builder for TypeScript const declarations.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: String,
    ty: Option<String>,
    exported: bool,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ty: None,
            exported: true,
        }
    }

    /// Add a type annotation.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Make this const private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    fn head(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        let type_annotation = match &self.ty {
            Some(ty) => format!(": {}", ty),
            None => String::new(),
        };
        format!("{}const {}{} = ", export, self.name, type_annotation)
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        // A multiline value continues on its own lines and carries its own terminator.
        let mut lines = self.value.lines();
        let first = lines.next().unwrap_or("");
        let rest: Vec<&str> = lines.collect();

        if rest.is_empty() {
            return vec![CodeFragment::line(format!("{}{};", self.head(), first))];
        }

        let mut fragments = vec![CodeFragment::line(format!("{}{}", self.head(), first))];
        fragments.extend(rest.into_iter().map(CodeFragment::line));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use pbgen_codegen::builder::CodeBuilder;

    use super::*;

    fn build(c: &Const) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(c);
        builder.build()
    }

    #[test]
    fn test_simple_const() {
        assert_eq!(build(&Const::new("foo", "42")), "export const foo = 42;\n");
    }

    #[test]
    fn test_const_with_type() {
        let c = Const::new("name", "\"hello\"").ty("string");
        assert_eq!(build(&c), "export const name: string = \"hello\";\n");
    }

    #[test]
    fn test_private_const() {
        let c = Const::new("lifecycle", "createPrismaLifecycle()").private();
        assert_eq!(build(&c), "const lifecycle = createPrismaLifecycle();\n");
    }

    #[test]
    fn test_multiline_const() {
        let c = Const::new("config", "{\n  debug: true,\n};").private();
        assert_eq!(build(&c), "const config = {\n  debug: true,\n};\n");
    }
}
