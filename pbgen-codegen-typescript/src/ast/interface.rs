//! TypeScript interface builder.

use pbgen_codegen::builder::{CodeFragment, Renderable};

/// Builder for TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    doc: Option<String>,
    members: Vec<String>,
    exported: bool,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            members: Vec::new(),
            exported: true,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a required property.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.members
            .push(format!("{}: {};", name.into(), ty.into()));
        self
    }

    /// Add a method signature without parameters.
    pub fn method(mut self, name: impl Into<String>, returns: impl Into<String>) -> Self {
        self.members
            .push(format!("{}(): {};", name.into(), returns.into()));
        self
    }

    /// Make this interface private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc.clone()));
        }

        if self.members.is_empty() {
            fragments.push(CodeFragment::line(format!(
                "{}interface {} {{}}",
                export, self.name
            )));
        } else {
            fragments.push(CodeFragment::block(
                format!("{}interface {} {{", export, self.name),
                self.members.iter().map(CodeFragment::line).collect(),
                Some("}".to_string()),
            ));
        }

        fragments
    }
}
