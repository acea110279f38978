//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates indented lines of code.
///
/// Nodes are emitted as [`Renderable`] fragments; `push_*` methods write
/// single lines and adjust the indentation level.
///
/// # Example
///
/// ```
/// use pbgen_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::typescript();
/// builder.apply_fragment(CodeFragment::block(
///     "function getPrisma() {",
///     vec![CodeFragment::line("return lifecycle.getOrCreate();")],
///     Some("}".to_string()),
/// ));
///
/// assert_eq!(
///     builder.build(),
///     "function getPrisma() {\n  return lifecycle.getOrCreate();\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a single-line JSDoc comment.
    pub fn push_jsdoc(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("/** ");
        self.buffer.push_str(text);
        self.buffer.push_str(" */\n");
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Raw(s) => {
                self.push_raw(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::JsDoc(text) => {
                self.push_jsdoc(&text);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        let spaces = self.indent_level * self.indent.width();
        self.buffer.extend(std::iter::repeat_n(' ', spaces));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_lines_with_indentation() {
        let mut builder = CodeBuilder::typescript();
        builder
            .push_line("function foo() {")
            .push_indent()
            .push_line("return 1;")
            .push_dedent()
            .push_line("}");

        assert_eq!(builder.build(), "function foo() {\n  return 1;\n}\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::typescript();
        builder
            .push_indent()
            .push_line("a();")
            .push_blank()
            .push_line("b();");

        assert_eq!(builder.build(), "  a();\n\n  b();\n");
    }

    #[test]
    fn test_custom_indent_width() {
        let mut builder = CodeBuilder::new(Indent::spaces(4));
        builder.push_indent().push_indent().push_line("x;");
        assert_eq!(builder.build(), "        x;\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::typescript();
        builder.push_dedent().push_line("x");
        assert_eq!(builder.build(), "x\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::jsdoc("Lazily create the client."),
                    CodeFragment::block(
                        "function get() {",
                        vec![CodeFragment::line("return client")],
                        Some("}".to_string()),
                    ),
                ]
            }
        }

        let mut builder = CodeBuilder::typescript();
        builder.emit(&BlockNode);
        assert_eq!(
            builder.build(),
            "/** Lazily create the client. */\nfunction get() {\n  return client\n}\n"
        );
    }

    #[test]
    fn test_emit_nested_indent_and_raw() {
        struct Nested;
        impl Renderable for Nested {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::sequence(vec![
                    CodeFragment::line("{"),
                    CodeFragment::indent(vec![CodeFragment::line("a,")]),
                    CodeFragment::line("}"),
                    CodeFragment::Raw("// end\n".to_string()),
                ])]
            }
        }

        let mut builder = CodeBuilder::typescript();
        builder.emit(&Nested);
        assert_eq!(builder.build(), "{\n  a,\n}\n// end\n");
    }
}
