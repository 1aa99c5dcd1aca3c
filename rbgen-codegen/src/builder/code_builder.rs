//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Renderable};

/// One indentation level of Ruby source.
const INDENT: &str = "  ";

/// Turns [`CodeFragment`]s into indented text.
///
/// Lines that are empty or whitespace-only are written as a bare newline,
/// so generated code never carries trailing whitespace.
///
/// # Example
///
/// ```
/// use rbgen_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::ruby();
/// builder.apply_fragment(CodeFragment::block(
///     "module Admin",
///     vec![CodeFragment::line("VERSION = 1")],
///     Some("end".to_string()),
/// ));
/// assert_eq!(builder.build(), "module Admin\n  VERSION = 1\nend\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create an empty builder with 2-space indentation.
    pub fn ruby() -> Self {
        Self {
            indent_level: 0,
            buffer: String::new(),
        }
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
            CodeFragment::Line(s) => self.push_line(&s),
            CodeFragment::Blank => self.buffer.push('\n'),
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.indent_level += 1;
                for f in body {
                    self.apply_fragment(f);
                }
                self.indent_level -= 1;
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Comment(text) => self.push_line(&format!("# {text}")),
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn push_line(&mut self, s: &str) {
        if !s.trim().is_empty() {
            for _ in 0..self.indent_level {
                self.buffer.push_str(INDENT);
            }
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(fragments: Vec<CodeFragment>) -> String {
        let mut builder = CodeBuilder::ruby();
        for fragment in fragments {
            builder.apply_fragment(fragment);
        }
        builder.build()
    }

    #[test]
    fn test_simple_line() {
        assert_eq!(render(vec![CodeFragment::line("puts 1")]), "puts 1\n");
    }

    #[test]
    fn test_blank_line() {
        let code = render(vec![
            CodeFragment::line("require \"json\""),
            CodeFragment::Blank,
            CodeFragment::line("class Foo; end"),
        ]);

        assert_eq!(code, "require \"json\"\n\nclass Foo; end\n");
    }

    #[test]
    fn test_blank_lines_are_never_indented() {
        let code = render(vec![CodeFragment::block(
            "class Foo",
            vec![
                CodeFragment::line("a"),
                CodeFragment::line(""),
                CodeFragment::line("   "),
                CodeFragment::Blank,
                CodeFragment::line("b"),
            ],
            None,
        )]);

        assert_eq!(code, "class Foo\n  a\n\n\n\n  b\n");
    }

    #[test]
    fn test_comment() {
        let code = render(vec![
            CodeFragment::comment("frozen_string_literal: true"),
            CodeFragment::block("module Admin", vec![CodeFragment::comment("nested")], None),
        ]);

        assert_eq!(code, "# frozen_string_literal: true\nmodule Admin\n  # nested\n");
    }

    #[test]
    fn test_emit_with_fragments() {
        struct SimpleNode;
        impl Renderable for SimpleNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::comment("comment"),
                    CodeFragment::line("x = 1"),
                ]
            }
        }

        let mut builder = CodeBuilder::ruby();
        builder.emit(&SimpleNode);
        assert_eq!(builder.build(), "# comment\nx = 1\n");
    }

    #[test]
    fn test_emit_nested_blocks() {
        struct Nested;
        impl Renderable for Nested {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::block(
                    "module Outer",
                    vec![CodeFragment::block(
                        "class Inner",
                        vec![CodeFragment::line("def a"), CodeFragment::line("end")],
                        Some("end".to_string()),
                    )],
                    Some("end".to_string()),
                )]
            }
        }

        let mut builder = CodeBuilder::ruby();
        builder.emit(&Nested);
        assert_eq!(
            builder.build(),
            "module Outer\n  class Inner\n    def a\n    end\n  end\nend\n"
        );
    }

    #[test]
    fn test_block_indent_is_restored() {
        let code = render(vec![
            CodeFragment::block("module A", vec![CodeFragment::line("x")], Some("end".into())),
            CodeFragment::line("y"),
        ]);
        assert_eq!(code, "module A\n  x\nend\ny\n");
    }
}
