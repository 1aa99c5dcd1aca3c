//! Ruby method definitions and class-level macros.

use rbgen_codegen::builder::{CodeFragment, Renderable};

/// Builder for a Ruby method definition.
///
/// Parameter descriptors are passed through verbatim, so positional
/// (`env`), required keyword (`request:`) and defaulted keyword
/// (`context: nil`) forms are all written the way Ruby spells them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDef {
    name: String,
    params: Vec<String>,
    body: Vec<String>,
}

impl MethodDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.params.extend(params.into_iter().map(Into::into));
        self
    }

    /// Add a line to the method body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// `def name(a, b)`, or `def name` without parameters.
    pub fn signature(&self) -> String {
        if self.params.is_empty() {
            format!("def {}", self.name)
        } else {
            format!("def {}({})", self.name, self.params.join(", "))
        }
    }
}

impl Renderable for MethodDef {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            self.signature(),
            self.body.iter().map(CodeFragment::line).collect(),
            Some("end".to_string()),
        )]
    }
}

/// `include Module`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Include(pub String);

impl Renderable for Include {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!("include {}", self.0))]
    }
}

/// `attr_reader :a, :b`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrReader(pub Vec<String>);

impl Renderable for AttrReader {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let symbols = self
            .0
            .iter()
            .map(|name| format!(":{}", name))
            .collect::<Vec<_>>()
            .join(", ");
        vec![CodeFragment::Line(format!("attr_reader {}", symbols))]
    }
}
