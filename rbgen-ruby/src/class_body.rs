//! The `class ... end` block.

use rbgen_codegen::builder::{CodeFragment, Renderable, separated};

use crate::{
    ClassSpec,
    ast::{AttrReader, Include, MethodDef},
    spec::CONSTRUCTOR,
};

/// Composes the class definition, from its header to its closing `end`.
///
/// Inside the class, in this order and separated by single blank lines:
/// includes, top contents, the constructor synthesized from fields, the
/// declared methods, and the private `attr_reader` section.
#[derive(Debug, Clone, Copy)]
pub struct ClassBody<'a> {
    spec: &'a ClassSpec,
}

impl<'a> ClassBody<'a> {
    pub fn new(spec: &'a ClassSpec) -> Self {
        Self { spec }
    }

    fn header(&self) -> String {
        match self.spec.parent() {
            Some(parent) => format!("class {} < {}", self.spec.name(), parent),
            None => format!("class {}", self.spec.name()),
        }
    }

    fn includes(&self) -> Vec<CodeFragment> {
        self.spec
            .includes()
            .iter()
            .flat_map(|module| Include(module.clone()).to_fragments())
            .collect()
    }

    fn top_contents(&self) -> Vec<CodeFragment> {
        self.spec
            .top_contents()
            .iter()
            .flat_map(|content| content.split('\n'))
            .map(CodeFragment::line)
            .collect()
    }

    /// `def initialize(a:, b:)` assigning each keyword to its field.
    fn constructor(&self) -> Vec<CodeFragment> {
        if self.spec.fields().is_empty() {
            return Vec::new();
        }

        self.spec
            .field_names()
            .fold(MethodDef::new(CONSTRUCTOR), |method, name| {
                method
                    .param(format!("{}:", name))
                    .body_line(format!("@{} = {}", name, name))
            })
            .to_fragments()
    }

    fn methods(&self) -> Vec<CodeFragment> {
        separated(self.spec.methods().iter().map(|(name, params)| {
            MethodDef::new(name)
                .params(params.iter().flatten())
                .to_fragments()
        }))
    }

    fn private_readers(&self) -> Vec<CodeFragment> {
        if self.spec.fields().is_empty() {
            return Vec::new();
        }

        let readers = AttrReader(self.spec.field_names().map(String::from).collect());

        let mut fragments = vec![CodeFragment::line("private"), CodeFragment::Blank];
        fragments.extend(readers.to_fragments());
        fragments
    }
}

impl Renderable for ClassBody<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = separated([
            self.includes(),
            self.top_contents(),
            self.constructor(),
            self.methods(),
            self.private_readers(),
        ]);

        vec![CodeFragment::block(self.header(), body, Some("end".to_string()))]
    }
}
