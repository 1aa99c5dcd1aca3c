//! Rendering a [`ClassSpec`] into Ruby source.

use rbgen_codegen::builder::{CodeBuilder, Renderable};
use rbgen_core::Settings;
use tracing::{debug, trace};

use crate::{
    ClassSpec, Error, Result,
    class_body::ClassBody,
    directives::DirectiveBlock,
    validator::{RubyParser, SyntaxValidator},
    wrap::wrap,
};

/// Renders class specs with fixed settings and a syntax validator.
///
/// Output is the directive block followed by the class, nested in its
/// enclosing modules, with two-space indentation and a trailing newline.
/// Every document is handed to the validator before it is returned.
#[derive(Debug, Clone)]
pub struct ClassRenderer<V = RubyParser> {
    settings: Settings,
    validator: V,
}

impl ClassRenderer {
    /// Renderer with default settings, validated by [`RubyParser`].
    pub fn with_defaults() -> Self {
        Self::new(Settings::default(), RubyParser)
    }
}

impl Default for ClassRenderer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<V: SyntaxValidator> ClassRenderer<V> {
    pub fn new(settings: Settings, validator: V) -> Self {
        Self {
            settings,
            validator,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Render `spec`, failing with [`Error::UnparseableOutput`] when the
    /// validator rejects the result.
    pub fn render(&self, spec: &ClassSpec) -> Result<String> {
        let source = self.assemble(spec);
        trace!(class = spec.name(), "validating rendered source");

        let report = self.validator.validate(&source);
        if !report.ok {
            return Err(Error::UnparseableOutput {
                source_code: source,
                diagnostic: report.diagnostic,
            });
        }

        debug!(
            class = spec.name(),
            depth = spec.scopes().len(),
            bytes = source.len(),
            "rendered class"
        );
        Ok(source)
    }

    fn assemble(&self, spec: &ClassSpec) -> String {
        let mut b = CodeBuilder::ruby();

        let directives = DirectiveBlock::new(spec, &self.settings);
        trace!(comments = directives.comments().len(), "directive block");
        b.emit(&directives);

        trace!(scopes = ?spec.scopes(), "class body");
        for fragment in wrap(spec.scopes(), ClassBody::new(spec).to_fragments()) {
            b.apply_fragment(fragment);
        }
        b.build()
    }
}

impl ClassSpec {
    /// Render with default settings, validated by [`RubyParser`].
    pub fn render(&self) -> Result<String> {
        ClassRenderer::with_defaults().render(self)
    }

    /// Render with explicit settings and validator.
    pub fn render_with<V: SyntaxValidator>(
        &self,
        settings: &Settings,
        validator: V,
    ) -> Result<String> {
        ClassRenderer::new(*settings, validator).render(self)
    }
}
