use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use eyre::Result;
use rbgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
use rbgen_core::{FileRules, GeneratedFile, Overwrite, Settings, WriteResult};
use rbgen_manifest::Manifest;
use tracing::debug;

use crate::{
    ClassSpec,
    renderer::ClassRenderer,
    validator::{RubyParser, SyntaxValidator},
};

/// Ruby code generator for a single class.
///
/// The class lands at its conventional path below the output directory,
/// derived from its enclosing modules and name.
pub struct Generator<'a, V = RubyParser> {
    spec: Cow<'a, ClassSpec>,
    renderer: ClassRenderer<V>,
    overwrite: Overwrite,
}

impl<V: SyntaxValidator> LanguageCodegen for Generator<'_, V> {
    fn language(&self) -> &'static str {
        "ruby"
    }

    fn file_extension(&self) -> &'static str {
        "rb"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        self.preview_files()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.generate_files(output_dir)
    }
}

impl<'a> Generator<'a> {
    pub fn new(spec: &'a ClassSpec) -> Self {
        Self {
            spec: Cow::Borrowed(spec),
            renderer: ClassRenderer::with_defaults(),
            overwrite: Overwrite::default(),
        }
    }

    /// Build a generator from a parsed manifest, using its settings.
    pub fn from_manifest(manifest: &Manifest) -> Result<Self> {
        let spec = ClassSpec::try_from(&manifest.class)?;
        Ok(Self {
            spec: Cow::Owned(spec),
            renderer: ClassRenderer::new(manifest.settings, RubyParser),
            overwrite: Overwrite::default(),
        })
    }
}

impl<'a, V: SyntaxValidator> Generator<'a, V> {
    /// Replace the rendering settings.
    pub fn settings(mut self, settings: Settings) -> Self {
        self.renderer = self.renderer.with_settings(settings);
        self
    }

    /// Validate output with `validator` instead.
    pub fn validator<W: SyntaxValidator>(self, validator: W) -> Generator<'a, W> {
        Generator {
            renderer: ClassRenderer::new(*self.renderer.settings(), validator),
            spec: self.spec,
            overwrite: self.overwrite,
        }
    }

    /// How to treat a file that already exists.
    pub fn overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn spec(&self) -> &ClassSpec {
        &self.spec
    }

    /// Preview generated files without writing to disk
    fn preview_files(&self) -> Result<Vec<PreviewFile>> {
        Ok(vec![PreviewFile {
            path: self.spec.file_path(),
            content: self.renderer.render(&self.spec)?,
        }])
    }

    /// Generate all files into the specified output directory
    fn generate_files(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();
        let relative = self.spec.file_path();

        let file = RubyFile {
            spec: &self.spec,
            renderer: &self.renderer,
            overwrite: self.overwrite,
        };

        match file.write(output_dir)? {
            WriteResult::Written => result.written.push(relative),
            WriteResult::Skipped => result.skipped.push(relative),
        }

        debug!(
            written = result.written.len(),
            skipped = result.skipped.len(),
            "ruby generation finished"
        );
        Ok(result)
    }
}

/// The file defining one class.
struct RubyFile<'a, V> {
    spec: &'a ClassSpec,
    renderer: &'a ClassRenderer<V>,
    overwrite: Overwrite,
}

impl<V: SyntaxValidator> GeneratedFile for RubyFile<'_, V> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.spec.file_path())
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: self.overwrite,
        }
    }

    fn render(&self) -> Result<String> {
        Ok(self.renderer.render(self.spec)?)
    }
}
