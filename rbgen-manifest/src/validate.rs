//! Manifest validation with source spans.

use miette::{NamedSource, SourceSpan};
use rbgen_core::validate_identifier;

use crate::{ClassManifest, Error, Result};

/// Validation context that carries source information for diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    /// The raw manifest source
    src: &'a str,
    /// The filename for error reporting
    filename: &'a str,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename, self.src.to_string())
    }

    /// Validate the `[class]` table.
    ///
    /// Every field must carry the `@` sigil and name a usable identifier,
    /// and `initialize` may not be declared when fields are present.
    pub fn validate_class(&self, class: &ClassManifest) -> Result<()> {
        for field in &class.fields {
            let Some(name) = field.strip_prefix('@') else {
                return Err(Box::new(Error::InvalidFieldName {
                    src: self.named_source(),
                    span: find_name_span(self.src, field),
                    name: field.clone(),
                }));
            };

            if let Some(reason) = validate_identifier(name) {
                return Err(Box::new(Error::InvalidIdentifier {
                    src: self.named_source(),
                    span: find_name_span(self.src, field),
                    name: field.clone(),
                    reason: reason.to_string(),
                }));
            }
        }

        if !class.fields.is_empty() && class.methods.contains_key("initialize") {
            return Err(Box::new(Error::ConflictingConstructor {
                src: self.named_source(),
                span: find_name_span(self.src, "initialize"),
            }));
        }

        Ok(())
    }
}

/// Find the span of a name in the manifest source.
///
/// Prefers quoted occurrences (`"@name"`, `'@name'`), then bare keys
/// (`initialize = ...`), falling back to the first occurrence anywhere.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{name}{quote}");
        if let Some(pos) = src.find(&pattern) {
            // +1 to skip the opening quote
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    for pattern in [format!("{name} ="), format!("{name}=")] {
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos, name.len())));
        }
    }

    src.find(name).map(|pos| SourceSpan::from((pos, name.len())))
}
