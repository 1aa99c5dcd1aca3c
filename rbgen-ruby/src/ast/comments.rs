//! Ruby magic comments.

use rbgen_codegen::builder::{CodeFragment, Renderable};

/// A file-level magic comment, rendered as `# key: value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagicComment {
    key: String,
    value: String,
}

impl MagicComment {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// `# frozen_string_literal: true`
    pub fn frozen_string_literal() -> Self {
        Self::new(Self::FROZEN_STRING_LITERAL, "true")
    }

    /// Key of the default directive.
    pub const FROZEN_STRING_LITERAL: &'static str = "frozen_string_literal";

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Renderable for MagicComment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::comment(format!("{}: {}", self.key, self.value))]
    }
}
