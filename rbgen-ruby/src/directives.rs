//! Leading magic comments and require statements.

use std::collections::BTreeMap;

use rbgen_codegen::builder::{CodeFragment, Renderable};
use rbgen_core::Settings;

use crate::{
    ClassSpec,
    ast::{MagicComment, Require},
};

/// The lines preceding the class definition.
///
/// Renders as up to two groups, each followed by one blank line: the magic
/// comments sorted by key, then every `require` followed by every
/// `require_relative`. Empty groups produce nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveBlock {
    comments: Vec<MagicComment>,
    requires: Vec<Require>,
}

impl DirectiveBlock {
    pub fn new(spec: &ClassSpec, settings: &Settings) -> Self {
        Self {
            comments: merge_directives(spec, settings),
            requires: spec
                .requires()
                .iter()
                .map(Require::absolute)
                .chain(spec.relative_requires().iter().map(Require::relative))
                .collect(),
        }
    }

    /// Magic comments in render order.
    pub fn comments(&self) -> &[MagicComment] {
        &self.comments
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty() && self.requires.is_empty()
    }
}

impl Renderable for DirectiveBlock {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let comments: Vec<CodeFragment> =
            self.comments.iter().flat_map(|c| c.to_fragments()).collect();
        let requires: Vec<CodeFragment> =
            self.requires.iter().flat_map(|r| r.to_fragments()).collect();

        [comments, requires]
            .into_iter()
            .filter(|group| !group.is_empty())
            .flat_map(|group| group.into_iter().chain(std::iter::once(CodeFragment::Blank)))
            .collect()
    }
}

/// Merge caller directives with the default one and sort by key.
///
/// Keys are unique: when the default directive is enabled it replaces a
/// caller directive with the same key.
fn merge_directives(spec: &ClassSpec, settings: &Settings) -> Vec<MagicComment> {
    let mut merged: BTreeMap<&str, &str> = spec
        .directives()
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();

    if settings.frozen_string_literal() {
        merged.insert(MagicComment::FROZEN_STRING_LITERAL, "true");
    }

    merged
        .into_iter()
        .map(|(key, value)| MagicComment::new(key, value))
        .collect()
}
