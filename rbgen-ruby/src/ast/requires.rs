//! Ruby `require` statements.

use rbgen_codegen::builder::{CodeFragment, Renderable};

/// A `require` or `require_relative` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Require {
    /// `require "path"`, resolved through the load path
    Absolute(String),
    /// `require_relative "path"`, resolved from the current file
    Relative(String),
}

impl Require {
    pub fn absolute(path: impl Into<String>) -> Self {
        Self::Absolute(path.into())
    }

    pub fn relative(path: impl Into<String>) -> Self {
        Self::Relative(path.into())
    }
}

impl Renderable for Require {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let line = match self {
            Self::Absolute(path) => format!("require \"{}\"", path),
            Self::Relative(path) => format!("require_relative \"{}\"", path),
        };
        vec![CodeFragment::Line(line)]
    }
}
