use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The `[class]` table of a manifest.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClassManifest {
    /// Class name, possibly `::`-qualified (e.g., "Services::Greeter")
    pub name: String,

    /// Superclass, rendered as `class Name < Parent`
    #[serde(default)]
    pub parent: Option<String>,

    /// Enclosing modules, outermost first
    #[serde(default)]
    pub modules: Vec<String>,

    #[serde(default)]
    pub includes: Vec<String>,

    #[serde(default)]
    pub requires: Vec<String>,

    #[serde(default)]
    pub relative_requires: Vec<String>,

    /// Instance variables, each starting with `@`
    #[serde(default)]
    pub fields: Vec<String>,

    /// Method names mapped to their parameter descriptors, in declaration order.
    /// `null` (JSON) and `[]` both mean no parameters.
    #[serde(default)]
    pub methods: IndexMap<String, Option<Vec<String>>>,

    /// Free-form lines placed before the constructor
    #[serde(default)]
    pub top_contents: Vec<String>,

    /// Magic comments, e.g. `shareable_constant_value = "literal"`
    #[serde(default)]
    pub directives: IndexMap<String, DirectiveValue>,
}

/// A magic comment value.
///
/// Manifests may write any scalar; it is rendered through [`fmt::Display`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum DirectiveValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl fmt::Display for DirectiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for DirectiveValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<bool> for DirectiveValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for DirectiveValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}
