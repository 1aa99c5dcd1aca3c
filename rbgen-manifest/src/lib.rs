//! Class manifests for rbgen.
//!
//! A manifest describes one Ruby class and, optionally, the settings used
//! to render it. Manifests are written in TOML (or JSON):
//!
//! ```toml
//! [settings]
//! frozen_string_literal = false
//!
//! [class]
//! name = "Greeter"
//! parent = "BaseService"
//! modules = ["Admin", "Services"]
//! fields = ["@name"]
//!
//! [class.methods]
//! call = ["request"]
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod class;
mod error;
mod validate;

use std::path::Path;

pub use class::{ClassManifest, DirectiveValue};
pub use error::{Error, Result};
use rbgen_core::Settings;
use serde::{Deserialize, Serialize};
pub use validate::ParseContext;

/// Root manifest
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Rendering settings, defaults apply when the table is absent
    #[serde(default)]
    pub settings: Settings,

    /// The class to generate
    pub class: ClassManifest,
}

impl Manifest {
    /// Validate the manifest after parsing
    pub fn validate(&self, src: &str, filename: &str) -> Result<()> {
        ParseContext::new(src, filename).validate_class(&self.class)
    }
}

impl std::str::FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_str(s)
    }
}

/// Parse a manifest file from the given path.
///
/// Files ending in `.json` are parsed as JSON, everything else as TOML.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Manifest> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    let filename = path.display().to_string();

    if path.extension().is_some_and(|ext| ext == "json") {
        parse_json_str_with_filename(&content, &filename)
    } else {
        parse_str_with_filename(&content, &filename)
    }
}

/// Parse a TOML manifest from a string (uses "rbgen.toml" as default filename)
pub fn parse_str(content: &str) -> Result<Manifest> {
    parse_str_with_filename(content, "rbgen.toml")
}

/// Parse a TOML manifest from a string with a custom filename for error reporting
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<Manifest> {
    let manifest: Manifest =
        toml::from_str(content).map_err(|e| Error::toml(e, content, filename))?;

    manifest.validate(content, filename)?;
    Ok(manifest)
}

/// Parse a JSON manifest from a string (uses "rbgen.json" as default filename)
pub fn parse_json_str(content: &str) -> Result<Manifest> {
    parse_json_str_with_filename(content, "rbgen.json")
}

/// Parse a JSON manifest from a string with a custom filename for error reporting
pub fn parse_json_str_with_filename(content: &str, filename: &str) -> Result<Manifest> {
    let manifest: Manifest =
        serde_json::from_str(content).map_err(|e| Error::json(e, content, filename))?;

    manifest.validate(content, filename)?;
    Ok(manifest)
}
