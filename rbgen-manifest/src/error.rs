use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(rbgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {kind} manifest: {message}")]
    #[diagnostic(code(rbgen::parse_error))]
    Parse {
        kind: &'static str,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid instance variable '{name}'")]
    #[diagnostic(
        code(rbgen::invalid_field_name),
        help("instance variables must start with an @ symbol, e.g. '@{name}'")
    )]
    InvalidFieldName {
        #[source_code]
        src: NamedSource<String>,
        #[label("missing @ sigil")]
        span: Option<SourceSpan>,
        name: String,
    },

    #[error("invalid instance variable '{name}'")]
    #[diagnostic(code(rbgen::invalid_identifier), help("{reason}"))]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        reason: String,
    },

    #[error("'initialize' cannot be declared when instance variables are present")]
    #[diagnostic(
        code(rbgen::conflicting_constructor),
        help("remove 'initialize' from methods; it is generated from the instance variables")
    )]
    ConflictingConstructor {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn toml(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            kind: "TOML",
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: source.message().to_string(),
        })
    }

    /// Create a parse error from a JSON error with source context
    pub fn json(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = offset_of(src, source.line(), source.column()).map(|at| (at, 0).into());
        Box::new(Error::Parse {
            kind: "JSON",
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: source.to_string(),
        })
    }

    /// The parser's message for parse errors.
    pub fn message(&self) -> Option<&str> {
        match self {
            Error::Parse { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Convert a 1-based line and column into a byte offset.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (i, text) in src.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            return Some(offset + column.saturating_sub(1).min(text.len()));
        }
        offset += text.len();
    }
    None
}
