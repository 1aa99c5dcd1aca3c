use miette::Diagnostic;
use thiserror::Error;

/// Result type for class construction and rendering
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum Error {
    #[error("instance variables must start with an @ symbol, got '{name}'")]
    #[diagnostic(code(rbgen::invalid_field_name), help("rename it to '@{name}'"))]
    InvalidFieldName { name: String },

    #[error("invalid instance variable '{name}': {reason}")]
    #[diagnostic(code(rbgen::invalid_identifier))]
    InvalidIdentifier { name: String, reason: String },

    #[error("initialize method cannot be defined if instance variables are present")]
    #[diagnostic(
        code(rbgen::conflicting_constructor),
        help("drop the explicit initialize; one is generated from the instance variables")
    )]
    ConflictingConstructor,

    #[error("the generated code is not valid Ruby{}", diagnostic_suffix(.diagnostic))]
    #[diagnostic(
        code(rbgen::unparseable_output),
        help("check the class, parent, module and method names for invalid syntax")
    )]
    UnparseableOutput {
        source_code: String,
        diagnostic: Option<String>,
    },
}

impl Error {
    /// The rejected source text, for [`Error::UnparseableOutput`].
    pub fn source_code(&self) -> Option<&str> {
        match self {
            Error::UnparseableOutput { source_code, .. } => Some(source_code),
            _ => None,
        }
    }
}

fn diagnostic_suffix(diagnostic: &Option<String>) -> String {
    diagnostic
        .as_ref()
        .map(|d| format!(": {d}"))
        .unwrap_or_default()
}
