//! Syntax validation of rendered output.

use std::{
    io::Write,
    process::{Command, Stdio},
};

use tracing::trace;

pub use crate::parser::RubyParser;

/// Outcome of validating a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub ok: bool,
    pub diagnostic: Option<String>,
}

impl ValidationReport {
    pub fn valid() -> Self {
        Self {
            ok: true,
            diagnostic: None,
        }
    }

    pub fn invalid(diagnostic: impl Into<String>) -> Self {
        Self {
            ok: false,
            diagnostic: Some(diagnostic.into()),
        }
    }
}

/// Checks that rendered text is syntactically valid Ruby.
///
/// The renderer calls [`validate`](Self::validate) once per render and
/// fails with [`Error::UnparseableOutput`](crate::Error::UnparseableOutput)
/// when the report is not ok.
pub trait SyntaxValidator {
    fn validate(&self, source: &str) -> ValidationReport;
}

impl<T: SyntaxValidator + ?Sized> SyntaxValidator for &T {
    fn validate(&self, source: &str) -> ValidationReport {
        (**self).validate(source)
    }
}

impl<T: SyntaxValidator + ?Sized> SyntaxValidator for Box<T> {
    fn validate(&self, source: &str) -> ValidationReport {
        self.as_ref().validate(source)
    }
}

/// Accepts every document.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl SyntaxValidator for AcceptAll {
    fn validate(&self, _source: &str) -> ValidationReport {
        ValidationReport::valid()
    }
}

/// Validates with the Ruby interpreter's syntax check (`ruby -c`).
///
/// The source is piped through stdin. A non-zero exit status is reported
/// with the interpreter's stderr; failing to run the interpreter at all is
/// reported as invalid too, so a render never passes unchecked.
#[derive(Debug, Clone)]
pub struct RubyCheck {
    program: String,
}

impl RubyCheck {
    /// Use `ruby` from `PATH`.
    pub fn new() -> Self {
        Self::with_program("ruby")
    }

    /// Use a specific interpreter binary.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Whether the interpreter can be started.
    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|status| status.success())
    }

    fn run(&self, source: &str) -> std::io::Result<std::process::Output> {
        let mut child = Command::new(&self.program)
            .arg("-c")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(source.as_bytes())?;
        }
        child.wait_with_output()
    }
}

impl Default for RubyCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxValidator for RubyCheck {
    fn validate(&self, source: &str) -> ValidationReport {
        match self.run(source) {
            Ok(output) if output.status.success() => {
                trace!(program = %self.program, "syntax check passed");
                ValidationReport::valid()
            }
            Ok(output) => {
                ValidationReport::invalid(String::from_utf8_lossy(&output.stderr).trim().to_string())
            }
            Err(e) => ValidationReport::invalid(format!("failed to run '{}': {}", self.program, e)),
        }
    }
}
