//! Syntax validation with an in-process Ruby parser.

use lib_ruby_parser::{Parser, ParserOptions, ParserResult};
use tracing::debug;

use crate::validator::{SyntaxValidator, ValidationReport};

/// Parses the document with `lib-ruby-parser`.
///
/// Every syntax error is reported as `line N: message`, one per line.
/// Parser warnings are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct RubyParser;

impl SyntaxValidator for RubyParser {
    fn validate(&self, source: &str) -> ValidationReport {
        let options = ParserOptions {
            buffer_name: "(rbgen)".to_string(),
            ..Default::default()
        };
        let ParserResult { diagnostics, .. } =
            Parser::new(source.as_bytes().to_vec(), options).do_parse();

        let errors: Vec<String> = diagnostics
            .iter()
            .filter(|d| d.is_error())
            .map(|d| format!("line {}: {}", line_of(source, d.loc.begin), d.render_message()))
            .collect();

        if errors.is_empty() {
            return ValidationReport::valid();
        }

        let diagnostic = errors.join("\n");
        debug!(%diagnostic, "parser rejected output");
        ValidationReport::invalid(diagnostic)
    }
}

/// 1-based line of a byte offset.
fn line_of(source: &str, offset: usize) -> usize {
    let end = offset.min(source.len());
    source.as_bytes()[..end].iter().filter(|b| **b == b'\n').count() + 1
}
