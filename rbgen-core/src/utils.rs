//! Shared utility functions for code generation.

/// Convert a constant name to snake_case.
///
/// Acronyms stay together, following Ruby's file naming convention
/// (e.g., "HTTPClient" -> "http_client", "BaseService" -> "base_service").
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                result.push('_');
            }
        }
        result.extend(c.to_lowercase());
    }
    result.replace('-', "_")
}

/// Build the conventional relative file path for a constant.
///
/// Every segment may itself be a `::`-qualified path; segments are
/// flattened, snake-cased and joined with `/`, then `.rb` is appended
/// (e.g., `["Admin", "Services::Greeter"]` -> `admin/services/greeter.rb`).
pub fn constant_path_to_file_path<S: AsRef<str>>(segments: &[S]) -> String {
    let parts: Vec<String> = segments
        .iter()
        .flat_map(|segment| segment.as_ref().split("::"))
        .filter(|part| !part.is_empty())
        .map(to_snake_case)
        .collect();
    format!("{}.rb", parts.join("/"))
}

/// Ruby reserved words that cannot be used as local variable names
pub const RUBY_KEYWORDS: &[&str] = &[
    "__ENCODING__", "__LINE__", "__FILE__", "BEGIN", "END", "alias", "and", "begin", "break",
    "case", "class", "def", "defined?", "do", "else", "elsif", "end", "ensure", "false", "for",
    "if", "in", "module", "next", "nil", "not", "or", "redo", "rescue", "retry", "return", "self",
    "super", "then", "true", "undef", "unless", "until", "when", "while", "yield",
];

/// Check if a name is a Ruby reserved word
pub fn is_ruby_keyword(name: &str) -> bool {
    RUBY_KEYWORDS.contains(&name)
}

/// Validate an instance variable name (without its `@`).
///
/// The name becomes a keyword argument and a local variable in the
/// generated constructor, so it must be a plain identifier.
/// Returns None if valid, Some(reason) if invalid.
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("instance variable name cannot be empty"),
        Some(c) if c.is_ascii_digit() => {
            return Some("instance variable name cannot start with a digit");
        }
        Some(c) if !(c.is_alphabetic() || c == '_') => {
            return Some("instance variable name must start with a letter or underscore");
        }
        Some(_) => {}
    }

    if !chars.all(|c| c.is_alphanumeric() || c == '_') {
        return Some("instance variable name may only contain letters, digits, and underscores");
    }

    if is_ruby_keyword(name) {
        return Some("the name is a Ruby reserved word and cannot be used as a local variable");
    }

    None
}
