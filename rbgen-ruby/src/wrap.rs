//! Nesting a body inside enclosing modules.

use rbgen_codegen::builder::CodeFragment;

/// Wrap `body` in one `module ... end` block per scope.
///
/// The first scope is the outermost block. Each level indents its content
/// by one unit when rendered; blank lines stay empty. With no scopes the
/// body is returned unchanged.
///
/// Built as a fold from the innermost scope outward, so the nesting depth
/// does not grow the call stack.
pub fn wrap<S: AsRef<str>>(scopes: &[S], body: Vec<CodeFragment>) -> Vec<CodeFragment> {
    scopes.iter().rev().fold(body, |inner, scope| {
        vec![CodeFragment::block(
            format!("module {}", scope.as_ref()),
            inner,
            Some("end".to_string()),
        )]
    })
}
