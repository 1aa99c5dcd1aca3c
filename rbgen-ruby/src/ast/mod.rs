//! Ruby AST builders for the statements a class file is made of.
//!
//! Each node implements [`Renderable`](rbgen_codegen::builder::Renderable)
//! and is rendered through a CodeBuilder.

mod comments;
mod methods;
mod requires;

pub use comments::MagicComment;
pub use methods::{AttrReader, Include, MethodDef};
pub use requires::Require;
