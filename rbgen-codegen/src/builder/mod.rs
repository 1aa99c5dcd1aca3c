//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - turns fragments into indented text
//! - [`CodeFragment`] - intermediate representation for code pieces
//! - [`Renderable`] - trait for types that can be converted to code fragments

mod code_builder;
mod renderable;

pub use code_builder::CodeBuilder;
pub use renderable::{CodeFragment, Renderable, separated};
