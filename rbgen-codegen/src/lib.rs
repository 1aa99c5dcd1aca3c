//! Shared code generation building blocks for rbgen.
//!
//! This crate provides the language-agnostic pieces used by the Ruby
//! class renderer in `rbgen-ruby`.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, Renderable)
//! - [`language`] - Generator abstractions (LanguageCodegen, PreviewFile, etc.)

pub mod builder;
pub mod language;
