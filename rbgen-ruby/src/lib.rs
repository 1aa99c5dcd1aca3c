//! Ruby class source generator.
//!
//! Describe a class with a [`ClassSpec`] and render it to Ruby source: magic
//! comments, requires, enclosing modules, includes, a keyword constructor for
//! instance variables, method stubs and private readers. Every rendered
//! document passes through a [`SyntaxValidator`] before it is returned.
//!
//! # Usage
//!
//! ```
//! use rbgen_ruby::ClassSpec;
//!
//! let spec = ClassSpec::builder("Greeter")
//!     .parent("BaseService")
//!     .scope("Services")
//!     .field("@name")
//!     .method("call", ["greeting"])
//!     .build()?;
//!
//! assert_eq!(
//!     spec.render()?,
//!     concat!(
//!         "# frozen_string_literal: true\n",
//!         "\n",
//!         "module Services\n",
//!         "  class Greeter < BaseService\n",
//!         "    def initialize(name:)\n",
//!         "      @name = name\n",
//!         "    end\n",
//!         "\n",
//!         "    def call(greeting)\n",
//!         "    end\n",
//!         "\n",
//!         "    private\n",
//!         "\n",
//!         "    attr_reader :name\n",
//!         "  end\n",
//!         "end\n",
//!     )
//! );
//! # Ok::<(), rbgen_ruby::Error>(())
//! ```
//!
//! Manifests parsed by `rbgen-manifest` go through [`Generator`], which
//! writes the class to its conventional path:
//!
//! ```ignore
//! use rbgen_ruby::{Generator, LanguageCodegen};
//!
//! let manifest = rbgen_manifest::parse_file("rbgen.toml")?;
//! let result = Generator::from_manifest(&manifest)?.generate(Path::new("lib"))?;
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod class_body;
mod directives;
mod error;
mod generator;
mod parser;
mod renderer;
mod spec;
mod validator;
mod wrap;

pub mod ast;

pub use class_body::ClassBody;
pub use directives::DirectiveBlock;
pub use error::{Error, Result};
pub use generator::Generator;
pub use rbgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use rbgen_core::{Overwrite, Settings};
pub use renderer::ClassRenderer;
pub use spec::{CONSTRUCTOR, ClassSpec, ClassSpecBuilder, FIELD_SIGIL};
pub use validator::{AcceptAll, RubyCheck, RubyParser, SyntaxValidator, ValidationReport};
pub use wrap::wrap;
