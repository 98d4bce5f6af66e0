//! `axlang-core`: the AxLang language core.
//!
//! Turns a parsed [`ast::Ast`] into a [`value::Value`] by way of
//! [`evaluator::eval`], consulting an [`environment::Env`] chain,
//! invoking [`desugar`] on demand, and loading modules on demand via
//! [`modules`]. The parser that produces the `Ast` in the first place
//! is out of scope for this crate (§1) — see the sibling
//! `axlang-parser` crate.
//!
//! # Example
//!
//! ```
//! use axlang_core::ast::Ast;
//! use axlang_core::builtins::create_global_env;
//! use axlang_core::error::AxError;
//! use axlang_core::evaluator::{eval, EvalContext};
//! use axlang_core::modules::SourceParser;
//!
//! struct NeverParses;
//! impl SourceParser for NeverParses {
//!     fn parse(&self, _src: &str) -> Result<Ast, AxError> {
//!         Err(AxError::Parser("no parser in this example".into()))
//!     }
//! }
//!
//! let env = create_global_env();
//! let parser = NeverParses;
//! let modules_root = std::env::temp_dir();
//! let ctx = EvalContext { parser: &parser, modules_root: &modules_root };
//! let expr = Ast::list([Ast::symbol("+"), Ast::Integer(1), Ast::Integer(2)]);
//! assert_eq!(eval(&expr, &env, &ctx).unwrap().to_string(), "3");
//! ```

pub mod ast;
pub mod builtins;
pub mod desugar;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod modules;
pub mod value;

pub use ast::Ast;
pub use builtins::create_global_env;
pub use environment::Env;
pub use error::AxError;
pub use evaluator::{eval, EvalContext};
pub use value::Value;
