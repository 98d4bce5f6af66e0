//! The error taxonomy shared by every layer of the interpreter.

use thiserror::Error;

/// Errors the core evaluator (and its collaborators) can produce.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AxError {
    #[error("undefined variable: {0}")]
    UndefinedVariable(String),

    #[error("type error: {0}")]
    TypeError(String),

    #[error("not implemented: {0}")]
    NotImplemented(String),

    #[error("module error: {0}")]
    Module(String),

    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    #[error("parser error: {0}")]
    Parser(String),
}
