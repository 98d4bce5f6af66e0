//! Runtime values.

use crate::ast::Ast;
use crate::environment::Env;
use std::fmt;

/// A runtime value. `EnvHandle` is the single variant used for
/// classes, instances, and modules alike (§3.3, §9) — the evaluator
/// distinguishes usage contextually rather than through separate
/// variants.
#[derive(Clone)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Native(NativeFn),
    Lambda {
        params: Vec<String>,
        body: Box<Ast>,
        captured_env: Env,
    },
    EnvHandle(Env),
}

/// Built-ins accept a variadic argument list and return a value; arity
/// is adapted inside each built-in rather than in the type (§9).
pub type NativeFn = fn(&[Value]) -> Result<Value, crate::error::AxError>;

impl Value {
    /// Truthiness for `if`/`while`: everything but `false` is truthy.
    /// `Null` is truthy — AxLang has no falsy-nil convention, unlike
    /// the klisp dialect this crate grew out of.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false))
    }

    pub fn as_env_handle(&self) -> Option<&Env> {
        match self {
            Value::EnvHandle(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Boolean(b) => write!(f, "Boolean({b})"),
            Value::Integer(n) => write!(f, "Integer({n})"),
            Value::Float(n) => write!(f, "Float({n})"),
            Value::String(s) => write!(f, "String({s:?})"),
            Value::Native(_) => write!(f, "Native(..)"),
            Value::Lambda { params, .. } => write!(f, "Lambda(params={params:?})"),
            Value::EnvHandle(_) => write!(f, "EnvHandle(..)"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Native(_) => write!(f, "<native function>"),
            Value::Lambda { .. } => write!(f, "<function>"),
            Value::EnvHandle(_) => write!(f, "<environment>"),
        }
    }
}

// Functions are compared by identity, never equal across distinct
// instances; environments compare by identity too (see Env::is_same).
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::EnvHandle(a), Value::EnvHandle(b)) => a.is_same(b),
            _ => false,
        }
    }
}
