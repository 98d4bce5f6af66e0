//! The abstract syntax tree produced by the (external) parser.
//!
//! An [`Ast`] node is a tagged union of the five shapes the language
//! surface can take: two numeric literal kinds, string literals (which
//! retain their surrounding quotes until evaluation strips them), bare
//! symbols, and lists. Lists are the only compound form; whether a list
//! is a special form or a function call is a property of evaluation,
//! not of parsing, so this type carries no such distinction.

use std::fmt;

/// A node of the parsed program tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Ast {
    Integer(i64),
    Float(f64),
    /// Includes the surrounding `"` characters; see module docs.
    StringLiteral(String),
    Symbol(String),
    List(Vec<Ast>),
}

impl Ast {
    pub fn symbol(name: impl Into<String>) -> Self {
        Ast::Symbol(name.into())
    }

    pub fn list(items: impl IntoIterator<Item = Ast>) -> Self {
        Ast::List(items.into_iter().collect())
    }

    /// True for a `Symbol` or `StringLiteral` whose first and last characters are `"`.
    pub fn is_string_literal_shape(&self) -> bool {
        match self {
            Ast::StringLiteral(s) | Ast::Symbol(s) => {
                s.len() >= 2 && s.starts_with('"') && s.ends_with('"')
            }
            _ => false,
        }
    }

    /// Strips the surrounding quotes. Panics if the shape doesn't match;
    /// callers must check [`Ast::is_string_literal_shape`] first.
    pub fn strip_quotes(&self) -> &str {
        match self {
            Ast::StringLiteral(s) | Ast::Symbol(s) => &s[1..s.len() - 1],
            _ => unreachable!("strip_quotes called on non-string-literal-shaped node"),
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Ast::Symbol(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Ast]> {
        match self {
            Ast::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ast::Integer(n) => write!(f, "{n}"),
            Ast::Float(n) => write!(f, "{n}"),
            Ast::StringLiteral(s) => write!(f, "{s}"),
            Ast::Symbol(s) => write!(f, "{s}"),
            Ast::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Identifier regex from the surface syntax: `^[A-Za-z_][A-Za-z0-9_]*$`.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
