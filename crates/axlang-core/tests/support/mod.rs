//! A minimal recursive-descent reader used only by this crate's own
//! tests, so test programs can be written as AxLang source text
//! instead of hand-built `Ast` trees. Not a conforming implementation
//! of the parser contract in §4.6 — no subprocess, no JSON framing —
//! it exists purely to make integration tests readable.

use axlang_core::ast::Ast;
use axlang_core::error::AxError;
use axlang_core::modules::SourceParser;

pub struct TestParser;

impl SourceParser for TestParser {
    fn parse(&self, source: &str) -> Result<Ast, AxError> {
        let mut chars = source.chars().peekable();
        let node = read_node(&mut chars)?;
        Ok(node)
    }
}

pub fn parse(source: &str) -> Ast {
    TestParser.parse(source).expect("test source failed to parse")
}

fn skip_ws(chars: &mut std::iter::Peekable<std::str::Chars>) {
    loop {
        match chars.peek() {
            Some(c) if c.is_whitespace() => {
                chars.next();
            }
            Some(';') => {
                while let Some(c) = chars.peek() {
                    if *c == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            _ => break,
        }
    }
}

fn read_node(chars: &mut std::iter::Peekable<std::str::Chars>) -> Result<Ast, AxError> {
    skip_ws(chars);
    match chars.peek() {
        None => Err(AxError::Parser("unexpected end of input".to_string())),
        Some('(') => {
            chars.next();
            let mut items = Vec::new();
            loop {
                skip_ws(chars);
                match chars.peek() {
                    Some(')') => {
                        chars.next();
                        break;
                    }
                    None => return Err(AxError::Parser("unterminated list".to_string())),
                    _ => items.push(read_node(chars)?),
                }
            }
            Ok(Ast::List(items))
        }
        Some('"') => {
            let mut text = String::from('"');
            chars.next();
            loop {
                match chars.next() {
                    None => return Err(AxError::Parser("unterminated string".to_string())),
                    Some('\\') => {
                        text.push('\\');
                        if let Some(escaped) = chars.next() {
                            text.push(escaped);
                        }
                    }
                    Some('"') => {
                        text.push('"');
                        break;
                    }
                    Some(c) => text.push(c),
                }
            }
            Ok(Ast::StringLiteral(text))
        }
        Some(_) => {
            let mut token = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() || c == '(' || c == ')' {
                    break;
                }
                token.push(c);
                chars.next();
            }
            if let Ok(n) = token.parse::<i64>() {
                return Ok(Ast::Integer(n));
            }
            if let Ok(n) = token.parse::<f64>() {
                if token.contains('.') {
                    return Ok(Ast::Float(n));
                }
            }
            Ok(Ast::Symbol(token))
        }
    }
}
