//! Subprocess invocation and stdout normalization.
//!
//! Grounded in the original implementation's `parser.py`: locate the
//! `Parsed value:` marker, strip ANSI color codes, JSON-decode the
//! remainder with a bare-symbol fallback, and — before any of that —
//! try the input as a standalone numeric literal to route around the
//! grammar's rejection of bare negative numbers at the top level.

use axlang_core::ast::Ast;
use axlang_core::error::AxError;
use axlang_core::modules::SourceParser;
use regex::Regex;
use std::path::PathBuf;
use std::process::Command;
use std::sync::LazyLock;

const MARKER: &str = "Parsed value:";

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[A-Za-z]").expect("static ANSI regex is valid"));

/// Drives the external parser binary. `parser_bin`/`grammar_path` are
/// configurable so a locally built parser can be pointed at without a
/// code change (§4.6).
pub struct SubprocessParser {
    parser_bin: String,
    grammar_path: PathBuf,
}

impl SubprocessParser {
    pub fn new(parser_bin: impl Into<String>, grammar_path: impl Into<PathBuf>) -> Self {
        Self {
            parser_bin: parser_bin.into(),
            grammar_path: grammar_path.into(),
        }
    }

    /// Reads `AXLANG_PARSER_BIN` (default `syntax-cli`) and
    /// `AXLANG_GRAMMAR_PATH` (default `grammar/axlang.bnf` under
    /// `modules_root`).
    pub fn from_env(modules_root: &std::path::Path) -> Self {
        let parser_bin =
            std::env::var("AXLANG_PARSER_BIN").unwrap_or_else(|_| "syntax-cli".to_string());
        let grammar_path = std::env::var("AXLANG_GRAMMAR_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| modules_root.join("grammar").join("axlang.bnf"));
        Self::new(parser_bin, grammar_path)
    }
}

impl SourceParser for SubprocessParser {
    fn parse(&self, source: &str) -> Result<Ast, AxError> {
        if let Some(literal) = try_parse_bare_numeric_literal(source) {
            tracing::debug!(source, "bare numeric literal, skipping subprocess parser");
            return Ok(literal);
        }

        tracing::debug!(bin = %self.parser_bin, grammar = ?self.grammar_path, "invoking parser subprocess");
        let output = Command::new(&self.parser_bin)
            .arg("-g")
            .arg(&self.grammar_path)
            .arg("-m")
            .arg("LALR1")
            .arg("-p")
            .arg(source)
            .output()
            .map_err(|e| AxError::Parser(format!("failed to spawn `{}`: {e}", self.parser_bin)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AxError::Parser(format!(
                "parser exited with {}: {stderr}",
                output.status
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        decode_parser_stdout(&stdout)
    }
}

/// §4.6 rule 4: a workaround for a grammar limitation with negative
/// number literals. Tried before the subprocess is invoked at all.
fn try_parse_bare_numeric_literal(source: &str) -> Option<Ast> {
    let trimmed = source.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(Ast::Integer(n));
    }
    if trimmed.contains('.') {
        if let Ok(n) = trimmed.parse::<f64>() {
            return Some(Ast::Float(n));
        }
    }
    None
}

/// §4.6 rules 1-3: locate the marker, strip ANSI, JSON-decode with a
/// bare-symbol fallback.
fn decode_parser_stdout(stdout: &str) -> Result<Ast, AxError> {
    let after_marker = stdout
        .find(MARKER)
        .map(|idx| &stdout[idx + MARKER.len()..])
        .ok_or_else(|| {
            AxError::Parser(format!("could not find `{MARKER}` marker in parser output"))
        })?;

    let stripped = ANSI_ESCAPE.replace_all(after_marker, "");
    let stripped = stripped.trim();

    match serde_json::from_str::<serde_json::Value>(stripped) {
        Ok(json) => Ok(json_to_ast(&json)),
        Err(_) => Ok(Ast::Symbol(stripped.to_string())),
    }
}

/// JSON numbers become Integer/Float, strings become Symbol or
/// StringLiteral depending on whether they carry embedded quote
/// characters, arrays become Lists (§6 parser contract).
fn json_to_ast(json: &serde_json::Value) -> Ast {
    match json {
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ast::Integer(i)
            } else {
                Ast::Float(n.as_f64().unwrap_or(0.0))
            }
        }
        serde_json::Value::String(s) => {
            if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
                Ast::StringLiteral(s.clone())
            } else {
                Ast::Symbol(s.clone())
            }
        }
        serde_json::Value::Array(items) => Ast::List(items.iter().map(json_to_ast).collect()),
        serde_json::Value::Bool(b) => Ast::Symbol(b.to_string()),
        serde_json::Value::Null => Ast::Symbol("null".to_string()),
        serde_json::Value::Object(_) => {
            Ast::Symbol(json.to_string())
        }
    }
}

pub(crate) fn decode_for_tests(stdout: &str) -> Result<Ast, AxError> {
    decode_parser_stdout(stdout)
}

pub(crate) fn bare_numeric_for_tests(source: &str) -> Option<Ast> {
    try_parse_bare_numeric_literal(source)
}
