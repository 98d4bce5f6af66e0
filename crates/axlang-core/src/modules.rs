//! The module loader: `(import name)`.
//!
//! Mirrors the original implementation's `import` handling: locate
//! `modules/<name>.ax` under a shipped search root, read it fully,
//! parse `(begin <contents>)`, and hand the parsed body back to the
//! evaluator to run as `(module name <parsed_body>)`.
//!
//! The core does not own a parser (§1, §4.6 — the parser is an
//! external collaborator), so callers supply one through this trait.
//! This keeps `axlang-core` a leaf crate: `axlang-parser` depends on
//! it for the [`Ast`] type, not the other way around.

use crate::ast::Ast;
use crate::error::AxError;
use std::path::{Path, PathBuf};

/// Something that can turn source text into an [`Ast`]. Implemented by
/// the `axlang-parser` crate's subprocess client; a test-only stub
/// implementation lives alongside the evaluator's own tests.
pub trait SourceParser {
    fn parse(&self, source: &str) -> Result<Ast, AxError>;
}

/// Resolves `modules/<name>.ax` under `search_root` and reads it.
/// Parse errors and I/O errors both surface as `AxError::Module`,
/// per §7's `ModuleError`.
pub fn load_module_source(search_root: &Path, name: &str) -> Result<String, AxError> {
    let path: PathBuf = search_root.join("modules").join(format!("{name}.ax"));
    tracing::debug!(module = name, path = ?path, "resolving module");
    std::fs::read_to_string(&path)
        .map_err(|e| AxError::Module(format!("could not read module `{name}` at {path:?}: {e}")))
}

/// Parses the module's contents as `(begin <contents>)`, as required
/// by §4.5 step (c). The parser is handed the literal wrapped text, not
/// just the raw file contents, so a module with several top-level forms
/// comes back as one combined list rather than whatever the parser does
/// with dangling trailing forms.
pub fn parse_module_body(parser: &dyn SourceParser, contents: &str) -> Result<Ast, AxError> {
    let wrapped = format!("(begin {contents})");
    parser
        .parse(&wrapped)
        .map_err(|e| AxError::Module(format!("failed to parse module body: {e}")))
}
