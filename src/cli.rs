//! Command-line argument surface (§6).

use clap::{Parser, Subcommand};

/// AxLang interpreter command line interface.
///
/// Run without a subcommand to start the interactive REPL.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose (debug-level) logging.
    #[arg(long, global = true, default_value_t = false)]
    pub debug: bool,

    /// Override the shipped `modules/` search root used by `import`.
    #[arg(long)]
    pub modules_dir: Option<std::path::PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Execute an AxLang expression directly.
    Expr {
        /// Source text, wrapped in `(begin ...)` before evaluation.
        expression: String,
    },
    /// Execute an AxLang source file.
    File {
        /// Path to a `.ax` file.
        filepath: std::path::PathBuf,
    },
}
