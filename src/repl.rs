//! Interactive read-eval-print loop (§6).
//!
//! Grounded in the kakei/klisp binary's `rustyline::Editor` usage
//! (`examples/grabcocque-wabznasm/src/repl.rs` for the readline idiom)
//! and the original implementation's `exec.py::repl()` for the
//! multi-line accumulation, continuation prompt, and exit-command
//! behavior.

use axlang_core::builtins::create_global_env;
use axlang_core::evaluator::{eval, EvalContext};
use axlang_core::modules::SourceParser;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use crate::multiline::is_expression_complete;

const PROMPT: &str = "axlang> ";
const CONTINUATION_PROMPT: &str = "...     ";

fn is_exit_command(line: &str) -> bool {
    matches!(
        line.trim().to_ascii_lowercase().as_str(),
        "exit" | "quit" | "q"
    )
}

/// Runs the REPL against a persistent global environment. Each
/// accumulated, complete expression is parsed and evaluated in turn;
/// evaluation errors are printed and the session continues (§6).
pub fn run(parser: &dyn SourceParser, modules_root: &std::path::Path) -> rustyline::Result<()> {
    let mut rl: Editor<(), DefaultHistory> = Editor::new()?;
    let env = create_global_env();
    let ctx = EvalContext {
        parser,
        modules_root,
    };

    println!("AxLang {}", axlang_core::builtins::VERSION);
    println!("Type an expression, or 'exit' / 'quit' / 'q' to leave.");

    let mut buffer = String::new();

    loop {
        let prompt = if buffer.is_empty() {
            PROMPT
        } else {
            CONTINUATION_PROMPT
        };

        match rl.readline(prompt) {
            Ok(line) => {
                if buffer.is_empty() && is_exit_command(&line) {
                    println!("Goodbye!");
                    return Ok(());
                }

                let _ = rl.add_history_entry(line.as_str());

                if !buffer.is_empty() {
                    buffer.push('\n');
                }
                buffer.push_str(&line);

                if !is_expression_complete(&buffer) {
                    continue;
                }

                let source = std::mem::take(&mut buffer);
                if source.trim().is_empty() {
                    continue;
                }

                match parser.parse(&source) {
                    Ok(ast) => match eval(&ast, &env, &ctx) {
                        Ok(value) => println!("{value}"),
                        Err(e) => eprintln!("Error: {e}"),
                    },
                    Err(e) => eprintln!("Parse error: {e}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                if buffer.is_empty() {
                    println!("(Ctrl-C again, or type 'exit' to quit)");
                } else {
                    buffer.clear();
                }
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                return Ok(());
            }
            Err(err) => return Err(err),
        }
    }
}
