//! AxLang's binary entry point: REPL by default, or an `expr`/`file`
//! subcommand for one-shot execution (§6).

use axlang::cli::{CliArgs, Commands};
use axlang::{config, repl};
use axlang_core::builtins::create_global_env;
use axlang_core::evaluator::{eval, EvalContext};
use axlang_core::modules::SourceParser;
use axlang_parser::SubprocessParser;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = CliArgs::parse();
    init_tracing(args.debug);

    let cfg = config::load();
    let modules_root = resolve_modules_root(args.modules_dir.clone(), &cfg);
    let parser = SubprocessParser::from_env(&modules_root);

    let exit_code = match args.command {
        None => run_repl(&parser, &modules_root),
        Some(Commands::Expr { expression }) => run_expr(&expression, &parser, &modules_root),
        Some(Commands::File { filepath }) => run_file(&filepath, &parser, &modules_root),
    };

    std::process::exit(exit_code);
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// `--modules-dir` overrides the config file, which overrides the
/// directory the running binary lives in (§4.5, §4.6).
fn resolve_modules_root(cli_override: Option<PathBuf>, cfg: &config::AxLangConfig) -> PathBuf {
    if let Some(dir) = cli_override {
        return dir;
    }
    if let Some(dir) = &cfg.modules_dir {
        return PathBuf::from(dir);
    }
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn run_repl(parser: &SubprocessParser, modules_root: &std::path::Path) -> i32 {
    match repl::run(parser, modules_root) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("REPL error: {e}");
            1
        }
    }
}

fn run_expr(expression: &str, parser: &SubprocessParser, modules_root: &std::path::Path) -> i32 {
    let wrapped = format!("(begin {expression})");
    let env = create_global_env();
    let ctx = EvalContext {
        parser,
        modules_root,
    };

    match parser
        .parse(&wrapped)
        .and_then(|ast| eval(&ast, &env, &ctx))
    {
        Ok(value) => {
            println!("{value}");
            0
        }
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

fn run_file(
    filepath: &std::path::Path,
    parser: &SubprocessParser,
    modules_root: &std::path::Path,
) -> i32 {
    let source = match std::fs::read_to_string(filepath) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Could not read {}: {e}", filepath.display());
            return 1;
        }
    };

    let wrapped = format!("(begin {source})");
    let env = create_global_env();
    let ctx = EvalContext {
        parser,
        modules_root,
    };

    match parser
        .parse(&wrapped)
        .and_then(|ast| eval(&ast, &env, &ctx))
    {
        Ok(value) => {
            println!("{value}");
            0
        }
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}
