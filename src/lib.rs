//! AxLang CLI glue: argument parsing, REPL driver, multi-line
//! completeness check, and configuration — the ambient surfaces the
//! language core (`axlang-core`) and the parser client
//! (`axlang-parser`) are explicitly silent on (§1, §6).

pub mod cli;
pub mod config;
pub mod multiline;
pub mod repl;
