//! Client for the external AxLang parser subprocess (§4.6).
//!
//! The parser itself is out of scope for this repository (§1) — it is
//! a grammar-driven external binary invoked once per top-level input.
//! This crate shells out to it, extracts the `Parsed value:` stanza,
//! strips ANSI framing, and decodes the remainder as an [`Ast`].

mod client;

pub use client::SubprocessParser;

#[cfg(test)]
mod tests;
