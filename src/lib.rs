#![forbid(unsafe_code)]
//! Strict Programming Language Front End
//!
//! This crate is the command-line driver around the syntax front end: it reads source files, runs the scanner and
//! the parser from `strict_syntax`, and renders tokens, trees and diagnostics.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: If a panic represents a front end bug (logic error), use `.expect("INVARIANT: reason")`
//!   with a clear explanation.

pub mod cli;
pub mod config;
pub mod version;

pub use strict_syntax::{ast, diagnostics, lexer, parser};

pub use config::FrontendConfig;
