//! Syntax front end for the Strict language: scanner, parser, AST, diagnostics.
//!
//! A source unit flows through three stages:
//! - the [`lexer::Scanner`] turns characters into tokens, inserting end-of-statement tokens at line ends and
//!   recording a [`line_map::LineMap`];
//! - the [`parser::Parser`] pulls those tokens through the [`stream::TokenStream`] contract and builds a
//!   [`ast::TranslationUnit`], tracking open productions on a [`structure::StructureStack`];
//! - lexical and syntactic problems are collected in a [`diagnostics::DiagnosticBag`] instead of aborting.
//!
//! ## Notes
//! - This crate is syntax-only: it does not resolve names, check types or evaluate constants.
//! - Vocabulary identity (keywords, operators, escapes) comes from the `strict_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use strict_syntax::{lexer, parser};
//!
//! let lexed = lexer::lex("has count int\n");
//! assert_eq!(lexed.tokens.len(), 5);
//!
//! let output = parser::parse("Counter.strict", "has count int\n");
//! assert!(!output.has_errors());
//! assert_eq!(output.unit.class.children.len(), 1);
//! ```

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod lexer;
pub mod line_map;
pub mod parser;
pub mod source;
pub mod stream;
pub mod structure;
pub mod token_helpers;
pub mod visit;
