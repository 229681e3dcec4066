//! Strict language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved keywords, operators (including
//! delimiters, which the scanner classifies as operator tokens), and string escapes.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings and metadata through the
//! registry tables instead of comparing strings.
//!
//! ## Notes
//! - Registries are **pure**: no AST types, no IO, no side effects.
//! - The scanner and parser enforce syntax; registries provide spellings, precedence and classification.
//!
//! ## Examples
//! ```rust
//! use strict_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("method"), Some(KeywordId::Method));
//! assert_eq!(keywords::as_str(KeywordId::Method), "method");
//! ```

pub mod escapes;
pub mod keywords;
pub mod operators;
pub mod registry;
