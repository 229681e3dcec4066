//! Provide the canonical language vocabulary of the Strict language.
//!
//! This crate is intentionally small and dependency-free. It holds the read-only tables that both the scanner and
//! the parser consult: reserved keywords, operators with their precedence classes, and the escape characters that
//! may follow a backslash inside string literals.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global mutable state, and no syntax-tree types.
//! - Every table is a `const` slice, so it is shared freely across threads and parser instances.

pub mod lang;
