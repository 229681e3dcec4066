//! Parser for the Strict programming language
//!
//! Converts a token stream into a [`TranslationUnit`]: recursive descent for declarations and statements,
//! precedence climbing for binary expressions, one token of lookahead throughout.
//!
//! ## Notes
//! - Blocks are delimited by indentation: every statement of a block starts on a line with the block's indent.
//! - A failing declaration is recorded as a diagnostic and replaced by an [`InvalidStatement`]; parsing resumes at
//!   the next line that starts at the class indent.
//!
//! ## Examples
//!
//! ```rust
//! use strict_syntax::ast::Statement;
//! use strict_syntax::parser;
//!
//! let source = "has count int\nmethod increment()\n\tcount += 1\n";
//! let output = parser::parse("Counter.strict", source);
//! assert!(!output.has_errors());
//! assert_eq!(output.unit.class.name, "Counter");
//! assert!(matches!(output.unit.class.children[1], Statement::Method(_)));
//! ```

use std::path::Path;

use crate::ast::*;
use crate::config::ParserConfig;
use crate::diagnostics::{
    DiagnosticBag, DiagnosticEntry, ParseError, ParseErrorKind, ParseResult, ResolvedDiagnostic, Stage,
};
use crate::lexer::{Indent, Scanner, Token, TokenKind};
use crate::line_map::LineMap;
use crate::source::{Offset, Region};
use crate::stream::TokenStreamWithLineMap;
use crate::structure::StructureStack;
use strict_core::lang::keywords::KeywordId;
use strict_core::lang::operators::{self, OperatorId, Precedence};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/types.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
