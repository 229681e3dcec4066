//! Token types for the Strict scanner.
//!
//! The scanner uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words (including the word operators `and`, `or`, `is`, `isnt`)
//! - `Operator(OperatorId)` for operators, delimiters and separators
//!
//! ## Notes
//! - Every token carries the indent of the physical line it was scanned on.
//! - `EndOfStatement` and `EndOfFile` are synthetic: their regions are empty.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use strict_core::lang::keywords::{self, KeywordId};
use strict_core::lang::operators::{self, OperatorId};

use crate::source::Region;

/// Accumulated leading whitespace of a line, in scanner units (space = 1, tab = 4 by default).
pub type Indent = usize;

// ============================================================================
// TOKEN TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // ========== Keyword / operator (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),

    // ========== Identifiers and Literals ==========
    Identifier(String),
    /// Body of a string literal without quotes; escapes are kept verbatim.
    StringLiteral(String),
    /// Number literal spelled exactly as in the source.
    NumberLiteral(String),

    // ========== Layout ==========
    EndOfStatement,
    EndOfFile,

    /// Text that could not be scanned; a lexical diagnostic has been recorded for it.
    Invalid(String),
}

impl TokenKind {
    /// Short name of the kind, used by token dumps.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Keyword(_) => "Keyword",
            TokenKind::Operator(_) => "Operator",
            TokenKind::Identifier(_) => "Identifier",
            TokenKind::StringLiteral(_) => "String",
            TokenKind::NumberLiteral(_) => "Number",
            TokenKind::EndOfStatement => "EndOfStatement",
            TokenKind::EndOfFile => "EndOfFile",
            TokenKind::Invalid(_) => "Invalid",
        }
    }
}

/// A token with its kind, source region and line indent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub region: Region,
    pub indent: Indent,
}

impl Token {
    pub fn new(kind: TokenKind, region: Region, indent: Indent) -> Self {
        Self { kind, region, indent }
    }

    /// Synthetic end-of-statement token located at `offset`.
    pub fn end_of_statement(offset: usize, indent: Indent) -> Self {
        Self::new(TokenKind::EndOfStatement, Region::empty_at(offset), indent)
    }

    /// Terminal token located at `offset`.
    pub fn end_of_file(offset: usize) -> Self {
        Self::new(TokenKind::EndOfFile, Region::empty_at(offset), 0)
    }

    /// Placeholder returned by `last()` before anything has been pulled.
    pub fn begin_of_file() -> Self {
        Self::new(TokenKind::Invalid("BeginOfFile".to_string()), Region::UNKNOWN, 0)
    }

    /// Textual value of the token.
    ///
    /// ## Returns
    /// - The spelling for keywords and operators, the payload for identifiers, literals and invalid tokens.
    /// - An empty string for `EndOfStatement` and `EndOfFile`.
    pub fn value(&self) -> &str {
        match &self.kind {
            TokenKind::Keyword(id) => keywords::as_str(*id),
            TokenKind::Operator(id) => operators::as_str(*id),
            TokenKind::Identifier(text)
            | TokenKind::StringLiteral(text)
            | TokenKind::NumberLiteral(text)
            | TokenKind::Invalid(text) => text,
            TokenKind::EndOfStatement | TokenKind::EndOfFile => "",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenKind::StringLiteral(text) => write!(f, "\"{text}\""),
            TokenKind::EndOfStatement => write!(f, "end of statement"),
            TokenKind::EndOfFile => write!(f, "end of file"),
            TokenKind::Invalid(text) => write!(f, "invalid({text})"),
            _ => f.write_str(self.value()),
        }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_for_messages() {
        let region = Region::new(0, 1);
        let cases = [
            (TokenKind::Identifier("value".into()), "value"),
            (TokenKind::Keyword(KeywordId::Isnt), "isnt"),
            (TokenKind::Operator(OperatorId::RightParen), ")"),
            (TokenKind::NumberLiteral("0x0f".into()), "0x0f"),
            (TokenKind::StringLiteral("a\\n".into()), "\"a\\n\""),
            (TokenKind::EndOfStatement, "end of statement"),
            (TokenKind::EndOfFile, "end of file"),
            (TokenKind::Invalid("@".into()), "invalid(@)"),
        ];
        for (kind, expected) in cases {
            assert_eq!(Token::new(kind, region, 0).to_string(), expected);
        }
    }

    #[test]
    fn test_synthetic_tokens_have_empty_values() {
        assert_eq!(Token::end_of_statement(4, 2).value(), "");
        assert!(Token::end_of_statement(4, 2).region.is_empty());
        assert_eq!(Token::end_of_file(9).indent, 0);
        assert_eq!(Token::begin_of_file().value(), "BeginOfFile");
    }
}
