//! Define the reserved keyword vocabulary for the Strict language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records spellings, categories, provenance, and examples.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Some reserved words are "word operators" (`or`, `and`, `is`, `isnt`). They are scanned as keywords and take
//!   part in binary expressions as the operator recorded in [`KeywordInfo::operator`].
//!
//! ## Examples
//! ```rust
//! use strict_core::lang::keywords::{self, KeywordId};
//! use strict_core::lang::operators::OperatorId;
//!
//! assert_eq!(keywords::from_str("isnt"), Some(KeywordId::Isnt));
//! assert_eq!(keywords::operator(KeywordId::Isnt), Some(OperatorId::NotEquals));
//! assert_eq!(keywords::from_str("While"), None);
//! ```

use super::operators::OperatorId;
use super::registry::{Example, Since, Stability};

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Control flow / statements
    If,
    Else,
    Do,
    For,
    From,
    To,
    In,
    Yield,
    Return,
    Break,
    Assert,
    Test,

    // Declarations
    Method,
    Returns,
    Type,
    Has,
    Create,
    Implement,
    Generic,

    // Imports
    Import,
    As,

    // Bindings
    Let,

    // Postfix
    Exists,

    // Word operators
    Is,
    Isnt,
    And,
    Or,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    ControlFlow,
    Declaration,
    Import,
    Binding,
    Operator,
}

/// Metadata for a keyword.
///
/// ## Notes
/// - `operator` is set for word operators and names the operator the parser treats the keyword as.
/// - `starts_statement` marks keywords that begin a statement of their own (dispatch candidates).
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub operator: Option<OperatorId>,
    pub starts_statement: bool,
    pub since: Since,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Control flow / statements
    statement(KeywordId::If, "if", KeywordCategory::ControlFlow, Since(0, 1)),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow, Since(0, 1)),
    info(KeywordId::Do, "do", KeywordCategory::ControlFlow, Since(0, 1)),
    statement(KeywordId::For, "for", KeywordCategory::ControlFlow, Since(0, 1)),
    info(KeywordId::From, "from", KeywordCategory::ControlFlow, Since(0, 1)),
    info(KeywordId::To, "to", KeywordCategory::ControlFlow, Since(0, 1)),
    info(KeywordId::In, "in", KeywordCategory::ControlFlow, Since(0, 1)),
    statement(KeywordId::Yield, "yield", KeywordCategory::ControlFlow, Since(0, 1)),
    statement(KeywordId::Return, "return", KeywordCategory::ControlFlow, Since(0, 1)),
    statement(KeywordId::Break, "break", KeywordCategory::ControlFlow, Since(0, 1)),
    statement(KeywordId::Assert, "assert", KeywordCategory::ControlFlow, Since(0, 2)),
    statement(KeywordId::Test, "test", KeywordCategory::ControlFlow, Since(0, 2)),
    // Declarations
    statement(KeywordId::Method, "method", KeywordCategory::Declaration, Since(0, 1)),
    info(KeywordId::Returns, "returns", KeywordCategory::Declaration, Since(0, 3)),
    info(KeywordId::Type, "type", KeywordCategory::Declaration, Since(0, 1)),
    statement(KeywordId::Has, "has", KeywordCategory::Declaration, Since(0, 3)),
    statement(KeywordId::Create, "create", KeywordCategory::Declaration, Since(0, 2)),
    statement(KeywordId::Implement, "implement", KeywordCategory::Declaration, Since(0, 2)),
    statement(KeywordId::Generic, "generic", KeywordCategory::Declaration, Since(0, 2)),
    // Imports
    statement(KeywordId::Import, "import", KeywordCategory::Import, Since(0, 1)),
    info(KeywordId::As, "as", KeywordCategory::Import, Since(0, 1)),
    // Bindings
    statement(KeywordId::Let, "let", KeywordCategory::Binding, Since(0, 2)),
    info(KeywordId::Exists, "exists", KeywordCategory::Binding, Since(0, 3)),
    // Word operators
    word_operator(KeywordId::Is, "is", OperatorId::Equals),
    word_operator(KeywordId::Isnt, "isnt", OperatorId::NotEquals),
    word_operator(KeywordId::And, "and", OperatorId::And),
    word_operator(KeywordId::Or, "or", OperatorId::Or),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling for `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category of a keyword.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// The operator a word-operator keyword stands for.
///
/// ## Returns
/// - `Some(OperatorId)` for `or`, `and`, `is`, `isnt`.
/// - `None` for every other keyword.
pub fn operator(id: KeywordId) -> Option<OperatorId> {
    info_for(id).operator
}

/// Return `true` if the keyword begins a statement or declaration of its own.
pub fn starts_statement(id: KeywordId) -> bool {
    info_for(id).starts_statement
}

/// Full metadata.
///
/// ## Returns
/// - The associated [`KeywordInfo`] from [`KEYWORDS`].
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory, since: Since) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        operator: None,
        starts_statement: false,
        since,
        stability: Stability::Stable,
        examples: &[],
    }
}

const fn statement(id: KeywordId, canonical: &'static str, category: KeywordCategory, since: Since) -> KeywordInfo {
    KeywordInfo {
        starts_statement: true,
        ..info(id, canonical, category, since)
    }
}

const fn word_operator(id: KeywordId, canonical: &'static str, operator: OperatorId) -> KeywordInfo {
    KeywordInfo {
        operator: Some(operator),
        ..info(id, canonical, KeywordCategory::Operator, Since(0, 1))
    }
}
