//! Operator vocabulary.
//!
//! This module defines the canonical operator set of the Strict language. The scanner classifies delimiters and
//! separators (`(`, `]`, `,`, `.`, ...) as operator tokens too, so they live in the same registry with their own
//! [`OperatorCategory`].
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**; word operators (`and`, `or`, `is`, `isnt`) are keywords and are
//!   resolved through [`crate::lang::keywords::operator`].
//! - [`OPTION_TABLE`] drives greedy two-character scanning: per leading character it lists the single-character
//!   operator and the second characters that extend it.
//! - [`Layout`] marks the operators that suppress newline-triggered end-of-statement insertion while open.
//!
//! ## Examples
//! ```rust
//! use strict_core::lang::operators::{self, OperatorId, Precedence};
//!
//! assert_eq!(operators::from_str("<="), Some(OperatorId::SmallerEquals));
//! assert_eq!(operators::precedence(OperatorId::Mul), Precedence::StrongArithmetic);
//! assert!(operators::precedence(OperatorId::Add) < operators::precedence(OperatorId::Mul));
//! ```

use super::registry::{Example, Since, Stability};

/// Binding strength of binary operators, ordered from weak to strong.
///
/// ## Notes
/// - `Lowest` is the precedence of every operator that can not continue a binary expression. Reaching one ends the
///   climbing loop.
/// - `Initial` and `InitialConditional` are starting points for the climbing loop, not operator precedences.
/// - `InitialArithmetic` sits above every conditional precedence, so starting there excludes logical and
///   relational operators.
/// - `Unary` is stronger than every binary operator and only exists as the upper bound of [`Precedence::next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Lowest,
    Initial,
    InitialConditional,
    WeakLogical,
    StrongLogical,
    Relational,
    InitialArithmetic,
    WeakArithmetic,
    StrongArithmetic,
    Unary,
}

impl Precedence {
    /// The next stronger precedence. `Unary` is its own successor.
    pub fn next(self) -> Precedence {
        match self {
            Precedence::Lowest => Precedence::Initial,
            Precedence::Initial => Precedence::InitialConditional,
            Precedence::InitialConditional => Precedence::WeakLogical,
            Precedence::WeakLogical => Precedence::StrongLogical,
            Precedence::StrongLogical => Precedence::Relational,
            Precedence::Relational => Precedence::InitialArithmetic,
            Precedence::InitialArithmetic => Precedence::WeakArithmetic,
            Precedence::WeakArithmetic => Precedence::StrongArithmetic,
            Precedence::StrongArithmetic | Precedence::Unary => Precedence::Unary,
        }
    }
}

/// Broad syntactic grouping of operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Arithmetic,
    Relational,
    Logical,
    Bitwise,
    Assignment,
    /// `++` and `--` applied after an operand.
    Postfix,
    /// Parentheses, brackets and braces.
    Delimiter,
    /// `,`, `:` and `;`.
    Separator,
    /// `.` member selection.
    Access,
    /// `=>` method bodies.
    Arrow,
    /// `?` optional type marker.
    Marker,
}

/// Effect an operator has on end-of-statement insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    Neutral,
    /// Newlines do not end a statement until the matching closer is scanned.
    Opens,
    Closes,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Xor,

    // Relational
    Equals,
    NotEquals,
    Smaller,
    SmallerEquals,
    Greater,
    GreaterEquals,

    // Logical
    And,
    Or,
    Negate,

    // Bitwise
    BitAnd,
    BitOr,

    // Assignment
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,

    // Postfix
    Increment,
    Decrement,

    // Delimiters
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftCurly,
    RightCurly,

    // Separators / access / markers
    Comma,
    Colon,
    Semicolon,
    Dot,
    Arrow,
    QuestionMark,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub category: OperatorCategory,
    pub precedence: Precedence,
    /// `true` if the operator may prefix an operand (`-x`, `!x`).
    pub is_unary: bool,
    pub layout: Layout,
    pub since: Since,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    binary(OperatorId::Add, "+", OperatorCategory::Arithmetic, Precedence::WeakArithmetic),
    OperatorInfo {
        is_unary: true,
        ..binary(OperatorId::Sub, "-", OperatorCategory::Arithmetic, Precedence::WeakArithmetic)
    },
    binary(OperatorId::Mul, "*", OperatorCategory::Arithmetic, Precedence::StrongArithmetic),
    binary(OperatorId::Div, "/", OperatorCategory::Arithmetic, Precedence::StrongArithmetic),
    binary(OperatorId::Mod, "%", OperatorCategory::Arithmetic, Precedence::StrongArithmetic),
    binary(OperatorId::Xor, "^", OperatorCategory::Arithmetic, Precedence::WeakArithmetic),
    // Relational
    binary(OperatorId::Equals, "==", OperatorCategory::Relational, Precedence::Relational),
    binary(OperatorId::NotEquals, "!=", OperatorCategory::Relational, Precedence::Relational),
    binary(OperatorId::Smaller, "<", OperatorCategory::Relational, Precedence::Relational),
    binary(OperatorId::SmallerEquals, "<=", OperatorCategory::Relational, Precedence::Relational),
    binary(OperatorId::Greater, ">", OperatorCategory::Relational, Precedence::Relational),
    binary(OperatorId::GreaterEquals, ">=", OperatorCategory::Relational, Precedence::Relational),
    // Logical
    binary(OperatorId::And, "&&", OperatorCategory::Logical, Precedence::StrongLogical),
    binary(OperatorId::Or, "||", OperatorCategory::Logical, Precedence::WeakLogical),
    OperatorInfo {
        is_unary: true,
        ..plain(OperatorId::Negate, "!", OperatorCategory::Logical)
    },
    // Bitwise
    plain(OperatorId::BitAnd, "&", OperatorCategory::Bitwise),
    plain(OperatorId::BitOr, "|", OperatorCategory::Bitwise),
    // Assignment
    plain(OperatorId::Assign, "=", OperatorCategory::Assignment),
    plain(OperatorId::AddAssign, "+=", OperatorCategory::Assignment),
    plain(OperatorId::SubAssign, "-=", OperatorCategory::Assignment),
    plain(OperatorId::MulAssign, "*=", OperatorCategory::Assignment),
    plain(OperatorId::DivAssign, "/=", OperatorCategory::Assignment),
    // Postfix
    plain(OperatorId::Increment, "++", OperatorCategory::Postfix),
    plain(OperatorId::Decrement, "--", OperatorCategory::Postfix),
    // Delimiters
    delimiter(OperatorId::LeftParen, "(", Layout::Opens),
    delimiter(OperatorId::RightParen, ")", Layout::Closes),
    delimiter(OperatorId::LeftBracket, "[", Layout::Opens),
    delimiter(OperatorId::RightBracket, "]", Layout::Closes),
    delimiter(OperatorId::LeftCurly, "{", Layout::Neutral),
    delimiter(OperatorId::RightCurly, "}", Layout::Neutral),
    // Separators / access / markers
    plain(OperatorId::Comma, ",", OperatorCategory::Separator),
    plain(OperatorId::Colon, ":", OperatorCategory::Separator),
    plain(OperatorId::Semicolon, ";", OperatorCategory::Separator),
    plain(OperatorId::Dot, ".", OperatorCategory::Access),
    plain(OperatorId::Arrow, "=>", OperatorCategory::Arrow),
    plain(OperatorId::QuestionMark, "?", OperatorCategory::Marker),
];

/// Scanning options for one leading character.
///
/// ## Notes
/// - `single` is produced when none of the `pairs` second characters follows.
/// - Pairs are tried in order; the first match wins.
#[derive(Debug, Clone, Copy)]
pub struct OperatorOptions {
    pub lead: char,
    pub single: OperatorId,
    pub pairs: &'static [(char, OperatorId)],
}

/// Greedy operator table keyed by leading character.
///
/// ## Notes
/// - `//` is a comment and is consumed by the scanner before this table is consulted.
/// - There are no `<<` and `>>` operators, so `>>` closes two generic type names.
pub const OPTION_TABLE: &[OperatorOptions] = &[
    options(
        '+',
        OperatorId::Add,
        &[('=', OperatorId::AddAssign), ('+', OperatorId::Increment)],
    ),
    options(
        '-',
        OperatorId::Sub,
        &[('=', OperatorId::SubAssign), ('-', OperatorId::Decrement)],
    ),
    options('*', OperatorId::Mul, &[('=', OperatorId::MulAssign)]),
    options('/', OperatorId::Div, &[('=', OperatorId::DivAssign)]),
    options(
        '=',
        OperatorId::Assign,
        &[('=', OperatorId::Equals), ('>', OperatorId::Arrow)],
    ),
    options('!', OperatorId::Negate, &[('=', OperatorId::NotEquals)]),
    options('<', OperatorId::Smaller, &[('=', OperatorId::SmallerEquals)]),
    options('>', OperatorId::Greater, &[('=', OperatorId::GreaterEquals)]),
    options('&', OperatorId::BitAnd, &[('&', OperatorId::And)]),
    options('|', OperatorId::BitOr, &[('|', OperatorId::Or)]),
    options('^', OperatorId::Xor, &[]),
    options('%', OperatorId::Mod, &[]),
    options(':', OperatorId::Colon, &[]),
    options(';', OperatorId::Semicolon, &[]),
    options('(', OperatorId::LeftParen, &[]),
    options(')', OperatorId::RightParen, &[]),
    options('[', OperatorId::LeftBracket, &[]),
    options(']', OperatorId::RightBracket, &[]),
    options('{', OperatorId::LeftCurly, &[]),
    options('}', OperatorId::RightCurly, &[]),
    options(',', OperatorId::Comma, &[]),
    options('.', OperatorId::Dot, &[]),
    options('?', OperatorId::QuestionMark, &[]),
];

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Canonical spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Binary precedence of an operator; [`Precedence::Lowest`] for operators that can not join two operands.
pub fn precedence(id: OperatorId) -> Precedence {
    info_for(id).precedence
}

/// Return `true` for `=`, `+=`, `-=`, `*=` and `/=`.
pub fn is_assign(id: OperatorId) -> bool {
    info_for(id).category == OperatorCategory::Assignment
}

/// Return `true` for operators that may prefix an operand.
pub fn is_unary(id: OperatorId) -> bool {
    info_for(id).is_unary
}

/// Effect of the operator on end-of-statement insertion.
pub fn layout(id: OperatorId) -> Layout {
    info_for(id).layout
}

/// Scanning options for a leading character, if any operator starts with it.
pub fn options_for(lead: char) -> Option<&'static OperatorOptions> {
    OPTION_TABLE.iter().find(|o| o.lead == lead)
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn binary(
    id: OperatorId,
    spelling: &'static str,
    category: OperatorCategory,
    precedence: Precedence,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        category,
        precedence,
        is_unary: false,
        layout: Layout::Neutral,
        since: Since(0, 1),
        stability: Stability::Stable,
        examples: &[],
    }
}

const fn plain(id: OperatorId, spelling: &'static str, category: OperatorCategory) -> OperatorInfo {
    binary(id, spelling, category, Precedence::Lowest)
}

const fn delimiter(id: OperatorId, spelling: &'static str, layout: Layout) -> OperatorInfo {
    OperatorInfo {
        layout,
        ..plain(id, spelling, OperatorCategory::Delimiter)
    }
}

const fn options(lead: char, single: OperatorId, pairs: &'static [(char, OperatorId)]) -> OperatorOptions {
    OperatorOptions { lead, single, pairs }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_ladder() {
        assert!(precedence(OperatorId::Or) < precedence(OperatorId::And));
        assert!(precedence(OperatorId::And) < precedence(OperatorId::Equals));
        assert!(precedence(OperatorId::SmallerEquals) < precedence(OperatorId::Sub));
        assert!(precedence(OperatorId::Xor) < precedence(OperatorId::Mod));
        assert_eq!(precedence(OperatorId::Comma), Precedence::Lowest);
    }

    #[test]
    fn test_next_saturates() {
        assert_eq!(Precedence::StrongArithmetic.next(), Precedence::Unary);
        assert_eq!(Precedence::Unary.next(), Precedence::Unary);
        assert_eq!(Precedence::Initial.next(), Precedence::InitialConditional);
    }

    #[test]
    fn test_only_parens_and_brackets_affect_layout() {
        let opening: Vec<_> = OPERATORS
            .iter()
            .filter(|o| o.layout == Layout::Opens)
            .map(|o| o.id)
            .collect();
        assert_eq!(opening, vec![OperatorId::LeftParen, OperatorId::LeftBracket]);
        assert_eq!(layout(OperatorId::LeftCurly), Layout::Neutral);
    }

    #[test]
    fn test_assign_family() {
        for id in [
            OperatorId::Assign,
            OperatorId::AddAssign,
            OperatorId::SubAssign,
            OperatorId::MulAssign,
            OperatorId::DivAssign,
        ] {
            assert!(is_assign(id), "{id:?}");
        }
        assert!(!is_assign(OperatorId::Equals));
    }
}
