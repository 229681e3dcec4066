//! Escape characters accepted after a backslash in string literals.
//!
//! ## Notes
//! - The scanner keeps escapes verbatim in the token value; [`unescaped`] is provided for tooling that needs the
//!   represented character.
//!
//! ## Examples
//! ```rust
//! use strict_core::lang::escapes;
//!
//! assert!(escapes::is_valid('n'));
//! assert_eq!(escapes::unescaped('t'), Some('\t'));
//! assert!(!escapes::is_valid('x'));
//! ```

/// One accepted escape: the character after the backslash and the character it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escape {
    pub marker: char,
    pub represents: char,
}

/// Registry of all accepted escapes.
pub const ESCAPES: &[Escape] = &[
    Escape { marker: 't', represents: '\t' },
    Escape { marker: 'n', represents: '\n' },
    Escape { marker: 'f', represents: '\u{000C}' },
    Escape { marker: 'r', represents: '\r' },
    Escape { marker: 'b', represents: '\u{0008}' },
    Escape { marker: '\'', represents: '\'' },
    Escape { marker: '"', represents: '"' },
    Escape { marker: '\\', represents: '\\' },
    Escape { marker: '0', represents: '\0' },
];

/// Return `true` if `marker` may follow a backslash.
pub fn is_valid(marker: char) -> bool {
    ESCAPES.iter().any(|e| e.marker == marker)
}

/// Character represented by the escape `\marker`.
pub fn unescaped(marker: char) -> Option<char> {
    ESCAPES.iter().find(|e| e.marker == marker).map(|e| e.represents)
}
