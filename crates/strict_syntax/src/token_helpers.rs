//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::lexer::{Token, TokenKind};
use strict_core::lang::keywords::{self, KeywordId};
use strict_core::lang::operators::OperatorId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Operator this token stands for in a binary expression.
    ///
    /// ## Notes
    /// - Word-operator keywords (`and`, `or`, `is`, `isnt`) resolve to their operator counterparts.
    pub fn binary_operator(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            TokenKind::Keyword(id) => keywords::operator(*id),
            _ => None,
        }
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self, TokenKind::Identifier(_))
    }

    pub fn is_end_of_statement(&self) -> bool {
        matches!(self, TokenKind::EndOfStatement)
    }

    pub fn is_end_of_file(&self) -> bool {
        matches!(self, TokenKind::EndOfFile)
    }

    /// Return `true` for the synthetic layout tokens (`EndOfStatement`, `EndOfFile`).
    pub fn is_layout(&self) -> bool {
        matches!(self, TokenKind::EndOfStatement | TokenKind::EndOfFile)
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    pub fn is_keyword(&self, id: KeywordId) -> bool {
        self.kind.is_keyword(id)
    }

    pub fn is_operator(&self, id: OperatorId) -> bool {
        self.kind.is_operator(id)
    }

    pub fn is_identifier(&self) -> bool {
        self.kind.is_identifier()
    }

    pub fn is_end_of_statement(&self) -> bool {
        self.kind.is_end_of_statement()
    }

    pub fn is_end_of_file(&self) -> bool {
        self.kind.is_end_of_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Region;

    #[test]
    fn test_word_operators_resolve_for_binary_parsing() {
        let is = TokenKind::Keyword(KeywordId::Is);
        assert_eq!(is.binary_operator(), Some(OperatorId::Equals));
        assert_eq!(TokenKind::Keyword(KeywordId::If).binary_operator(), None);
        assert_eq!(
            TokenKind::Operator(OperatorId::Add).binary_operator(),
            Some(OperatorId::Add)
        );
        assert_eq!(TokenKind::Identifier("and".into()).binary_operator(), None);
    }

    #[test]
    fn test_token_wrappers() {
        let token = Token::new(TokenKind::Operator(OperatorId::Comma), Region::new(0, 1), 0);
        assert!(token.is_operator(OperatorId::Comma));
        assert!(!token.is_identifier());
        assert_eq!(token.keyword_id(), None);
        assert!(Token::end_of_file(0).kind.is_layout());
    }
}
