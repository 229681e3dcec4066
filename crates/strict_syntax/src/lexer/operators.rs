//! Operator scanning.

use strict_core::lang::operators::{self, Layout};

use super::{Scanner, Token, TokenKind};
use crate::diagnostics::LexicalError;
use crate::source::{CharReader, Offset};

impl<R: CharReader> Scanner<R> {
    /// Scan an operator whose leading character `lead` has already been consumed.
    ///
    /// Two-character operators win over the single-character fallback.
    pub(super) fn scan_operator(&mut self, start: Offset, lead: char) -> Token {
        let Some(options) = operators::options_for(lead) else {
            self.lexical_error(start, LexicalError::UnknownOperator(lead));
            return self.token(TokenKind::Invalid(lead.to_string()), start);
        };

        let next = self.reader.peek();
        let id = match options.pairs.iter().find(|(second, _)| *second == next) {
            Some((_, id)) => {
                self.advance();
                *id
            }
            None => options.single,
        };

        match operators::layout(id) {
            Layout::Opens => self.eos_prevention += 1,
            Layout::Closes => self.eos_prevention = self.eos_prevention.saturating_sub(1),
            Layout::Neutral => {}
        }
        self.token(TokenKind::Operator(id), start)
    }
}
