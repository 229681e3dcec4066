//! The token stream contract between scanner and parser.
//!
//! The parser only ever sees a [`TokenStream`]: one token of lookahead (`peek`), consumption (`pull`) and the most
//! recently consumed token (`last`). [`Scanner`](crate::lexer::Scanner) is the production implementation;
//! [`VecTokenStream`] replays a pre-built token sequence.
//!
//! ## Notes
//! - Exhausted streams end with one synthetic end-of-statement token (unless the last token already was one) and
//!   then return end-of-file forever.
//! - `last()` before the first `pull()` is an invalid token with value `BeginOfFile`.

use crate::diagnostics::DiagnosticBag;
use crate::lexer::{Token, TokenKind};
use crate::line_map::LineMap;

pub trait TokenStream {
    /// Consume the next token and return it.
    fn pull(&mut self) -> &Token;

    /// Return the next token without consuming it.
    fn peek(&mut self) -> &Token;

    /// Return the most recently pulled token.
    fn last(&self) -> &Token;
}

/// A token stream that also knows the lines it was scanned from.
pub trait TokenStreamWithLineMap: TokenStream {
    /// Lines seen so far; complete once end-of-file has been pulled.
    fn line_map(&self) -> LineMap;

    /// Take the diagnostics recorded while producing tokens.
    fn take_diagnostics(&mut self) -> DiagnosticBag;
}

/// Replays a fixed token sequence.
#[derive(Debug, Clone)]
pub struct VecTokenStream {
    tokens: Vec<Token>,
    index: usize,
    last: Token,
    end: Token,
    line_map: LineMap,
}

impl VecTokenStream {
    /// Create a stream over `tokens`.
    ///
    /// ## Notes
    /// - Everything from the first end-of-file token on is dropped; the stream appends its own terminators.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if let Some(eof) = tokens.iter().position(|t| t.kind == TokenKind::EndOfFile) {
            tokens.truncate(eof);
        }
        let end_offset = tokens.last().map(|t| t.region.end).unwrap_or(0);
        if let Some(last) = tokens.last() {
            if last.kind != TokenKind::EndOfStatement {
                tokens.push(Token::end_of_statement(end_offset, last.indent));
            }
        }
        Self {
            tokens,
            index: 0,
            last: Token::begin_of_file(),
            end: Token::end_of_file(end_offset),
            line_map: LineMap::default(),
        }
    }

    pub fn with_line_map(mut self, line_map: LineMap) -> Self {
        self.line_map = line_map;
        self
    }
}

impl TokenStream for VecTokenStream {
    fn pull(&mut self) -> &Token {
        self.last = match self.tokens.get(self.index) {
            Some(token) => {
                self.index += 1;
                token.clone()
            }
            None => self.end.clone(),
        };
        &self.last
    }

    fn peek(&mut self) -> &Token {
        self.tokens.get(self.index).unwrap_or(&self.end)
    }

    fn last(&self) -> &Token {
        &self.last
    }
}

impl TokenStreamWithLineMap for VecTokenStream {
    fn line_map(&self) -> LineMap {
        self.line_map.clone()
    }

    fn take_diagnostics(&mut self) -> DiagnosticBag {
        DiagnosticBag::new()
    }
}
