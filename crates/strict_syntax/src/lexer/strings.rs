//! String literal scanning.
//!
//! ## Notes
//! - Only double-quoted literals exist. The token value is the body without quotes, escapes kept verbatim.
//! - A failing literal resynchronises at its closing quote so the rest of the line scans normally. A line feed
//!   inside a literal is never consumed here; it still ends the line.

use strict_core::lang::escapes;

use super::{Scanner, Token, TokenKind};
use crate::diagnostics::LexicalError;
use crate::source::{CharReader, Offset};

impl<R: CharReader> Scanner<R> {
    /// Scan a string literal whose opening quote has already been consumed.
    pub(super) fn scan_string(&mut self, start: Offset) -> Token {
        let mut body = String::new();
        let mut length = 0usize;
        loop {
            if self.reader.is_exhausted() {
                return self.invalid_string(start, body, LexicalError::UnterminatedString);
            }
            match self.reader.peek() {
                '"' => {
                    self.advance();
                    return self.token(TokenKind::StringLiteral(body), start);
                }
                '\n' => return self.invalid_string(start, body, LexicalError::StringContainsLineFeed),
                '\\' => {
                    self.advance();
                    let marker = self.reader.peek();
                    if self.reader.is_exhausted() || !escapes::is_valid(marker) {
                        self.skip_rest_of_string();
                        return self.invalid_string(start, body, LexicalError::InvalidEscapedChar);
                    }
                    self.advance();
                    body.push('\\');
                    body.push(marker);
                    length += 2;
                }
                _ => {
                    body.push(self.advance());
                    length += 1;
                }
            }
            if length > self.config.string_limit {
                self.skip_rest_of_string();
                let limit = self.config.string_limit;
                return self.invalid_string(start, body, LexicalError::StringTooLong(limit));
            }
        }
    }

    /// Skip up to and including the closing quote, stopping early at a line feed.
    fn skip_rest_of_string(&mut self) {
        while !self.reader.is_exhausted() {
            match self.reader.peek() {
                '\n' => return,
                '"' => {
                    self.advance();
                    return;
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    fn invalid_string(&mut self, start: Offset, body: String, error: LexicalError) -> Token {
        self.lexical_error(start, error);
        self.token(TokenKind::Invalid(format!("\"{body}")), start)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ScannerConfig;
    use crate::lexer::{TokenKind, lex, lex_with};
    use crate::source::Region;

    #[test]
    fn test_string_body_without_quotes() {
        let output = lex(r#"log("Hello World")"#);
        assert_eq!(output.tokens[2].kind, TokenKind::StringLiteral("Hello World".into()));
        assert_eq!(output.tokens[2].region, Region::new(4, 17));
        assert!(output.diagnostics.is_empty());
    }

    #[test]
    fn test_escapes_kept_verbatim() {
        let output = lex(r#""tab\tquote\"slash\\zero\0""#);
        assert_eq!(
            output.tokens[0].kind,
            TokenKind::StringLiteral(r#"tab\tquote\"slash\\zero\0"#.into())
        );
    }

    #[test]
    fn test_invalid_escape_resyncs_at_closing_quote() {
        let output = lex(r#""bad\q escape" next"#);
        assert!(matches!(output.tokens[0].kind, TokenKind::Invalid(_)));
        assert_eq!(output.tokens[1].kind, TokenKind::Identifier("next".into()));
        assert_eq!(
            output.diagnostics.entries()[0].message,
            "literal contains invalid escaped char"
        );
    }

    #[test]
    fn test_line_feed_inside_literal() {
        let output = lex("\"open\nnext");
        assert!(matches!(output.tokens[0].kind, TokenKind::Invalid(_)));
        assert!(output.tokens[1].is_end_of_statement());
        assert_eq!(output.tokens[2].kind, TokenKind::Identifier("next".into()));
        assert_eq!(output.diagnostics.entries()[0].message, "string literal contains linefeed");
    }

    #[test]
    fn test_unterminated_literal() {
        let output = lex("\"open");
        assert_eq!(output.tokens[0].kind, TokenKind::Invalid("\"open".into()));
        assert_eq!(output.diagnostics.entries()[0].message, "string literal is not terminated");
    }

    #[test]
    fn test_length_limit() {
        let config = ScannerConfig::new().with_string_limit(4);
        let output = lex_with("\"abcd\" \"abcdef\" x", config);
        assert_eq!(output.tokens[0].kind, TokenKind::StringLiteral("abcd".into()));
        assert!(matches!(output.tokens[1].kind, TokenKind::Invalid(_)));
        assert_eq!(output.tokens[2].kind, TokenKind::Identifier("x".into()));
        assert_eq!(
            output.diagnostics.entries()[0].message,
            "string literal exceeds the limit of 4 characters"
        );
    }
}
