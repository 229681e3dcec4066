//! Number literal scanning.
//!
//! Literals are kept exactly as written: `0x0f` stays `0x0f`, `1.50` stays `1.50`. Base conversion is left to
//! later stages.

use super::{Scanner, Token, TokenKind};
use crate::diagnostics::LexicalError;
use crate::source::{CharReader, Offset};

impl<R: CharReader> Scanner<R> {
    /// Scan a number whose first digit `first` has already been consumed.
    pub(super) fn scan_number(&mut self, start: Offset, first: char) -> Token {
        let mut text = String::from(first);
        if first == '0' {
            match self.reader.peek() {
                'x' | 'X' => {
                    text.push(self.advance());
                    return self.scan_radix_digits(start, text, 16);
                }
                'b' | 'B' => {
                    text.push(self.advance());
                    return self.scan_radix_digits(start, text, 2);
                }
                _ => {}
            }
        }

        self.push_decimal_digits(&mut text);
        if self.reader.peek() == '.' {
            text.push(self.advance());
            self.push_decimal_digits(&mut text);
            if matches!(self.reader.peek(), 'e' | 'E') {
                text.push(self.advance());
                if matches!(self.reader.peek(), '+' | '-') {
                    text.push(self.advance());
                }
                if !self.reader.peek().is_ascii_digit() {
                    let received = self.describe_next();
                    return self.invalid_number(start, text, received, "exponent digits".to_string());
                }
                self.push_decimal_digits(&mut text);
            }
        }
        self.token(TokenKind::NumberLiteral(text), start)
    }

    fn push_decimal_digits(&mut self, text: &mut String) {
        while self.reader.peek().is_ascii_digit() {
            text.push(self.advance());
        }
    }

    /// Digits after a `0x` or `0b` prefix. At least one digit is required and no letter or digit outside the radix
    /// may follow.
    fn scan_radix_digits(&mut self, start: Offset, mut text: String, radix: u32) -> Token {
        let prefix_len = text.len();
        while self.reader.peek().is_digit(radix) {
            text.push(self.advance());
        }
        let next = self.reader.peek();
        if text.len() == prefix_len || next.is_ascii_alphanumeric() {
            let received = self.describe_next();
            return self.invalid_number(start, text, received, format!("number with radix {radix}"));
        }
        self.token(TokenKind::NumberLiteral(text), start)
    }

    /// Consume the rest of the malformed literal and report it.
    fn invalid_number(&mut self, start: Offset, mut text: String, received: String, expected: String) -> Token {
        while self.reader.peek().is_ascii_alphanumeric() {
            text.push(self.advance());
        }
        self.lexical_error(start, LexicalError::UnexpectedChar { received, expected });
        self.token(TokenKind::Invalid(text), start)
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{TokenKind, lex};

    fn first(source: &str) -> TokenKind {
        lex(source).tokens.remove(0).kind
    }

    #[test]
    fn test_literals_kept_verbatim() {
        for literal in ["0", "10", "0x10", "0x0f", "0XAB", "0b100100", "0B1", "0.1232123", "1232521982", "1.5e-3", "2.0E10", "7."] {
            assert_eq!(first(literal), TokenKind::NumberLiteral(literal.to_string()), "{literal}");
        }
    }

    #[test]
    fn test_number_followed_by_operator() {
        let tokens = lex("1+0x1f)").tokens;
        assert_eq!(tokens[0].kind, TokenKind::NumberLiteral("1".into()));
        assert_eq!(tokens[2].kind, TokenKind::NumberLiteral("0x1f".into()));
        assert_eq!(tokens[2].region.len(), 4);
    }

    #[test]
    fn test_digit_outside_radix() {
        let output = lex("0x1g2 next");
        assert_eq!(output.tokens[0].kind, TokenKind::Invalid("0x1g2".into()));
        assert_eq!(output.tokens[1].kind, TokenKind::Identifier("next".into()));
        assert_eq!(
            output.diagnostics.entries()[0].message,
            "unexpected char 'g', expected 'number with radix 16'"
        );

        let output = lex("0b102");
        assert_eq!(output.tokens[0].kind, TokenKind::Invalid("0b102".into()));
        assert_eq!(
            output.diagnostics.entries()[0].message,
            "unexpected char '2', expected 'number with radix 2'"
        );
    }

    #[test]
    fn test_prefix_without_digits() {
        let output = lex("0x");
        assert_eq!(output.tokens[0].kind, TokenKind::Invalid("0x".into()));
        assert_eq!(
            output.diagnostics.entries()[0].message,
            "unexpected char 'end of input', expected 'number with radix 16'"
        );
    }

    #[test]
    fn test_exponent_requires_digits() {
        let output = lex("1.5e+ x");
        assert_eq!(output.tokens[0].kind, TokenKind::Invalid("1.5e+".into()));
        assert!(output.diagnostics.has_errors());
    }
}
