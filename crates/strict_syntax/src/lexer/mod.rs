//! Scanner for the Strict programming language
//!
//! Handles tokenization including:
//! - Keywords and identifiers
//! - Number and string literals (kept verbatim)
//! - Operators, delimiters and separators (greedy two-character matching)
//! - Layout: per-line indent and synthetic end-of-statement tokens
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, Indent)
//! - `strings` - String literal scanning
//! - `numbers` - Number literal scanning
//! - `operators` - Operator scanning and end-of-statement prevention

mod numbers;
mod operators;
mod strings;
pub mod tokens;

pub use tokens::{Indent, Token, TokenKind, keyword_id};

use crate::config::ScannerConfig;
use crate::diagnostics::{DiagnosticBag, DiagnosticEntry, LexicalError, Stage};
use crate::line_map::{LineMap, LineMapBuilder};
use crate::source::{CharReader, Offset, Region, StringReader};
use crate::stream::{TokenStream, TokenStreamWithLineMap};

// ============================================================================
// SCANNER STATE
// ----------------------------------------------------------------------------
// Line layout (simplified):
//
// [Line start] → spaces/tabs add to indent → first token freezes indent
//                                                 ↓
//                                        '(' or '[' → [prevention++]
//                                                 ↓
//                           '\n' → append line → EOS if line had tokens and prevention == 0
//                                                 ↓
//                                        ')' or ']' → [prevention--]
// ============================================================================

/// Lazy scanner turning characters into tokens.
///
/// Tokens are only produced on demand through the [`TokenStream`] operations; `peek` caches one token. Lexical
/// failures are recorded into the scanner's diagnostic bag and surface as [`TokenKind::Invalid`] tokens.
pub struct Scanner<R: CharReader = StringReader> {
    reader: R,
    config: ScannerConfig,
    /// Indent of the current line; frozen once the first token of the line is scanned.
    indent: Indent,
    update_indent: bool,
    /// No token has been scanned on the current line yet.
    empty_line: bool,
    line_begin: Offset,
    line_text: String,
    /// Open `(` and `[` suppressing newline-triggered end-of-statement tokens.
    eos_prevention: usize,
    emitted_any: bool,
    last_emitted_eos: bool,
    reached_end: bool,
    peeked: Option<Token>,
    last: Token,
    lines: LineMapBuilder,
    diagnostics: DiagnosticBag,
}

impl Scanner<StringReader> {
    /// Scanner over an in-memory source with the default configuration.
    pub fn from_source(source: impl Into<String>) -> Self {
        Self::new(StringReader::new(source))
    }
}

impl<R: CharReader> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, ScannerConfig::default())
    }

    pub fn with_config(reader: R, config: ScannerConfig) -> Self {
        Self {
            reader,
            config,
            indent: 0,
            update_indent: true,
            empty_line: true,
            line_begin: 0,
            line_text: String::new(),
            eos_prevention: 0,
            emitted_any: false,
            last_emitted_eos: false,
            reached_end: false,
            peeked: None,
            last: Token::begin_of_file(),
            lines: LineMapBuilder::new(),
            diagnostics: DiagnosticBag::new(),
        }
    }

    pub fn diagnostics(&self) -> &DiagnosticBag {
        &self.diagnostics
    }

    fn produce(&mut self) -> Token {
        let token = self.scan_token();
        if !token.is_end_of_file() {
            self.emitted_any = true;
            self.last_emitted_eos = token.is_end_of_statement();
        }
        token
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    /// Pull the next character, recording it into the text of the current line.
    fn advance(&mut self) -> char {
        let c = self.reader.pull();
        if c != '\n' && c != '\r' {
            self.line_text.push(c);
        }
        c
    }

    fn add_indent(&mut self, width: usize) {
        if self.update_indent {
            self.indent += width;
        }
    }

    /// Mark the current line as carrying tokens; its indent is frozen from here on.
    fn begin_token(&mut self) {
        self.update_indent = false;
        self.empty_line = false;
    }

    fn token(&self, kind: TokenKind, start: Offset) -> Token {
        Token::new(kind, Region::new(start, self.reader.index()), self.indent)
    }

    fn lexical_error(&mut self, start: Offset, error: LexicalError) {
        let region = Region::new(start, self.reader.index());
        tracing::debug!(%region, %error, "lexical error");
        self.diagnostics
            .record(DiagnosticEntry::error(Stage::Lexical, region, error.to_string()));
    }

    /// Describe the next character for diagnostics.
    fn describe_next(&self) -> String {
        if self.reader.is_exhausted() {
            "end of input".to_string()
        } else {
            self.reader.peek().to_string()
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Token {
        loop {
            if self.reader.is_exhausted() {
                return self.end_of_input();
            }
            let start = self.reader.index();
            let c = self.advance();
            match c {
                ' ' => self.add_indent(self.config.space_indent),
                '\t' => self.add_indent(self.config.tab_indent),
                '\r' => {}
                '\n' => {
                    if let Some(eos) = self.end_line(start) {
                        return eos;
                    }
                }
                '/' if self.reader.peek() == '/' => self.skip_comment(),
                '"' => {
                    self.begin_token();
                    return self.scan_string(start);
                }
                '0'..='9' => {
                    self.begin_token();
                    return self.scan_number(start, c);
                }
                _ if is_identifier_start(c) => {
                    self.begin_token();
                    return self.scan_identifier(start, c);
                }
                _ => {
                    self.begin_token();
                    return self.scan_operator(start, c);
                }
            }
        }
    }

    /// Finish the current line at the newline located at `newline`.
    fn end_line(&mut self, newline: Offset) -> Option<Token> {
        let text = std::mem::take(&mut self.line_text);
        self.lines.append(text, self.line_begin, newline - self.line_begin);

        let terminated = !self.empty_line && self.eos_prevention == 0;
        let indent = self.indent;
        self.indent = 0;
        self.update_indent = true;
        self.empty_line = true;
        self.line_begin = newline + 1;
        terminated.then(|| Token::end_of_statement(newline, indent))
    }

    fn end_of_input(&mut self) -> Token {
        let end = self.reader.index();
        if !self.reached_end {
            self.reached_end = true;
            if self.line_begin < end {
                let text = std::mem::take(&mut self.line_text);
                self.lines.append(text, self.line_begin, end - self.line_begin);
            }
            if self.emitted_any && !self.last_emitted_eos {
                return Token::end_of_statement(end, self.indent);
            }
        }
        Token::end_of_file(end)
    }

    /// Skip a `//` comment up to, but excluding, the line feed.
    fn skip_comment(&mut self) {
        while !self.reader.is_exhausted() && self.reader.peek() != '\n' {
            self.advance();
        }
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: Offset, first: char) -> Token {
        let mut spelling = String::from(first);
        while is_identifier_continue(self.reader.peek()) {
            spelling.push(self.advance());
        }

        // Look up identifier spelling in the reserved-word registry.
        match keyword_id(&spelling) {
            Some(id) => self.token(TokenKind::Keyword(id), start),
            None => self.token(TokenKind::Identifier(spelling), start),
        }
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<R: CharReader> TokenStream for Scanner<R> {
    fn pull(&mut self) -> &Token {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.produce(),
        };
        self.last = token;
        &self.last
    }

    fn peek(&mut self) -> &Token {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.produce(),
        };
        self.peeked.insert(token)
    }

    fn last(&self) -> &Token {
        &self.last
    }
}

impl<R: CharReader> TokenStreamWithLineMap for Scanner<R> {
    fn line_map(&self) -> LineMap {
        self.lines.snapshot()
    }

    fn take_diagnostics(&mut self) -> DiagnosticBag {
        std::mem::take(&mut self.diagnostics)
    }
}

// ============================================================================
// Eager scanning
// ============================================================================

/// Result of scanning a whole source.
#[derive(Debug, Clone)]
pub struct LexOutput {
    /// Every token, ending with exactly one `EndOfFile`.
    pub tokens: Vec<Token>,
    pub line_map: LineMap,
    pub diagnostics: DiagnosticBag,
}

/// Scan `source` to completion.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> LexOutput {
    lex_with(source, ScannerConfig::default())
}

/// Scan `source` to completion with an explicit configuration.
pub fn lex_with(source: &str, config: ScannerConfig) -> LexOutput {
    let mut scanner = Scanner::with_config(StringReader::new(source), config);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.pull().clone();
        let done = token.is_end_of_file();
        tokens.push(token);
        if done {
            break;
        }
    }
    tracing::debug!(tokens = tokens.len(), "scanned");
    LexOutput {
        tokens,
        line_map: scanner.line_map(),
        diagnostics: scanner.take_diagnostics(),
    }
}
