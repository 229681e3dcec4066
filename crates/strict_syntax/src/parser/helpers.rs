/// Token-stream helpers, structure tracking and failure reporting.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Inspecting/consuming tokens (`current`, `peek`, `advance`)
/// - Matching / expecting keywords and operators
/// - Layout handling (`expect_end_of_statement`, `skip_end_of_statements`)
/// - Structure tracking (`begin`, `complete`) and failures (`fail`)
///
/// Most functions in this file are internal (`fn`) and are documented primarily
/// to aid maintenance and onboarding.

const HINT_MISSING_DO: &str = "The 'do' keyword after control structures is forgotten";
const HINT_INCOMPLETE_OPERATION: &str = "An operation has not been completed";
const HINT_INVALID_OPERATOR: &str = "An invalid operator is applied to an operation";
const HINT_MALFORMED_DECLARATION: &str = "Declarations are not written properly";
const HINT_OPEN_PARAMETER_LIST: &str = "The ParameterList is left open";
const HINT_INVALID_PARAMETER: &str = "A Parameter declaration is invalid";
const HINT_PARAMETER_TYPE_FIRST: &str = "The parameters type was not specified prior to the name";
const HINT_INVALID_IMPORT: &str = "The import target is invalid";
const HINT_INTERNAL: &str = "Internal bug in the compiler";

impl<S: TokenStreamWithLineMap> Parser<S> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// The token the parser is positioned at.
    pub fn current(&self) -> &Token {
        self.stream.last()
    }

    /// The token after the current one.
    fn peek(&mut self) -> &Token {
        self.stream.peek()
    }

    /// Move to the next token and return the one just left.
    fn advance(&mut self) -> Token {
        let token = self.stream.last().clone();
        if !token.kind.is_layout() {
            self.last_end = token.region.end;
        }
        self.at_line_start = token.is_end_of_statement();
        self.stream.pull();
        token
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.current().is_keyword(id)
    }

    fn check_operator(&self, id: OperatorId) -> bool {
        self.current().is_operator(id)
    }

    /// If the current token is the given operator, consume it and return `true`.
    fn match_operator(&mut self, id: OperatorId) -> bool {
        if self.check_operator(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_operator(&mut self, id: OperatorId, expected: &str, hints: &[&str]) -> ParseResult<()> {
        if self.match_operator(id) {
            return Ok(());
        }
        self.fail_unexpected(expected, hints)
    }

    fn expect_keyword(&mut self, id: KeywordId, hints: &[&str]) -> ParseResult<()> {
        if self.check_keyword(id) {
            self.advance();
            return Ok(());
        }
        self.fail_unexpected(strict_core::lang::keywords::as_str(id), hints)
    }

    /// Consume the end of the current statement. End of file also ends a statement but is never consumed.
    fn expect_end_of_statement(&mut self) -> ParseResult<()> {
        let token = self.current();
        if token.is_end_of_statement() {
            self.advance();
            return Ok(());
        }
        if token.is_end_of_file() {
            return Ok(());
        }
        let hints = operation_hints(token);
        self.fail_unexpected("end of statement", &hints)
    }

    fn skip_end_of_statements(&mut self) {
        while self.current().is_end_of_statement() {
            self.advance();
        }
    }

    /// Indent of the innermost open block.
    fn block_indent(&self) -> Indent {
        self.blocks.last().copied().unwrap_or(CLASS_INDENT)
    }

    // ========================================================================
    // Structures
    // ========================================================================

    /// Start a structure at the current token.
    fn begin(&mut self, kind: NodeKind) {
        let begin = self.current().region.begin;
        self.structures.push(kind, begin);
    }

    /// Start a structure at an earlier offset, for productions discovered after their first operand.
    fn begin_at(&mut self, kind: NodeKind, begin: Offset) {
        self.structures.push(kind, begin);
    }

    fn reclassify(&mut self, kind: NodeKind) {
        self.structures.update_top_kind(kind);
    }

    /// Complete the innermost structure and return its region.
    fn complete(&mut self, expected: NodeKind) -> ParseResult<Region> {
        match self.structures.pop(expected) {
            Some(structure) => Ok(Region::new(structure.begin, self.last_end.max(structure.begin))),
            None => {
                tracing::warn!(%expected, "structure stack underflow");
                self.fail(ParseErrorKind::StructureUnderflow { expected }, &[HINT_INTERNAL])
            }
        }
    }

    /// Region from `begin` to the end of the last consumed token.
    fn region_from(&self, begin: Offset) -> Region {
        Region::new(begin, self.last_end.max(begin))
    }

    // ========================================================================
    // Failures
    // ========================================================================

    /// Record a syntax error for the innermost structure and return it.
    ///
    /// ## Notes
    /// - The region runs from the begin of the innermost structure to the end of the current token.
    /// - The structure stack is left as is; recovery truncates it.
    fn fail<T>(&mut self, kind: ParseErrorKind, hints: &[&str]) -> ParseResult<T> {
        let (structure, begin) = match self.structures.top() {
            Some(top) => (top.kind, top.begin),
            None => (NodeKind::Unknown, self.current().region.begin),
        };
        let region = Region::new(begin, self.current().region.end.max(begin));
        let hints: Vec<String> = hints.iter().map(|h| h.to_string()).collect();
        self.diagnostics.record(
            DiagnosticEntry::error(Stage::Syntactic, region, kind.to_string())
                .with_unit_name(self.config.unit_name.as_str())
                .with_hints(hints.clone()),
        );
        Err(ParseError {
            structure,
            region,
            kind,
            hints,
        })
    }

    fn fail_unexpected<T>(&mut self, expected: &str, hints: &[&str]) -> ParseResult<T> {
        let received = self.current().to_string();
        self.fail(
            ParseErrorKind::UnexpectedToken {
                expected: expected.to_string(),
                received,
            },
            hints,
        )
    }
}

/// Common reasons for an operation that stops at `token`.
fn operation_hints(token: &Token) -> Vec<&'static str> {
    match token.kind {
        TokenKind::Identifier(_) => vec![HINT_INCOMPLETE_OPERATION],
        TokenKind::Operator(_) => vec![HINT_INVALID_OPERATOR],
        _ => Vec::new(),
    }
}
