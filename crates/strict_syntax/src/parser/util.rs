/// Miscellaneous parser utilities.
///
/// This chunk contains small shared helpers that don't cleanly fit into
/// "decl", "stmts", "expr", or "types", plus read-only accessors for tooling.
impl<S: TokenStreamWithLineMap> Parser<S> {
    // ========================================================================
    // Utilities
    // ========================================================================

    /// Consume an identifier token.
    ///
    /// ## Parameters
    /// - `expected`: what the identifier names, used in the diagnostic (`expected field name but got: ...`).
    /// - `hints`: likely causes attached to the diagnostic.
    fn expect_identifier(&mut self, expected: &str, hints: &[&str]) -> ParseResult<Identifier> {
        let token = self.current();
        let TokenKind::Identifier(value) = &token.kind else {
            return self.fail_unexpected(expected, hints);
        };
        let identifier = Identifier {
            value: value.clone(),
            region: token.region,
        };
        self.advance();
        Ok(identifier)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Structures that are still open.
    pub fn structures(&self) -> &StructureStack {
        &self.structures
    }

    /// Syntax errors recorded so far.
    pub fn diagnostics(&self) -> &DiagnosticBag {
        &self.diagnostics
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }
}
