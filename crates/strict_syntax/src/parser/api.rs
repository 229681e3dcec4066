/// Everything a parse produces.
///
/// Parsing never fails as a whole: declarations that can not be parsed are kept as
/// [`Statement::Invalid`] and reported in `diagnostics`, together with the scanner's lexical errors.
#[derive(Debug, Clone)]
pub struct ParseOutput {
    pub unit: TranslationUnit,
    /// Lexical and syntactic diagnostics, ordered by position.
    pub diagnostics: DiagnosticBag,
    pub line_map: LineMap,
    /// Structure pushes and pops, when [`ParserConfig::record_structure_history`] is set.
    pub structure_history: Option<String>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    /// Diagnostics with line and column positions.
    pub fn resolve_diagnostics(&self) -> Vec<ResolvedDiagnostic> {
        self.diagnostics.resolve(&self.line_map)
    }
}

/// Scan and parse `source` as the unit `unit_name`.
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `unit_name`: file name of the unit; its stem becomes the class name.
/// - `source`: Strict source text.
#[tracing::instrument(skip_all, fields(unit = unit_name, source_len = source.len()))]
pub fn parse(unit_name: &str, source: &str) -> ParseOutput {
    parse_with(Scanner::from_source(source), ParserConfig::new(unit_name))
}

/// Parse any token stream with an explicit configuration.
pub fn parse_with<S: TokenStreamWithLineMap>(stream: S, config: ParserConfig) -> ParseOutput {
    let output = Parser::new(stream, config).parse();
    tracing::debug!(
        children = output.unit.class.children.len(),
        diagnostics = output.diagnostics.len(),
        "parsed translation unit"
    );
    output
}
