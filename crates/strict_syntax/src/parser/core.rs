/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint, including the per-declaration
/// error recovery.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser`; every chunk shares the imports declared there.

/// Indent of every top-level declaration.
const CLASS_INDENT: Indent = 0;

/// Parser state.
///
/// ## Notes
/// - The current token is the stream's `last()` token; `peek()` is the one after it.
/// - `blocks` holds the indent of every open statement block, innermost last.
pub struct Parser<S: TokenStreamWithLineMap> {
    stream: S,
    config: ParserConfig,
    structures: StructureStack,
    blocks: Vec<Indent>,
    diagnostics: DiagnosticBag,
    /// Name of the method whose body is being parsed, attributed to nested tests.
    method_name: Option<String>,
    /// End of the last consumed token that is not synthetic.
    last_end: Offset,
    /// The last consumed token was an end of statement.
    at_line_start: bool,
}

impl<S: TokenStreamWithLineMap> Parser<S> {
    /// Create a parser and move to the first token of `stream`.
    pub fn new(mut stream: S, config: ParserConfig) -> Self {
        stream.pull();
        let structures = if config.record_structure_history {
            StructureStack::recording()
        } else {
            StructureStack::new()
        };
        Self {
            stream,
            config,
            structures,
            blocks: Vec::new(),
            diagnostics: DiagnosticBag::new(),
            method_name: None,
            last_end: 0,
            at_line_start: true,
        }
    }

    /// Parse the whole stream into a translation unit.
    ///
    /// ## Notes
    /// - Never fails: every declaration that can not be parsed becomes an [`InvalidStatement`] and a diagnostic.
    pub fn parse(mut self) -> ParseOutput {
        self.begin(NodeKind::TranslationUnit);
        self.skip_end_of_statements();

        let mut imports = Vec::new();
        while self.check_keyword(KeywordId::Import) {
            let start = self.current().region.begin;
            let depth = self.structures.len();
            match self.parse_import_statement() {
                Ok(import) => imports.push(import),
                Err(error) => self.recover(&error, depth, start),
            }
            self.skip_end_of_statements();
        }

        let class = self.parse_class_body();
        let region = self.complete(NodeKind::TranslationUnit).unwrap_or_else(|e| e.region);
        let unit = TranslationUnit {
            name: self.config.unit_name.clone(),
            imports,
            class,
            region,
        };
        self.finish(unit)
    }

    fn parse_class_body(&mut self) -> ClassDeclaration {
        self.begin(NodeKind::ClassDeclaration);
        self.blocks.push(CLASS_INDENT);
        let depth = self.structures.len();

        let mut super_types = Vec::new();
        let mut children = Vec::new();
        loop {
            self.skip_end_of_statements();
            if self.current().is_end_of_file() {
                break;
            }
            let start = self.current().region.begin;
            match self.parse_top_level() {
                Ok(statement) => {
                    if let Statement::Implement(implement) = &statement {
                        super_types.push(implement.trait_name.clone());
                    }
                    children.push(statement);
                }
                Err(error) => {
                    children.push(Statement::Invalid(InvalidStatement { region: error.region }));
                    self.recover(&error, depth, start);
                }
            }
        }

        self.blocks.pop();
        let region = self.complete(NodeKind::ClassDeclaration).unwrap_or_else(|e| e.region);
        let is_trait = children
            .iter()
            .any(|c| matches!(c, Statement::Method(m) if m.is_abstract));
        ClassDeclaration {
            name: class_name(&self.config.unit_name),
            super_types,
            children,
            is_trait,
            region,
        }
    }

    /// Parse one class member.
    fn parse_top_level(&mut self) -> ParseResult<Statement> {
        let token = self.current().clone();
        if token.indent > CLASS_INDENT {
            self.begin(NodeKind::InvalidStatement);
            return self.fail(
                ParseErrorKind::InvalidIndentation {
                    indent: token.indent,
                    expected: format!("indent level of {CLASS_INDENT}"),
                },
                &[],
            );
        }
        match token.keyword_id() {
            Some(KeywordId::Method) => Ok(Statement::Method(self.parse_method_declaration()?)),
            Some(KeywordId::Has) => Ok(Statement::Field(self.parse_field_declaration()?)),
            Some(KeywordId::Create) if !self.peek().is_identifier() => {
                Ok(Statement::Constructor(self.parse_constructor_declaration()?))
            }
            Some(KeywordId::Generic) => Ok(Statement::Generic(self.parse_generic_statement()?)),
            Some(KeywordId::Implement) => Ok(Statement::Implement(self.parse_implement_statement()?)),
            Some(KeywordId::Test) => Ok(Statement::Test(self.parse_test_statement()?)),
            Some(KeywordId::Let) => self.parse_let_statement(),
            _ => {
                self.begin(NodeKind::InvalidStatement);
                self.fail(
                    ParseErrorKind::StrayToken {
                        received: token.to_string(),
                    },
                    &[HINT_MALFORMED_DECLARATION],
                )
            }
        }
    }

    /// Unwind after a failed declaration and skip to the next line starting at the class indent.
    ///
    /// ## Parameters
    /// - `depth`: structure stack height to restore.
    /// - `start`: offset of the failed declaration; recovery always moves past it.
    fn recover(&mut self, error: &ParseError, depth: usize, start: Offset) {
        tracing::debug!(structure = %error.structure, region = %error.region, "recovering from syntax error");
        self.structures.truncate(depth);
        self.blocks.truncate(1);
        self.method_name = None;
        loop {
            let token = self.current();
            if token.is_end_of_file() {
                return;
            }
            let next_declaration = self.at_line_start
                && !token.is_end_of_statement()
                && token.region.begin > start
                && token.indent <= CLASS_INDENT;
            if next_declaration {
                return;
            }
            self.advance();
        }
    }

    fn finish(mut self, unit: TranslationUnit) -> ParseOutput {
        let mut diagnostics = self.stream.take_diagnostics();
        diagnostics.extend(std::mem::take(&mut self.diagnostics));
        diagnostics.assign_unit_name(&self.config.unit_name);
        diagnostics.sort_by_position();
        ParseOutput {
            unit,
            diagnostics,
            line_map: self.stream.line_map(),
            structure_history: self.structures.history().map(str::to_string),
        }
    }
}

/// Class name of a unit: its file name without directories and extension.
fn class_name(unit_name: &str) -> String {
    Path::new(unit_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| unit_name.to_string())
}
