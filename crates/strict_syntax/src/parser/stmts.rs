/// Statement parsing.
///
/// This chunk handles statement dispatch, indentation-delimited blocks, control flow and instruction statements
/// (assignments, local field declarations and bare expressions).
impl<S: TokenStreamWithLineMap> Parser<S> {
    // ========================================================================
    // Blocks
    // ========================================================================

    /// Parse the statements of a block starting at the current token.
    ///
    /// The block opener's end of statement must already be consumed. The first token decides the block indent,
    /// which must be greater than the enclosing block's. The block ends at the first line that is less indented.
    ///
    /// ## Parameters
    /// - `allow_empty`: a first line that is not indented further yields an empty block instead of an error.
    fn parse_block(&mut self, allow_empty: bool) -> ParseResult<StatementBlock> {
        self.begin(NodeKind::StatementBlock);
        let parent = self.block_indent();
        let first = self.current();
        if first.is_end_of_file() || first.indent <= parent {
            if allow_empty {
                let region = self.complete(NodeKind::StatementBlock)?;
                return Ok(StatementBlock {
                    children: Vec::new(),
                    region: Region::empty_at(region.begin),
                });
            }
            let indent = first.indent;
            return self.fail(
                ParseErrorKind::InvalidIndentation {
                    indent,
                    expected: format!("indent bigger than {parent}"),
                },
                &[],
            );
        }

        let indent = first.indent;
        self.blocks.push(indent);
        let children = self.parse_statement_sequence(indent)?;
        self.blocks.pop();
        let region = self.complete(NodeKind::StatementBlock)?;
        Ok(StatementBlock { children, region })
    }

    fn parse_statement_sequence(&mut self, indent: Indent) -> ParseResult<Vec<Statement>> {
        let mut children = Vec::new();
        loop {
            let token = self.current();
            if token.is_end_of_file() {
                break;
            }
            if token.is_end_of_statement() {
                self.advance();
                continue;
            }
            if token.indent < indent {
                break;
            }
            if token.indent > indent {
                let received = token.indent;
                return self.fail(
                    ParseErrorKind::InvalidIndentation {
                        indent: received,
                        expected: format!("indent level of {indent}"),
                    },
                    &[],
                );
            }
            children.push(self.parse_statement()?);
        }
        Ok(children)
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Parse one statement including its end of statement.
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current().keyword_id() {
            Some(KeywordId::If) => Ok(Statement::Conditional(self.parse_conditional_statement()?)),
            Some(KeywordId::For) => self.parse_loop_statement(),
            Some(KeywordId::Return) => Ok(Statement::Return(self.parse_return_statement()?)),
            Some(KeywordId::Yield) => Ok(Statement::Yield(self.parse_yield_statement()?)),
            Some(KeywordId::Break) => Ok(Statement::Break(self.parse_break_statement()?)),
            Some(KeywordId::Assert) => Ok(Statement::Assert(self.parse_assert_statement()?)),
            Some(KeywordId::Test) => Ok(Statement::Test(self.parse_test_statement()?)),
            Some(KeywordId::Let) => self.parse_let_statement(),
            Some(KeywordId::Import) => Ok(Statement::Import(self.parse_import_statement()?)),
            Some(KeywordId::Method) => Ok(Statement::Method(self.parse_method_declaration()?)),
            Some(KeywordId::Has) => Ok(Statement::Field(self.parse_field_declaration()?)),
            Some(KeywordId::Create) if !self.peek().is_identifier() => {
                Ok(Statement::Constructor(self.parse_constructor_declaration()?))
            }
            _ => self.parse_instruction_statement(),
        }
    }

    /// Consume the optional `do` and the end of statement that open a control block.
    fn expect_block_opener(&mut self) -> ParseResult<()> {
        if self.check_keyword(KeywordId::Do) {
            self.advance();
            return self.expect_end_of_statement();
        }
        if self.current().is_end_of_statement() {
            self.advance();
            return Ok(());
        }
        let mut hints = vec![HINT_MISSING_DO];
        hints.extend(operation_hints(self.current()));
        self.fail_unexpected("do", &hints)
    }

    // ========================================================================
    // Control flow
    // ========================================================================

    /// Parse `if condition [do]` with its block and an optional `else if` chain or `else` block.
    fn parse_conditional_statement(&mut self) -> ParseResult<ConditionalStatement> {
        self.begin(NodeKind::ConditionalStatement);
        let indent = self.current().indent;
        self.advance();
        let condition = self.parse_conditional_expression()?;
        self.expect_block_opener()?;
        let consequence = self.parse_block(false)?;

        let at_else = self.check_keyword(KeywordId::Else) && self.current().indent == indent;
        let alternative = if at_else {
            self.advance();
            if self.check_keyword(KeywordId::If) {
                Some(Box::new(Statement::Conditional(self.parse_conditional_statement()?)))
            } else {
                self.expect_end_of_statement()?;
                Some(Box::new(Statement::Block(self.parse_block(false)?)))
            }
        } else {
            None
        };

        let region = self.complete(NodeKind::ConditionalStatement)?;
        Ok(ConditionalStatement {
            condition,
            consequence,
            alternative,
            region,
        })
    }

    /// Parse `for name in sequence` or `for name from begin to end`.
    ///
    /// The structure starts as a for-each loop and is reclassified once `from` is seen.
    fn parse_loop_statement(&mut self) -> ParseResult<Statement> {
        self.begin(NodeKind::ForEachLoopStatement);
        self.advance();
        let field = self.expect_identifier("loop variable", &[HINT_MALFORMED_DECLARATION])?;

        if self.check_keyword(KeywordId::From) {
            self.reclassify(NodeKind::RangedLoopStatement);
            self.advance();
            let begin = self.parse_expression()?;
            self.expect_keyword(KeywordId::To, &[])?;
            let end = self.parse_expression()?;
            self.expect_block_opener()?;
            let body = self.parse_block(false)?;
            let region = self.complete(NodeKind::RangedLoopStatement)?;
            return Ok(Statement::RangedLoop(RangedLoopStatement {
                field,
                begin,
                end,
                body,
                region,
            }));
        }

        self.expect_keyword(KeywordId::In, &[])?;
        let sequence = self.parse_expression()?;
        self.expect_block_opener()?;
        let body = self.parse_block(false)?;
        let region = self.complete(NodeKind::ForEachLoopStatement)?;
        Ok(Statement::ForEachLoop(ForEachLoopStatement {
            field,
            sequence,
            body,
            region,
        }))
    }

    fn parse_return_statement(&mut self) -> ParseResult<ReturnStatement> {
        self.begin(NodeKind::ReturnStatement);
        self.advance();
        let value = if self.current().kind.is_layout() {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect_end_of_statement()?;
        let region = self.complete(NodeKind::ReturnStatement)?;
        Ok(ReturnStatement { value, region })
    }

    fn parse_yield_statement(&mut self) -> ParseResult<YieldStatement> {
        self.begin(NodeKind::YieldStatement);
        self.advance();
        let value = self.parse_expression()?;
        self.expect_end_of_statement()?;
        let region = self.complete(NodeKind::YieldStatement)?;
        Ok(YieldStatement { value, region })
    }

    fn parse_break_statement(&mut self) -> ParseResult<BreakStatement> {
        self.begin(NodeKind::BreakStatement);
        self.advance();
        self.expect_end_of_statement()?;
        let region = self.complete(NodeKind::BreakStatement)?;
        Ok(BreakStatement { region })
    }

    fn parse_assert_statement(&mut self) -> ParseResult<AssertStatement> {
        self.begin(NodeKind::AssertStatement);
        self.advance();
        let expression = self.parse_expression()?;
        self.expect_end_of_statement()?;
        let region = self.complete(NodeKind::AssertStatement)?;
        Ok(AssertStatement { expression, region })
    }

    /// Parse a `test` block, attributed to the method being parsed.
    fn parse_test_statement(&mut self) -> ParseResult<TestStatement> {
        self.begin(NodeKind::TestStatement);
        self.advance();
        self.expect_end_of_statement()?;
        let body = self.parse_block(false)?;
        let region = self.complete(NodeKind::TestStatement)?;
        Ok(TestStatement {
            method_name: self.method_name.clone(),
            body,
            region,
        })
    }

    // ========================================================================
    // Bindings and instructions
    // ========================================================================

    /// Parse a `let` binding wrapped in an expression statement.
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        self.begin(NodeKind::ExpressionStatement);
        let binding = self.parse_let_binding()?;
        self.expect_end_of_statement()?;
        let region = self.complete(NodeKind::ExpressionStatement)?;
        Ok(Statement::Expression(ExpressionStatement {
            expression: Expression::Let(binding),
            region,
        }))
    }

    /// Parse `let name = value` or `let [first, second] = value`.
    fn parse_let_binding(&mut self) -> ParseResult<LetBinding> {
        self.begin(NodeKind::LetBinding);
        self.advance();
        let names = if self.match_operator(OperatorId::LeftBracket) {
            if self.check_operator(OperatorId::RightBracket) {
                return self.fail(ParseErrorKind::EmptyLetBinding, &[]);
            }
            let mut names = vec![self.expect_identifier("variable name", &[HINT_MALFORMED_DECLARATION])?];
            while self.match_operator(OperatorId::Comma) {
                names.push(self.expect_identifier("variable name", &[HINT_MALFORMED_DECLARATION])?);
            }
            self.expect_operator(OperatorId::RightBracket, "]", &[])?;
            names
        } else {
            vec![self.expect_identifier("variable name", &[HINT_MALFORMED_DECLARATION])?]
        };
        self.expect_operator(OperatorId::Assign, "=", &[])?;
        let value = self.parse_expression()?;
        let region = self.complete(NodeKind::LetBinding)?;
        Ok(LetBinding {
            names,
            value: Box::new(value),
            region,
        })
    }

    /// Parse an instruction: an assignment, a local field declaration or a bare expression.
    ///
    /// ## Notes
    /// - An identifier followed by an identifier, `<` or `[` starts a type name (`int[] values = ...`). When the
    ///   `[` turns out not to be followed by `]`, the identifier was the target of a list access instead.
    /// - `++` and `--` after the expression make it a postfix expression statement.
    fn parse_instruction_statement(&mut self) -> ParseResult<Statement> {
        self.begin(NodeKind::ExpressionStatement);
        let begin = self.current().region.begin;

        let declares_type = self.current().is_identifier() && {
            let next = self.peek();
            next.is_identifier() || next.is_operator(OperatorId::Smaller) || next.is_operator(OperatorId::LeftBracket)
        };
        let expression = if declares_type {
            match self.parse_declared_type_or_access()? {
                DeclaredOrAccess::Declared(type_name) => return self.finish_local_field(type_name, begin),
                DeclaredOrAccess::Access(target) => {
                    let target = self.parse_postfix(target, begin)?;
                    self.parse_binary_from(target, begin, Precedence::Initial)?
                }
            }
        } else {
            self.parse_expression()?
        };

        let statement = match self.current().operator_id() {
            Some(operator) if operators::is_assign(operator) => {
                self.reclassify(NodeKind::AssignStatement);
                self.advance();
                let value = self.parse_expression()?;
                self.finish_instruction()?;
                let region = self.complete(NodeKind::AssignStatement)?;
                Statement::Assign(AssignStatement {
                    target: AssignTarget::Expression(expression),
                    value,
                    operator,
                    region,
                })
            }
            Some(operator @ (OperatorId::Increment | OperatorId::Decrement)) => {
                self.advance();
                let postfix = PostfixExpression {
                    operand: Box::new(expression),
                    operator: if operator == OperatorId::Increment {
                        PostfixOperator::Increment
                    } else {
                        PostfixOperator::Decrement
                    },
                    region: self.region_from(begin),
                };
                self.finish_instruction()?;
                let region = self.complete(NodeKind::ExpressionStatement)?;
                Statement::Expression(ExpressionStatement {
                    expression: Expression::Postfix(postfix),
                    region,
                })
            }
            _ => {
                self.finish_instruction()?;
                let region = self.complete(NodeKind::ExpressionStatement)?;
                Statement::Expression(ExpressionStatement { expression, region })
            }
        };
        Ok(statement)
    }

    /// Parse the identifier at the current token either as the start of a type name or as a list access target.
    fn parse_declared_type_or_access(&mut self) -> ParseResult<DeclaredOrAccess> {
        let begin = self.current().region.begin;
        let identifier = self.expect_identifier("identifier", &[])?;
        if self.check_operator(OperatorId::LeftBracket) && !self.peek().is_operator(OperatorId::RightBracket) {
            self.begin_at(NodeKind::ListSelectExpression, begin);
            self.advance();
            let index = self.parse_expression()?;
            self.expect_operator(OperatorId::RightBracket, "] / end of list access", &[])?;
            let region = self.complete(NodeKind::ListSelectExpression)?;
            return Ok(DeclaredOrAccess::Access(Expression::ListSelect(ListSelectExpression {
                target: Box::new(Expression::Identifier(identifier)),
                index: Box::new(index),
                region,
            })));
        }
        self.begin_at(NodeKind::TypeName, begin);
        let type_name = self.parse_type_name_suffixes(identifier.value)?;
        Ok(DeclaredOrAccess::Declared(type_name))
    }

    /// Parse `name [= value]` after the type of a local field declaration.
    fn finish_local_field(&mut self, type_name: TypeName, begin: Offset) -> ParseResult<Statement> {
        self.reclassify(NodeKind::FieldDeclaration);
        let name = self.expect_identifier("field name", &[HINT_MALFORMED_DECLARATION])?;
        let field = FieldDeclaration {
            name,
            type_name,
            region: self.region_from(begin),
        };
        if self.check_operator(OperatorId::Assign) {
            self.reclassify(NodeKind::AssignStatement);
            self.advance();
            let value = self.parse_expression()?;
            self.finish_instruction()?;
            let region = self.complete(NodeKind::AssignStatement)?;
            return Ok(Statement::Assign(AssignStatement {
                target: AssignTarget::Field(field),
                value,
                operator: OperatorId::Assign,
                region,
            }));
        }
        self.finish_instruction()?;
        self.complete(NodeKind::FieldDeclaration)?;
        Ok(Statement::Field(field))
    }

    /// Accept an optional `;` and the end of statement.
    fn finish_instruction(&mut self) -> ParseResult<()> {
        self.match_operator(OperatorId::Semicolon);
        self.expect_end_of_statement()
    }
}

/// Outcome of the identifier lookahead in instruction statements.
enum DeclaredOrAccess {
    Declared(TypeName),
    Access(Expression),
}
