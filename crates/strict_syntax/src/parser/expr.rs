/// Expression parsing methods.
///
/// Binary expressions use precedence climbing over [`Precedence`]: every operator binds at its registered
/// precedence and the right operand is parsed one level stronger, so operators of equal strength associate to the
/// left. Below the binary level sit unary prefixes, `create`, operands and the postfix chain
/// (`(...)` calls, `[...]` list access, `.` selection and `exists`).
///
/// ## Notes
/// - Word operators (`and`, `or`, `is`, `isnt`) are keyword tokens; [`TokenKind::binary_operator`] maps them.
/// - Operators registered at [`Precedence::Lowest`] (`=`, `,`, `)`...) end the expression.
impl<S: TokenStreamWithLineMap> Parser<S> {
    // ========================================================================
    // Expressions
    // ========================================================================

    pub fn parse_expression(&mut self) -> ParseResult<Expression> {
        self.parse_binary(Precedence::Initial)
    }

    /// Parse the condition of an `if`.
    pub fn parse_conditional_expression(&mut self) -> ParseResult<Expression> {
        self.parse_binary(Precedence::InitialConditional)
    }

    fn parse_binary(&mut self, min: Precedence) -> ParseResult<Expression> {
        let begin = self.current().region.begin;
        let left = self.parse_unary()?;
        self.parse_binary_from(left, begin, min)
    }

    /// Continue a binary expression whose left operand starting at `begin` is already parsed.
    fn parse_binary_from(&mut self, mut left: Expression, begin: Offset, min: Precedence) -> ParseResult<Expression> {
        loop {
            let Some(operator) = self.current().kind.binary_operator() else {
                break;
            };
            let precedence = operators::precedence(operator);
            if precedence == Precedence::Lowest || precedence < min {
                break;
            }
            self.begin_at(NodeKind::BinaryExpression, begin);
            self.advance();
            let right = self.parse_binary(precedence.next())?;
            let region = self.complete(NodeKind::BinaryExpression)?;
            left = Expression::Binary(BinaryExpression {
                left: Box::new(left),
                right: Box::new(right),
                operator,
                region,
            });
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> ParseResult<Expression> {
        if let Some(operator) = self.current().operator_id().filter(|id| operators::is_unary(*id)) {
            self.begin(NodeKind::UnaryExpression);
            self.advance();
            let operand = self.parse_unary()?;
            let region = self.complete(NodeKind::UnaryExpression)?;
            return Ok(Expression::Unary(UnaryExpression {
                operator,
                operand: Box::new(operand),
                region,
            }));
        }

        let begin = self.current().region.begin;
        let operand = if self.check_keyword(KeywordId::Create) {
            self.parse_create_expression()?
        } else {
            self.parse_operand()?
        };
        self.parse_postfix(operand, begin)
    }

    /// Parse `create Type(arguments)`.
    fn parse_create_expression(&mut self) -> ParseResult<Expression> {
        self.begin(NodeKind::CreateExpression);
        self.advance();
        let type_name = self.parse_type_name()?;
        self.expect_operator(OperatorId::LeftParen, "(", &[])?;
        let arguments = self.parse_call_arguments()?;
        let region = self.complete(NodeKind::CreateExpression)?;
        Ok(Expression::Create(CreateExpression {
            type_name,
            arguments,
            region,
        }))
    }

    fn parse_operand(&mut self) -> ParseResult<Expression> {
        let token = self.current().clone();
        let region = token.region;
        match token.kind {
            TokenKind::Identifier(value) => {
                self.advance();
                Ok(Expression::Identifier(Identifier { value, region }))
            }
            TokenKind::StringLiteral(value) => {
                self.advance();
                Ok(Expression::String(StringLiteral { value, region }))
            }
            TokenKind::NumberLiteral(value) => {
                self.advance();
                Ok(Expression::Number(NumberLiteral { value, region }))
            }
            TokenKind::Operator(OperatorId::LeftParen) => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect_operator(OperatorId::RightParen, ")", &[])?;
                Ok(inner)
            }
            TokenKind::Operator(OperatorId::LeftBracket) => self.parse_list_expression(),
            _ => self.fail(
                ParseErrorKind::InvalidOperand {
                    received: token.to_string(),
                },
                &operation_hints(&token),
            ),
        }
    }

    /// Parse `[element, ...]`.
    fn parse_list_expression(&mut self) -> ParseResult<Expression> {
        self.begin(NodeKind::ListExpression);
        self.advance();
        let mut elements = Vec::new();
        if !self.check_operator(OperatorId::RightBracket) {
            elements.push(self.parse_expression()?);
            while self.match_operator(OperatorId::Comma) {
                elements.push(self.parse_expression()?);
            }
        }
        self.expect_operator(OperatorId::RightBracket, "] / end of list", &[])?;
        let region = self.complete(NodeKind::ListExpression)?;
        Ok(Expression::List(ListExpression { elements, region }))
    }

    /// Apply calls, list access, selections and `exists` to an operand starting at `begin`.
    fn parse_postfix(&mut self, mut expression: Expression, begin: Offset) -> ParseResult<Expression> {
        loop {
            if self.check_operator(OperatorId::LeftParen) {
                self.begin_at(NodeKind::CallExpression, begin);
                self.advance();
                let arguments = self.parse_call_arguments()?;
                let region = self.complete(NodeKind::CallExpression)?;
                expression = Expression::Call(CallExpression {
                    target: Box::new(expression),
                    arguments,
                    region,
                });
            } else if self.check_operator(OperatorId::LeftBracket) {
                self.begin_at(NodeKind::ListSelectExpression, begin);
                self.advance();
                let index = self.parse_expression()?;
                self.expect_operator(OperatorId::RightBracket, "] / end of list access", &[])?;
                let region = self.complete(NodeKind::ListSelectExpression)?;
                expression = Expression::ListSelect(ListSelectExpression {
                    target: Box::new(expression),
                    index: Box::new(index),
                    region,
                });
            } else if self.check_operator(OperatorId::Dot) {
                self.begin_at(NodeKind::FieldSelectExpression, begin);
                self.advance();
                let selection = self.expect_identifier("field or method name", &[HINT_INCOMPLETE_OPERATION])?;
                let region = self.complete(NodeKind::FieldSelectExpression)?;
                expression = Expression::FieldSelect(FieldSelectExpression {
                    target: Box::new(expression),
                    selection: Box::new(Expression::Identifier(selection)),
                    region,
                });
            } else if self.check_keyword(KeywordId::Exists) {
                self.begin_at(NodeKind::PostfixExpression, begin);
                self.advance();
                let region = self.complete(NodeKind::PostfixExpression)?;
                expression = Expression::Postfix(PostfixExpression {
                    operand: Box::new(expression),
                    operator: PostfixOperator::Exists,
                    region,
                });
            } else {
                return Ok(expression);
            }
        }
    }

    // ========================================================================
    // Call arguments
    // ========================================================================

    /// Parse the arguments after an opening `(` up to and including the closing `)`.
    fn parse_call_arguments(&mut self) -> ParseResult<Vec<CallArgument>> {
        let mut arguments = Vec::new();
        if self.match_operator(OperatorId::RightParen) {
            return Ok(arguments);
        }
        loop {
            arguments.push(self.parse_call_argument()?);
            if self.match_operator(OperatorId::Comma) {
                continue;
            }
            if self.match_operator(OperatorId::RightParen) {
                return Ok(arguments);
            }
            let hints = operation_hints(self.current());
            return self.fail_unexpected("end of method call", &hints);
        }
    }

    /// Parse `[label =] value`.
    fn parse_call_argument(&mut self) -> ParseResult<CallArgument> {
        self.begin(NodeKind::CallArgument);
        let labeled = self.current().is_identifier() && self.peek().is_operator(OperatorId::Assign);
        let label = if labeled {
            let label = self.advance().value().to_string();
            self.advance();
            Some(label)
        } else {
            None
        };
        let value = self.parse_expression()?;
        let region = self.complete(NodeKind::CallArgument)?;
        Ok(CallArgument { label, value, region })
    }
}
