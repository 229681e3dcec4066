/// Declaration parsing.
///
/// This chunk handles class members and the statements that only appear at the top of a unit:
/// - Imports (`import "file" as alias`, `import strict.collections.List`)
/// - Methods and their parameter lists
/// - Constructors (`create(...)`), fields (`has`), generics and `implement`
impl<S: TokenStreamWithLineMap> Parser<S> {
    // ========================================================================
    // Imports
    // ========================================================================

    fn parse_import_statement(&mut self) -> ParseResult<ImportStatement> {
        self.begin(NodeKind::ImportStatement);
        self.advance();

        let (target, alias) = match self.current().kind.clone() {
            TokenKind::StringLiteral(path) => {
                self.advance();
                let alias = if self.check_keyword(KeywordId::As) {
                    self.advance();
                    Some(self.expect_identifier("alias", &[HINT_INVALID_IMPORT])?)
                } else {
                    None
                };
                (ImportTarget::File { path }, alias)
            }
            TokenKind::Identifier(first) => {
                self.advance();
                let mut chain = vec![first];
                while self.match_operator(OperatorId::Dot) {
                    chain.push(self.expect_identifier("identifier", &[HINT_INVALID_IMPORT])?.value);
                }
                (ImportTarget::IdentifierChain { chain }, None)
            }
            _ => return self.fail_unexpected("file or path to class", &[HINT_INVALID_IMPORT]),
        };

        self.expect_end_of_statement()?;
        let region = self.complete(NodeKind::ImportStatement)?;
        Ok(ImportStatement { target, alias, region })
    }

    // ========================================================================
    // Methods
    // ========================================================================

    /// Parse `method name(parameters) [returns Type]` followed by an `=>` statement or an indented body.
    ///
    /// ## Notes
    /// - Without `returns` the return type is `void`, with an empty region where the clause would be.
    /// - A method whose body is not indented further than the enclosing block is abstract.
    /// - In an `=>` body of a non-void method, an expression statement becomes a return statement.
    pub fn parse_method_declaration(&mut self) -> ParseResult<MethodDeclaration> {
        self.begin(NodeKind::MethodDeclaration);
        self.expect_keyword(KeywordId::Method, &[HINT_MALFORMED_DECLARATION])?;
        let name = self.expect_identifier("method name", &[HINT_MALFORMED_DECLARATION])?;
        let parameters = self.parse_parameter_list()?;
        let return_type = if self.check_keyword(KeywordId::Returns) {
            self.advance();
            self.parse_type_name()?
        } else {
            TypeName::Concrete(ConcreteTypeName {
                name: "void".to_string(),
                region: Region::empty_at(self.current().region.begin),
            })
        };

        let outer_method = self.method_name.replace(name.value.clone());
        let body = if self.check_operator(OperatorId::Arrow) {
            self.advance();
            let statement = self.parse_statement()?;
            let statement = match statement {
                Statement::Expression(expression) if !is_void(&return_type) => Statement::Return(ReturnStatement {
                    value: Some(expression.expression),
                    region: expression.region,
                }),
                other => other,
            };
            StatementBlock {
                region: statement.region(),
                children: vec![statement],
            }
        } else {
            self.expect_end_of_statement()?;
            self.parse_block(true)?
        };
        self.method_name = outer_method;

        let region = self.complete(NodeKind::MethodDeclaration)?;
        Ok(MethodDeclaration {
            name,
            parameters,
            is_abstract: body.children.is_empty(),
            return_type,
            body,
            region,
        })
    }

    /// Parse `(name Type, ...)`.
    fn parse_parameter_list(&mut self) -> ParseResult<Vec<Parameter>> {
        self.expect_operator(OperatorId::LeftParen, "(", &[HINT_MALFORMED_DECLARATION])?;
        let mut parameters = Vec::new();
        if self.match_operator(OperatorId::RightParen) {
            return Ok(parameters);
        }
        loop {
            parameters.push(self.parse_parameter()?);
            if self.match_operator(OperatorId::Comma) {
                continue;
            }
            if self.match_operator(OperatorId::RightParen) {
                return Ok(parameters);
            }
            return self.fail_unexpected(")", &[HINT_OPEN_PARAMETER_LIST, HINT_INVALID_PARAMETER]);
        }
    }

    fn parse_parameter(&mut self) -> ParseResult<Parameter> {
        self.begin(NodeKind::Parameter);
        let name = self.expect_identifier("parameter name", &[HINT_INVALID_PARAMETER])?;
        if self.check_operator(OperatorId::Comma) || self.check_operator(OperatorId::RightParen) {
            return self.fail(ParseErrorKind::MissingParameterName, &[HINT_PARAMETER_TYPE_FIRST]);
        }
        let type_name = self.parse_type_name()?;
        let region = self.complete(NodeKind::Parameter)?;
        Ok(Parameter {
            name,
            type_name,
            region,
        })
    }

    // ========================================================================
    // Other class members
    // ========================================================================

    /// Parse `create(parameters)` followed by an indented body.
    fn parse_constructor_declaration(&mut self) -> ParseResult<ConstructorDeclaration> {
        self.begin(NodeKind::ConstructorDeclaration);
        self.advance();
        let parameters = self.parse_parameter_list()?;
        self.expect_end_of_statement()?;
        let body = self.parse_block(true)?;
        let region = self.complete(NodeKind::ConstructorDeclaration)?;
        Ok(ConstructorDeclaration {
            parameters,
            body,
            region,
        })
    }

    /// Parse `has name Type`.
    fn parse_field_declaration(&mut self) -> ParseResult<FieldDeclaration> {
        self.begin(NodeKind::FieldDeclaration);
        self.advance();
        let name = self.expect_identifier("field name", &[HINT_MALFORMED_DECLARATION])?;
        let type_name = self.parse_type_name()?;
        self.expect_end_of_statement()?;
        let region = self.complete(NodeKind::FieldDeclaration)?;
        Ok(FieldDeclaration {
            name,
            type_name,
            region,
        })
    }

    /// Parse `generic Name [is Constraint, ...]`.
    fn parse_generic_statement(&mut self) -> ParseResult<GenericStatement> {
        self.begin(NodeKind::GenericStatement);
        self.advance();
        let name = self.expect_identifier("generic name", &[HINT_MALFORMED_DECLARATION])?;
        let mut constraints = Vec::new();
        if self.check_keyword(KeywordId::Is) {
            self.advance();
            constraints.push(self.parse_type_name()?);
            while self.match_operator(OperatorId::Comma) {
                constraints.push(self.parse_type_name()?);
            }
        }
        self.expect_end_of_statement()?;
        let region = self.complete(NodeKind::GenericStatement)?;
        Ok(GenericStatement {
            name,
            constraints,
            region,
        })
    }

    /// Parse `implement Trait`.
    fn parse_implement_statement(&mut self) -> ParseResult<ImplementStatement> {
        self.begin(NodeKind::ImplementStatement);
        self.advance();
        let trait_name = self.parse_type_name()?;
        self.expect_end_of_statement()?;
        let region = self.complete(NodeKind::ImplementStatement)?;
        Ok(ImplementStatement { trait_name, region })
    }
}

fn is_void(type_name: &TypeName) -> bool {
    matches!(type_name, TypeName::Concrete(t) if t.name == "void" || t.name == "Void")
}
