/// Type name parsing.
///
/// `Name ['<' TypeName '>'] ('[' ']')* ['?']`: an optional single generic argument, any number of list suffixes
/// and an optional marker, e.g. `int`, `list<int[]>`, `Point[][]`, `string?`.
impl<S: TokenStreamWithLineMap> Parser<S> {
    // ========================================================================
    // Type names
    // ========================================================================

    pub fn parse_type_name(&mut self) -> ParseResult<TypeName> {
        self.begin(NodeKind::TypeName);
        let TokenKind::Identifier(name) = self.current().kind.clone() else {
            return self.fail_unexpected("type name", &[HINT_MALFORMED_DECLARATION]);
        };
        self.advance();
        self.parse_type_name_suffixes(name)
    }

    /// Continue a type name whose base name has already been consumed.
    ///
    /// ## Notes
    /// - Expects a [`NodeKind::TypeName`] structure on top of the stack that begins at the base name.
    /// - A `[` that is not directly followed by `]` is left alone: it starts a list access, not a list type.
    fn parse_type_name_suffixes(&mut self, name: String) -> ParseResult<TypeName> {
        let begin = self.structures.top().map(|s| s.begin).unwrap_or(self.last_end);

        let mut type_name = if self.match_operator(OperatorId::Smaller) {
            self.reclassify(NodeKind::GenericTypeName);
            let argument = self.parse_type_name()?;
            self.expect_operator(OperatorId::Greater, ">", &[])?;
            TypeName::Generic(GenericTypeName {
                name,
                argument: Box::new(argument),
                region: self.region_from(begin),
            })
        } else {
            TypeName::Concrete(ConcreteTypeName {
                name,
                region: self.region_from(begin),
            })
        };

        while self.check_operator(OperatorId::LeftBracket) && self.peek().is_operator(OperatorId::RightBracket) {
            self.advance();
            self.advance();
            type_name = TypeName::List(ListTypeName {
                element: Box::new(type_name),
                region: self.region_from(begin),
            });
        }

        if self.match_operator(OperatorId::QuestionMark) {
            type_name = TypeName::Optional(OptionalTypeName {
                type_name: Box::new(type_name),
                region: self.region_from(begin),
            });
        }

        self.reclassify(type_name.kind());
        self.complete(type_name.kind())?;
        Ok(type_name)
    }
}
