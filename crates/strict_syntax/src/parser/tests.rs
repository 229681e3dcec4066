#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on correctness of specific syntactic forms and on the parser's
/// per-declaration error recovery (one diagnostic per broken declaration, no cascades).
mod tests {
    use super::*;

    fn parse_str(source: &str) -> ParseOutput {
        parse("Test.strict", source)
    }

    fn parse_ok(source: &str) -> ClassDeclaration {
        let output = parse_str(source);
        assert!(
            !output.has_errors(),
            "unexpected diagnostics: {:?}",
            output.diagnostics.entries()
        );
        output.unit.class
    }

    fn method_body(class: &ClassDeclaration, index: usize) -> &[Statement] {
        match &class.children[index] {
            Statement::Method(m) => &m.body.children,
            other => panic!("Expected method, got {:?}", other.kind()),
        }
    }

    fn messages(output: &ParseOutput) -> Vec<&str> {
        output.diagnostics.entries().iter().map(|e| e.message.as_str()).collect()
    }

    #[test]
    fn test_parse_field_and_method() {
        let class = parse_ok("has count int\nmethod increment()\n\tcount += 1\n");
        assert_eq!(class.name, "Test");
        assert_eq!(class.children.len(), 2);
        match &class.children[0] {
            Statement::Field(f) => {
                assert_eq!(f.name.value, "count");
                assert_eq!(f.type_name.to_string(), "int");
            }
            _ => panic!("Expected field"),
        }
        match &method_body(&class, 1)[0] {
            Statement::Assign(a) => {
                assert_eq!(a.operator, OperatorId::AddAssign);
                assert!(matches!(&a.target, AssignTarget::Expression(Expression::Identifier(i)) if i.value == "count"));
            }
            _ => panic!("Expected assignment"),
        }
    }

    #[test]
    fn test_parse_type_names() {
        let class = parse_ok("has values list<list<int>>\nhas names text[][]\nhas origin Point?\n");
        let types: Vec<String> = class
            .children
            .iter()
            .map(|c| match c {
                Statement::Field(f) => f.type_name.to_string(),
                _ => panic!("Expected field"),
            })
            .collect();
        assert_eq!(types, ["list<list<int>>", "text[][]", "Point?"]);
        match &class.children[0] {
            Statement::Field(f) => assert_eq!(f.type_name.kind(), NodeKind::GenericTypeName),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_method_signature() {
        let class = parse_ok("method add(first int, second int) returns int\n\treturn first + second\n");
        match &class.children[0] {
            Statement::Method(m) => {
                assert_eq!(m.name.value, "add");
                assert_eq!(m.parameters.len(), 2);
                assert_eq!(m.parameters[1].name.value, "second");
                assert_eq!(m.return_type.to_string(), "int");
                assert!(!m.is_abstract);
            }
            _ => panic!("Expected method"),
        }
        assert!(!class.is_trait);
    }

    #[test]
    fn test_method_without_returns_is_void() {
        let class = parse_ok("method run()\n\tlog(\"hi\")\n");
        match &class.children[0] {
            Statement::Method(m) => {
                assert_eq!(m.return_type.to_string(), "void");
                assert!(m.return_type.region().is_empty());
            }
            _ => panic!("Expected method"),
        }
    }

    #[test]
    fn test_methods_without_body_make_a_trait() {
        let class = parse_ok("method area() returns number\nmethod name() returns text\n");
        assert!(class.is_trait);
        assert!(class.children.iter().all(|c| matches!(c, Statement::Method(m) if m.is_abstract)));
    }

    #[test]
    fn test_arrow_body_returns_expression() {
        let class = parse_ok("method double(x int) returns int => x * 2\n");
        match &method_body(&class, 0)[0] {
            Statement::Return(r) => {
                assert!(matches!(&r.value, Some(Expression::Binary(b)) if b.operator == OperatorId::Mul));
            }
            _ => panic!("Expected return"),
        }
    }

    #[test]
    fn test_arrow_body_of_void_method_keeps_expression() {
        let class = parse_ok("method greet() => log(\"hi\")\n");
        assert!(matches!(&method_body(&class, 0)[0], Statement::Expression(_)));
    }

    #[test]
    fn test_binary_precedence() {
        let class = parse_ok("method f()\n\tx = 1 + 2 * 3\n");
        let Statement::Assign(assign) = &method_body(&class, 0)[0] else {
            panic!("Expected assignment");
        };
        let Expression::Binary(add) = &assign.value else {
            panic!("Expected binary expression");
        };
        assert_eq!(add.operator, OperatorId::Add);
        assert!(matches!(&*add.right, Expression::Binary(mul) if mul.operator == OperatorId::Mul));
    }

    #[test]
    fn test_equal_precedence_is_left_associative() {
        let class = parse_ok("method f()\n\tx = 10 - 3 - 2\n");
        let Statement::Assign(assign) = &method_body(&class, 0)[0] else {
            panic!("Expected assignment");
        };
        let Expression::Binary(outer) = &assign.value else {
            panic!("Expected binary expression");
        };
        assert!(matches!(&*outer.left, Expression::Binary(_)));
        assert!(matches!(&*outer.right, Expression::Number(n) if n.value == "2"));
    }

    #[test]
    fn test_word_operators() {
        let class = parse_ok("method f(a bool, b bool) returns bool\n\treturn a is b and not_done(a)\n");
        let Statement::Return(ret) = &method_body(&class, 0)[0] else {
            panic!("Expected return");
        };
        let Some(Expression::Binary(and)) = &ret.value else {
            panic!("Expected binary expression");
        };
        assert_eq!(and.operator, OperatorId::And);
        assert!(matches!(&*and.left, Expression::Binary(is) if is.operator == OperatorId::Equals));
    }

    #[test]
    fn test_unary_and_postfix() {
        let class = parse_ok("method f()\n\ty = -count.size(1)\n\tcounter++\n\tassert value exists\n");
        let body = method_body(&class, 0);
        let Statement::Assign(assign) = &body[0] else {
            panic!("Expected assignment");
        };
        let Expression::Unary(unary) = &assign.value else {
            panic!("Expected unary expression");
        };
        assert_eq!(unary.operator, OperatorId::Sub);
        assert!(matches!(&*unary.operand, Expression::Call(call) if matches!(&*call.target, Expression::FieldSelect(_))));

        assert!(matches!(
            &body[1],
            Statement::Expression(ExpressionStatement {
                expression: Expression::Postfix(PostfixExpression { operator: PostfixOperator::Increment, .. }),
                ..
            })
        ));
        assert!(matches!(
            &body[2],
            Statement::Assert(AssertStatement {
                expression: Expression::Postfix(PostfixExpression { operator: PostfixOperator::Exists, .. }),
                ..
            })
        ));
    }

    #[test]
    fn test_labeled_call_arguments() {
        let class = parse_ok("method f()\n\tdraw(width = 3, 4)\n");
        let Statement::Expression(statement) = &method_body(&class, 0)[0] else {
            panic!("Expected expression statement");
        };
        let Expression::Call(call) = &statement.expression else {
            panic!("Expected call");
        };
        assert_eq!(call.arguments.len(), 2);
        assert_eq!(call.arguments[0].label.as_deref(), Some("width"));
        assert_eq!(call.arguments[1].label, None);
    }

    #[test]
    fn test_local_field_and_list_access() {
        let class = parse_ok("method f()\n\tint[] values = [1, 2]\n\tvalues[0] = 3\n\ttext name\n");
        let body = method_body(&class, 0);
        match &body[0] {
            Statement::Assign(AssignStatement {
                target: AssignTarget::Field(field),
                value: Expression::List(list),
                ..
            }) => {
                assert_eq!(field.name.value, "values");
                assert_eq!(field.type_name.to_string(), "int[]");
                assert_eq!(list.elements.len(), 2);
            }
            _ => panic!("Expected field assignment"),
        }
        assert!(matches!(
            &body[1],
            Statement::Assign(AssignStatement {
                target: AssignTarget::Expression(Expression::ListSelect(_)),
                ..
            })
        ));
        assert!(matches!(&body[2], Statement::Field(f) if f.type_name.to_string() == "text"));
    }

    #[test]
    fn test_conditional_with_else_and_else_if() {
        let source = "method sign(x int) returns int\n\tif x > 0\n\t\treturn 1\n\telse if x < 0 do\n\t\treturn -1\n\telse\n\t\treturn 0\n";
        let class = parse_ok(source);
        let body = method_body(&class, 0);
        assert_eq!(body.len(), 1);
        let Statement::Conditional(outer) = &body[0] else {
            panic!("Expected conditional");
        };
        assert_eq!(outer.consequence.children.len(), 1);
        let Some(alternative) = &outer.alternative else {
            panic!("Expected else branch");
        };
        let Statement::Conditional(inner) = alternative.as_ref() else {
            panic!("Expected else if");
        };
        assert!(matches!(inner.alternative.as_deref(), Some(Statement::Block(_))));
    }

    #[test]
    fn test_nested_blocks_end_at_lower_indent() {
        let class = parse_ok("method f()\n\tif ready\n\t\tstart()\n\tfinish()\n");
        let body = method_body(&class, 0);
        assert_eq!(body.len(), 2);
        assert!(matches!(&body[1], Statement::Expression(_)));
    }

    #[test]
    fn test_loops() {
        let source = "method f(numbers int[])\n\tfor n in numbers\n\t\tlog(n)\n\tfor i from 1 to 10\n\t\tif i > 5\n\t\t\tbreak\n";
        let class = parse_ok(source);
        let body = method_body(&class, 0);
        match &body[0] {
            Statement::ForEachLoop(l) => {
                assert_eq!(l.field.value, "n");
                assert!(matches!(&l.sequence, Expression::Identifier(i) if i.value == "numbers"));
            }
            _ => panic!("Expected for-each loop"),
        }
        match &body[1] {
            Statement::RangedLoop(l) => {
                assert_eq!(l.field.value, "i");
                assert!(matches!(&l.end, Expression::Number(n) if n.value == "10"));
                assert_eq!(l.body.children.len(), 1);
            }
            _ => panic!("Expected ranged loop"),
        }
    }

    #[test]
    fn test_let_bindings() {
        let class = parse_ok("method f()\n\tlet x = 5\n\tlet [first, second] = pair\n");
        let body = method_body(&class, 0);
        let names: Vec<usize> = body
            .iter()
            .map(|s| match s {
                Statement::Expression(ExpressionStatement {
                    expression: Expression::Let(binding),
                    ..
                }) => binding.names.len(),
                _ => panic!("Expected let binding"),
            })
            .collect();
        assert_eq!(names, [1, 2]);
    }

    #[test]
    fn test_empty_let_binding_is_rejected() {
        let output = parse_str("let [] = pair\n");
        assert_eq!(messages(&output), ["let binding has no variable names"]);
    }

    #[test]
    fn test_imports() {
        let output = parse_str("import \"math.strict\" as math\nimport strict.collections.List\nhas x int\n");
        assert!(!output.has_errors());
        let imports = &output.unit.imports;
        assert_eq!(imports.len(), 2);
        assert!(matches!(&imports[0].target, ImportTarget::File { path } if path == "math.strict"));
        assert_eq!(imports[0].alias.as_ref().map(|a| a.value.as_str()), Some("math"));
        assert!(
            matches!(&imports[1].target, ImportTarget::IdentifierChain { chain } if chain == &["strict", "collections", "List"])
        );
        assert_eq!(output.unit.class.children.len(), 1);
    }

    #[test]
    fn test_invalid_import_target() {
        let output = parse_str("import 12\nhas x int\n");
        assert_eq!(messages(&output), ["expected file or path to class but got: '12'"]);
        assert_eq!(output.unit.imports.len(), 0);
        assert_eq!(output.unit.class.children.len(), 1);
    }

    #[test]
    fn test_constructor_and_create_expression() {
        let class = parse_ok("create(value int)\n\tcount = value\nmethod copy() returns Counter => create Counter(count)\n");
        assert!(matches!(&class.children[0], Statement::Constructor(c) if c.parameters.len() == 1));
        match &method_body(&class, 1)[0] {
            Statement::Return(ReturnStatement {
                value: Some(Expression::Create(create)),
                ..
            }) => {
                assert_eq!(create.type_name.to_string(), "Counter");
                assert_eq!(create.arguments.len(), 1);
            }
            _ => panic!("Expected return of create expression"),
        }
    }

    #[test]
    fn test_generic_and_implement() {
        let class = parse_ok("generic T is Comparable, Printable\nimplement Comparable\n");
        assert!(matches!(&class.children[0], Statement::Generic(g) if g.constraints.len() == 2));
        assert_eq!(class.super_types.len(), 1);
        assert_eq!(class.super_types[0].to_string(), "Comparable");
    }

    #[test]
    fn test_tests_are_attributed_to_their_method() {
        let source = "method add(a int, b int) returns int\n\ttest\n\t\tassert add(1, 2) is 3\n\treturn a + b\ntest\n\tassert true\n";
        let class = parse_ok(source);
        match &method_body(&class, 0)[0] {
            Statement::Test(t) => assert_eq!(t.method_name.as_deref(), Some("add")),
            _ => panic!("Expected test"),
        }
        match &class.children[1] {
            Statement::Test(t) => assert_eq!(t.method_name, None),
            _ => panic!("Expected test"),
        }
    }

    #[test]
    fn test_unclosed_parameter_list() {
        let output = parse_str("method call(x int\n");
        assert_eq!(messages(&output), ["expected ) but got: 'end of statement'"]);
        let entry = &output.diagnostics.entries()[0];
        assert_eq!(entry.stage, Stage::Syntactic);
        assert_eq!(entry.unit_name, "Test.strict");
        assert!(entry.hints.iter().any(|h| h == HINT_OPEN_PARAMETER_LIST));
        assert!(matches!(&output.unit.class.children[0], Statement::Invalid(_)));
    }

    #[test]
    fn test_parameter_type_is_required() {
        let output = parse_str("method call(x)\n");
        assert_eq!(messages(&output), ["name of the parameter is missing"]);
    }

    #[test]
    fn test_recovery_continues_at_next_declaration() {
        let output = parse_str("has 1 int\nmethod ok()\n\tlog(1)\n\tlog(2 +)\nhas name text\n");
        assert_eq!(
            messages(&output),
            ["expected field name but got: '1'", "could not parse operand: ')'"]
        );
        let children = &output.unit.class.children;
        assert_eq!(children.len(), 3);
        assert!(matches!(&children[0], Statement::Invalid(_)));
        assert!(matches!(&children[1], Statement::Invalid(_)));
        assert!(matches!(&children[2], Statement::Field(f) if f.name.value == "name"));
    }

    #[test]
    fn test_indented_declaration_is_rejected() {
        let output = parse_str("  has x int\nhas y int\n");
        assert_eq!(messages(&output), ["invalid indent of 2, expected indent level of 0"]);
        assert_eq!(output.unit.class.children.len(), 2);
    }

    #[test]
    fn test_unexpected_block_indent() {
        let output = parse_str("method f()\n\ta()\n\t\tb()\n");
        assert_eq!(messages(&output), ["invalid indent of 8, expected indent level of 4"]);
    }

    #[test]
    fn test_missing_block_after_if() {
        let output = parse_str("method f()\n\tif ready\n\tgo()\n");
        assert_eq!(messages(&output), ["invalid indent of 4, expected indent bigger than 4"]);
    }

    #[test]
    fn test_stray_token_at_top_level() {
        let output = parse_str("return 1\n");
        assert_eq!(messages(&output), ["unexpected token: 'return'"]);
        assert_eq!(output.diagnostics.entries()[0].hints, [HINT_MALFORMED_DECLARATION]);
    }

    #[test]
    fn test_error_region_spans_failing_structure() {
        let output = parse_str("has 1 int\n");
        let entry = &output.diagnostics.entries()[0];
        assert_eq!(entry.region, Region::new(0, 5));
        let resolved = output.resolve_diagnostics();
        assert_eq!((resolved[0].line(), resolved[0].column()), (1, 1));
    }

    #[test]
    fn test_regions_exclude_line_ends() {
        let class = parse_ok("has count int\n");
        assert_eq!(class.children[0].region(), Region::new(0, 13));
    }

    #[test]
    fn test_lexical_errors_are_merged() {
        let output = parse_str("has x int\nhas y #\n");
        let stages: Vec<Stage> = output.diagnostics.entries().iter().map(|e| e.stage).collect();
        assert!(stages.contains(&Stage::Lexical));
        assert!(output.diagnostics.entries().iter().all(|e| e.unit_name == "Test.strict"));
    }

    #[test]
    fn test_missing_do_hint() {
        let output = parse_str("method f()\n\tif ready go()\n");
        assert_eq!(messages(&output), ["expected do but got: 'go'"]);
        let hints = &output.diagnostics.entries()[0].hints;
        assert!(hints.iter().any(|h| h == HINT_MISSING_DO), "{hints:?}");
        assert!(hints.iter().any(|h| h == HINT_INCOMPLETE_OPERATION), "{hints:?}");
    }

    #[test]
    fn test_structures_balance_over_a_method() {
        let source = concat!(
            "method a(x int) returns list<int>\n",
            "\tif x > 0\n",
            "\t\tlet y = x\n",
            "\telse if x < 0\n",
            "\t\treturn [x]\n",
            "\tfor i from 1 to x\n",
            "\t\tint[] values = [i]\n",
            "\t\tvalues[0] = i\n",
            "\treturn [x]\n",
        );

        let config = ParserConfig::new("Test.strict").with_structure_history(true);
        let mut parser = Parser::new(Scanner::from_source(source), config.clone());
        parser.parse_method_declaration().expect("method should parse");
        assert!(parser.structures().remaining_top_down().is_empty());

        let output = Parser::new(Scanner::from_source(source), config).parse();
        assert!(!output.has_errors(), "{:?}", output.diagnostics.entries());
        let history = output.structure_history.expect("history is recorded");
        let pushes = history.matches(" >> ").count();
        let pops = history.matches(" << ").count();
        assert!(pushes > 20, "{history}");
        assert_eq!(pushes, pops, "{history}");
        assert!(history.contains(">> ListSelectExpression"), "{history}");
        assert!(history.contains("<< RangedLoopStatement"), "{history}");
    }

    #[test]
    fn test_structure_history_of_ranged_loop() {
        let config = ParserConfig::new("Test.strict").with_structure_history(true);
        let mut parser = Parser::new(Scanner::from_source("for i from 1 to 9\n\tbreak\n"), config);
        let statement = parser.parse_statement().expect("loop should parse");
        assert!(matches!(statement, Statement::RangedLoop(_)));
        assert_eq!(
            parser.structures().history(),
            Some(concat!(
                " |  >> ForEachLoopStatement at offset 0\n",
                " | . >> StatementBlock at offset 19\n",
                " | .. >> BreakStatement at offset 19\n",
                " | .. << BreakStatement\n",
                " | . << StatementBlock\n",
                " |  << RangedLoopStatement\n",
            ))
        );
        assert!(parser.structures().is_empty());
    }

    #[test]
    fn test_class_name_uses_file_stem() {
        assert_eq!(class_name("src/shapes/Circle.strict"), "Circle");
        assert_eq!(class_name("Main"), "Main");
    }
}
