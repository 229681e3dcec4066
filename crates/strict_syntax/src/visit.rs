//! AST traversal.
//!
//! [`NodeRef`] is a borrowed view of any node in a [`TranslationUnit`] tree. [`walk`] visits every node in
//! pre-order (parent first, children left to right) and hands each one to a [`Visitor`].
//!
//! ## Notes
//! - Closures `FnMut(NodeRef<'_>) -> VisitFlow` are visitors too.
//! - Returning [`VisitFlow::SkipChildren`] prunes the subtree below the visited node.
//!
//! ## Examples
//! ```rust
//! use strict_syntax::ast::NodeKind;
//! use strict_syntax::parser;
//! use strict_syntax::visit::{KindCounter, NodeRef, walk};
//!
//! let output = parser::parse("Shape.strict", "method area() returns number\n\treturn width * height\n");
//! let mut counter = KindCounter::default();
//! walk(NodeRef::TranslationUnit(&output.unit), &mut counter);
//! assert_eq!(counter.count(NodeKind::BinaryExpression), 1);
//! assert_eq!(counter.count(NodeKind::Identifier), 2);
//! ```

use std::collections::HashMap;

use crate::ast::*;
use crate::source::Region;

/// Borrowed reference to one AST node.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    TranslationUnit(&'a TranslationUnit),
    Class(&'a ClassDeclaration),
    Import(&'a ImportStatement),
    Statement(&'a Statement),
    Block(&'a StatementBlock),
    Parameter(&'a Parameter),
    Field(&'a FieldDeclaration),
    Expression(&'a Expression),
    CallArgument(&'a CallArgument),
    TypeName(&'a TypeName),
}

impl NodeRef<'_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::TranslationUnit(_) => NodeKind::TranslationUnit,
            NodeRef::Class(_) => NodeKind::ClassDeclaration,
            NodeRef::Import(_) => NodeKind::ImportStatement,
            NodeRef::Statement(s) => s.kind(),
            NodeRef::Block(_) => NodeKind::StatementBlock,
            NodeRef::Parameter(_) => NodeKind::Parameter,
            NodeRef::Field(_) => NodeKind::FieldDeclaration,
            NodeRef::Expression(e) => e.kind(),
            NodeRef::CallArgument(_) => NodeKind::CallArgument,
            NodeRef::TypeName(t) => t.kind(),
        }
    }

    pub fn region(&self) -> Region {
        match self {
            NodeRef::TranslationUnit(n) => n.region,
            NodeRef::Class(n) => n.region,
            NodeRef::Import(n) => n.region,
            NodeRef::Statement(s) => s.region(),
            NodeRef::Block(n) => n.region,
            NodeRef::Parameter(n) => n.region,
            NodeRef::Field(n) => n.region,
            NodeRef::Expression(e) => e.region(),
            NodeRef::CallArgument(n) => n.region,
            NodeRef::TypeName(t) => t.region(),
        }
    }
}

/// What [`walk`] does after visiting a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitFlow {
    Continue,
    SkipChildren,
}

pub trait Visitor {
    fn visit(&mut self, _node: NodeRef<'_>) -> VisitFlow {
        VisitFlow::Continue
    }
}

impl<F> Visitor for F
where
    F: FnMut(NodeRef<'_>) -> VisitFlow,
{
    fn visit(&mut self, node: NodeRef<'_>) -> VisitFlow {
        self(node)
    }
}

/// Visit `node` and everything below it in pre-order.
pub fn walk<V: Visitor + ?Sized>(node: NodeRef<'_>, visitor: &mut V) {
    if visitor.visit(node) == VisitFlow::SkipChildren {
        return;
    }
    match node {
        NodeRef::TranslationUnit(unit) => {
            for import in &unit.imports {
                walk(NodeRef::Import(import), visitor);
            }
            walk(NodeRef::Class(&unit.class), visitor);
        }
        NodeRef::Class(class) => {
            for super_type in &class.super_types {
                walk(NodeRef::TypeName(super_type), visitor);
            }
            walk_statements(&class.children, visitor);
        }
        NodeRef::Import(_) => {}
        NodeRef::Statement(statement) => walk_statement(statement, visitor),
        NodeRef::Block(block) => walk_statements(&block.children, visitor),
        NodeRef::Parameter(parameter) => walk(NodeRef::TypeName(&parameter.type_name), visitor),
        NodeRef::Field(field) => walk(NodeRef::TypeName(&field.type_name), visitor),
        NodeRef::Expression(expression) => walk_expression(expression, visitor),
        NodeRef::CallArgument(argument) => walk(NodeRef::Expression(&argument.value), visitor),
        NodeRef::TypeName(type_name) => match type_name {
            TypeName::Concrete(_) => {}
            TypeName::Generic(t) => walk(NodeRef::TypeName(&t.argument), visitor),
            TypeName::List(t) => walk(NodeRef::TypeName(&t.element), visitor),
            TypeName::Optional(t) => walk(NodeRef::TypeName(&t.type_name), visitor),
        },
    }
}

fn walk_statements<V: Visitor + ?Sized>(statements: &[Statement], visitor: &mut V) {
    for statement in statements {
        walk(NodeRef::Statement(statement), visitor);
    }
}

fn walk_parameters<V: Visitor + ?Sized>(parameters: &[Parameter], visitor: &mut V) {
    for parameter in parameters {
        walk(NodeRef::Parameter(parameter), visitor);
    }
}

fn walk_arguments<V: Visitor + ?Sized>(arguments: &[CallArgument], visitor: &mut V) {
    for argument in arguments {
        walk(NodeRef::CallArgument(argument), visitor);
    }
}

fn walk_statement<V: Visitor + ?Sized>(statement: &Statement, visitor: &mut V) {
    match statement {
        Statement::Conditional(s) => {
            walk(NodeRef::Expression(&s.condition), visitor);
            walk(NodeRef::Block(&s.consequence), visitor);
            if let Some(alternative) = &s.alternative {
                walk(NodeRef::Statement(alternative), visitor);
            }
        }
        Statement::Invalid(_) | Statement::Break(_) | Statement::Import(_) => {}
        Statement::Yield(s) => walk(NodeRef::Expression(&s.value), visitor),
        Statement::Block(block) => walk_statements(&block.children, visitor),
        Statement::Assert(s) => walk(NodeRef::Expression(&s.expression), visitor),
        Statement::Return(s) => {
            if let Some(value) = &s.value {
                walk(NodeRef::Expression(value), visitor);
            }
        }
        Statement::Test(s) => walk(NodeRef::Block(&s.body), visitor),
        Statement::Assign(s) => {
            match &s.target {
                AssignTarget::Expression(target) => walk(NodeRef::Expression(target), visitor),
                AssignTarget::Field(field) => walk(NodeRef::Field(field), visitor),
            }
            walk(NodeRef::Expression(&s.value), visitor);
        }
        Statement::Expression(s) => walk(NodeRef::Expression(&s.expression), visitor),
        Statement::ForEachLoop(s) => {
            walk(NodeRef::Expression(&s.sequence), visitor);
            walk(NodeRef::Block(&s.body), visitor);
        }
        Statement::RangedLoop(s) => {
            walk(NodeRef::Expression(&s.begin), visitor);
            walk(NodeRef::Expression(&s.end), visitor);
            walk(NodeRef::Block(&s.body), visitor);
        }
        Statement::Implement(s) => walk(NodeRef::TypeName(&s.trait_name), visitor),
        Statement::Generic(s) => {
            for constraint in &s.constraints {
                walk(NodeRef::TypeName(constraint), visitor);
            }
        }
        Statement::Field(field) => walk(NodeRef::TypeName(&field.type_name), visitor),
        Statement::Method(method) => {
            walk_parameters(&method.parameters, visitor);
            walk(NodeRef::TypeName(&method.return_type), visitor);
            walk(NodeRef::Block(&method.body), visitor);
        }
        Statement::Constructor(constructor) => {
            walk_parameters(&constructor.parameters, visitor);
            walk(NodeRef::Block(&constructor.body), visitor);
        }
    }
}

fn walk_expression<V: Visitor + ?Sized>(expression: &Expression, visitor: &mut V) {
    match expression {
        Expression::Identifier(_) | Expression::String(_) | Expression::Number(_) => {}
        Expression::List(e) => {
            for element in &e.elements {
                walk(NodeRef::Expression(element), visitor);
            }
        }
        Expression::ListSelect(e) => {
            walk(NodeRef::Expression(&e.target), visitor);
            walk(NodeRef::Expression(&e.index), visitor);
        }
        Expression::FieldSelect(e) => {
            walk(NodeRef::Expression(&e.target), visitor);
            walk(NodeRef::Expression(&e.selection), visitor);
        }
        Expression::Binary(e) => {
            walk(NodeRef::Expression(&e.left), visitor);
            walk(NodeRef::Expression(&e.right), visitor);
        }
        Expression::Unary(e) => walk(NodeRef::Expression(&e.operand), visitor),
        Expression::Postfix(e) => walk(NodeRef::Expression(&e.operand), visitor),
        Expression::Create(e) => {
            walk(NodeRef::TypeName(&e.type_name), visitor);
            walk_arguments(&e.arguments, visitor);
        }
        Expression::Call(e) => {
            walk(NodeRef::Expression(&e.target), visitor);
            walk_arguments(&e.arguments, visitor);
        }
        Expression::Let(e) => walk(NodeRef::Expression(&e.value), visitor),
    }
}

/// Counts visited nodes per kind.
#[derive(Debug, Clone, Default)]
pub struct KindCounter {
    counts: HashMap<NodeKind, usize>,
}

impl KindCounter {
    pub fn count(&self, kind: NodeKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Every counted kind with its count, ordered by kind name.
    pub fn sorted(&self) -> Vec<(NodeKind, usize)> {
        let mut counts: Vec<(NodeKind, usize)> = self.counts.iter().map(|(k, v)| (*k, *v)).collect();
        counts.sort_by_key(|(kind, _)| kind.name());
        counts
    }
}

impl Visitor for KindCounter {
    fn visit(&mut self, node: NodeRef<'_>) -> VisitFlow {
        *self.counts.entry(node.kind()).or_insert(0) += 1;
        VisitFlow::Continue
    }
}
