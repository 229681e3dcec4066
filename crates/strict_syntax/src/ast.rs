//! Abstract Syntax Tree definitions for Strict
//!
//! A parsed source unit is a [`TranslationUnit`]: a list of imports plus the single class the file declares.
//! Expressions, statements (declarations included) and type names are closed enums; every node records the
//! [`Region`] of source it was parsed from.

use std::fmt;

use strict_core::lang::operators::OperatorId;

use crate::source::Region;

// ============================================================================
// Node kinds
// ============================================================================

/// Kind tag of every syntax node.
///
/// ## Notes
/// - The parser's structure stack records kinds, so there are a few kinds without a node of their own:
///   `TypeName` marks a type name whose shape is not known yet, `Wildcard` completes a structure of any kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Unknown,
    // Expressions
    Identifier,
    StringLiteral,
    NumberLiteral,
    ListExpression,
    ListSelectExpression,
    FieldSelectExpression,
    BinaryExpression,
    UnaryExpression,
    PostfixExpression,
    CreateExpression,
    CallArgument,
    CallExpression,
    LetBinding,
    // Statements
    ConditionalStatement,
    InvalidStatement,
    BreakStatement,
    YieldStatement,
    StatementBlock,
    AssertStatement,
    ReturnStatement,
    ImportStatement,
    TestStatement,
    AssignStatement,
    ExpressionStatement,
    ForEachLoopStatement,
    RangedLoopStatement,
    ImplementStatement,
    GenericStatement,
    // Declarations
    Parameter,
    FieldDeclaration,
    MethodDeclaration,
    ClassDeclaration,
    ConstructorDeclaration,
    // Type names
    TypeName,
    ListTypeName,
    GenericTypeName,
    ConcreteTypeName,
    OptionalTypeName,
    TranslationUnit,
    Wildcard,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Unknown => "Unknown",
            NodeKind::Identifier => "Identifier",
            NodeKind::StringLiteral => "StringLiteral",
            NodeKind::NumberLiteral => "NumberLiteral",
            NodeKind::ListExpression => "ListExpression",
            NodeKind::ListSelectExpression => "ListSelectExpression",
            NodeKind::FieldSelectExpression => "FieldSelectExpression",
            NodeKind::BinaryExpression => "BinaryExpression",
            NodeKind::UnaryExpression => "UnaryExpression",
            NodeKind::PostfixExpression => "PostfixExpression",
            NodeKind::CreateExpression => "CreateExpression",
            NodeKind::CallArgument => "CallArgument",
            NodeKind::CallExpression => "CallExpression",
            NodeKind::LetBinding => "LetBinding",
            NodeKind::ConditionalStatement => "ConditionalStatement",
            NodeKind::InvalidStatement => "InvalidStatement",
            NodeKind::BreakStatement => "BreakStatement",
            NodeKind::YieldStatement => "YieldStatement",
            NodeKind::StatementBlock => "StatementBlock",
            NodeKind::AssertStatement => "AssertStatement",
            NodeKind::ReturnStatement => "ReturnStatement",
            NodeKind::ImportStatement => "ImportStatement",
            NodeKind::TestStatement => "TestStatement",
            NodeKind::AssignStatement => "AssignStatement",
            NodeKind::ExpressionStatement => "ExpressionStatement",
            NodeKind::ForEachLoopStatement => "ForEachLoopStatement",
            NodeKind::RangedLoopStatement => "RangedLoopStatement",
            NodeKind::ImplementStatement => "ImplementStatement",
            NodeKind::GenericStatement => "GenericStatement",
            NodeKind::Parameter => "Parameter",
            NodeKind::FieldDeclaration => "FieldDeclaration",
            NodeKind::MethodDeclaration => "MethodDeclaration",
            NodeKind::ClassDeclaration => "ClassDeclaration",
            NodeKind::ConstructorDeclaration => "ConstructorDeclaration",
            NodeKind::TypeName => "TypeName",
            NodeKind::ListTypeName => "ListTypeName",
            NodeKind::GenericTypeName => "GenericTypeName",
            NodeKind::ConcreteTypeName => "ConcreteTypeName",
            NodeKind::OptionalTypeName => "OptionalTypeName",
            NodeKind::TranslationUnit => "TranslationUnit",
            NodeKind::Wildcard => "Wildcard",
        }
    }

    pub fn is_expression(self) -> bool {
        matches!(
            self,
            NodeKind::Identifier
                | NodeKind::StringLiteral
                | NodeKind::NumberLiteral
                | NodeKind::ListExpression
                | NodeKind::ListSelectExpression
                | NodeKind::FieldSelectExpression
                | NodeKind::BinaryExpression
                | NodeKind::UnaryExpression
                | NodeKind::PostfixExpression
                | NodeKind::CreateExpression
                | NodeKind::CallArgument
                | NodeKind::CallExpression
                | NodeKind::LetBinding
        )
    }

    pub fn is_statement(self) -> bool {
        matches!(
            self,
            NodeKind::ConditionalStatement
                | NodeKind::InvalidStatement
                | NodeKind::BreakStatement
                | NodeKind::YieldStatement
                | NodeKind::StatementBlock
                | NodeKind::AssertStatement
                | NodeKind::ReturnStatement
                | NodeKind::ImportStatement
                | NodeKind::TestStatement
                | NodeKind::AssignStatement
                | NodeKind::ExpressionStatement
                | NodeKind::ForEachLoopStatement
                | NodeKind::RangedLoopStatement
                | NodeKind::ImplementStatement
                | NodeKind::GenericStatement
        )
    }

    pub fn is_declaration(self) -> bool {
        matches!(
            self,
            NodeKind::Parameter
                | NodeKind::FieldDeclaration
                | NodeKind::MethodDeclaration
                | NodeKind::ClassDeclaration
                | NodeKind::ConstructorDeclaration
        )
    }

    pub fn is_type_name(self) -> bool {
        matches!(
            self,
            NodeKind::TypeName
                | NodeKind::ListTypeName
                | NodeKind::GenericTypeName
                | NodeKind::ConcreteTypeName
                | NodeKind::OptionalTypeName
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Translation unit and class
// ============================================================================

/// Root node of one parsed source file.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationUnit {
    pub name: String,
    pub imports: Vec<ImportStatement>,
    pub class: ClassDeclaration,
    pub region: Region,
}

/// The class a source file declares. Its name is the file name without directories and extension.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDeclaration {
    pub name: String,
    pub super_types: Vec<TypeName>,
    pub children: Vec<Statement>,
    /// `true` if any method is abstract.
    pub is_trait: bool,
    pub region: Region,
}

// ============================================================================
// Declarations
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDeclaration {
    pub name: Identifier,
    pub parameters: Vec<Parameter>,
    pub return_type: TypeName,
    pub body: StatementBlock,
    /// A method without body statements is abstract.
    pub is_abstract: bool,
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorDeclaration {
    pub parameters: Vec<Parameter>,
    pub body: StatementBlock,
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: Identifier,
    pub type_name: TypeName,
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDeclaration {
    pub name: Identifier,
    pub type_name: TypeName,
    pub region: Region,
}

// ============================================================================
// Statements
// ============================================================================

/// Every statement, including the declarations that may appear in a class body or a block.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Conditional(ConditionalStatement),
    Invalid(InvalidStatement),
    Break(BreakStatement),
    Yield(YieldStatement),
    Block(StatementBlock),
    Assert(AssertStatement),
    Return(ReturnStatement),
    Import(ImportStatement),
    Test(TestStatement),
    Assign(AssignStatement),
    Expression(ExpressionStatement),
    ForEachLoop(ForEachLoopStatement),
    RangedLoop(RangedLoopStatement),
    Implement(ImplementStatement),
    Generic(GenericStatement),
    Field(FieldDeclaration),
    Method(MethodDeclaration),
    Constructor(ConstructorDeclaration),
}

impl Statement {
    pub fn region(&self) -> Region {
        match self {
            Statement::Conditional(s) => s.region,
            Statement::Invalid(s) => s.region,
            Statement::Break(s) => s.region,
            Statement::Yield(s) => s.region,
            Statement::Block(s) => s.region,
            Statement::Assert(s) => s.region,
            Statement::Return(s) => s.region,
            Statement::Import(s) => s.region,
            Statement::Test(s) => s.region,
            Statement::Assign(s) => s.region,
            Statement::Expression(s) => s.region,
            Statement::ForEachLoop(s) => s.region,
            Statement::RangedLoop(s) => s.region,
            Statement::Implement(s) => s.region,
            Statement::Generic(s) => s.region,
            Statement::Field(s) => s.region,
            Statement::Method(s) => s.region,
            Statement::Constructor(s) => s.region,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Statement::Conditional(_) => NodeKind::ConditionalStatement,
            Statement::Invalid(_) => NodeKind::InvalidStatement,
            Statement::Break(_) => NodeKind::BreakStatement,
            Statement::Yield(_) => NodeKind::YieldStatement,
            Statement::Block(_) => NodeKind::StatementBlock,
            Statement::Assert(_) => NodeKind::AssertStatement,
            Statement::Return(_) => NodeKind::ReturnStatement,
            Statement::Import(_) => NodeKind::ImportStatement,
            Statement::Test(_) => NodeKind::TestStatement,
            Statement::Assign(_) => NodeKind::AssignStatement,
            Statement::Expression(_) => NodeKind::ExpressionStatement,
            Statement::ForEachLoop(_) => NodeKind::ForEachLoopStatement,
            Statement::RangedLoop(_) => NodeKind::RangedLoopStatement,
            Statement::Implement(_) => NodeKind::ImplementStatement,
            Statement::Generic(_) => NodeKind::GenericStatement,
            Statement::Field(_) => NodeKind::FieldDeclaration,
            Statement::Method(_) => NodeKind::MethodDeclaration,
            Statement::Constructor(_) => NodeKind::ConstructorDeclaration,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Statement::Invalid(_))
    }
}

/// `if` statement with an optional `else` branch.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalStatement {
    pub condition: Expression,
    pub consequence: StatementBlock,
    /// Either a nested [`Statement::Conditional`] (`else if`) or a [`Statement::Block`].
    pub alternative: Option<Box<Statement>>,
    pub region: Region,
}

/// Placeholder for a declaration or statement that failed to parse.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidStatement {
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakStatement {
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YieldStatement {
    pub value: Expression,
    pub region: Region,
}

/// Sequence of statements sharing one indentation level.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementBlock {
    pub children: Vec<Statement>,
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssertStatement {
    pub expression: Expression,
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub value: Option<Expression>,
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImportTarget {
    /// `import "path/to/file"`
    File { path: String },
    /// `import strict.collections.List`
    IdentifierChain { chain: Vec<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportStatement {
    pub target: ImportTarget,
    pub alias: Option<Identifier>,
    pub region: Region,
}

/// `test` block, attributed to the method it is nested in.
#[derive(Debug, Clone, PartialEq)]
pub struct TestStatement {
    pub method_name: Option<String>,
    pub body: StatementBlock,
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssignTarget {
    Expression(Expression),
    /// `Type name = value` declares the field it assigns.
    Field(FieldDeclaration),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignStatement {
    pub target: AssignTarget,
    pub value: Expression,
    pub operator: OperatorId,
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub region: Region,
}

/// `for element in sequence`
#[derive(Debug, Clone, PartialEq)]
pub struct ForEachLoopStatement {
    pub field: Identifier,
    pub sequence: Expression,
    pub body: StatementBlock,
    pub region: Region,
}

/// `for counter from begin to end`
#[derive(Debug, Clone, PartialEq)]
pub struct RangedLoopStatement {
    pub field: Identifier,
    pub begin: Expression,
    pub end: Expression,
    pub body: StatementBlock,
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImplementStatement {
    pub trait_name: TypeName,
    pub region: Region,
}

/// `generic Element is Comparable, Printable`
#[derive(Debug, Clone, PartialEq)]
pub struct GenericStatement {
    pub name: Identifier,
    pub constraints: Vec<TypeName>,
    pub region: Region,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    String(StringLiteral),
    Number(NumberLiteral),
    List(ListExpression),
    ListSelect(ListSelectExpression),
    FieldSelect(FieldSelectExpression),
    Binary(BinaryExpression),
    Unary(UnaryExpression),
    Postfix(PostfixExpression),
    Create(CreateExpression),
    Call(CallExpression),
    Let(LetBinding),
}

impl Expression {
    pub fn region(&self) -> Region {
        match self {
            Expression::Identifier(e) => e.region,
            Expression::String(e) => e.region,
            Expression::Number(e) => e.region,
            Expression::List(e) => e.region,
            Expression::ListSelect(e) => e.region,
            Expression::FieldSelect(e) => e.region,
            Expression::Binary(e) => e.region,
            Expression::Unary(e) => e.region,
            Expression::Postfix(e) => e.region,
            Expression::Create(e) => e.region,
            Expression::Call(e) => e.region,
            Expression::Let(e) => e.region,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Expression::Identifier(_) => NodeKind::Identifier,
            Expression::String(_) => NodeKind::StringLiteral,
            Expression::Number(_) => NodeKind::NumberLiteral,
            Expression::List(_) => NodeKind::ListExpression,
            Expression::ListSelect(_) => NodeKind::ListSelectExpression,
            Expression::FieldSelect(_) => NodeKind::FieldSelectExpression,
            Expression::Binary(_) => NodeKind::BinaryExpression,
            Expression::Unary(_) => NodeKind::UnaryExpression,
            Expression::Postfix(_) => NodeKind::PostfixExpression,
            Expression::Create(_) => NodeKind::CreateExpression,
            Expression::Call(_) => NodeKind::CallExpression,
            Expression::Let(_) => NodeKind::LetBinding,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub value: String,
    pub region: Region,
}

/// String literal; the value excludes the quotes and keeps escapes verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub value: String,
    pub region: Region,
}

/// Number literal, spelled exactly as in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLiteral {
    pub value: String,
    pub region: Region,
}

/// `[a, b, c]`
#[derive(Debug, Clone, PartialEq)]
pub struct ListExpression {
    pub elements: Vec<Expression>,
    pub region: Region,
}

/// `target[index]`
#[derive(Debug, Clone, PartialEq)]
pub struct ListSelectExpression {
    pub target: Box<Expression>,
    pub index: Box<Expression>,
    pub region: Region,
}

/// `target.selection`
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSelectExpression {
    pub target: Box<Expression>,
    pub selection: Box<Expression>,
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub operator: OperatorId,
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    pub operator: OperatorId,
    pub operand: Box<Expression>,
    pub region: Region,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixOperator {
    Increment,
    Decrement,
    Exists,
}

impl fmt::Display for PostfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostfixOperator::Increment => write!(f, "++"),
            PostfixOperator::Decrement => write!(f, "--"),
            PostfixOperator::Exists => write!(f, "exists"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostfixExpression {
    pub operand: Box<Expression>,
    pub operator: PostfixOperator,
    pub region: Region,
}

/// `create Type(arguments)`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateExpression {
    pub type_name: TypeName,
    pub arguments: Vec<CallArgument>,
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub target: Box<Expression>,
    pub arguments: Vec<CallArgument>,
    pub region: Region,
}

/// One call argument, optionally labeled (`name = value`).
#[derive(Debug, Clone, PartialEq)]
pub struct CallArgument {
    pub label: Option<String>,
    pub value: Expression,
    pub region: Region,
}

/// `let name = value` or `let [first, second] = value`
#[derive(Debug, Clone, PartialEq)]
pub struct LetBinding {
    pub names: Vec<Identifier>,
    pub value: Box<Expression>,
    pub region: Region,
}

// ============================================================================
// Type names
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeName {
    Concrete(ConcreteTypeName),
    Generic(GenericTypeName),
    List(ListTypeName),
    Optional(OptionalTypeName),
}

impl TypeName {
    pub fn region(&self) -> Region {
        match self {
            TypeName::Concrete(t) => t.region,
            TypeName::Generic(t) => t.region,
            TypeName::List(t) => t.region,
            TypeName::Optional(t) => t.region,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            TypeName::Concrete(_) => NodeKind::ConcreteTypeName,
            TypeName::Generic(_) => NodeKind::GenericTypeName,
            TypeName::List(_) => NodeKind::ListTypeName,
            TypeName::Optional(_) => NodeKind::OptionalTypeName,
        }
    }

    /// Name of the innermost concrete or generic type.
    pub fn base_name(&self) -> &str {
        match self {
            TypeName::Concrete(t) => &t.name,
            TypeName::Generic(t) => &t.name,
            TypeName::List(t) => t.element.base_name(),
            TypeName::Optional(t) => t.type_name.base_name(),
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeName::Concrete(t) => write!(f, "{}", t.name),
            TypeName::Generic(t) => write!(f, "{}<{}>", t.name, t.argument),
            TypeName::List(t) => write!(f, "{}[]", t.element),
            TypeName::Optional(t) => write!(f, "{}?", t.type_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcreteTypeName {
    pub name: String,
    pub region: Region,
}

/// `name<argument>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericTypeName {
    pub name: String,
    pub argument: Box<TypeName>,
    pub region: Region,
}

/// `element[]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTypeName {
    pub element: Box<TypeName>,
    pub region: Region,
}

/// `type_name?`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionalTypeName {
    pub type_name: Box<TypeName>,
    pub region: Region,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concrete(name: &str) -> TypeName {
        TypeName::Concrete(ConcreteTypeName {
            name: name.to_string(),
            region: Region::UNKNOWN,
        })
    }

    #[test]
    fn test_type_name_display() {
        let list = TypeName::List(ListTypeName {
            element: Box::new(concrete("int")),
            region: Region::UNKNOWN,
        });
        let generic = TypeName::Generic(GenericTypeName {
            name: "list".to_string(),
            argument: Box::new(list),
            region: Region::UNKNOWN,
        });
        let optional = TypeName::Optional(OptionalTypeName {
            type_name: Box::new(generic),
            region: Region::UNKNOWN,
        });
        assert_eq!(optional.to_string(), "list<int[]>?");
        assert_eq!(optional.base_name(), "list");
        assert_eq!(optional.kind(), NodeKind::OptionalTypeName);
    }

    #[test]
    fn test_kind_groups_are_disjoint() {
        let kinds = [
            NodeKind::Identifier,
            NodeKind::CallArgument,
            NodeKind::LetBinding,
            NodeKind::ReturnStatement,
            NodeKind::GenericStatement,
            NodeKind::MethodDeclaration,
            NodeKind::Parameter,
            NodeKind::ListTypeName,
            NodeKind::TypeName,
        ];
        for kind in kinds {
            let groups = [
                kind.is_expression(),
                kind.is_statement(),
                kind.is_declaration(),
                kind.is_type_name(),
            ];
            assert_eq!(groups.iter().filter(|g| **g).count(), 1, "{kind}");
        }
        assert!(!NodeKind::Wildcard.is_expression());
        assert_eq!(NodeKind::RangedLoopStatement.to_string(), "RangedLoopStatement");
    }
}
