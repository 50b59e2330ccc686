//! Node types and the node arena.

use crate::base::{NodeIndex, NodeList};
use bitflags::bitflags;
use enumlower_common::Span;

/// A node: its source span plus kind-specific data.
#[derive(Clone, Debug)]
pub struct Node {
    pub span: Span,
    pub data: NodeData,
}

impl Node {
    #[must_use]
    pub const fn new(data: NodeData) -> Self {
        Self {
            span: Span::dummy(),
            data,
        }
    }

    /// The kind tag of this node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match &self.data {
            NodeData::SourceFile(_) => NodeKind::SourceFile,
            NodeData::Block(_) => NodeKind::Block,
            NodeData::ExportDeclaration(_) => NodeKind::ExportDeclaration,
            NodeData::EnumDeclaration(_) => NodeKind::EnumDeclaration,
            NodeData::EnumMember(_) => NodeKind::EnumMember,
            NodeData::VariableStatement(_) => NodeKind::VariableStatement,
            NodeData::ExpressionStatement(_) => NodeKind::ExpressionStatement,
            NodeData::IfStatement(_) => NodeKind::IfStatement,
            NodeData::LabeledStatement(_) => NodeKind::LabeledStatement,
            NodeData::Identifier(_) => NodeKind::Identifier,
            NodeData::NumericLiteral(_) => NodeKind::NumericLiteral,
            NodeData::StringLiteral(_) => NodeKind::StringLiteral,
            NodeData::NoSubstitutionTemplateLiteral(_) => NodeKind::NoSubstitutionTemplateLiteral,
            NodeData::TemplateExpression(_) => NodeKind::TemplateExpression,
            NodeData::PrefixUnaryExpression(_) => NodeKind::PrefixUnaryExpression,
            NodeData::BinaryExpression(_) => NodeKind::BinaryExpression,
            NodeData::ParenthesizedExpression(_) => NodeKind::ParenthesizedExpression,
            NodeData::CallExpression(_) => NodeKind::CallExpression,
            NodeData::PropertyAccessExpression(_) => NodeKind::PropertyAccessExpression,
            NodeData::ElementAccessExpression(_) => NodeKind::ElementAccessExpression,
        }
    }
}

/// Kind-specific node data.
#[derive(Clone, Debug)]
pub enum NodeData {
    // Containers
    SourceFile(StatementListData),
    Block(StatementListData),
    /// `export <declaration>`
    ExportDeclaration(ExportDeclData),

    // Enums
    EnumDeclaration(EnumData),
    EnumMember(EnumMemberData),

    // Statements
    VariableStatement(VariableData),
    ExpressionStatement(ExprStatementData),
    IfStatement(IfStatementData),
    LabeledStatement(LabeledData),

    // Expressions
    Identifier(IdentifierData),
    NumericLiteral(LiteralData),
    StringLiteral(LiteralData),
    /// `` `text` `` with no substitutions
    NoSubstitutionTemplateLiteral(LiteralData),
    /// `` `head${expr}middle${expr}tail` ``
    TemplateExpression(TemplateExprData),
    PrefixUnaryExpression(UnaryExprData),
    BinaryExpression(BinaryExprData),
    ParenthesizedExpression(ParenthesizedData),
    CallExpression(CallExprData),
    PropertyAccessExpression(AccessExprData),
    ElementAccessExpression(ElementAccessData),
}

/// Copyable kind tag for [`NodeData`], used by predicates and diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    SourceFile,
    Block,
    ExportDeclaration,
    EnumDeclaration,
    EnumMember,
    VariableStatement,
    ExpressionStatement,
    IfStatement,
    LabeledStatement,
    Identifier,
    NumericLiteral,
    StringLiteral,
    NoSubstitutionTemplateLiteral,
    TemplateExpression,
    PrefixUnaryExpression,
    BinaryExpression,
    ParenthesizedExpression,
    CallExpression,
    PropertyAccessExpression,
    ElementAccessExpression,
}

impl NodeKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            NodeKind::SourceFile => "SourceFile",
            NodeKind::Block => "Block",
            NodeKind::ExportDeclaration => "ExportDeclaration",
            NodeKind::EnumDeclaration => "EnumDeclaration",
            NodeKind::EnumMember => "EnumMember",
            NodeKind::VariableStatement => "VariableStatement",
            NodeKind::ExpressionStatement => "ExpressionStatement",
            NodeKind::IfStatement => "IfStatement",
            NodeKind::LabeledStatement => "LabeledStatement",
            NodeKind::Identifier => "Identifier",
            NodeKind::NumericLiteral => "NumericLiteral",
            NodeKind::StringLiteral => "StringLiteral",
            NodeKind::NoSubstitutionTemplateLiteral => "NoSubstitutionTemplateLiteral",
            NodeKind::TemplateExpression => "TemplateExpression",
            NodeKind::PrefixUnaryExpression => "PrefixUnaryExpression",
            NodeKind::BinaryExpression => "BinaryExpression",
            NodeKind::ParenthesizedExpression => "ParenthesizedExpression",
            NodeKind::CallExpression => "CallExpression",
            NodeKind::PropertyAccessExpression => "PropertyAccessExpression",
            NodeKind::ElementAccessExpression => "ElementAccessExpression",
        }
    }

    /// Source files and blocks: nodes that own a statement list.
    #[must_use]
    pub const fn is_statement_container(self) -> bool {
        matches!(self, NodeKind::SourceFile | NodeKind::Block)
    }

    #[must_use]
    pub const fn is_export_declaration(self) -> bool {
        matches!(self, NodeKind::ExportDeclaration)
    }
}

bitflags! {
    /// Modifiers that change how an enum declaration is emitted.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ModifierFlags: u8 {
        /// `declare enum`: type-only, erased.
        const DECLARE = 1 << 0;
        /// `const enum`
        const CONST = 1 << 1;
    }
}

/// Variable binding keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VarKind {
    Var,
    Let,
    Const,
}

impl VarKind {
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            VarKind::Var => "var",
            VarKind::Let => "let",
            VarKind::Const => "const",
        }
    }
}

/// Prefix unary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrefixOperator {
    Plus,
    Minus,
    Tilde,
    Exclamation,
    TypeOf,
}

impl PrefixOperator {
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            PrefixOperator::Plus => "+",
            PrefixOperator::Minus => "-",
            PrefixOperator::Tilde => "~",
            PrefixOperator::Exclamation => "!",
            PrefixOperator::TypeOf => "typeof ",
        }
    }
}

/// Binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Bar,
    Ampersand,
    Caret,
    LessThanLessThan,
    GreaterThanGreaterThan,
    GreaterThanGreaterThanGreaterThan,
    Asterisk,
    Slash,
    Percent,
    Plus,
    Minus,
    AsteriskAsterisk,
    EqualsEqualsEquals,
    ExclamationEqualsEquals,
    AmpersandAmpersand,
    BarBar,
    QuestionQuestion,
}

impl BinaryOperator {
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            BinaryOperator::Bar => "|",
            BinaryOperator::Ampersand => "&",
            BinaryOperator::Caret => "^",
            BinaryOperator::LessThanLessThan => "<<",
            BinaryOperator::GreaterThanGreaterThan => ">>",
            BinaryOperator::GreaterThanGreaterThanGreaterThan => ">>>",
            BinaryOperator::Asterisk => "*",
            BinaryOperator::Slash => "/",
            BinaryOperator::Percent => "%",
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::AsteriskAsterisk => "**",
            BinaryOperator::EqualsEqualsEquals => "===",
            BinaryOperator::ExclamationEqualsEquals => "!==",
            BinaryOperator::AmpersandAmpersand => "&&",
            BinaryOperator::BarBar => "||",
            BinaryOperator::QuestionQuestion => "??",
        }
    }
}

/// Data for source files and blocks
#[derive(Clone, Debug)]
pub struct StatementListData {
    pub statements: NodeList,
}

/// Data for `export <declaration>`
#[derive(Clone, Debug)]
pub struct ExportDeclData {
    pub declaration: NodeIndex,
}

/// Data for enum declarations
#[derive(Clone, Debug)]
pub struct EnumData {
    pub modifiers: ModifierFlags,
    pub name: NodeIndex,
    pub members: NodeList,
}

impl EnumData {
    #[inline]
    #[must_use]
    pub const fn is_ambient(&self) -> bool {
        self.modifiers.contains(ModifierFlags::DECLARE)
    }

    #[inline]
    #[must_use]
    pub const fn is_const(&self) -> bool {
        self.modifiers.contains(ModifierFlags::CONST)
    }
}

/// Data for enum members
#[derive(Clone, Debug)]
pub struct EnumMemberData {
    /// Identifier or string literal
    pub name: NodeIndex,
    /// `NodeIndex::NONE` when the member has no initializer
    pub initializer: NodeIndex,
}

/// Data for variable statements
#[derive(Clone, Debug)]
pub struct VariableData {
    pub kind: VarKind,
    pub declarations: Vec<VariableDeclarationData>,
}

/// A single `name = initializer` declarator
#[derive(Clone, Debug)]
pub struct VariableDeclarationData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// Data for expression statements
#[derive(Clone, Debug)]
pub struct ExprStatementData {
    pub expression: NodeIndex,
}

/// Data for if statements
#[derive(Clone, Debug)]
pub struct IfStatementData {
    pub expression: NodeIndex,
    pub then_statement: NodeIndex,
    pub else_statement: NodeIndex,
}

/// Data for labeled statements
#[derive(Clone, Debug)]
pub struct LabeledData {
    pub label: NodeIndex,
    pub statement: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct IdentifierData {
    pub escaped_text: String,
}

/// Data for string, numeric and template literals
#[derive(Clone, Debug)]
pub struct LiteralData {
    /// Cooked text (escapes resolved)
    pub text: String,
    /// For numeric literals only
    pub value: Option<f64>,
}

/// Data for template expressions with substitutions
#[derive(Clone, Debug)]
pub struct TemplateExprData {
    pub head: String,
    pub spans: Vec<TemplateSpanData>,
}

/// `${expression}literal`
#[derive(Clone, Debug)]
pub struct TemplateSpanData {
    pub expression: NodeIndex,
    pub literal: String,
}

#[derive(Clone, Debug)]
pub struct UnaryExprData {
    pub operator: PrefixOperator,
    pub operand: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct BinaryExprData {
    pub left: NodeIndex,
    pub operator: BinaryOperator,
    pub right: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ParenthesizedData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct CallExprData {
    pub expression: NodeIndex,
    pub arguments: NodeList,
}

/// Data for `expression.name`
#[derive(Clone, Debug)]
pub struct AccessExprData {
    pub expression: NodeIndex,
    pub name: NodeIndex,
}

/// Data for `expression[argument]`
#[derive(Clone, Debug)]
pub struct ElementAccessData {
    pub expression: NodeIndex,
    pub argument: NodeIndex,
}

/// Flat storage for all nodes of one source file.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    pub(crate) file_name: String,
    pub(crate) nodes: Vec<Node>,
    pub(crate) parents: Vec<NodeIndex>,
}
