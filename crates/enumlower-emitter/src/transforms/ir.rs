//! Lowered IR (Intermediate Representation) for Transforms
//!
//! This module defines a tree-structured IR that transforms produce instead of strings.
//! The IR nodes represent JavaScript constructs that the printer can emit.
//!
//! # Architecture
//!
//! The enum transform analyzes AST nodes and produces IR trees. The printer
//! then walks these IR trees and emits JavaScript strings. Statements that the
//! transform leaves alone are converted to IR as well, so a lowered program is
//! a single IR statement list.

use enumlower_ast::VarKind;

/// Intermediate Representation node for transformed JavaScript
#[derive(Debug, Clone, PartialEq)]
pub enum IRNode {
    // =========================================================================
    // Literals
    // =========================================================================
    /// Numeric literal: `42`, `3.14`
    NumericLiteral(String),

    /// String literal: `"hello"`
    StringLiteral(String),

    /// Template literal: `` `a${b}c` ``
    TemplateLiteral {
        head: String,
        spans: Vec<(IRNode, String)>,
    },

    /// Empty object literal: `{}`
    EmptyObject,

    // =========================================================================
    // Identifiers
    // =========================================================================
    /// Identifier: `foo`, `_bar`
    Identifier(String),

    // =========================================================================
    // Expressions
    // =========================================================================
    /// Binary expression: `left op right`
    BinaryExpr {
        left: Box<IRNode>,
        operator: String,
        right: Box<IRNode>,
    },

    /// Unary prefix expression: `!x`, `-x`, `typeof x`
    PrefixUnaryExpr {
        operator: String,
        operand: Box<IRNode>,
    },

    /// Call expression: `callee(args)`
    CallExpr {
        callee: Box<IRNode>,
        arguments: Vec<IRNode>,
    },

    /// Property access: `object.property`
    PropertyAccess {
        object: Box<IRNode>,
        property: String,
    },

    /// Element access: `object[index]`
    ElementAccess {
        object: Box<IRNode>,
        index: Box<IRNode>,
    },

    /// Parenthesized expression: `(expr)`
    Parenthesized(Box<IRNode>),

    /// Function expression: `function name(params) { body }`
    FunctionExpr {
        name: Option<String>,
        parameters: Vec<String>,
        body: Vec<IRNode>,
    },

    /// Logical OR: `left || right`
    LogicalOr {
        left: Box<IRNode>,
        right: Box<IRNode>,
    },

    // =========================================================================
    // Statements
    // =========================================================================
    /// Variable declaration: `var x = value;`, `let x;`
    VarDecl {
        kind: VarKind,
        name: String,
        initializer: Option<Box<IRNode>>,
    },

    /// Multiple declarators sharing a keyword: `let a = 1, b = 2;`
    VarDeclList {
        kind: VarKind,
        declarations: Vec<(String, Option<IRNode>)>,
    },

    /// Export wrapper around a declaration: `export var E;`
    ExportDecl(Box<IRNode>),

    /// Expression statement: `expr;`
    ExpressionStatement(Box<IRNode>),

    /// If statement: `if (cond) then else else_branch`
    IfStatement {
        condition: Box<IRNode>,
        then_branch: Box<IRNode>,
        else_branch: Option<Box<IRNode>>,
    },

    /// Block statement: `{ statements }`
    Block(Vec<IRNode>),

    /// Labeled statement: `label: stmt`
    LabeledStatement {
        label: String,
        statement: Box<IRNode>,
    },

    /// Empty statement: `;`
    EmptyStatement,

    // =========================================================================
    // Special
    // =========================================================================
    /// Sequence of statements printed one after another
    Sequence(Vec<IRNode>),
}

// =========================================================================
// Builder helpers for IR construction
// =========================================================================

impl IRNode {
    /// Create an identifier node
    pub fn id(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// Create a string literal
    pub fn string(s: impl Into<String>) -> Self {
        Self::StringLiteral(s.into())
    }

    /// Create a numeric literal
    pub fn number(n: impl Into<String>) -> Self {
        Self::NumericLiteral(n.into())
    }

    /// Create a call expression
    pub fn call(callee: Self, args: Vec<Self>) -> Self {
        Self::CallExpr {
            callee: Box::new(callee),
            arguments: args,
        }
    }

    /// Create a property access
    pub fn prop(object: Self, property: impl Into<String>) -> Self {
        Self::PropertyAccess {
            object: Box::new(object),
            property: property.into(),
        }
    }

    /// Create an element access
    pub fn elem(object: Self, index: Self) -> Self {
        Self::ElementAccess {
            object: Box::new(object),
            index: Box::new(index),
        }
    }

    /// Create a binary expression
    pub fn binary(left: Self, op: impl Into<String>, right: Self) -> Self {
        Self::BinaryExpr {
            left: Box::new(left),
            operator: op.into(),
            right: Box::new(right),
        }
    }

    /// Create an assignment expression
    pub fn assign(target: Self, value: Self) -> Self {
        Self::binary(target, "=", value)
    }

    /// Create a prefix unary expression
    pub fn prefix(op: impl Into<String>, operand: Self) -> Self {
        Self::PrefixUnaryExpr {
            operator: op.into(),
            operand: Box::new(operand),
        }
    }

    /// Create a `var` declaration
    pub fn var_decl(name: impl Into<String>, init: Option<Self>) -> Self {
        Self::binding(VarKind::Var, name, init)
    }

    /// Create a `let` declaration
    pub fn let_decl(name: impl Into<String>, init: Option<Self>) -> Self {
        Self::binding(VarKind::Let, name, init)
    }

    /// Create a declaration with an explicit keyword
    pub fn binding(kind: VarKind, name: impl Into<String>, init: Option<Self>) -> Self {
        Self::VarDecl {
            kind,
            name: name.into(),
            initializer: init.map(Box::new),
        }
    }

    /// Create an anonymous function expression
    pub fn func_expr(params: Vec<String>, body: Vec<Self>) -> Self {
        Self::FunctionExpr {
            name: None,
            parameters: params,
            body,
        }
    }

    /// Wrap in parentheses
    pub fn paren(self) -> Self {
        Self::Parenthesized(Box::new(self))
    }

    /// Create an expression statement
    pub fn expr_stmt(expr: Self) -> Self {
        Self::ExpressionStatement(Box::new(expr))
    }

    /// Wrap a declaration in `export`
    pub fn export(decl: Self) -> Self {
        Self::ExportDecl(Box::new(decl))
    }

    /// Create a logical OR
    pub fn logical_or(left: Self, right: Self) -> Self {
        Self::LogicalOr {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Whether this node is a string literal (plain or template without
    /// substitutions).
    pub fn is_string_literal(&self) -> bool {
        match self {
            Self::StringLiteral(_) => true,
            Self::TemplateLiteral { spans, .. } => spans.is_empty(),
            _ => false,
        }
    }
}
