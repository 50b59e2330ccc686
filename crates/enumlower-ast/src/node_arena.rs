//! NodeArena creation methods (add_* methods).
//!
//! Nodes are built bottom-up: children exist before their parent, and each
//! `add_*` method records itself as the parent of the children it receives.

use crate::base::{NodeIndex, NodeList};
use crate::node::*;
use enumlower_common::Span;

impl NodeArena {
    #[must_use]
    pub fn new(file_name: impl Into<String>) -> NodeArena {
        NodeArena {
            file_name: file_name.into(),
            ..NodeArena::default()
        }
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    // ============================================================================
    // Parent Mapping Helpers
    // ============================================================================

    #[inline]
    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if child.is_some()
            && let Some(slot) = self.parents.get_mut(child.0 as usize)
        {
            *slot = parent;
        }
    }

    #[inline]
    fn set_parent_list(&mut self, list: &[NodeIndex], parent: NodeIndex) {
        for &child in list {
            self.set_parent(child, parent);
        }
    }

    fn push(&mut self, data: NodeData) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(Node::new(data));
        self.parents.push(NodeIndex::NONE);
        index
    }

    /// Attach a source span to an existing node.
    pub fn set_span(&mut self, idx: NodeIndex, span: Span) {
        if let Some(node) = self.nodes.get_mut(idx.0 as usize) {
            node.span = span;
        }
    }

    // ============================================================================
    // Expressions
    // ============================================================================

    pub fn add_identifier(&mut self, text: impl Into<String>) -> NodeIndex {
        self.push(NodeData::Identifier(IdentifierData {
            escaped_text: text.into(),
        }))
    }

    /// Add a numeric literal. The value is parsed from `text`; unparseable
    /// text leaves `value` as `None`.
    pub fn add_numeric_literal(&mut self, text: impl Into<String>) -> NodeIndex {
        let text = text.into();
        let value = parse_numeric_literal(&text);
        self.push(NodeData::NumericLiteral(LiteralData { text, value }))
    }

    pub fn add_string_literal(&mut self, text: impl Into<String>) -> NodeIndex {
        self.push(NodeData::StringLiteral(LiteralData {
            text: text.into(),
            value: None,
        }))
    }

    pub fn add_no_substitution_template(&mut self, text: impl Into<String>) -> NodeIndex {
        self.push(NodeData::NoSubstitutionTemplateLiteral(LiteralData {
            text: text.into(),
            value: None,
        }))
    }

    /// Add `` `head${e0}lit0${e1}lit1` `` from `(expression, literal)` spans.
    pub fn add_template_expression(
        &mut self,
        head: impl Into<String>,
        spans: Vec<(NodeIndex, String)>,
    ) -> NodeIndex {
        let children: Vec<NodeIndex> = spans.iter().map(|(expr, _)| *expr).collect();
        let spans = spans
            .into_iter()
            .map(|(expression, literal)| TemplateSpanData {
                expression,
                literal,
            })
            .collect();
        let idx = self.push(NodeData::TemplateExpression(TemplateExprData {
            head: head.into(),
            spans,
        }));
        self.set_parent_list(&children, idx);
        idx
    }

    pub fn add_prefix_unary(&mut self, operator: PrefixOperator, operand: NodeIndex) -> NodeIndex {
        let idx = self.push(NodeData::PrefixUnaryExpression(UnaryExprData {
            operator,
            operand,
        }));
        self.set_parent(operand, idx);
        idx
    }

    pub fn add_binary(
        &mut self,
        left: NodeIndex,
        operator: BinaryOperator,
        right: NodeIndex,
    ) -> NodeIndex {
        let idx = self.push(NodeData::BinaryExpression(BinaryExprData {
            left,
            operator,
            right,
        }));
        self.set_parent(left, idx);
        self.set_parent(right, idx);
        idx
    }

    pub fn add_parenthesized(&mut self, expression: NodeIndex) -> NodeIndex {
        let idx = self.push(NodeData::ParenthesizedExpression(ParenthesizedData {
            expression,
        }));
        self.set_parent(expression, idx);
        idx
    }

    pub fn add_call(&mut self, expression: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        let idx = self.push(NodeData::CallExpression(CallExprData {
            expression,
            arguments: NodeList::new(arguments.clone()),
        }));
        self.set_parent(expression, idx);
        self.set_parent_list(&arguments, idx);
        idx
    }

    /// Add `expression.name`; the name identifier is created here.
    pub fn add_property_access(
        &mut self,
        expression: NodeIndex,
        name: impl Into<String>,
    ) -> NodeIndex {
        let name = self.add_identifier(name);
        let idx = self.push(NodeData::PropertyAccessExpression(AccessExprData {
            expression,
            name,
        }));
        self.set_parent(expression, idx);
        self.set_parent(name, idx);
        idx
    }

    pub fn add_element_access(&mut self, expression: NodeIndex, argument: NodeIndex) -> NodeIndex {
        let idx = self.push(NodeData::ElementAccessExpression(ElementAccessData {
            expression,
            argument,
        }));
        self.set_parent(expression, idx);
        self.set_parent(argument, idx);
        idx
    }

    // ============================================================================
    // Enums
    // ============================================================================

    /// Add an enum member. Pass `NodeIndex::NONE` for a member without an
    /// initializer.
    pub fn add_enum_member(&mut self, name: NodeIndex, initializer: NodeIndex) -> NodeIndex {
        let idx = self.push(NodeData::EnumMember(EnumMemberData { name, initializer }));
        self.set_parent(name, idx);
        self.set_parent(initializer, idx);
        idx
    }

    pub fn add_enum_declaration(
        &mut self,
        modifiers: ModifierFlags,
        name: NodeIndex,
        members: Vec<NodeIndex>,
    ) -> NodeIndex {
        let idx = self.push(NodeData::EnumDeclaration(EnumData {
            modifiers,
            name,
            members: NodeList::new(members.clone()),
        }));
        self.set_parent(name, idx);
        self.set_parent_list(&members, idx);
        idx
    }

    // ============================================================================
    // Statements and containers
    // ============================================================================

    pub fn add_export_declaration(&mut self, declaration: NodeIndex) -> NodeIndex {
        let idx = self.push(NodeData::ExportDeclaration(ExportDeclData { declaration }));
        self.set_parent(declaration, idx);
        idx
    }

    pub fn add_block(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        let idx = self.push(NodeData::Block(StatementListData {
            statements: NodeList::new(statements.clone()),
        }));
        self.set_parent_list(&statements, idx);
        idx
    }

    pub fn add_source_file(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        let idx = self.push(NodeData::SourceFile(StatementListData {
            statements: NodeList::new(statements.clone()),
        }));
        self.set_parent_list(&statements, idx);
        idx
    }

    /// Add a variable statement from `(name identifier, initializer)` pairs.
    pub fn add_variable_statement(
        &mut self,
        kind: VarKind,
        declarations: Vec<(NodeIndex, NodeIndex)>,
    ) -> NodeIndex {
        let children: Vec<NodeIndex> = declarations
            .iter()
            .flat_map(|&(name, init)| [name, init])
            .collect();
        let declarations = declarations
            .into_iter()
            .map(|(name, initializer)| VariableDeclarationData { name, initializer })
            .collect();
        let idx = self.push(NodeData::VariableStatement(VariableData { kind, declarations }));
        self.set_parent_list(&children, idx);
        idx
    }

    pub fn add_expression_statement(&mut self, expression: NodeIndex) -> NodeIndex {
        let idx = self.push(NodeData::ExpressionStatement(ExprStatementData {
            expression,
        }));
        self.set_parent(expression, idx);
        idx
    }

    pub fn add_if_statement(
        &mut self,
        expression: NodeIndex,
        then_statement: NodeIndex,
        else_statement: NodeIndex,
    ) -> NodeIndex {
        let idx = self.push(NodeData::IfStatement(IfStatementData {
            expression,
            then_statement,
            else_statement,
        }));
        self.set_parent(expression, idx);
        self.set_parent(then_statement, idx);
        self.set_parent(else_statement, idx);
        idx
    }

    pub fn add_labeled_statement(
        &mut self,
        label: impl Into<String>,
        statement: NodeIndex,
    ) -> NodeIndex {
        let label = self.add_identifier(label);
        let idx = self.push(NodeData::LabeledStatement(LabeledData { label, statement }));
        self.set_parent(label, idx);
        self.set_parent(statement, idx);
        idx
    }
}

/// Parse the text of a numeric literal: decimal (with exponent), `0x`, `0o`,
/// `0b`, and `_` separators.
#[must_use]
pub fn parse_numeric_literal(text: &str) -> Option<f64> {
    let cleaned: String = text.chars().filter(|&c| c != '_').collect();
    let radix = match cleaned.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => return cleaned.parse::<f64>().ok(),
    };
    let digits = &cleaned[2..];
    if digits.is_empty() {
        return None;
    }
    let mut value = 0f64;
    for c in digits.chars() {
        let digit = c.to_digit(radix)?;
        value = value * f64::from(radix) + f64::from(digit);
    }
    Some(value)
}

#[cfg(test)]
#[path = "../tests/node_arena.rs"]
mod tests;
