//! Conversion of host AST expressions into IR, preserving them as written.
//!
//! Used for enum initializers that cannot be folded and for statements the
//! lowering pass passes through unchanged.

use crate::transforms::ir::IRNode;
use enumlower_ast::node::NodeData;
use enumlower_ast::{NodeArena, NodeIndex};

/// Convert an expression node to IR.
///
/// Returns `None` for missing nodes and for nodes that are not expressions.
pub fn expression_to_ir(arena: &NodeArena, idx: NodeIndex) -> Option<IRNode> {
    let node = arena.get(idx)?;
    let ir = match &node.data {
        NodeData::Identifier(id) => IRNode::id(id.escaped_text.clone()),
        NodeData::NumericLiteral(lit) => IRNode::number(lit.text.clone()),
        NodeData::StringLiteral(lit) => IRNode::string(lit.text.clone()),
        NodeData::NoSubstitutionTemplateLiteral(lit) => IRNode::TemplateLiteral {
            head: lit.text.clone(),
            spans: Vec::new(),
        },
        NodeData::TemplateExpression(tpl) => {
            let mut spans = Vec::with_capacity(tpl.spans.len());
            for span in &tpl.spans {
                spans.push((expression_to_ir(arena, span.expression)?, span.literal.clone()));
            }
            IRNode::TemplateLiteral {
                head: tpl.head.clone(),
                spans,
            }
        }
        NodeData::PrefixUnaryExpression(unary) => IRNode::prefix(
            unary.operator.text(),
            expression_to_ir(arena, unary.operand)?,
        ),
        NodeData::BinaryExpression(bin) => IRNode::binary(
            expression_to_ir(arena, bin.left)?,
            bin.operator.text(),
            expression_to_ir(arena, bin.right)?,
        ),
        NodeData::ParenthesizedExpression(paren) => {
            expression_to_ir(arena, paren.expression)?.paren()
        }
        NodeData::CallExpression(call) => {
            let callee = expression_to_ir(arena, call.expression)?;
            let mut args = Vec::with_capacity(call.arguments.len());
            for &arg in &call.arguments.nodes {
                args.push(expression_to_ir(arena, arg)?);
            }
            IRNode::call(callee, args)
        }
        NodeData::PropertyAccessExpression(access) => IRNode::prop(
            expression_to_ir(arena, access.expression)?,
            arena.identifier_text(access.name)?,
        ),
        NodeData::ElementAccessExpression(access) => IRNode::elem(
            expression_to_ir(arena, access.expression)?,
            expression_to_ir(arena, access.argument)?,
        ),
        NodeData::SourceFile(_)
        | NodeData::Block(_)
        | NodeData::ExportDeclaration(_)
        | NodeData::EnumDeclaration(_)
        | NodeData::EnumMember(_)
        | NodeData::VariableStatement(_)
        | NodeData::ExpressionStatement(_)
        | NodeData::IfStatement(_)
        | NodeData::LabeledStatement(_) => return None,
    };
    Some(ir)
}

#[cfg(test)]
#[path = "../../tests/expression_ir.rs"]
mod tests;
