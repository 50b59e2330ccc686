//! Enum member value resolution.
//!
//! Members are resolved strictly in declaration order. Each member either
//! folds to a constant (number or string) or stays a runtime expression:
//!
//! ```typescript
//! enum E { A, B = 1 << 1, C = A | B }      // A = 0, B = 2, C = 2
//! enum F { A = 1, B = f(), C }             // C = 1 + F["B"] at runtime
//! enum S { A = "a", B }                    // error: B needs an initializer
//! ```
//!
//! Only constants enter the name table consulted for identifier references.
//! A runtime member breaks the auto-increment chain: later members without an
//! initializer read the previous member back from the enum object.

use crate::error::LoweringError;
use crate::transforms::emit_utils::format_js_number;
use crate::transforms::expression_ir::expression_to_ir;
use crate::transforms::ir::IRNode;
use enumlower_ast::node::NodeData;
use enumlower_ast::{BinaryOperator, NodeArena, NodeIndex, NodeList, PrefixOperator};
use enumlower_common::Span;
use enumlower_common::limits::MAX_CONSTANT_EVAL_DEPTH;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

/// A statically known enum member value.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumValue {
    Number(f64),
    String(String),
}

impl EnumValue {
    /// IR literal for this value.
    pub fn to_ir(&self) -> IRNode {
        match self {
            EnumValue::Number(n) => IRNode::number(format_js_number(*n)),
            EnumValue::String(s) => IRNode::string(s.clone()),
        }
    }

    pub const fn as_number(&self) -> Option<f64> {
        match self {
            EnumValue::Number(n) => Some(*n),
            EnumValue::String(_) => None,
        }
    }
}

/// The resolved value of one member.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedValue {
    Constant(EnumValue),
    /// Runtime expression, emitted as-is
    Dynamic(IRNode),
}

impl ResolvedValue {
    /// String-valued members get a forward mapping only; everything else gets
    /// a reverse mapping too.
    pub fn is_string_valued(&self) -> bool {
        match self {
            ResolvedValue::Constant(EnumValue::String(_)) => true,
            ResolvedValue::Constant(EnumValue::Number(_)) => false,
            ResolvedValue::Dynamic(expr) => expr.is_string_literal(),
        }
    }

    pub fn to_ir(&self) -> IRNode {
        match self {
            ResolvedValue::Constant(value) => value.to_ir(),
            ResolvedValue::Dynamic(expr) => expr.clone(),
        }
    }
}

/// A member paired with its resolved value.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMember {
    pub name: String,
    pub value: ResolvedValue,
    /// The member declaration node
    pub node: NodeIndex,
}

/// State of the auto-increment chain.
#[derive(Debug, Clone, Copy, PartialEq)]
enum LastValue {
    Number(f64),
    /// The previous member was a string constant
    StringChain,
    /// The previous member was only known at runtime
    Unknown,
}

/// Resolves the members of one enum declaration.
pub struct EnumEvaluator<'a> {
    arena: &'a NodeArena,
    enum_name: &'a str,
    /// Constant values of the members resolved so far
    known_values: FxHashMap<String, EnumValue>,
    last_value: LastValue,
    previous_member: Option<String>,
}

impl<'a> EnumEvaluator<'a> {
    pub fn new(arena: &'a NodeArena, enum_name: &'a str) -> Self {
        EnumEvaluator {
            arena,
            enum_name,
            known_values: FxHashMap::default(),
            // So an unannotated first member resolves to 0
            last_value: LastValue::Number(-1.0),
            previous_member: None,
        }
    }

    /// Resolve every member in declaration order.
    pub fn resolve_members(
        mut self,
        members: &NodeList,
    ) -> Result<Vec<ResolvedMember>, LoweringError> {
        let mut result = Vec::with_capacity(members.len());

        for &member_idx in &members.nodes {
            let Some(member_node) = self.arena.get(member_idx) else {
                continue;
            };
            let Some(member_data) = self.arena.get_enum_member(member_node) else {
                continue;
            };
            let Some(member_name) = self.arena.property_name_text(member_data.name) else {
                debug!(enum_name = self.enum_name, "skipping enum member without a name");
                continue;
            };
            let member_name = member_name.to_string();

            let value = if member_data.initializer.is_none() {
                self.resolve_auto_member(&member_name, member_node.span)?
            } else {
                self.resolve_initialized_member(&member_name, member_data.initializer)
            };

            trace!(
                enum_name = self.enum_name,
                member = member_name.as_str(),
                value = ?value,
                "resolved enum member"
            );

            self.previous_member = Some(member_name.clone());
            result.push(ResolvedMember {
                name: member_name,
                value,
                node: member_idx,
            });
        }

        Ok(result)
    }

    fn resolve_auto_member(
        &mut self,
        member_name: &str,
        span: Span,
    ) -> Result<ResolvedValue, LoweringError> {
        match self.last_value {
            LastValue::Number(prev) => {
                let value = prev + 1.0;
                self.last_value = LastValue::Number(value);
                self.known_values
                    .insert(member_name.to_string(), EnumValue::Number(value));
                Ok(ResolvedValue::Constant(EnumValue::Number(value)))
            }
            LastValue::StringChain => Err(LoweringError::MissingInitializer {
                member: member_name.to_string(),
                span,
            }),
            LastValue::Unknown => {
                // 1 + E["Prev"], read back at runtime
                let previous = self.previous_member.clone().unwrap_or_default();
                Ok(ResolvedValue::Dynamic(IRNode::binary(
                    IRNode::number("1"),
                    "+",
                    IRNode::elem(IRNode::id(self.enum_name), IRNode::string(previous)),
                )))
            }
        }
    }

    fn resolve_initialized_member(
        &mut self,
        member_name: &str,
        initializer: NodeIndex,
    ) -> ResolvedValue {
        match self.evaluate(initializer) {
            Some(value) => {
                self.last_value = match &value {
                    EnumValue::Number(n) => LastValue::Number(*n),
                    EnumValue::String(_) => LastValue::StringChain,
                };
                self.known_values.insert(member_name.to_string(), value.clone());
                ResolvedValue::Constant(value)
            }
            None => {
                self.last_value = LastValue::Unknown;
                let expr = expression_to_ir(self.arena, initializer)
                    .unwrap_or_else(|| IRNode::id("undefined"));
                ResolvedValue::Dynamic(expr)
            }
        }
    }

    // =========================================================================
    // Constant expression evaluation
    // =========================================================================

    /// Evaluate an expression to a constant, or `None` when it is not a
    /// compile-time constant. Never fails on unsupported shapes.
    pub fn evaluate(&self, expr_idx: NodeIndex) -> Option<EnumValue> {
        self.evaluate_at_depth(expr_idx, 0)
    }

    fn evaluate_at_depth(&self, expr_idx: NodeIndex, depth: u32) -> Option<EnumValue> {
        if depth >= MAX_CONSTANT_EVAL_DEPTH {
            return None;
        }
        let node = self.arena.get(expr_idx)?;
        match &node.data {
            NodeData::NumericLiteral(lit) => lit.value.map(EnumValue::Number),
            NodeData::StringLiteral(lit) | NodeData::NoSubstitutionTemplateLiteral(lit) => {
                Some(EnumValue::String(lit.text.clone()))
            }
            NodeData::TemplateExpression(tpl) if tpl.spans.is_empty() => {
                Some(EnumValue::String(tpl.head.clone()))
            }
            NodeData::ParenthesizedExpression(paren) => {
                self.evaluate_at_depth(paren.expression, depth + 1)
            }
            NodeData::Identifier(id) => self.known_values.get(&id.escaped_text).cloned(),
            NodeData::PrefixUnaryExpression(unary) => {
                let operand = self.evaluate_at_depth(unary.operand, depth + 1)?;
                evaluate_prefix(unary.operator, operand.as_number()?)
            }
            NodeData::BinaryExpression(bin) => {
                let left = self.evaluate_at_depth(bin.left, depth + 1)?;
                let right = self.evaluate_at_depth(bin.right, depth + 1)?;
                evaluate_binary(bin.operator, left, right)
            }
            NodeData::TemplateExpression(_)
            | NodeData::CallExpression(_)
            | NodeData::PropertyAccessExpression(_)
            | NodeData::ElementAccessExpression(_)
            | NodeData::SourceFile(_)
            | NodeData::Block(_)
            | NodeData::ExportDeclaration(_)
            | NodeData::EnumDeclaration(_)
            | NodeData::EnumMember(_)
            | NodeData::VariableStatement(_)
            | NodeData::ExpressionStatement(_)
            | NodeData::IfStatement(_)
            | NodeData::LabeledStatement(_) => None,
        }
    }
}

fn evaluate_prefix(operator: PrefixOperator, operand: f64) -> Option<EnumValue> {
    let value = match operator {
        PrefixOperator::Plus => operand,
        PrefixOperator::Minus => -operand,
        PrefixOperator::Tilde => f64::from(!to_int32(operand)),
        PrefixOperator::Exclamation | PrefixOperator::TypeOf => return None,
    };
    Some(EnumValue::Number(value))
}

fn evaluate_binary(operator: BinaryOperator, left: EnumValue, right: EnumValue) -> Option<EnumValue> {
    let (left, right) = match (left, right) {
        (EnumValue::Number(l), EnumValue::Number(r)) => (l, r),
        (left, right) => {
            // Only `+` is defined over strings: concatenation.
            if operator != BinaryOperator::Plus {
                return None;
            }
            return Some(EnumValue::String(format!(
                "{}{}",
                to_js_string(&left),
                to_js_string(&right)
            )));
        }
    };

    let value = match operator {
        BinaryOperator::Bar => f64::from(to_int32(left) | to_int32(right)),
        BinaryOperator::Ampersand => f64::from(to_int32(left) & to_int32(right)),
        BinaryOperator::Caret => f64::from(to_int32(left) ^ to_int32(right)),
        BinaryOperator::LessThanLessThan => {
            f64::from(to_int32(left).wrapping_shl(shift_count(right)))
        }
        BinaryOperator::GreaterThanGreaterThan => {
            f64::from(to_int32(left).wrapping_shr(shift_count(right)))
        }
        BinaryOperator::GreaterThanGreaterThanGreaterThan => {
            f64::from(to_uint32(left).wrapping_shr(shift_count(right)))
        }
        BinaryOperator::Asterisk => left * right,
        BinaryOperator::Slash => left / right,
        BinaryOperator::Percent => left % right,
        BinaryOperator::Plus => left + right,
        BinaryOperator::Minus => left - right,
        BinaryOperator::AsteriskAsterisk
        | BinaryOperator::EqualsEqualsEquals
        | BinaryOperator::ExclamationEqualsEquals
        | BinaryOperator::AmpersandAmpersand
        | BinaryOperator::BarBar
        | BinaryOperator::QuestionQuestion => return None,
    };
    Some(EnumValue::Number(value))
}

/// ECMAScript ToUint32.
fn to_uint32(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    let modulo = value.trunc().rem_euclid(4_294_967_296.0);
    modulo as u32
}

/// ECMAScript ToInt32.
fn to_int32(value: f64) -> i32 {
    to_uint32(value) as i32
}

/// Shift counts use the low five bits of the right operand.
fn shift_count(value: f64) -> u32 {
    to_uint32(value) & 0x1f
}

fn to_js_string(value: &EnumValue) -> String {
    match value {
        EnumValue::Number(n) => format_js_number(*n),
        EnumValue::String(s) => s.clone(),
    }
}

#[cfg(test)]
#[path = "../../tests/enum_evaluator.rs"]
mod tests;
