//! Lowering Pass
//!
//! Walks a source file depth-first and produces the IR statement list that
//! replaces it. Every enum declaration met in a statement list (directly or
//! inside an `export`) is handed to
//! [`transform_enum_declaration`], and its replacement statements are spliced
//! into the list in place of the declaration. Other statements pass through
//! as IR.
//!
//! ```typescript
//! enum E { A }
//! {
//!     enum E { B }
//! }
//! ```
//!
//! ```javascript
//! var E;
//! (function (E) {
//!     E[E["A"] = 0] = "A";
//! })(E || (E = {}));
//! {
//!     let E;
//!     (function (E) {
//!         E[E["B"] = 0] = "B";
//!     })(E || (E = {}));
//! }
//! ```
//!
//! The pass owns the [`ScopeContext`] for the whole file, so merge markers
//! persist across every declaration it visits.

use crate::error::LoweringError;
use crate::options::EnumLoweringOptions;
use crate::transform_context::ScopeContext;
use crate::transforms::enum_lowering::transform_enum_declaration;
use crate::transforms::expression_ir::expression_to_ir;
use crate::transforms::ir::IRNode;
use crate::transforms::ir_printer::IRPrinter;
use enumlower_ast::node::{NodeData, VariableData};
use enumlower_ast::{NodeArena, NodeIndex, NodeKind, NodeList};
use enumlower_common::limits::MAX_AST_DEPTH;
use tracing::{Level, debug};

/// The lowered form of a source file.
#[derive(Debug)]
pub struct LoweredProgram {
    pub statements: Vec<IRNode>,
    /// Merge markers and bindings recorded while lowering
    pub scopes: ScopeContext,
}

impl LoweredProgram {
    /// Print the program as JavaScript.
    pub fn to_javascript(&self) -> String {
        IRPrinter::emit_program(&self.statements)
    }
}

pub struct LoweringPass<'a> {
    arena: &'a NodeArena,
    options: &'a EnumLoweringOptions,
    scopes: ScopeContext,
    /// Current recursion depth for stack overflow protection
    visit_depth: u32,
    enums_visited: usize,
}

impl<'a> LoweringPass<'a> {
    pub fn new(arena: &'a NodeArena, options: &'a EnumLoweringOptions) -> Self {
        LoweringPass {
            arena,
            options,
            scopes: ScopeContext::new(),
            visit_depth: 0,
            enums_visited: 0,
        }
    }

    /// Lower a source file. Stops at the first error.
    pub fn run(mut self, source_file: NodeIndex) -> Result<LoweredProgram, LoweringError> {
        let statements = match self.arena.get(source_file) {
            Some(node) => match self.arena.get_statements(node) {
                Some(list) => self.lower_statement_list(list)?,
                None => {
                    debug!(node = source_file.0, "lowering root without a statement list");
                    vec![self.lower_statement(source_file)?]
                }
            },
            None => Vec::new(),
        };

        if tracing::enabled!(Level::DEBUG) {
            debug!(
                file = self.arena.file_name(),
                enums = self.enums_visited,
                bindings = self.scopes.marker_count(),
                statements = statements.len(),
                "enum lowering complete"
            );
        }

        Ok(LoweredProgram {
            statements,
            scopes: self.scopes,
        })
    }

    // =========================================================================
    // Statement lists
    // =========================================================================

    fn lower_statement_list(&mut self, list: &NodeList) -> Result<Vec<IRNode>, LoweringError> {
        let mut output = Vec::with_capacity(list.len());
        for &idx in &list.nodes {
            output.extend(self.lower_list_entry(idx)?);
        }
        Ok(output)
    }

    /// Lower one entry of a statement list. Enum declarations may expand to
    /// several statements or to none.
    fn lower_list_entry(&mut self, idx: NodeIndex) -> Result<Vec<IRNode>, LoweringError> {
        let Some(node) = self.arena.get(idx) else {
            return Ok(Vec::new());
        };

        match &node.data {
            NodeData::EnumDeclaration(_) => self.lower_enum(idx),
            NodeData::ExportDeclaration(export) => {
                if self.arena.kind(export.declaration) == Some(NodeKind::EnumDeclaration) {
                    self.lower_enum(export.declaration)
                } else {
                    let inner = self.lower_statement(export.declaration)?;
                    Ok(vec![IRNode::export(inner)])
                }
            }
            _ => Ok(vec![self.lower_statement(idx)?]),
        }
    }

    fn lower_enum(&mut self, enum_idx: NodeIndex) -> Result<Vec<IRNode>, LoweringError> {
        self.enums_visited += 1;
        transform_enum_declaration(self.arena, enum_idx, &mut self.scopes, self.options)
    }

    // =========================================================================
    // Single statements
    // =========================================================================

    /// Lower a statement that occupies exactly one statement slot.
    fn lower_statement(&mut self, idx: NodeIndex) -> Result<IRNode, LoweringError> {
        if self.visit_depth >= MAX_AST_DEPTH {
            let span = self.arena.get(idx).map(|node| node.span).unwrap_or_default();
            return Err(LoweringError::NestingTooDeep {
                max_depth: MAX_AST_DEPTH,
                span,
            });
        }
        self.visit_depth += 1;
        let result = self.lower_statement_inner(idx);
        self.visit_depth -= 1;
        result
    }

    fn lower_statement_inner(&mut self, idx: NodeIndex) -> Result<IRNode, LoweringError> {
        let Some(node) = self.arena.get(idx) else {
            return Ok(IRNode::EmptyStatement);
        };

        let ir = match &node.data {
            NodeData::Block(block) | NodeData::SourceFile(block) => {
                IRNode::Block(self.lower_statement_list(&block.statements)?)
            }
            NodeData::IfStatement(if_stmt) => {
                let else_branch = if if_stmt.else_statement.is_some() {
                    Some(Box::new(self.lower_statement(if_stmt.else_statement)?))
                } else {
                    None
                };
                IRNode::IfStatement {
                    condition: Box::new(self.expression(if_stmt.expression)),
                    then_branch: Box::new(self.lower_statement(if_stmt.then_statement)?),
                    else_branch,
                }
            }
            NodeData::LabeledStatement(labeled) => IRNode::LabeledStatement {
                label: self
                    .arena
                    .identifier_text(labeled.label)
                    .unwrap_or_default()
                    .to_string(),
                statement: Box::new(self.lower_statement(labeled.statement)?),
            },
            NodeData::VariableStatement(var) => self.lower_variable_statement(var),
            NodeData::ExpressionStatement(stmt) => IRNode::expr_stmt(self.expression(stmt.expression)),
            // Enums and exports outside a statement list: the enum transform
            // reports the bad position, or erases the declaration.
            NodeData::EnumDeclaration(_) | NodeData::ExportDeclaration(_) => {
                into_single_statement(self.lower_list_entry(idx)?)
            }
            NodeData::EnumMember(_) => {
                debug!(node = idx.0, "enum member in statement position");
                IRNode::EmptyStatement
            }
            NodeData::Identifier(_)
            | NodeData::NumericLiteral(_)
            | NodeData::StringLiteral(_)
            | NodeData::NoSubstitutionTemplateLiteral(_)
            | NodeData::TemplateExpression(_)
            | NodeData::PrefixUnaryExpression(_)
            | NodeData::BinaryExpression(_)
            | NodeData::ParenthesizedExpression(_)
            | NodeData::CallExpression(_)
            | NodeData::PropertyAccessExpression(_)
            | NodeData::ElementAccessExpression(_) => IRNode::expr_stmt(self.expression(idx)),
        };
        Ok(ir)
    }

    fn lower_variable_statement(&self, var: &VariableData) -> IRNode {
        let declarations = var
            .declarations
            .iter()
            .map(|decl| {
                let name = self.arena.identifier_text(decl.name).unwrap_or_default();
                let init = if decl.initializer.is_some() {
                    Some(self.expression(decl.initializer))
                } else {
                    None
                };
                (name.to_string(), init)
            })
            .collect();
        IRNode::VarDeclList {
            kind: var.kind,
            declarations,
        }
    }

    fn expression(&self, idx: NodeIndex) -> IRNode {
        expression_to_ir(self.arena, idx).unwrap_or_else(|| IRNode::id("undefined"))
    }
}

/// Fit a replacement sequence into a single statement slot.
fn into_single_statement(mut statements: Vec<IRNode>) -> IRNode {
    match statements.len() {
        0 => IRNode::EmptyStatement,
        1 => statements.remove(0),
        _ => IRNode::Sequence(statements),
    }
}

#[cfg(test)]
#[path = "../tests/lowering_pass.rs"]
mod tests;
