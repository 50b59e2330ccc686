//! IR Printer
//!
//! Walks IR trees and emits JavaScript text with four-space indentation.
//! Statement lists are printed one statement per line; `Sequence` nodes are
//! flattened into the surrounding list.
//!
//! Expression trees need not carry `Parenthesized` nodes: operands that bind
//! looser than their context are wrapped in parentheses on output, so an IR
//! built by hand prints with the same meaning as its tree shape.

use super::emit_utils::{escape_string, escape_template};
use super::ir::IRNode;

const INDENT: &str = "    ";

/// Precedence of prefix unary expressions.
const UNARY_PRECEDENCE: u8 = 14;
/// Precedence of calls, member accesses, literals and identifiers.
const PRIMARY_PRECEDENCE: u8 = 15;

/// Binding power of a binary operator; higher binds tighter.
fn binary_precedence(operator: &str) -> u8 {
    match operator {
        "=" => 1,
        "??" => 2,
        "||" => 3,
        "&&" => 4,
        "|" => 5,
        "^" => 6,
        "&" => 7,
        "==" | "!=" | "===" | "!==" => 8,
        "<" | ">" | "<=" | ">=" | "in" | "instanceof" => 9,
        "<<" | ">>" | ">>>" => 10,
        "+" | "-" => 11,
        "*" | "/" | "%" => 12,
        "**" => 13,
        _ => 0,
    }
}

fn is_right_associative(operator: &str) -> bool {
    matches!(operator, "=" | "**")
}

/// Operator of a binary-like node, if any.
fn binary_operator(node: &IRNode) -> Option<&str> {
    match node {
        IRNode::BinaryExpr { operator, .. } => Some(operator.as_str()),
        IRNode::LogicalOr { .. } => Some("||"),
        _ => None,
    }
}

fn expression_precedence(node: &IRNode) -> u8 {
    match node {
        IRNode::BinaryExpr { .. } | IRNode::LogicalOr { .. } => {
            binary_operator(node).map_or(0, binary_precedence)
        }
        IRNode::PrefixUnaryExpr { .. } => UNARY_PRECEDENCE,
        _ => PRIMARY_PRECEDENCE,
    }
}

/// Whether `operand` must be parenthesized as one side of `operator`.
fn needs_parens_in_binary(operator: &str, operand: &IRNode, is_left: bool) -> bool {
    let precedence = binary_precedence(operator);
    let operand_precedence = expression_precedence(operand);
    // `??` cannot be mixed with `||` or `&&` without parentheses.
    if let Some(inner) = binary_operator(operand) {
        let is_logical = |op: &str| matches!(op, "||" | "&&");
        if (operator == "??" && is_logical(inner)) || (is_logical(operator) && inner == "??") {
            return true;
        }
    }
    // `-a ** b` is a syntax error.
    if operator == "**" && is_left && matches!(operand, IRNode::PrefixUnaryExpr { .. }) {
        return true;
    }
    if is_left == is_right_associative(operator) {
        operand_precedence <= precedence
    } else {
        operand_precedence < precedence
    }
}

/// Prints IR nodes as JavaScript source.
pub struct IRPrinter {
    output: String,
    indent_level: usize,
}

impl Default for IRPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl IRPrinter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
        }
    }

    /// Print a single node without a trailing newline.
    pub fn emit_to_string(node: &IRNode) -> String {
        let mut printer = Self::new();
        printer.emit_node(node);
        printer.output
    }

    /// Print a statement list, one statement per line, with a trailing newline.
    pub fn emit_program(statements: &[IRNode]) -> String {
        let mut printer = Self::new();
        let mut first = true;
        printer.emit_statement_lines(statements, &mut first);
        if !first {
            printer.write_line();
        }
        printer.output
    }

    pub fn get_output(&self) -> &str {
        &self.output
    }

    // =========================================================================
    // Writer primitives
    // =========================================================================

    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn write_line(&mut self) {
        self.output.push('\n');
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(INDENT);
        }
    }

    fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    fn decrease_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    // =========================================================================
    // Statement lists
    // =========================================================================

    /// Emit statements at the current indent, separated by newlines.
    /// `first` tracks whether any line has been written yet.
    fn emit_statement_lines(&mut self, statements: &[IRNode], first: &mut bool) {
        for stmt in statements {
            if let IRNode::Sequence(inner) = stmt {
                self.emit_statement_lines(inner, first);
                continue;
            }
            if !*first {
                self.write_line();
            }
            *first = false;
            self.write_indent();
            self.emit_node(stmt);
        }
    }

    /// Emit `{`, the indented statements, and `}`; `{ }` when empty.
    fn emit_braced_body(&mut self, statements: &[IRNode]) {
        if Self::is_empty_body(statements) {
            self.write("{ }");
            return;
        }
        self.write("{");
        self.write_line();
        self.increase_indent();
        let mut first = true;
        self.emit_statement_lines(statements, &mut first);
        self.decrease_indent();
        self.write_line();
        self.write_indent();
        self.write("}");
    }

    fn is_empty_body(statements: &[IRNode]) -> bool {
        statements.iter().all(|stmt| match stmt {
            IRNode::Sequence(inner) => Self::is_empty_body(inner),
            _ => false,
        })
    }

    /// Emit the body of an `if`/label: blocks stay on the same line, other
    /// statements go on the next line, indented.
    fn emit_embedded_statement(&mut self, stmt: &IRNode) {
        if let IRNode::Block(statements) = stmt {
            self.write(" ");
            self.emit_braced_body(statements);
        } else {
            self.write_line();
            self.increase_indent();
            self.write_indent();
            self.emit_node(stmt);
            self.decrease_indent();
        }
    }

    // =========================================================================
    // Nodes
    // =========================================================================

    fn emit_operand(&mut self, node: &IRNode, parenthesize: bool) {
        if parenthesize {
            self.write("(");
            self.emit_node(node);
            self.write(")");
        } else {
            self.emit_node(node);
        }
    }

    fn emit_binary(&mut self, left: &IRNode, operator: &str, right: &IRNode) {
        self.emit_operand(left, needs_parens_in_binary(operator, left, true));
        self.write(" ");
        self.write(operator);
        self.write(" ");
        self.emit_operand(right, needs_parens_in_binary(operator, right, false));
    }

    /// Emit the object of a member access or the callee of a call.
    fn emit_member_target(&mut self, node: &IRNode) {
        self.emit_operand(node, expression_precedence(node) < PRIMARY_PRECEDENCE);
    }

    pub fn emit_node(&mut self, node: &IRNode) {
        match node {
            IRNode::NumericLiteral(text) => self.write(text),
            IRNode::StringLiteral(text) => {
                self.write("\"");
                self.write(&escape_string(text));
                self.write("\"");
            }
            IRNode::TemplateLiteral { head, spans } => {
                self.write("`");
                self.write(&escape_template(head));
                for (expr, literal) in spans {
                    self.write("${");
                    self.emit_node(expr);
                    self.write("}");
                    self.write(&escape_template(literal));
                }
                self.write("`");
            }
            IRNode::EmptyObject => self.write("{}"),
            IRNode::Identifier(name) => self.write(name),
            IRNode::BinaryExpr {
                left,
                operator,
                right,
            } => self.emit_binary(left, operator, right),
            IRNode::PrefixUnaryExpr { operator, operand } => {
                self.write(operator);
                let operand_start = self.output.len();
                self.emit_operand(operand, expression_precedence(operand) < UNARY_PRECEDENCE);
                // `- -x` must not print as the decrement `--x`.
                if let Some(sign @ ('+' | '-')) = operator.chars().last()
                    && self.output[operand_start..].starts_with(sign)
                {
                    self.output.insert(operand_start, ' ');
                }
            }
            IRNode::CallExpr { callee, arguments } => {
                self.emit_member_target(callee);
                self.write("(");
                for (i, arg) in arguments.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.emit_node(arg);
                }
                self.write(")");
            }
            IRNode::PropertyAccess { object, property } => {
                self.emit_member_target(object);
                self.write(".");
                self.write(property);
            }
            IRNode::ElementAccess { object, index } => {
                self.emit_member_target(object);
                self.write("[");
                self.emit_node(index);
                self.write("]");
            }
            IRNode::Parenthesized(expr) => {
                self.write("(");
                self.emit_node(expr);
                self.write(")");
            }
            IRNode::FunctionExpr {
                name,
                parameters,
                body,
            } => {
                self.write("function ");
                if let Some(name) = name {
                    self.write(name);
                }
                self.write("(");
                self.write(&parameters.join(", "));
                self.write(") ");
                self.emit_braced_body(body);
            }
            IRNode::LogicalOr { left, right } => self.emit_binary(left, "||", right),
            IRNode::VarDecl {
                kind,
                name,
                initializer,
            } => {
                self.write(kind.keyword());
                self.write(" ");
                self.write(name);
                if let Some(init) = initializer {
                    self.write(" = ");
                    self.emit_node(init);
                }
                self.write(";");
            }
            IRNode::VarDeclList { kind, declarations } => {
                self.write(kind.keyword());
                self.write(" ");
                for (i, (name, init)) in declarations.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.write(name);
                    if let Some(init) = init {
                        self.write(" = ");
                        self.emit_node(init);
                    }
                }
                self.write(";");
            }
            IRNode::ExportDecl(decl) => {
                self.write("export ");
                self.emit_node(decl);
            }
            IRNode::ExpressionStatement(expr) => {
                self.emit_node(expr);
                self.write(";");
            }
            IRNode::IfStatement {
                condition,
                then_branch,
                else_branch,
            } => {
                self.write("if (");
                self.emit_node(condition);
                self.write(")");
                self.emit_embedded_statement(then_branch);
                if let Some(else_branch) = else_branch {
                    if matches!(then_branch.as_ref(), IRNode::Block(_)) {
                        self.write(" ");
                    } else {
                        self.write_line();
                        self.write_indent();
                    }
                    self.write("else");
                    self.emit_embedded_statement(else_branch);
                }
            }
            IRNode::Block(statements) => self.emit_braced_body(statements),
            IRNode::LabeledStatement { label, statement } => {
                self.write(label);
                self.write(":");
                self.emit_embedded_statement(statement);
            }
            IRNode::EmptyStatement => self.write(";"),
            IRNode::Sequence(statements) => {
                let mut first = true;
                for stmt in statements {
                    if !first {
                        self.write_line();
                        self.write_indent();
                    }
                    first = false;
                    self.emit_node(stmt);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/ir_printer.rs"]
mod tests;
