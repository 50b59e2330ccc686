//! ES5 Enum Transform (IR-based)
//!
//! Builds the fill wrapper that populates an enum's backing object.
//!
//! # Patterns
//!
//! ## Numeric Enum (with Reverse Mapping)
//! ```typescript
//! enum E { A, B = 2 }
//! ```
//! Becomes IR that prints as:
//! ```javascript
//! (function (E) {
//!     E[E["A"] = 0] = "A";
//!     E[E["B"] = 2] = "B";
//! })(E || (E = {}));
//! ```
//!
//! ## String Enum (No Reverse Mapping)
//! ```typescript
//! enum S { A = "a" }
//! ```
//! Becomes:
//! ```javascript
//! (function (S) {
//!     S["A"] = "a";
//! })(S || (S = {}));
//! ```
//!
//! The binding (`var E;` / `let E;`) is not produced here; see
//! [`super::enum_lowering`].

use crate::enums::{EnumEvaluator, ResolvedMember};
use crate::error::LoweringError;
use crate::transforms::ir::IRNode;
use enumlower_ast::{NodeArena, NodeIndex};

/// An enum declaration with its members resolved and its fill statement built.
#[derive(Debug, Clone, PartialEq)]
pub struct LoweredEnum {
    pub name: String,
    pub members: Vec<ResolvedMember>,
    /// `(function (E) { ... })(E || (E = {}));`
    pub fill: IRNode,
}

/// Transforms enum declarations into fill wrappers.
pub struct EnumES5Transformer<'a> {
    arena: &'a NodeArena,
}

impl<'a> EnumES5Transformer<'a> {
    pub const fn new(arena: &'a NodeArena) -> Self {
        EnumES5Transformer { arena }
    }

    /// Resolve the members of `enum_idx` and build its fill statement.
    ///
    /// Returns `Ok(None)` when the node is not an enum declaration or has no
    /// name.
    pub fn transform_enum(
        &self,
        enum_idx: NodeIndex,
    ) -> Result<Option<LoweredEnum>, LoweringError> {
        let Some(enum_node) = self.arena.get(enum_idx) else {
            return Ok(None);
        };
        let Some(enum_data) = self.arena.get_enum(enum_node) else {
            return Ok(None);
        };
        let Some(name) = self.arena.identifier_text(enum_data.name) else {
            return Ok(None);
        };
        if name.is_empty() {
            return Ok(None);
        }

        let members =
            EnumEvaluator::new(self.arena, name).resolve_members(&enum_data.members)?;
        let fill = build_fill_wrapper(name, &members);

        Ok(Some(LoweredEnum {
            name: name.to_string(),
            members,
            fill,
        }))
    }
}

/// Build `E[E["A"] = v] = "A";` for numeric members and `E["A"] = v;` for
/// string-valued ones.
pub fn build_member_assignment(enum_name: &str, member: &ResolvedMember) -> IRNode {
    let forward = IRNode::assign(
        IRNode::elem(IRNode::id(enum_name), IRNode::string(member.name.clone())),
        member.value.to_ir(),
    );

    if member.value.is_string_valued() {
        return IRNode::expr_stmt(forward);
    }

    IRNode::expr_stmt(IRNode::assign(
        IRNode::elem(IRNode::id(enum_name), forward),
        IRNode::string(member.name.clone()),
    ))
}

/// Build `(function (E) { ...assignments })(E || (E = {}));`.
pub fn build_fill_wrapper(enum_name: &str, members: &[ResolvedMember]) -> IRNode {
    let body = members
        .iter()
        .map(|member| build_member_assignment(enum_name, member))
        .collect();

    let function = IRNode::func_expr(vec![enum_name.to_string()], body).paren();
    let argument = IRNode::logical_or(
        IRNode::id(enum_name),
        IRNode::assign(IRNode::id(enum_name), IRNode::EmptyObject).paren(),
    );

    IRNode::expr_stmt(IRNode::call(function, vec![argument]))
}

#[cfg(test)]
#[path = "../../tests/enum_es5_ir.rs"]
mod tests;
