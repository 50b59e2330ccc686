//! Enum declaration lowering: placement and merging.
//!
//! Turns one enum declaration into the statements that replace it in its
//! statement list:
//!
//! ```typescript
//! enum E { A }
//! enum E { B = 1 }
//! ```
//!
//! ```javascript
//! var E;
//! (function (E) {
//!     E[E["A"] = 0] = "A";
//! })(E || (E = {}));
//! (function (E) {
//!     E[E["B"] = 1] = "B";
//! })(E || (E = {}));
//! ```
//!
//! The first declaration of a name in a scope is replaced by a binding
//! followed by its fill wrapper. Later declarations of the same name in the
//! same scope are replaced by the fill wrapper alone, so every wrapper
//! receives the object built so far.

use crate::error::LoweringError;
use crate::options::EnumLoweringOptions;
use crate::transform_context::{DeclaredBinding, ScopeContext, enclosing_scope};
use crate::transforms::enum_es5_ir::EnumES5Transformer;
use crate::transforms::ir::IRNode;
use enumlower_ast::{NodeArena, NodeIndex, NodeKind};
use tracing::debug;

/// Lower the enum declaration at `enum_idx`.
///
/// Returns the replacement statements for the declaration's site: the
/// declaration itself, or the export wrapper around it. An empty vector
/// removes the site without replacement (ambient and erased const enums).
pub fn transform_enum_declaration(
    arena: &NodeArena,
    enum_idx: NodeIndex,
    scopes: &mut ScopeContext,
    options: &EnumLoweringOptions,
) -> Result<Vec<IRNode>, LoweringError> {
    let Some(enum_node) = arena.get(enum_idx) else {
        return Ok(Vec::new());
    };
    let Some(enum_data) = arena.get_enum(enum_node) else {
        return Ok(Vec::new());
    };

    if enum_data.is_ambient() {
        debug!(enum_idx = enum_idx.0, "ambient enum erased");
        return Ok(Vec::new());
    }
    if enum_data.is_const() && !options.preserve_const_enums {
        debug!(enum_idx = enum_idx.0, "const enum erased");
        return Ok(Vec::new());
    }

    let is_exported = arena.kind(arena.parent(enum_idx)) == Some(NodeKind::ExportDeclaration);
    let scope = enclosing_scope(arena, enum_idx);
    let scope_kind = arena.kind(scope);
    if !scope_kind.is_some_and(NodeKind::is_statement_container) {
        return Err(LoweringError::UnexpectedParent {
            parent_kind: scope_kind.map_or("None", NodeKind::name),
            span: enum_node.span,
        });
    }

    let Some(lowered) = EnumES5Transformer::new(arena).transform_enum(enum_idx)? else {
        return Ok(Vec::new());
    };

    if !scopes.mark_binding_emitted(scope, &lowered.name) {
        debug!(
            enum_name = lowered.name.as_str(),
            scope = scope.0,
            "merging into existing enum binding"
        );
        return Ok(vec![lowered.fill]);
    }

    let kind = options.binding_kind(scope_kind == Some(NodeKind::SourceFile));
    scopes.register_binding(
        scope,
        DeclaredBinding {
            name: lowered.name.clone(),
            kind,
            declaration: enum_idx,
        },
    );
    debug!(
        enum_name = lowered.name.as_str(),
        scope = scope.0,
        keyword = kind.keyword(),
        exported = is_exported,
        "declared enum binding"
    );

    let mut binding = IRNode::binding(kind, lowered.name, None);
    if is_exported {
        binding = IRNode::export(binding);
    }
    Ok(vec![binding, lowered.fill])
}

#[cfg(test)]
#[path = "../../tests/enum_lowering.rs"]
mod tests;
