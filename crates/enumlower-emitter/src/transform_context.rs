//! Scope context for enum lowering.
//!
//! Holds the state that outlives a single enum declaration during a pass:
//!
//! - **Merge markers**: `(scope, name) -> bool`, set once a binding for `name`
//!   has been emitted in `scope`. A later declaration of the same name in the
//!   same scope reuses that binding instead of declaring a new one. Markers are
//!   never cleared.
//! - **Declaration table**: the bindings each scope gained from lowering.
//!
//! Scopes are identified by the `NodeIndex` of their source file or block.

use enumlower_ast::{NodeArena, NodeIndex, NodeKind, VarKind};
use rustc_hash::FxHashMap;

/// A binding introduced into a scope by lowering an enum declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredBinding {
    pub name: String,
    pub kind: VarKind,
    /// The enum declaration that introduced it
    pub declaration: NodeIndex,
}

#[derive(Debug, Default)]
pub struct ScopeContext {
    merge_markers: FxHashMap<(NodeIndex, String), bool>,
    declarations: FxHashMap<NodeIndex, Vec<DeclaredBinding>>,
}

impl ScopeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a binding for `name` was already emitted in `scope`.
    pub fn has_emitted_binding(&self, scope: NodeIndex, name: &str) -> bool {
        self.merge_markers
            .get(&(scope, name.to_string()))
            .copied()
            .unwrap_or(false)
    }

    /// Set the merge marker for `name` in `scope`.
    ///
    /// Returns `true` if the marker was newly set, `false` if this is a repeat
    /// declaration.
    pub fn mark_binding_emitted(&mut self, scope: NodeIndex, name: &str) -> bool {
        let marker = self
            .merge_markers
            .entry((scope, name.to_string()))
            .or_insert(false);
        !std::mem::replace(marker, true)
    }

    pub fn register_binding(&mut self, scope: NodeIndex, binding: DeclaredBinding) {
        self.declarations.entry(scope).or_default().push(binding);
    }

    /// Bindings registered in `scope`, in emission order.
    pub fn bindings(&self, scope: NodeIndex) -> &[DeclaredBinding] {
        self.declarations.get(&scope).map_or(&[], Vec::as_slice)
    }

    /// Number of (scope, name) pairs with a binding.
    pub fn marker_count(&self) -> usize {
        self.merge_markers.values().filter(|&&marked| marked).count()
    }

    pub fn is_empty(&self) -> bool {
        self.merge_markers.is_empty() && self.declarations.is_empty()
    }
}

/// The node whose statement list holds `site`, looking through export
/// wrappers. `NodeIndex::NONE` for detached nodes.
///
/// The result is not checked to be a statement container; callers validate it.
pub fn enclosing_scope(arena: &NodeArena, site: NodeIndex) -> NodeIndex {
    let mut parent = arena.parent(site);
    while arena.kind(parent) == Some(NodeKind::ExportDeclaration) {
        parent = arena.parent(parent);
    }
    parent
}

#[cfg(test)]
#[path = "../tests/transform_context.rs"]
mod tests;
