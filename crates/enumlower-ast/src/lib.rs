//! Arena AST for the enumlower transform.
//!
//! Nodes live in a flat [`NodeArena`] and refer to each other through
//! [`NodeIndex`] handles. The arena records a parent pointer for every node,
//! set while building bottom-up, so transforms can ask "what contains this
//! declaration?" without a separate parent map.
//!
//! The node set is closed: every shape the transform understands is a
//! variant of [`node::NodeData`], and consumers match on it exhaustively.

pub mod base;
pub mod node;
mod node_access;
mod node_arena;

pub use base::{NodeIndex, NodeList};
pub use node::{
    BinaryOperator, ModifierFlags, Node, NodeArena, NodeData, NodeKind, PrefixOperator, VarKind,
};
pub use node_arena::parse_numeric_literal;
