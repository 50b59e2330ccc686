//! NodeArena access methods (get_* methods, parent lookups and predicates).

use crate::base::{NodeIndex, NodeList};
use crate::node::*;

impl NodeArena {
    #[inline]
    #[must_use]
    pub fn get(&self, idx: NodeIndex) -> Option<&Node> {
        if idx.is_none() {
            return None;
        }
        self.nodes.get(idx.0 as usize)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Parent of a node, or `NodeIndex::NONE` for roots and detached nodes.
    #[inline]
    #[must_use]
    pub fn parent(&self, idx: NodeIndex) -> NodeIndex {
        if idx.is_none() {
            return NodeIndex::NONE;
        }
        self.parents
            .get(idx.0 as usize)
            .copied()
            .unwrap_or(NodeIndex::NONE)
    }

    #[inline]
    #[must_use]
    pub fn kind(&self, idx: NodeIndex) -> Option<NodeKind> {
        self.get(idx).map(Node::kind)
    }

    // ============================================================================
    // Typed accessors
    // ============================================================================

    #[inline]
    #[must_use]
    pub fn get_enum<'n>(&self, node: &'n Node) -> Option<&'n EnumData> {
        match &node.data {
            NodeData::EnumDeclaration(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn get_enum_member<'n>(&self, node: &'n Node) -> Option<&'n EnumMemberData> {
        match &node.data {
            NodeData::EnumMember(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn get_identifier<'n>(&self, node: &'n Node) -> Option<&'n IdentifierData> {
        match &node.data {
            NodeData::Identifier(data) => Some(data),
            _ => None,
        }
    }

    /// String, numeric, or no-substitution template literal data.
    #[inline]
    #[must_use]
    pub fn get_literal<'n>(&self, node: &'n Node) -> Option<&'n LiteralData> {
        match &node.data {
            NodeData::StringLiteral(data)
            | NodeData::NumericLiteral(data)
            | NodeData::NoSubstitutionTemplateLiteral(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn get_export_decl<'n>(&self, node: &'n Node) -> Option<&'n ExportDeclData> {
        match &node.data {
            NodeData::ExportDeclaration(data) => Some(data),
            _ => None,
        }
    }

    /// Statement list of a source file or block.
    #[inline]
    #[must_use]
    pub fn get_statements<'n>(&self, node: &'n Node) -> Option<&'n NodeList> {
        match &node.data {
            NodeData::SourceFile(data) | NodeData::Block(data) => Some(&data.statements),
            _ => None,
        }
    }

    // ============================================================================
    // Text helpers
    // ============================================================================

    /// Text of an identifier node.
    #[must_use]
    pub fn identifier_text(&self, idx: NodeIndex) -> Option<&str> {
        let node = self.get(idx)?;
        self.get_identifier(node).map(|id| id.escaped_text.as_str())
    }

    /// Text of a property-like name: an identifier or a string literal.
    #[must_use]
    pub fn property_name_text(&self, idx: NodeIndex) -> Option<&str> {
        let node = self.get(idx)?;
        match &node.data {
            NodeData::Identifier(id) => Some(id.escaped_text.as_str()),
            NodeData::StringLiteral(lit) | NodeData::NumericLiteral(lit) => Some(lit.text.as_str()),
            _ => None,
        }
    }
}
