// ABOUTME: Element lookup capability injected into the walkthrough core

use crate::dom::{Bounds, NodeId};

/// Handle to an element that was attached when it was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementHandle {
    node: NodeId,
    key: String,
}

impl ElementHandle {
    pub fn new(node: NodeId, key: impl Into<String>) -> Self {
        Self {
            node,
            key: key.into(),
        }
    }

    pub const fn node(&self) -> NodeId {
        self.node
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Resolves step targets to elements and reports their geometry.
///
/// Absence is a normal outcome: `None` means "not attached (yet)".
pub trait ElementResolver {
    /// Look up the attached element whose key is `target_id`.
    fn resolve(&self, target_id: &str) -> Option<ElementHandle>;

    /// Current document-space bounds of `element`, or `None` once it is detached.
    fn bounds(&self, element: &ElementHandle) -> Option<Bounds>;
}
