// ABOUTME: In-memory element tree standing in for the host document
// Nodes carry a stable key, document-space bounds and string attributes;
// every mutation is reported to the subtree watcher

use std::collections::BTreeMap;

use tracing::warn;

use crate::tour::{ElementHandle, ElementResolver};
use crate::watch::{MutationKind, SubtreeWatcher};

/// Index of a node inside one [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// Document-space rectangle of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Bounds {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }
}

#[derive(Debug)]
struct Node {
    key: String,
    bounds: Bounds,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attributes: BTreeMap<String, String>,
}

/// Tree of elements rooted at a permanent root node.
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    watcher: SubtreeWatcher,
}

impl Document {
    pub fn new(watcher: SubtreeWatcher) -> Self {
        let root = Node {
            key: "root".to_string(),
            bounds: Bounds::default(),
            parent: None,
            children: Vec::new(),
            attributes: BTreeMap::new(),
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
            watcher,
        }
    }

    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Create a detached node. Nothing is notified until it is appended.
    pub fn create(&mut self, key: impl Into<String>, bounds: Bounds) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            key: key.into(),
            bounds,
            parent: None,
            children: Vec::new(),
            attributes: BTreeMap::new(),
        });
        id
    }

    /// Append `child` as the last child of `parent`, moving it if it already has a parent.
    pub fn append(&mut self, parent: NodeId, child: NodeId) -> bool {
        if self.node(parent).is_none() || self.node(child).is_none() || child == self.root {
            return false;
        }
        if self.lineage(parent).contains(&child) {
            warn!(?parent, ?child, "Refusing to append a node beneath itself");
            return false;
        }

        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        self.notify(MutationKind::ChildList, parent);
        true
    }

    /// Remove `node` from its parent. The node keeps its own children.
    pub fn detach(&mut self, node: NodeId) -> bool {
        let Some(parent) = self.node(node).and_then(|n| n.parent) else {
            return false;
        };
        self.nodes[parent.0].children.retain(|c| *c != node);
        self.nodes[node.0].parent = None;
        self.notify(MutationKind::ChildList, parent);
        true
    }

    pub fn set_bounds(&mut self, node: NodeId, bounds: Bounds) {
        let Some(n) = self.nodes.get_mut(node.0) else {
            return;
        };
        if n.bounds == bounds {
            return;
        }
        n.bounds = bounds;
        self.notify(MutationKind::Bounds, node);
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        let value = value.into();
        let Some(n) = self.nodes.get_mut(node.0) else {
            return;
        };
        if n.attributes.get(name) == Some(&value) {
            return;
        }
        n.attributes.insert(name.to_string(), value);
        self.notify(MutationKind::Attributes, node);
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) {
        let removed = self
            .nodes
            .get_mut(node.0)
            .and_then(|n| n.attributes.remove(name))
            .is_some();
        if removed {
            self.notify(MutationKind::Attributes, node);
        }
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node)?.attributes.get(name).map(String::as_str)
    }

    pub fn node_bounds(&self, node: NodeId) -> Option<Bounds> {
        self.node(node).map(|n| n.bounds)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node)?.parent
    }

    /// Whether `node` is reachable from the root.
    pub fn is_attached(&self, node: NodeId) -> bool {
        self.lineage(node).last() == Some(&self.root)
    }

    /// First attached node with `key`, in document order.
    pub fn find_by_key(&self, key: &str) -> Option<NodeId> {
        self.attached_nodes()
            .into_iter()
            .find(|id| self.nodes[id.0].key == key)
    }

    /// All attached nodes in document (pre-)order, root first.
    pub fn attached_nodes(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        order
    }

    /// `node` followed by each of its ancestors.
    pub fn lineage(&self, node: NodeId) -> Vec<NodeId> {
        let mut lineage = Vec::new();
        let mut cursor = self.node(node).map(|_| node);
        while let Some(id) = cursor {
            lineage.push(id);
            cursor = self.nodes[id.0].parent;
        }
        lineage
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    fn notify(&self, kind: MutationKind, node: NodeId) {
        let lineage = self.lineage(node);
        self.watcher.notify(kind, &lineage);
    }
}

impl ElementResolver for Document {
    fn resolve(&self, target_id: &str) -> Option<ElementHandle> {
        if target_id.is_empty() {
            return None;
        }
        self.find_by_key(target_id)
            .map(|node| ElementHandle::new(node, target_id))
    }

    fn bounds(&self, element: &ElementHandle) -> Option<Bounds> {
        if !self.is_attached(element.node()) {
            return None;
        }
        self.node_bounds(element.node())
    }
}
