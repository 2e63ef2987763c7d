// ABOUTME: Recursive mutation watcher for element subtrees
// The element tree reports every mutation with the lineage of the mutated node

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use super::registry::{dispatch, Registry};
use super::{ChangeCallback, ChangeWatcher, SubscriptionHandle};
use crate::dom::NodeId;

/// What kind of mutation happened. Only used for diagnostics; callbacks get no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Attributes,
    ChildList,
    Bounds,
}

/// Watches attribute, child-list and geometry changes anywhere below a root node.
#[derive(Clone, Default)]
pub struct SubtreeWatcher {
    registry: Rc<RefCell<Registry<NodeId>>>,
}

impl SubtreeWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().len()
    }

    /// Deliver a mutation of the first node in `lineage`.
    ///
    /// `lineage` is the mutated node followed by its ancestors. Every
    /// subscription rooted at one of them is notified once.
    pub(crate) fn notify(&self, kind: MutationKind, lineage: &[NodeId]) -> usize {
        let targets = self.registry.borrow().matching(|root| lineage.contains(root));
        if targets.is_empty() {
            return 0;
        }
        let delivered = dispatch(&self.registry, targets);
        debug!(?kind, node = ?lineage.first(), delivered, "Subtree mutation");
        delivered
    }
}

impl ChangeWatcher for SubtreeWatcher {
    type Root = NodeId;

    fn start(&self, root: &NodeId, on_change: ChangeCallback) -> SubscriptionHandle {
        self.registry.borrow_mut().insert(*root, on_change)
    }

    fn stop(&self, handle: SubscriptionHandle) {
        self.registry.borrow_mut().remove(handle);
    }
}
