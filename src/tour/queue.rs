// ABOUTME: Ordered queue of pending walkthrough steps
// Shrinks as steps are promoted and never regrows

use tracing::debug;

use super::{ElementHandle, ElementResolver, StepDescriptor};

/// Pending steps in priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepQueue {
    pending: Vec<StepDescriptor>,
}

impl StepQueue {
    pub fn new(steps: impl IntoIterator<Item = StepDescriptor>) -> Self {
        Self {
            pending: steps.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StepDescriptor> {
        self.pending.iter()
    }

    /// Remove and return the first step whose target currently resolves.
    ///
    /// Later steps sharing its `target_id` are discarded with it. The order of
    /// the remaining steps is unchanged. Steps with an empty `target_id` never
    /// resolve and are not passed to the resolver.
    pub fn take_first_resolved<R>(&mut self, resolver: &R) -> Option<(ElementHandle, StepDescriptor)>
    where
        R: ElementResolver + ?Sized,
    {
        let (index, element) = self.pending.iter().enumerate().find_map(|(index, step)| {
            if step.target_id.is_empty() {
                return None;
            }
            resolver.resolve(&step.target_id).map(|element| (index, element))
        })?;

        let step = self.pending.remove(index);
        let before = self.pending.len();
        self.pending.retain(|other| other.target_id != step.target_id);
        let discarded = before - self.pending.len();
        if discarded > 0 {
            debug!(target_id = %step.target_id, discarded, "Dropped duplicate steps");
        }

        Some((element, step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Bounds, Document};
    use crate::watch::SubtreeWatcher;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MapResolver {
        present: HashMap<String, ElementHandle>,
        lookups: RefCell<Vec<String>>,
    }

    impl MapResolver {
        fn with(keys: &[&str]) -> Self {
            let mut doc = Document::new(SubtreeWatcher::new());
            let mut resolver = Self::default();
            for key in keys {
                let node = doc.create(*key, Bounds::default());
                resolver
                    .present
                    .insert((*key).to_string(), ElementHandle::new(node, *key));
            }
            resolver
        }
    }

    impl ElementResolver for MapResolver {
        fn resolve(&self, target_id: &str) -> Option<ElementHandle> {
            self.lookups.borrow_mut().push(target_id.to_string());
            self.present.get(target_id).cloned()
        }

        fn bounds(&self, _element: &ElementHandle) -> Option<Bounds> {
            Some(Bounds::default())
        }
    }

    fn ids(queue: &StepQueue) -> Vec<&str> {
        queue.iter().map(|s| s.target_id.as_str()).collect()
    }

    #[test]
    fn test_takes_first_resolvable_and_keeps_order() {
        let mut queue = StepQueue::new(["a", "b", "c", "d"].map(StepDescriptor::new));
        let resolver = MapResolver::with(&["c", "b"]);

        let (element, step) = queue.take_first_resolved(&resolver).unwrap();
        assert_eq!(step.target_id, "b");
        assert_eq!(element.key(), "b");
        assert_eq!(ids(&queue), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_nothing_resolves_leaves_queue_untouched() {
        let mut queue = StepQueue::new(["a", "b"].map(StepDescriptor::new));
        let before = queue.clone();
        assert!(queue.take_first_resolved(&MapResolver::default()).is_none());
        assert_eq!(queue, before);
    }

    #[test]
    fn test_duplicates_are_discarded_with_first_match() {
        let mut queue = StepQueue::new(["x", "y", "x"].map(StepDescriptor::new));
        let resolver = MapResolver::with(&["x"]);

        queue.take_first_resolved(&resolver).unwrap();
        assert_eq!(ids(&queue), vec!["y"]);
        assert!(queue.take_first_resolved(&resolver).is_none());
    }

    #[test]
    fn test_empty_target_is_never_looked_up() {
        let mut queue = StepQueue::new(["", "a"].map(StepDescriptor::new));
        let resolver = MapResolver::with(&["a"]);

        queue.take_first_resolved(&resolver).unwrap();
        assert_eq!(ids(&queue), vec![""]);
        assert_eq!(*resolver.lookups.borrow(), vec!["a".to_string()]);
    }
}
