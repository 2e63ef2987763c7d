// ABOUTME: Subscription bookkeeping shared by the subtree and viewport watchers

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;

/// Callback invoked on each change. Carries no payload.
pub type ChangeCallback = Box<dyn FnMut()>;

/// Opaque token returned by [`super::ChangeWatcher::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionHandle(u64);

impl fmt::Display for SubscriptionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub#{}", self.0)
    }
}

struct Entry<S> {
    scope: S,
    // Taken out while the callback runs so dispatch never holds the borrow
    callback: Option<ChangeCallback>,
}

pub(crate) struct Registry<S> {
    next_id: u64,
    entries: BTreeMap<u64, Entry<S>>,
}

impl<S> Default for Registry<S> {
    fn default() -> Self {
        Self {
            next_id: 1,
            entries: BTreeMap::new(),
        }
    }
}

impl<S> Registry<S> {
    pub(crate) fn insert(&mut self, scope: S, callback: ChangeCallback) -> SubscriptionHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(
            id,
            Entry {
                scope,
                callback: Some(callback),
            },
        );
        SubscriptionHandle(id)
    }

    pub(crate) fn remove(&mut self, handle: SubscriptionHandle) -> bool {
        self.entries.remove(&handle.0).is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn matching(&self, mut accept: impl FnMut(&S) -> bool) -> Vec<SubscriptionHandle> {
        self.entries
            .iter()
            .filter(|(_, entry)| accept(&entry.scope))
            .map(|(id, _)| SubscriptionHandle(*id))
            .collect()
    }
}

/// Invoke the callbacks of `targets` in subscription order.
///
/// Callbacks may start or stop subscriptions (including their own) and may
/// trigger further notifications. A callback that is already running is not
/// re-entered, which breaks notify/render feedback loops.
pub(crate) fn dispatch<S>(registry: &RefCell<Registry<S>>, targets: Vec<SubscriptionHandle>) -> usize {
    let mut delivered = 0;
    for handle in targets {
        let callback = registry
            .borrow_mut()
            .entries
            .get_mut(&handle.0)
            .and_then(|entry| entry.callback.take());
        let Some(mut callback) = callback else {
            continue;
        };

        callback();
        delivered += 1;

        // Stopped during its own callback: drop it here
        if let Some(entry) = registry.borrow_mut().entries.get_mut(&handle.0) {
            entry.callback = Some(callback);
        }
    }
    delivered
}
