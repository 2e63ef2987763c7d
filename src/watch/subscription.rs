// ABOUTME: Scoped ownership of a watcher subscription
// Dropping the guard (or replacing it) always releases the subscription

use tracing::debug;

use super::{ChangeCallback, ChangeWatcher, SubscriptionHandle};

/// An active subscription that is stopped when released or dropped.
pub struct Subscription<W: ChangeWatcher> {
    watcher: W,
    handle: Option<SubscriptionHandle>,
}

impl<W: ChangeWatcher + Clone> Subscription<W> {
    /// Start watching `root` on `watcher`.
    pub fn start(watcher: &W, root: &W::Root, on_change: ChangeCallback) -> Self {
        let handle = watcher.start(root, on_change);
        debug!("Acquired subscription {}", handle);
        Self {
            watcher: watcher.clone(),
            handle: Some(handle),
        }
    }
}

impl<W: ChangeWatcher> Subscription<W> {
    /// The underlying handle, or `None` once released.
    pub fn handle(&self) -> Option<SubscriptionHandle> {
        self.handle
    }

    /// Stop the subscription now. Calling this more than once is harmless.
    pub fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.watcher.stop(handle);
            debug!("Released subscription {}", handle);
        }
    }
}

impl<W: ChangeWatcher> Drop for Subscription<W> {
    fn drop(&mut self) {
        self.release();
    }
}
