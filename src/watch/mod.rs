// ABOUTME: Change notification for the element tree and the terminal viewport
// Watchers invoke payload-free callbacks; consumers re-derive state on each call

mod registry;
pub mod subscription;
pub mod subtree;
pub mod viewport;

pub use registry::{ChangeCallback, SubscriptionHandle};
pub use subscription::Subscription;
pub use subtree::{MutationKind, SubtreeWatcher};
pub use viewport::{Viewport, ViewportWatcher};

/// A source of change notifications with an explicit start/stop lifecycle.
///
/// `stop` must be idempotent: stopping an unknown or already stopped handle
/// does nothing.
pub trait ChangeWatcher {
    /// What a subscription is scoped to (a subtree root, or `()` for global sources).
    type Root;

    /// Begin observing `root`, invoking `on_change` on every qualifying change.
    fn start(&self, root: &Self::Root, on_change: ChangeCallback) -> SubscriptionHandle;

    /// Unsubscribe. Never fails.
    fn stop(&self, handle: SubscriptionHandle);
}
