// ABOUTME: Walkthrough controller wiring watchers to the step advancer
// Subscriptions are scoped to the watched root and released on every exit path

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use super::{ElementResolver, RectTracker, RenderState, StepAdvancer, StepDescriptor};
use crate::dom::NodeId;
use crate::watch::{ChangeCallback, Subscription, SubtreeWatcher, ViewportWatcher};

/// Why the guide needs to re-evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideSignal {
    /// Elements were added, removed, moved or changed. Re-run advancement and measurement.
    DocumentChanged,
    /// Size or scroll offset changed. Re-run advancement and measurement.
    ViewportChanged,
}

struct Watches {
    root: NodeId,
    _subtree: Subscription<SubtreeWatcher>,
    _viewport: Subscription<ViewportWatcher>,
}

/// Drives a [`StepAdvancer`] from change notifications and keeps the render state current.
pub struct Guide {
    advancer: StepAdvancer,
    tracker: RectTracker,
    subtree: SubtreeWatcher,
    viewport: ViewportWatcher,
    watches: Option<Watches>,
    signals_tx: UnboundedSender<GuideSignal>,
    signals_rx: UnboundedReceiver<GuideSignal>,
    render: RenderState,
}

impl Guide {
    pub fn new(
        steps: impl IntoIterator<Item = StepDescriptor>,
        subtree: SubtreeWatcher,
        viewport: ViewportWatcher,
    ) -> Self {
        let (signals_tx, signals_rx) = mpsc::unbounded_channel();
        Self {
            advancer: StepAdvancer::new(steps),
            tracker: RectTracker::new(),
            subtree,
            viewport,
            watches: None,
            signals_tx,
            signals_rx,
            render: RenderState::hidden(),
        }
    }

    #[must_use]
    pub fn with_tracker(mut self, tracker: RectTracker) -> Self {
        self.tracker = tracker;
        self
    }

    /// Start watching `root` and its viewport. Replaces any existing watch.
    ///
    /// Schedules an initial evaluation for the next [`Guide::pump`].
    pub fn activate(&mut self, root: NodeId) {
        if self.watched_root() == Some(root) {
            return;
        }
        // Release before acquiring so a root change never holds two sets
        self.watches = None;

        let subtree = Subscription::start(&self.subtree, &root, self.signal(GuideSignal::DocumentChanged));
        let viewport = Subscription::start(&self.viewport, &(), self.signal(GuideSignal::ViewportChanged));
        self.watches = Some(Watches {
            root,
            _subtree: subtree,
            _viewport: viewport,
        });
        info!(?root, pending = self.advancer.queue().len(), "Walkthrough watching");

        let _ = self.signals_tx.send(GuideSignal::DocumentChanged);
    }

    /// Move the watch to a different root.
    pub fn retarget(&mut self, root: NodeId) {
        if let Some(previous) = self.watched_root() {
            debug!(?previous, ?root, "Retargeting walkthrough");
        }
        self.activate(root);
    }

    /// Release all subscriptions and discard notifications not yet pumped.
    pub fn teardown(&mut self) {
        if self.watches.take().is_some() {
            info!("Walkthrough torn down");
        }
        while self.signals_rx.try_recv().is_ok() {}
    }

    /// User dismissed the current hole.
    ///
    /// The hole disappears immediately; the next queued step is considered on
    /// the following [`Guide::pump`]. After [`Guide::teardown`] the hole is
    /// still hidden but no further step is promoted.
    pub fn dismiss(&mut self) {
        if self.advancer.dismiss().is_none() {
            return;
        }
        self.render = RenderState::hidden();
        if self.watches.is_some() {
            let _ = self.signals_tx.send(GuideSignal::DocumentChanged);
        }
    }

    /// Handle every pending notification in one pass.
    ///
    /// Returns whether the render state changed.
    pub fn pump<R>(&mut self, resolver: &R) -> bool
    where
        R: ElementResolver + ?Sized,
    {
        let mut drained = 0usize;
        while let Ok(signal) = self.signals_rx.try_recv() {
            debug!(?signal, "Walkthrough notified");
            drained += 1;
        }
        if drained == 0 {
            return false;
        }

        self.advancer.advance(resolver);
        let next = self
            .advancer
            .render_state(&self.tracker, resolver, self.viewport.current());
        let changed = next != self.render;
        self.render = next;

        if self.advancer.is_finished() && self.watches.is_some() {
            info!(promoted = self.advancer.promoted_count(), "Walkthrough queue exhausted");
            self.watches = None;
        }

        changed
    }

    pub fn render_state(&self) -> &RenderState {
        &self.render
    }

    pub fn advancer(&self) -> &StepAdvancer {
        &self.advancer
    }

    pub fn is_watching(&self) -> bool {
        self.watches.is_some()
    }

    pub fn watched_root(&self) -> Option<NodeId> {
        self.watches.as_ref().map(|w| w.root)
    }

    fn signal(&self, signal: GuideSignal) -> ChangeCallback {
        let tx = self.signals_tx.clone();
        Box::new(move || {
            let _ = tx.send(signal);
        })
    }
}
