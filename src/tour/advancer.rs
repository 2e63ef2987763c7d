// ABOUTME: Step advancement state machine
// At most one step is active; promotion only happens while none is

use tracing::{debug, info};

use super::{ElementHandle, ElementResolver, HoleRect, RectTracker, StepDescriptor, StepQueue, TipSpec};
use crate::watch::Viewport;

/// The step currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveStep {
    pub element: ElementHandle,
    pub tip: Option<TipSpec>,
}

/// What the presenter should draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderState {
    pub hole: HoleRect,
    pub tip: Option<TipSpec>,
}

impl RenderState {
    /// No hole and no tooltip.
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        !self.hole.is_offscreen()
    }
}

/// Owns the pending queue and the single active step.
#[derive(Debug, Clone, Default)]
pub struct StepAdvancer {
    queue: StepQueue,
    active: Option<ActiveStep>,
    promoted: usize,
}

impl StepAdvancer {
    pub fn new(steps: impl IntoIterator<Item = StepDescriptor>) -> Self {
        Self {
            queue: StepQueue::new(steps),
            active: None,
            promoted: 0,
        }
    }

    /// Promote the first resolvable queued step if no step is active.
    ///
    /// Returns whether a promotion happened. Safe to call on every change
    /// notification; it is a no-op while a step is active.
    pub fn advance<R>(&mut self, resolver: &R) -> bool
    where
        R: ElementResolver + ?Sized,
    {
        if self.active.is_some() {
            return false;
        }
        let Some((element, step)) = self.queue.take_first_resolved(resolver) else {
            debug!(pending = self.queue.len(), "No queued step resolves yet");
            return false;
        };

        self.promoted += 1;
        info!(
            target_id = %step.target_id,
            promoted = self.promoted,
            pending = self.queue.len(),
            "Promoted walkthrough step"
        );
        self.active = Some(ActiveStep {
            element,
            tip: step.tip,
        });
        true
    }

    /// Clear the active step. Does not advance; callers advance afterwards.
    pub fn dismiss(&mut self) -> Option<ActiveStep> {
        let dismissed = self.active.take();
        if let Some(step) = &dismissed {
            info!(target_id = step.element.key(), "Dismissed walkthrough step");
        }
        dismissed
    }

    pub fn active(&self) -> Option<&ActiveStep> {
        self.active.as_ref()
    }

    pub fn queue(&self) -> &StepQueue {
        &self.queue
    }

    /// Number of steps promoted so far.
    pub fn promoted_count(&self) -> usize {
        self.promoted
    }

    /// Nothing active and nothing left to promote.
    pub fn is_finished(&self) -> bool {
        self.active.is_none() && self.queue.is_empty()
    }

    /// Measure the active step freshly and pair it with its tooltip.
    pub fn render_state<R>(&self, tracker: &RectTracker, resolver: &R, viewport: Viewport) -> RenderState
    where
        R: ElementResolver + ?Sized,
    {
        match &self.active {
            None => RenderState::hidden(),
            Some(active) => RenderState {
                hole: tracker.measure(Some(&active.element), resolver, viewport),
                tip: active.tip.clone(),
            },
        }
    }
}
