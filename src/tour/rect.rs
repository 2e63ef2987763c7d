// ABOUTME: Hole rectangle measurement in viewport coordinates

use tracing::trace;

use super::{ElementHandle, ElementResolver};
use crate::watch::Viewport;

/// Viewport-relative rectangle of the hole cut into the dimming layer.
///
/// [`HoleRect::OFFSCREEN`] means "no hole". Its coordinates are outside the
/// range any measured element can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleRect {
    pub top: i32,
    pub left: i32,
    pub width: u16,
    pub height: u16,
}

impl HoleRect {
    pub const OFFSCREEN: Self = Self {
        top: i32::MIN,
        left: i32::MIN,
        width: 0,
        height: 0,
    };

    pub fn is_offscreen(&self) -> bool {
        *self == Self::OFFSCREEN
    }

    pub fn bottom(&self) -> i32 {
        self.top + i32::from(self.height)
    }

    pub fn right(&self) -> i32 {
        self.left + i32::from(self.width)
    }
}

impl Default for HoleRect {
    fn default() -> Self {
        Self::OFFSCREEN
    }
}

/// Converts the active element into a hole rectangle. Never caches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RectTracker {
    padding: u16,
}

impl RectTracker {
    pub const fn new() -> Self {
        Self { padding: 0 }
    }

    /// Grow every measured hole by `padding` cells on each side.
    #[must_use]
    pub const fn with_padding(mut self, padding: u16) -> Self {
        self.padding = padding;
        self
    }

    /// Measure `element` against the current `viewport`.
    ///
    /// `None` yields [`HoleRect::OFFSCREEN`]. An element that has been detached
    /// since it was resolved measures as an empty rectangle at the origin.
    pub fn measure<R>(&self, element: Option<&ElementHandle>, resolver: &R, viewport: Viewport) -> HoleRect
    where
        R: ElementResolver + ?Sized,
    {
        let Some(element) = element else {
            return HoleRect::OFFSCREEN;
        };
        let Some(bounds) = resolver.bounds(element) else {
            trace!(key = element.key(), "Active element detached");
            return HoleRect {
                top: 0,
                left: 0,
                width: 0,
                height: 0,
            };
        };

        let pad = i32::from(self.padding);
        let hole = HoleRect {
            top: i32::from(bounds.y) - i32::from(viewport.scroll_y) - pad,
            left: i32::from(bounds.x) - pad,
            width: bounds.width.saturating_add(self.padding.saturating_mul(2)),
            height: bounds.height.saturating_add(self.padding.saturating_mul(2)),
        };
        trace!(key = element.key(), ?hole, "Measured hole");
        hole
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Bounds, Document};
    use crate::watch::SubtreeWatcher;

    fn doc_with(bounds: Bounds) -> (Document, ElementHandle) {
        let mut doc = Document::new(SubtreeWatcher::new());
        let node = doc.create("target", bounds);
        doc.append(doc.root(), node);
        let handle = ElementHandle::new(node, "target");
        (doc, handle)
    }

    #[test]
    fn test_none_is_offscreen() {
        let (doc, _) = doc_with(Bounds::default());
        let hole = RectTracker::new().measure(None, &doc, Viewport::new(80, 24));
        assert!(hole.is_offscreen());
    }

    #[test]
    fn test_accounts_for_scroll_and_padding() {
        let (doc, handle) = doc_with(Bounds::new(10, 12, 20, 3));
        let viewport = Viewport {
            scroll_y: 5,
            ..Viewport::new(80, 24)
        };

        let hole = RectTracker::new().measure(Some(&handle), &doc, viewport);
        assert_eq!(hole, HoleRect { top: 7, left: 10, width: 20, height: 3 });

        let padded = RectTracker::new().with_padding(1).measure(Some(&handle), &doc, viewport);
        assert_eq!(padded, HoleRect { top: 6, left: 9, width: 22, height: 5 });
    }

    #[test]
    fn test_element_scrolled_past_top_is_negative_not_offscreen() {
        let (doc, handle) = doc_with(Bounds::new(0, 0, 5, 1));
        let viewport = Viewport {
            scroll_y: 30,
            ..Viewport::new(80, 24)
        };
        let hole = RectTracker::new().measure(Some(&handle), &doc, viewport);
        assert_eq!(hole.top, -30);
        assert!(!hole.is_offscreen());
    }

    #[test]
    fn test_detached_element_is_empty_but_visible() {
        let (mut doc, handle) = doc_with(Bounds::new(3, 3, 3, 3));
        doc.detach(handle.node());
        let hole = RectTracker::new().measure(Some(&handle), &doc, Viewport::new(80, 24));
        assert!(!hole.is_offscreen());
        assert_eq!(hole.width, 0);
    }
}
