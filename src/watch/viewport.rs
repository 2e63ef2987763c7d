// ABOUTME: Reactive terminal viewport (size and vertical scroll offset)

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::debug;

use super::registry::{dispatch, Registry};
use super::{ChangeCallback, ChangeWatcher, SubscriptionHandle};

/// Visible window onto the element tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
    pub scroll_y: u16,
}

impl Viewport {
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            scroll_y: 0,
        }
    }
}

struct Inner {
    current: Cell<Viewport>,
    registry: RefCell<Registry<()>>,
}

/// Holds the current viewport and notifies subscribers whenever size or
/// scroll offset actually changes.
#[derive(Clone)]
pub struct ViewportWatcher {
    inner: Rc<Inner>,
}

impl ViewportWatcher {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            inner: Rc::new(Inner {
                current: Cell::new(viewport),
                registry: RefCell::new(Registry::default()),
            }),
        }
    }

    pub fn current(&self) -> Viewport {
        self.inner.current.get()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.registry.borrow().len()
    }

    /// Replace the viewport. Returns `true` (and notifies) only if it changed.
    pub fn set(&self, viewport: Viewport) -> bool {
        if self.inner.current.replace(viewport) == viewport {
            return false;
        }
        let targets = self.inner.registry.borrow().matching(|()| true);
        let delivered = dispatch(&self.inner.registry, targets);
        debug!(?viewport, delivered, "Viewport changed");
        true
    }

    pub fn resize(&self, width: u16, height: u16) -> bool {
        let viewport = Viewport {
            width,
            height,
            ..self.current()
        };
        self.set(viewport)
    }

    pub fn scroll_to(&self, scroll_y: u16) -> bool {
        let viewport = Viewport {
            scroll_y,
            ..self.current()
        };
        self.set(viewport)
    }

    /// Scroll by `delta` rows, clamped at zero and at `max_scroll`.
    pub fn scroll_by(&self, delta: i32, max_scroll: u16) -> bool {
        let target = (i32::from(self.current().scroll_y) + delta).clamp(0, i32::from(max_scroll));
        self.scroll_to(u16::try_from(target).unwrap_or(max_scroll))
    }
}

impl ChangeWatcher for ViewportWatcher {
    type Root = ();

    fn start(&self, _root: &(), on_change: ChangeCallback) -> SubscriptionHandle {
        self.inner.registry.borrow_mut().insert((), on_change)
    }

    fn stop(&self, handle: SubscriptionHandle) {
        self.inner.registry.borrow_mut().remove(handle);
    }
}
