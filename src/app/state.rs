// ABOUTME: Demo application state - document, viewport, guide and focus

use tracing::{debug, info};

use super::demo::{build_demo_screen, demo_steps, DemoScreen};
use crate::components::overlay::OverlayStyle;
use crate::config::AppConfig;
use crate::dom::Document;
use crate::tour::{Guide, RectTracker, StepDescriptor};
use crate::watch::{SubtreeWatcher, Viewport, ViewportWatcher};

/// Which layer receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The dimming layer; Enter dismisses the hole.
    Overlay,
    /// The application underneath.
    App,
}

pub struct AppState {
    pub document: Document,
    pub viewport: ViewportWatcher,
    pub guide: Guide,
    pub screen: DemoScreen,
    pub focus: Focus,
    pub overlay_style: OverlayStyle,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(steps: Vec<StepDescriptor>, viewport: Viewport) -> Self {
        Self::with_config(steps, viewport, &AppConfig::default())
    }

    /// Build from configuration, falling back to the demo steps.
    pub fn from_config(config: &AppConfig, viewport: Viewport) -> Self {
        let steps = if config.tour.steps.is_empty() {
            demo_steps()
        } else {
            config.tour.steps.clone()
        };
        Self::with_config(steps, viewport, config)
    }

    fn with_config(steps: Vec<StepDescriptor>, viewport: Viewport, config: &AppConfig) -> Self {
        let subtree = SubtreeWatcher::new();
        let viewport = ViewportWatcher::new(viewport);
        let mut document = Document::new(subtree.clone());
        let screen = build_demo_screen(&mut document);

        let tracker = RectTracker::new().with_padding(config.ui.hole_padding);
        let mut guide = Guide::new(steps, subtree, viewport.clone()).with_tracker(tracker);
        guide.activate(screen.container);
        guide.pump(&document);

        Self {
            document,
            viewport,
            guide,
            screen,
            focus: Focus::Overlay,
            overlay_style: OverlayStyle::from_preferences(&config.ui),
            should_quit: false,
        }
    }

    /// Let the guide react to everything that happened since the last call.
    pub fn sync(&mut self) -> bool {
        self.guide.pump(&self.document)
    }

    pub fn hole_visible(&self) -> bool {
        self.guide.render_state().is_visible()
    }

    pub fn dismiss(&mut self) {
        self.guide.dismiss();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Overlay => Focus::App,
            Focus::App => Focus::Overlay,
        };
        debug!(focus = ?self.focus, "Focus changed");
    }

    pub fn deploy_visible(&self) -> bool {
        self.document.is_attached(self.screen.deploy_button)
    }

    /// Attach or detach the late-appearing deploy button.
    pub fn toggle_deploy(&mut self) {
        if self.deploy_visible() {
            self.document.detach(self.screen.deploy_button);
            info!("Deploy button hidden");
        } else {
            self.document.append(self.screen.container, self.screen.deploy_button);
            info!("Deploy button revealed");
        }
    }

    pub fn scroll(&mut self, delta: i32) {
        let viewport = self.viewport.current();
        let max_scroll = self.screen.content_height.saturating_sub(viewport.height);
        self.viewport.scroll_by(delta, max_scroll);
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport.resize(width, height);
        // Keep the scroll offset valid for the new height
        self.scroll(0);
    }
}
