// ABOUTME: Mock screen the demo walkthrough runs over, plus its built-in steps

use crate::components::screen::{BODY_ATTR, LABEL_ATTR};
use crate::dom::{Bounds, Document, NodeId};
use crate::tour::{StepDescriptor, TipSpec};

/// Key of the element that only appears when revealed.
pub const DEPLOY_KEY: &str = "deploy-button";

/// Nodes of the demo screen the app manipulates directly.
#[derive(Debug, Clone, Copy)]
pub struct DemoScreen {
    /// Container holding every panel; the guide watches this subtree.
    pub container: NodeId,
    /// Created detached; toggled by the reveal key.
    pub deploy_button: NodeId,
    /// Lowest document row used by any panel.
    pub content_height: u16,
}

const PANELS: &[(&str, &str, &str, Bounds)] = &[
    ("header", "Walkthrough demo", "Tab: focus  r: reveal deploy  Up/Down: scroll  q: quit", Bounds::new(0, 0, 78, 3)),
    ("search-bar", "Search", "Type to filter...", Bounds::new(2, 4, 40, 3)),
    ("session-list", "Sessions", "api-gateway\nbilling-worker\nsearch-indexer", Bounds::new(2, 8, 30, 12)),
    ("details", "Details", "Select a session to see its status.", Bounds::new(34, 8, 44, 12)),
    ("activity-log", "Activity", "No activity yet.", Bounds::new(2, 24, 76, 8)),
];

/// Build the demo panels into `document`.
pub fn build_demo_screen(document: &mut Document) -> DemoScreen {
    let container = document.create("app", Bounds::new(0, 0, 80, 32));
    for (key, label, body, bounds) in PANELS {
        let node = document.create(*key, *bounds);
        document.set_attribute(node, LABEL_ATTR, *label);
        document.set_attribute(node, BODY_ATTR, *body);
        document.append(container, node);
    }

    let deploy_button = document.create(DEPLOY_KEY, Bounds::new(60, 4, 18, 3));
    document.set_attribute(deploy_button, LABEL_ATTR, "Deploy");
    document.set_attribute(deploy_button, BODY_ATTR, "Ship it");

    let root = document.root();
    document.append(root, container);

    let content_height = PANELS.iter().map(|(_, _, _, b)| b.bottom()).max().unwrap_or(0);
    DemoScreen {
        container,
        deploy_button,
        content_height,
    }
}

/// Steps used when no configuration provides any.
pub fn demo_steps() -> Vec<StepDescriptor> {
    vec![
        StepDescriptor::new("search-bar")
            .with_tip(TipSpec::new("Type here to filter your sessions by name. Press Enter or click to continue.")),
        StepDescriptor::new(DEPLOY_KEY).with_tip(
            TipSpec::new("Deploy appears once something is ready to ship. Press r to reveal it.").right_justified(),
        ),
        StepDescriptor::new("session-list"),
        StepDescriptor::new("activity-log")
            .with_tip(TipSpec::new("Recent events land here. Scroll down to see all of it.").above()),
        StepDescriptor::new("help-panel").with_tip(TipSpec::new("This panel does not exist in the demo.")),
    ]
}
