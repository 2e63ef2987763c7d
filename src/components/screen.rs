// ABOUTME: Renders the attached elements of the document as bordered panels

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::dom::{Bounds, Document};
use crate::watch::Viewport;

const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const DARK_BG: Color = Color::Rgb(25, 25, 35);

/// Attribute holding a panel's title.
pub const LABEL_ATTR: &str = "label";
/// Attribute holding a panel's body text.
pub const BODY_ATTR: &str = "body";

pub struct ScreenComponent;

impl Default for ScreenComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenComponent {
    pub const fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, document: &Document, viewport: Viewport) {
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        for node in document.attached_nodes() {
            // The root and pure containers have no label and draw nothing
            let Some(label) = document.attribute(node, LABEL_ATTR) else {
                continue;
            };
            let Some(bounds) = document.node_bounds(node) else {
                continue;
            };
            let Some(panel) = visible_rect(bounds, viewport, area) else {
                continue;
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(CORNFLOWER_BLUE))
                .title(format!(" {label} "))
                .title_style(Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD));
            let body = document.attribute(node, BODY_ATTR).unwrap_or_default();
            let paragraph = Paragraph::new(body.to_string())
                .style(Style::default().fg(MUTED_GRAY))
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(paragraph, panel);
        }
    }
}

/// Screen rectangle of `bounds` after scrolling, or `None` if any part would be cut off.
///
/// Partially visible panels are skipped rather than drawn with broken borders.
pub fn visible_rect(bounds: Bounds, viewport: Viewport, area: Rect) -> Option<Rect> {
    let top = bounds.y.checked_sub(viewport.scroll_y)?;
    let rect = Rect::new(
        area.x.saturating_add(bounds.x),
        area.y.saturating_add(top),
        bounds.width,
        bounds.height,
    );
    if rect.is_empty() || rect.right() > area.right() || rect.bottom() > area.bottom() {
        return None;
    }
    Some(rect)
}
