// ABOUTME: Dimmed spotlight overlay with a hole and an optional tooltip
// Also decides which input events count as dismissing the current hole

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
    Frame,
};

use crate::config::UiPreferences;
use crate::tour::{HoleRect, RenderState, TipSpec};

const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const GOLD: Color = Color::Rgb(255, 215, 0);

/// Colors and sizes used by [`HoleOverlay`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayStyle {
    pub dim: Color,
    pub tip_fg: Color,
    pub tip_bg: Color,
    pub tip_border: Color,
    pub tip_max_width: u16,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self::from_preferences(&UiPreferences::default())
    }
}

impl OverlayStyle {
    pub fn from_preferences(prefs: &UiPreferences) -> Self {
        let [r, g, b] = prefs.dim_color;
        Self {
            dim: Color::Rgb(r, g, b),
            tip_fg: SOFT_WHITE,
            tip_bg: PANEL_BG,
            tip_border: GOLD,
            tip_max_width: prefs.tip_max_width,
        }
    }
}

/// Full-area dimming layer with a cut-out at `hole`.
///
/// Renders nothing when the hole is [`HoleRect::OFFSCREEN`].
pub struct HoleOverlay<'a> {
    hole: HoleRect,
    tip: Option<&'a TipSpec>,
    style: &'a OverlayStyle,
}

impl<'a> HoleOverlay<'a> {
    pub const fn new(hole: HoleRect, tip: Option<&'a TipSpec>, style: &'a OverlayStyle) -> Self {
        Self { hole, tip, style }
    }
}

impl Widget for HoleOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if self.hole.is_offscreen() || area.is_empty() {
            return;
        }

        let cut = hole_area(self.hole, area);
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                if cut.is_some_and(|c| x >= c.x && x < c.right() && y >= c.y && y < c.bottom()) {
                    continue;
                }
                buf.get_mut(x, y).set_bg(self.style.dim);
            }
        }

        let Some(tip) = self.tip else {
            return;
        };
        let Some(tip_rect) = tip_area(self.hole, tip, area, self.style.tip_max_width) else {
            return;
        };
        let inner_width = usize::from(tip_rect.width.saturating_sub(2));
        let lines: Vec<Line> = wrap_text(&tip.content, inner_width)
            .into_iter()
            .map(Line::from)
            .collect();

        Clear.render(tip_rect, buf);
        Paragraph::new(lines)
            .style(Style::default().fg(self.style.tip_fg).bg(self.style.tip_bg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(self.style.tip_border)),
            )
            .render(tip_rect, buf);
    }
}

/// Draws the guide's current render state over whatever is already on screen.
pub struct OverlayComponent {
    style: OverlayStyle,
}

impl OverlayComponent {
    pub const fn new(style: OverlayStyle) -> Self {
        Self { style }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &RenderState) {
        frame.render_widget(HoleOverlay::new(state.hole, state.tip.as_ref(), &self.style), area);
    }
}

/// Screen cells covered by `hole`, clipped to `area`.
pub fn hole_area(hole: HoleRect, area: Rect) -> Option<Rect> {
    if hole.is_offscreen() {
        return None;
    }
    let x0 = (i32::from(area.x) + hole.left).max(i32::from(area.x));
    let y0 = (i32::from(area.y) + hole.top).max(i32::from(area.y));
    let x1 = (i32::from(area.x) + hole.right()).min(i32::from(area.right()));
    let y1 = (i32::from(area.y) + hole.bottom()).min(i32::from(area.bottom()));
    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some(Rect::new(to_u16(x0), to_u16(y0), to_u16(x1 - x0), to_u16(y1 - y0)))
}

/// Where the tooltip box goes: below the hole unless `is_above_element`,
/// left-aligned unless `is_right_justified`, always inside `area`.
///
/// A side without room falls back to the opposite side before clamping.
pub fn tip_area(hole: HoleRect, tip: &TipSpec, area: Rect, max_width: u16) -> Option<Rect> {
    if hole.is_offscreen() || area.width < 3 || area.height < 3 {
        return None;
    }
    let max_width = max_width.min(area.width);
    if max_width < 3 {
        return None;
    }
    let lines = wrap_text(&tip.content, usize::from(max_width - 2));
    let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let width = u16::try_from(longest + 2).unwrap_or(max_width).clamp(3, max_width);
    let height = u16::try_from(lines.len() + 2).unwrap_or(area.height).min(area.height);

    let (min_x, max_x) = (i32::from(area.x), i32::from(area.right()) - i32::from(width));
    let (min_y, max_y) = (i32::from(area.y), i32::from(area.bottom()) - i32::from(height));

    let left_aligned = min_x + hole.left;
    let right_aligned = min_x + hole.right() - i32::from(width);
    let below = min_y + hole.bottom();
    let above = min_y + hole.top - i32::from(height);

    let (x, alt_x) = if tip.is_right_justified {
        (right_aligned, left_aligned)
    } else {
        (left_aligned, right_aligned)
    };
    let (y, alt_y) = if tip.is_above_element {
        (above, below)
    } else {
        (below, above)
    };

    let x = first_fitting(x, alt_x, min_x, max_x);
    let y = first_fitting(y, alt_y, min_y, max_y);
    Some(Rect::new(to_u16(x), to_u16(y), width, height))
}

fn first_fitting(preferred: i32, fallback: i32, min: i32, max: i32) -> i32 {
    if (min..=max).contains(&preferred) {
        preferred
    } else if (min..=max).contains(&fallback) {
        fallback
    } else {
        preferred.clamp(min, max.max(min))
    }
}

/// Whether `event` dismisses the current hole.
///
/// A left-button press anywhere on the layer, or Enter while the layer has
/// focus. Nothing dismisses an invisible layer.
pub fn is_dismissal(event: &Event, layer_focused: bool, hole_visible: bool) -> bool {
    if !hole_visible {
        return false;
    }
    match event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            ..
        }) => true,
        Event::Key(KeyEvent {
            code: KeyCode::Enter,
            kind: KeyEventKind::Press,
            ..
        }) => layer_focused,
        _ => false,
    }
}

/// Greedy word wrap on character counts. Words wider than `max_width` are
/// split across lines.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0usize;
        for word in paragraph.split_whitespace() {
            let word_width = word.chars().count();
            if current_width > 0 && current_width + 1 + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
                continue;
            }
            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
            }

            let chars: Vec<char> = word.chars().collect();
            let mut chunks = chars.chunks(max_width).peekable();
            while let Some(chunk) = chunks.next() {
                if chunks.peek().is_some() {
                    lines.push(chunk.iter().collect());
                } else {
                    current = chunk.iter().collect();
                    current_width = chunk.len();
                }
            }
        }
        lines.push(current);
    }
    lines
}

fn to_u16(value: i32) -> u16 {
    u16::try_from(value.max(0)).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap_text("Use this bar to filter sessions by name", 12);
        assert!(lines.iter().all(|l| l.chars().count() <= 12));
        assert_eq!(lines.join(" "), "Use this bar to filter sessions by name");
    }

    #[test]
    fn test_wrap_keeps_blank_paragraphs() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_hole_area_clips_to_screen() {
        let area = Rect::new(0, 0, 80, 24);
        let hole = HoleRect { top: -2, left: 70, width: 20, height: 5 };
        assert_eq!(hole_area(hole, area), Some(Rect::new(70, 0, 10, 3)));

        let gone = HoleRect { top: -10, left: 0, width: 5, height: 2 };
        assert_eq!(hole_area(gone, area), None);
        assert_eq!(hole_area(HoleRect::OFFSCREEN, area), None);
    }

    #[test]
    fn test_tip_below_and_left_by_default() {
        let area = Rect::new(0, 0, 80, 24);
        let hole = HoleRect { top: 4, left: 10, width: 20, height: 3 };
        let rect = tip_area(hole, &TipSpec::new("hello"), area, 40).unwrap();
        assert_eq!((rect.x, rect.y), (10, 7));
        assert_eq!((rect.width, rect.height), (7, 3));
    }

    #[test]
    fn test_tip_above_and_right_justified() {
        let area = Rect::new(0, 0, 80, 24);
        let hole = HoleRect { top: 10, left: 10, width: 20, height: 3 };
        let tip = TipSpec::new("hello").above().right_justified();
        let rect = tip_area(hole, &tip, area, 40).unwrap();
        assert_eq!(rect.right(), 30);
        assert_eq!(rect.bottom(), 10);
    }

    #[test]
    fn test_wrap_splits_words_wider_than_the_line() {
        assert_eq!(wrap_text("Abcdefghijklmnop", 8), vec!["Abcdefgh", "ijklmnop"]);
        assert_eq!(wrap_text("go Abcdefghij now", 4), vec!["go", "Abcd", "efgh", "ij", "now"]);
    }

    #[test]
    fn test_tip_flips_sides_instead_of_covering_the_hole() {
        let area = Rect::new(0, 0, 40, 10);
        let hole = HoleRect { top: 0, left: 0, width: 4, height: 1 };
        let tip = TipSpec::new("above the very top").above().right_justified();
        let rect = tip_area(hole, &tip, area, 30).unwrap();
        assert_eq!((rect.x, rect.y), (0, 1));
        assert!(i32::from(rect.y) >= hole.bottom());
    }

    #[test]
    fn test_tip_below_flips_above_near_the_bottom() {
        let area = Rect::new(0, 0, 40, 10);
        let hole = HoleRect { top: 8, left: 30, width: 10, height: 2 };
        let rect = tip_area(hole, &TipSpec::new("hello there"), area, 30).unwrap();
        assert_eq!(rect.bottom(), 8);
        assert_eq!(rect.right(), 40);
    }

    #[test]
    fn test_tip_is_clamped_when_neither_side_fits() {
        let area = Rect::new(0, 0, 20, 4);
        let hole = HoleRect { top: 1, left: 2, width: 4, height: 2 };
        let rect = tip_area(hole, &TipSpec::new("hi"), area, 20).unwrap();
        assert_eq!((rect.x, rect.y), (2, 1));
    }
}
