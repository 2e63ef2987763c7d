// ABOUTME: Event handling system mapping terminal input to demo actions

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::info;

use super::state::{AppState, Focus};
use crate::components::overlay::is_dismissal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    Dismiss,
    ToggleFocus,
    ToggleDeploy,
    ScrollUp,
    ScrollDown,
    Resize { width: u16, height: u16 },
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_event(event: &Event, state: &AppState) -> Option<AppEvent> {
        if is_dismissal(event, state.focus == Focus::Overlay, state.hole_visible()) {
            return Some(AppEvent::Dismiss);
        }
        match event {
            Event::Key(key) => Self::handle_key_event(*key),
            Event::Resize(width, height) => Some(AppEvent::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }

    fn handle_key_event(key: KeyEvent) -> Option<AppEvent> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(AppEvent::Quit),
            KeyCode::Tab => Some(AppEvent::ToggleFocus),
            KeyCode::Char('r') => Some(AppEvent::ToggleDeploy),
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::ScrollUp),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::ScrollDown),
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => {
                info!("Quit requested");
                state.should_quit = true;
            }
            AppEvent::Dismiss => state.dismiss(),
            AppEvent::ToggleFocus => state.toggle_focus(),
            AppEvent::ToggleDeploy => state.toggle_deploy(),
            AppEvent::ScrollUp => state.scroll(-1),
            AppEvent::ScrollDown => state.scroll(1),
            AppEvent::Resize { width, height } => state.resize(width, height),
        }
    }
}
