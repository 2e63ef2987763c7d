// ABOUTME: Tests for the demo app's event mapping and its effect on the walkthrough

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use walkthrough::app::demo::{demo_steps, DEPLOY_KEY};
use walkthrough::app::{AppEvent, AppState, EventHandler, Focus};
use walkthrough::tour::StepDescriptor;
use walkthrough::watch::Viewport;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn click() -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 10,
        row: 10,
        modifiers: KeyModifiers::NONE,
    })
}

fn send(state: &mut AppState, event: &Event) -> Option<AppEvent> {
    let app_event = EventHandler::handle_event(event, state);
    if let Some(app_event) = app_event {
        EventHandler::process_event(app_event, state);
    }
    state.sync();
    app_event
}

fn active_key(state: &AppState) -> Option<String> {
    state.guide.advancer().active().map(|a| a.element.key().to_string())
}

fn demo() -> AppState {
    AppState::new(demo_steps(), Viewport::new(80, 24))
}

#[test]
fn test_first_step_is_shown_at_startup() {
    let state = demo();
    assert_eq!(active_key(&state).as_deref(), Some("search-bar"));
    assert!(state.hole_visible());
    assert_eq!(state.focus, Focus::Overlay);
}

#[test]
fn test_click_dismisses_and_advances() {
    let mut state = demo();
    assert_eq!(send(&mut state, &click()), Some(AppEvent::Dismiss));
    // Deploy button is not on screen yet, so the session list is next
    assert_eq!(active_key(&state).as_deref(), Some("session-list"));
}

#[test]
fn test_enter_outside_overlay_focus_does_nothing() {
    let mut state = demo();
    assert_eq!(send(&mut state, &key(KeyCode::Tab)), Some(AppEvent::ToggleFocus));
    assert_eq!(state.focus, Focus::App);

    assert_eq!(send(&mut state, &key(KeyCode::Enter)), None);
    assert_eq!(active_key(&state).as_deref(), Some("search-bar"));

    send(&mut state, &key(KeyCode::Tab));
    assert_eq!(send(&mut state, &key(KeyCode::Enter)), Some(AppEvent::Dismiss));
}

#[test]
fn test_revealed_element_is_promoted_once_free() {
    let mut state = demo();
    send(&mut state, &key(KeyCode::Char('r')));
    assert!(state.deploy_visible());
    // A step is active, so the reveal alone promotes nothing
    assert_eq!(active_key(&state).as_deref(), Some("search-bar"));

    send(&mut state, &click());
    assert_eq!(active_key(&state).as_deref(), Some(DEPLOY_KEY));
}

#[test]
fn test_scrolling_moves_the_hole() {
    let mut state = AppState::new(vec![StepDescriptor::new("activity-log")], Viewport::new(80, 24));
    let before = state.guide.render_state().hole;

    send(&mut state, &key(KeyCode::Down));
    send(&mut state, &key(KeyCode::Down));
    let after = state.guide.render_state().hole;
    assert_eq!(after.top, before.top - 2);

    send(&mut state, &key(KeyCode::Up));
    assert_eq!(state.guide.render_state().hole.top, before.top - 1);
}

#[test]
fn test_scroll_is_clamped_to_content() {
    let mut state = demo();
    for _ in 0..50 {
        send(&mut state, &key(KeyCode::Down));
    }
    let max = state.screen.content_height - 24;
    assert_eq!(state.viewport.current().scroll_y, max);
}

#[test]
fn test_resize_updates_viewport() {
    let mut state = demo();
    assert_eq!(
        send(&mut state, &Event::Resize(120, 40)),
        Some(AppEvent::Resize { width: 120, height: 40 })
    );
    assert_eq!(state.viewport.current(), Viewport::new(120, 40));
}

#[test]
fn test_walkthrough_runs_to_its_stuck_end() {
    let mut state = demo();
    let mut seen = Vec::new();
    send(&mut state, &key(KeyCode::Char('r')));
    while let Some(key) = active_key(&state) {
        seen.push(key);
        send(&mut state, &click());
    }
    assert_eq!(seen, vec!["search-bar", "deploy-button", "session-list", "activity-log"]);
    // "help-panel" never appears, so the guide keeps waiting
    assert!(state.guide.is_watching());
    assert!(!state.hole_visible());
}

#[test]
fn test_quit_keys() {
    for event in [
        key(KeyCode::Char('q')),
        key(KeyCode::Esc),
        Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
    ] {
        let mut state = demo();
        assert_eq!(send(&mut state, &event), Some(AppEvent::Quit));
        assert!(state.should_quit);
    }
}
