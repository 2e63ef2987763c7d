// ABOUTME: Tests for configuration and step file loading

use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

use walkthrough::app::AppState;
use walkthrough::config::{load_steps_file, AppConfig, StepsFileError};
use walkthrough::tour::{StepDescriptor, TipSpec};
use walkthrough::watch::Viewport;

const CONFIG: &str = r#"
[ui]
tip_max_width = 30
hole_padding = 1

[[tour.steps]]
target_id = "details"

[[tour.steps]]
target_id = "search-bar"
[tour.steps.tip]
content = "Search"
above = true
"#;

#[test]
fn test_load_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, CONFIG).unwrap();

    let config = AppConfig::load_from(&path).unwrap();
    assert_eq!(config.ui.tip_max_width, 30);
    assert_eq!(config.ui.hole_padding, 1);
    assert_eq!(config.ui.dim_color, [20, 20, 30]);
    assert_eq!(
        config.tour.steps,
        vec![
            StepDescriptor::new("details"),
            StepDescriptor::new("search-bar").with_tip(TipSpec::new("Search").above()),
        ]
    );
}

#[test]
fn test_configured_steps_replace_demo_steps() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, CONFIG).unwrap();
    let config = AppConfig::load_from(&path).unwrap();

    let state = AppState::from_config(&config, Viewport::new(80, 24));
    let active = state.guide.advancer().active().map(|a| a.element.key().to_string());
    assert_eq!(active.as_deref(), Some("details"));
    // Padding grows the hole by one cell on each side
    assert_eq!(state.guide.render_state().hole.left, 33);
    assert_eq!(state.overlay_style.tip_max_width, 30);
}

#[test]
fn test_malformed_config_names_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[ui\ntip_max_width = ").unwrap();

    let err = AppConfig::load_from(&path).unwrap_err();
    assert!(format!("{err:#}").contains("broken.toml"));
}

#[test]
fn test_config_round_trips_through_toml() {
    let mut config = AppConfig::default();
    config.tour.steps = vec![StepDescriptor::new("a").with_tip(TipSpec::new("A").right_justified())];
    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: AppConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_steps_file_loads_duplicates_and_empty_ids() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("steps.toml");
    fs::write(
        &path,
        r#"
        [[steps]]
        target_id = "x"
        [[steps]]
        target_id = ""
        [[steps]]
        target_id = "x"
        "#,
    )
    .unwrap();

    let steps = load_steps_file(&path).unwrap();
    assert_eq!(steps.len(), 3);
}

#[test]
fn test_steps_file_errors() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.toml");
    assert!(matches!(load_steps_file(&missing), Err(StepsFileError::Read { .. })));

    let bad = dir.path().join("bad.toml");
    fs::write(&bad, "steps = 3").unwrap();
    let err = load_steps_file(&bad).unwrap_err();
    assert!(matches!(err, StepsFileError::Parse { .. }));
    assert!(err.to_string().contains("bad.toml"));
}
