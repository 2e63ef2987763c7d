// ABOUTME: `simulate` command - drives the demo walkthrough headlessly
//
// Each round dismisses the visible hole, or reveals the deploy button when
// nothing is showing, until no further step can appear.

use anyhow::Result;
use serde::Serialize;

use super::OutputFormat;
use walkthrough::app::AppState;
use walkthrough::config::AppConfig;
use walkthrough::watch::Viewport;

#[derive(Serialize)]
struct Snapshot {
    round: usize,
    target: Option<String>,
    top: Option<i32>,
    left: Option<i32>,
    width: u16,
    height: u16,
    tip: Option<String>,
    pending: usize,
    watching: bool,
}

pub fn execute(config: &AppConfig, format: OutputFormat) -> Result<()> {
    let mut state = AppState::from_config(config, Viewport::new(80, 24));
    let max_rounds = state.guide.advancer().queue().len() * 2 + 2;
    let mut frames = Vec::new();

    for round in 1..=max_rounds {
        state.sync();
        frames.push(snapshot(round, &state));

        if state.hole_visible() {
            state.dismiss();
        } else if !state.deploy_visible() {
            state.toggle_deploy();
        } else {
            break;
        }
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&frames)?),
        OutputFormat::Text => {
            for frame in &frames {
                match &frame.target {
                    Some(target) => println!(
                        "round {:>2}: {:<16} at ({}, {}) {}x{} pending={}{}",
                        frame.round,
                        target,
                        frame.left.unwrap_or_default(),
                        frame.top.unwrap_or_default(),
                        frame.width,
                        frame.height,
                        frame.pending,
                        frame.tip.as_deref().map(|t| format!("  \"{t}\"")).unwrap_or_default(),
                    ),
                    None => println!(
                        "round {:>2}: no hole            pending={} watching={}",
                        frame.round, frame.pending, frame.watching
                    ),
                }
            }
        }
    }
    Ok(())
}

fn snapshot(round: usize, state: &AppState) -> Snapshot {
    let render = state.guide.render_state();
    let visible = render.is_visible();
    Snapshot {
        round,
        target: state
            .guide
            .advancer()
            .active()
            .map(|a| a.element.key().to_string()),
        top: visible.then_some(render.hole.top),
        left: visible.then_some(render.hole.left),
        width: render.hole.width,
        height: render.hole.height,
        tip: render.tip.as_ref().map(|t| t.content.clone()),
        pending: state.guide.advancer().queue().len(),
        watching: state.guide.is_watching(),
    }
}
