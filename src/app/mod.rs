// ABOUTME: Demo application hosting the walkthrough over a mock screen

pub mod demo;
pub mod events;
pub mod state;

pub use events::{AppEvent, EventHandler};
pub use state::{AppState, Focus};
