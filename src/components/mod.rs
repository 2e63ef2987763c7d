// ABOUTME: Rendering components - the mock screen and the walkthrough overlay

pub mod overlay;
pub mod screen;

pub use overlay::{HoleOverlay, OverlayComponent, OverlayStyle};
pub use screen::ScreenComponent;
