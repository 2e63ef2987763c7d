// ABOUTME: Walkthrough core - step queue, advancement state machine and hole measurement
// Everything here is synchronous and infallible; hosts drive it from their event loop

pub mod advancer;
pub mod guide;
pub mod queue;
pub mod rect;
pub mod resolver;
pub mod step;

pub use advancer::{ActiveStep, RenderState, StepAdvancer};
pub use guide::{Guide, GuideSignal};
pub use queue::StepQueue;
pub use rect::{HoleRect, RectTracker};
pub use resolver::{ElementHandle, ElementResolver};
pub use step::{StepDescriptor, TipSpec};
