//! Scroll-driven animation: progress sampling, phases and the pure mapping
//! from progress to phone pose and overlay states.

pub mod mapper;
/// Phase partition of scroll progress.
pub mod phase;
mod progress;

pub use mapper::{
    derive_visual_state, OverlayState, Overlays, PhonePose, VisualState,
};
pub use phase::AnimationPhase;
pub use progress::{ScrollGeometry, ScrollProgress, SharedProgress};
