//! Window animation: easing curves and the minimize fly-to-taskbar effect.

pub mod easing;
pub mod minimize;

pub use minimize::{AnchorRegistry, MinimizeAnimator, MinimizeTransform};
