//! Fenster window manager.
//!
//! Floating window management for the Fenster desktop shell: a geometry
//! store with stacking and focus invariants, a pointer interaction state
//! machine for dragging and resizing, edge snapping with two-phase
//! preview/commit, a minimize animator with deferred commits, and frame
//! hit-testing for the host-rendered window chrome.
//!
//! The host shell owns rendering and the event loop; this crate owns all
//! window state and decides what every pointer event means. The single
//! entry point is [`WindowManager`].

pub mod animation;
pub mod constants;
pub mod error;
pub mod events;
pub mod frame;
pub mod interaction;
pub mod manager;
pub mod registry;
pub mod snap;
pub mod state;
pub mod store;

pub use animation::{AnchorRegistry, MinimizeAnimator, MinimizeTransform};
pub use error::{WmError, WmResult};
pub use events::{InputEvent, InputQueue};
pub use frame::{ControlButton, FrameRegion};
pub use interaction::{Interaction, ResizeEdge};
pub use manager::WindowManager;
pub use registry::{AppRegistry, AppSpec};
pub use state::{Desktop, Point, WindowFrame, WindowId, WindowRecord};
pub use store::WindowStore;
