//! State models for the workspace layout

pub mod capture;
pub mod drag;
pub mod layout;
pub mod modal;
pub mod pane;

pub use capture::PointerCapture;
pub use layout::{LayoutEvent, PaneLayout, PanePhase};
pub use pane::PaneSide;
