//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod help_dialog;
pub mod layout;
pub mod quit_dialog;
pub mod workspace;

pub use help_dialog::HelpDialog;
pub use layout::{centered_popup, column_to_px, compose, Hit, WorkspaceLayout};
pub use quit_dialog::QuitDialog;
pub use workspace::{draw_workspace, WorkspaceComponent, WorkspaceRenderContext};
