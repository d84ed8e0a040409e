//! Action enum - All possible application actions
//!
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::PaneSide;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Terminal lost focus; any pointer gesture is over
    FocusLost,
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Pane Layout (pointer positions in pixels)
    // ─────────────────────────────────────────────────────────────────────────
    /// Pointer pressed on a splitter
    BeginDrag(PaneSide, i32),
    /// Pointer moved while a drag is active
    DragTo(i32),
    /// Pointer released
    EndDrag,
    /// Collapse or expand a pane
    ToggleCollapse(PaneSide),

    // ─────────────────────────────────────────────────────────────────────────
    // Project Navigator
    // ─────────────────────────────────────────────────────────────────────────
    NextProject,
    PrevProject,
    /// Make the highlighted project active
    ActivateProject,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenHelp,
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::FocusLost => write!(f, "FocusLost"),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::BeginDrag(side, x) => write!(f, "BeginDrag({}, {})", side, x),
            Action::DragTo(x) => write!(f, "DragTo({})", x),
            Action::EndDrag => write!(f, "EndDrag"),
            Action::ToggleCollapse(side) => write!(f, "ToggleCollapse({})", side),
            Action::NextProject => write!(f, "NextProject"),
            Action::PrevProject => write!(f, "PrevProject"),
            Action::ActivateProject => write!(f, "ActivateProject"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
