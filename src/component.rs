//! Component trait - Interface for UI components
//!
//! Components turn terminal events into Actions, apply Actions to their own
//! state, and render themselves. They never mutate each other directly.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

pub trait Component {
    /// Called once before the first frame
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Translate a key press into an Action without touching state
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Translate a mouse event into an Action without touching state
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    /// Apply an Action, optionally producing a follow-up Action
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Render into `area`
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
