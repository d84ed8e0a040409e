//! Three-pane layout controller
//!
//! Owns the left and right pane state and the single active drag session.
//! Every mutation returns the [`LayoutEvent`]s it produced so the host can
//! persist widths and apply or revert the resizing style without the
//! controller knowing about either.

use super::drag::DragSession;
use super::pane::{PaneBounds, PaneSide, PaneState};
use crate::config::Config;
use crate::services::StoredWidths;

/// State changes reported by [`PaneLayout`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutEvent {
    DragStarted(PaneSide),
    WidthChanged { side: PaneSide, width: u32 },
    DragEnded(PaneSide),
    Collapsed(PaneSide),
    Expanded { side: PaneSide, width: u32 },
}

/// Where a pane sits in its state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanePhase {
    Expanded,
    /// Expanded and being resized
    Dragging,
    Collapsed,
}

#[derive(Debug, Clone)]
struct PaneSlot {
    state: PaneState,
    bounds: PaneBounds,
    /// Width to expand to when no pre-collapse width was recorded
    restore_width: u32,
}

impl PaneSlot {
    fn new(bounds: PaneBounds, stored: Option<u32>, collapsed: bool) -> Self {
        let width = bounds.clamp(i64::from(stored.unwrap_or(bounds.initial)));
        let state = if collapsed {
            PaneState::collapsed()
        } else {
            PaneState::expanded(width)
        };
        Self {
            state,
            bounds,
            restore_width: width,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaneLayout {
    left: PaneSlot,
    right: PaneSlot,
    drag: Option<DragSession>,
}

impl PaneLayout {
    /// Build the layout from configuration and whatever widths were stored
    /// for the active project.
    pub fn new(config: &Config, stored: StoredWidths) -> Self {
        let slot = |side| {
            PaneSlot::new(
                config.bounds(side),
                stored.get(side),
                config.starts_collapsed(side),
            )
        };
        Self {
            left: slot(PaneSide::Left),
            right: slot(PaneSide::Right),
            drag: None,
        }
    }

    fn slot(&self, side: PaneSide) -> &PaneSlot {
        match side {
            PaneSide::Left => &self.left,
            PaneSide::Right => &self.right,
        }
    }

    fn slot_mut(&mut self, side: PaneSide) -> &mut PaneSlot {
        match side {
            PaneSide::Left => &mut self.left,
            PaneSide::Right => &mut self.right,
        }
    }

    pub fn width(&self, side: PaneSide) -> u32 {
        self.slot(side).state.width()
    }

    pub fn is_collapsed(&self, side: PaneSide) -> bool {
        self.slot(side).state.is_collapsed()
    }

    pub fn bounds(&self, side: PaneSide) -> PaneBounds {
        self.slot(side).bounds
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn phase(&self, side: PaneSide) -> PanePhase {
        if self.is_collapsed(side) {
            PanePhase::Collapsed
        } else if self.drag.is_some_and(|d| d.side == side) {
            PanePhase::Dragging
        } else {
            PanePhase::Expanded
        }
    }

    /// Start resizing `side` from `pointer_x`.
    ///
    /// A collapsed pane has no live splitter, so the request is ignored.
    /// Any session already in progress is ended first.
    pub fn begin_drag(&mut self, side: PaneSide, pointer_x: i32) -> Vec<LayoutEvent> {
        if self.is_collapsed(side) {
            return Vec::new();
        }
        let mut events = self.end_drag();
        self.drag = Some(DragSession::new(side, pointer_x, self.width(side)));
        events.push(LayoutEvent::DragStarted(side));
        events
    }

    /// Apply a pointer move to the active session
    pub fn on_pointer_move(&mut self, pointer_x: i32) -> Vec<LayoutEvent> {
        let Some(session) = self.drag else {
            return Vec::new();
        };
        let slot = self.slot_mut(session.side);
        let width = session.width_at(pointer_x, &slot.bounds);
        if slot.state.set_width(width) {
            vec![LayoutEvent::WidthChanged {
                side: session.side,
                width,
            }]
        } else {
            Vec::new()
        }
    }

    /// Finish the active session. Does nothing when no drag is active.
    pub fn end_drag(&mut self) -> Vec<LayoutEvent> {
        match self.drag.take() {
            Some(session) => vec![LayoutEvent::DragEnded(session.side)],
            None => Vec::new(),
        }
    }

    /// Hide an expanded pane or restore a collapsed one
    pub fn toggle_collapse(&mut self, side: PaneSide) -> Vec<LayoutEvent> {
        let mut events = Vec::new();
        if self.drag.is_some_and(|d| d.side == side) {
            events.extend(self.end_drag());
        }

        let slot = self.slot_mut(side);
        if slot.state.is_collapsed() {
            let width = slot.state.expand(slot.restore_width);
            events.push(LayoutEvent::Expanded { side, width });
        } else {
            slot.state.collapse();
            events.push(LayoutEvent::Collapsed(side));
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unbounded_config() -> Config {
        Config {
            max_left_width: None,
            max_right_width: None,
            ..Config::default()
        }
    }

    fn fresh(config: &Config) -> PaneLayout {
        PaneLayout::new(config, StoredWidths::default())
    }

    #[test]
    fn test_defaults_without_stored_widths() {
        let layout = fresh(&Config::default());
        assert_eq!(layout.width(PaneSide::Left), 256);
        assert_eq!(layout.width(PaneSide::Right), 288);
        assert_eq!(layout.phase(PaneSide::Left), PanePhase::Expanded);
    }

    #[test]
    fn test_stored_widths_are_used_and_clamped() {
        let stored = StoredWidths {
            left: Some(320),
            right: Some(9000),
        };
        let layout = PaneLayout::new(&Config::default(), stored);
        assert_eq!(layout.width(PaneSide::Left), 320);
        assert_eq!(layout.width(PaneSide::Right), 600);
    }

    #[test]
    fn test_left_drag_scenario() {
        let mut layout = fresh(&unbounded_config());

        let events = layout.begin_drag(PaneSide::Left, 500);
        assert_eq!(events, vec![LayoutEvent::DragStarted(PaneSide::Left)]);
        assert_eq!(layout.phase(PaneSide::Left), PanePhase::Dragging);

        let events = layout.on_pointer_move(450);
        assert_eq!(
            events,
            vec![LayoutEvent::WidthChanged {
                side: PaneSide::Left,
                width: 206
            }]
        );

        layout.on_pointer_move(0);
        assert_eq!(layout.width(PaneSide::Left), 200);
    }

    #[test]
    fn test_drag_never_leaves_bounds() {
        let mut layout = fresh(&Config::default());
        layout.begin_drag(PaneSide::Left, 400);
        for x in [-2000, -50, 0, 123, 399, 401, 700, 1200, 5000, 40] {
            layout.on_pointer_move(x);
            let width = layout.width(PaneSide::Left);
            assert!((200..=600).contains(&width), "width {} at x {}", width, x);
        }
    }

    #[test]
    fn test_right_drag_direction_is_inverted() {
        let mut layout = fresh(&unbounded_config());
        layout.begin_drag(PaneSide::Right, 1000);
        layout.on_pointer_move(960);
        assert_eq!(layout.width(PaneSide::Right), 328);
        layout.on_pointer_move(1020);
        assert_eq!(layout.width(PaneSide::Right), 268);
        // The left pane is untouched
        assert_eq!(layout.width(PaneSide::Left), 256);
    }

    #[test]
    fn test_end_drag_is_idempotent() {
        let mut layout = fresh(&Config::default());
        layout.begin_drag(PaneSide::Left, 100);
        layout.on_pointer_move(160);

        assert_eq!(
            layout.end_drag(),
            vec![LayoutEvent::DragEnded(PaneSide::Left)]
        );
        assert!(layout.end_drag().is_empty());
        assert_eq!(layout.width(PaneSide::Left), 316);
        assert!(!layout.is_dragging());
    }

    #[test]
    fn test_pointer_move_without_drag_is_ignored() {
        let mut layout = fresh(&Config::default());
        assert!(layout.on_pointer_move(900).is_empty());
        assert_eq!(layout.width(PaneSide::Left), 256);
    }

    #[test]
    fn test_only_one_session_at_a_time() {
        let mut layout = fresh(&Config::default());
        layout.begin_drag(PaneSide::Left, 100);
        let events = layout.begin_drag(PaneSide::Right, 900);
        assert_eq!(
            events,
            vec![
                LayoutEvent::DragEnded(PaneSide::Left),
                LayoutEvent::DragStarted(PaneSide::Right),
            ]
        );
        assert_eq!(layout.phase(PaneSide::Left), PanePhase::Expanded);
        assert_eq!(layout.phase(PaneSide::Right), PanePhase::Dragging);
    }

    #[test]
    fn test_collapse_scenario() {
        let stored = StoredWidths {
            left: Some(310),
            right: None,
        };
        let mut layout = PaneLayout::new(&Config::default(), stored);

        assert_eq!(
            layout.toggle_collapse(PaneSide::Left),
            vec![LayoutEvent::Collapsed(PaneSide::Left)]
        );
        assert_eq!(layout.width(PaneSide::Left), 0);
        assert!(layout.is_collapsed(PaneSide::Left));

        assert_eq!(
            layout.toggle_collapse(PaneSide::Left),
            vec![LayoutEvent::Expanded {
                side: PaneSide::Left,
                width: 310
            }]
        );
        assert_eq!(layout.width(PaneSide::Left), 310);
    }

    #[test]
    fn test_expand_restores_dragged_width_not_default() {
        let mut layout = fresh(&Config::default());
        layout.begin_drag(PaneSide::Right, 800);
        layout.on_pointer_move(700);
        layout.end_drag();
        assert_eq!(layout.width(PaneSide::Right), 388);

        layout.toggle_collapse(PaneSide::Right);
        layout.toggle_collapse(PaneSide::Right);
        assert_eq!(layout.width(PaneSide::Right), 388);
    }

    #[test]
    fn test_collapse_during_drag_ends_drag_first() {
        let mut layout = fresh(&Config::default());
        layout.begin_drag(PaneSide::Left, 300);
        layout.on_pointer_move(350);

        let events = layout.toggle_collapse(PaneSide::Left);
        assert_eq!(
            events,
            vec![
                LayoutEvent::DragEnded(PaneSide::Left),
                LayoutEvent::Collapsed(PaneSide::Left),
            ]
        );
        assert!(!layout.is_dragging());

        layout.toggle_collapse(PaneSide::Left);
        assert_eq!(layout.width(PaneSide::Left), 306);
    }

    #[test]
    fn test_collapsing_other_side_keeps_drag() {
        let mut layout = fresh(&Config::default());
        layout.begin_drag(PaneSide::Left, 300);
        layout.toggle_collapse(PaneSide::Right);
        assert_eq!(layout.phase(PaneSide::Left), PanePhase::Dragging);
    }

    #[test]
    fn test_collapsed_pane_cannot_be_dragged() {
        let mut layout = fresh(&Config::default());
        layout.toggle_collapse(PaneSide::Left);
        assert!(layout.begin_drag(PaneSide::Left, 100).is_empty());
        assert!(!layout.is_dragging());
    }

    #[test]
    fn test_start_collapsed_expands_to_initial() {
        let config = Config {
            right_collapsed: true,
            ..Config::default()
        };
        let mut layout = fresh(&config);
        assert_eq!(layout.width(PaneSide::Right), 0);
        assert_eq!(layout.phase(PaneSide::Right), PanePhase::Collapsed);

        layout.toggle_collapse(PaneSide::Right);
        assert_eq!(layout.width(PaneSide::Right), 288);
    }
}
