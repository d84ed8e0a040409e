//! Drag session - ephemeral state of a splitter drag gesture

use super::pane::{PaneBounds, PaneSide};

/// An active splitter drag
///
/// Created on pointer-down over a splitter and dropped on pointer-up.
/// Holds everything needed to turn a pointer position into a width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub side: PaneSide,
    pub anchor_x: i32,
    pub start_width: u32,
}

impl DragSession {
    pub fn new(side: PaneSide, anchor_x: i32, start_width: u32) -> Self {
        Self {
            side,
            anchor_x,
            start_width,
        }
    }

    /// Width for the pane at `pointer_x`, clamped to `bounds`.
    ///
    /// The right splitter grows its pane when dragged left, so its delta
    /// is mirrored.
    pub fn width_at(&self, pointer_x: i32, bounds: &PaneBounds) -> u32 {
        let delta = i64::from(pointer_x) - i64::from(self.anchor_x);
        let start = i64::from(self.start_width);
        let candidate = match self.side {
            PaneSide::Left => start + delta,
            PaneSide::Right => start - delta,
        };
        bounds.clamp(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(min: u32, max: Option<u32>) -> PaneBounds {
        PaneBounds {
            initial: min,
            min,
            max,
        }
    }

    #[test]
    fn test_left_drag_follows_pointer() {
        let session = DragSession::new(PaneSide::Left, 500, 256);
        assert_eq!(session.width_at(540, &bounds(200, None)), 296);
        assert_eq!(session.width_at(450, &bounds(200, None)), 206);
        assert_eq!(session.width_at(0, &bounds(200, None)), 200);
    }

    #[test]
    fn test_right_drag_is_mirrored() {
        let session = DragSession::new(PaneSide::Right, 800, 288);
        // Pointer moves left: the right pane grows
        assert_eq!(session.width_at(760, &bounds(250, None)), 328);
        // Pointer moves right: the right pane shrinks
        assert_eq!(session.width_at(820, &bounds(250, None)), 268);
    }

    #[test]
    fn test_drag_respects_max() {
        let session = DragSession::new(PaneSide::Left, 100, 500);
        assert_eq!(session.width_at(10_000, &bounds(200, Some(600))), 600);
    }
}
