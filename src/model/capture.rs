//! Pointer capture held for the duration of a splitter drag
//!
//! While captured, every mouse event is routed to the drag controller no
//! matter where it lands, and the workspace renders its resizing style.
//! Capture follows the layout's event stream: acquired on `DragStarted`,
//! released on `DragEnded`.

use super::layout::LayoutEvent;
use super::pane::PaneSide;
use tracing::debug;

#[derive(Debug, Default)]
pub struct PointerCapture {
    owner: Option<PaneSide>,
}

impl PointerCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pane whose splitter holds the capture
    pub fn owner(&self) -> Option<PaneSide> {
        self.owner
    }

    pub fn is_captured(&self) -> bool {
        self.owner.is_some()
    }

    pub fn observe(&mut self, event: &LayoutEvent) {
        match *event {
            LayoutEvent::DragStarted(side) => {
                if let Some(previous) = self.owner.replace(side) {
                    debug!(side = %previous, "pointer capture handed over");
                }
                debug!(side = %side, "pointer captured");
            }
            LayoutEvent::DragEnded(side) => {
                if self.owner == Some(side) {
                    self.owner = None;
                    debug!(side = %side, "pointer released");
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_follows_drag_events() {
        let mut capture = PointerCapture::new();
        capture.observe(&LayoutEvent::DragStarted(PaneSide::Right));
        assert_eq!(capture.owner(), Some(PaneSide::Right));

        capture.observe(&LayoutEvent::WidthChanged {
            side: PaneSide::Right,
            width: 300,
        });
        assert!(capture.is_captured());

        capture.observe(&LayoutEvent::DragEnded(PaneSide::Right));
        assert!(!capture.is_captured());
    }

    #[test]
    fn test_stale_release_is_ignored() {
        let mut capture = PointerCapture::new();
        capture.observe(&LayoutEvent::DragStarted(PaneSide::Left));
        capture.observe(&LayoutEvent::DragEnded(PaneSide::Right));
        assert_eq!(capture.owner(), Some(PaneSide::Left));
    }
}
