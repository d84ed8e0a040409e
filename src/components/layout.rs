//! Layout calculations for the workspace
//!
//! Converts pane widths (pixels) into terminal regions and maps mouse
//! positions back onto splitters and collapse toggles.

use crate::model::{PaneLayout, PaneSide};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of each splitter strip, in columns
pub const SPLITTER_COLS: u16 = 1;

/// Screen regions of the three-pane workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkspaceLayout {
    /// `None` while the pane is collapsed or squeezed out
    pub left: Option<Rect>,
    pub left_splitter: Rect,
    pub center: Rect,
    pub right_splitter: Rect,
    pub right: Option<Rect>,
    /// Collapse toggle cell on top of each splitter
    pub left_toggle: Rect,
    pub right_toggle: Rect,
    pub status: Rect,
}

/// Interactive element under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Splitter(PaneSide),
    Toggle(PaneSide),
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

impl WorkspaceLayout {
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Hit> {
        for side in PaneSide::all() {
            let (toggle, splitter) = match side {
                PaneSide::Left => (self.left_toggle, self.left_splitter),
                PaneSide::Right => (self.right_toggle, self.right_splitter),
            };
            if contains(toggle, column, row) {
                return Some(Hit::Toggle(side));
            }
            if contains(splitter, column, row) {
                return Some(Hit::Splitter(side));
            }
        }
        None
    }
}

/// Terminal columns covered by a pixel width
pub fn px_to_cols(px: u32, cell_width_px: u32) -> u16 {
    let cols = px / cell_width_px.max(1);
    u16::try_from(cols).unwrap_or(u16::MAX)
}

/// Pixel position of a terminal column's left edge
pub fn column_to_px(column: u16, cell_width_px: u32) -> i32 {
    let px = i64::from(column) * i64::from(cell_width_px.max(1));
    i32::try_from(px).unwrap_or(i32::MAX)
}

/// Fit the side panes next to a center pane of at least `min_center` columns.
///
/// The right pane gives way first, then the left.
fn fit_side_columns(available: u16, left: u16, right: u16, min_center: u16) -> (u16, u16) {
    let budget = available.saturating_sub((2 * SPLITTER_COLS).saturating_add(min_center));
    let left = left.min(budget);
    let right = right.min(budget - left);
    (left, right)
}

/// Calculate the workspace layout for the current pane state
pub fn compose(
    area: Rect,
    panes: &PaneLayout,
    cell_width_px: u32,
    min_center_cols: u16,
) -> WorkspaceLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let content = main_chunks[0];

    let (left_cols, right_cols) = fit_side_columns(
        content.width,
        px_to_cols(panes.width(PaneSide::Left), cell_width_px),
        px_to_cols(panes.width(PaneSide::Right), cell_width_px),
        min_center_cols,
    );

    // The center is the fill region so it tracks container resizes
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(left_cols),
            Constraint::Length(SPLITTER_COLS),
            Constraint::Fill(1),
            Constraint::Length(SPLITTER_COLS),
            Constraint::Length(right_cols),
        ])
        .split(content);

    let visible = |rect: Rect| (rect.width > 0).then_some(rect);
    let toggle = |splitter: Rect| {
        Rect::new(splitter.x, splitter.y, splitter.width, splitter.height.min(1))
    };

    WorkspaceLayout {
        left: visible(columns[0]),
        left_splitter: columns[1],
        center: columns[2],
        right_splitter: columns[3],
        right: visible(columns[4]),
        left_toggle: toggle(columns[1]),
        right_toggle: toggle(columns[3]),
        status: main_chunks[1],
    }
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::services::StoredWidths;

    fn default_panes() -> PaneLayout {
        PaneLayout::new(&Config::default(), StoredWidths::default())
    }

    #[test]
    fn test_compose_default_widths() {
        let layout = compose(Rect::new(0, 0, 200, 50), &default_panes(), 8, 10);

        // 256px / 8 = 32 columns, 288px / 8 = 36 columns
        assert_eq!(layout.left, Some(Rect::new(0, 0, 32, 49)));
        assert_eq!(layout.left_splitter, Rect::new(32, 0, 1, 49));
        assert_eq!(layout.center, Rect::new(33, 0, 130, 49));
        assert_eq!(layout.right_splitter, Rect::new(163, 0, 1, 49));
        assert_eq!(layout.right, Some(Rect::new(164, 0, 36, 49)));
        assert_eq!(layout.status, Rect::new(0, 49, 200, 1));
    }

    #[test]
    fn test_collapsed_pane_has_no_region() {
        let mut panes = default_panes();
        panes.toggle_collapse(PaneSide::Left);
        let layout = compose(Rect::new(0, 0, 200, 50), &panes, 8, 10);

        assert_eq!(layout.left, None);
        assert_eq!(layout.left_splitter.x, 0);
        assert_eq!(layout.center.x, 1);
    }

    #[test]
    fn test_center_keeps_minimum_in_narrow_terminal() {
        let layout = compose(Rect::new(0, 0, 60, 20), &default_panes(), 8, 10);

        assert_eq!(layout.center.width, 10);
        // Left keeps its 32 columns, right gets what is left
        assert_eq!(layout.left.map(|r| r.width), Some(32));
        assert_eq!(layout.right.map(|r| r.width), Some(16));
    }

    #[test]
    fn test_fit_side_columns_shrinks_right_first() {
        assert_eq!(fit_side_columns(100, 30, 30, 10), (30, 30));
        assert_eq!(fit_side_columns(60, 30, 30, 10), (30, 18));
        assert_eq!(fit_side_columns(30, 30, 30, 10), (18, 0));
        assert_eq!(fit_side_columns(5, 30, 30, 10), (0, 0));
    }

    #[test]
    fn test_hit_test() {
        let layout = compose(Rect::new(0, 0, 200, 50), &default_panes(), 8, 10);

        assert_eq!(layout.hit_test(32, 0), Some(Hit::Toggle(PaneSide::Left)));
        assert_eq!(layout.hit_test(32, 10), Some(Hit::Splitter(PaneSide::Left)));
        assert_eq!(layout.hit_test(163, 0), Some(Hit::Toggle(PaneSide::Right)));
        assert_eq!(layout.hit_test(163, 30), Some(Hit::Splitter(PaneSide::Right)));
        assert_eq!(layout.hit_test(100, 10), None);
        // Status line is not part of a splitter
        assert_eq!(layout.hit_test(32, 49), None);
    }

    #[test]
    fn test_pixel_conversions() {
        assert_eq!(px_to_cols(256, 8), 32);
        assert_eq!(px_to_cols(207, 8), 25);
        assert_eq!(px_to_cols(100, 0), 100);
        assert_eq!(column_to_px(40, 8), 320);
    }

    #[test]
    fn test_centered_popup() {
        let popup = centered_popup(Rect::new(0, 0, 100, 40), 40, 10);
        assert_eq!(popup, Rect::new(30, 15, 40, 10));
    }
}
