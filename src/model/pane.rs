//! Per-pane state: side, width bounds and collapse bookkeeping

use std::fmt;

/// The two resizable panes flanking the manuscript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneSide {
    Left,
    Right,
}

impl PaneSide {
    pub fn all() -> [PaneSide; 2] {
        [PaneSide::Left, PaneSide::Right]
    }

    pub fn name(&self) -> &str {
        match self {
            PaneSide::Left => "left",
            PaneSide::Right => "right",
        }
    }
}

impl fmt::Display for PaneSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Width limits for a single pane, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneBounds {
    pub initial: u32,
    pub min: u32,
    /// `None` leaves the pane unbounded above
    pub max: Option<u32>,
}

impl PaneBounds {
    pub fn clamp(&self, value: i64) -> u32 {
        clamp_width(value, self.min, self.max)
    }
}

/// Clamp a candidate width into `[min, max]`.
///
/// The upper bound is applied first, so a misconfigured `min > max`
/// resolves to `min` rather than an empty range.
pub fn clamp_width(value: i64, min: u32, max: Option<u32>) -> u32 {
    let capped = match max {
        Some(max) => value.min(i64::from(max)),
        None => value,
    };
    let floored = capped.max(i64::from(min));
    u32::try_from(floored).unwrap_or(u32::MAX)
}

/// Width and collapse state of one pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneState {
    width: u32,
    collapsed: bool,
    /// Width before the last collapse, restored on expand
    last_width: Option<u32>,
}

impl PaneState {
    pub fn expanded(width: u32) -> Self {
        Self {
            width,
            collapsed: false,
            last_width: None,
        }
    }

    pub fn collapsed() -> Self {
        Self {
            width: 0,
            collapsed: true,
            last_width: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn last_width(&self) -> Option<u32> {
        self.last_width
    }

    /// Set the width of an expanded pane. Returns true if it changed.
    pub(crate) fn set_width(&mut self, width: u32) -> bool {
        if self.collapsed || self.width == width {
            return false;
        }
        self.width = width;
        true
    }

    /// Collapse to zero, remembering the current width
    pub(crate) fn collapse(&mut self) {
        if self.collapsed {
            return;
        }
        self.last_width = Some(self.width);
        self.width = 0;
        self.collapsed = true;
    }

    /// Expand to the remembered width, or `fallback` if none was recorded.
    /// Returns the restored width.
    pub(crate) fn expand(&mut self, fallback: u32) -> u32 {
        if !self.collapsed {
            return self.width;
        }
        self.width = self.last_width.unwrap_or(fallback);
        self.collapsed = false;
        self.width
    }
}
