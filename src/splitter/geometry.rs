use ratatui::layout::{Direction, Rect};
use serde::Deserialize;
use std::fmt;

/// Closest a pane edge may get to the container boundary, in cells
pub const EDGE_MARGIN: f64 = 3.0;

/// Stacking direction of the two panes.
///
/// Vertical stacks the panes top/bottom and resizes along the height;
/// horizontal places them side by side and resizes along the width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Orientation::Vertical => Direction::Vertical,
            Orientation::Horizontal => Direction::Horizontal,
        }
    }

    /// Split a pointer position into (primary, secondary) coordinates
    pub fn split_point(self, x: u16, y: u16) -> (f64, f64) {
        match self {
            Orientation::Vertical => (f64::from(y), f64::from(x)),
            Orientation::Horizontal => (f64::from(x), f64::from(y)),
        }
    }

    /// (start, extent) of a rect along the primary axis
    pub fn span(self, rect: Rect) -> (f64, f64) {
        match self {
            Orientation::Vertical => (f64::from(rect.y), f64::from(rect.height)),
            Orientation::Horizontal => (f64::from(rect.x), f64::from(rect.width)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Orientation::Vertical => "vertical",
            Orientation::Horizontal => "horizontal",
        }
    }
}

/// Extents of the measured elements along the primary axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometrySnapshot {
    pub container_start: f64,
    pub container_extent: f64,
    pub handle_extent: f64,
    pub first_pane_extent: f64,
}

/// The handle collapses with the first pane when the ratio is exactly zero
pub fn handle_offset(ratio: f64, handle_extent: f64) -> f64 {
    if ratio == 0.0 {
        0.0
    } else {
        handle_extent
    }
}

/// New split ratio after moving the handle by `delta` cells.
///
/// Returns `None` when the container has no extent, since the ratio would
/// not be finite.
pub fn calculate_first_pane_size(ratio: f64, delta: f64, geometry: &GeometrySnapshot) -> Option<f64> {
    let total = geometry.container_extent;
    if total <= 0.0 || !total.is_finite() {
        tracing::warn!(total, "container has no extent, skipping ratio update");
        return None;
    }

    let offset = handle_offset(ratio, geometry.handle_extent);
    let stop_position = offset + EDGE_MARGIN;

    let mut first = geometry.first_pane_extent + delta + offset / 2.0;
    if first > total - stop_position {
        first = total - stop_position;
    } else if first < stop_position {
        first = stop_position;
    }

    Some(first / total * 100.0)
}

/// A `calc(P% - Npx)` sizing expression, resolved against the container
/// extent whenever the layout is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeExpr {
    pub percent: f64,
    pub offset: f64,
}

impl SizeExpr {
    pub fn resolve(&self, total: f64) -> f64 {
        (total * self.percent / 100.0 - self.offset).max(0.0)
    }
}

impl fmt::Display for SizeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "calc({}% - {}px)", self.percent, self.offset)
    }
}

/// Sizing applied to the two frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneStyles {
    pub orientation: Orientation,
    pub first: SizeExpr,
    pub second: SizeExpr,
}

impl PaneStyles {
    pub fn property(&self) -> &'static str {
        match self.orientation {
            Orientation::Vertical => "height",
            Orientation::Horizontal => "width",
        }
    }
}

pub fn layout_styles(ratio: f64, handle_extent: f64, orientation: Orientation) -> PaneStyles {
    let half = handle_offset(ratio, handle_extent) / 2.0;
    PaneStyles {
        orientation,
        first: SizeExpr { percent: ratio, offset: half },
        second: SizeExpr { percent: 100.0 - ratio, offset: half },
    }
}
