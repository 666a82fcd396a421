use std::time::{Duration, Instant};

/// Default minimum spacing between processed pointer moves
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(40);

/// Last pointer position seen during the current drag session
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    pub last_primary: Option<f64>,
    pub last_secondary: Option<f64>,
}

impl DragState {
    pub fn clear(&mut self) {
        self.last_primary = None;
        self.last_secondary = None;
    }

    pub fn is_clear(&self) -> bool {
        self.last_primary.is_none() && self.last_secondary.is_none()
    }
}

/// Coordinate to remember for the next delta.
///
/// A pointer outside `[start, start + extent)` is pinned one cell before the
/// boundary it crossed so deltas stop growing once it leaves the container.
pub fn record_pointer(position: f64, start: f64, extent: f64) -> f64 {
    let end = start + extent;
    if position >= end {
        end - 1.0
    } else if position < start {
        start - 1.0
    } else {
        position
    }
}

/// Leading-edge throttle: the first event passes, then everything inside the
/// window is dropped.
#[derive(Debug, Clone)]
pub struct Throttle {
    window: Duration,
    last_admitted: Option<Instant>,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_admitted: None,
        }
    }

    pub fn admit(&mut self, at: Instant) -> bool {
        match self.last_admitted {
            Some(last) if at.saturating_duration_since(last) < self.window => false,
            _ => {
                self.last_admitted = Some(at);
                true
            }
        }
    }
}
