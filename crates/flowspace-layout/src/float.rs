//! Float and clear vocabulary shared by the render space and its drivers.

use flowspace_types::geometry::Rect;
use serde::{Deserialize, Serialize};

// -------------------------------------------------------------------
// FloatSide
// -------------------------------------------------------------------

/// Whether a float is anchored to the left or right container edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloatSide {
    Left,
    Right,
}

impl FloatSide {
    /// The side facing this one across the container.
    pub fn opposite(self) -> Self {
        match self {
            FloatSide::Left => FloatSide::Right,
            FloatSide::Right => FloatSide::Left,
        }
    }
}

// -------------------------------------------------------------------
// ClearSide
// -------------------------------------------------------------------

/// Which side(s) to clear past when resolving a clear directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClearSide {
    Left,
    Right,
    Both,
}

impl ClearSide {
    /// Whether floats on `side` must be cleared.
    pub fn includes(self, side: FloatSide) -> bool {
        matches!(
            (self, side),
            (ClearSide::Both, _)
                | (ClearSide::Left, FloatSide::Left)
                | (ClearSide::Right, FloatSide::Right)
        )
    }
}

// -------------------------------------------------------------------
// FloatBox
// -------------------------------------------------------------------

/// A placed float with its side and container-relative rectangle.
///
/// Left floats always have `rect.x == 0`; right floats end flush with
/// the container's right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatBox {
    /// Whether this is a left or right float.
    pub side: FloatSide,
    /// The positioned rectangle of the float.
    pub rect: Rect,
}

impl FloatBox {
    /// First row covered by the float.
    pub fn top(&self) -> i32 {
        self.rect.y
    }

    /// First row below the float.
    pub fn bottom(&self) -> i32 {
        self.rect.bottom()
    }

    /// Horizontal extent measured inward from the anchoring edge.
    pub fn width(&self) -> i32 {
        self.rect.width
    }

    /// Whether row `y` lies within `[top, bottom)`.
    pub fn covers(&self, y: i32) -> bool {
        self.top() <= y && y < self.bottom()
    }

    /// Whether the float's vertical extent overlaps `[band_top, band_bottom)`.
    pub fn overlaps_band(&self, band_top: i32, band_bottom: i32) -> bool {
        self.top() < band_bottom && self.bottom() > band_top
    }
}
