//! The render space contract consumed by line-layout drivers.
//!
//! A driver constructs one render space per container, queries the free
//! horizontal band at each line it lays out, places floats as it meets
//! them in the content stream and resolves clear directives.

use flowspace_types::error::Result;
use flowspace_types::geometry::Rect;

use crate::float::ClearSide;

/// The next vertical offset at which the available width may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthChange {
    /// The width changes at this row.
    At(i32),
    /// No float boundary lies below; the width is constant to the end
    /// of the content.
    Unbounded,
}

impl WidthChange {
    /// The boundary row, if bounded.
    pub fn position(self) -> Option<i32> {
        match self {
            WidthChange::At(y) => Some(y),
            WidthChange::Unbounded => None,
        }
    }

    /// Clamp the boundary to `limit`, treating `Unbounded` as infinitely far.
    pub fn min_with(self, limit: i32) -> i32 {
        match self {
            WidthChange::At(y) => y.min(limit),
            WidthChange::Unbounded => limit,
        }
    }
}

/// The free horizontal band at one row: `[advance, advance + width)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineBand {
    pub advance: i32,
    pub width: i32,
}

impl LineBand {
    pub fn new(advance: i32, width: i32) -> Self {
        Self { advance, width }
    }

    /// Exclusive right edge of the band.
    pub fn right(&self) -> i32 {
        self.advance + self.width
    }

    /// Returns true if the given width would fit in this band.
    pub fn fits(&self, required_width: i32) -> bool {
        self.width >= required_width
    }
}

/// Geometry of a container that inline content flows through.
///
/// Queries are total: any row, including negative rows and rows far
/// below every float, yields an answer. Placement only fails on
/// non-positive sizes, on floats whose bottom edge would leave the `i32`
/// range, and on oversized floats when the implementation is configured
/// to reject them.
pub trait RenderSpace {
    /// Fixed width of the container.
    fn container_width(&self) -> i32;

    /// Smallest row strictly greater than `y` where a float begins or ends.
    fn next_width_change(&self, y: i32) -> WidthChange;

    /// Place a float against the left edge, no higher than `y`.
    ///
    /// Returns the rectangle the float was assigned, which may be lower
    /// than `y` and narrower than `width`.
    fn add_left_float(&mut self, y: i32, width: i32, height: i32) -> Result<Rect>;

    /// Place a float against the right edge, no higher than `y`.
    fn add_right_float(&mut self, y: i32, width: i32, height: i32) -> Result<Rect>;

    /// Row at which all floats of the cleared side(s) have ended, or 0
    /// when there are none.
    fn next_clear_y(&self, clear: ClearSide) -> i32;

    /// Horizontal space available for inline content at row `y`.
    fn width_for_vertical_position(&self, y: i32) -> i32;

    /// Offset from the container's left edge where free space begins at
    /// row `y`.
    fn advance_for_vertical_position(&self, y: i32) -> i32;

    /// Both halves of the free band at row `y`.
    fn band_at(&self, y: i32) -> LineBand {
        LineBand::new(
            self.advance_for_vertical_position(y),
            self.width_for_vertical_position(y),
        )
    }
}
