//! Float-aware render space for a single fixed-width container.
//!
//! Left floats are anchored to the container's left edge and right
//! floats to its right edge. Placement pushes each new float down until
//! it neither overlaps a float on its own side nor collides with the
//! opposite side, so at most one float per side covers any row. Each
//! side's list therefore stays sorted by `top` with pairwise disjoint
//! vertical extents, and every query is a binary search over it.

use flowspace_types::config::{FlowConfig, OversizePolicy};
use flowspace_types::error::{FlowError, Result};
use flowspace_types::geometry::Rect;

use crate::float::{ClearSide, FloatBox, FloatSide};
use crate::space::{RenderSpace, WidthChange};

// -------------------------------------------------------------------
// FlowRenderSpace
// -------------------------------------------------------------------

/// Tracks the floats of one container for one layout pass.
///
/// Floats are append-only: they are never moved or removed, and the
/// whole space is discarded when the pass ends.
#[derive(Debug, Clone)]
pub struct FlowRenderSpace {
    container_width: i32,
    oversize: OversizePolicy,
    /// Left floats, sorted by top, vertically disjoint.
    left_floats: Vec<FloatBox>,
    /// Right floats, sorted by top, vertically disjoint.
    right_floats: Vec<FloatBox>,
}

impl FlowRenderSpace {
    /// Create an empty render space that clamps oversized floats.
    pub fn new(container_width: i32) -> Result<Self> {
        Self::with_policy(container_width, OversizePolicy::Clamp)
    }

    /// Create an empty render space with an explicit oversize policy.
    pub fn with_policy(container_width: i32, oversize: OversizePolicy) -> Result<Self> {
        if container_width <= 0 {
            return Err(FlowError::InvalidContainerWidth(container_width));
        }
        Ok(Self {
            container_width,
            oversize,
            left_floats: Vec::new(),
            right_floats: Vec::new(),
        })
    }

    /// Create an empty render space from configuration.
    pub fn from_config(config: &FlowConfig) -> Result<Self> {
        Self::with_policy(config.container_width, config.oversize)
    }

    /// Place a float on `side` no higher than `y`.
    ///
    /// The float starts at the first row at or below `y` where it does
    /// not overlap an earlier float on the same side and where its width
    /// fits beside the opposite side's floats over its whole height.
    /// It is also never placed above the previous float on its side.
    ///
    /// Fails without placing anything if the float's bottom edge would
    /// not be representable.
    pub fn add_float(
        &mut self,
        side: FloatSide,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<Rect> {
        if width <= 0 || height <= 0 {
            return Err(FlowError::InvalidFloatSize { width, height });
        }
        let width = self.fit_width(width)?;
        let top = self.find_top(side, y, width, height);
        if top.checked_add(height).is_none() {
            return Err(FlowError::CoordinateOverflow { top, height });
        }

        let x = match side {
            FloatSide::Left => 0,
            FloatSide::Right => self.container_width - width,
        };
        let rect = Rect::new(x, top, width, height);

        log::debug!("Placed {side:?} float {width}x{height}: requested y={y}, placed y={top}");

        let float_box = FloatBox { side, rect };
        match side {
            FloatSide::Left => self.left_floats.push(float_box),
            FloatSide::Right => self.right_floats.push(float_box),
        }

        Ok(rect)
    }

    /// Placed left floats in placement order.
    pub fn left_floats(&self) -> &[FloatBox] {
        &self.left_floats
    }

    /// Placed right floats in placement order.
    pub fn right_floats(&self) -> &[FloatBox] {
        &self.right_floats
    }

    /// Returns `true` if no floats have been placed.
    pub fn is_empty(&self) -> bool {
        self.left_floats.is_empty() && self.right_floats.is_empty()
    }

    /// Total number of placed floats (left + right).
    pub fn len(&self) -> usize {
        self.left_floats.len() + self.right_floats.len()
    }

    /// Every row at which a float begins or ends, sorted and deduplicated.
    pub fn break_points(&self) -> Vec<i32> {
        let mut points: Vec<i32> = self
            .left_floats
            .iter()
            .chain(self.right_floats.iter())
            .flat_map(|f| [f.top(), f.bottom()])
            .collect();
        points.sort_unstable();
        points.dedup();
        points
    }

    // ---------------------------------------------------------------
    // Internal helpers
    // ---------------------------------------------------------------

    fn floats(&self, side: FloatSide) -> &[FloatBox] {
        match side {
            FloatSide::Left => &self.left_floats,
            FloatSide::Right => &self.right_floats,
        }
    }

    /// Apply the oversize policy to a requested float width.
    fn fit_width(&self, width: i32) -> Result<i32> {
        if width <= self.container_width {
            return Ok(width);
        }
        match self.oversize {
            OversizePolicy::Clamp => {
                log::warn!(
                    "Float width {width} exceeds container width {}; clamping",
                    self.container_width
                );
                Ok(self.container_width)
            },
            OversizePolicy::Reject => Err(FlowError::OversizedFloat {
                width,
                container_width: self.container_width,
            }),
        }
    }

    /// Find the first row at or below `y` where a float fits.
    ///
    /// Candidates only need to be tried at width-change boundaries:
    /// between two boundaries no float ends, so a conflict at one row
    /// persists until the next boundary.
    fn find_top(&self, side: FloatSide, y: i32, width: i32, height: i32) -> i32 {
        let own = self.floats(side);
        let opposite = self.floats(side.opposite());

        let mut top = own.last().map_or(y, |last| y.max(last.top()));
        loop {
            let bottom = top.saturating_add(height);
            let fits = !overlaps_band(own, top, bottom)
                && widest_in_band(opposite, top, bottom) + width <= self.container_width;
            if fits {
                return top;
            }
            log::trace!("{side:?} float {width}x{height} does not fit at y={top}");
            match self.next_width_change(top) {
                WidthChange::At(next) => top = next,
                // Past the last boundary nothing can conflict.
                WidthChange::Unbounded => return top,
            }
        }
    }
}

impl RenderSpace for FlowRenderSpace {
    fn container_width(&self) -> i32 {
        self.container_width
    }

    fn next_width_change(&self, y: i32) -> WidthChange {
        let left = next_boundary(&self.left_floats, y);
        let right = next_boundary(&self.right_floats, y);
        match (left, right) {
            (Some(l), Some(r)) => WidthChange::At(l.min(r)),
            (Some(b), None) | (None, Some(b)) => WidthChange::At(b),
            (None, None) => WidthChange::Unbounded,
        }
    }

    fn add_left_float(&mut self, y: i32, width: i32, height: i32) -> Result<Rect> {
        self.add_float(FloatSide::Left, y, width, height)
    }

    fn add_right_float(&mut self, y: i32, width: i32, height: i32) -> Result<Rect> {
        self.add_float(FloatSide::Right, y, width, height)
    }

    fn next_clear_y(&self, clear: ClearSide) -> i32 {
        [FloatSide::Left, FloatSide::Right]
            .into_iter()
            .filter(|&side| clear.includes(side))
            .filter_map(|side| self.floats(side).iter().map(FloatBox::bottom).max())
            .max()
            .unwrap_or(0)
    }

    fn width_for_vertical_position(&self, y: i32) -> i32 {
        let occupied =
            covering_width(&self.left_floats, y) + covering_width(&self.right_floats, y);
        (self.container_width - occupied).max(0)
    }

    fn advance_for_vertical_position(&self, y: i32) -> i32 {
        covering_width(&self.left_floats, y)
    }
}

// -------------------------------------------------------------------
// Per-side searches
//
// Each side is sorted by top with disjoint extents, so bottoms are
// sorted as well and `partition_point` on the bottom finds the first
// float that has not ended by a given row.
// -------------------------------------------------------------------

/// Index of the first float whose bottom lies below `y`.
fn first_live(floats: &[FloatBox], y: i32) -> usize {
    floats.partition_point(|f| f.bottom() <= y)
}

/// Floats whose extent overlaps `[band_top, band_bottom)`.
fn in_band(
    floats: &[FloatBox],
    band_top: i32,
    band_bottom: i32,
) -> impl Iterator<Item = &FloatBox> {
    floats[first_live(floats, band_top)..]
        .iter()
        .take_while(move |f| f.overlaps_band(band_top, band_bottom))
}

/// Summed width of the floats covering row `y`.
fn covering_width(floats: &[FloatBox], y: i32) -> i32 {
    floats[first_live(floats, y)..]
        .iter()
        .take_while(|f| f.covers(y))
        .map(FloatBox::width)
        .sum()
}

/// Widest float overlapping the band, or 0.
fn widest_in_band(floats: &[FloatBox], band_top: i32, band_bottom: i32) -> i32 {
    in_band(floats, band_top, band_bottom)
        .map(FloatBox::width)
        .max()
        .unwrap_or(0)
}

fn overlaps_band(floats: &[FloatBox], band_top: i32, band_bottom: i32) -> bool {
    in_band(floats, band_top, band_bottom).next().is_some()
}

/// Smallest top or bottom strictly greater than `y`.
fn next_boundary(floats: &[FloatBox], y: i32) -> Option<i32> {
    floats
        .get(first_live(floats, y))
        .map(|f| if f.top() > y { f.top() } else { f.bottom() })
}

// -------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------
