//! Line placement on top of a [`RenderSpace`].
//!
//! A line of text or an inline image occupies a band of rows. Its usable
//! width is the narrowest free band over all of those rows, so a line
//! that would collide with a float starting partway down is shortened
//! (or shifted below it) just like one that starts beside the float.

use flowspace_types::error::{FlowError, Result};
use flowspace_types::geometry::Rect;

use crate::float::{ClearSide, FloatSide};
use crate::space::{LineBand, RenderSpace, WidthChange};

/// A run of rows over which the free band is constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandSpan {
    pub top: i32,
    /// Exclusive.
    pub bottom: i32,
    pub band: LineBand,
}

/// Split `[from, to)` into spans of constant free band.
///
/// Returns an empty list when `to <= from`.
pub fn bands<R: RenderSpace + ?Sized>(space: &R, from: i32, to: i32) -> Vec<BandSpan> {
    let mut spans = Vec::new();
    let mut top = from;
    while top < to {
        let bottom = space.next_width_change(top).min_with(to);
        spans.push(BandSpan {
            top,
            bottom,
            band: space.band_at(top),
        });
        top = bottom;
    }
    spans
}

/// The band that is free on every row of `[top, top + height)`.
pub fn free_band<R: RenderSpace + ?Sized>(space: &R, top: i32, height: i32) -> LineBand {
    let spans = bands(space, top, top.saturating_add(height));
    let advance = spans.iter().map(|s| s.band.advance).max().unwrap_or(0);
    let right = spans
        .iter()
        .map(|s| s.band.right())
        .min()
        .unwrap_or_else(|| space.container_width());
    LineBand::new(advance, (right - advance).max(0))
}

/// Where a line was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSlot {
    pub y: i32,
    pub advance: i32,
    pub width: i32,
    pub height: i32,
}

impl LineSlot {
    /// The slot as a container-relative rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.advance, self.y, self.width, self.height)
    }
}

/// Walks a render space top to bottom, handing out line slots.
///
/// Floats are placed at the cursor's current row and do not move the
/// cursor; lines move it below themselves.
pub struct LineCursor<'a, R: RenderSpace + ?Sized> {
    space: &'a mut R,
    y: i32,
}

impl<'a, R: RenderSpace + ?Sized> LineCursor<'a, R> {
    pub fn new(space: &'a mut R, y: i32) -> Self {
        Self { space, y }
    }

    /// Current row.
    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn space(&self) -> &R {
        &*self.space
    }

    /// Reserve the first line of `height` rows at or below the cursor
    /// that has at least `min_width` free on every row.
    ///
    /// If no band is ever wide enough, the line goes below all floats
    /// where the full container width is free.
    pub fn next_line(&mut self, height: i32, min_width: i32) -> Result<LineSlot> {
        if height <= 0 {
            return Err(FlowError::InvalidLineHeight(height));
        }

        let mut y = self.y;
        let band = loop {
            let band = free_band(&*self.space, y, height);
            if band.fits(min_width) {
                break band;
            }
            match self.space.next_width_change(y) {
                WidthChange::At(next) => y = next,
                WidthChange::Unbounded => break band,
            }
        };

        if y != self.y {
            log::trace!("Line of height {height} pushed from y={} to y={y}", self.y);
        }

        let slot = LineSlot {
            y,
            advance: band.advance,
            width: band.width,
            height,
        };
        self.y = y.saturating_add(height);
        Ok(slot)
    }

    /// Move the cursor below every float on the cleared side(s).
    pub fn clear(&mut self, clear: ClearSide) -> i32 {
        self.y = self.y.max(self.space.next_clear_y(clear));
        self.y
    }

    /// Place a float at the cursor's row.
    pub fn place_float(&mut self, side: FloatSide, width: i32, height: i32) -> Result<Rect> {
        match side {
            FloatSide::Left => self.space.add_left_float(self.y, width, height),
            FloatSide::Right => self.space.add_right_float(self.y, width, height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::FlowRenderSpace;
    use crate::test_utils::{SpaceCall, StripedSpace};

    #[test]
    fn bands_on_empty_space() {
        let space = FlowRenderSpace::new(100).unwrap();
        let spans = bands(&space, 0, 40);
        assert_eq!(
            spans,
            vec![BandSpan {
                top: 0,
                bottom: 40,
                band: LineBand::new(0, 100)
            }]
        );
        assert!(bands(&space, 10, 10).is_empty());
        assert!(bands(&space, 10, 5).is_empty());
    }

    #[test]
    fn bands_split_at_float_edges() {
        let mut space = FlowRenderSpace::new(100).unwrap();
        space.add_left_float(10, 30, 10).unwrap();
        space.add_right_float(15, 20, 20).unwrap();
        let spans = bands(&space, 0, 40);
        let summary: Vec<_> = spans
            .iter()
            .map(|s| (s.top, s.bottom, s.band.advance, s.band.width))
            .collect();
        assert_eq!(
            summary,
            vec![
                (0, 10, 0, 100),
                (10, 15, 30, 70),
                (15, 20, 30, 50),
                (20, 35, 0, 80),
                (35, 40, 0, 100),
            ]
        );
    }

    #[test]
    fn free_band_takes_narrowest_rows() {
        let mut space = FlowRenderSpace::new(100).unwrap();
        space.add_left_float(10, 30, 10).unwrap();
        space.add_right_float(15, 20, 20).unwrap();
        // Rows 5..25 see both floats.
        assert_eq!(free_band(&space, 5, 20), LineBand::new(30, 50));
        // Rows 0..10 are clear.
        assert_eq!(free_band(&space, 0, 10), LineBand::new(0, 100));
    }

    #[test]
    fn line_beside_float() {
        let mut space = FlowRenderSpace::new(100).unwrap();
        let mut cursor = LineCursor::new(&mut space, 0);
        cursor.place_float(FloatSide::Left, 30, 25).unwrap();

        let first = cursor.next_line(10, 20).unwrap();
        assert_eq!(first.rect(), Rect::new(30, 0, 70, 10));
        let second = cursor.next_line(10, 20).unwrap();
        assert_eq!(second.rect(), Rect::new(30, 10, 70, 10));
        // This one straddles the float's bottom edge.
        let third = cursor.next_line(10, 20).unwrap();
        assert_eq!(third.rect(), Rect::new(30, 20, 70, 10));
        let fourth = cursor.next_line(10, 20).unwrap();
        assert_eq!(fourth.rect(), Rect::new(0, 30, 100, 10));
        assert_eq!(cursor.y(), 40);
    }

    #[test]
    fn line_skips_bands_that_are_too_narrow() {
        let mut space = FlowRenderSpace::new(100).unwrap();
        space.add_left_float(0, 60, 10).unwrap();
        space.add_right_float(0, 30, 20).unwrap();
        let mut cursor = LineCursor::new(&mut space, 0);
        // Needs 50: [0,10) has 10, [10,20) has 70.
        let slot = cursor.next_line(5, 50).unwrap();
        assert_eq!(slot.rect(), Rect::new(0, 10, 70, 5));
    }

    #[test]
    fn unreachable_min_width_goes_below_all_floats() {
        let mut space = FlowRenderSpace::new(100).unwrap();
        space.add_left_float(0, 10, 10).unwrap();
        space.add_right_float(5, 10, 30).unwrap();
        let mut cursor = LineCursor::new(&mut space, 0);
        let slot = cursor.next_line(8, 500).unwrap();
        assert_eq!(slot.rect(), Rect::new(0, 35, 100, 8));
    }

    #[test]
    fn clear_moves_cursor_down_only() {
        let mut space = FlowRenderSpace::new(100).unwrap();
        space.add_left_float(0, 10, 40).unwrap();
        space.add_right_float(0, 10, 20).unwrap();
        let mut cursor = LineCursor::new(&mut space, 30);
        assert_eq!(cursor.clear(ClearSide::Right), 30);
        assert_eq!(cursor.clear(ClearSide::Both), 40);
        assert_eq!(cursor.y(), 40);
    }

    #[test]
    fn rejects_non_positive_line_height() {
        let mut space = FlowRenderSpace::new(100).unwrap();
        let mut cursor = LineCursor::new(&mut space, 0);
        assert!(matches!(
            cursor.next_line(0, 10),
            Err(FlowError::InvalidLineHeight(0))
        ));
        assert_eq!(cursor.y(), 0);
    }

    #[test]
    fn cursor_drives_any_render_space() {
        let mut space = StripedSpace::new(80, vec![(0, 10, 20, 40), (10, 20, 0, 80)]);
        let mut cursor = LineCursor::new(&mut space, 0);
        let slot = cursor.next_line(10, 50).unwrap();
        assert_eq!(slot.rect(), Rect::new(0, 10, 80, 10));

        cursor.place_float(FloatSide::Right, 15, 5).unwrap();
        cursor.clear(ClearSide::Left);

        assert_eq!(
            space.calls(),
            vec![
                SpaceCall::AddFloat {
                    side: FloatSide::Right,
                    y: 20,
                    width: 15,
                    height: 5,
                },
                SpaceCall::Clear(ClearSide::Left),
            ]
        );
    }
}
