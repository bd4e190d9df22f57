//! Shared test utilities for the layout crate.
//!
//! Provides a [`StripedSpace`] that answers queries from a fixed list of
//! bands and records every mutation or clear request, so drivers can be
//! tested without real float placement.

use std::cell::RefCell;

use flowspace_types::error::Result;
use flowspace_types::geometry::Rect;

use crate::float::{ClearSide, FloatSide};
use crate::space::{RenderSpace, WidthChange};

/// A recorded call on the striped space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceCall {
    AddFloat {
        side: FloatSide,
        y: i32,
        width: i32,
        height: i32,
    },
    Clear(ClearSide),
}

/// A render space with fixed bands: `(top, bottom, advance, width)`.
///
/// Rows outside every stripe report the full container width. Floats
/// are returned at the requested row and do not change the bands; clear
/// requests resolve to the bottom of the last stripe.
pub struct StripedSpace {
    container_width: i32,
    stripes: Vec<(i32, i32, i32, i32)>,
    calls: RefCell<Vec<SpaceCall>>,
}

impl StripedSpace {
    pub fn new(container_width: i32, stripes: Vec<(i32, i32, i32, i32)>) -> Self {
        Self {
            container_width,
            stripes,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Every call recorded so far.
    pub fn calls(&self) -> Vec<SpaceCall> {
        self.calls.borrow().clone()
    }

    fn stripe_at(&self, y: i32) -> Option<&(i32, i32, i32, i32)> {
        self.stripes
            .iter()
            .find(|(top, bottom, _, _)| *top <= y && y < *bottom)
    }

    fn record_float(&mut self, side: FloatSide, y: i32, width: i32, height: i32) -> Rect {
        self.calls.get_mut().push(SpaceCall::AddFloat {
            side,
            y,
            width,
            height,
        });
        let x = match side {
            FloatSide::Left => 0,
            FloatSide::Right => self.container_width - width,
        };
        Rect::new(x, y, width, height)
    }
}

impl RenderSpace for StripedSpace {
    fn container_width(&self) -> i32 {
        self.container_width
    }

    fn next_width_change(&self, y: i32) -> WidthChange {
        self.stripes
            .iter()
            .flat_map(|&(top, bottom, _, _)| [top, bottom])
            .filter(|&b| b > y)
            .min()
            .map_or(WidthChange::Unbounded, WidthChange::At)
    }

    fn add_left_float(&mut self, y: i32, width: i32, height: i32) -> Result<Rect> {
        Ok(self.record_float(FloatSide::Left, y, width, height))
    }

    fn add_right_float(&mut self, y: i32, width: i32, height: i32) -> Result<Rect> {
        Ok(self.record_float(FloatSide::Right, y, width, height))
    }

    fn next_clear_y(&self, clear: ClearSide) -> i32 {
        self.calls.borrow_mut().push(SpaceCall::Clear(clear));
        self.stripes.last().map_or(0, |&(_, bottom, _, _)| bottom)
    }

    fn width_for_vertical_position(&self, y: i32) -> i32 {
        self.stripe_at(y)
            .map_or(self.container_width, |&(_, _, _, width)| width)
    }

    fn advance_for_vertical_position(&self, y: i32) -> i32 {
        self.stripe_at(y).map_or(0, |&(_, _, advance, _)| advance)
    }
}
