//! Float-aware flow layout.
//!
//! A [`FlowRenderSpace`] tracks the floats placed against the left and
//! right edges of one fixed-width container and answers the questions a
//! line-layout driver asks while flowing content around them: how wide
//! is the free band at a row, where does it start, where does it next
//! change, and where do the floats of a side end. [`LineCursor`] is a
//! small driver built on the [`RenderSpace`] trait.

pub mod float;
pub mod flow;
pub mod lines;
pub mod space;

#[cfg(test)]
pub(crate) mod test_utils;

// -----------------------------------------------------------------------
// Public re-exports
// -----------------------------------------------------------------------

pub use float::{ClearSide, FloatBox, FloatSide};
pub use flow::FlowRenderSpace;
pub use lines::{BandSpan, LineCursor, LineSlot, bands, free_band};
pub use space::{LineBand, RenderSpace, WidthChange};
