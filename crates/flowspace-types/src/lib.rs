//! Foundation types for FlowSpace.
//!
//! This crate contains the types shared by all FlowSpace crates:
//! integer geometry, layout configuration and error types.

pub mod config;
pub mod error;
pub mod geometry;
