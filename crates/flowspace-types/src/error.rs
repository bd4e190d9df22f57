//! Error types for FlowSpace.

use std::io;

/// Errors produced by the FlowSpace layout engine.
///
/// Every variant is a caller contract violation or a configuration
/// problem. Geometric queries themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("invalid container width: {0} (must be positive)")]
    InvalidContainerWidth(i32),

    #[error("invalid float size: {width}x{height} (both must be positive)")]
    InvalidFloatSize { width: i32, height: i32 },

    #[error("float width {width} exceeds container width {container_width}")]
    OversizedFloat { width: i32, container_width: i32 },

    #[error("float at y={top} with height {height} extends past the coordinate range")]
    CoordinateOverflow { top: i32, height: i32 },

    #[error("invalid line height: {0} (must be positive)")]
    InvalidLineHeight(i32),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FlowError>;
