//! Layout configuration loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FlowError, Result};

/// What to do with a float wider than its container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OversizePolicy {
    /// Shrink the float to the container width.
    #[default]
    Clamp,
    /// Refuse the placement with [`FlowError::OversizedFloat`].
    Reject,
}

/// Configuration for a render space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Container width in layout units.
    pub container_width: i32,
    /// Handling of floats wider than the container.
    pub oversize: OversizePolicy,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            container_width: 480,
            oversize: OversizePolicy::Clamp,
        }
    }
}

impl FlowConfig {
    /// Parse a configuration from a TOML string.
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: FlowConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        log::debug!("Loading layout config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Check values that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.container_width <= 0 {
            return Err(FlowError::Config(format!(
                "container_width must be positive, got {}",
                self.container_width
            )));
        }
        Ok(())
    }
}
