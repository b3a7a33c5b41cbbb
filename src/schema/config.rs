//! Configuration types for Chroma Life simulations.

use serde::{Deserialize, Serialize};

/// Color-combination policy applied when a cell is born or survives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    /// Average the neighbor colors, then push dim results toward a
    /// saturated hue: +100 on the dominant channel, -50 on the other two.
    #[default]
    Vibrant,
    /// Average the neighbor colors; dim results lift only the dominant
    /// channel, capped at 255.
    Average,
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Color policy for newborn and surviving cells.
    #[serde(default)]
    pub blend_mode: BlendMode,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 128,
            height: 128,
            blend_mode: BlendMode::Vibrant,
        }
    }
}

impl SimulationConfig {
    /// Get total grid size (width * height).
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.width * self.height
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("grid dimensions (width, height) must be non-zero")]
    InvalidDimensions,
}
