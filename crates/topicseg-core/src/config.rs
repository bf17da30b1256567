//! Segmentation configuration.

use serde::{Deserialize, Serialize};

use crate::error::SegmentError;

/// Configuration for boundary detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentConfig {
    /// Window size for local similarity ranking
    #[serde(default = "default_window")]
    pub window: usize,

    /// Gradient cutoff is mean + std_coeff * standard deviation
    #[serde(default = "default_std_coeff")]
    pub std_coeff: f64,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            window: default_window(),
            std_coeff: default_std_coeff(),
        }
    }
}

fn default_window() -> usize {
    4
}
fn default_std_coeff() -> f64 {
    1.0
}

impl SegmentConfig {
    /// Validate the configuration.
    ///
    /// A window larger than the unit is clipped later, not rejected here.
    pub fn validate(&self) -> Result<(), SegmentError> {
        if self.window == 0 {
            return Err(SegmentError::InvalidConfig(
                "window must be at least 1".to_string(),
            ));
        }
        if !self.std_coeff.is_finite() {
            return Err(SegmentError::InvalidConfig(
                "std_coeff must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
