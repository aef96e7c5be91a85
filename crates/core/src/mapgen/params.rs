//! Generation parameters and fail-fast validation.
//! Validation runs before any grid is allocated, so a rejected parameter set
//! never produces a partially built level.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tunable inputs for one generation run. Immutable once handed to a
/// [`super::LevelGenerator`]; a new run may use new values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationParams {
    pub width: usize,
    pub height: usize,
    /// Margin forced to `Wall` unconditionally at initialization, never
    /// subject to randomization.
    pub border_width: usize,
    /// Probability in percent that a non-border cell starts as `Wall`.
    pub density: u32,
    /// Number of relaxation passes; 1 to 10 is the useful range, 0 skips
    /// smoothing entirely.
    pub smoothing_passes: u32,
    /// Connected regions smaller than this are reclassified during cleanup;
    /// 0 disables the cleanup stage.
    pub min_region_size: usize,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            width: 96,
            height: 64,
            border_width: 3,
            density: 50,
            smoothing_passes: 3,
            min_region_size: 32,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParamsError {
    #[error("level dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },
    #[error("border width {border_width} must be smaller than half the smaller dimension ({dimension})")]
    BorderTooWide { border_width: usize, dimension: usize },
    #[error("density {density} must be a percentage within 0..=100")]
    DensityOutOfRange { density: u32 },
}

impl GenerationParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.width == 0 || self.height == 0 {
            return Err(ParamsError::ZeroDimension { width: self.width, height: self.height });
        }
        let smaller_dimension = self.width.min(self.height);
        if self.border_width * 2 >= smaller_dimension {
            return Err(ParamsError::BorderTooWide {
                border_width: self.border_width,
                dimension: smaller_dimension,
            });
        }
        if self.density > 100 {
            return Err(ParamsError::DensityOutOfRange { density: self.density });
        }
        Ok(())
    }
}
