//! Detector parameters.

use depthseg_types::SegmentationError;

/// Default foreground threshold (mm).
pub const DEFAULT_ZKEY: f64 = 1500.0;
/// Default minimum depth step that separates two objects (mm).
pub const DEFAULT_MIN_GAP: f64 = 100.0;
/// Default minimum obstacle size (pixels).
pub const DEFAULT_MIN_SIZE: usize = 500;
/// Default far clamp applied to background pixels (mm).
pub const DEFAULT_MAX_DEPTH: f64 = 10_000.0;
/// Default upper bound (exclusive) on provisional label ids.
pub const DEFAULT_MAX_LABELS: usize = i16::MAX as usize;

/// Tuning parameters for [`ObstacleDetector`][crate::detector::ObstacleDetector].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorConfig {
    /// Pixels with `0 < z <= zkey` are foreground.
    pub zkey: f64,
    /// A neighbor nearer by more than this marks a gap.
    pub min_gap: f64,
    /// Regions smaller than this are treated as noise.
    pub min_size: usize,
    /// Background pixels are clamped to `max_depth - 1` before gap marking.
    pub max_depth: f64,
    /// Provisional label ids must stay strictly below this value.
    pub max_labels: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            zkey: DEFAULT_ZKEY,
            min_gap: DEFAULT_MIN_GAP,
            min_size: DEFAULT_MIN_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
            max_labels: DEFAULT_MAX_LABELS,
        }
    }
}

impl DetectorConfig {
    /// Check every parameter.
    ///
    /// # Errors
    ///
    /// [`SegmentationError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), SegmentationError> {
        if !self.zkey.is_finite() || self.zkey <= 0.0 {
            return Err(invalid(format!("zkey must be positive, got {}", self.zkey)));
        }
        if !self.min_gap.is_finite() || self.min_gap < 0.0 {
            return Err(invalid(format!(
                "min_gap must be non-negative, got {}",
                self.min_gap
            )));
        }
        if self.min_size == 0 {
            return Err(invalid("min_size must be at least 1".to_string()));
        }
        // Clamped background sits at `max_depth - 1` and must stay beyond zkey.
        if !self.max_depth.is_finite() || self.max_depth - 1.0 <= self.zkey {
            return Err(invalid(format!(
                "max_depth ({}) must exceed zkey ({}) by more than 1",
                self.max_depth, self.zkey
            )));
        }
        if self.max_labels < 2 || self.max_labels > u32::MAX as usize {
            return Err(invalid(format!(
                "max_labels must be in 2..={}, got {}",
                u32::MAX,
                self.max_labels
            )));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> SegmentationError {
    SegmentationError::InvalidConfig(msg)
}
