//! Dense depth frames.
//!
//! A [`DepthFrame`] holds three row-major buffers of sensor coordinates
//! (millimetres, right-handed, `z` along the optical axis) with the origin at
//! the upper-left pixel.  The `z` buffer may carry one of the [`pixel`]
//! sentinels instead of a distance.
//!
//! # Example
//!
//! ```rust
//! use depthseg_types::{pixel, DepthFrame};
//!
//! let z = vec![800.0, pixel::NO_DATA, 1200.0, 950.0];
//! let frame = DepthFrame::from_depth(2, 2, z).unwrap();
//!
//! assert_eq!(frame.len(), 4);
//! assert_eq!(frame.index(1, 0), 2);
//! assert!(pixel::is_sentinel(frame.z()[1]));
//! ```

use crate::SegmentationError;

/// Sentinel values a depth buffer may hold instead of a real distance.
///
/// Every sentinel is negative, so "strictly positive" is the only test a
/// consumer needs to tell real depth from invalid data.
pub mod pixel {
    /// The sensor returned no measurement.
    pub const NO_DATA: f32 = -1.0;
    /// The target was too near (saturated return).
    pub const SATURATION: f32 = -2.0;
    /// An invalid value of unknown origin.
    pub const UNKNOWN: f32 = -3.0;
    /// Removed by the host mask before detection.
    pub const MASKED: f32 = -4.0;
    /// Working-copy marker for pixels on the far side of a depth gap.
    /// Never present in caller-owned frames.
    pub const GAP: f32 = -100.0;

    /// True when `z` is one of the negative sentinels rather than a depth.
    pub fn is_sentinel(z: f32) -> bool {
        z < -f32::EPSILON
    }
}

// ────────────────────────────────────────────────────────────────────────────
// DepthFrame
// ────────────────────────────────────────────────────────────────────────────

/// One decoded depth frame.
///
/// The shape is fixed at construction; every buffer is checked against
/// `width * height`.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthFrame {
    width: usize,
    height: usize,
    z: Vec<f32>,
    x: Vec<f32>,
    y: Vec<f32>,
    /// `false` marks a pixel the host wants excluded.
    mask: Option<Vec<bool>>,
}

impl DepthFrame {
    /// Build a frame from its three coordinate buffers.
    ///
    /// # Errors
    ///
    /// [`SegmentationError::EmptyFrame`] when either dimension is zero and
    /// [`SegmentationError::ShapeMismatch`] when a buffer length differs from
    /// `width * height`.
    pub fn new(
        width: usize,
        height: usize,
        z: Vec<f32>,
        x: Vec<f32>,
        y: Vec<f32>,
    ) -> Result<Self, SegmentationError> {
        let expected = checked_len(width, height)?;
        check_buffer("z", expected, z.len())?;
        check_buffer("x", expected, x.len())?;
        check_buffer("y", expected, y.len())?;
        Ok(Self {
            width,
            height,
            z,
            x,
            y,
            mask: None,
        })
    }

    /// Build a frame that carries depth only; `x` and `y` are zero-filled.
    pub fn from_depth(width: usize, height: usize, z: Vec<f32>) -> Result<Self, SegmentationError> {
        let expected = checked_len(width, height)?;
        check_buffer("z", expected, z.len())?;
        Self::new(width, height, z, vec![0.0; expected], vec![0.0; expected])
    }

    /// Attach a mask, consuming and returning the frame.
    pub fn with_mask(mut self, mask: Vec<bool>) -> Result<Self, SegmentationError> {
        self.set_mask(mask)?;
        Ok(self)
    }

    /// Attach or replace the mask.
    ///
    /// # Errors
    ///
    /// [`SegmentationError::ShapeMismatch`] if the mask length is wrong; the
    /// previous mask is kept in that case.
    pub fn set_mask(&mut self, mask: Vec<bool>) -> Result<(), SegmentationError> {
        check_buffer("mask", self.len(), mask.len())?;
        self.mask = Some(mask);
        Ok(())
    }

    /// Remove the mask, if any.
    pub fn clear_mask(&mut self) {
        self.mask = None;
    }

    /// Overwrite masked-out depth values with [`pixel::MASKED`].
    ///
    /// Returns the number of pixels rewritten (zero without a mask).
    pub fn apply_mask(&mut self) -> usize {
        let Some(mask) = &self.mask else {
            return 0;
        };
        let mut count = 0;
        for (z, keep) in self.z.iter_mut().zip(mask) {
            if !keep {
                *z = pixel::MASKED;
                count += 1;
            }
        }
        count
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels, `width * height`.
    pub fn len(&self) -> usize {
        self.z.len()
    }

    /// Never true for a frame built through the checked constructors.
    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }

    /// Row-major buffer index of `(row, col)`.
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    pub fn z(&self) -> &[f32] {
        &self.z
    }

    pub fn x(&self) -> &[f32] {
        &self.x
    }

    pub fn y(&self) -> &[f32] {
        &self.y
    }

    pub fn mask(&self) -> Option<&[bool]> {
        self.mask.as_deref()
    }

    /// Mutable depth access for hosts that decode in place.
    pub fn z_mut(&mut self) -> &mut [f32] {
        &mut self.z
    }
}

fn checked_len(width: usize, height: usize) -> Result<usize, SegmentationError> {
    if width == 0 || height == 0 {
        return Err(SegmentationError::EmptyFrame { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(SegmentationError::ShapeMismatch {
            buffer: "frame".to_string(),
            expected: usize::MAX,
            actual: width.saturating_mul(height),
        })
}

fn check_buffer(name: &str, expected: usize, actual: usize) -> Result<(), SegmentationError> {
    if expected != actual {
        return Err(SegmentationError::ShapeMismatch {
            buffer: name.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
