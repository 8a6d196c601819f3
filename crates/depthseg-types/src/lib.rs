//! `depthseg-types` – shared data model for the depth segmentation stack.
//!
//! # Modules
//!
//! - [`frame`] – [`DepthFrame`][frame::DepthFrame]: the per-pixel X/Y/Z
//!   buffers handed to the detector, plus the [`pixel`] sentinel values a
//!   depth buffer may carry instead of a real distance.
//! - [`obstacle`] – [`Obstacle`][obstacle::Obstacle] and its geometry
//!   records, the immutable output of one detection cycle.
//!
//! [`SegmentationError`] is the error type shared by every layer that
//! validates or segments a frame.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod frame;
pub mod obstacle;

pub use frame::{pixel, DepthFrame};
pub use obstacle::{BoundingBox, BoundingVolume, Obstacle, Point2, Point3};

/// Errors raised while validating a frame or running a detection cycle.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SegmentationError {
    /// The frame has no pixels along at least one axis.
    #[error("Empty frame: {width}x{height}")]
    EmptyFrame { width: usize, height: usize },

    /// A buffer length does not match `width * height`.
    #[error("Shape mismatch on {buffer}: expected {expected} values, got {actual}")]
    ShapeMismatch {
        buffer: String,
        expected: usize,
        actual: usize,
    },

    /// More provisional labels were needed than the detector allows.
    /// The whole frame is rejected.
    #[error("Label capacity exceeded: provisional labels must stay below {limit}")]
    CapacityExceeded { limit: usize },

    /// A detector parameter is out of range.
    #[error("Invalid detector configuration: {0}")]
    InvalidConfig(String),
}
