//! [`DetectionLoop`] – pulls frames, runs the detector, publishes reports.
//!
//! Each cycle:
//!
//! 1. **Receive** – ask the [`FrameSource`] for the next frame; `None` ends
//!    the stream.
//! 2. **Screen** – frames one pixel wide or tall are not organised rasters
//!    and are skipped.
//! 3. **Mask** – when `use_mask` is set, the configured mask is attached and
//!    masked pixels are overwritten with the `MASKED` sentinel.
//! 4. **Detect** – run [`ObstacleDetector::detect`].  A rejected frame is
//!    logged and counted; the loop carries on.
//! 5. **Publish** – hand a [`DetectionReport`] to the [`ObstacleSink`].
//!
//! Source and sink failures are the only fatal errors.
//!
//! # Example
//!
//! ```rust
//! use std::collections::VecDeque;
//! use depthseg_runtime::config::DetectorSettings;
//! use depthseg_runtime::detection_loop::{
//!     DetectionLoop, DetectionReport, FrameSource, LoopError, ObstacleSink,
//! };
//! use depthseg_types::DepthFrame;
//!
//! struct Frames(VecDeque<DepthFrame>);
//! impl FrameSource for Frames {
//!     fn next_frame(&mut self) -> Result<Option<DepthFrame>, LoopError> {
//!         Ok(self.0.pop_front())
//!     }
//! }
//!
//! struct Count(usize);
//! impl ObstacleSink for Count {
//!     fn publish(&mut self, report: &DetectionReport) -> Result<(), LoopError> {
//!         self.0 += report.obstacles.len();
//!         Ok(())
//!     }
//! }
//!
//! let frame = DepthFrame::from_depth(4, 4, vec![800.0; 16]).unwrap();
//! let settings = DetectorSettings { min_size: 1, ..Default::default() };
//! let mut detection = DetectionLoop::new(settings).unwrap();
//! let stats = detection
//!     .run(&mut Frames(VecDeque::from([frame])), &mut Count(0))
//!     .unwrap();
//! assert_eq!(stats.published, 1);
//! ```

use depthseg_perception::ObstacleDetector;
use depthseg_types::{DepthFrame, Obstacle};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{ConfigError, DetectorSettings};

// ─────────────────────────────────────────────────────────────────────────────
// Seams
// ─────────────────────────────────────────────────────────────────────────────

/// Fatal loop errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoopError {
    #[error("Frame source failed: {0}")]
    Source(String),
    #[error("Obstacle sink failed: {0}")]
    Sink(String),
}

/// Supplies depth frames, e.g. from a camera driver or a recording.
pub trait FrameSource {
    /// Next frame, or `None` at end of stream.
    fn next_frame(&mut self) -> Result<Option<DepthFrame>, LoopError>;
}

/// Receives one report per processed frame.
pub trait ObstacleSink {
    fn publish(&mut self, report: &DetectionReport) -> Result<(), LoopError>;
}

/// Owned result of one cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionReport {
    /// 1-based count of frames received so far, skipped ones included.
    pub sequence: u64,
    pub obstacles: Vec<Obstacle>,
    /// Final label raster, row-major `width * height`.
    pub labels: Vec<u32>,
    pub width: usize,
    pub height: usize,
}

/// Counters accumulated by [`DetectionLoop`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    pub frames: u64,
    pub published: u64,
    /// Frames the detector refused (capacity).
    pub rejected: u64,
    /// Frames that were not organised rasters.
    pub skipped: u64,
}

// ─────────────────────────────────────────────────────────────────────────────
// DetectionLoop
// ─────────────────────────────────────────────────────────────────────────────

/// Drives an [`ObstacleDetector`] from a [`FrameSource`] to an [`ObstacleSink`].
#[derive(Debug)]
pub struct DetectionLoop {
    detector: ObstacleDetector,
    use_mask: bool,
    mask: Option<Vec<bool>>,
    stats: LoopStats,
}

impl DetectionLoop {
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] when the settings fail validation.
    pub fn new(settings: DetectorSettings) -> Result<Self, ConfigError> {
        let config = settings.detector_config()?;
        let detector = ObstacleDetector::new(config).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(Self {
            detector,
            use_mask: settings.use_mask,
            mask: None,
            stats: LoopStats::default(),
        })
    }

    /// Mask applied to every frame when `use_mask` is set (`false` = drop
    /// the pixel).
    pub fn with_mask(mut self, mask: Vec<bool>) -> Self {
        self.mask = Some(mask);
        self
    }

    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    pub fn detector(&self) -> &ObstacleDetector {
        &self.detector
    }

    /// Process one frame.  Returns `false` once the source is exhausted.
    pub fn run_once<S, K>(&mut self, source: &mut S, sink: &mut K) -> Result<bool, LoopError>
    where
        S: FrameSource + ?Sized,
        K: ObstacleSink + ?Sized,
    {
        let Some(mut frame) = source.next_frame()? else {
            return Ok(false);
        };
        self.stats.frames += 1;
        let sequence = self.stats.frames;

        if frame.width() <= 1 || frame.height() <= 1 {
            debug!(sequence, width = frame.width(), height = frame.height(), "skipping unorganised frame");
            self.stats.skipped += 1;
            return Ok(true);
        }

        if self.use_mask {
            self.mask_frame(&mut frame, sequence);
        }

        let report = match self.detector.detect(&frame) {
            Ok(detection) => DetectionReport {
                sequence,
                obstacles: detection.obstacles.to_vec(),
                labels: detection.labels.to_vec(),
                width: detection.width,
                height: detection.height,
            },
            Err(e) => {
                warn!(sequence, error = %e, "frame rejected by detector");
                self.stats.rejected += 1;
                return Ok(true);
            }
        };

        debug!(sequence, obstacles = report.obstacles.len(), "frame processed");
        for obstacle in &report.obstacles {
            debug!(sequence, "{obstacle}");
        }
        sink.publish(&report)?;
        self.stats.published += 1;
        Ok(true)
    }

    /// Process frames until the source is exhausted.
    pub fn run<S, K>(&mut self, source: &mut S, sink: &mut K) -> Result<LoopStats, LoopError>
    where
        S: FrameSource + ?Sized,
        K: ObstacleSink + ?Sized,
    {
        info!(use_mask = self.use_mask, "detection loop started");
        while self.run_once(source, sink)? {}
        info!(
            frames = self.stats.frames,
            published = self.stats.published,
            rejected = self.stats.rejected,
            skipped = self.stats.skipped,
            "detection loop stopped"
        );
        Ok(self.stats)
    }

    /// Attach the configured mask, then apply whatever mask the frame now
    /// carries.  A mask the source attached itself survives a configured
    /// mask of the wrong shape.
    fn mask_frame(&self, frame: &mut DepthFrame, sequence: u64) {
        if let Some(mask) = &self.mask
            && let Err(e) = frame.set_mask(mask.clone())
        {
            warn!(
                sequence,
                error = %e,
                source_mask = frame.mask().is_some(),
                "configured mask does not match frame shape; skipping it"
            );
        }
        let masked = frame.apply_mask();
        if masked > 0 {
            debug!(sequence, masked, "mask applied");
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
