//! Obstacle detector.
//!
//! [`ObstacleDetector`] owns every buffer a detection cycle needs and chains
//! the kernel stages:
//!
//! ```text
//! frame ─► split_foreground ─► GapContourMarker ─► clip_beyond
//!       ─► ComponentLabeler ─► EquivalenceResolver ─► BlobMerger
//!       ─► GapRepairer ─► ObstacleBuilder ─► obstacles + label raster
//! ```
//!
//! Buffers are reset at the start of each cycle and reused, so a detector
//! fed frames of a constant shape stops allocating after the first one.
//! `detect` takes `&mut self`; one instance serves one cycle at a time.
//!
//! # Example
//!
//! ```rust
//! use depthseg_perception::{DetectorConfig, ObstacleDetector};
//! use depthseg_types::DepthFrame;
//!
//! // 12x12 frame, a 6x6 block at 900 mm on a far background.
//! let (w, h) = (12, 12);
//! let mut z = vec![5000.0_f32; w * h];
//! for row in 3..9 {
//!     for col in 3..9 {
//!         z[row * w + col] = 900.0;
//!     }
//! }
//! let frame = DepthFrame::from_depth(w, h, z).unwrap();
//!
//! let config = DetectorConfig { min_size: 10, ..Default::default() };
//! let mut detector = ObstacleDetector::new(config).unwrap();
//! let detection = detector.detect(&frame).unwrap();
//!
//! assert_eq!(detection.obstacles.len(), 1);
//! assert_eq!(detection.obstacles[0].size, 36);
//! assert_eq!(detection.labels[4 * w + 4], 1);
//! ```

use depthseg_types::{DepthFrame, Obstacle, SegmentationError};
use tracing::{debug, instrument, warn};

use crate::blob::{Blob, BlobMerger};
use crate::builder::ObstacleBuilder;
use crate::config::DetectorConfig;
use crate::equivalence::EquivalenceResolver;
use crate::foreground::{clip_beyond, split_foreground};
use crate::gap::GapContourMarker;
use crate::labeling::{ComponentLabeler, LabelInput};
use crate::repair::{GapRepairer, RepairInput};

// ────────────────────────────────────────────────────────────────────────────
// Results
// ────────────────────────────────────────────────────────────────────────────

/// Counters describing one cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleStats {
    /// Pixels marked as the far side of a gap.
    pub gap_pixels: usize,
    /// Labels allocated by the first pass.
    pub provisional_labels: usize,
    /// Labels folded into a smaller equivalent label.
    pub merged_labels: usize,
    /// Gap pixels reassigned to a neighboring region.
    pub repaired_pixels: usize,
    /// Regions dropped by the size filter.
    pub filtered_regions: usize,
    /// Obstacles emitted.
    pub obstacles: usize,
}

/// Borrowed view of a cycle's output.
#[derive(Debug, Clone, Copy)]
pub struct Detection<'a> {
    /// Obstacles in ascending canonical-label order.
    pub obstacles: &'a [Obstacle],
    /// Final raster: `0` = background, `k` = obstacle `k - 1`.
    pub labels: &'a [u32],
    pub width: usize,
    pub height: usize,
    pub stats: CycleStats,
}

// ────────────────────────────────────────────────────────────────────────────
// ObstacleDetector
// ────────────────────────────────────────────────────────────────────────────

/// Segments depth frames into obstacles.
#[derive(Debug)]
pub struct ObstacleDetector {
    config: DetectorConfig,
    width: usize,
    height: usize,
    clamped: Vec<f32>,
    fore: Vec<f32>,
    separated: Vec<f32>,
    labels: Vec<u32>,
    snapshot: Vec<u32>,
    remap: Vec<u32>,
    blobs: Vec<Blob>,
    equivalence: EquivalenceResolver,
    obstacles: Vec<Obstacle>,
    stats: CycleStats,
}

impl ObstacleDetector {
    /// Create a detector.
    ///
    /// # Errors
    ///
    /// [`SegmentationError::InvalidConfig`] when `config` fails validation.
    pub fn new(config: DetectorConfig) -> Result<Self, SegmentationError> {
        config.validate()?;
        Ok(Self {
            config,
            width: 0,
            height: 0,
            clamped: Vec::new(),
            fore: Vec::new(),
            separated: Vec::new(),
            labels: Vec::new(),
            snapshot: Vec::new(),
            remap: Vec::new(),
            blobs: Vec::new(),
            equivalence: EquivalenceResolver::new(),
            obstacles: Vec::new(),
            stats: CycleStats::default(),
        })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Replace the configuration; takes effect on the next cycle.
    pub fn set_config(&mut self, config: DetectorConfig) -> Result<(), SegmentationError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Obstacles from the most recent successful cycle.
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Final label raster from the most recent cycle (all zero after a
    /// rejected frame).
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    pub fn stats(&self) -> CycleStats {
        self.stats
    }

    /// Run one detection cycle on `frame`.
    ///
    /// # Errors
    ///
    /// [`SegmentationError::CapacityExceeded`] when the frame needs more
    /// provisional labels than `max_labels` allows.  The frame is rejected
    /// as a whole: obstacles are cleared and the raster is zeroed, and the
    /// detector stays usable for the next frame.
    #[instrument(skip_all, fields(width = frame.width(), height = frame.height()))]
    pub fn detect(&mut self, frame: &DepthFrame) -> Result<Detection<'_>, SegmentationError> {
        self.reset(frame.width(), frame.height());
        let (width, height) = (self.width, self.height);
        let cfg = self.config;

        split_foreground(frame.z(), cfg.zkey, cfg.max_depth, &mut self.clamped, &mut self.fore);

        let marker = GapContourMarker::new(cfg.min_gap);
        self.stats.gap_pixels = marker.mark(width, height, &self.clamped, &mut self.separated);
        clip_beyond(&mut self.separated, frame.z(), cfg.zkey);

        let input = LabelInput {
            width,
            height,
            fore: &self.separated,
            x: frame.x(),
            y: frame.y(),
        };
        let labeled = ComponentLabeler::new(cfg.max_labels).label(
            &input,
            &mut self.labels,
            &mut self.blobs,
            &mut self.equivalence,
        );
        let provisional = match labeled {
            Ok(count) => count,
            Err(e) => {
                warn!(error = %e, "frame rejected");
                self.labels.fill(0);
                self.blobs.clear();
                self.stats = CycleStats::default();
                return Err(e);
            }
        };
        self.stats.provisional_labels = provisional;

        self.equivalence.remap_table(&mut self.remap);
        self.stats.merged_labels = BlobMerger::merge(&mut self.blobs, &self.remap);
        BlobMerger::relabel(&mut self.labels, &self.remap);

        self.snapshot.clear();
        self.snapshot.extend_from_slice(&self.labels);
        let input = RepairInput {
            width,
            height,
            separated: &self.separated,
            fore: &self.fore,
            x: frame.x(),
            y: frame.y(),
            snapshot: &self.snapshot,
        };
        self.stats.repaired_pixels =
            GapRepairer::new(cfg.min_gap).repair(&input, &mut self.labels, &mut self.blobs);

        ObstacleBuilder::new(cfg.min_size).build(&self.blobs, &mut self.obstacles, &mut self.remap);
        ObstacleBuilder::relabel(&mut self.labels, &self.remap);

        self.stats.obstacles = self.obstacles.len();
        self.stats.filtered_regions = provisional
            .saturating_sub(self.stats.merged_labels)
            .saturating_sub(self.obstacles.len());

        debug!(
            gap_pixels = self.stats.gap_pixels,
            provisional = self.stats.provisional_labels,
            merged = self.stats.merged_labels,
            repaired = self.stats.repaired_pixels,
            filtered = self.stats.filtered_regions,
            obstacles = self.stats.obstacles,
            "detection cycle complete"
        );

        Ok(Detection {
            obstacles: &self.obstacles,
            labels: &self.labels,
            width,
            height,
            stats: self.stats,
        })
    }

    fn reset(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.labels.clear();
        self.labels.resize(width * height, 0);
        self.obstacles.clear();
        self.stats = CycleStats::default();
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use depthseg_types::pixel;

    const FAR: f32 = 5000.0;

    /// Frame builder: background at `FAR`, `x = col`, `y = row` in mm.
    struct Canvas {
        width: usize,
        height: usize,
        z: Vec<f32>,
    }

    impl Canvas {
        fn new(width: usize, height: usize) -> Self {
            Self {
                width,
                height,
                z: vec![FAR; width * height],
            }
        }

        fn fill(mut self, col0: usize, row0: usize, w: usize, h: usize, z: f32) -> Self {
            for row in row0..row0 + h {
                for col in col0..col0 + w {
                    self.z[row * self.width + col] = z;
                }
            }
            self
        }

        fn set(mut self, col: usize, row: usize, z: f32) -> Self {
            self.z[row * self.width + col] = z;
            self
        }

        /// Frame whose `x` and `y` are functions of the column and row.
        fn frame_with_xy(self, fx: impl Fn(usize) -> f32, fy: impl Fn(usize) -> f32) -> DepthFrame {
            let n = self.width * self.height;
            let x = (0..n).map(|i| fx(i % self.width)).collect();
            let y = (0..n).map(|i| fy(i / self.width)).collect();
            DepthFrame::new(self.width, self.height, self.z, x, y).unwrap()
        }

        fn frame(self) -> DepthFrame {
            let n = self.width * self.height;
            let x = (0..n).map(|i| (i % self.width) as f32).collect();
            let y = (0..n).map(|i| (i / self.width) as f32).collect();
            DepthFrame::new(self.width, self.height, self.z, x, y).unwrap()
        }
    }

    fn detector(min_size: usize) -> ObstacleDetector {
        ObstacleDetector::new(DetectorConfig {
            min_size,
            ..Default::default()
        })
        .unwrap()
    }

    // ── basic scenes ────────────────────────────────────────────────────────

    #[test]
    fn empty_frame_yields_nothing() {
        let frame = DepthFrame::from_depth(8, 6, vec![pixel::NO_DATA; 48]).unwrap();
        let mut det = detector(1);
        let d = det.detect(&frame).unwrap();
        assert!(d.obstacles.is_empty());
        assert!(d.labels.iter().all(|&l| l == 0));
        assert_eq!(d.stats.provisional_labels, 0);
    }

    #[test]
    fn background_beyond_zkey_yields_nothing() {
        let frame = Canvas::new(10, 10).frame();
        let d = detector(1).detect(&frame).map(|d| d.obstacles.len()).unwrap();
        assert_eq!(d, 0);
    }

    #[test]
    fn single_solid_block() {
        let frame = Canvas::new(30, 30).fill(5, 8, 20, 15, 1000.0).frame();
        let mut det = detector(100);
        let d = det.detect(&frame).unwrap();

        assert_eq!(d.obstacles.len(), 1);
        let o = &d.obstacles[0];
        assert_eq!(o.n, 0);
        assert_eq!(o.size, 300);
        assert_eq!((o.bbox.x, o.bbox.y, o.bbox.width, o.bbox.height), (5, 8, 20, 15));
        assert_eq!(o.bvol.depth, 0.0);
        assert_eq!(o.bvol.width, 19.0);
        assert_eq!(o.bvol.height, 14.0);
        assert_eq!(o.bvol.z, 1000.0);
    }

    #[test]
    fn flat_block_with_flat_xy_has_zero_extents() {
        let mut z = vec![FAR; 400];
        for row in 4..16 {
            for col in 4..16 {
                z[row * 20 + col] = 700.0;
            }
        }
        let frame = DepthFrame::from_depth(20, 20, z).unwrap();
        let mut det = detector(10);
        let d = det.detect(&frame).unwrap();
        assert_eq!(d.obstacles.len(), 1);
        let v = d.obstacles[0].bvol;
        assert_eq!((v.width, v.height, v.depth), (0.0, 0.0, 0.0));
    }

    #[test]
    fn two_blocks_with_large_gap_stay_separate() {
        let frame = Canvas::new(40, 20)
            .fill(2, 2, 10, 10, 800.0)
            .fill(20, 4, 12, 8, 1300.0)
            .frame();
        let mut det = detector(50);
        let d = det.detect(&frame).unwrap();

        assert_eq!(d.obstacles.len(), 2);
        let a = &d.obstacles[0];
        let b = &d.obstacles[1];
        assert_eq!((a.bbox.x, a.bbox.y, a.bbox.width, a.bbox.height), (2, 2, 10, 10));
        assert_eq!((b.bbox.x, b.bbox.y, b.bbox.width, b.bbox.height), (20, 4, 12, 8));
        assert_eq!(a.size, 100);
        assert_eq!(b.size, 96);
        assert_eq!(a.centroid.z, 800.0);
        assert_eq!(b.centroid.z, 1300.0);
    }

    #[test]
    fn touching_blocks_with_small_step_merge() {
        let frame = Canvas::new(30, 16)
            .fill(3, 3, 10, 10, 1000.0)
            .fill(13, 3, 10, 10, 1050.0)
            .frame();
        let mut det = detector(50);
        let d = det.detect(&frame).unwrap();

        assert_eq!(d.obstacles.len(), 1);
        let o = &d.obstacles[0];
        assert_eq!((o.bbox.x, o.bbox.width), (3, 20));
        assert_eq!(o.size, 200);
        assert_eq!(o.bvol.z, 1000.0);
        assert_eq!(o.bvol.depth, 50.0);
    }

    #[test]
    fn touching_blocks_with_large_step_split_along_gap() {
        // Near block on the left, far block directly adjacent on the right.
        let frame = Canvas::new(30, 16)
            .fill(3, 3, 10, 10, 800.0)
            .fill(13, 3, 10, 10, 1200.0)
            .frame();
        let mut det = detector(20);
        let d = det.detect(&frame).unwrap();

        assert_eq!(d.obstacles.len(), 2);
        let near = &d.obstacles[0];
        let far = &d.obstacles[1];
        // The contour column is repaired into the near block.
        assert_eq!(d.stats.repaired_pixels, 10);
        assert_eq!(near.size, 110);
        assert_eq!((near.bbox.x, near.bbox.width), (3, 11));
        assert_eq!(near.bvol.z, 800.0);
        assert_eq!(near.bvol.depth, 400.0);
        assert_eq!(d.labels[5 * 30 + 13], 1);
        assert_eq!(far.bbox.x, 14);
        assert_eq!(far.size, 90);
        assert_eq!(far.centroid.z, 1200.0);
    }

    // ── filtering, merging, repair ──────────────────────────────────────────

    #[test]
    fn small_regions_are_filtered_and_zeroed() {
        let frame = Canvas::new(30, 20)
            .fill(2, 2, 10, 10, 900.0)
            .fill(20, 10, 3, 3, 900.0)
            .frame();
        let mut det = detector(50);
        let d = det.detect(&frame).unwrap();

        assert_eq!(d.obstacles.len(), 1);
        assert_eq!(d.stats.filtered_regions, 1);
        for row in 10..13 {
            for col in 20..23 {
                assert_eq!(d.labels[row * 30 + col], 0, "noise pixel ({row}, {col})");
            }
        }
    }

    #[test]
    fn u_shape_merges_into_one_obstacle() {
        let frame = Canvas::new(20, 20)
            .fill(3, 3, 3, 12, 1000.0)
            .fill(12, 3, 3, 12, 1000.0)
            .fill(3, 12, 12, 3, 1000.0)
            .frame();
        let mut det = detector(10);
        let d = det.detect(&frame).unwrap();

        assert_eq!(d.stats.provisional_labels, 2);
        assert_eq!(d.stats.merged_labels, 1);
        assert_eq!(d.obstacles.len(), 1);
        assert_eq!(d.obstacles[0].size, 36 + 36 + 18);
        assert_eq!(d.obstacles[0].bbox.width, 12);
    }

    #[test]
    fn far_spike_splitting_a_bar_joins_the_first_neighbor() {
        // A far column cuts the bar in two.  Each spike pixel touches both
        // halves at equal depth, so it joins the left one.
        let frame = Canvas::new(15, 5)
            .fill(1, 1, 13, 3, 1000.0)
            .fill(7, 1, 1, 3, 1150.0)
            .frame();
        let mut det = detector(1);
        let d = det.detect(&frame).unwrap();

        assert_eq!(d.stats.gap_pixels, 3);
        assert_eq!(d.stats.repaired_pixels, 3);
        assert_eq!(d.obstacles.len(), 2);
        assert_eq!(d.labels[2 * 15 + 7], 1);
        assert_eq!(d.obstacles[0].size, 6 * 3 + 3);
        assert_eq!(d.obstacles[1].size, 6 * 3);
        assert_eq!(d.obstacles[0].bvol.depth, 150.0);
    }

    #[test]
    fn gap_pixels_beyond_zkey_stay_background() {
        let frame = Canvas::new(12, 12).fill(3, 3, 6, 6, 900.0).frame();
        let mut det = detector(1);
        let d = det.detect(&frame).unwrap();
        // The ring around the block is marked but has no foreground depth.
        assert_eq!(d.stats.gap_pixels, 8 * 8 - 36);
        assert_eq!(d.stats.repaired_pixels, 0);
        assert_eq!(d.obstacles[0].size, 36);
    }

    // ── properties ──────────────────────────────────────────────────────────

    /// Cross-check every obstacle's summary against the pixels the final
    /// raster attributes to it.
    fn assert_summaries_match_raster(frame: &DepthFrame, obstacles: &[Obstacle], labels: &[u32]) {
        let width = frame.width();
        for o in obstacles {
            let mut n = 0usize;
            let (mut sc, mut sr, mut sx, mut sy, mut sz) = (0.0, 0.0, 0.0, 0.0, 0.0);
            let mut lo = [f64::MAX; 3];
            let mut hi = [f64::MIN; 3];
            for (i, &l) in labels.iter().enumerate() {
                if l != o.raster_label() {
                    continue;
                }
                let p = [
                    f64::from(frame.x()[i]),
                    f64::from(frame.y()[i]),
                    f64::from(frame.z()[i]),
                ];
                n += 1;
                sc += (i % width) as f64;
                sr += (i / width) as f64;
                sx += p[0];
                sy += p[1];
                sz += p[2];
                for axis in 0..3 {
                    lo[axis] = lo[axis].min(p[axis]);
                    hi[axis] = hi[axis].max(p[axis]);
                }
            }
            assert_eq!(n, o.size, "obstacle {} pixel count", o.n);
            let nf = n as f64;
            assert!((sc / nf - o.image_centroid.x).abs() < 1e-9, "obstacle {} column centroid", o.n);
            assert!((sr / nf - o.image_centroid.y).abs() < 1e-9, "obstacle {} row centroid", o.n);
            assert!((sx / nf - o.centroid.x).abs() < 1e-6, "obstacle {} x centroid", o.n);
            assert!((sy / nf - o.centroid.y).abs() < 1e-6, "obstacle {} y centroid", o.n);
            assert!((sz / nf - o.centroid.z).abs() < 1e-6, "obstacle {} z centroid", o.n);

            let v = o.bvol;
            assert_eq!([v.x, v.y, v.z], lo, "obstacle {} volume min corner", o.n);
            assert_eq!(
                [v.width, v.height, v.depth],
                [hi[0] - lo[0], hi[1] - lo[1], hi[2] - lo[2]],
                "obstacle {} volume extents",
                o.n
            );
        }
    }

    #[test]
    fn centroids_match_raster_pixels() {
        let frame = Canvas::new(40, 30)
            .fill(2, 2, 12, 9, 900.0)
            .fill(5, 11, 4, 10, 950.0)
            .fill(22, 5, 10, 20, 1400.0)
            .set(25, 8, 1390.0)
            .frame();
        let mut det = detector(20);
        let d = det.detect(&frame).unwrap();
        assert!(!d.obstacles.is_empty());
        assert_summaries_match_raster(&frame, d.obstacles, d.labels);
    }

    #[test]
    fn summaries_match_raster_after_merge_and_repair() {
        // A U at 800 mm whose right arm touches a 1200 mm block, plus an
        // island.  The arms merge through the bottom bar and the block's
        // contour column is repaired into the U.
        let frame = Canvas::new(40, 30)
            .fill(3, 3, 3, 17, 800.0)
            .fill(12, 3, 3, 17, 800.0)
            .fill(3, 17, 12, 3, 800.0)
            .fill(15, 5, 10, 15, 1200.0)
            .fill(30, 3, 4, 4, 1000.0)
            .frame_with_xy(|col| 3.0 * col as f32 - 20.0, |row| 100.0 - 2.0 * row as f32);
        let mut det = detector(1);
        let d = det.detect(&frame).unwrap();

        assert!(d.stats.merged_labels >= 1, "U arms must merge: {:?}", d.stats);
        assert!(d.stats.repaired_pixels >= 1, "contour must be repaired: {:?}", d.stats);
        assert_eq!(d.obstacles.len(), 3);
        let u = &d.obstacles[0];
        assert_eq!(u.bvol.z, 800.0);
        assert_eq!(u.bvol.depth, 400.0, "repaired 1200 mm pixels widen the U's depth range");
        assert_summaries_match_raster(&frame, d.obstacles, d.labels);
    }

    #[test]
    fn repeated_detection_is_deterministic() {
        let frame = Canvas::new(30, 20)
            .fill(2, 2, 8, 8, 900.0)
            .fill(12, 3, 8, 12, 1200.0)
            .fill(8, 12, 4, 4, 950.0)
            .frame();
        let mut det = detector(5);
        let first = {
            let d = det.detect(&frame).unwrap();
            (d.obstacles.to_vec(), d.labels.to_vec())
        };
        let second = {
            let d = det.detect(&frame).unwrap();
            (d.obstacles.to_vec(), d.labels.to_vec())
        };
        assert_eq!(first, second);

        let mut fresh = detector(5);
        let d = fresh.detect(&frame).unwrap();
        assert_eq!(first.0, d.obstacles);
    }

    // ── errors & lifecycle ──────────────────────────────────────────────────

    #[test]
    fn capacity_exceeded_rejects_frame_and_recovers() {
        let mut canvas = Canvas::new(21, 21);
        for row in (1..20).step_by(2) {
            for col in (1..20).step_by(2) {
                canvas = canvas.set(col, row, 900.0);
            }
        }
        let checkerboard = canvas.frame();
        let mut det = ObstacleDetector::new(DetectorConfig {
            min_size: 1,
            max_labels: 16,
            ..Default::default()
        })
        .unwrap();

        let err = det.detect(&checkerboard).unwrap_err();
        assert_eq!(err, SegmentationError::CapacityExceeded { limit: 16 });
        assert!(det.obstacles().is_empty());
        assert!(det.labels().iter().all(|&l| l == 0));

        let block = Canvas::new(21, 21).fill(4, 4, 6, 6, 900.0).frame();
        let d = det.detect(&block).unwrap();
        assert_eq!(d.obstacles.len(), 1);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = DetectorConfig {
            min_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            ObstacleDetector::new(cfg),
            Err(SegmentationError::InvalidConfig(_))
        ));
        let mut det = detector(1);
        assert!(det.set_config(cfg).is_err());
        assert_eq!(det.config().min_size, 1);
    }

    #[test]
    fn detector_adapts_to_shape_changes() {
        let mut det = detector(4);
        let small = Canvas::new(8, 8).fill(2, 2, 3, 3, 900.0).frame();
        assert_eq!(det.detect(&small).unwrap().labels.len(), 64);
        let large = Canvas::new(16, 10).fill(2, 2, 3, 3, 900.0).frame();
        let d = det.detect(&large).unwrap();
        assert_eq!(d.labels.len(), 160);
        assert_eq!((d.width, d.height), (16, 10));
        assert_eq!(d.obstacles.len(), 1);
    }

    #[test]
    fn masked_and_sentinel_pixels_split_regions() {
        let mut frame = Canvas::new(20, 10).fill(2, 2, 16, 6, 900.0).frame();
        let mask: Vec<bool> = (0..200).map(|i| i % 20 != 10).collect();
        frame.set_mask(mask).unwrap();
        frame.apply_mask();
        let mut det = detector(10);
        let d = det.detect(&frame).unwrap();
        assert_eq!(d.obstacles.len(), 2);
        assert_eq!(d.obstacles[0].bbox.width, 8);
        assert_eq!(d.obstacles[1].bbox.x, 11);
    }
}
