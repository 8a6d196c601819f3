//! Gap-contour marking.
//!
//! A pixel is marked as a gap when one of its eight neighbors is nearer by
//! more than `min_gap`.  The test is one-directional: only the *far* pixel
//! of a drop-off is marked, the near one keeps its depth.  Gap repair later
//! looks at both sides of the contour.
//!
//! Border pixels are never marked, and sentinel values on either side of a
//! comparison never produce a gap.

use depthseg_types::pixel;

/// Offsets `(d_row, d_col)` of the 8-neighborhood.
///
/// The order (left, then clockwise) is significant for gap repair, where the
/// first of several equally near neighbors wins.
pub(crate) const EIGHT_NEIGHBORS: [(isize, isize); 8] = [
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
];

/// Marks the far side of depth discontinuities.
#[derive(Debug, Clone, Copy)]
pub struct GapContourMarker {
    min_gap: f64,
}

impl GapContourMarker {
    pub fn new(min_gap: f64) -> Self {
        Self { min_gap }
    }

    pub fn min_gap(&self) -> f64 {
        self.min_gap
    }

    /// True when `z_far` lies more than `min_gap` behind `z_near`.
    pub fn is_gap(&self, z_far: f32, z_near: f32) -> bool {
        if z_far < -f32::EPSILON || z_near < -f32::EPSILON {
            return false;
        }
        f64::from(z_far - z_near) - self.min_gap > f64::from(f32::EPSILON)
    }

    /// Copy `depth` into `out`, writing [`pixel::GAP`] over every interior
    /// pixel that sits on the far side of a gap.
    ///
    /// `depth` is row-major with the given shape; comparisons always read
    /// `depth`, never the partially marked output.  Returns the number of
    /// marked pixels.
    pub(crate) fn mark(&self, width: usize, height: usize, depth: &[f32], out: &mut Vec<f32>) -> usize {
        out.clear();
        out.extend_from_slice(depth);
        if width < 3 || height < 3 {
            return 0;
        }

        let mut marked = 0;
        for row in 1..height - 1 {
            for col in 1..width - 1 {
                let idx = row * width + col;
                let z = depth[idx];
                if z <= f32::EPSILON {
                    continue;
                }
                let far_side = EIGHT_NEIGHBORS.iter().any(|&(dr, dc)| {
                    let n = (row as isize + dr) as usize * width + (col as isize + dc) as usize;
                    self.is_gap(z, depth[n])
                });
                if far_side {
                    out[idx] = pixel::GAP;
                    marked += 1;
                }
            }
        }
        marked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── comparator ──────────────────────────────────────────────────────────

    #[test]
    fn is_gap_requires_step_beyond_min_gap() {
        let m = GapContourMarker::new(100.0);
        assert!(m.is_gap(1000.0, 800.0));
        assert!(!m.is_gap(1000.0, 900.0), "a step of exactly min_gap is not a gap");
        assert!(!m.is_gap(1000.0, 950.0));
    }

    #[test]
    fn is_gap_is_one_directional() {
        let m = GapContourMarker::new(100.0);
        assert!(m.is_gap(1200.0, 800.0));
        assert!(!m.is_gap(800.0, 1200.0));
    }

    #[test]
    fn sentinels_never_trigger() {
        let m = GapContourMarker::new(100.0);
        assert!(!m.is_gap(1200.0, pixel::NO_DATA));
        assert!(!m.is_gap(pixel::MASKED, 100.0));
    }

    // ── marking ─────────────────────────────────────────────────────────────

    #[test]
    fn only_far_pixel_of_a_step_is_marked() {
        // Row 1 holds a near pixel (col 1) next to a far pixel (col 2).
        #[rustfmt::skip]
        let depth = vec![
            800.0, 800.0, 1200.0, 1200.0,
            800.0, 800.0, 1200.0, 1200.0,
            800.0, 800.0, 1200.0, 1200.0,
        ];
        let mut out = Vec::new();
        let marked = GapContourMarker::new(100.0).mark(4, 3, &depth, &mut out);

        assert_eq!(marked, 1);
        assert_eq!(out[6], pixel::GAP, "far pixel (1, 2) must be marked");
        assert_eq!(out[5], 800.0, "near pixel (1, 1) must keep its depth");
        assert_eq!(depth[6], 1200.0, "source buffer is untouched");
    }

    #[test]
    fn border_pixels_are_never_marked() {
        #[rustfmt::skip]
        let depth = vec![
            2000.0, 2000.0, 2000.0,
            2000.0,  500.0, 2000.0,
            2000.0, 2000.0, 2000.0,
        ];
        let mut out = Vec::new();
        let marked = GapContourMarker::new(100.0).mark(3, 3, &depth, &mut out);
        // Only the centre is interior, and it is the near side.
        assert_eq!(marked, 0);
        assert_eq!(out, depth);
    }

    #[test]
    fn diagonal_neighbor_marks_gap() {
        #[rustfmt::skip]
        let depth = vec![
            300.0, 1000.0, 1000.0,
            1000.0, 1000.0, 1000.0,
            1000.0, 1000.0, 1000.0,
        ];
        let mut out = Vec::new();
        assert_eq!(GapContourMarker::new(100.0).mark(3, 3, &depth, &mut out), 1);
        assert_eq!(out[4], pixel::GAP);
    }

    #[test]
    fn too_small_frame_is_copied_verbatim() {
        let depth = vec![1000.0, 10.0];
        let mut out = Vec::new();
        assert_eq!(GapContourMarker::new(100.0).mark(2, 1, &depth, &mut out), 0);
        assert_eq!(out, depth);
    }
}
