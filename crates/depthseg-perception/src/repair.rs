//! Gap repair.
//!
//! Gap marking carves a one-pixel moat on the far side of every depth step,
//! which also splits regions where the "step" is a slope or a thin edge.  The
//! repair pass revisits each marked pixel that still has real foreground
//! depth.  When it touches at least two distinct labelled regions and the
//! nearest of them (smallest signed depth difference) is within `min_gap`,
//! the pixel joins that region.  A pixel touching a single region stays
//! background.
//!
//! Decisions read a snapshot of the canonical label raster, so a repaired
//! pixel never influences its neighbors within the same pass.

use depthseg_types::pixel;

use crate::blob::Blob;
use crate::gap::EIGHT_NEIGHBORS;

/// Buffers read by the repair pass, all row-major with the same shape.
pub(crate) struct RepairInput<'a> {
    pub width: usize,
    pub height: usize,
    /// Separated foreground, carrying [`pixel::GAP`] markers.
    pub separated: &'a [f32],
    /// Foreground depth before gap marking.
    pub fore: &'a [f32],
    pub x: &'a [f32],
    pub y: &'a [f32],
    /// Canonical labels before repair.
    pub snapshot: &'a [u32],
}

/// Reassigns gap pixels that bridge two or more regions.
#[derive(Debug, Clone, Copy)]
pub struct GapRepairer {
    min_gap: f64,
}

impl GapRepairer {
    pub fn new(min_gap: f64) -> Self {
        Self { min_gap }
    }

    /// Run the pass, writing into `labels` and updating the chosen blobs.
    /// Returns the number of repaired pixels.
    pub(crate) fn repair(&self, input: &RepairInput<'_>, labels: &mut [u32], blobs: &mut [Blob]) -> usize {
        let RepairInput {
            width,
            height,
            separated,
            fore,
            x,
            y,
            snapshot,
        } = *input;
        if width < 3 || height < 3 {
            return 0;
        }

        let mut repaired = 0;
        for row in 1..height - 1 {
            for col in 1..width - 1 {
                let idx = row * width + col;
                if (separated[idx] - pixel::GAP).abs() >= f32::EPSILON {
                    continue;
                }
                let z = fore[idx];
                if z <= f32::EPSILON {
                    continue;
                }

                let mut seen = [0u32; 8];
                let mut distinct = 0;
                let mut nearest = 0u32;
                let mut min_diff = f64::MAX;
                for &(dr, dc) in &EIGHT_NEIGHBORS {
                    let n = (row as isize + dr) as usize * width + (col as isize + dc) as usize;
                    let label = snapshot[n];
                    if label == 0 {
                        continue;
                    }
                    let diff = f64::from(fore[n] - z);
                    if diff < min_diff {
                        nearest = label;
                        min_diff = diff;
                    }
                    if !seen[..distinct].contains(&label) {
                        seen[distinct] = label;
                        distinct += 1;
                    }
                }

                if distinct > 1 && nearest != 0 && min_diff - self.min_gap < f64::from(f32::EPSILON) {
                    labels[idx] = nearest;
                    blobs[nearest as usize].add_pixel(col, row, x[idx], y[idx], z);
                    repaired += 1;
                }
            }
        }
        repaired
    }
}
