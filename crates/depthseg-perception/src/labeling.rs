//! First labeling pass.
//!
//! One raster scan over the interior of the separated-foreground buffer.
//! Each foreground pixel looks at its four already-visited neighbors:
//!
//! ```text
//!   | UL | U | UR |
//!   | L  | * |    |
//! ```
//!
//! No labelled neighbor allocates a new label; otherwise the pixel takes the
//! smallest neighbor label and every other distinct neighbor label is
//! recorded as equivalent to it.

use depthseg_types::SegmentationError;

use crate::blob::Blob;
use crate::equivalence::EquivalenceResolver;
use crate::foreground::is_foreground;

/// Assigns provisional labels and accumulates per-label statistics.
#[derive(Debug, Clone, Copy)]
pub struct ComponentLabeler {
    max_labels: usize,
}

/// Buffers read by the first pass, all row-major with the same shape.
pub(crate) struct LabelInput<'a> {
    pub width: usize,
    pub height: usize,
    /// Separated foreground: positive values are candidates.
    pub fore: &'a [f32],
    pub x: &'a [f32],
    pub y: &'a [f32],
}

impl ComponentLabeler {
    /// `max_labels` is the exclusive upper bound on label ids.
    pub fn new(max_labels: usize) -> Self {
        Self { max_labels }
    }

    pub fn max_labels(&self) -> usize {
        self.max_labels
    }

    /// Run the pass.  `labels` must be zero-filled; `blobs` and
    /// `equivalence` are reset here.  Index 0 of `blobs` is a placeholder
    /// for the background.
    ///
    /// Returns the number of provisional labels.
    ///
    /// # Errors
    ///
    /// [`SegmentationError::CapacityExceeded`] as soon as a new label would
    /// reach `max_labels`.  The buffers are left partially written.
    pub(crate) fn label(
        &self,
        input: &LabelInput<'_>,
        labels: &mut [u32],
        blobs: &mut Vec<Blob>,
        equivalence: &mut EquivalenceResolver,
    ) -> Result<usize, SegmentationError> {
        let LabelInput {
            width,
            height,
            fore,
            x,
            y,
        } = *input;

        blobs.clear();
        blobs.push(Blob::new());
        equivalence.reset();
        if width < 3 || height < 3 {
            return Ok(0);
        }

        for row in 1..height - 1 {
            for col in 1..width - 1 {
                let idx = row * width + col;
                if !is_foreground(fore[idx]) {
                    continue;
                }

                let causal = [
                    labels[idx - 1],
                    labels[idx - width - 1],
                    labels[idx - width],
                    labels[idx - width + 1],
                ];
                let label = match causal.iter().copied().filter(|&l| l > 0).min() {
                    None => {
                        if equivalence.len() + 1 >= self.max_labels {
                            return Err(SegmentationError::CapacityExceeded {
                                limit: self.max_labels,
                            });
                        }
                        blobs.push(Blob::new());
                        equivalence.make_label()
                    }
                    Some(min) => {
                        for &other in &causal {
                            if other > 0 && other != min {
                                equivalence.union(min, other);
                            }
                        }
                        min
                    }
                };

                labels[idx] = label;
                blobs[label as usize].add_pixel(col, row, x[idx], y[idx], fore[idx]);
            }
        }

        Ok(equivalence.len())
    }
}
