//! Per-label region accumulators and the merge pass that folds equivalent
//! labels together.

/// Running statistics for one provisional label.
///
/// Extremes start inverted (`min = MAX`, `max = MIN`) so the first
/// [`Blob::add_pixel`] sets them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Blob {
    pub active: bool,
    pub size: usize,
    pub sum_col: f64,
    pub sum_row: f64,
    pub sum_x: f64,
    pub sum_y: f64,
    pub sum_z: f64,
    pub col_min: usize,
    pub col_max: usize,
    pub row_min: usize,
    pub row_max: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub z_min: f64,
    pub z_max: f64,
}

impl Blob {
    pub fn new() -> Self {
        Self {
            active: true,
            size: 0,
            sum_col: 0.0,
            sum_row: 0.0,
            sum_x: 0.0,
            sum_y: 0.0,
            sum_z: 0.0,
            col_min: usize::MAX,
            col_max: 0,
            row_min: usize::MAX,
            row_max: 0,
            x_min: f64::MAX,
            x_max: f64::MIN,
            y_min: f64::MAX,
            y_max: f64::MIN,
            z_min: f64::MAX,
            z_max: f64::MIN,
        }
    }

    /// Account for one pixel.  Non-positive depth is ignored.
    pub fn add_pixel(&mut self, col: usize, row: usize, x: f32, y: f32, z: f32) {
        if z < f32::EPSILON {
            return;
        }
        let (x, y, z) = (f64::from(x), f64::from(y), f64::from(z));

        self.sum_col += col as f64;
        self.sum_row += row as f64;
        self.col_min = self.col_min.min(col);
        self.col_max = self.col_max.max(col);
        self.row_min = self.row_min.min(row);
        self.row_max = self.row_max.max(row);

        self.sum_x += x;
        self.sum_y += y;
        self.sum_z += z;
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
        self.z_min = self.z_min.min(z);
        self.z_max = self.z_max.max(z);

        self.size += 1;
    }

    /// Fold `other` into `self`: sums and sizes add, extremes combine.
    pub fn absorb(&mut self, other: &Blob) {
        self.size += other.size;
        self.sum_col += other.sum_col;
        self.sum_row += other.sum_row;
        self.sum_x += other.sum_x;
        self.sum_y += other.sum_y;
        self.sum_z += other.sum_z;

        self.col_min = self.col_min.min(other.col_min);
        self.col_max = self.col_max.max(other.col_max);
        self.row_min = self.row_min.min(other.row_min);
        self.row_max = self.row_max.max(other.row_max);

        self.x_min = self.x_min.min(other.x_min);
        self.x_max = self.x_max.max(other.x_max);
        self.y_min = self.y_min.min(other.y_min);
        self.y_max = self.y_max.max(other.y_max);
        self.z_min = self.z_min.min(other.z_min);
        self.z_max = self.z_max.max(other.z_max);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// BlobMerger
// ────────────────────────────────────────────────────────────────────────────

/// Applies a resolved remap table to the blob table and the label raster.
pub struct BlobMerger;

impl BlobMerger {
    /// Fold every non-canonical blob into its canonical blob and deactivate it.
    ///
    /// `remap[label]` is the canonical label, or `0` when `label` is itself
    /// canonical.  Returns the number of blobs folded.
    pub(crate) fn merge(blobs: &mut [Blob], remap: &[u32]) -> usize {
        let mut merged = 0;
        for label in 2..blobs.len().min(remap.len()) {
            let target = remap[label] as usize;
            if target == 0 {
                continue;
            }
            debug_assert!(target < label, "canonical label must be smaller");
            let source = blobs[label];
            blobs[target].absorb(&source);
            blobs[label].active = false;
            merged += 1;
        }
        merged
    }

    /// Rewrite every labelled pixel to its canonical label.
    pub(crate) fn relabel(labels: &mut [u32], remap: &[u32]) {
        for l in labels.iter_mut() {
            if *l > 0 {
                let canonical = remap[*l as usize];
                if canonical > 0 {
                    *l = canonical;
                }
            }
        }
    }
}
