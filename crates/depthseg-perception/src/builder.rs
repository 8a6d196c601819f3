//! Obstacle finalisation.
//!
//! Walks the blob table in ascending label order, drops inactive blobs and
//! those below `min_size`, summarises the survivors as [`Obstacle`] records,
//! and rewrites the label raster so that pixel value `k` means "belongs to
//! output obstacle `k - 1`" and `0` means background or filtered noise.

use depthseg_types::{BoundingBox, BoundingVolume, Obstacle, Point2, Point3};

use crate::blob::Blob;

/// Filters blobs by size and emits obstacles.
#[derive(Debug, Clone, Copy)]
pub struct ObstacleBuilder {
    min_size: usize,
}

impl ObstacleBuilder {
    pub fn new(min_size: usize) -> Self {
        Self { min_size }
    }

    pub fn min_size(&self) -> usize {
        self.min_size
    }

    /// Append one obstacle per surviving blob to `out` (cleared first) and
    /// fill `remap` with label → 1-based obstacle index (0 = excluded).
    pub(crate) fn build(&self, blobs: &[Blob], out: &mut Vec<Obstacle>, remap: &mut Vec<u32>) {
        out.clear();
        remap.clear();
        remap.resize(blobs.len(), 0);

        for (label, blob) in blobs.iter().enumerate().skip(1) {
            if !blob.active || blob.size < self.min_size {
                continue;
            }
            debug_assert!(blob.size > 0, "active blob {label} reached finalisation empty");
            if blob.size == 0 {
                continue;
            }
            let n = out.len();
            out.push(summarise(n, blob));
            remap[label] = n as u32 + 1;
        }
    }

    /// Rewrite canonical labels to final obstacle indices.
    pub(crate) fn relabel(labels: &mut [u32], remap: &[u32]) {
        for l in labels.iter_mut() {
            if *l > 0 {
                *l = remap[*l as usize];
            }
        }
    }
}

fn summarise(n: usize, blob: &Blob) -> Obstacle {
    let size = blob.size as f64;
    Obstacle {
        n,
        bbox: BoundingBox::new(
            blob.col_min as u32,
            blob.row_min as u32,
            (blob.col_max - blob.col_min + 1) as u32,
            (blob.row_max - blob.row_min + 1) as u32,
        ),
        bvol: BoundingVolume {
            x: blob.x_min,
            y: blob.y_min,
            z: blob.z_min,
            width: blob.x_max - blob.x_min,
            height: blob.y_max - blob.y_min,
            depth: blob.z_max - blob.z_min,
        },
        image_centroid: Point2::new(blob.sum_col / size, blob.sum_row / size),
        centroid: Point3::new(blob.sum_x / size, blob.sum_y / size, blob.sum_z / size),
        size: blob.size,
    }
}
