//! Obstacle records emitted by a detection cycle.
//!
//! | Type | Role |
//! |------|------|
//! | [`BoundingBox`]    | 2-D pixel box, upper-left origin.                  |
//! | [`BoundingVolume`] | 3-D axis-aligned cuboid in sensor millimetres.     |
//! | [`Point2`]         | Pixel-space centroid.                              |
//! | [`Point3`]         | Sensor-space centroid.                             |
//! | [`Obstacle`]       | One size-filtered, summarised region.              |

use serde::{Deserialize, Serialize};
use std::fmt;

// ────────────────────────────────────────────────────────────────────────────
// Geometry
// ────────────────────────────────────────────────────────────────────────────

/// A point in image coordinates (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in the sensor coordinate system (millimetres).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Pixel bounding box of an obstacle.
///
/// `(x, y)` is the upper-left pixel; `width` and `height` count pixels, so a
/// single-pixel box has both equal to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True when pixel `(col, row)` lies inside the box.
    pub fn contains(&self, col: u32, row: u32) -> bool {
        col >= self.x && col < self.x + self.width && row >= self.y && row < self.y + self.height
    }
}

/// Axis-aligned bounding cuboid of an obstacle in sensor coordinates.
///
/// `(x, y, z)` is the minimum corner; the extents are `max - min` per axis,
/// so a perfectly flat region has zero `depth`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingVolume {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl BoundingVolume {
    pub fn min_corner(&self) -> Point3 {
        Point3::new(self.x, self.y, self.z)
    }

    pub fn max_corner(&self) -> Point3 {
        Point3::new(self.x + self.width, self.y + self.height, self.z + self.depth)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Obstacle
// ────────────────────────────────────────────────────────────────────────────

/// A detected obstacle.
///
/// The centroids are pixel-count weighted means over the obstacle's pixels,
/// not the centres of its boxes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// 0-based position in the cycle's output list.  The final label raster
    /// stores `n + 1` for this obstacle's pixels.
    pub n: usize,
    pub bbox: BoundingBox,
    pub bvol: BoundingVolume,
    pub image_centroid: Point2,
    pub centroid: Point3,
    /// Pixel count.
    pub size: usize,
}

impl Obstacle {
    /// The label value this obstacle's pixels carry in the final raster.
    pub fn raster_label(&self) -> u32 {
        self.n as u32 + 1
    }

    /// Maximum corner of the bounding volume.
    pub fn far_corner(&self) -> Point3 {
        self.bvol.max_corner()
    }
}

impl fmt::Display for Obstacle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} size={} bbox=({}, {}, {}x{}) org=({:.1}, {:.1}, {:.1}) dim=({:.1}, {:.1}, {:.1}) grv=({:.1}, {:.1}, {:.1})",
            self.n,
            self.size,
            self.bbox.x,
            self.bbox.y,
            self.bbox.width,
            self.bbox.height,
            self.bvol.x,
            self.bvol.y,
            self.bvol.z,
            self.bvol.width,
            self.bvol.height,
            self.bvol.depth,
            self.centroid.x,
            self.centroid.y,
            self.centroid.z,
        )
    }
}
