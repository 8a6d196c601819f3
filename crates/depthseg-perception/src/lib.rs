//! `depthseg-perception` – obstacle segmentation kernel.
//!
//! Turns one depth frame into a list of obstacle summaries and a per-pixel
//! obstacle label raster.  Foreground is everything nearer than `zkey`; it
//! is split along depth discontinuities larger than `min_gap`, grouped into
//! 8-connected regions, and filtered by pixel count.
//!
//! # Modules
//!
//! | Module | Stage |
//! |---|---|
//! | [`foreground`] | near/far split and clamping |
//! | [`gap`] | [`GapContourMarker`]: marks the far side of depth steps |
//! | [`labeling`] | [`ComponentLabeler`]: raster first pass with causal neighbors |
//! | [`equivalence`] | [`EquivalenceResolver`]: union-find over provisional labels |
//! | [`blob`] | per-label accumulators and [`BlobMerger`] |
//! | [`repair`] | [`GapRepairer`]: gives bridging gap pixels back to a region |
//! | [`builder`] | [`ObstacleBuilder`]: size filter and final relabel |
//! | [`detector`] | [`ObstacleDetector`]: owns the buffers and runs a cycle |
//!
//! Tunables live in [`DetectorConfig`].

pub mod blob;
pub mod builder;
pub mod config;
pub mod detector;
pub mod equivalence;
pub mod foreground;
pub mod gap;
pub mod labeling;
pub mod repair;

pub use blob::BlobMerger;
pub use builder::ObstacleBuilder;
pub use config::DetectorConfig;
pub use detector::{CycleStats, Detection, ObstacleDetector};
pub use equivalence::EquivalenceResolver;
pub use gap::GapContourMarker;
pub use labeling::ComponentLabeler;
pub use repair::GapRepairer;
