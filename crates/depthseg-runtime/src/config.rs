//! Detector settings – reads/writes a TOML file such as `depthseg.toml`.
//!
//! Every field has a serde default, so a partial file (or an empty one)
//! yields the stock tuning.  Environment variables override file values
//! after loading.
//!
//! ```toml
//! zkey = 1500.0
//! min_gap = 100.0
//! min_size = 500
//! max_depth = 10000.0
//! max_labels = 32767
//! use_mask = false
//! ```

use std::fs;
use std::path::Path;

use depthseg_perception::config::{
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_LABELS, DEFAULT_MIN_GAP, DEFAULT_MIN_SIZE, DEFAULT_ZKEY,
};
use depthseg_perception::DetectorConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access config at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(String),
    #[error("Invalid detector settings: {0}")]
    Invalid(String),
}

/// Persisted detector tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorSettings {
    /// Foreground threshold in mm.
    #[serde(default = "default_zkey")]
    pub zkey: f64,

    /// Minimum depth step (mm) treated as a gap.
    #[serde(default = "default_min_gap")]
    pub min_gap: f64,

    /// Minimum obstacle size in pixels.
    #[serde(default = "default_min_size")]
    pub min_size: usize,

    /// Value used to clamp background depth.
    #[serde(default = "default_max_depth")]
    pub max_depth: f64,

    /// Exclusive upper bound on provisional labels per frame.
    #[serde(default = "default_max_labels")]
    pub max_labels: usize,

    /// Apply the loop's pixel mask before detection.
    #[serde(default)]
    pub use_mask: bool,
}

fn default_zkey() -> f64 {
    DEFAULT_ZKEY
}
fn default_min_gap() -> f64 {
    DEFAULT_MIN_GAP
}
fn default_min_size() -> usize {
    DEFAULT_MIN_SIZE
}
fn default_max_depth() -> f64 {
    DEFAULT_MAX_DEPTH
}
fn default_max_labels() -> usize {
    DEFAULT_MAX_LABELS
}

impl Default for DetectorSettings {
    fn default() -> Self {
        Self {
            zkey: default_zkey(),
            min_gap: default_min_gap(),
            min_size: default_min_size(),
            max_depth: default_max_depth(),
            max_labels: default_max_labels(),
            use_mask: false,
        }
    }
}

impl DetectorSettings {
    /// Kernel configuration, validated.
    pub fn detector_config(&self) -> Result<DetectorConfig, ConfigError> {
        let cfg = DetectorConfig {
            zkey: self.zkey,
            min_gap: self.min_gap,
            min_size: self.min_size,
            max_depth: self.max_depth,
            max_labels: self.max_labels,
        };
        cfg.validate().map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(cfg)
    }
}

/// Load settings from `path`.  Returns `None` if the file does not exist.
pub fn load_from(path: &Path) -> Result<Option<DetectorSettings>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut settings: DetectorSettings =
        toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
    apply_env_overrides(&mut settings);
    Ok(Some(settings))
}

/// Apply `DEPTHSEG_*` environment variable overrides to `settings`.
///
/// | Variable | Field |
/// |---|---|
/// | `DEPTHSEG_ZKEY` | `zkey` |
/// | `DEPTHSEG_MIN_GAP` | `min_gap` |
/// | `DEPTHSEG_MIN_SIZE` | `min_size` |
/// | `DEPTHSEG_MAX_DEPTH` | `max_depth` |
///
/// Values that fail to parse are ignored.
pub fn apply_env_overrides(settings: &mut DetectorSettings) {
    apply_overrides_from(settings, |key| std::env::var(key).ok());
}

/// Same as [`apply_env_overrides`], reading variables through `lookup`.
pub fn apply_overrides_from(settings: &mut DetectorSettings, lookup: impl Fn(&str) -> Option<String>) {
    let parsed = |key: &str| lookup(key).and_then(|v| v.trim().parse::<f64>().ok());
    if let Some(z) = parsed("DEPTHSEG_ZKEY") {
        settings.zkey = z;
    }
    if let Some(g) = parsed("DEPTHSEG_MIN_GAP") {
        settings.min_gap = g;
    }
    if let Some(n) = lookup("DEPTHSEG_MIN_SIZE").and_then(|v| v.trim().parse::<usize>().ok()) {
        settings.min_size = n;
    }
    if let Some(d) = parsed("DEPTHSEG_MAX_DEPTH") {
        settings.max_depth = d;
    }
}

/// Save settings to `path`, creating parent directories as needed.
pub fn save_to(settings: &DetectorSettings, path: &Path) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let raw = toml::to_string_pretty(settings).map_err(|e| ConfigError::Parse(e.to_string()))?;
    fs::write(path, raw).map_err(io_err)?;
    Ok(())
}
