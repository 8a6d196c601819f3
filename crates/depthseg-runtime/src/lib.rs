//! `depthseg-runtime` – host side of the obstacle detector.
//!
//! # Modules
//!
//! - [`detection_loop`] – [`DetectionLoop`][detection_loop::DetectionLoop]:
//!   pulls frames from a [`FrameSource`][detection_loop::FrameSource],
//!   screens and masks them, runs the kernel, and hands a
//!   [`DetectionReport`][detection_loop::DetectionReport] to an
//!   [`ObstacleSink`][detection_loop::ObstacleSink].
//! - [`config`] – [`DetectorSettings`][config::DetectorSettings]: TOML-backed
//!   tuning with `DEPTHSEG_*` environment overrides.
//! - [`telemetry`] – [`init_tracing`][telemetry::init_tracing]: console
//!   logging plus optional OTLP span export.

pub mod config;
pub mod detection_loop;
pub mod telemetry;

pub use config::{ConfigError, DetectorSettings};
pub use detection_loop::{DetectionLoop, DetectionReport, FrameSource, LoopError, LoopStats, ObstacleSink};
pub use telemetry::{init_tracing, TracerProviderGuard};
