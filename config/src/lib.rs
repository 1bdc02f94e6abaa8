//! # Config Crate
//!
//! Centralized configuration constants for the partscan analysis pipeline.
//! All sampling strides, classification thresholds, and unit divisors are
//! defined here to ensure consistency across crates and easy configuration
//! management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{NORMAL_SAMPLE_STRIDE, PLANAR_NORMAL_THRESHOLD};
//!
//! // Walk a normal buffer at the shared sampling stride
//! let sampled: Vec<usize> = (0..500usize).step_by(NORMAL_SAMPLE_STRIDE).collect();
//! assert_eq!(sampled, vec![0, 100, 200, 300, 400]);
//!
//! // Classify a nearly axis-aligned normal as planar
//! let normal_x: f64 = 0.98;
//! assert!(normal_x.abs() > PLANAR_NORMAL_THRESHOLD);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Deterministic**: Strides and thresholds are part of the pipeline's
//!   output contract, never tuned per platform
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
