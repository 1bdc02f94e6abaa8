//! # Wall Thickness Estimation
//!
//! Bounding-box-proportional wall thickness estimate, independent of
//! mesh detail.

use config::constants::{MAX_WALL_DIVISOR, MIN_WALL_DIVISOR, THIN_WALL_LIMIT_MM};
use glam::DVec3;
use partscan_types::WallThickness;

/// Estimates the wall thickness range from the bounding-box size.
///
/// `min = smallest dimension / 10`, `max = largest dimension / 5`, both
/// in millimeters. A part whose estimated minimum falls below 1.5mm is
/// flagged and receives a fixed warning string.
pub fn estimate_wall_thickness(size: DVec3) -> WallThickness {
    let min_dim = size.min_element();
    let max_dim = size.max_element();

    let estimated_min = min_dim / MIN_WALL_DIVISOR;
    let estimated_max = max_dim / MAX_WALL_DIVISOR;

    let has_thin_walls = estimated_min < THIN_WALL_LIMIT_MM;
    let warnings = if has_thin_walls {
        vec![format!("Thin walls detected (<{THIN_WALL_LIMIT_MM}mm)")]
    } else {
        Vec::new()
    };

    WallThickness {
        min: format!("{estimated_min:.2}"),
        max: format!("{estimated_max:.2}"),
        has_thin_walls,
        warnings,
    }
}
