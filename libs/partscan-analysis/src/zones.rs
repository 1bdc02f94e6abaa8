//! # Difficult Zone Detection
//!
//! Coarse proxy for sharp-edge density from sampled normal variation.
//! Not a reconstruction of actual edges.

use config::constants::{NORMAL_SAMPLE_STRIDE, SHARP_EDGE_DOT_THRESHOLD, SHARP_EDGE_ZONE_LIMIT};
use partscan_mesh::TriangleMesh;

/// Flags regions of rapid normal change as difficult machining zones.
///
/// Anchor indices step through the normal buffer at the sampling stride;
/// each anchor normal is compared to the normal immediately after it.
/// A dot product below the threshold (angular deviation greater than
/// ~45 degrees) counts as one sharp-edge transition. More than the limit
/// across the whole mesh emits a single zone label.
pub fn detect_difficult_zones(mesh: &TriangleMesh) -> Vec<String> {
    let normals = match mesh.normals() {
        Some(normals) => normals,
        None => return Vec::new(),
    };

    let mut sharp_edges = 0usize;
    let mut i = 0;
    while i + 1 < normals.len() {
        if normals[i].dot(normals[i + 1]) < SHARP_EDGE_DOT_THRESHOLD {
            sharp_edges += 1;
        }
        i += NORMAL_SAMPLE_STRIDE;
    }

    if sharp_edges > SHARP_EDGE_ZONE_LIMIT {
        vec!["Multiple sharp edges".to_string()]
    } else {
        Vec::new()
    }
}
