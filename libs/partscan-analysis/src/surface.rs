//! # Surface Area Estimation
//!
//! Sampled triangle-area sum extrapolated to the full mesh. Full
//! enumeration is unnecessary for an estimate; sampling keeps the cost
//! nearly independent of mesh density.

use config::constants::{AREA_SAMPLE_STRIDE, AREA_SCALE_DIVISOR};
use partscan_mesh::TriangleMesh;

/// Estimates the total surface area of a mesh.
///
/// Walks the position buffer from index 0 at the area sampling stride,
/// treating each sampled index and its next two vertices as one triangle
/// (bounds-checked), and sums their Heron areas. The sampled sum is
/// extrapolated by `vertex_count / stride` and scaled to the reporting
/// unit.
///
/// Sampling is by raw vertex index, not triangle index: on meshes whose
/// vertex count is not stride-aligned, a sampled group may straddle two
/// real triangles. That arithmetic is part of the output contract.
pub fn estimate_surface_area(mesh: &TriangleMesh) -> f64 {
    let positions = mesh.positions();
    let mut sampled_area = 0.0;

    let mut i = 0;
    while i < positions.len() {
        if i + 2 < positions.len() {
            let a = positions[i].distance(positions[i + 1]);
            let b = positions[i + 1].distance(positions[i + 2]);
            let c = positions[i + 2].distance(positions[i]);
            let s = (a + b + c) / 2.0;
            // Rounding can push the radicand of a degenerate sample
            // slightly negative; clamp instead of propagating NaN.
            sampled_area += (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt();
        }
        i += AREA_SAMPLE_STRIDE;
    }

    let sampling_ratio = positions.len() as f64 / AREA_SAMPLE_STRIDE as f64;
    sampled_area * sampling_ratio / AREA_SCALE_DIVISOR
}
