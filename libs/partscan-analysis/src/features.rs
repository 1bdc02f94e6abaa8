//! # Feature Detection
//!
//! Heuristic estimates of geometric features from mesh statistics.
//! Not a topological reconstruction: hole and pocket counts scale with
//! mesh density, and the flat/curved split classifies subsampled normals.

use config::constants::{
    HOLE_VERTEX_DIVISOR, NORMAL_SAMPLE_STRIDE, PLANAR_NORMAL_THRESHOLD, POCKET_VERTEX_DIVISOR,
    SURFACE_SPLIT_BUCKETS,
};
use partscan_mesh::TriangleMesh;
use partscan_types::GeometryFeatures;

/// Estimates geometric feature counts for a mesh.
///
/// Hole and pocket counts derive from the vertex count alone. The
/// flat/curved split samples the normal buffer at a fixed stride and
/// counts samples with a dominant axis component as planar; the two
/// buckets always sum to 10 when normals are available. Without normals
/// (or with an empty normal buffer) the split stays at zero. The thread
/// count is reserved and not computed from geometry.
pub fn detect_features(mesh: &TriangleMesh) -> GeometryFeatures {
    let vertex_count = mesh.vertex_count();
    let holes = (vertex_count / HOLE_VERTEX_DIVISOR) as u32;
    let pockets = (vertex_count / POCKET_VERTEX_DIVISOR) as u32;

    let mut flat_surfaces = 0;
    let mut curved_surfaces = 0;

    if let Some(normals) = mesh.normals() {
        if !normals.is_empty() {
            let mut planar_count = 0usize;
            for normal in normals.iter().step_by(NORMAL_SAMPLE_STRIDE) {
                if normal.x.abs() > PLANAR_NORMAL_THRESHOLD
                    || normal.y.abs() > PLANAR_NORMAL_THRESHOLD
                    || normal.z.abs() > PLANAR_NORMAL_THRESHOLD
                {
                    planar_count += 1;
                }
            }

            let sampled_count = normals.len().div_ceil(NORMAL_SAMPLE_STRIDE);
            let planar_ratio = planar_count as f64 / sampled_count as f64;
            flat_surfaces = (planar_ratio * f64::from(SURFACE_SPLIT_BUCKETS)).floor() as u32;
            curved_surfaces = SURFACE_SPLIT_BUCKETS - flat_surfaces;
        }
    }

    GeometryFeatures {
        holes,
        pockets,
        threads: 0,
        flat_surfaces,
        curved_surfaces,
    }
}
