//! # Profile Assembly
//!
//! Sequences the analysis stages over a loaded mesh and assembles the
//! manufacturability profile, plus the fixed fallback profile used by
//! the fail-soft entry point.

use crate::complexity::score_complexity;
use crate::features::detect_features;
use crate::recommend::generate_recommendations;
use crate::surface::estimate_surface_area;
use crate::walls::estimate_wall_thickness;
use crate::zones::detect_difficult_zones;
use config::constants::VOLUME_SCALE_DIVISOR;
use partscan_mesh::TriangleMesh;
use partscan_types::{
    ComplexityBreakdown, ComplexityLevel, ComplexityScore, GeometryData, GeometryFeatures,
    WallThickness,
};

/// Runs every analysis stage over a loaded mesh and assembles the profile.
///
/// Pure and infallible: degenerate meshes flow through the stages'
/// zero-guards and produce a zero-dimensioned profile.
pub fn profile_mesh(mesh: &TriangleMesh) -> GeometryData {
    let size = mesh.bounding_size();
    let (width, height, depth) = (size.x, size.y, size.z);

    let volume = (width * height * depth).abs() / VOLUME_SCALE_DIVISOR;
    let vertex_count = mesh.vertex_count();
    let face_count = mesh.face_count();

    let features = detect_features(mesh);
    let wall_thickness = estimate_wall_thickness(size);
    let complexity = score_complexity(vertex_count, &features, &wall_thickness);
    let surface_area = estimate_surface_area(mesh);
    let sv_ratio = surface_area / volume.max(1.0);
    let difficult_zones = detect_difficult_zones(mesh);
    let recommendations = generate_recommendations(&features, &wall_thickness, &complexity);

    GeometryData {
        volume,
        dimensions: format!(
            "{:.1} x {:.1} x {:.1} mm",
            width.abs(),
            height.abs(),
            depth.abs()
        ),
        vertex_count,
        face_count,
        features,
        wall_thickness,
        complexity,
        surface_area: format!("{surface_area:.1}"),
        sv_ratio: format!("{sv_ratio:.2}"),
        difficult_zones,
        recommendations,
    }
}

/// Returns the fixed "average part" profile substituted when loading or
/// parsing fails.
///
/// Fully populated so the quoting UI always has a renderable result. The
/// constants are part of the output contract; callers that need to
/// distinguish a real analysis from the fallback must use
/// [`crate::try_analyze_part`].
pub fn default_profile() -> GeometryData {
    GeometryData {
        volume: 125.5,
        dimensions: "50.0 x 50.0 x 50.0 mm".to_string(),
        vertex_count: 2400,
        face_count: 800,
        features: GeometryFeatures {
            holes: 0,
            pockets: 0,
            threads: 0,
            flat_surfaces: 5,
            curved_surfaces: 5,
        },
        wall_thickness: WallThickness {
            min: "2.5".to_string(),
            max: "10.0".to_string(),
            has_thin_walls: false,
            warnings: Vec::new(),
        },
        complexity: ComplexityScore {
            score: 45,
            level: ComplexityLevel::Moyen,
            breakdown: ComplexityBreakdown {
                geometry: 15.0,
                features: 10.0,
                surfaces: 10.0,
                walls: 0.0,
            },
        },
        surface_area: "300.0".to_string(),
        sv_ratio: "2.39".to_string(),
        difficult_zones: Vec::new(),
        recommendations: Vec::new(),
    }
}
