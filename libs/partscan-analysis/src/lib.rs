//! # Partscan Analysis
//!
//! Manufacturability analysis pipeline: turns uploaded mesh bytes into a
//! structured [`GeometryData`] profile.
//!
//! ## Architecture
//!
//! ```text
//! bytes + file name → partscan-mesh (TriangleMesh) → partscan-analysis (GeometryData)
//! ```
//!
//! ## Stages
//!
//! Each stage is a pure, stateless function over the immutable mesh:
//! - **Feature detection**: holes, pockets, flat/curved surface split
//! - **Wall thickness**: bounding-box-proportional estimate
//! - **Surface area**: sampled Heron sums, extrapolated
//! - **Difficult zones**: sampled normal-variation proxy
//! - **Complexity**: 0-100 score, level, breakdown
//! - **Recommendations**: fixed-order rule evaluation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use partscan_analysis::analyze_part;
//!
//! let profile = analyze_part(&bytes, "bracket.stl");
//! println!("complexity: {}", profile.complexity.level);
//! ```
//!
//! [`analyze_part`] is fail-soft: a load failure is logged and replaced
//! by a fixed default profile so the caller always has a renderable
//! result. Use [`try_analyze_part`] when the failure must be observable.

pub mod complexity;
pub mod features;
pub mod profile;
pub mod recommend;
pub mod surface;
pub mod walls;
pub mod zones;

pub use complexity::score_complexity;
pub use features::detect_features;
pub use profile::{default_profile, profile_mesh};
pub use recommend::generate_recommendations;
pub use surface::estimate_surface_area;
pub use walls::estimate_wall_thickness;
pub use zones::detect_difficult_zones;

pub use partscan_mesh::{MeshError, TriangleMesh};
pub use partscan_types::{
    ComplexityBreakdown, ComplexityLevel, ComplexityScore, GeometryData, GeometryFeatures,
    Recommendation, RecommendationKind, WallThickness,
};

/// Loads and analyzes an uploaded part, propagating load failures.
///
/// # Errors
///
/// [`MeshError::UnsupportedFormat`] or [`MeshError::ParseFailure`] from
/// the loader. The analysis stages themselves cannot fail.
pub fn try_analyze_part(data: &[u8], file_name: &str) -> Result<GeometryData, MeshError> {
    let mesh = partscan_mesh::load_mesh(data, file_name)?;
    Ok(profile_mesh(&mesh))
}

/// Loads and analyzes an uploaded part, substituting a fixed default
/// profile when loading fails.
///
/// The substitution keeps the quoting UI renderable for corrupt or
/// unsupported uploads; the failure itself is emitted through [`log`]
/// so hosts can still surface it.
pub fn analyze_part(data: &[u8], file_name: &str) -> GeometryData {
    match try_analyze_part(data, file_name) {
        Ok(profile) => profile,
        Err(err) => {
            log::warn!("analysis of {file_name:?} failed, substituting default profile: {err}");
            default_profile()
        }
    }
}
