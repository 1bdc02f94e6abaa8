//! # Partscan Types
//!
//! Plain immutable value types for the manufacturability profile.
//! The analysis pipeline produces one [`GeometryData`] per uploaded mesh;
//! display and persistence collaborators consume it as a read-only value.
//!
//! All types are flat data aggregates with no behavior beyond formatting.
//! Field names serialize in camelCase because the profile crosses a
//! JavaScript boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Estimated geometric feature counts for a part.
///
/// Heuristic estimates derived from mesh statistics, not a topological
/// reconstruction. `flat_surfaces + curved_surfaces == 10` whenever the
/// mesh carried a non-empty normal buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryFeatures {
    /// Estimated number of drilled holes.
    pub holes: u32,
    /// Estimated number of milled pockets.
    pub pockets: u32,
    /// Estimated number of threaded features (reserved, currently always 0).
    pub threads: u32,
    /// Flat share of the 10-bucket surface split.
    pub flat_surfaces: u32,
    /// Curved share of the 10-bucket surface split.
    pub curved_surfaces: u32,
}

/// Estimated wall thickness range with a thin-wall flag.
///
/// `min` and `max` are millimeters rendered with exactly two fractional
/// digits, matching what the profile consumers display verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallThickness {
    pub min: String,
    pub max: String,
    pub has_thin_walls: bool,
    pub warnings: Vec<String>,
}

/// Discrete machining complexity category, ordered from easiest to hardest.
///
/// Serialized under the display names the quoting UI expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComplexityLevel {
    Simple,
    Moyen,
    Complexe,
    #[serde(rename = "Très Complexe")]
    TresComplexe,
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexityLevel::Simple => write!(f, "Simple"),
            ComplexityLevel::Moyen => write!(f, "Moyen"),
            ComplexityLevel::Complexe => write!(f, "Complexe"),
            ComplexityLevel::TresComplexe => write!(f, "Très Complexe"),
        }
    }
}

/// Per-factor display contributions backing a complexity score.
///
/// Each field is an independently clamped sub-estimate for display; the
/// four values need not sum to the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityBreakdown {
    pub geometry: f64,
    pub features: f64,
    pub surfaces: f64,
    pub walls: f64,
}

/// Aggregate machining complexity: a 0-100 score, its category, and the
/// per-factor breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityScore {
    /// Aggregate score, clamped to [0, 100].
    pub score: u32,
    pub level: ComplexityLevel,
    pub breakdown: ComplexityBreakdown,
}

/// Severity of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Warning,
    Info,
    Success,
}

/// One actionable finding for the quoting UI.
///
/// The position of a recommendation in its list encodes priority:
/// structural risk first, then cost risk, then optimizations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub category: String,
    pub title: String,
    pub message: String,
    pub impact: String,
    pub solution: String,
}

/// The complete manufacturability profile for one uploaded part.
///
/// Produced once per pipeline run and never mutated afterward. `volume`
/// is cm^3; `dimensions`, `surface_area`, and `sv_ratio` are pre-formatted
/// strings rendered exactly as the consumers display them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryData {
    pub volume: f64,
    pub dimensions: String,
    pub vertex_count: usize,
    pub face_count: usize,
    pub features: GeometryFeatures,
    pub wall_thickness: WallThickness,
    pub complexity: ComplexityScore,
    pub surface_area: String,
    pub sv_ratio: String,
    pub difficult_zones: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}
