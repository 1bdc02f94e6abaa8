//! # Complexity Scoring
//!
//! Deterministic 0-100 machining complexity score with a categorical
//! level and a per-factor display breakdown.

use partscan_types::{ComplexityBreakdown, ComplexityLevel, ComplexityScore, GeometryFeatures, WallThickness};

/// Scores machining complexity from mesh statistics and stage outputs.
///
/// Four additive terms: a vertex-count band (5/15/30/40), a feature term
/// capped at 30, two points per curved surface bucket, and a 10-point
/// thin-wall penalty. The sum is clamped to [0, 100] and bucketed into a
/// level. The breakdown fields are independently clamped sub-estimates
/// for display and need not sum to the score.
pub fn score_complexity(
    vertex_count: usize,
    features: &GeometryFeatures,
    walls: &WallThickness,
) -> ComplexityScore {
    let mut score: u32 = if vertex_count < 1000 {
        5
    } else if vertex_count < 5000 {
        15
    } else if vertex_count < 15000 {
        30
    } else {
        40
    };

    let total_features = features.holes + features.pockets + features.threads;
    score += (total_features * 3).min(30);
    score += features.curved_surfaces * 2;

    if walls.has_thin_walls {
        score += 10;
    }

    let score = score.min(100);

    let level = if score < 30 {
        ComplexityLevel::Simple
    } else if score < 60 {
        ComplexityLevel::Moyen
    } else if score < 80 {
        ComplexityLevel::Complexe
    } else {
        ComplexityLevel::TresComplexe
    };

    ComplexityScore {
        score,
        level,
        breakdown: ComplexityBreakdown {
            geometry: (vertex_count as f64 / 500.0).min(40.0),
            features: f64::from((total_features * 3).min(30)),
            surfaces: f64::from(features.curved_surfaces * 2),
            walls: if walls.has_thin_walls { 10.0 } else { 0.0 },
        },
    }
}
