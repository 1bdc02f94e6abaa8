//! # Recommendation Engine
//!
//! Rule evaluation in fixed priority order: structural risk, then cost
//! risk, then optimization, then process simplification. Each rule
//! independently appends zero or one recommendation; output order equals
//! rule order, with no sorting or deduplication.

use partscan_types::{ComplexityScore, GeometryFeatures, Recommendation, RecommendationKind, WallThickness};

/// Produces the ranked list of actionable findings for a part.
pub fn generate_recommendations(
    features: &GeometryFeatures,
    walls: &WallThickness,
    complexity: &ComplexityScore,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if walls.has_thin_walls {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Warning,
            category: "Structure".to_string(),
            title: "Low wall thickness".to_string(),
            message: format!(
                "Minimum thickness {}mm detected. Recommended: \u{2265}2mm for rigidity",
                walls.min
            ),
            impact: "Deformation risk".to_string(),
            solution: "Increase wall thickness to 2-3mm".to_string(),
        });
    }

    if complexity.score > 70 {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Info,
            category: "Machining".to_string(),
            title: "Complex part detected".to_string(),
            message: format!(
                "Complexity score: {}/100. Machining time increased.",
                complexity.score
            ),
            impact: "+30-50% machining time".to_string(),
            solution: "Simplify geometry where possible".to_string(),
        });
    }

    if features.holes > 5 {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Success,
            category: "Optimization".to_string(),
            title: "Multiple drilled holes".to_string(),
            message: format!("{} holes detected. Use standard diameters.", features.holes),
            impact: "Tooling savings".to_string(),
            solution: "Standard diameters: 3, 4, 5, 6, 8, 10, 12mm".to_string(),
        });
    }

    if complexity.score < 40 && features.curved_surfaces < 3 {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Success,
            category: "Process".to_string(),
            title: "Simple geometry".to_string(),
            message: "3-axis machining is sufficient".to_string(),
            impact: "-40% cost vs 5-axis".to_string(),
            solution: "Standard 3-axis milling recommended".to_string(),
        });
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complexity::score_complexity;

    fn features(holes: u32, curved: u32) -> GeometryFeatures {
        GeometryFeatures {
            holes,
            pockets: 0,
            threads: 0,
            flat_surfaces: 10 - curved,
            curved_surfaces: curved,
        }
    }

    fn walls(thin: bool) -> WallThickness {
        WallThickness {
            min: "0.80".to_string(),
            max: "4.00".to_string(),
            has_thin_walls: thin,
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_quiet_part_gets_no_warnings() {
        // Moderate score, some curvature: no rule fires
        let f = features(0, 5);
        let w = walls(false);
        let complexity = score_complexity(5000, &f, &w);
        assert_eq!(complexity.score, 40);
        assert!(generate_recommendations(&f, &w, &complexity).is_empty());
    }

    #[test]
    fn test_thin_walls_cite_measured_minimum() {
        let f = features(0, 5);
        let w = walls(true);
        let complexity = score_complexity(5000, &f, &w);
        let recs = generate_recommendations(&f, &w, &complexity);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].kind, RecommendationKind::Warning);
        assert_eq!(recs[0].category, "Structure");
        assert!(recs[0].message.contains("0.80mm"));
    }

    #[test]
    fn test_high_score_cites_score() {
        let f = features(10, 1);
        let w = walls(false);
        let complexity = score_complexity(15000, &f, &w);
        assert_eq!(complexity.score, 72);
        let recs = generate_recommendations(&f, &w, &complexity);
        assert_eq!(recs.len(), 2); // machining info + holes optimization
        assert_eq!(recs[0].kind, RecommendationKind::Info);
        assert!(recs[0].message.contains("72/100"));
    }

    #[test]
    fn test_thin_wall_rule_precedes_holes_rule() {
        // Triggers rule 1 (thin walls) and rule 3 (holes > 5) together
        let f = features(6, 5);
        let w = walls(true);
        let complexity = score_complexity(100, &f, &w);
        let recs = generate_recommendations(&f, &w, &complexity);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].category, "Structure");
        assert_eq!(recs[1].category, "Optimization");
    }

    #[test]
    fn test_simple_part_gets_three_axis_recommendation() {
        let f = features(0, 0);
        let w = walls(false);
        let complexity = score_complexity(100, &f, &w);
        assert_eq!(complexity.score, 5);
        let recs = generate_recommendations(&f, &w, &complexity);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].category, "Process");
        assert_eq!(recs[0].kind, RecommendationKind::Success);
    }

    #[test]
    fn test_three_axis_rule_needs_low_curvature() {
        let f = features(0, 3);
        let w = walls(false);
        let complexity = score_complexity(100, &f, &w);
        assert_eq!(complexity.score, 11);
        assert!(generate_recommendations(&f, &w, &complexity).is_empty());
    }
}
