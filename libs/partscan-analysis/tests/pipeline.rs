//! End-to-end pipeline tests: synthetic STL bytes in, profile out.

use partscan_analysis::{analyze_part, default_profile, try_analyze_part, ComplexityLevel, MeshError, RecommendationKind};

/// One triangle: (facet normal, [v0, v1, v2]).
type Facet = ([f32; 3], [[f32; 3]; 3]);

fn binary_stl(facets: &[Facet]) -> Vec<u8> {
    let mut data = vec![0u8; 80];
    data.extend_from_slice(&(facets.len() as u32).to_le_bytes());
    for (normal, vertices) in facets {
        for c in normal {
            data.extend_from_slice(&c.to_le_bytes());
        }
        for vertex in vertices {
            for c in vertex {
                data.extend_from_slice(&c.to_le_bytes());
            }
        }
        data.extend_from_slice(&0u16.to_le_bytes());
    }
    data
}

/// An axis-aligned cube spanning [0, s]^3 as 12 triangles.
fn cube_facets(s: f32) -> Vec<Facet> {
    vec![
        // bottom (z = 0)
        ([0.0, 0.0, -1.0], [[0.0, 0.0, 0.0], [0.0, s, 0.0], [s, s, 0.0]]),
        ([0.0, 0.0, -1.0], [[0.0, 0.0, 0.0], [s, s, 0.0], [s, 0.0, 0.0]]),
        // top (z = s)
        ([0.0, 0.0, 1.0], [[0.0, 0.0, s], [s, 0.0, s], [s, s, s]]),
        ([0.0, 0.0, 1.0], [[0.0, 0.0, s], [s, s, s], [0.0, s, s]]),
        // front (y = 0)
        ([0.0, -1.0, 0.0], [[0.0, 0.0, 0.0], [s, 0.0, 0.0], [s, 0.0, s]]),
        ([0.0, -1.0, 0.0], [[0.0, 0.0, 0.0], [s, 0.0, s], [0.0, 0.0, s]]),
        // back (y = s)
        ([0.0, 1.0, 0.0], [[0.0, s, 0.0], [0.0, s, s], [s, s, s]]),
        ([0.0, 1.0, 0.0], [[0.0, s, 0.0], [s, s, s], [s, s, 0.0]]),
        // left (x = 0)
        ([-1.0, 0.0, 0.0], [[0.0, 0.0, 0.0], [0.0, 0.0, s], [0.0, s, s]]),
        ([-1.0, 0.0, 0.0], [[0.0, 0.0, 0.0], [0.0, s, s], [0.0, s, 0.0]]),
        // right (x = s)
        ([1.0, 0.0, 0.0], [[s, 0.0, 0.0], [s, s, 0.0], [s, s, s]]),
        ([1.0, 0.0, 0.0], [[s, 0.0, 0.0], [s, s, s], [s, 0.0, s]]),
    ]
}

#[test]
fn ten_millimeter_cube_profile() {
    let profile = try_analyze_part(&binary_stl(&cube_facets(10.0)), "cube.stl").unwrap();

    assert_eq!(profile.volume, 1.0);
    assert_eq!(profile.dimensions, "10.0 x 10.0 x 10.0 mm");
    assert_eq!(profile.vertex_count, 36);
    assert_eq!(profile.face_count, 12);

    // All cube normals are axis-aligned
    assert_eq!(profile.features.flat_surfaces, 10);
    assert_eq!(profile.features.curved_surfaces, 0);
    assert_eq!(profile.features.flat_surfaces + profile.features.curved_surfaces, 10);

    // min dimension 10 estimates a 1.00mm wall, under the 1.5mm limit
    assert_eq!(profile.wall_thickness.min, "1.00");
    assert_eq!(profile.wall_thickness.max, "2.00");
    assert!(profile.wall_thickness.has_thin_walls);
    assert_eq!(profile.wall_thickness.warnings.len(), 1);

    // 5 (vertex band) + 10 (thin walls)
    assert_eq!(profile.complexity.score, 15);
    assert_eq!(profile.complexity.level, ComplexityLevel::Simple);
    assert_eq!(profile.complexity.breakdown.walls, 10.0);

    // One sampled triangle of area 50, extrapolated by 36/300, scaled by 1/100
    assert_eq!(profile.surface_area, "0.1");
    assert_eq!(profile.sv_ratio, "0.06");

    assert!(profile.difficult_zones.is_empty());
}

#[test]
fn cube_recommendations_are_rule_ordered() {
    let profile = try_analyze_part(&binary_stl(&cube_facets(10.0)), "cube.stl").unwrap();

    // Thin walls (rule 1), then 3-axis process suggestion (rule 4)
    assert_eq!(profile.recommendations.len(), 2);
    assert_eq!(profile.recommendations[0].kind, RecommendationKind::Warning);
    assert_eq!(profile.recommendations[0].category, "Structure");
    assert!(profile.recommendations[0].message.contains("1.00mm"));
    assert_eq!(profile.recommendations[1].kind, RecommendationKind::Success);
    assert_eq!(profile.recommendations[1].category, "Process");
}

#[test]
fn fifty_millimeter_cube_has_no_thin_walls() {
    let profile = try_analyze_part(&binary_stl(&cube_facets(50.0)), "cube.stl").unwrap();

    assert_eq!(profile.volume, 125.0);
    assert_eq!(profile.dimensions, "50.0 x 50.0 x 50.0 mm");
    assert!(!profile.wall_thickness.has_thin_walls);
    assert!(profile.wall_thickness.warnings.is_empty());
    assert_eq!(profile.complexity.score, 5);

    // Only the 3-axis suggestion remains
    assert_eq!(profile.recommendations.len(), 1);
    assert_eq!(profile.recommendations[0].category, "Process");
}

#[test]
fn ascii_stl_flows_through_the_same_pipeline() {
    let text = b"solid plate
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 10 0 0
      vertex 0 10 0
    endloop
  endfacet
endsolid plate
";
    let profile = try_analyze_part(text, "plate.stl").unwrap();
    assert_eq!(profile.vertex_count, 3);
    assert_eq!(profile.face_count, 1);
    assert_eq!(profile.features.flat_surfaces, 10);
}

#[test]
fn unsupported_extension_propagates_from_try() {
    let err = try_analyze_part(&binary_stl(&cube_facets(10.0)), "cube.obj").unwrap_err();
    assert!(matches!(err, MeshError::UnsupportedFormat { .. }));
}

#[test]
fn unsupported_extension_falls_back_to_default_profile() {
    let profile = analyze_part(&binary_stl(&cube_facets(10.0)), "cube.obj");
    assert_eq!(profile, default_profile());
}

#[test]
fn corrupt_buffer_falls_back_to_default_profile() {
    let profile = analyze_part(b"definitely not an stl", "part.stl");
    assert_eq!(profile, default_profile());
    assert_eq!(profile.complexity.score, 45);
    assert_eq!(profile.complexity.level, ComplexityLevel::Moyen);
    assert_eq!(profile.volume, 125.5);
    assert_eq!(profile.vertex_count, 2400);
    assert!(profile.recommendations.is_empty());
}

#[test]
fn successful_analysis_never_equals_the_fallback() {
    let profile = analyze_part(&binary_stl(&cube_facets(10.0)), "cube.stl");
    assert_ne!(profile, default_profile());
}
