//! Tests for the WASM-facing pipeline helpers.

use super::*;

/// Confirms a corrupt upload flows through to the default profile.
#[test]
fn internal_helper_is_fail_soft() {
    let profile = analyze_part_internal(b"not a mesh", "broken.stl");
    assert_eq!(profile.complexity.score, 45);
    assert_eq!(profile.vertex_count, 2400);
    assert!(profile.recommendations.is_empty());
}

/// Ensures the JSON surface produces the wire shape the page consumes.
#[test]
fn json_surface_uses_camel_case_keys() {
    let json = analyze_part_json(b"not a mesh", "broken.stl");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(value["vertexCount"], 2400);
    assert_eq!(value["complexity"]["level"], "Moyen");
    assert_eq!(value["svRatio"], "2.39");
}

/// A well-formed binary STL produces a real profile, not the fallback.
#[test]
fn json_surface_analyzes_valid_uploads() {
    // Empty binary STL: 80-byte header + zero triangle count
    let data = vec![0u8; 84];
    let json = analyze_part_json(&data, "empty.stl");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(value["vertexCount"], 0);
    assert_eq!(value["dimensions"], "0.0 x 0.0 x 0.0 mm");
}
