//! Unit tests verifying the relationships between configuration constants.

use super::*;

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_merge_tolerance_larger_than_epsilon() {
    assert!(
        DEFAULT_MERGE_TOLERANCE > EPSILON,
        "welding must be coarser than the geometric zero threshold"
    );
}

#[test]
fn test_profile_size_above_merge_tolerance() {
    assert!(
        DEFAULT_PROFILE_SIZE > DEFAULT_MERGE_TOLERANCE,
        "a default profile must survive welding"
    );
}

#[test]
fn test_segment_defaults_form_polygons() {
    assert!(MIN_SEGMENTS >= 3);
    assert!(DEFAULT_SEGMENTS >= MIN_SEGMENTS);
}

#[test]
fn test_hull_minimum_is_a_tetrahedron() {
    assert_eq!(MIN_HULL_POINTS, 4);
}

#[test]
fn test_floor_drop_thresholds_positive() {
    assert!(DEFAULT_MOVE_THRESHOLD > 0.0);
    assert!(RAY_ORIGIN_OFFSET > 0.0);
}
