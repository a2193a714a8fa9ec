//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_reshape_tolerance_looser_than_epsilon() {
    assert!(
        RESHAPE_TOLERANCE > EPSILON,
        "RESHAPE_TOLERANCE should be looser than EPSILON"
    );
}

#[test]
fn test_degenerate_tangent_epsilon_is_tiny() {
    assert!(DEGENERATE_TANGENT_EPSILON > 0.0);
    assert!(DEGENERATE_TANGENT_EPSILON < EPSILON);
}

// =============================================================================
// TOPOLOGY TESTS
// =============================================================================

#[test]
fn test_narrow_index_limit_matches_u16() {
    assert_eq!(MAX_NARROW_INDEX_VERTICES, u16::MAX as usize);
}

#[test]
fn test_fingerprint_multiplier_is_small_prime() {
    assert!(FINGERPRINT_MULTIPLIER > 1);
    assert!((2..FINGERPRINT_MULTIPLIER).all(|d| FINGERPRINT_MULTIPLIER % d != 0));
}

// =============================================================================
// SANITIZATION TESTS
// =============================================================================

#[test]
fn test_minimums_form_valid_topology() {
    assert!(MIN_RADIAL_SEGMENTS >= 3, "a ring needs at least a triangle");
    assert!(MIN_SPHERE_ROWS >= 2);
    assert!(MIN_HEIGHT_SEGMENTS >= 1);
    assert!(MIN_PLANE_SUBDIVISIONS >= 2, "a grid needs two vertices per side");
    assert!(MIN_TEAPOT_SUBDIVISION >= 2);
    assert!(MIN_ICOSPHERE_SUBDIVISION >= 1);
    assert!(MIN_ROUNDED_BOX_DIVISIONS >= 1);
}

#[test]
fn test_defaults_respect_minimums() {
    assert!(DEFAULT_SPHERE_COLUMNS >= MIN_RADIAL_SEGMENTS);
    assert!(DEFAULT_SPHERE_ROWS >= MIN_SPHERE_ROWS);
    assert!(DEFAULT_CYLINDER_COLUMNS >= MIN_RADIAL_SEGMENTS);
    assert!(DEFAULT_FLAT_SEGMENTS >= MIN_RADIAL_SEGMENTS);
    assert!(DEFAULT_TORUS_MINOR_SEGMENTS >= MIN_RADIAL_SEGMENTS);
    assert!(DEFAULT_CONE_SEGMENTS >= MIN_RADIAL_SEGMENTS);
    assert!(DEFAULT_CAPSULE_RADIAL_SEGMENTS >= MIN_RADIAL_SEGMENTS);
    assert!(DEFAULT_TEAPOT_SUBDIVISION >= MIN_TEAPOT_SUBDIVISION);
    assert!(DEFAULT_ROUNDED_BOX_DIVISIONS >= MIN_ROUNDED_BOX_DIVISIONS);
}

#[test]
fn test_default_capsule_has_straight_section() {
    assert!(DEFAULT_CAPSULE_HEIGHT > 2.0 * DEFAULT_CAPSULE_RADIUS);
}

// =============================================================================
// HELPER FUNCTION TESTS
// =============================================================================

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(-1e-11));
    assert!(!approx_zero(1e-9));
}
