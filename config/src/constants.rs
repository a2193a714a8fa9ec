//! # Configuration Constants
//!
//! Centralized constants for the primitive pipeline. Tolerances, sanitization
//! minimums, and default parameter values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Topology**: Fingerprint combining and index width limits
//! - **Sanitization**: Minimum segment counts per primitive
//! - **Defaults**: Initial parameter values for every shape kind

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for zero checks on lengths and extents before dividing by them.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance used when comparing reshaped buffers against regenerated ones.
///
/// A reshape edit must reproduce the positions and normals of a fresh
/// generate call within this distance per component.
///
/// # Example
///
/// ```rust
/// use config::constants::RESHAPE_TOLERANCE;
///
/// let reshaped = 0.500_000_1_f64;
/// let regenerated = 0.5_f64;
/// assert!((reshaped - regenerated).abs() < RESHAPE_TOLERANCE);
/// ```
pub const RESHAPE_TOLERANCE: f64 = 1e-5;

/// Length below which a Bezier tangent is treated as degenerate.
///
/// Teapot patches collapse a whole control row into a single point at the
/// lid and bottom poles; the tangent along that row is exactly zero there.
pub const DEGENERATE_TANGENT_EPSILON: f64 = 1e-12;

// =============================================================================
// TOPOLOGY CONSTANTS
// =============================================================================

/// Multiplier used to fold topology fields into a fingerprint.
///
/// Fingerprints are computed as `hash = hash * K + field` in declared
/// field order.
///
/// # Example
///
/// ```rust
/// use config::constants::FINGERPRINT_MULTIPLIER;
///
/// let hash = 7u64
///     .wrapping_mul(FINGERPRINT_MULTIPLIER)
///     .wrapping_add(3);
/// assert_eq!(hash, 7 * 23 + 3);
/// ```
pub const FINGERPRINT_MULTIPLIER: u64 = 23;

/// Largest vertex count addressable with 16-bit indices.
///
/// Any mesh with more vertices than this must use 32-bit indices.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_NARROW_INDEX_VERTICES;
///
/// assert_eq!(MAX_NARROW_INDEX_VERTICES, u16::MAX as usize);
/// ```
pub const MAX_NARROW_INDEX_VERTICES: usize = 65_535;

// =============================================================================
// SANITIZATION CONSTANTS
// =============================================================================

/// Minimum number of segments around any circular profile.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_RADIAL_SEGMENTS;
///
/// let requested = 1u32;
/// assert_eq!(requested.max(MIN_RADIAL_SEGMENTS), 3);
/// ```
pub const MIN_RADIAL_SEGMENTS: u32 = 3;

/// Minimum number of latitude rows of a UV sphere.
pub const MIN_SPHERE_ROWS: u32 = 2;

/// Minimum number of segments along a height or hemisphere profile.
pub const MIN_HEIGHT_SEGMENTS: u32 = 1;

/// Minimum number of vertices along each side of a subdivided plane.
pub const MIN_PLANE_SUBDIVISIONS: u32 = 2;

/// Minimum icosphere subdivision level (1 = plain icosahedron).
pub const MIN_ICOSPHERE_SUBDIVISION: u32 = 1;

/// Minimum number of samples along each edge of a teapot patch.
pub const MIN_TEAPOT_SUBDIVISION: u32 = 2;

/// Minimum number of divisions of a rounded box corner.
pub const MIN_ROUNDED_BOX_DIVISIONS: u32 = 1;

// =============================================================================
// DEFAULT PARAMETERS
// =============================================================================

/// Default box edge length on every axis.
pub const DEFAULT_BOX_SIZE: f64 = 1.0;

/// Default UV sphere radius.
pub const DEFAULT_SPHERE_RADIUS: f64 = 0.5;

/// Default UV sphere longitude count.
pub const DEFAULT_SPHERE_COLUMNS: u32 = 24;

/// Default UV sphere latitude count.
pub const DEFAULT_SPHERE_ROWS: u32 = 12;

/// Default icosphere radius.
pub const DEFAULT_ICOSPHERE_RADIUS: f64 = 1.0;

/// Default icosphere subdivision level.
pub const DEFAULT_ICOSPHERE_SUBDIVISION: u32 = 2;

/// Default cylinder radius (top and bottom).
pub const DEFAULT_CYLINDER_RADIUS: f64 = 1.0;

/// Default cylinder height.
pub const DEFAULT_CYLINDER_HEIGHT: f64 = 1.0;

/// Default cylinder column count.
pub const DEFAULT_CYLINDER_COLUMNS: u32 = 24;

/// Default cylinder row count.
pub const DEFAULT_CYLINDER_ROWS: u32 = 12;

/// Default rounded box corner divisions.
pub const DEFAULT_ROUNDED_BOX_DIVISIONS: u32 = 3;

/// Default rounded box corner radius.
pub const DEFAULT_ROUNDED_BOX_RADIUS: f64 = 0.1;

/// Default ring and disc radius.
pub const DEFAULT_FLAT_RADIUS: f64 = 1.0;

/// Default ring band width.
pub const DEFAULT_RING_WIDTH: f64 = 0.1;

/// Default ring and disc segment count.
pub const DEFAULT_FLAT_SEGMENTS: u32 = 32;

/// Default teapot samples per patch edge.
pub const DEFAULT_TEAPOT_SUBDIVISION: u32 = 10;

/// Default torus major radius (center of tube to center of torus).
pub const DEFAULT_TORUS_MAJOR_RADIUS: f64 = 1.0;

/// Default torus minor radius (tube radius).
pub const DEFAULT_TORUS_MINOR_RADIUS: f64 = 0.25;

/// Default torus segments around the major circle.
pub const DEFAULT_TORUS_MAJOR_SEGMENTS: u32 = 32;

/// Default torus segments around the tube.
pub const DEFAULT_TORUS_MINOR_SEGMENTS: u32 = 16;

/// Default cone base radius.
pub const DEFAULT_CONE_RADIUS: f64 = 0.5;

/// Default cone height.
pub const DEFAULT_CONE_HEIGHT: f64 = 1.0;

/// Default cone segment count.
pub const DEFAULT_CONE_SEGMENTS: u32 = 32;

/// Default capsule radius.
pub const DEFAULT_CAPSULE_RADIUS: f64 = 0.5;

/// Default capsule overall height, hemispheres included.
pub const DEFAULT_CAPSULE_HEIGHT: f64 = 2.0;

/// Default capsule radial segment count.
pub const DEFAULT_CAPSULE_RADIAL_SEGMENTS: u32 = 24;

/// Default capsule segments along the straight section.
pub const DEFAULT_CAPSULE_HEIGHT_SEGMENTS: u32 = 1;

/// Default capsule segments per hemisphere.
pub const DEFAULT_CAPSULE_CAP_SEGMENTS: u32 = 8;

/// Default plane edge length.
pub const DEFAULT_PLANE_SIZE: f64 = 1.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
