//! # Teapot Tests

use super::*;
use approx::assert_relative_eq;

#[test]
fn test_bezier_endpoints() {
    let p = [DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z];
    assert_eq!(bezier(p, 0.0), DVec3::ZERO);
    assert_eq!(bezier(p, 1.0), DVec3::Z);
    assert_eq!(bezier_derivative(p, 0.0), DVec3::X * 3.0);
    assert_eq!(bezier_derivative(p, 1.0), (DVec3::Z - DVec3::Y) * 3.0);
}

#[test]
fn test_bezier_derivative_matches_difference() {
    let p = [
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 2.0, 0.0),
        DVec3::new(2.0, -1.0, 1.0),
        DVec3::new(3.0, 0.5, 0.0),
    ];
    let h = 1e-6;
    let numeric = (bezier(p, 0.4 + h) - bezier(p, 0.4 - h)) / (2.0 * h);
    let analytic = bezier_derivative(p, 0.4);
    assert_relative_eq!(numeric.x, analytic.x, epsilon = 1e-6);
    assert_relative_eq!(numeric.y, analytic.y, epsilon = 1e-6);
    assert_relative_eq!(numeric.z, analytic.z, epsilon = 1e-6);
}

#[test]
fn test_subdivision_clamped() {
    let (mesh, cache) = generate(&TeapotParams {
        scale: 1.0,
        subdivision: 0,
    });
    assert_eq!(cache.samples, 2);
    assert_eq!(mesh.vertex_count(), 32 * 4);
}

#[test]
fn test_normals_are_unit() {
    let (mesh, _) = generate(&TeapotParams::default());
    for n in mesh.normals() {
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn test_scale_reshape() {
    let (mut mesh, cache) = generate(&TeapotParams::default());
    let unit_bounds = mesh.bounds();
    let scaled = TeapotParams {
        scale: 2.0,
        ..Default::default()
    };
    assert_eq!(reshape(&scaled, &cache, &mut mesh), ReshapeOutcome::Applied);
    mesh.recompute_bounds();
    assert_relative_eq!(mesh.bounds().max.y, unit_bounds.max.y * 2.0, epsilon = 1e-12);
    assert_relative_eq!(mesh.bounds().min.x, unit_bounds.min.x * 2.0, epsilon = 1e-12);
}
