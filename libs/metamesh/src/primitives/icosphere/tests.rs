//! # Icosphere Tests

use super::*;
use approx::assert_relative_eq;

#[test]
fn test_level_one_is_icosahedron() {
    let builder = IcosphereBuilder::level(1);
    assert_eq!(builder.vertices.len(), 12);
    assert_eq!(builder.triangles.len(), 20);
}

#[test]
fn test_each_level_quadruples_triangles() {
    for level in 1..5 {
        let coarse = IcosphereBuilder::level(level).triangles.len();
        let fine = IcosphereBuilder::level(level + 1).triangles.len();
        assert_eq!(fine, coarse * 4);
    }
}

#[test]
fn test_shared_midpoints() {
    // Euler: V = 10 * 4^(n-1) + 2 when every edge midpoint is shared.
    assert_eq!(IcosphereBuilder::level(2).vertices.len(), 42);
    assert_eq!(IcosphereBuilder::level(3).vertices.len(), 162);
}

#[test]
fn test_vertices_on_unit_sphere() {
    for v in IcosphereBuilder::level(3).vertices {
        assert_relative_eq!(v.length(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_triangles_wound_outward() {
    let builder = IcosphereBuilder::level(2);
    for [a, b, c] in builder.triangles {
        let (a, b, c) = (
            builder.vertices[a as usize],
            builder.vertices[b as usize],
            builder.vertices[c as usize],
        );
        let face = (b - a).cross(c - a);
        assert!(face.dot(a + b + c) > 0.0);
    }
}

#[test]
fn test_subdivision_zero_clamps_to_one() {
    let (mesh, cache) = generate(&IcosphereParams {
        radius: 1.0,
        subdivision: 0,
    });
    assert_eq!(cache.level, 1);
    assert_eq!(mesh.triangle_count(), 20);
    assert!(mesh.uvs().is_none());
}

#[test]
fn test_reshape_scales_radius() {
    let (mut mesh, cache) = generate(&IcosphereParams {
        radius: 1.0,
        subdivision: 2,
    });
    let params = IcosphereParams {
        radius: 3.0,
        subdivision: 2,
    };
    assert_eq!(reshape(&params, &cache, &mut mesh), ReshapeOutcome::Applied);
    for p in mesh.positions() {
        assert_relative_eq!(p.length(), 3.0, epsilon = 1e-12);
    }
}
