//! # Torus Tests

use super::*;
use approx::assert_relative_eq;

fn half_torus() -> TorusParams {
    TorusParams {
        major_radius: 2.0,
        minor_radius: 0.5,
        major_segments: 12,
        minor_segments: 8,
        arc_start: 0.0,
        arc_end: 180.0,
        end_caps: true,
    }
}

#[test]
fn test_full_torus_bounds() {
    let (mesh, _) = generate(&TorusParams {
        major_radius: 2.0,
        minor_radius: 0.5,
        ..Default::default()
    });
    assert_relative_eq!(mesh.bounds().max.x, 2.5, epsilon = 1e-12);
    assert_relative_eq!(mesh.bounds().max.y, 0.5, epsilon = 1e-12);
    assert_relative_eq!(mesh.bounds().min.z, -2.5, epsilon = 1e-12);
}

#[test]
fn test_half_sweep_stays_on_positive_z() {
    let (mesh, _) = generate(&TorusParams {
        end_caps: false,
        ..half_torus()
    });
    assert!(mesh.bounds().min.z > -1e-9);
}

#[test]
fn test_sweep_clamped_to_full_turn() {
    let params = TorusParams {
        arc_start: 10.0,
        arc_end: 900.0,
        ..Default::default()
    };
    let (_, sweep) = params.arc();
    assert_relative_eq!(sweep, TAU);

    let reversed = TorusParams {
        arc_start: 90.0,
        arc_end: 0.0,
        ..Default::default()
    };
    assert_eq!(reversed.arc().1, 0.0);
}

#[test]
fn test_cap_centers_recorded() {
    let (mesh, cache) = generate(&half_torus());
    let surface = (12 + 1) * (8 + 1);
    assert_eq!(cache.cap_centers, Some([surface, surface + 9]));

    let [start, end] = cache.cap_centers.unwrap();
    assert_relative_eq!(mesh.positions()[start as usize].x, 2.0, epsilon = 1e-12);
    assert_relative_eq!(mesh.positions()[end as usize].x, -2.0, epsilon = 1e-12);
    assert_relative_eq!(mesh.normals()[start as usize].z, -1.0, epsilon = 1e-12);
}

#[test]
fn test_arc_edit_reshapes() {
    let (mut mesh, cache) = generate(&half_torus());
    let edited = TorusParams {
        arc_end: 270.0,
        ..half_torus()
    };
    assert_eq!(edited.fingerprint(), half_torus().fingerprint());
    assert_eq!(reshape(&edited, &cache, &mut mesh), ReshapeOutcome::Applied);
}

#[test]
fn test_end_caps_toggle_is_topology() {
    let (mut mesh, cache) = generate(&half_torus());
    let edited = TorusParams {
        end_caps: false,
        ..half_torus()
    };
    assert_ne!(edited.fingerprint(), half_torus().fingerprint());
    assert_eq!(reshape(&edited, &cache, &mut mesh), ReshapeOutcome::NeedsRebuild);
}
