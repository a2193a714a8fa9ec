use config::constants::RESHAPE_TOLERANCE;
use glam::{DVec2, DVec3, UVec2};
use metamesh::primitives::{
    capsule::CapsuleParams, cone::ConeParams, cube::BoxParams, cylinder::CylinderParams,
    disc::DiscParams, icosphere::IcosphereParams, plane::PlaneParams, ring::RingParams,
    rounded_box::RoundedBoxParams, sphere::SphereParams, teapot::TeapotParams,
    torus::TorusParams, triangle::TriangleParams,
};
use metamesh::{
    generate, reshape, Axis, IndexFormat, MeshBuffers, PivotAnchor, PivotSpec, ShapeKind,
    ShapeParameters,
};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A starting parameter set, a shape-only edit of it, and a topology edit.
struct Case {
    start: ShapeParameters,
    reshaped: ShapeParameters,
    rebuilt: ShapeParameters,
}

fn cases() -> Vec<Case> {
    use ShapeParameters as P;

    vec![
        Case {
            start: P::Plane(PlaneParams {
                size: DVec2::new(2.0, 1.0),
                subdivisions: UVec2::new(4, 3),
                axis: Axis::Z,
                double_sided: true,
            }),
            reshaped: P::Plane(PlaneParams {
                size: DVec2::new(5.0, 0.5),
                subdivisions: UVec2::new(4, 3),
                axis: Axis::Z,
                double_sided: true,
            }),
            rebuilt: P::Plane(PlaneParams {
                size: DVec2::new(2.0, 1.0),
                subdivisions: UVec2::new(4, 3),
                axis: Axis::X,
                double_sided: true,
            }),
        },
        Case {
            start: P::Box(BoxParams::new(2.0, 2.0, 2.0)),
            reshaped: P::Box(BoxParams::new(4.0, 1.0, 3.0)),
            rebuilt: P::RoundedBox(RoundedBoxParams::default()),
        },
        Case {
            start: P::Sphere(SphereParams {
                radius: 1.0,
                columns: 12,
                rows: 6,
            }),
            reshaped: P::Sphere(SphereParams {
                radius: 2.5,
                columns: 12,
                rows: 6,
            }),
            rebuilt: P::Sphere(SphereParams {
                radius: 1.0,
                columns: 12,
                rows: 7,
            }),
        },
        Case {
            start: P::Icosphere(IcosphereParams {
                radius: 1.0,
                subdivision: 2,
            }),
            reshaped: P::Icosphere(IcosphereParams {
                radius: 0.3,
                subdivision: 2,
            }),
            rebuilt: P::Icosphere(IcosphereParams {
                radius: 1.0,
                subdivision: 3,
            }),
        },
        Case {
            start: P::Cylinder(CylinderParams {
                columns: 10,
                rows: 2,
                axis: Axis::X,
                ..Default::default()
            }),
            reshaped: P::Cylinder(CylinderParams {
                top_radius: 0.25,
                bottom_radius: 1.5,
                height: 3.0,
                columns: 10,
                rows: 2,
                axis: Axis::X,
                caps: true,
            }),
            rebuilt: P::Cylinder(CylinderParams {
                columns: 10,
                rows: 2,
                axis: Axis::X,
                caps: false,
                ..Default::default()
            }),
        },
        Case {
            start: P::RoundedBox(RoundedBoxParams::default()),
            reshaped: P::RoundedBox(RoundedBoxParams {
                width: 3.0,
                height: 0.5,
                depth: 1.5,
                radius: 0.2,
                divisions: RoundedBoxParams::default().divisions,
            }),
            rebuilt: P::RoundedBox(RoundedBoxParams {
                divisions: 1,
                ..Default::default()
            }),
        },
        Case {
            start: P::Ring(RingParams {
                segments: 12,
                double_sided: true,
                ..Default::default()
            }),
            reshaped: P::Ring(RingParams {
                radius: 2.0,
                width: 1.0,
                angle: 0.6,
                segments: 12,
                axis: Axis::Z,
                double_sided: true,
            }),
            rebuilt: P::Ring(RingParams {
                segments: 13,
                double_sided: true,
                ..Default::default()
            }),
        },
        Case {
            start: P::Disc(DiscParams {
                segments: 9,
                axis: Axis::Y,
                ..Default::default()
            }),
            reshaped: P::Disc(DiscParams {
                radius: 0.4,
                angle: 0.25,
                segments: 9,
                axis: Axis::Y,
                double_sided: false,
            }),
            rebuilt: P::Disc(DiscParams {
                segments: 9,
                axis: Axis::Y,
                double_sided: true,
                ..Default::default()
            }),
        },
        Case {
            start: P::Teapot(TeapotParams {
                scale: 1.0,
                subdivision: 6,
            }),
            reshaped: P::Teapot(TeapotParams {
                scale: 3.0,
                subdivision: 6,
            }),
            rebuilt: P::Teapot(TeapotParams {
                scale: 1.0,
                subdivision: 7,
            }),
        },
        Case {
            start: P::Triangle(TriangleParams::default()),
            reshaped: P::Triangle(TriangleParams {
                vertex1: DVec3::new(0.0, 0.0, 1.0),
                vertex2: DVec3::new(2.0, 1.0, 0.0),
                vertex3: DVec3::new(-1.0, 3.0, 0.5),
                double_sided: false,
            }),
            rebuilt: P::Triangle(TriangleParams {
                double_sided: true,
                ..Default::default()
            }),
        },
        Case {
            start: P::Torus(TorusParams {
                major_segments: 12,
                minor_segments: 6,
                arc_end: 270.0,
                end_caps: true,
                ..Default::default()
            }),
            reshaped: P::Torus(TorusParams {
                major_radius: 3.0,
                minor_radius: 0.75,
                major_segments: 12,
                minor_segments: 6,
                arc_start: 45.0,
                arc_end: 180.0,
                end_caps: true,
            }),
            rebuilt: P::Torus(TorusParams {
                major_segments: 12,
                minor_segments: 6,
                arc_end: 270.0,
                end_caps: false,
                ..Default::default()
            }),
        },
        Case {
            start: P::Cone(ConeParams {
                segments: 8,
                ..Default::default()
            }),
            reshaped: P::Cone(ConeParams {
                radius: 2.0,
                height: 0.5,
                segments: 8,
                ..Default::default()
            }),
            rebuilt: P::Cone(ConeParams {
                segments: 8,
                generate_uv: false,
                ..Default::default()
            }),
        },
        Case {
            start: P::Capsule(CapsuleParams {
                direction: Axis::Z,
                radial_segments: 10,
                cap_segments: 4,
                ..Default::default()
            }),
            reshaped: P::Capsule(CapsuleParams {
                radius: 0.8,
                height: 5.0,
                direction: Axis::Z,
                radial_segments: 10,
                cap_segments: 4,
                ..Default::default()
            }),
            rebuilt: P::Capsule(CapsuleParams {
                direction: Axis::X,
                radial_segments: 10,
                cap_segments: 4,
                ..Default::default()
            }),
        },
    ]
}

fn assert_close(actual: &MeshBuffers, expected: &MeshBuffers, label: &str) {
    assert_eq!(actual.vertex_count(), expected.vertex_count(), "{label}");
    for (a, e) in actual.positions().iter().zip(expected.positions()) {
        assert!(a.abs_diff_eq(*e, RESHAPE_TOLERANCE), "{label}: position {a:?} != {e:?}");
    }
    for (a, e) in actual.normals().iter().zip(expected.normals()) {
        assert!(a.abs_diff_eq(*e, RESHAPE_TOLERANCE), "{label}: normal {a:?} != {e:?}");
    }
    match (actual.uvs(), expected.uvs()) {
        (Some(a), Some(e)) => {
            for (a, e) in a.iter().zip(e) {
                assert!(a.abs_diff_eq(*e, RESHAPE_TOLERANCE), "{label}: uv {a:?} != {e:?}");
            }
        }
        (None, None) => {}
        _ => panic!("{label}: uv channel presence differs"),
    }
}

fn check_buffers(mesh: &MeshBuffers, label: &str) {
    mesh.validate().unwrap_or_else(|e| panic!("{label}: {e}"));
    assert_eq!(mesh.normals().len(), mesh.vertex_count(), "{label}");
    if let Some(uvs) = mesh.uvs() {
        assert_eq!(uvs.len(), mesh.vertex_count(), "{label}");
    }
    for n in mesh.normals() {
        assert!((n.length() - 1.0).abs() < 1e-6, "{label}: normal {n:?} not unit");
    }
}

fn check_winding(mesh: &MeshBuffers, label: &str) {
    let p = mesh.positions();
    let n = mesh.normals();
    for [a, b, c] in mesh.triangles() {
        let (a, b, c) = (a as usize, b as usize, c as usize);
        let face = (p[b] - p[a]).cross(p[c] - p[a]);
        if face.length() < 1e-10 {
            continue;
        }
        let vertex_normals = n[a] + n[b] + n[c];
        assert!(
            face.dot(vertex_normals) > 0.0,
            "{label}: triangle ({a}, {b}, {c}) wound against its normals"
        );
    }
}

#[test]
fn every_shape_produces_valid_buffers() {
    init();
    for case in cases() {
        for params in [&case.start, &case.reshaped, &case.rebuilt] {
            let state = generate(params, &PivotSpec::default());
            check_buffers(state.buffers(), &format!("{:?}", params.kind()));
        }
    }
}

#[test]
fn every_default_shape_produces_valid_buffers() {
    init();
    for kind in ShapeKind::ALL {
        let state = generate(&ShapeParameters::default_for(kind), &PivotSpec::default());
        check_buffers(state.buffers(), kind.name());
        assert!(state.buffers().triangle_count() > 0, "{kind} is empty");
    }
}

#[test]
fn triangles_are_wound_with_their_normals() {
    init();
    for case in cases() {
        for params in [&case.start, &case.reshaped, &case.rebuilt] {
            let state = generate(params, &PivotSpec::default());
            check_winding(state.buffers(), params.kind().name());
        }
    }
}

#[test]
fn shape_only_edits_keep_fingerprint() {
    for case in cases() {
        if case.start.kind() == case.reshaped.kind() {
            assert_eq!(
                case.start.fingerprint(),
                case.reshaped.fingerprint(),
                "{}",
                case.start.kind()
            );
        }
    }
}

#[test]
fn topology_edits_change_fingerprint() {
    for case in cases() {
        assert_ne!(
            case.start.fingerprint(),
            case.rebuilt.fingerprint(),
            "{}",
            case.start.kind()
        );
    }
}

#[test]
fn reshape_matches_regenerate() {
    init();
    let pivot = PivotSpec::default();
    for case in cases() {
        let label = case.start.kind().name();
        let original = generate(&case.start, &pivot);
        let mut state = Some(original.clone());

        assert!(reshape(&mut state, &case.reshaped, &pivot), "{label} did not reshape");
        let reshaped = state.unwrap();
        let fresh = generate(&case.reshaped, &pivot);

        assert_close(reshaped.buffers(), fresh.buffers(), label);
        assert_eq!(
            reshaped.buffers().indices(),
            original.buffers().indices(),
            "{label}: reshape touched the index buffer"
        );
        assert_eq!(reshaped.buffers().bounds(), fresh.buffers().bounds(), "{label}");
    }
}

#[test]
fn reshape_matches_regenerate_with_pivot() {
    init();
    let pivot = PivotSpec::new(PivotAnchor::Min, PivotAnchor::Max, PivotAnchor::Center)
        .with_normalize(true);
    for case in cases() {
        let label = case.start.kind().name();
        let mut state = Some(generate(&case.start, &pivot));
        assert!(reshape(&mut state, &case.reshaped, &pivot), "{label}");
        let fresh = generate(&case.reshaped, &pivot);
        assert_close(state.unwrap().buffers(), fresh.buffers(), label);
    }
}

#[test]
fn topology_edit_falls_back_to_generate() {
    init();
    let pivot = PivotSpec::default();
    for case in cases() {
        let mut state = Some(generate(&case.start, &pivot));
        assert!(!reshape(&mut state, &case.rebuilt, &pivot));
        assert_eq!(state.unwrap(), generate(&case.rebuilt, &pivot));
    }
}

#[test]
fn min_pivot_zeroes_min_bound() {
    let pivot = PivotSpec::new(PivotAnchor::Min, PivotAnchor::Min, PivotAnchor::Min);
    for kind in ShapeKind::ALL {
        let state = generate(&ShapeParameters::default_for(kind), &pivot);
        let min = state.buffers().bounds().min;
        assert_eq!(min, DVec3::ZERO, "{kind}");
    }
}

#[test]
fn normalize_scales_largest_extent_to_one() {
    let pivot = PivotSpec::new(PivotAnchor::Center, PivotAnchor::Min, PivotAnchor::Center)
        .with_normalize(true);
    for kind in ShapeKind::ALL {
        let state = generate(&ShapeParameters::default_for(kind), &pivot);
        let extent = state.buffers().bounds().size().max_element();
        assert!((extent - 1.0).abs() < RESHAPE_TOLERANCE, "{kind}: extent {extent}");
    }
}

#[test]
fn centered_pivot_leaves_positions_alone() {
    let params = ShapeParameters::default_for(ShapeKind::Cone);
    let plain = generate(&params, &PivotSpec::default());
    let normalized = generate(&params, &PivotSpec::default().with_normalize(true));
    assert_eq!(plain.buffers().positions(), normalized.buffers().positions());
}

#[test]
fn wide_indices_above_narrow_limit() {
    let dense = ShapeParameters::Sphere(SphereParams {
        radius: 1.0,
        columns: 300,
        rows: 300,
    });
    let state = generate(&dense, &PivotSpec::default());
    assert!(state.buffers().vertex_count() > 65_535);
    assert_eq!(state.buffers().index_format(), IndexFormat::U32);
    assert_eq!(state.buffers().index_buffer().len(), state.buffers().indices().len());

    let light = generate(&ShapeParameters::default(), &PivotSpec::default());
    assert_eq!(light.buffers().index_format(), IndexFormat::U16);
}

#[test]
fn sphere_grid_is_clamped() {
    let sphere = |columns, rows| {
        let params = ShapeParameters::Sphere(SphereParams {
            radius: 1.0,
            columns,
            rows,
        });
        generate(&params, &PivotSpec::default()).buffers().vertex_count()
    };
    assert_eq!(sphere(4, 2), 5 * 3);
    assert_eq!(sphere(2, 1), 4 * 3);
}

#[test]
fn icosphere_levels() {
    let icosphere = |subdivision| {
        let params = ShapeParameters::Icosphere(IcosphereParams {
            radius: 1.0,
            subdivision,
        });
        generate(&params, &PivotSpec::default()).into_buffers()
    };
    let base = icosphere(1);
    assert_eq!(base.vertex_count(), 12);
    assert_eq!(base.triangle_count(), 20);
    assert_eq!(icosphere(2).triangle_count(), 4 * base.triangle_count());
}

#[test]
fn count_edit_below_minimum_regenerates() {
    init();
    let pivot = PivotSpec::default();
    let edits = [
        (
            ShapeParameters::Sphere(SphereParams {
                radius: 1.0,
                columns: 1,
                rows: 2,
            }),
            ShapeParameters::Sphere(SphereParams {
                radius: 1.0,
                columns: 2,
                rows: 2,
            }),
        ),
        (
            ShapeParameters::Disc(DiscParams {
                segments: 0,
                ..Default::default()
            }),
            ShapeParameters::Disc(DiscParams {
                segments: 2,
                ..Default::default()
            }),
        ),
        (
            ShapeParameters::Icosphere(IcosphereParams {
                radius: 1.0,
                subdivision: 0,
            }),
            ShapeParameters::Icosphere(IcosphereParams {
                radius: 1.0,
                subdivision: 1,
            }),
        ),
    ];
    for (before, after) in edits {
        let label = before.kind().name();
        assert_ne!(before.fingerprint(), after.fingerprint(), "{label}");
        let mut state = Some(generate(&before, &pivot));
        assert!(!reshape(&mut state, &after, &pivot), "{label} reshaped in place");
        assert_eq!(state.unwrap(), generate(&after, &pivot), "{label}");
    }
}
