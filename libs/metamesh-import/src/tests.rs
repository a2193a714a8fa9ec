//! # Import Tests

use super::*;
use metamesh::primitives::sphere::SphereParams;
use metamesh::{IndexBuffer, IndexFormat, PivotAnchor, ShapeKind, ShapeParameters};

fn dense_sphere() -> ShapeParameters {
    ShapeParameters::Sphere(SphereParams {
        radius: 1.0,
        columns: 300,
        rows: 300,
    })
}

#[test]
fn test_default_settings_import_box() {
    let asset = import_mesh(&ImportSettings::default());
    assert_eq!(asset.kind, ShapeKind::Box);
    assert_eq!(asset.mesh().name(), asset::MESH_NAME);
    assert_eq!(asset.mesh().triangle_count(), 12);
    assert_eq!(asset.prefab.material, Material::default());
}

#[test]
fn test_streams_are_flattened() {
    let asset = import_mesh(&ImportSettings::default());
    let mesh = asset.mesh();
    assert_eq!(mesh.positions().len(), mesh.vertex_count() * 3);
    assert_eq!(mesh.normals().len(), mesh.vertex_count() * 3);
    assert_eq!(mesh.uvs().map(<[f32]>::len), Some(mesh.vertex_count() * 2));
}

#[test]
fn test_cpu_copy_only_when_read_write() {
    let locked = import_mesh(&ImportSettings::default());
    assert!(!locked.mesh().is_readable());

    let settings = ImportSettings {
        read_write: true,
        ..Default::default()
    };
    let readable = import_mesh(&settings);
    let copy = readable.mesh().cpu_copy().unwrap();
    assert_eq!(copy.vertex_count(), readable.mesh().vertex_count());
}

#[test]
fn test_wide_indices_for_dense_mesh() {
    let asset = import_mesh(&ImportSettings::new(dense_sphere()));
    assert_eq!(asset.mesh().index_format(), IndexFormat::U32);
    assert!(matches!(asset.mesh().indices(), IndexBuffer::U32(_)));
}

#[test]
fn test_lightmap_request_still_imports() {
    let settings = ImportSettings {
        generate_lightmap_uvs: true,
        ..Default::default()
    };
    let asset = import_mesh(&settings);
    assert_eq!(asset.mesh().vertex_count(), 24);
}

#[test]
fn test_pivot_applied_before_upload() {
    let mut settings = ImportSettings::default();
    settings.pivot.y = PivotAnchor::Min;
    let (min, _) = import_mesh(&settings).mesh().bounds();
    assert_eq!(min.y, 0.0);
}

#[test]
fn test_settings_from_json() {
    let settings = ImportSettings::from_json(
        r#"{
            "shape": { "kind": "Sphere", "radius": 2.0 },
            "pivot": { "y": "Max" },
            "read_write": true
        }"#,
    )
    .unwrap();
    assert_eq!(settings.shape.kind(), ShapeKind::Sphere);
    assert_eq!(settings.pivot.y, PivotAnchor::Max);
    assert_eq!(settings.pivot.x, PivotAnchor::Center);
    assert!(settings.read_write);
    assert!(!settings.generate_lightmap_uvs);
}

#[test]
fn test_settings_json_round_trip() {
    let settings = ImportSettings::new(dense_sphere());
    let json = settings.to_json().unwrap();
    assert_eq!(ImportSettings::from_json(&json).unwrap(), settings);
}

#[test]
fn test_invalid_json_is_settings_error() {
    let err = import_json("{ not json").unwrap_err();
    assert!(matches!(err, ImportError::Settings(_)));
}

#[test]
fn test_unknown_shape_name_is_mesh_error() {
    let err = ImportSettings::for_shape_name("klein-bottle").unwrap_err();
    assert!(matches!(err, ImportError::Mesh(_)));
}
