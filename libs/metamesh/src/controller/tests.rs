//! # Controller Tests

use super::*;
use crate::pivot::PivotAnchor;
use crate::primitives::cube::BoxParams;
use crate::primitives::sphere::SphereParams;
use crate::primitives::torus::TorusParams;
use glam::DVec3;

fn boxed(width: f64) -> ShapeParameters {
    ShapeParameters::Box(BoxParams::new(width, 2.0, 2.0))
}

#[derive(Default)]
struct RecordingSink {
    uploads: Vec<usize>,
}

impl MeshSink for RecordingSink {
    fn upload(&mut self, buffers: &MeshBuffers) {
        self.uploads.push(buffers.vertex_count());
    }
}

#[test]
fn test_reshape_without_state_generates() {
    let mut state = None;
    assert!(!reshape(&mut state, &boxed(2.0), &PivotSpec::default()));
    assert!(state.is_some());
}

#[test]
fn test_box_scenario() {
    let pivot = PivotSpec::default();
    let mut state = Some(generate(&boxed(2.0), &pivot));
    let before = state.as_ref().unwrap().buffers().clone();
    assert_eq!(before.vertex_count(), 24);
    assert_eq!(before.indices().len(), 36);
    assert_eq!(before.bounds().min, DVec3::splat(-1.0));
    assert_eq!(before.bounds().max, DVec3::splat(1.0));

    assert!(reshape(&mut state, &boxed(4.0), &pivot));
    let after = state.unwrap().into_buffers();
    assert_eq!(after.bounds().min, DVec3::new(-2.0, -1.0, -1.0));
    assert_eq!(after.bounds().max, DVec3::new(2.0, 1.0, 1.0));
    assert_eq!(after.indices(), before.indices());
}

#[test]
fn test_topology_edit_regenerates() {
    let pivot = PivotSpec::default();
    let coarse = ShapeParameters::Sphere(SphereParams {
        radius: 1.0,
        columns: 8,
        rows: 4,
    });
    let fine = ShapeParameters::Sphere(SphereParams {
        radius: 1.0,
        columns: 16,
        rows: 4,
    });
    let mut state = Some(generate(&coarse, &pivot));
    assert!(!reshape(&mut state, &fine, &pivot));
    assert_eq!(state.unwrap(), generate(&fine, &pivot));
}

#[test]
fn test_kind_change_regenerates() {
    let pivot = PivotSpec::default();
    let mut state = Some(generate(&boxed(1.0), &pivot));
    let torus = ShapeParameters::Torus(TorusParams::default());
    assert!(!reshape(&mut state, &torus, &pivot));
    assert_eq!(state.as_ref().map(PrimitiveState::kind), Some(ShapeKind::Torus));
}

#[test]
fn test_reshape_reapplies_pivot() {
    let pivot = PivotSpec::new(PivotAnchor::Min, PivotAnchor::Min, PivotAnchor::Min);
    let mut state = Some(generate(&boxed(2.0), &pivot));
    assert!(reshape(&mut state, &boxed(6.0), &pivot));
    let bounds = state.unwrap().buffers().bounds();
    assert_eq!(bounds.min, DVec3::ZERO);
    assert_eq!(bounds.max, DVec3::new(6.0, 2.0, 2.0));
}

#[test]
fn test_primitive_drops_state_on_kind_change() {
    let mut primitive = Primitive::new(boxed(1.0), PivotSpec::default());
    primitive.regenerate();
    assert!(primitive.state().is_some());

    primitive.set_parameters(ShapeParameters::Sphere(SphereParams::default()));
    assert!(primitive.state().is_none());
    assert!(!primitive.refresh());
}

#[test]
fn test_primitive_upload() {
    let mut primitive = Primitive::new(boxed(1.0), PivotSpec::default());
    let mut sink = RecordingSink::default();
    assert!(!primitive.upload(&mut sink));
    primitive.set_parameters(boxed(3.0));
    assert!(primitive.upload(&mut sink));
    assert_eq!(sink.uploads, vec![24, 24]);
}
