//! # Plane Primitive
//!
//! Subdivided rectangle facing a principal axis, centered on the origin.
//! `subdivisions` counts vertices per side, so (2, 2) is a single quad.

use super::{grid_triangles_flipped, MeshBuilder, ReshapeOutcome, VertexRewriter, VertexSink};
use crate::fingerprint::{FingerprintBuilder, TopologyFingerprint};
use crate::mesh::MeshBuffers;
use crate::shape::{Axis, FieldSpec, ShapeKind, ShapeRecord};
use config::constants::{DEFAULT_PLANE_SIZE, MIN_PLANE_SUBDIVISIONS};
use glam::{DVec2, DVec3, UVec2};
use serde::{Deserialize, Serialize};

/// Plane parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaneParams {
    /// Full extent along the two in-plane directions
    pub size: DVec2,
    /// Vertices per side
    pub subdivisions: UVec2,
    /// Direction the front face points to
    pub axis: Axis,
    pub double_sided: bool,
}

impl Default for PlaneParams {
    fn default() -> Self {
        Self {
            size: DVec2::splat(DEFAULT_PLANE_SIZE),
            subdivisions: UVec2::splat(MIN_PLANE_SUBDIVISIONS),
            axis: Axis::Y,
            double_sided: false,
        }
    }
}

/// Sanitized layout a plane mesh was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneTopology {
    pub columns: u32,
    pub rows: u32,
    pub axis: Axis,
    pub double_sided: bool,
}

impl PlaneTopology {
    fn side_vertices(&self) -> u32 {
        self.columns * self.rows
    }

    /// Total vertex count including the back side.
    pub fn vertex_count(&self) -> usize {
        let sides = if self.double_sided { 2 } else { 1 };
        (self.side_vertices() * sides) as usize
    }
}

impl PlaneParams {
    /// Clamps the grid to at least 2 × 2 vertices.
    pub fn topology(&self) -> PlaneTopology {
        let clamped = self.subdivisions.max(UVec2::splat(MIN_PLANE_SUBDIVISIONS));
        PlaneTopology {
            columns: clamped.x,
            rows: clamped.y,
            axis: self.axis,
            double_sided: self.double_sided,
        }
    }
}

impl ShapeRecord for PlaneParams {
    const KIND: ShapeKind = ShapeKind::Plane;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::shape_only("size"),
        FieldSpec::topology("subdivisions"),
        FieldSpec::topology("axis"),
        FieldSpec::topology("double_sided"),
    ];

    fn fingerprint(&self) -> TopologyFingerprint {
        FingerprintBuilder::new(Self::KIND)
            .field(self.subdivisions.x)
            .field(self.subdivisions.y)
            .field(self.axis)
            .field(self.double_sided)
            .finish()
    }
}

/// In-plane directions `(u, v)` for a plane facing `axis`, with `v × u = axis`.
fn plane_frame(axis: Axis) -> (DVec3, DVec3) {
    match axis {
        Axis::X => (DVec3::Z, DVec3::Y),
        Axis::Y => (DVec3::X, DVec3::Z),
        Axis::Z => (DVec3::NEG_X, DVec3::Y),
    }
}

fn emit_side(
    params: &PlaneParams,
    topology: &PlaneTopology,
    normal: DVec3,
    sink: &mut impl VertexSink,
) {
    let (du, dv) = plane_frame(topology.axis);
    for iy in 0..topology.rows {
        let v = f64::from(iy) / f64::from(topology.rows - 1);
        for ix in 0..topology.columns {
            let u = f64::from(ix) / f64::from(topology.columns - 1);
            let position = du * (u - 0.5) * params.size.x + dv * (v - 0.5) * params.size.y;
            sink.vertex(position, normal, DVec2::new(u, v));
        }
    }
}

fn emit_vertices(params: &PlaneParams, topology: &PlaneTopology, sink: &mut impl VertexSink) {
    let normal = topology.axis.unit();
    emit_side(params, topology, normal, sink);
    if topology.double_sided {
        emit_side(params, topology, -normal, sink);
    }
}

/// Generates the plane mesh.
///
/// # Example
///
/// ```rust
/// use metamesh::primitives::plane::{generate, PlaneParams};
/// use glam::UVec2;
///
/// let (mesh, _) = generate(&PlaneParams { subdivisions: UVec2::new(3, 4), ..Default::default() });
/// assert_eq!(mesh.vertex_count(), 12);
/// assert_eq!(mesh.triangle_count(), 2 * 2 * 3);
/// ```
pub fn generate(params: &PlaneParams) -> (MeshBuffers, PlaneTopology) {
    let topology = params.topology();
    let quads = (topology.columns - 1) * (topology.rows - 1);
    let sides = if topology.double_sided { 2 } else { 1 };
    let mut builder =
        MeshBuilder::with_capacity(topology.vertex_count(), (quads * 2 * sides) as usize, true);

    emit_vertices(params, &topology, &mut builder);
    grid_triangles_flipped(&mut builder, 0, topology.columns - 1, topology.rows - 1);
    if topology.double_sided {
        super::grid_triangles(
            &mut builder,
            topology.side_vertices(),
            topology.columns - 1,
            topology.rows - 1,
        );
    }

    (builder.finish(), topology)
}

/// Rewrites the grid for a new size.
pub fn reshape(
    params: &PlaneParams,
    cache: &PlaneTopology,
    buffers: &mut MeshBuffers,
) -> ReshapeOutcome {
    let topology = params.topology();
    if topology != *cache {
        return ReshapeOutcome::NeedsRebuild;
    }
    let mut rewriter = VertexRewriter::new(buffers);
    emit_vertices(params, &topology, &mut rewriter);
    rewriter.finish()
}
