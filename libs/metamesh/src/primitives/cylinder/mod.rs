//! # Cylinder Primitive
//!
//! Surface of revolution between a bottom and a top radius, with optional
//! flat caps. Unequal radii give a truncated cone with tilted side normals.


use super::{grid_triangles_flipped, MeshBuilder, ReshapeOutcome, VertexRewriter, VertexSink};
use crate::fingerprint::{FingerprintBuilder, TopologyFingerprint};
use crate::mesh::MeshBuffers;
use crate::shape::{Axis, FieldSpec, ShapeKind, ShapeRecord};
use config::constants::{
    DEFAULT_CYLINDER_COLUMNS, DEFAULT_CYLINDER_HEIGHT, DEFAULT_CYLINDER_RADIUS,
    DEFAULT_CYLINDER_ROWS, MIN_HEIGHT_SEGMENTS, MIN_RADIAL_SEGMENTS,
};
use glam::{DQuat, DVec2, DVec3};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Cylinder parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CylinderParams {
    pub top_radius: f64,
    pub bottom_radius: f64,
    pub height: f64,
    /// Segments around the axis
    pub columns: u32,
    /// Segments along the axis
    pub rows: u32,
    pub axis: Axis,
    pub caps: bool,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            top_radius: DEFAULT_CYLINDER_RADIUS,
            bottom_radius: DEFAULT_CYLINDER_RADIUS,
            height: DEFAULT_CYLINDER_HEIGHT,
            columns: DEFAULT_CYLINDER_COLUMNS,
            rows: DEFAULT_CYLINDER_ROWS,
            axis: Axis::Y,
            caps: true,
        }
    }
}

/// Sanitized layout a cylinder mesh was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CylinderTopology {
    pub columns: u32,
    pub rows: u32,
    pub axis: Axis,
    pub caps: bool,
}

impl CylinderTopology {
    /// Number of vertices in the side grid and caps.
    pub fn vertex_count(&self) -> usize {
        let side = (self.columns as usize + 1) * (self.rows as usize + 1);
        let caps = if self.caps {
            2 + 2 * self.columns as usize
        } else {
            0
        };
        side + caps
    }
}

impl CylinderParams {
    /// Clamps the grid to at least 3 columns and 1 row.
    pub fn topology(&self) -> CylinderTopology {
        CylinderTopology {
            columns: self.columns.max(MIN_RADIAL_SEGMENTS),
            rows: self.rows.max(MIN_HEIGHT_SEGMENTS),
            axis: self.axis,
            caps: self.caps,
        }
    }
}

impl ShapeRecord for CylinderParams {
    const KIND: ShapeKind = ShapeKind::Cylinder;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::shape_only("top_radius"),
        FieldSpec::shape_only("bottom_radius"),
        FieldSpec::shape_only("height"),
        FieldSpec::topology("columns"),
        FieldSpec::topology("rows"),
        FieldSpec::topology("axis"),
        FieldSpec::topology("caps"),
    ];

    fn fingerprint(&self) -> TopologyFingerprint {
        FingerprintBuilder::new(Self::KIND)
            .field(self.columns)
            .field(self.rows)
            .field(self.axis)
            .field(self.caps)
            .finish()
    }
}

fn emit_vertices(
    params: &CylinderParams,
    topology: &CylinderTopology,
    sink: &mut impl VertexSink,
) {
    let axis = topology.axis.unit();
    let radial = topology.axis.next().unit();
    let half_height = params.height * 0.5;

    // Side normal at angle zero: perpendicular to the slanted edge.
    let edge = radial * (params.top_radius - params.bottom_radius) + axis * params.height;
    let side_normal = axis
        .cross(radial)
        .cross(edge)
        .try_normalize()
        .unwrap_or(radial);

    for iy in 0..=topology.rows {
        let v = f64::from(iy) / f64::from(topology.rows);
        let radius = params.bottom_radius + (params.top_radius - params.bottom_radius) * v;

        for ix in 0..=topology.columns {
            let u = f64::from(ix) / f64::from(topology.columns);
            let rotation = DQuat::from_axis_angle(axis, -TAU * u);
            let position = rotation * radial * radius + axis * (v - 0.5) * params.height;
            sink.vertex(position, rotation * side_normal, DVec2::new(u, v));
        }
    }

    if !topology.caps {
        return;
    }

    let center_uv = DVec2::splat(0.5);
    sink.vertex(-axis * half_height, -axis, center_uv);
    sink.vertex(axis * half_height, axis, center_uv);

    for ix in 0..topology.columns {
        let angle = f64::from(ix) / f64::from(topology.columns) * TAU;
        let direction = DQuat::from_axis_angle(axis, -angle) * radial;
        let (sin, cos) = angle.sin_cos();

        sink.vertex(
            direction * params.bottom_radius - axis * half_height,
            -axis,
            DVec2::new(cos, -sin) * 0.5 + 0.5,
        );
        sink.vertex(
            direction * params.top_radius + axis * half_height,
            axis,
            DVec2::new(cos, sin) * 0.5 + 0.5,
        );
    }
}

fn emit_cap_triangles(builder: &mut MeshBuilder, base: u32, columns: u32) {
    let (bottom, top) = (base, base + 1);
    // Rim vertices alternate bottom/top starting at base + 2.
    let rim = |k: u32| base + 2 + 2 * (k % columns);

    for k in 0..columns {
        builder.triangle(bottom, rim(k), rim(k + 1));
        builder.triangle(top, rim(k + 1) + 1, rim(k) + 1);
    }
}

/// Generates the cylinder mesh.
///
/// # Example
///
/// ```rust
/// use metamesh::primitives::cylinder::{generate, CylinderParams};
///
/// let (mesh, _) = generate(&CylinderParams { columns: 8, rows: 1, ..Default::default() });
/// assert_eq!(mesh.vertex_count(), 9 * 2 + 2 + 16);
/// ```
pub fn generate(params: &CylinderParams) -> (MeshBuffers, CylinderTopology) {
    let topology = params.topology();
    let triangles = 2 * topology.columns * topology.rows
        + if topology.caps { 2 * topology.columns } else { 0 };
    let mut builder =
        MeshBuilder::with_capacity(topology.vertex_count(), triangles as usize, true);

    emit_vertices(params, &topology, &mut builder);
    grid_triangles_flipped(&mut builder, 0, topology.columns, topology.rows);
    if topology.caps {
        let base = (topology.columns + 1) * (topology.rows + 1);
        emit_cap_triangles(&mut builder, base, topology.columns);
    }

    (builder.finish(), topology)
}

/// Rewrites side and cap vertices for new radii or height.
pub fn reshape(
    params: &CylinderParams,
    cache: &CylinderTopology,
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
