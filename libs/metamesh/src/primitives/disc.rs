//! # Disc Primitive
//!
//! Flat disc or pie slice facing a principal axis. `angle` is the covered
//! fraction of a full turn, centered on the first in-plane direction.
//! It is shape-only: changing it moves rim samples without changing their count.

use super::{arc_angle, flat_frame, MeshBuilder, ReshapeOutcome, VertexRewriter, VertexSink};
use crate::fingerprint::{FingerprintBuilder, TopologyFingerprint};
use crate::mesh::MeshBuffers;
use crate::shape::{Axis, FieldSpec, ShapeKind, ShapeRecord};
use config::constants::{DEFAULT_FLAT_RADIUS, DEFAULT_FLAT_SEGMENTS, MIN_RADIAL_SEGMENTS};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Disc parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscParams {
    pub radius: f64,
    /// Covered fraction of a full turn, clamped to [0, 1]
    pub angle: f64,
    /// Rim vertex count
    pub segments: u32,
    pub axis: Axis,
    pub double_sided: bool,
}

impl Default for DiscParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_FLAT_RADIUS,
            angle: 1.0,
            segments: DEFAULT_FLAT_SEGMENTS,
            axis: Axis::Z,
            double_sided: false,
        }
    }
}

/// Sanitized layout a disc mesh was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscTopology {
    pub segments: u32,
    pub axis: Axis,
    pub double_sided: bool,
}

impl DiscParams {
    /// Clamps the rim to at least 3 vertices.
    pub fn topology(&self) -> DiscTopology {
        DiscTopology {
            segments: self.segments.max(MIN_RADIAL_SEGMENTS),
            axis: self.axis,
            double_sided: self.double_sided,
        }
    }
}

impl ShapeRecord for DiscParams {
    const KIND: ShapeKind = ShapeKind::Disc;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::shape_only("radius"),
        FieldSpec::shape_only("angle"),
        FieldSpec::topology("segments"),
        FieldSpec::topology("axis"),
        FieldSpec::topology("double_sided"),
    ];

    fn fingerprint(&self) -> TopologyFingerprint {
        FingerprintBuilder::new(Self::KIND)
            .field(self.segments)
            .field(self.axis)
            .field(self.double_sided)
            .finish()
    }
}

fn emit_side(params: &DiscParams, topology: &DiscTopology, normal: DVec3, sink: &mut impl VertexSink) {
    let (du, dv) = flat_frame(topology.axis);
    let angle = params.angle.clamp(0.0, 1.0);

    for i in 0..topology.segments {
        let (sin, cos) = arc_angle(i, topology.segments, angle).sin_cos();
        sink.vertex(
            (du * cos + dv * sin) * params.radius,
            normal,
            DVec2::new(cos, sin) * 0.5 + 0.5,
        );
    }
    sink.vertex(DVec3::ZERO, normal, DVec2::splat(0.5));
}

fn emit_vertices(params: &DiscParams, topology: &DiscTopology, sink: &mut impl VertexSink) {
    let normal = topology.axis.unit();
    emit_side(params, topology, normal, sink);
    if topology.double_sided {
        emit_side(params, topology, -normal, sink);
    }
}

/// Generates the disc mesh.
///
/// # Example
///
/// ```rust
/// use metamesh::primitives::disc::{generate, DiscParams};
///
/// let (mesh, _) = generate(&DiscParams { segments: 16, ..Default::default() });
/// assert_eq!(mesh.vertex_count(), 17);
/// assert_eq!(mesh.triangle_count(), 15);
/// ```
pub fn generate(params: &DiscParams) -> (MeshBuffers, DiscTopology) {
    let topology = params.topology();
    let segments = topology.segments;
    let sides = if topology.double_sided { 2 } else { 1 };
    let mut builder = MeshBuilder::with_capacity(
        ((segments + 1) * sides) as usize,
        ((segments - 1) * sides) as usize,
        true,
    );

    emit_vertices(params, &topology, &mut builder);

    let center = segments;
    for i in 0..segments - 1 {
        builder.triangle(center, i, i + 1);
    }
    if topology.double_sided {
        let back = segments + 1;
        for i in 0..segments - 1 {
            builder.triangle(back + center, back + i + 1, back + i);
        }
    }

    (builder.finish(), topology)
}

/// Rewrites rim positions and UVs for a new radius or angle.
pub fn reshape(
    params: &DiscParams,
    cache: &DiscTopology,
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
