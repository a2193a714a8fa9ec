//! # Triangle Primitive
//!
//! Single triangle from three free vertices, optionally double-sided.

use super::{MeshBuilder, ReshapeOutcome, VertexRewriter, VertexSink};
use crate::fingerprint::{FingerprintBuilder, TopologyFingerprint};
use crate::mesh::MeshBuffers;
use crate::shape::{FieldSpec, ShapeKind, ShapeRecord};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Triangle parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriangleParams {
    pub vertex1: DVec3,
    pub vertex2: DVec3,
    pub vertex3: DVec3,
    pub double_sided: bool,
}

impl Default for TriangleParams {
    fn default() -> Self {
        Self {
            vertex1: DVec3::ZERO,
            vertex2: DVec3::X,
            vertex3: DVec3::Y,
            double_sided: false,
        }
    }
}

/// Layout a triangle mesh was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleTopology {
    pub double_sided: bool,
}

impl TriangleParams {
    /// Returns the topology-affecting part of the parameters.
    pub fn topology(&self) -> TriangleTopology {
        TriangleTopology {
            double_sided: self.double_sided,
        }
    }

    /// Front face normal; +Z for collinear vertices.
    pub fn normal(&self) -> DVec3 {
        (self.vertex2 - self.vertex1)
            .cross(self.vertex3 - self.vertex1)
            .try_normalize()
            .unwrap_or(DVec3::Z)
    }
}

impl ShapeRecord for TriangleParams {
    const KIND: ShapeKind = ShapeKind::Triangle;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::shape_only("vertex1"),
        FieldSpec::shape_only("vertex2"),
        FieldSpec::shape_only("vertex3"),
        FieldSpec::topology("double_sided"),
    ];

    fn fingerprint(&self) -> TopologyFingerprint {
        FingerprintBuilder::new(Self::KIND)
            .field(self.double_sided)
            .finish()
    }
}

fn emit_vertices(params: &TriangleParams, topology: &TriangleTopology, sink: &mut impl VertexSink) {
    let normal = params.normal();
    sink.vertex(params.vertex1, normal, DVec2::ZERO);
    sink.vertex(params.vertex2, normal, DVec2::X);
    sink.vertex(params.vertex3, normal, DVec2::Y);

    if topology.double_sided {
        sink.vertex(params.vertex1, -normal, DVec2::ZERO);
        sink.vertex(params.vertex3, -normal, DVec2::Y);
        sink.vertex(params.vertex2, -normal, DVec2::X);
    }
}

/// Generates the triangle mesh.
pub fn generate(params: &TriangleParams) -> (MeshBuffers, TriangleTopology) {
    let topology = params.topology();
    let sides = if topology.double_sided { 2 } else { 1 };
    let mut builder = MeshBuilder::with_capacity(3 * sides, sides, true);

    emit_vertices(params, &topology, &mut builder);
    builder.triangle(0, 1, 2);
    if topology.double_sided {
        builder.triangle(3, 4, 5);
    }

    (builder.finish(), topology)
}

/// Rewrites positions and normals for moved vertices.
pub fn reshape(
    params: &TriangleParams,
    cache: &TriangleTopology,
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
