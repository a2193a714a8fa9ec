//! # Cone Primitive
//!
//! Cone standing on the XZ plane with its apex at `+height` on Y. The apex is
//! split into one vertex per side segment so each carries the smooth normal
//! of its own segment.

use super::{MeshBuilder, ReshapeOutcome, VertexRewriter, VertexSink};
use crate::fingerprint::{FingerprintBuilder, TopologyFingerprint};
use crate::mesh::MeshBuffers;
use crate::shape::{FieldSpec, ShapeKind, ShapeRecord};
use config::constants::{
    DEFAULT_CONE_HEIGHT, DEFAULT_CONE_RADIUS, DEFAULT_CONE_SEGMENTS, MIN_RADIAL_SEGMENTS,
};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Cone parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConeParams {
    pub radius: f64,
    pub height: f64,
    pub segments: u32,
    /// Close the base with a flat disc
    pub generate_base: bool,
    /// Emit a UV channel
    pub generate_uv: bool,
}

impl Default for ConeParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_CONE_RADIUS,
            height: DEFAULT_CONE_HEIGHT,
            segments: DEFAULT_CONE_SEGMENTS,
            generate_base: true,
            generate_uv: true,
        }
    }
}

/// Sanitized layout a cone mesh was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConeTopology {
    pub segments: u32,
    pub generate_base: bool,
    pub generate_uv: bool,
}

impl ConeTopology {
    /// Number of vertices: rim and apex rows, plus the base fan.
    pub fn vertex_count(&self) -> usize {
        let s = self.segments as usize;
        let side = (s + 1) + s;
        if self.generate_base {
            side + 1 + (s + 1)
        } else {
            side
        }
    }
}

impl ConeParams {
    /// Clamps the segment count to at least 3.
    pub fn topology(&self) -> ConeTopology {
        ConeTopology {
            segments: self.segments.max(MIN_RADIAL_SEGMENTS),
            generate_base: self.generate_base,
            generate_uv: self.generate_uv,
        }
    }
}

impl ShapeRecord for ConeParams {
    const KIND: ShapeKind = ShapeKind::Cone;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::shape_only("radius"),
        FieldSpec::shape_only("height"),
        FieldSpec::topology("segments"),
        FieldSpec::topology("generate_base"),
        FieldSpec::topology("generate_uv"),
    ];

    fn fingerprint(&self) -> TopologyFingerprint {
        FingerprintBuilder::new(Self::KIND)
            .field(self.segments)
            .field(self.generate_base)
            .field(self.generate_uv)
            .finish()
    }
}

fn emit_vertices(params: &ConeParams, topology: &ConeTopology, sink: &mut impl VertexSink) {
    let (radius, height) = (params.radius, params.height);
    let segments = f64::from(topology.segments);
    let uv = |value: DVec2| topology.generate_uv.then_some(value);
    let side_normal = |angle: f64| {
        let (sin, cos) = angle.sin_cos();
        DVec3::new(height * cos, radius, height * sin)
            .try_normalize()
            .unwrap_or(DVec3::Y)
    };

    // Rim of the side surface.
    for i in 0..=topology.segments {
        let t = f64::from(i) / segments;
        let angle = TAU * t;
        let (sin, cos) = angle.sin_cos();
        sink.emit(
            DVec3::new(cos * radius, 0.0, sin * radius),
            side_normal(angle),
            uv(DVec2::new(t, 0.0)),
        );
    }

    // One apex per side segment, facing the middle of that segment.
    let apex = DVec3::new(0.0, height, 0.0);
    for i in 0..topology.segments {
        let t = (f64::from(i) + 0.5) / segments;
        sink.emit(apex, side_normal(TAU * t), uv(DVec2::new(t, 1.0)));
    }

    if !topology.generate_base {
        return;
    }

    sink.emit(DVec3::ZERO, DVec3::NEG_Y, uv(DVec2::splat(0.5)));
    for i in 0..=topology.segments {
        let angle = TAU * f64::from(i) / segments;
        let (sin, cos) = angle.sin_cos();
        sink.emit(
            DVec3::new(cos * radius, 0.0, sin * radius),
            DVec3::NEG_Y,
            uv(DVec2::new(cos, sin) * 0.5 + 0.5),
        );
    }
}

/// Generates the cone mesh.
///
/// # Example
///
/// ```rust
/// use metamesh::primitives::cone::{generate, ConeParams};
///
/// let (mesh, _) = generate(&ConeParams { segments: 8, generate_uv: false, ..Default::default() });
/// assert!(mesh.uvs().is_none());
/// assert_eq!(mesh.triangle_count(), 16);
/// ```
pub fn generate(params: &ConeParams) -> (MeshBuffers, ConeTopology) {
    let topology = params.topology();
    let segments = topology.segments;
    let triangles = if topology.generate_base {
        2 * segments
    } else {
        segments
    };
    let mut builder = MeshBuilder::with_capacity(
        topology.vertex_count(),
        triangles as usize,
        topology.generate_uv,
    );
    emit_vertices(params, &topology, &mut builder);

    let apex = segments + 1;
    for i in 0..segments {
        builder.triangle(apex + i, i + 1, i);
    }

    if topology.generate_base {
        let center = apex + segments;
        let rim = center + 1;
        for i in 0..segments {
            builder.triangle(center, rim + i, rim + i + 1);
        }
    }

    (builder.finish(), topology)
}

/// Rewrites rim, apex and base vertices for a new radius or height.
pub fn reshape(
    params: &ConeParams,
    cache: &ConeTopology,
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
