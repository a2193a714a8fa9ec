//! # Ring Primitive
//!
//! Flat annulus or annular arc facing a principal axis. The band straddles
//! `radius` with total width `width`; inner and outer rim vertices alternate.
//!
//! `angle` is shape-only: the rim keeps its sample count and the samples are
//! only spread over a different arc, so an angle edit reshapes in place.

use super::{arc_angle, flat_frame, MeshBuilder, ReshapeOutcome, VertexRewriter, VertexSink};
use crate::fingerprint::{FingerprintBuilder, TopologyFingerprint};
use crate::mesh::MeshBuffers;
use crate::shape::{Axis, FieldSpec, ShapeKind, ShapeRecord};
use config::constants::{
    DEFAULT_FLAT_RADIUS, DEFAULT_FLAT_SEGMENTS, DEFAULT_RING_WIDTH, EPSILON, MIN_RADIAL_SEGMENTS,
};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Ring parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingParams {
    /// Radius of the band's center line
    pub radius: f64,
    /// Band width, at most twice the radius
    pub width: f64,
    /// Covered fraction of a full turn, clamped to [0, 1]
    pub angle: f64,
    /// Vertex pairs along the band
    pub segments: u32,
    pub axis: Axis,
    pub double_sided: bool,
}

impl Default for RingParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_FLAT_RADIUS,
            width: DEFAULT_RING_WIDTH,
            angle: 1.0,
            segments: DEFAULT_FLAT_SEGMENTS,
            axis: Axis::Z,
            double_sided: false,
        }
    }
}

/// Sanitized layout a ring mesh was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingTopology {
    pub segments: u32,
    pub axis: Axis,
    pub double_sided: bool,
}

impl RingParams {
    /// Clamps the band to at least 3 vertex pairs.
    pub fn topology(&self) -> RingTopology {
        RingTopology {
            segments: self.segments.max(MIN_RADIAL_SEGMENTS),
            axis: self.axis,
            double_sided: self.double_sided,
        }
    }

    /// Inner and outer radius of the band.
    pub fn radii(&self) -> (f64, f64) {
        let half = (self.width * 0.5).min(self.radius);
        (self.radius - half, self.radius + half)
    }
}

impl ShapeRecord for RingParams {
    const KIND: ShapeKind = ShapeKind::Ring;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::shape_only("radius"),
        FieldSpec::shape_only("width"),
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

fn emit_side(params: &RingParams, topology: &RingTopology, normal: DVec3, sink: &mut impl VertexSink) {
    let (du, dv) = flat_frame(topology.axis);
    let angle = params.angle.clamp(0.0, 1.0);
    let (inner, outer) = params.radii();
    // Inner rim UVs shrink so the texture maps as on a full disc.
    let uv_ratio = if outer.abs() > EPSILON { inner / outer } else { 0.0 };

    for i in 0..topology.segments {
        let (sin, cos) = arc_angle(i, topology.segments, angle).sin_cos();
        let direction = du * cos + dv * sin;
        let rim_uv = DVec2::new(cos, sin) * 0.5;
        sink.vertex(direction * inner, normal, rim_uv * uv_ratio + 0.5);
        sink.vertex(direction * outer, normal, rim_uv + 0.5);
    }
}

fn emit_vertices(params: &RingParams, topology: &RingTopology, sink: &mut impl VertexSink) {
    let normal = topology.axis.unit();
    emit_side(params, topology, normal, sink);
    if topology.double_sided {
        emit_side(params, topology, -normal, sink);
    }
}

/// Generates the ring mesh.
///
/// # Example
///
/// ```rust
/// use metamesh::primitives::ring::{generate, RingParams};
///
/// let (mesh, _) = generate(&RingParams { segments: 10, ..Default::default() });
/// assert_eq!(mesh.vertex_count(), 20);
/// assert_eq!(mesh.triangle_count(), 18);
/// ```
pub fn generate(params: &RingParams) -> (MeshBuffers, RingTopology) {
    let topology = params.topology();
    let segments = topology.segments;
    let sides = if topology.double_sided { 2 } else { 1 };
    let mut builder = MeshBuilder::with_capacity(
        (2 * segments * sides) as usize,
        (2 * (segments - 1) * sides) as usize,
        true,
    );

    emit_vertices(params, &topology, &mut builder);

    for i in 0..segments - 1 {
        let (inner, outer) = (2 * i, 2 * i + 1);
        builder.triangle(inner, outer, inner + 2);
        builder.triangle(outer, outer + 2, inner + 2);
    }
    if topology.double_sided {
        let back = 2 * segments;
        for i in 0..segments - 1 {
            let (inner, outer) = (back + 2 * i, back + 2 * i + 1);
            builder.triangle(inner, inner + 2, outer);
            builder.triangle(outer, inner + 2, outer + 2);
        }
    }

    (builder.finish(), topology)
}

/// Rewrites the band for a new radius, width or angle.
pub fn reshape(
    params: &RingParams,
    cache: &RingTopology,
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ring_radii() {
        let params = RingParams {
            radius: 1.0,
            width: 0.5,
            ..Default::default()
        };
        assert_eq!(params.radii(), (0.75, 1.25));
        let (mesh, _) = generate(&params);
        assert_relative_eq!(mesh.positions()[0].length(), 0.75, epsilon = 1e-12);
        assert_relative_eq!(mesh.positions()[1].length(), 1.25, epsilon = 1e-12);
    }

    #[test]
    fn test_ring_width_capped_at_diameter() {
        let params = RingParams {
            radius: 1.0,
            width: 10.0,
            ..Default::default()
        };
        assert_eq!(params.radii(), (0.0, 2.0));
    }

    #[test]
    fn test_ring_inner_uv_scaled() {
        let (mesh, _) = generate(&RingParams {
            radius: 1.0,
            width: 1.0,
            ..Default::default()
        });
        let uvs = mesh.uvs().unwrap();
        let inner = (uvs[0] - DVec2::splat(0.5)).length();
        let outer = (uvs[1] - DVec2::splat(0.5)).length();
        assert_relative_eq!(inner / outer, 0.5 / 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_ring_back_side_reverses_winding() {
        let (mesh, _) = generate(&RingParams {
            segments: 4,
            double_sided: true,
            ..Default::default()
        });
        let p = mesh.positions();
        let triangles: Vec<_> = mesh.triangles().collect();
        let face = |[a, b, c]: [u32; 3]| {
            (p[b as usize] - p[a as usize]).cross(p[c as usize] - p[a as usize])
        };
        assert!(face(triangles[0]).z > 0.0);
        assert!(face(triangles[6]).z < 0.0);
    }

    #[test]
    fn test_ring_angle_edit_reshapes() {
        let full = RingParams::default();
        let half = RingParams { angle: 0.5, ..full };
        assert_eq!(full.fingerprint(), half.fingerprint());

        let (mut mesh, cache) = generate(&full);
        assert_eq!(reshape(&half, &cache, &mut mesh), ReshapeOutcome::Applied);
        let (fresh, _) = generate(&half);
        for (a, b) in mesh.positions().iter().zip(fresh.positions()) {
            assert!(a.abs_diff_eq(*b, 1e-12));
        }
        assert_eq!(mesh.uvs(), fresh.uvs());
    }
}
