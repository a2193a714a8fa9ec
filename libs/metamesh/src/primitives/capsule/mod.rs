//! # Capsule Primitive
//!
//! Cylinder band closed by two hemispheres, built along Y and then rotated
//! onto the requested direction. The three parts are emitted in order (top
//! hemisphere, band, bottom hemisphere), each offsetting its indices by the
//! vertex count of the parts before it.


use super::{
    grid_triangles, grid_triangles_flipped, MeshBuilder, ReshapeOutcome, VertexRewriter,
    VertexSink,
};
use crate::fingerprint::{FingerprintBuilder, TopologyFingerprint};
use crate::mesh::MeshBuffers;
use crate::shape::{Axis, FieldSpec, ShapeKind, ShapeRecord};
use config::constants::{
    approx_zero, DEFAULT_CAPSULE_CAP_SEGMENTS, DEFAULT_CAPSULE_HEIGHT,
    DEFAULT_CAPSULE_HEIGHT_SEGMENTS, DEFAULT_CAPSULE_RADIAL_SEGMENTS, DEFAULT_CAPSULE_RADIUS,
    MIN_HEIGHT_SEGMENTS, MIN_RADIAL_SEGMENTS,
};
use glam::{DQuat, DVec2, DVec3};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Capsule parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapsuleParams {
    pub radius: f64,
    /// Overall length including both hemispheres
    pub height: f64,
    pub direction: Axis,
    pub radial_segments: u32,
    /// Segments along the straight band
    pub height_segments: u32,
    /// Segments from equator to pole of each hemisphere
    pub cap_segments: u32,
}

impl Default for CapsuleParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_CAPSULE_RADIUS,
            height: DEFAULT_CAPSULE_HEIGHT,
            direction: Axis::Y,
            radial_segments: DEFAULT_CAPSULE_RADIAL_SEGMENTS,
            height_segments: DEFAULT_CAPSULE_HEIGHT_SEGMENTS,
            cap_segments: DEFAULT_CAPSULE_CAP_SEGMENTS,
        }
    }
}

/// Sanitized layout a capsule mesh was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapsuleTopology {
    pub direction: Axis,
    pub radial_segments: u32,
    pub height_segments: u32,
    pub cap_segments: u32,
}

impl CapsuleTopology {
    fn ring(&self) -> u32 {
        self.radial_segments + 1
    }

    /// Vertex count of one hemisphere.
    pub fn hemisphere_vertices(&self) -> u32 {
        (self.cap_segments + 1) * self.ring()
    }

    /// Vertex count of the straight band.
    pub fn band_vertices(&self) -> u32 {
        (self.height_segments + 1) * self.ring()
    }

    /// Total vertex count.
    pub fn vertex_count(&self) -> usize {
        (2 * self.hemisphere_vertices() + self.band_vertices()) as usize
    }
}

impl CapsuleParams {
    /// Clamps segment counts to 3 radial and 1 along each profile.
    pub fn topology(&self) -> CapsuleTopology {
        CapsuleTopology {
            direction: self.direction,
            radial_segments: self.radial_segments.max(MIN_RADIAL_SEGMENTS),
            height_segments: self.height_segments.max(MIN_HEIGHT_SEGMENTS),
            cap_segments: self.cap_segments.max(MIN_HEIGHT_SEGMENTS),
        }
    }

    /// Length of the straight section between the hemispheres.
    pub fn straight_length(&self) -> f64 {
        (self.height - 2.0 * self.radius).max(0.0)
    }
}

impl ShapeRecord for CapsuleParams {
    const KIND: ShapeKind = ShapeKind::Capsule;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::shape_only("radius"),
        FieldSpec::shape_only("height"),
        FieldSpec::topology("direction"),
        FieldSpec::topology("radial_segments"),
        FieldSpec::topology("height_segments"),
        FieldSpec::topology("cap_segments"),
    ];

    fn fingerprint(&self) -> TopologyFingerprint {
        FingerprintBuilder::new(Self::KIND)
            .field(self.direction)
            .field(self.radial_segments)
            .field(self.height_segments)
            .field(self.cap_segments)
            .finish()
    }
}

/// Rotation taking the native Y-aligned capsule onto `direction`.
pub fn orientation(direction: Axis) -> DQuat {
    match direction {
        Axis::X => DQuat::from_rotation_z(-FRAC_PI_2),
        Axis::Y => DQuat::IDENTITY,
        Axis::Z => DQuat::from_rotation_x(FRAC_PI_2),
    }
}

struct Frame {
    rotation: DQuat,
    radius: f64,
    straight: f64,
    total: f64,
}

impl Frame {
    fn emit(&self, sink: &mut impl VertexSink, local: DVec3, normal: DVec3, u: f64) {
        let v = if approx_zero(self.total) {
            0.5
        } else {
            0.5 + local.y / self.total
        };
        sink.vertex(
            self.rotation * local,
            self.rotation * normal,
            DVec2::new(u, v),
        );
    }

    /// Emits one hemisphere; `sign` is +1 for the top and -1 for the bottom.
    fn hemisphere(&self, sink: &mut impl VertexSink, topology: &CapsuleTopology, sign: f64) {
        let offset = sign * self.straight * 0.5;
        for y in 0..=topology.cap_segments {
            let latitude = sign * FRAC_PI_2 * f64::from(y) / f64::from(topology.cap_segments);
            let (sin_lat, cos_lat) = latitude.sin_cos();

            for x in 0..=topology.radial_segments {
                let u = f64::from(x) / f64::from(topology.radial_segments);
                let (sin, cos) = (TAU * u).sin_cos();
                let normal = DVec3::new(cos_lat * sin, sin_lat, cos_lat * cos);
                let local = normal * self.radius + DVec3::new(0.0, offset, 0.0);
                self.emit(sink, local, normal, u);
            }
        }
    }

    fn band(&self, sink: &mut impl VertexSink, topology: &CapsuleTopology) {
        for y in 0..=topology.height_segments {
            let t = f64::from(y) / f64::from(topology.height_segments);
            let height = -self.straight * 0.5 + self.straight * t;

            for x in 0..=topology.radial_segments {
                let u = f64::from(x) / f64::from(topology.radial_segments);
                let (sin, cos) = (TAU * u).sin_cos();
                let normal = DVec3::new(sin, 0.0, cos);
                let local = normal * self.radius + DVec3::new(0.0, height, 0.0);
                self.emit(sink, local, normal, u);
            }
        }
    }
}

fn emit_vertices(params: &CapsuleParams, topology: &CapsuleTopology, sink: &mut impl VertexSink) {
    let straight = params.straight_length();
    let frame = Frame {
        rotation: orientation(topology.direction),
        radius: params.radius,
        straight,
        total: straight + 2.0 * params.radius,
    };

    frame.hemisphere(sink, topology, 1.0);
    frame.band(sink, topology);
    frame.hemisphere(sink, topology, -1.0);
}

/// Generates the capsule mesh.
///
/// # Example
///
/// ```rust
/// use metamesh::primitives::capsule::{generate, CapsuleParams};
/// use metamesh::Axis;
///
/// let (mesh, _) = generate(&CapsuleParams { direction: Axis::X, ..Default::default() });
/// let size = mesh.bounds().size();
/// assert!((size.x - 2.0).abs() < 1e-9);
/// ```
pub fn generate(params: &CapsuleParams) -> (MeshBuffers, CapsuleTopology) {
    let topology = params.topology();
    let radial = topology.radial_segments;
    let triangles = 2 * radial * (2 * topology.cap_segments + topology.height_segments);
    let mut builder =
        MeshBuilder::with_capacity(topology.vertex_count(), triangles as usize, true);

    emit_vertices(params, &topology, &mut builder);

    let band = topology.hemisphere_vertices();
    let bottom = band + topology.band_vertices();
    grid_triangles(&mut builder, 0, radial, topology.cap_segments);
    grid_triangles(&mut builder, band, radial, topology.height_segments);
    grid_triangles_flipped(&mut builder, bottom, radial, topology.cap_segments);

    (builder.finish(), topology)
}

/// Rewrites all three parts for a new radius or height.
pub fn reshape(
    params: &CapsuleParams,
    cache: &CapsuleTopology,
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
