//! # Rounded Box Primitive
//!
//! Box whose edges and corners are rounded with a fixed radius.
//!
//! Each face is a square grid of `2 + 2 * divisions` samples per side. The
//! first and last `divisions + 1` samples along an edge are packed into the
//! `radius`-wide border, leaving a single flat quad across the interior.
//! Every sample is then pushed onto the rounded surface: clamped into the
//! inner box shrunk by `radius`, and offset outward by `radius` along the
//! direction from that anchor.


use super::{grid_triangles_flipped, MeshBuilder, ReshapeOutcome, VertexRewriter, VertexSink};
use crate::fingerprint::{FingerprintBuilder, TopologyFingerprint};
use crate::mesh::MeshBuffers;
use crate::shape::{FieldSpec, ShapeKind, ShapeRecord};
use config::constants::{
    DEFAULT_BOX_SIZE, DEFAULT_ROUNDED_BOX_DIVISIONS, DEFAULT_ROUNDED_BOX_RADIUS, EPSILON,
    MIN_ROUNDED_BOX_DIVISIONS,
};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Rounded box parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundedBoxParams {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    /// Corner radius, clamped to the smallest half extent
    pub radius: f64,
    /// Segments across each rounded edge
    pub divisions: u32,
}

impl Default for RoundedBoxParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOX_SIZE,
            height: DEFAULT_BOX_SIZE,
            depth: DEFAULT_BOX_SIZE,
            radius: DEFAULT_ROUNDED_BOX_RADIUS,
            divisions: DEFAULT_ROUNDED_BOX_DIVISIONS,
        }
    }
}

/// Divisions and per-face vertex offsets of a generated rounded box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundedBoxCache {
    pub divisions: u32,
    pub face_offsets: [u32; 6],
}

impl RoundedBoxParams {
    /// Returns the division count clamped to at least 1.
    pub fn divisions(&self) -> u32 {
        self.divisions.max(MIN_ROUNDED_BOX_DIVISIONS)
    }

    /// Returns the extents as a vector.
    pub fn size(&self) -> DVec3 {
        DVec3::new(self.width, self.height, self.depth)
    }

    /// Corner radius clamped to `[0, smallest half extent]`.
    pub fn clamped_radius(&self) -> f64 {
        self.radius.min(self.size().min_element() * 0.5).max(0.0)
    }
}

impl ShapeRecord for RoundedBoxParams {
    const KIND: ShapeKind = ShapeKind::RoundedBox;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::shape_only("width"),
        FieldSpec::shape_only("height"),
        FieldSpec::shape_only("depth"),
        FieldSpec::shape_only("radius"),
        FieldSpec::topology("divisions"),
    ];

    fn fingerprint(&self) -> TopologyFingerprint {
        FingerprintBuilder::new(Self::KIND)
            .field(self.divisions)
            .finish()
    }
}

/// Samples per face edge for a division count.
pub fn samples_per_edge(divisions: u32) -> u32 {
    2 + 2 * divisions
}

/// One face: in-plane directions with their edge lengths, and the face's
/// offset from the center along its normal.
struct Face {
    u: (DVec3, f64),
    v: (DVec3, f64),
    offset: DVec3,
}

fn faces(size: DVec3) -> [Face; 6] {
    let half = size * 0.5;
    [
        Face {
            u: (DVec3::X, size.x),
            v: (DVec3::Y, size.y),
            offset: DVec3::new(0.0, 0.0, -half.z),
        },
        Face {
            u: (DVec3::NEG_X, size.x),
            v: (DVec3::Y, size.y),
            offset: DVec3::new(0.0, 0.0, half.z),
        },
        Face {
            u: (DVec3::Z, size.z),
            v: (DVec3::NEG_Y, size.y),
            offset: DVec3::new(-half.x, 0.0, 0.0),
        },
        Face {
            u: (DVec3::NEG_Z, size.z),
            v: (DVec3::NEG_Y, size.y),
            offset: DVec3::new(half.x, 0.0, 0.0),
        },
        Face {
            u: (DVec3::X, size.x),
            v: (DVec3::NEG_Z, size.z),
            offset: DVec3::new(0.0, -half.y, 0.0),
        },
        Face {
            u: (DVec3::NEG_X, size.x),
            v: (DVec3::NEG_Z, size.z),
            offset: DVec3::new(0.0, half.y, 0.0),
        },
    ]
}

/// Parameter in [0, 1] of sample `i` along an edge of `length`.
///
/// Samples `0..=divisions` cover `[0, radius / length]`, the rest cover
/// `[1 - radius / length, 1]`.
fn edge_parameter(i: u32, divisions: u32, radius: f64, length: f64) -> f64 {
    let ratio = if length.abs() > EPSILON {
        radius / length
    } else {
        0.0
    };
    let d = f64::from(divisions);
    if i <= divisions {
        ratio * f64::from(i) / d
    } else {
        1.0 - ratio * f64::from(2 * divisions + 1 - i) / d
    }
}

/// Projects a point of the sharp box onto the rounded surface.
fn round_point(point: DVec3, inner: DVec3, radius: f64, face_normal: DVec3) -> (DVec3, DVec3) {
    let anchor = point.max(-inner).min(inner);
    let normal = (point - anchor).try_normalize().unwrap_or(face_normal);
    (anchor + normal * radius, normal)
}

fn emit_vertices(
    params: &RoundedBoxParams,
    divisions: u32,
    sink: &mut impl VertexSink,
) -> [u32; 6] {
    let size = params.size();
    let radius = params.clamped_radius();
    let inner = size * 0.5 - DVec3::splat(radius);
    let samples = samples_per_edge(divisions);
    let mut offsets = [0u32; 6];

    for (slot, face) in offsets.iter_mut().zip(faces(size)) {
        *slot = sink.cursor();
        let (du, u_length) = face.u;
        let (dv, v_length) = face.v;
        let face_normal = face.offset.try_normalize().unwrap_or(dv.cross(du));

        for iy in 0..samples {
            let v = edge_parameter(iy, divisions, radius, v_length);
            for ix in 0..samples {
                let u = edge_parameter(ix, divisions, radius, u_length);
                let point = du * (u - 0.5) * u_length + dv * (v - 0.5) * v_length + face.offset;
                let (position, normal) = round_point(point, inner, radius, face_normal);
                sink.vertex(position, normal, DVec2::new(u, v));
            }
        }
    }

    offsets
}

/// Generates the rounded box mesh.
///
/// # Example
///
/// ```rust
/// use metamesh::primitives::rounded_box::{generate, RoundedBoxParams};
///
/// let (mesh, cache) = generate(&RoundedBoxParams { divisions: 2, ..Default::default() });
/// assert_eq!(mesh.vertex_count(), 6 * 6 * 6);
/// assert_eq!(cache.face_offsets[1], 36);
/// ```
pub fn generate(params: &RoundedBoxParams) -> (MeshBuffers, RoundedBoxCache) {
    let divisions = params.divisions();
    let samples = samples_per_edge(divisions);
    let quads = (samples - 1) * (samples - 1);
    let mut builder = MeshBuilder::with_capacity(
        (6 * samples * samples) as usize,
        (6 * 2 * quads) as usize,
        true,
    );

    let face_offsets = emit_vertices(params, divisions, &mut builder);
    for &offset in &face_offsets {
        grid_triangles_flipped(&mut builder, offset, samples - 1, samples - 1);
    }

    let cache = RoundedBoxCache {
        divisions,
        face_offsets,
    };
    (builder.finish(), cache)
}

/// Rewrites all six faces for new extents or radius.
pub fn reshape(
    params: &RoundedBoxParams,
    cache: &RoundedBoxCache,
    buffers: &mut MeshBuffers,
) -> ReshapeOutcome {
    if params.divisions() != cache.divisions {
        return ReshapeOutcome::NeedsRebuild;
    }
    let mut rewriter = VertexRewriter::new(buffers);
    let face_offsets = emit_vertices(params, cache.divisions, &mut rewriter);
    if face_offsets != cache.face_offsets {
        return ReshapeOutcome::NeedsRebuild;
    }
    rewriter.finish()
}
