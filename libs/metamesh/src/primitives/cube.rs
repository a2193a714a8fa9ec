//! # Box Primitive
//!
//! Generates a box with 24 vertices: four per face so every face carries its
//! own flat normal. The layout never changes, so the fingerprint is constant.

use super::{MeshBuilder, ReshapeOutcome, VertexRewriter, VertexSink};
use crate::fingerprint::{FingerprintBuilder, TopologyFingerprint};
use crate::mesh::MeshBuffers;
use crate::shape::{FieldSpec, ShapeKind, ShapeRecord};
use config::constants::DEFAULT_BOX_SIZE;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Box extents, each the full edge length along its axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxParams {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl BoxParams {
    /// Creates a box with the given edge lengths.
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }
}

impl Default for BoxParams {
    fn default() -> Self {
        Self::new(DEFAULT_BOX_SIZE, DEFAULT_BOX_SIZE, DEFAULT_BOX_SIZE)
    }
}

impl ShapeRecord for BoxParams {
    const KIND: ShapeKind = ShapeKind::Box;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::shape_only("width"),
        FieldSpec::shape_only("height"),
        FieldSpec::shape_only("depth"),
    ];

    fn fingerprint(&self) -> TopologyFingerprint {
        FingerprintBuilder::new(Self::KIND).finish()
    }
}

/// Vertex count of every box.
pub const BOX_VERTEX_COUNT: usize = 24;

const FACE_UVS: [DVec2; 4] = [
    DVec2::new(0.0, 0.0),
    DVec2::new(1.0, 0.0),
    DVec2::new(1.0, 1.0),
    DVec2::new(0.0, 1.0),
];

fn emit_vertices(params: &BoxParams, sink: &mut impl VertexSink) {
    let w = params.width * 0.5;
    let h = params.height * 0.5;
    let d = params.depth * 0.5;

    // Corners of each face, counter-clockwise seen from outside.
    let faces: [(DVec3, [DVec3; 4]); 6] = [
        (
            DVec3::Z,
            [
                DVec3::new(-w, -h, d),
                DVec3::new(w, -h, d),
                DVec3::new(w, h, d),
                DVec3::new(-w, h, d),
            ],
        ),
        (
            DVec3::NEG_Z,
            [
                DVec3::new(w, -h, -d),
                DVec3::new(-w, -h, -d),
                DVec3::new(-w, h, -d),
                DVec3::new(w, h, -d),
            ],
        ),
        (
            DVec3::Y,
            [
                DVec3::new(-w, h, d),
                DVec3::new(w, h, d),
                DVec3::new(w, h, -d),
                DVec3::new(-w, h, -d),
            ],
        ),
        (
            DVec3::NEG_Y,
            [
                DVec3::new(-w, -h, -d),
                DVec3::new(w, -h, -d),
                DVec3::new(w, -h, d),
                DVec3::new(-w, -h, d),
            ],
        ),
        (
            DVec3::X,
            [
                DVec3::new(w, -h, d),
                DVec3::new(w, -h, -d),
                DVec3::new(w, h, -d),
                DVec3::new(w, h, d),
            ],
        ),
        (
            DVec3::NEG_X,
            [
                DVec3::new(-w, -h, -d),
                DVec3::new(-w, -h, d),
                DVec3::new(-w, h, d),
                DVec3::new(-w, h, -d),
            ],
        ),
    ];

    for (normal, corners) in faces {
        for (corner, uv) in corners.into_iter().zip(FACE_UVS) {
            sink.vertex(corner, normal, uv);
        }
    }
}

/// Generates the box mesh.
///
/// # Example
///
/// ```rust
/// use metamesh::primitives::cube::{generate, BoxParams};
///
/// let mesh = generate(&BoxParams::new(2.0, 2.0, 2.0));
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn generate(params: &BoxParams) -> MeshBuffers {
    let mut builder = MeshBuilder::with_capacity(BOX_VERTEX_COUNT, 12, true);
    emit_vertices(params, &mut builder);
    for face in 0..6u32 {
        let base = face * 4;
        builder.triangle(base, base + 1, base + 2);
        builder.triangle(base, base + 2, base + 3);
    }
    builder.finish()
}

/// Rewrites the 24 vertices for new extents.
pub fn reshape(params: &BoxParams, buffers: &mut MeshBuffers) -> ReshapeOutcome {
    let mut rewriter = VertexRewriter::new(buffers);
    emit_vertices(params, &mut rewriter);
    rewriter.finish()
}
