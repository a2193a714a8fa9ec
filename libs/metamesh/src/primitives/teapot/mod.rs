//! # Teapot Primitive
//!
//! The Utah teapot, evaluated from its 32 bicubic Bezier patches.
//!
//! Each patch is sampled on a `subdivision × subdivision` grid. Normals are
//! the cross product of the two surface tangents; where the tangent along a
//! patch row vanishes (the collapsed rows at the lid and bottom poles) the
//! tangent of the neighbouring control row stands in for it.

mod patches;

#[cfg(test)]
mod tests;

use super::{grid_triangles, MeshBuilder, ReshapeOutcome, VertexRewriter, VertexSink};
use crate::fingerprint::{FingerprintBuilder, TopologyFingerprint};
use crate::mesh::MeshBuffers;
use crate::shape::{FieldSpec, ShapeKind, ShapeRecord};
use config::constants::{
    DEGENERATE_TANGENT_EPSILON, DEFAULT_TEAPOT_SUBDIVISION, MIN_TEAPOT_SUBDIVISION,
};
use glam::{DVec2, DVec3};
use log::debug;
use patches::{PATCHES, PATCH_COUNT};
use serde::{Deserialize, Serialize};

/// Teapot parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeapotParams {
    /// Uniform scale applied to the unit teapot
    pub scale: f64,
    /// Samples per patch edge
    pub subdivision: u32,
}

impl Default for TeapotParams {
    fn default() -> Self {
        Self {
            scale: 1.0,
            subdivision: DEFAULT_TEAPOT_SUBDIVISION,
        }
    }
}

impl TeapotParams {
    /// Returns samples per patch edge, at least 2.
    pub fn samples(&self) -> u32 {
        self.subdivision.max(MIN_TEAPOT_SUBDIVISION)
    }
}

impl ShapeRecord for TeapotParams {
    const KIND: ShapeKind = ShapeKind::Teapot;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::shape_only("scale"),
        FieldSpec::topology("subdivision"),
    ];

    fn fingerprint(&self) -> TopologyFingerprint {
        FingerprintBuilder::new(Self::KIND)
            .field(self.subdivision)
            .finish()
    }
}

/// Unscaled surface samples of a generated teapot.
#[derive(Debug, Clone, PartialEq)]
pub struct TeapotCache {
    pub samples: u32,
    pub positions: Vec<DVec3>,
    pub normals: Vec<DVec3>,
    pub uvs: Vec<DVec2>,
}

// =============================================================================
// BEZIER EVALUATION
// =============================================================================

fn bezier(p: [DVec3; 4], t: f64) -> DVec3 {
    let mt = 1.0 - t;
    p[0] * (mt * mt * mt) + p[1] * (3.0 * mt * mt * t) + p[2] * (3.0 * mt * t * t) + p[3] * (t * t * t)
}

fn bezier_derivative(p: [DVec3; 4], t: f64) -> DVec3 {
    let mt = 1.0 - t;
    (p[1] - p[0]) * (3.0 * mt * mt) + (p[2] - p[1]) * (6.0 * mt * t) + (p[3] - p[2]) * (3.0 * t * t)
}

fn control_row(patch: &[[f64; 3]; 16], row: usize) -> [DVec3; 4] {
    std::array::from_fn(|k| DVec3::from_array(patch[row * 4 + k]))
}

/// Samples every patch on a `samples × samples` grid.
fn evaluate(samples: u32) -> TeapotCache {
    let per_patch = (samples * samples) as usize;
    let mut cache = TeapotCache {
        samples,
        positions: Vec::with_capacity(PATCH_COUNT * per_patch),
        normals: Vec::with_capacity(PATCH_COUNT * per_patch),
        uvs: Vec::with_capacity(PATCH_COUNT * per_patch),
    };
    let step = f64::from(samples - 1);

    for patch in &PATCHES {
        let rows: [[DVec3; 4]; 4] = std::array::from_fn(|row| control_row(patch, row));

        for col in 0..samples {
            let u = f64::from(col) / step;
            let points: [DVec3; 4] = std::array::from_fn(|k| bezier(rows[k], u));
            let tangents_u: [DVec3; 4] = std::array::from_fn(|k| bezier_derivative(rows[k], u));

            for row in 0..samples {
                let v = f64::from(row) / step;
                let d_v = bezier_derivative(points, v);
                let mut d_u = bezier(tangents_u, v);
                if d_u.length() < DEGENERATE_TANGENT_EPSILON {
                    d_u = tangents_u[1];
                }

                cache.positions.push(bezier(points, v));
                cache
                    .normals
                    .push(d_v.cross(d_u).try_normalize().unwrap_or(DVec3::Y));
                cache.uvs.push(DVec2::new(u, v));
            }
        }
    }

    cache
}

fn emit_vertices(scale: f64, cache: &TeapotCache, sink: &mut impl VertexSink) {
    for ((position, normal), uv) in cache.positions.iter().zip(&cache.normals).zip(&cache.uvs) {
        sink.vertex(*position * scale, *normal, *uv);
    }
}

/// Generates the teapot mesh.
///
/// # Example
///
/// ```rust
/// use metamesh::primitives::teapot::{generate, TeapotParams};
///
/// let (mesh, _) = generate(&TeapotParams { scale: 1.0, subdivision: 4 });
/// assert_eq!(mesh.vertex_count(), 32 * 16);
/// assert_eq!(mesh.triangle_count(), 32 * 9 * 2);
/// ```
pub fn generate(params: &TeapotParams) -> (MeshBuffers, TeapotCache) {
    let samples = params.samples();
    let cache = evaluate(samples);
    debug!(
        "Teapot evaluated at {} samples per edge: {} vertices",
        samples,
        cache.positions.len()
    );

    let quads = (samples - 1) * (samples - 1);
    let mut builder = MeshBuilder::with_capacity(
        cache.positions.len(),
        PATCH_COUNT * 2 * quads as usize,
        true,
    );
    emit_vertices(params.scale, &cache, &mut builder);
    for patch in 0..PATCH_COUNT as u32 {
        grid_triangles(&mut builder, patch * samples * samples, samples - 1, samples - 1);
    }

    (builder.finish(), cache)
}

/// Rescales the cached unit samples without re-evaluating the patches.
pub fn reshape(
    params: &TeapotParams,
    cache: &TeapotCache,
    buffers: &mut MeshBuffers,
) -> ReshapeOutcome {
    if params.samples() != cache.samples {
        return ReshapeOutcome::NeedsRebuild;
    }
    let mut rewriter = VertexRewriter::new(buffers);
    emit_vertices(params.scale, cache, &mut rewriter);
    rewriter.finish()
}
