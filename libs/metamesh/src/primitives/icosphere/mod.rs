//! # Icosphere Primitive
//!
//! Sphere built by recursive subdivision of an icosahedron. Vertices carry
//! no UVs; the unit-sphere directions double as normals.

mod builder;

#[cfg(test)]
mod tests;

use super::{MeshBuilder, ReshapeOutcome, VertexRewriter, VertexSink};
use crate::fingerprint::{FingerprintBuilder, TopologyFingerprint};
use crate::mesh::MeshBuffers;
use crate::shape::{FieldSpec, ShapeKind, ShapeRecord};
use builder::IcosphereBuilder;
use config::constants::{
    DEFAULT_ICOSPHERE_RADIUS, DEFAULT_ICOSPHERE_SUBDIVISION, MIN_ICOSPHERE_SUBDIVISION,
};
use glam::DVec3;
use log::debug;
use serde::{Deserialize, Serialize};

/// Icosphere parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IcosphereParams {
    pub radius: f64,
    /// Subdivision level, 1 being the plain icosahedron
    pub subdivision: u32,
}

impl Default for IcosphereParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_ICOSPHERE_RADIUS,
            subdivision: DEFAULT_ICOSPHERE_SUBDIVISION,
        }
    }
}

impl IcosphereParams {
    /// Returns the subdivision level clamped to at least 1.
    pub fn level(&self) -> u32 {
        self.subdivision.max(MIN_ICOSPHERE_SUBDIVISION)
    }
}

impl ShapeRecord for IcosphereParams {
    const KIND: ShapeKind = ShapeKind::Icosphere;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::shape_only("radius"),
        FieldSpec::topology("subdivision"),
    ];

    fn fingerprint(&self) -> TopologyFingerprint {
        FingerprintBuilder::new(Self::KIND).field(self.subdivision).finish()
    }
}

/// Subdivision level and unit-sphere vertices of a generated icosphere.
#[derive(Debug, Clone, PartialEq)]
pub struct IcosphereCache {
    pub level: u32,
    pub directions: Vec<DVec3>,
}

fn emit_vertices(radius: f64, directions: &[DVec3], sink: &mut impl VertexSink) {
    for &direction in directions {
        sink.emit(direction * radius, direction, None);
    }
}

/// Generates the icosphere mesh.
///
/// # Example
///
/// ```rust
/// use metamesh::primitives::icosphere::{generate, IcosphereParams};
///
/// let (mesh, _) = generate(&IcosphereParams { radius: 1.0, subdivision: 1 });
/// assert_eq!(mesh.vertex_count(), 12);
/// assert_eq!(mesh.triangle_count(), 20);
/// ```
pub fn generate(params: &IcosphereParams) -> (MeshBuffers, IcosphereCache) {
    let level = params.level();
    let IcosphereBuilder {
        vertices,
        triangles,
    } = IcosphereBuilder::level(level);
    debug!(
        "Icosphere level {}: {} vertices, {} triangles",
        level,
        vertices.len(),
        triangles.len()
    );

    let mut builder = MeshBuilder::with_capacity(vertices.len(), triangles.len(), false);
    emit_vertices(params.radius, &vertices, &mut builder);
    for [a, b, c] in triangles {
        builder.triangle(a, b, c);
    }

    let cache = IcosphereCache {
        level,
        directions: vertices,
    };
    (builder.finish(), cache)
}

/// Rescales the cached unit-sphere vertices to a new radius.
pub fn reshape(
    params: &IcosphereParams,
    cache: &IcosphereCache,
    buffers: &mut MeshBuffers,
) -> ReshapeOutcome {
    if params.level() != cache.level {
        return ReshapeOutcome::NeedsRebuild;
    }
    let mut rewriter = VertexRewriter::new(buffers);
    emit_vertices(params.radius, &cache.directions, &mut rewriter);
    rewriter.finish()
}
