//! # Sphere Primitive
//!
//! UV sphere on a latitude/longitude grid. Each pole is a full row of
//! coincident vertices so the texture seam and poles map cleanly.

use super::{grid_triangles_flipped, MeshBuilder, ReshapeOutcome, VertexRewriter, VertexSink};
use crate::fingerprint::{FingerprintBuilder, TopologyFingerprint};
use crate::mesh::MeshBuffers;
use crate::shape::{FieldSpec, ShapeKind, ShapeRecord};
use config::constants::{
    DEFAULT_SPHERE_COLUMNS, DEFAULT_SPHERE_RADIUS, DEFAULT_SPHERE_ROWS, MIN_RADIAL_SEGMENTS,
    MIN_SPHERE_ROWS,
};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// UV sphere parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereParams {
    pub radius: f64,
    /// Longitude segments
    pub columns: u32,
    /// Latitude segments
    pub rows: u32,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_SPHERE_RADIUS,
            columns: DEFAULT_SPHERE_COLUMNS,
            rows: DEFAULT_SPHERE_ROWS,
        }
    }
}

/// Sanitized grid size a sphere mesh was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SphereTopology {
    pub columns: u32,
    pub rows: u32,
}

impl SphereTopology {
    /// Number of vertices in the grid.
    pub fn vertex_count(&self) -> usize {
        (self.columns as usize + 1) * (self.rows as usize + 1)
    }
}

impl SphereParams {
    /// Clamps the grid to at least 3 columns and 2 rows.
    pub fn topology(&self) -> SphereTopology {
        SphereTopology {
            columns: self.columns.max(MIN_RADIAL_SEGMENTS),
            rows: self.rows.max(MIN_SPHERE_ROWS),
        }
    }
}

impl ShapeRecord for SphereParams {
    const KIND: ShapeKind = ShapeKind::Sphere;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::shape_only("radius"),
        FieldSpec::topology("columns"),
        FieldSpec::topology("rows"),
    ];

    fn fingerprint(&self) -> TopologyFingerprint {
        FingerprintBuilder::new(Self::KIND)
            .field(self.columns)
            .field(self.rows)
            .finish()
    }
}

fn emit_vertices(params: &SphereParams, topology: &SphereTopology, sink: &mut impl VertexSink) {
    for iy in 0..=topology.rows {
        let v = f64::from(iy) / f64::from(topology.rows);
        let (ring, y) = (PI * v).sin_cos();

        for ix in 0..=topology.columns {
            let u = f64::from(ix) / f64::from(topology.columns);
            let (sin, cos) = (TAU * u).sin_cos();
            let direction = DVec3::new(sin * ring, y, cos * ring);
            sink.vertex(direction * params.radius, direction, DVec2::new(u, v));
        }
    }
}

/// Generates the sphere mesh.
///
/// # Example
///
/// ```rust
/// use metamesh::primitives::sphere::{generate, SphereParams};
///
/// let (mesh, _) = generate(&SphereParams { radius: 1.0, columns: 8, rows: 4 });
/// assert_eq!(mesh.vertex_count(), 9 * 5);
/// ```
pub fn generate(params: &SphereParams) -> (MeshBuffers, SphereTopology) {
    let topology = params.topology();
    let mut builder = MeshBuilder::with_capacity(
        topology.vertex_count(),
        (topology.columns * topology.rows * 2) as usize,
        true,
    );
    emit_vertices(params, &topology, &mut builder);
    grid_triangles_flipped(&mut builder, 0, topology.columns, topology.rows);
    (builder.finish(), topology)
}

/// Rewrites positions for a new radius.
pub fn reshape(
    params: &SphereParams,
    cache: &SphereTopology,
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
    fn test_sphere_clamps_grid() {
        let (mesh, topology) = generate(&SphereParams {
            radius: 1.0,
            columns: 1,
            rows: 0,
        });
        assert_eq!(topology, SphereTopology { columns: 3, rows: 2 });
        assert_eq!(mesh.vertex_count(), 4 * 3);
    }

    #[test]
    fn test_sphere_vertices_on_surface() {
        let (mesh, _) = generate(&SphereParams {
            radius: 2.5,
            columns: 12,
            rows: 6,
        });
        for p in mesh.positions() {
            assert_relative_eq!(p.length(), 2.5, epsilon = 1e-9);
        }
        assert_relative_eq!(mesh.bounds().max.y, 2.5, epsilon = 1e-9);
        assert_relative_eq!(mesh.bounds().min.y, -2.5, epsilon = 1e-9);
    }

    #[test]
    fn test_sphere_reshape_rejects_new_grid() {
        let params = SphereParams::default();
        let (mut mesh, cache) = generate(&params);
        let edited = SphereParams {
            columns: params.columns + 1,
            ..params
        };
        assert_eq!(reshape(&edited, &cache, &mut mesh), ReshapeOutcome::NeedsRebuild);
    }

    #[test]
    fn test_sphere_fingerprint_tracks_raw_grid() {
        let a = SphereParams {
            columns: 1,
            ..SphereParams::default()
        };
        let b = SphereParams {
            columns: 3,
            ..SphereParams::default()
        };
        assert_eq!(a.topology(), b.topology());
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_sphere_edit_below_minimum_regenerates() {
        use crate::controller;
        use crate::pivot::PivotSpec;
        use crate::shape::ShapeParameters;

        let pivot = PivotSpec::default();
        let sphere = |columns| {
            ShapeParameters::Sphere(SphereParams {
                radius: 1.0,
                columns,
                rows: 2,
            })
        };
        let mut state = Some(controller::generate(&sphere(1), &pivot));
        assert!(!controller::reshape(&mut state, &sphere(2), &pivot));
        assert_eq!(state.unwrap(), controller::generate(&sphere(2), &pivot));
    }
}
