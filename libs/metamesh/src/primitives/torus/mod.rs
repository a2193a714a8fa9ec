//! # Torus Primitive
//!
//! Torus around the Y axis with an optional partial sweep. The sweep runs
//! from `arc_start` to `arc_end` (degrees); with `end_caps` each open end is
//! closed by a disc fan whose center indices are recorded in the cache.

#[cfg(test)]
mod tests;

use super::{grid_triangles_flipped, MeshBuilder, ReshapeOutcome, VertexRewriter, VertexSink};
use crate::fingerprint::{FingerprintBuilder, TopologyFingerprint};
use crate::mesh::MeshBuffers;
use crate::shape::{FieldSpec, ShapeKind, ShapeRecord};
use config::constants::{
    DEFAULT_TORUS_MAJOR_RADIUS, DEFAULT_TORUS_MAJOR_SEGMENTS, DEFAULT_TORUS_MINOR_RADIUS,
    DEFAULT_TORUS_MINOR_SEGMENTS, MIN_RADIAL_SEGMENTS,
};
use glam::{DVec2, DVec3};
use log::trace;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Torus parameters. Arc angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorusParams {
    /// Distance from the torus center to the tube center
    pub major_radius: f64,
    /// Tube radius
    pub minor_radius: f64,
    pub major_segments: u32,
    pub minor_segments: u32,
    pub arc_start: f64,
    pub arc_end: f64,
    pub end_caps: bool,
}

impl Default for TorusParams {
    fn default() -> Self {
        Self {
            major_radius: DEFAULT_TORUS_MAJOR_RADIUS,
            minor_radius: DEFAULT_TORUS_MINOR_RADIUS,
            major_segments: DEFAULT_TORUS_MAJOR_SEGMENTS,
            minor_segments: DEFAULT_TORUS_MINOR_SEGMENTS,
            arc_start: 0.0,
            arc_end: 360.0,
            end_caps: false,
        }
    }
}

/// Sanitized layout a torus mesh was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TorusTopology {
    pub major_segments: u32,
    pub minor_segments: u32,
    pub end_caps: bool,
}

impl TorusTopology {
    fn surface_vertices(&self) -> u32 {
        (self.major_segments + 1) * (self.minor_segments + 1)
    }

    /// Total vertex count including caps.
    pub fn vertex_count(&self) -> usize {
        let caps = if self.end_caps {
            2 * (self.minor_segments + 1)
        } else {
            0
        };
        (self.surface_vertices() + caps) as usize
    }
}

/// Topology plus the indices of the start and end cap centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TorusCache {
    pub topology: TorusTopology,
    pub cap_centers: Option<[u32; 2]>,
}

impl TorusParams {
    /// Clamps both segment counts to at least 3.
    pub fn topology(&self) -> TorusTopology {
        TorusTopology {
            major_segments: self.major_segments.max(MIN_RADIAL_SEGMENTS),
            minor_segments: self.minor_segments.max(MIN_RADIAL_SEGMENTS),
            end_caps: self.end_caps,
        }
    }

    /// Start angle and sweep in radians; the sweep is clamped to one turn.
    pub fn arc(&self) -> (f64, f64) {
        let sweep = (self.arc_end - self.arc_start).clamp(0.0, 360.0);
        (self.arc_start.to_radians(), sweep.to_radians())
    }
}

impl ShapeRecord for TorusParams {
    const KIND: ShapeKind = ShapeKind::Torus;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::shape_only("major_radius"),
        FieldSpec::shape_only("minor_radius"),
        FieldSpec::topology("major_segments"),
        FieldSpec::topology("minor_segments"),
        FieldSpec::shape_only("arc_start"),
        FieldSpec::shape_only("arc_end"),
        FieldSpec::topology("end_caps"),
    ];

    fn fingerprint(&self) -> TopologyFingerprint {
        FingerprintBuilder::new(Self::KIND)
            .field(self.major_segments)
            .field(self.minor_segments)
            .field(self.end_caps)
            .finish()
    }
}

/// Point on the tube surface and its outward normal.
fn tube_point(major: f64, minor: f64, around: f64, tube: f64) -> (DVec3, DVec3) {
    let (sin_m, cos_m) = around.sin_cos();
    let (sin_t, cos_t) = tube.sin_cos();
    let normal = DVec3::new(cos_t * cos_m, sin_t, cos_t * sin_m);
    let center = DVec3::new(major * cos_m, 0.0, major * sin_m);
    (center + normal * minor, normal)
}

/// Emits a cap: center then one rim vertex per minor segment.
fn emit_cap(
    params: &TorusParams,
    topology: &TorusTopology,
    around: f64,
    facing: f64,
    sink: &mut impl VertexSink,
) -> u32 {
    let (sin_m, cos_m) = around.sin_cos();
    let normal = DVec3::new(-sin_m, 0.0, cos_m) * facing;
    let center = DVec3::new(params.major_radius * cos_m, 0.0, params.major_radius * sin_m);
    let center_index = sink.vertex(center, normal, DVec2::splat(0.5));

    for k in 0..topology.minor_segments {
        let tube = TAU * f64::from(k) / f64::from(topology.minor_segments);
        let (position, _) = tube_point(params.major_radius, params.minor_radius, around, tube);
        let (sin_t, cos_t) = tube.sin_cos();
        sink.vertex(position, normal, DVec2::new(cos_t, sin_t) * 0.5 + 0.5);
    }

    center_index
}

fn emit_vertices(
    params: &TorusParams,
    topology: &TorusTopology,
    sink: &mut impl VertexSink,
) -> Option<[u32; 2]> {
    let (start, sweep) = params.arc();

    for i in 0..=topology.minor_segments {
        let v = f64::from(i) / f64::from(topology.minor_segments);
        for j in 0..=topology.major_segments {
            let u = f64::from(j) / f64::from(topology.major_segments);
            let (position, normal) = tube_point(
                params.major_radius,
                params.minor_radius,
                start + u * sweep,
                TAU * v,
            );
            sink.vertex(position, normal, DVec2::new(u, v));
        }
    }

    topology.end_caps.then(|| {
        let start_center = emit_cap(params, topology, start, -1.0, sink);
        let end_center = emit_cap(params, topology, start + sweep, 1.0, sink);
        [start_center, end_center]
    })
}

fn emit_cap_triangles(builder: &mut MeshBuilder, center: u32, segments: u32, outward: bool) {
    let rim = |k: u32| center + 1 + k % segments;
    for k in 0..segments {
        if outward {
            builder.triangle(center, rim(k), rim(k + 1));
        } else {
            builder.triangle(center, rim(k + 1), rim(k));
        }
    }
}

/// Generates the torus mesh.
///
/// # Example
///
/// ```rust
/// use metamesh::primitives::torus::{generate, TorusParams};
///
/// let (mesh, cache) = generate(&TorusParams { arc_end: 180.0, end_caps: true, ..Default::default() });
/// assert!(cache.cap_centers.is_some());
/// assert_eq!(mesh.vertex_count(), cache.topology.vertex_count());
/// ```
pub fn generate(params: &TorusParams) -> (MeshBuffers, TorusCache) {
    let topology = params.topology();
    let (major, minor) = (topology.major_segments, topology.minor_segments);
    let triangles = 2 * major * minor + if topology.end_caps { 2 * minor } else { 0 };
    let mut builder =
        MeshBuilder::with_capacity(topology.vertex_count(), triangles as usize, true);

    let cap_centers = emit_vertices(params, &topology, &mut builder);
    grid_triangles_flipped(&mut builder, 0, major, minor);
    if let Some([start, end]) = cap_centers {
        emit_cap_triangles(&mut builder, start, minor, false);
        emit_cap_triangles(&mut builder, end, minor, true);
    }

    let cache = TorusCache {
        topology,
        cap_centers,
    };
    (builder.finish(), cache)
}

/// Rewrites the tube and cap vertices for new radii or arc angles.
pub fn reshape(
    params: &TorusParams,
    cache: &TorusCache,
    buffers: &mut MeshBuffers,
) -> ReshapeOutcome {
    let topology = params.topology();
    if topology != cache.topology {
        return ReshapeOutcome::NeedsRebuild;
    }

    let mut rewriter = VertexRewriter::new(buffers);
    let cap_centers = emit_vertices(params, &topology, &mut rewriter);
    if cap_centers != cache.cap_centers {
        trace!(
            "Torus cap centers moved from {:?} to {:?}",
            cache.cap_centers,
            cap_centers
        );
        return ReshapeOutcome::NeedsRebuild;
    }
    rewriter.finish()
}
