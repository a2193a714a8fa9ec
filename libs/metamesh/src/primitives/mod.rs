//! # Primitives
//!
//! One generator/reshaper pair per shape kind.
//!
//! Each shape walks its vertices exactly once, in a single `emit_vertices`
//! routine written against [`VertexSink`]. Generation drives that routine
//! with a [`MeshBuilder`] and then appends triangles; reshaping drives the
//! same routine with a [`VertexRewriter`] over the cached buffers. Sharing
//! the traversal keeps vertex `i` on the same formula in both paths.

pub mod capsule;
pub mod cone;
pub mod cube;
pub mod cylinder;
pub mod disc;
pub mod icosphere;
pub mod plane;
pub mod ring;
pub mod rounded_box;
pub mod sphere;
pub mod teapot;
pub mod torus;
pub mod triangle;

use crate::mesh::MeshBuffers;
use crate::shape::{Axis, ShapeParameters};
use glam::{DVec2, DVec3};
use log::trace;
use std::f64::consts::TAU;

// =============================================================================
// VERTEX SINKS
// =============================================================================

/// Destination of a shape's vertex traversal.
pub trait VertexSink {
    /// Index the next emitted vertex will receive.
    fn cursor(&self) -> u32;

    /// Emits one vertex and returns its index.
    fn emit(&mut self, position: DVec3, normal: DVec3, uv: Option<DVec2>) -> u32;

    /// Emits one vertex with texture coordinates.
    #[inline]
    fn vertex(&mut self, position: DVec3, normal: DVec3, uv: DVec2) -> u32 {
        self.emit(position, normal, Some(uv))
    }
}

/// Accumulates a fresh mesh.
#[derive(Debug, Default)]
pub struct MeshBuilder {
    positions: Vec<DVec3>,
    normals: Vec<DVec3>,
    uvs: Option<Vec<DVec2>>,
    indices: Vec<u32>,
}

impl MeshBuilder {
    /// Creates a builder with room for `vertices` vertices and `triangles` triangles.
    pub fn with_capacity(vertices: usize, triangles: usize, with_uvs: bool) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            uvs: with_uvs.then(|| Vec::with_capacity(vertices)),
            indices: Vec::with_capacity(triangles * 3),
        }
    }

    /// Appends a triangle by vertex indices.
    #[inline]
    pub fn triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Finishes the mesh and computes its bounds.
    pub fn finish(self) -> MeshBuffers {
        let mesh = MeshBuffers::assemble(self.positions, self.normals, self.uvs, self.indices);
        debug_assert!(mesh.validate().is_ok(), "generator produced invalid buffers");
        mesh
    }
}

impl VertexSink for MeshBuilder {
    #[inline]
    fn cursor(&self) -> u32 {
        self.positions.len() as u32
    }

    fn emit(&mut self, position: DVec3, normal: DVec3, uv: Option<DVec2>) -> u32 {
        let index = self.cursor();
        self.positions.push(position);
        self.normals.push(normal);
        if let Some(uvs) = &mut self.uvs {
            uvs.push(uv.unwrap_or(DVec2::ZERO));
        }
        index
    }
}

/// Result of an in-place reshape attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReshapeOutcome {
    /// Every vertex was rewritten; indices are untouched
    Applied,
    /// Cached topology no longer matches; the caller must regenerate
    NeedsRebuild,
}

/// Overwrites the vertex attributes of existing buffers in traversal order.
///
/// Vertex count and index buffer are never changed. Emitting more or fewer
/// vertices than the buffers hold, or a different UV layout, is reported by
/// [`VertexRewriter::finish`] as [`ReshapeOutcome::NeedsRebuild`].
pub struct VertexRewriter<'a> {
    positions: &'a mut [DVec3],
    normals: &'a mut [DVec3],
    uvs: Option<&'a mut [DVec2]>,
    cursor: usize,
    layout_mismatch: bool,
}

impl<'a> VertexRewriter<'a> {
    /// Starts rewriting at vertex 0.
    pub fn new(buffers: &'a mut MeshBuffers) -> Self {
        let (positions, normals, uvs) = buffers.attributes_mut();
        Self {
            positions,
            normals,
            uvs,
            cursor: 0,
            layout_mismatch: false,
        }
    }

    /// Checks that exactly every vertex was rewritten.
    pub fn finish(self) -> ReshapeOutcome {
        if self.layout_mismatch || self.cursor != self.positions.len() {
            trace!(
                "Reshape layout mismatch: wrote {} of {} vertices",
                self.cursor,
                self.positions.len()
            );
            ReshapeOutcome::NeedsRebuild
        } else {
            ReshapeOutcome::Applied
        }
    }
}

impl VertexSink for VertexRewriter<'_> {
    #[inline]
    fn cursor(&self) -> u32 {
        self.cursor as u32
    }

    fn emit(&mut self, position: DVec3, normal: DVec3, uv: Option<DVec2>) -> u32 {
        let index = self.cursor;
        self.cursor += 1;

        if index >= self.positions.len() || self.uvs.is_some() != uv.is_some() {
            self.layout_mismatch = true;
            return index as u32;
        }

        self.positions[index] = position;
        self.normals[index] = normal;
        if let (Some(uvs), Some(uv)) = (&mut self.uvs, uv) {
            uvs[index] = uv;
        }
        index as u32
    }
}

// =============================================================================
// SHAPE CACHE
// =============================================================================

/// Per-shape data recorded by generate and consumed by reshape.
///
/// Holds the sanitized topology inputs the buffers were built with, plus any
/// derived data a reshape needs without re-deriving it.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeCache {
    Plane(plane::PlaneTopology),
    Box,
    Sphere(sphere::SphereTopology),
    Icosphere(icosphere::IcosphereCache),
    Cylinder(cylinder::CylinderTopology),
    RoundedBox(rounded_box::RoundedBoxCache),
    Ring(ring::RingTopology),
    Disc(disc::DiscTopology),
    Teapot(teapot::TeapotCache),
    Triangle(triangle::TriangleTopology),
    Torus(torus::TorusCache),
    Cone(cone::ConeTopology),
    Capsule(capsule::CapsuleTopology),
}

/// Builds the mesh for a parameter set from scratch.
pub fn generate(params: &ShapeParameters) -> (MeshBuffers, ShapeCache) {
    match params {
        ShapeParameters::Plane(p) => {
            let (mesh, cache) = plane::generate(p);
            (mesh, ShapeCache::Plane(cache))
        }
        ShapeParameters::Box(p) => (cube::generate(p), ShapeCache::Box),
        ShapeParameters::Sphere(p) => {
            let (mesh, cache) = sphere::generate(p);
            (mesh, ShapeCache::Sphere(cache))
        }
        ShapeParameters::Icosphere(p) => {
            let (mesh, cache) = icosphere::generate(p);
            (mesh, ShapeCache::Icosphere(cache))
        }
        ShapeParameters::Cylinder(p) => {
            let (mesh, cache) = cylinder::generate(p);
            (mesh, ShapeCache::Cylinder(cache))
        }
        ShapeParameters::RoundedBox(p) => {
            let (mesh, cache) = rounded_box::generate(p);
            (mesh, ShapeCache::RoundedBox(cache))
        }
        ShapeParameters::Ring(p) => {
            let (mesh, cache) = ring::generate(p);
            (mesh, ShapeCache::Ring(cache))
        }
        ShapeParameters::Disc(p) => {
            let (mesh, cache) = disc::generate(p);
            (mesh, ShapeCache::Disc(cache))
        }
        ShapeParameters::Teapot(p) => {
            let (mesh, cache) = teapot::generate(p);
            (mesh, ShapeCache::Teapot(cache))
        }
        ShapeParameters::Triangle(p) => {
            let (mesh, cache) = triangle::generate(p);
            (mesh, ShapeCache::Triangle(cache))
        }
        ShapeParameters::Torus(p) => {
            let (mesh, cache) = torus::generate(p);
            (mesh, ShapeCache::Torus(cache))
        }
        ShapeParameters::Cone(p) => {
            let (mesh, cache) = cone::generate(p);
            (mesh, ShapeCache::Cone(cache))
        }
        ShapeParameters::Capsule(p) => {
            let (mesh, cache) = capsule::generate(p);
            (mesh, ShapeCache::Capsule(cache))
        }
    }
}

/// Rewrites cached buffers in place for a parameter set.
///
/// Returns [`ReshapeOutcome::NeedsRebuild`] when the cache belongs to another
/// kind or its recorded topology differs from `params`.
pub fn reshape(
    params: &ShapeParameters,
    cache: &ShapeCache,
    buffers: &mut MeshBuffers,
) -> ReshapeOutcome {
    match (params, cache) {
        (ShapeParameters::Plane(p), ShapeCache::Plane(c)) => plane::reshape(p, c, buffers),
        (ShapeParameters::Box(p), ShapeCache::Box) => cube::reshape(p, buffers),
        (ShapeParameters::Sphere(p), ShapeCache::Sphere(c)) => sphere::reshape(p, c, buffers),
        (ShapeParameters::Icosphere(p), ShapeCache::Icosphere(c)) => {
            icosphere::reshape(p, c, buffers)
        }
        (ShapeParameters::Cylinder(p), ShapeCache::Cylinder(c)) => {
            cylinder::reshape(p, c, buffers)
        }
        (ShapeParameters::RoundedBox(p), ShapeCache::RoundedBox(c)) => {
            rounded_box::reshape(p, c, buffers)
        }
        (ShapeParameters::Ring(p), ShapeCache::Ring(c)) => ring::reshape(p, c, buffers),
        (ShapeParameters::Disc(p), ShapeCache::Disc(c)) => disc::reshape(p, c, buffers),
        (ShapeParameters::Teapot(p), ShapeCache::Teapot(c)) => teapot::reshape(p, c, buffers),
        (ShapeParameters::Triangle(p), ShapeCache::Triangle(c)) => {
            triangle::reshape(p, c, buffers)
        }
        (ShapeParameters::Torus(p), ShapeCache::Torus(c)) => torus::reshape(p, c, buffers),
        (ShapeParameters::Cone(p), ShapeCache::Cone(c)) => cone::reshape(p, c, buffers),
        (ShapeParameters::Capsule(p), ShapeCache::Capsule(c)) => {
            capsule::reshape(p, c, buffers)
        }
        _ => ReshapeOutcome::NeedsRebuild,
    }
}

// =============================================================================
// SHARED HELPERS
// =============================================================================

/// In-plane basis `(u, v)` of a flat shape facing `axis`, with `u × v = axis`.
pub(crate) fn flat_frame(axis: Axis) -> (DVec3, DVec3) {
    (axis.next().unit(), axis.next().next().unit())
}

/// Angle of rim sample `i` of `segments` for an arc covering `angle` turns,
/// centered on the frame's `u` direction.
pub(crate) fn arc_angle(i: u32, segments: u32, angle: f64) -> f64 {
    let t = f64::from(i) / f64::from(segments - 1);
    TAU * angle * (t - 0.5)
}

/// Appends the quads of a `columns × rows` vertex grid whose rows advance
/// along the shape's "up" direction.
///
/// `base` is the index of the grid's first vertex; vertices are laid out row by
/// row with `columns + 1` vertices per row.
pub(crate) fn grid_triangles(builder: &mut MeshBuilder, base: u32, columns: u32, rows: u32) {
    let stride = columns + 1;
    for row in 0..rows {
        for col in 0..columns {
            let i = base + row * stride + col;
            builder.triangle(i, i + 1, i + stride);
            builder.triangle(i + 1, i + stride + 1, i + stride);
        }
    }
}

/// Same grid as [`grid_triangles`] with rows advancing "down".
pub(crate) fn grid_triangles_flipped(
    builder: &mut MeshBuilder,
    base: u32,
    columns: u32,
    rows: u32,
) {
    let stride = columns + 1;
    for row in 0..rows {
        for col in 0..columns {
            let i = base + row * stride + col;
            builder.triangle(i, i + stride, i + 1);
            builder.triangle(i + 1, i + stride, i + stride + 1);
        }
    }
}
