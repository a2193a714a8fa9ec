//! # Mesh Buffers
//!
//! Vertex and index buffers produced by the primitive generators, together
//! with their axis-aligned bounds and the GPU-facing exports.

use crate::error::MeshError;
use config::constants::MAX_NARROW_INDEX_VERTICES;
use glam::{DVec2, DVec3};

// =============================================================================
// BOUNDS
// =============================================================================

/// Axis-aligned bounding box of a position buffer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    /// Minimum corner
    pub min: DVec3,
    /// Maximum corner
    pub max: DVec3,
}

impl Bounds {
    /// Computes the bounds of a set of points.
    ///
    /// An empty slice yields zero-sized bounds at the origin.
    ///
    /// # Example
    ///
    /// ```rust
    /// use metamesh::Bounds;
    /// use glam::DVec3;
    ///
    /// let bounds = Bounds::from_points(&[DVec3::new(-1.0, 0.0, 2.0), DVec3::new(3.0, 1.0, 0.0)]);
    /// assert_eq!(bounds.min, DVec3::new(-1.0, 0.0, 0.0));
    /// assert_eq!(bounds.size(), DVec3::new(4.0, 1.0, 2.0));
    /// ```
    pub fn from_points(points: &[DVec3]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::default();
        };

        rest.iter().fold(
            Self {
                min: *first,
                max: *first,
            },
            |bounds, p| Self {
                min: bounds.min.min(*p),
                max: bounds.max.max(*p),
            },
        )
    }

    /// Returns the extent on each axis.
    #[inline]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Returns the center point.
    #[inline]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }
}

// =============================================================================
// INDEX WIDTH
// =============================================================================

/// Index element width of an uploaded mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexFormat {
    /// 16-bit indices, valid up to 65535 vertices
    U16,
    /// 32-bit indices
    U32,
}

impl IndexFormat {
    /// Selects the narrowest index width able to address `vertex_count` vertices.
    ///
    /// # Example
    ///
    /// ```rust
    /// use metamesh::IndexFormat;
    ///
    /// assert_eq!(IndexFormat::for_vertex_count(65_535), IndexFormat::U16);
    /// assert_eq!(IndexFormat::for_vertex_count(65_536), IndexFormat::U32);
    /// ```
    pub fn for_vertex_count(vertex_count: usize) -> Self {
        if vertex_count > MAX_NARROW_INDEX_VERTICES {
            Self::U32
        } else {
            Self::U16
        }
    }
}

/// Index buffer in its upload width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexBuffer {
    U16(Vec<u16>),
    U32(Vec<u32>),
}

impl IndexBuffer {
    /// Packs indices using the width required by `vertex_count`.
    pub fn pack(indices: &[u32], vertex_count: usize) -> Self {
        match IndexFormat::for_vertex_count(vertex_count) {
            // Every index is < vertex_count <= u16::MAX here.
            IndexFormat::U16 => Self::U16(indices.iter().map(|&i| i as u16).collect()),
            IndexFormat::U32 => Self::U32(indices.to_vec()),
        }
    }

    /// Returns the element width.
    pub fn format(&self) -> IndexFormat {
        match self {
            Self::U16(_) => IndexFormat::U16,
            Self::U32(_) => IndexFormat::U32,
        }
    }

    /// Returns the number of indices.
    pub fn len(&self) -> usize {
        match self {
            Self::U16(indices) => indices.len(),
            Self::U32(indices) => indices.len(),
        }
    }

    /// Returns true if there are no indices.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// MESH BUFFERS
// =============================================================================

/// Positions, normals, optional UVs and triangle indices of one primitive.
///
/// All attribute buffers are index-aligned with `positions`. Triangles are
/// wound counter-clockwise when seen from the side their normals point to.
///
/// Geometry stays in f64 until it is exported for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffers {
    positions: Vec<DVec3>,
    normals: Vec<DVec3>,
    uvs: Option<Vec<DVec2>>,
    indices: Vec<u32>,
    bounds: Bounds,
}

impl MeshBuffers {
    /// Builds buffers from raw parts after validating them.
    ///
    /// # Example
    ///
    /// ```rust
    /// use metamesh::MeshBuffers;
    /// use glam::DVec3;
    ///
    /// let mesh = MeshBuffers::from_parts(
    ///     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
    ///     vec![DVec3::Z; 3],
    ///     None,
    ///     vec![0, 1, 2],
    /// )
    /// .unwrap();
    /// assert_eq!(mesh.triangle_count(), 1);
    ///
    /// assert!(MeshBuffers::from_parts(vec![DVec3::ZERO], vec![DVec3::Z], None, vec![0, 1, 2]).is_err());
    /// ```
    pub fn from_parts(
        positions: Vec<DVec3>,
        normals: Vec<DVec3>,
        uvs: Option<Vec<DVec2>>,
        indices: Vec<u32>,
    ) -> Result<Self, MeshError> {
        let mesh = Self::assemble(positions, normals, uvs, indices);
        mesh.validate()?;
        Ok(mesh)
    }

    /// Builds buffers from parts the generators have already laid out.
    pub(crate) fn assemble(
        positions: Vec<DVec3>,
        normals: Vec<DVec3>,
        uvs: Option<Vec<DVec2>>,
        indices: Vec<u32>,
    ) -> Self {
        let bounds = Bounds::from_points(&positions);
        Self {
            positions,
            normals,
            uvs,
            indices,
            bounds,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns the vertex normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns the texture coordinates, if the shape produces them.
    #[inline]
    pub fn uvs(&self) -> Option<&[DVec2]> {
        self.uvs.as_deref()
    }

    /// Returns the flat triangle index list.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Iterates over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Returns the bounds as of the last recompute.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Recomputes the bounds from the current positions.
    pub fn recompute_bounds(&mut self) {
        self.bounds = Bounds::from_points(&self.positions);
    }

    /// Returns the index width required by this mesh.
    pub fn index_format(&self) -> IndexFormat {
        IndexFormat::for_vertex_count(self.vertex_count())
    }

    /// Packs the indices in the width required by this mesh.
    pub fn index_buffer(&self) -> IndexBuffer {
        IndexBuffer::pack(&self.indices, self.vertex_count())
    }

    /// Offsets every position by `offset`. Bounds are not recomputed.
    pub fn translate(&mut self, offset: DVec3) {
        for p in &mut self.positions {
            *p += offset;
        }
    }

    /// Scales every position uniformly. Bounds are not recomputed.
    pub fn scale(&mut self, factor: f64) {
        for p in &mut self.positions {
            *p *= factor;
        }
    }

    pub(crate) fn attributes_mut(
        &mut self,
    ) -> (&mut [DVec3], &mut [DVec3], Option<&mut [DVec2]>) {
        (
            &mut self.positions,
            &mut self.normals,
            self.uvs.as_deref_mut(),
        )
    }

    /// Validates buffer alignment and index ranges.
    ///
    /// Checks:
    /// - Normals and UVs have one entry per position
    /// - Index count is a multiple of three
    /// - Every index addresses an existing vertex
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.positions.len();

        if self.normals.len() != vertex_count {
            return Err(MeshError::attribute_mismatch(
                "normals",
                vertex_count,
                self.normals.len(),
            ));
        }

        if let Some(uvs) = &self.uvs {
            if uvs.len() != vertex_count {
                return Err(MeshError::attribute_mismatch("uvs", vertex_count, uvs.len()));
            }
        }

        if self.indices.len() % 3 != 0 {
            return Err(MeshError::IncompleteTriangleList {
                len: self.indices.len(),
            });
        }

        if let Some(&index) = self.indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(MeshError::IndexOutOfRange {
                index,
                vertex_count,
            });
        }

        Ok(())
    }

    /// Exports positions as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn positions_f32(&self) -> Vec<f32> {
        flatten3(&self.positions)
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten3(&self.normals)
    }

    /// Exports UVs as f32 array for GPU.
    pub fn uvs_f32(&self) -> Option<Vec<f32>> {
        self.uvs.as_ref().map(|uvs| {
            let mut result = Vec::with_capacity(uvs.len() * 2);
            for uv in uvs {
                result.push(uv.x as f32);
                result.push(uv.y as f32);
            }
            result
        })
    }
}

fn flatten3(values: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}

// =============================================================================
// MESH SINK
// =============================================================================

/// External consumer of finished buffers, typically an engine mesh object.
///
/// The controller is the only writer; a sink receives buffers after bounds
/// and pivot post-processing are complete.
pub trait MeshSink {
    /// Receives the finished buffers of one primitive.
    fn upload(&mut self, buffers: &MeshBuffers);
}
