//! # Imported Assets
//!
//! GPU-ready output of an import: f32 vertex streams, a packed index buffer
//! and the scene object that references them.

use glam::Vec3;
use metamesh::{IndexBuffer, IndexFormat, MeshBuffers, MeshSink, ShapeKind};

/// Name of the mesh sub-asset.
pub const MESH_NAME: &str = "Mesh";

/// Name of the main scene object of every import.
pub const PREFAB_NAME: &str = "prefab";

/// Material assigned when the render pipeline provides none.
pub const DEFAULT_MATERIAL_NAME: &str = "Default-Diffuse";

// =============================================================================
// IMPORTED MESH
// =============================================================================

/// Uploaded mesh data.
///
/// Vertex streams are flattened `[x, y, z, x, y, z, ...]` (`[u, v, ...]` for
/// texture coordinates). The f64 buffers are kept only for read/write
/// imports.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedMesh {
    name: String,
    read_write: bool,
    positions: Vec<f32>,
    normals: Vec<f32>,
    uvs: Option<Vec<f32>>,
    indices: IndexBuffer,
    bounds_min: Vec3,
    bounds_max: Vec3,
    cpu_copy: Option<MeshBuffers>,
}

impl ImportedMesh {
    /// Creates an empty mesh waiting for its first upload.
    pub fn new(read_write: bool) -> Self {
        Self {
            name: MESH_NAME.to_string(),
            read_write,
            positions: Vec::new(),
            normals: Vec::new(),
            uvs: None,
            indices: IndexBuffer::U16(Vec::new()),
            bounds_min: Vec3::ZERO,
            bounds_max: Vec3::ZERO,
            cpu_copy: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    pub fn uvs(&self) -> Option<&[f32]> {
        self.uvs.as_deref()
    }

    pub fn indices(&self) -> &IndexBuffer {
        &self.indices
    }

    pub fn index_format(&self) -> IndexFormat {
        self.indices.format()
    }

    /// Bounds as `(min, max)`.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        (self.bounds_min, self.bounds_max)
    }

    /// Returns true if the CPU-side buffers are still readable.
    pub fn is_readable(&self) -> bool {
        self.cpu_copy.is_some()
    }

    /// CPU-side buffers, present only for read/write imports.
    pub fn cpu_copy(&self) -> Option<&MeshBuffers> {
        self.cpu_copy.as_ref()
    }
}

impl MeshSink for ImportedMesh {
    fn upload(&mut self, buffers: &MeshBuffers) {
        let bounds = buffers.bounds();
        self.positions = buffers.positions_f32();
        self.normals = buffers.normals_f32();
        self.uvs = buffers.uvs_f32();
        self.indices = buffers.index_buffer();
        self.bounds_min = bounds.min.as_vec3();
        self.bounds_max = bounds.max.as_vec3();
        self.cpu_copy = self.read_write.then(|| buffers.clone());
    }
}

// =============================================================================
// SCENE OBJECTS
// =============================================================================

/// Material reference attached to a scene object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Material {
    pub name: String,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: DEFAULT_MATERIAL_NAME.to_string(),
        }
    }
}

/// Scene object pairing an imported mesh with a material.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub mesh: ImportedMesh,
    pub material: Material,
}

/// Result of importing one asset.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedAsset {
    /// Shape the asset was generated from
    pub kind: ShapeKind,
    /// Main object of the asset
    pub prefab: SceneObject,
}

impl ImportedAsset {
    /// The asset's mesh sub-object.
    pub fn mesh(&self) -> &ImportedMesh {
        &self.prefab.mesh
    }
}
