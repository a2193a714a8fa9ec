//! # Metamesh Import
//!
//! Turns importer settings into GPU-ready mesh assets.
//!
//! ## Pipeline
//!
//! ```text
//! ImportSettings ─► metamesh::generate ─► ImportedMesh (f32 streams, u16/u32 indices)
//!                                               │
//!                                               ▼
//!                                  SceneObject "prefab" + default material
//! ```
//!
//! Every import is a single full generate; the reshape path is for editors
//! that keep a primitive alive between edits.
//!
//! ## Usage
//!
//! ```rust
//! use metamesh::IndexFormat;
//! use metamesh_import::{import_mesh, ImportSettings};
//!
//! let asset = import_mesh(&ImportSettings::default());
//! assert_eq!(asset.prefab.name, "prefab");
//! assert_eq!(asset.mesh().vertex_count(), 24);
//! assert_eq!(asset.mesh().index_format(), IndexFormat::U16);
//! ```

pub mod asset;
pub mod error;
pub mod settings;

#[cfg(test)]
mod tests;

pub use asset::{ImportedAsset, ImportedMesh, Material, SceneObject};
pub use error::ImportError;
pub use settings::ImportSettings;

use log::{debug, info, warn};
use metamesh::{generate, MeshSink};
use rayon::prelude::*;

/// Imports one primitive asset.
pub fn import_mesh(settings: &ImportSettings) -> ImportedAsset {
    let kind = settings.shape.kind();
    let state = generate(&settings.shape, &settings.pivot);

    if settings.generate_lightmap_uvs {
        warn!("Lightmap UV generation is not supported; {kind} imported without a secondary UV set");
    }

    let mut mesh = ImportedMesh::new(settings.read_write);
    mesh.upload(state.buffers());
    debug!(
        "Imported {}: {} vertices, {:?} indices, read/write {}",
        kind,
        mesh.vertex_count(),
        mesh.index_format(),
        settings.read_write
    );

    ImportedAsset {
        kind,
        prefab: SceneObject {
            name: asset::PREFAB_NAME.to_string(),
            mesh,
            material: Material::default(),
        },
    }
}

/// Imports independent assets in parallel, preserving input order.
pub fn import_batch(settings: &[ImportSettings]) -> Vec<ImportedAsset> {
    info!("Importing {} primitive assets", settings.len());
    settings.par_iter().map(import_mesh).collect()
}

/// Parses a settings document and imports it.
pub fn import_json(source: &str) -> Result<ImportedAsset, ImportError> {
    let settings = ImportSettings::from_json(source)?;
    Ok(import_mesh(&settings))
}
