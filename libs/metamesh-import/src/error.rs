//! # Import Errors

use metamesh::MeshError;
use thiserror::Error;

/// Errors raised while reading import settings.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The settings document is not valid JSON for [`crate::ImportSettings`].
    #[error("Invalid import settings: {0}")]
    Settings(#[from] serde_json::Error),

    /// The settings named a shape this importer does not know.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}
