//! # Import Settings
//!
//! Per-asset importer configuration. The shape record carries its own kind,
//! so a settings document looks like:
//!
//! ```json
//! {
//!   "shape": { "kind": "Sphere", "radius": 2.0 },
//!   "pivot": { "x": "Center", "y": "Min", "z": "Center", "normalize": false },
//!   "read_write": true
//! }
//! ```

use crate::error::ImportError;
use metamesh::{PivotSpec, ShapeKind, ShapeParameters};
use serde::{Deserialize, Serialize};

/// Settings for one imported primitive.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    pub shape: ShapeParameters,
    pub pivot: PivotSpec,
    /// Requests a secondary UV set; accepted but not generated
    pub generate_lightmap_uvs: bool,
    /// Keeps a CPU-side copy of the buffers after upload
    pub read_write: bool,
}

impl ImportSettings {
    /// Settings for `shape` with a centered pivot.
    pub fn new(shape: ShapeParameters) -> Self {
        Self {
            shape,
            ..Default::default()
        }
    }

    /// Default settings for the shape called `name`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use metamesh::ShapeKind;
    /// use metamesh_import::ImportSettings;
    ///
    /// let settings = ImportSettings::for_shape_name("rounded-box").unwrap();
    /// assert_eq!(settings.shape.kind(), ShapeKind::RoundedBox);
    /// assert!(ImportSettings::for_shape_name("dodecahedron").is_err());
    /// ```
    pub fn for_shape_name(name: &str) -> Result<Self, ImportError> {
        let kind: ShapeKind = name.parse()?;
        Ok(Self::new(ShapeParameters::default_for(kind)))
    }

    /// Reads settings from a JSON document; missing fields take defaults.
    pub fn from_json(source: &str) -> Result<Self, ImportError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Writes settings as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ImportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
