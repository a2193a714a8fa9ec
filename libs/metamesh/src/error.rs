//! # Mesh Errors
//!
//! Error types for buffer validation and shape-kind lookup.
//!
//! Generation itself never fails: out-of-range parameters are clamped and
//! degenerate sizes produce degenerate geometry. These errors only arise at
//! the boundary, when external data is turned into buffers or shape kinds.

use thiserror::Error;

/// Errors that can occur when validating mesh data or resolving a shape kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// Shape kind name did not match any known primitive
    #[error("Unknown shape kind: {name}")]
    UnknownShape { name: String },

    /// Triangle references a vertex that does not exist
    #[error("Index {index} out of range (vertex count: {vertex_count})")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    /// A vertex attribute does not line up with the position buffer
    #[error("Attribute '{attribute}' has {actual} entries, expected {expected}")]
    AttributeLengthMismatch {
        attribute: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Index buffer length is not a multiple of three
    #[error("Index buffer length {len} is not a whole number of triangles")]
    IncompleteTriangleList { len: usize },
}

impl MeshError {
    /// Creates an unknown shape kind error.
    pub fn unknown_shape(name: impl Into<String>) -> Self {
        Self::UnknownShape { name: name.into() }
    }

    /// Creates an attribute length mismatch error.
    pub fn attribute_mismatch(attribute: &'static str, expected: usize, actual: usize) -> Self {
        Self::AttributeLengthMismatch {
            attribute,
            expected,
            actual,
        }
    }
}
