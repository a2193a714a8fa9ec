//! # Metamesh
//!
//! Parametric mesh primitives for an engine asset importer.
//!
//! ## Architecture
//!
//! ```text
//! ShapeParameters ──fingerprint──► changed? ──yes──► primitives::generate
//!                                      │                     │
//!                                      no                    ▼
//!                                      └──► primitives::reshape (in place)
//!                                                            │
//!                                            bounds ► pivot ► MeshSink
//! ```
//!
//! Every shape kind owns one module under [`primitives`] with its parameter
//! record, its field classification, and a single vertex traversal shared by
//! the generate and reshape paths.
//!
//! ## Usage
//!
//! ```rust
//! use metamesh::{Primitive, PivotSpec, ShapeParameters};
//! use metamesh::primitives::cube::BoxParams;
//!
//! let mut primitive = Primitive::new(
//!     ShapeParameters::Box(BoxParams::new(2.0, 2.0, 2.0)),
//!     PivotSpec::default(),
//! );
//! assert!(!primitive.refresh()); // first call always generates
//!
//! primitive.set_parameters(ShapeParameters::Box(BoxParams::new(4.0, 2.0, 2.0)));
//! assert!(primitive.refresh()); // width is shape-only, so buffers are reshaped
//! ```

pub mod controller;
pub mod error;
pub mod fingerprint;
pub mod mesh;
pub mod pivot;
pub mod primitives;
pub mod shape;

pub use controller::{generate, reshape, Primitive, PrimitiveState};
pub use error::MeshError;
pub use fingerprint::TopologyFingerprint;
pub use mesh::{Bounds, IndexBuffer, IndexFormat, MeshBuffers, MeshSink};
pub use pivot::{adjust_pivot, PivotAnchor, PivotSpec};
pub use shape::{Axis, FieldClass, FieldSpec, ShapeKind, ShapeParameters};
