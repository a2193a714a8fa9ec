//! # Config Crate
//!
//! Centralized configuration constants for the metamesh primitive pipeline.
//! Sanitization minimums, tolerances, and per-shape default parameter values
//! are defined here so generators, reshapers, and the importer agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MIN_RADIAL_SEGMENTS, MAX_NARROW_INDEX_VERTICES};
//!
//! // Segment counts below the minimum are clamped, never rejected
//! let columns = 2u32.max(MIN_RADIAL_SEGMENTS);
//! assert_eq!(columns, 3);
//!
//! // Meshes above the threshold need 32-bit indices
//! let vertex_count = 70_000;
//! assert!(vertex_count > MAX_NARROW_INDEX_VERTICES);
//! ```
//!
//! Minimums are clamping targets, never validation errors: a parameter below
//! its minimum is raised to it before any geometry is emitted.

pub mod constants;

#[cfg(test)]
mod tests;
