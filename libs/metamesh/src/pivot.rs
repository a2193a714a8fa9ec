//! # Pivot Post-Processing
//!
//! Moves the mesh origin to a per-axis anchor of its bounds and optionally
//! normalizes the mesh to unit size. Runs after every generate and reshape.

use crate::mesh::{Bounds, MeshBuffers};
use glam::DVec3;
use log::trace;
use serde::{Deserialize, Serialize};

/// Where the origin sits along one axis of the mesh bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PivotAnchor {
    /// Origin at the minimum bound
    Min,
    /// Origin left where the generator placed it
    #[default]
    Center,
    /// Origin at the maximum bound
    Max,
}

impl PivotAnchor {
    fn offset(self, min: f64, max: f64) -> f64 {
        match self {
            Self::Min => min,
            Self::Center => 0.0,
            Self::Max => max,
        }
    }
}

/// Per-axis pivot anchors plus the normalize-to-unit-size flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PivotSpec {
    pub x: PivotAnchor,
    pub y: PivotAnchor,
    pub z: PivotAnchor,
    pub normalize: bool,
}

impl PivotSpec {
    /// Creates a pivot spec with the given anchors and no normalization.
    pub fn new(x: PivotAnchor, y: PivotAnchor, z: PivotAnchor) -> Self {
        Self {
            x,
            y,
            z,
            normalize: false,
        }
    }

    /// Returns a copy with normalization enabled or disabled.
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Returns true when every axis is anchored at `Center`.
    pub fn is_centered(&self) -> bool {
        self.x == PivotAnchor::Center
            && self.y == PivotAnchor::Center
            && self.z == PivotAnchor::Center
    }

    /// Computes the offset subtracted from every position.
    pub fn offset(&self, bounds: &Bounds) -> DVec3 {
        DVec3::new(
            self.x.offset(bounds.min.x, bounds.max.x),
            self.y.offset(bounds.min.y, bounds.max.y),
            self.z.offset(bounds.min.z, bounds.max.z),
        )
    }
}

/// Applies pivot anchoring and optional normalization in place.
///
/// With every axis at `Center` this is a no-op, normalization included.
/// Otherwise the anchor offset is subtracted, bounds are recomputed, and when
/// `normalize` is set positions are scaled so the largest extent becomes 1.
/// A mesh with zero extent on all axes is left unscaled.
///
/// # Example
///
/// ```rust
/// use metamesh::{adjust_pivot, MeshBuffers, PivotAnchor, PivotSpec};
/// use glam::DVec3;
///
/// let mut mesh = MeshBuffers::from_parts(
///     vec![DVec3::new(-1.0, -2.0, 0.0), DVec3::new(1.0, 2.0, 0.0), DVec3::ZERO],
///     vec![DVec3::Z; 3],
///     None,
///     vec![0, 1, 2],
/// )
/// .unwrap();
///
/// let pivot = PivotSpec::new(PivotAnchor::Center, PivotAnchor::Min, PivotAnchor::Center);
/// adjust_pivot(&mut mesh, &pivot);
/// assert_eq!(mesh.bounds().min.y, 0.0);
/// ```
pub fn adjust_pivot(buffers: &mut MeshBuffers, pivot: &PivotSpec) {
    if pivot.is_centered() {
        return;
    }

    let offset = pivot.offset(&buffers.bounds());
    trace!("Pivot offset {:?}", offset);
    buffers.translate(-offset);
    buffers.recompute_bounds();

    if pivot.normalize {
        let extent = buffers.bounds().size().max_element();
        if extent > 0.0 {
            buffers.scale(1.0 / extent);
            buffers.recompute_bounds();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn quad() -> MeshBuffers {
        MeshBuffers::from_parts(
            vec![
                DVec3::new(-2.0, -1.0, 0.5),
                DVec3::new(2.0, -1.0, 0.5),
                DVec3::new(2.0, 3.0, 0.5),
                DVec3::new(-2.0, 3.0, 0.5),
            ],
            vec![DVec3::Z; 4],
            None,
            vec![0, 1, 2, 0, 2, 3],
        )
        .unwrap()
    }

    #[test]
    fn test_centered_is_noop() {
        let mut mesh = quad();
        let before = mesh.clone();
        adjust_pivot(&mut mesh, &PivotSpec::default().with_normalize(true));
        assert_eq!(mesh, before);
    }

    #[test]
    fn test_min_anchor_zeroes_min_bound() {
        let mut mesh = quad();
        let pivot = PivotSpec::new(PivotAnchor::Min, PivotAnchor::Min, PivotAnchor::Min);
        adjust_pivot(&mut mesh, &pivot);
        assert_eq!(mesh.bounds().min, DVec3::ZERO);
        assert_eq!(mesh.bounds().max, DVec3::new(4.0, 4.0, 0.0));
    }

    #[test]
    fn test_max_anchor_zeroes_max_bound() {
        let mut mesh = quad();
        let pivot = PivotSpec::new(PivotAnchor::Max, PivotAnchor::Center, PivotAnchor::Center);
        adjust_pivot(&mut mesh, &pivot);
        assert_eq!(mesh.bounds().max.x, 0.0);
        assert_eq!(mesh.bounds().min.y, -1.0);
    }

    #[test]
    fn test_normalize_to_unit() {
        let mut mesh = quad();
        let pivot = PivotSpec::new(PivotAnchor::Min, PivotAnchor::Center, PivotAnchor::Center)
            .with_normalize(true);
        adjust_pivot(&mut mesh, &pivot);
        assert_relative_eq!(mesh.bounds().size().max_element(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(mesh.bounds().min.x, 0.0);
    }

    #[test]
    fn test_normalize_skips_zero_extent() {
        let mut mesh = MeshBuffers::from_parts(
            vec![DVec3::splat(3.0); 3],
            vec![DVec3::Z; 3],
            None,
            vec![0, 1, 2],
        )
        .unwrap();
        let pivot = PivotSpec::new(PivotAnchor::Min, PivotAnchor::Min, PivotAnchor::Min)
            .with_normalize(true);
        adjust_pivot(&mut mesh, &pivot);
        assert_eq!(mesh.positions(), &[DVec3::ZERO; 3]);
    }
}
