//! # Topology Fingerprint
//!
//! Digest of a shape's topology-affecting fields.
//!
//! Two parameter sets of the same kind with equal topology-affecting fields
//! always produce equal fingerprints, whatever their shape-only fields hold.
//! The controller compares fingerprints to choose between a full generate
//! and an in-place reshape.

use crate::shape::{Axis, ShapeKind};
use config::constants::FINGERPRINT_MULTIPLIER;

/// Order-sensitive digest of topology-affecting fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TopologyFingerprint(u64);

impl TopologyFingerprint {
    /// Returns the raw digest value.
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A value that can be folded into a fingerprint.
pub trait TopologyField {
    /// Returns the value folded into the running hash.
    fn field_hash(&self) -> u64;
}

impl TopologyField for u32 {
    fn field_hash(&self) -> u64 {
        u64::from(*self)
    }
}

impl TopologyField for bool {
    fn field_hash(&self) -> u64 {
        u64::from(*self)
    }
}

impl TopologyField for Axis {
    fn field_hash(&self) -> u64 {
        self.index() as u64
    }
}

/// Folds fields into a fingerprint with `hash = hash * K + field`.
///
/// # Example
///
/// ```rust
/// use metamesh::fingerprint::FingerprintBuilder;
/// use metamesh::ShapeKind;
///
/// let a = FingerprintBuilder::new(ShapeKind::Sphere).field(24u32).field(12u32).finish();
/// let b = FingerprintBuilder::new(ShapeKind::Sphere).field(12u32).field(24u32).finish();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FingerprintBuilder(u64);

impl FingerprintBuilder {
    /// Starts a fingerprint seeded with the shape kind.
    pub fn new(kind: ShapeKind) -> Self {
        Self(kind as u64 + 1)
    }

    /// Folds the next field in declared order.
    pub fn field(self, value: impl TopologyField) -> Self {
        Self(
            self.0
                .wrapping_mul(FINGERPRINT_MULTIPLIER)
                .wrapping_add(value.field_hash()),
        )
    }

    /// Finishes the digest.
    pub fn finish(self) -> TopologyFingerprint {
        TopologyFingerprint(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_differs_per_kind() {
        let a = FingerprintBuilder::new(ShapeKind::Box).finish();
        let b = FingerprintBuilder::new(ShapeKind::Triangle).finish();
        assert_ne!(a, b);
    }

    #[test]
    fn test_combining_rule() {
        let seed = ShapeKind::Disc as u64 + 1;
        let fp = FingerprintBuilder::new(ShapeKind::Disc)
            .field(32u32)
            .field(Axis::Z)
            .field(true)
            .finish();
        let expected = ((seed * 23 + 32) * 23 + 2) * 23 + 1;
        assert_eq!(fp.value(), expected);
    }

    #[test]
    fn test_bool_changes_fingerprint() {
        let on = FingerprintBuilder::new(ShapeKind::Plane).field(true).finish();
        let off = FingerprintBuilder::new(ShapeKind::Plane).field(false).finish();
        assert_ne!(on, off);
    }
}
