//! # Shape Parameters
//!
//! The closed set of shape kinds and their parameter records.
//!
//! Every field of every record is classified once, here and in the record's
//! `FIELDS` table, as either shape-only or topology-affecting. Only the
//! topology-affecting fields reach the fingerprint, so editing a shape-only
//! field never forces a rebuild.

use crate::error::MeshError;
use crate::fingerprint::TopologyFingerprint;
use crate::primitives::{
    capsule::CapsuleParams, cone::ConeParams, cube::BoxParams, cylinder::CylinderParams,
    disc::DiscParams, icosphere::IcosphereParams, plane::PlaneParams, ring::RingParams,
    rounded_box::RoundedBoxParams, sphere::SphereParams, teapot::TeapotParams,
    torus::TorusParams, triangle::TriangleParams,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;


// =============================================================================
// SHAPE KIND
// =============================================================================

/// Every primitive the generator knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Plane,
    Box,
    Sphere,
    Icosphere,
    Cylinder,
    RoundedBox,
    Ring,
    Disc,
    Teapot,
    Triangle,
    Torus,
    Cone,
    Capsule,
}

impl ShapeKind {
    /// All shape kinds in declaration order.
    pub const ALL: [ShapeKind; 13] = [
        Self::Plane,
        Self::Box,
        Self::Sphere,
        Self::Icosphere,
        Self::Cylinder,
        Self::RoundedBox,
        Self::Ring,
        Self::Disc,
        Self::Teapot,
        Self::Triangle,
        Self::Torus,
        Self::Cone,
        Self::Capsule,
    ];

    /// Returns the display name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Plane => "Plane",
            Self::Box => "Box",
            Self::Sphere => "Sphere",
            Self::Icosphere => "Icosphere",
            Self::Cylinder => "Cylinder",
            Self::RoundedBox => "RoundedBox",
            Self::Ring => "Ring",
            Self::Disc => "Disc",
            Self::Teapot => "Teapot",
            Self::Triangle => "Triangle",
            Self::Torus => "Torus",
            Self::Cone => "Cone",
            Self::Capsule => "Capsule",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = MeshError;

    /// Parses a kind name, ignoring case, underscores and dashes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use metamesh::ShapeKind;
    ///
    /// assert_eq!("rounded_box".parse::<ShapeKind>().unwrap(), ShapeKind::RoundedBox);
    /// assert!("dodecahedron".parse::<ShapeKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Self::ALL
            .into_iter()
            .find(|kind| kind.name().to_ascii_lowercase() == key)
            .ok_or_else(|| MeshError::unknown_shape(s))
    }
}

// =============================================================================
// AXIS
// =============================================================================

/// A principal axis, used for orientation of flat and revolved shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Returns the axis index (X = 0, Y = 1, Z = 2).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Returns the axis for an index, wrapping modulo 3.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        match index % 3 {
            0 => Self::X,
            1 => Self::Y,
            _ => Self::Z,
        }
    }

    /// Returns the next axis in cyclic order (X → Y → Z → X).
    #[inline]
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Returns the unit vector along the axis.
    #[inline]
    pub fn unit(self) -> DVec3 {
        match self {
            Self::X => DVec3::X,
            Self::Y => DVec3::Y,
            Self::Z => DVec3::Z,
        }
    }
}

// =============================================================================
// FIELD CLASSIFICATION
// =============================================================================

/// Whether editing a field can change vertex count or connectivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldClass {
    /// Moves vertices only; handled by reshape
    ShapeOnly,
    /// Changes vertex count, index buffer or attribute layout
    TopologyAffecting,
}

/// Static description of one parameter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub class: FieldClass,
}

impl FieldSpec {
    /// Declares a shape-only field.
    pub const fn shape_only(name: &'static str) -> Self {
        Self {
            name,
            class: FieldClass::ShapeOnly,
        }
    }

    /// Declares a topology-affecting field.
    pub const fn topology(name: &'static str) -> Self {
        Self {
            name,
            class: FieldClass::TopologyAffecting,
        }
    }
}

/// Implemented by every shape parameter record.
pub trait ShapeRecord {
    /// Kind this record describes.
    const KIND: ShapeKind;

    /// Every field with its classification, in declared order.
    const FIELDS: &'static [FieldSpec];

    /// Digest of the topology-affecting fields as written, before clamping.
    fn fingerprint(&self) -> TopologyFingerprint;
}

// =============================================================================
// SHAPE PARAMETERS
// =============================================================================

/// Parameter set of one primitive, tagged by shape kind.
///
/// # Example
///
/// ```rust
/// use metamesh::{ShapeKind, ShapeParameters};
///
/// let params: ShapeParameters =
///     serde_json::from_str(r#"{ "kind": "Sphere", "radius": 2.0 }"#).unwrap();
/// assert_eq!(params.kind(), ShapeKind::Sphere);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ShapeParameters {
    Plane(PlaneParams),
    Box(BoxParams),
    Sphere(SphereParams),
    Icosphere(IcosphereParams),
    Cylinder(CylinderParams),
    RoundedBox(RoundedBoxParams),
    Ring(RingParams),
    Disc(DiscParams),
    Teapot(TeapotParams),
    Triangle(TriangleParams),
    Torus(TorusParams),
    Cone(ConeParams),
    Capsule(CapsuleParams),
}

/// Expands `$body` once per variant with `$p` bound to the record.
macro_rules! each_shape {
    ($value:expr, $p:ident => $body:expr) => {
        match $value {
            ShapeParameters::Plane($p) => $body,
            ShapeParameters::Box($p) => $body,
            ShapeParameters::Sphere($p) => $body,
            ShapeParameters::Icosphere($p) => $body,
            ShapeParameters::Cylinder($p) => $body,
            ShapeParameters::RoundedBox($p) => $body,
            ShapeParameters::Ring($p) => $body,
            ShapeParameters::Disc($p) => $body,
            ShapeParameters::Teapot($p) => $body,
            ShapeParameters::Triangle($p) => $body,
            ShapeParameters::Torus($p) => $body,
            ShapeParameters::Cone($p) => $body,
            ShapeParameters::Capsule($p) => $body,
        }
    };
}

impl ShapeParameters {
    /// Returns the default parameter set for a kind.
    pub fn default_for(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Plane => Self::Plane(PlaneParams::default()),
            ShapeKind::Box => Self::Box(BoxParams::default()),
            ShapeKind::Sphere => Self::Sphere(SphereParams::default()),
            ShapeKind::Icosphere => Self::Icosphere(IcosphereParams::default()),
            ShapeKind::Cylinder => Self::Cylinder(CylinderParams::default()),
            ShapeKind::RoundedBox => Self::RoundedBox(RoundedBoxParams::default()),
            ShapeKind::Ring => Self::Ring(RingParams::default()),
            ShapeKind::Disc => Self::Disc(DiscParams::default()),
            ShapeKind::Teapot => Self::Teapot(TeapotParams::default()),
            ShapeKind::Triangle => Self::Triangle(TriangleParams::default()),
            ShapeKind::Torus => Self::Torus(TorusParams::default()),
            ShapeKind::Cone => Self::Cone(ConeParams::default()),
            ShapeKind::Capsule => Self::Capsule(CapsuleParams::default()),
        }
    }

    /// Returns the kind of this parameter set.
    pub fn kind(&self) -> ShapeKind {
        fn kind_of<T: ShapeRecord>(_: &T) -> ShapeKind {
            T::KIND
        }
        each_shape!(self, p => kind_of(p))
    }

    /// Returns the field classification table of this kind.
    pub fn fields(&self) -> &'static [FieldSpec] {
        fn fields_of<T: ShapeRecord>(_: &T) -> &'static [FieldSpec] {
            T::FIELDS
        }
        each_shape!(self, p => fields_of(p))
    }

    /// Computes the topology fingerprint.
    pub fn fingerprint(&self) -> TopologyFingerprint {
        each_shape!(self, p => p.fingerprint())
    }
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Self::Box(BoxParams::default())
    }
}
