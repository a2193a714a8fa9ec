//! # Primitive Controller
//!
//! Chooses between full generation and in-place reshape, and runs the
//! post-processing shared by every shape.
//!
//! ## Call Order
//!
//! Within one call the steps are strictly sequential:
//!
//! ```text
//! generate or reshape buffers → recompute bounds → adjust pivot (→ bounds)
//! ```
//!
//! State is an explicit value. Callers that keep a primitive alive across
//! edits hold an `Option<PrimitiveState>` (or a [`Primitive`]) and pass it
//! back on every edit; the importer only ever calls [`generate`].

#[cfg(test)]
mod tests;

use crate::fingerprint::TopologyFingerprint;
use crate::mesh::{MeshBuffers, MeshSink};
use crate::pivot::{adjust_pivot, PivotSpec};
use crate::primitives::{self, ReshapeOutcome, ShapeCache};
use crate::shape::{ShapeKind, ShapeParameters};
use log::{debug, trace};

// =============================================================================
// PRIMITIVE STATE
// =============================================================================

/// Cached result of the last generate, mutated in place by reshape.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveState {
    kind: ShapeKind,
    fingerprint: TopologyFingerprint,
    buffers: MeshBuffers,
    cache: ShapeCache,
}

impl PrimitiveState {
    /// Shape kind the buffers were generated for.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Fingerprint recorded at the last generate.
    pub fn fingerprint(&self) -> TopologyFingerprint {
        self.fingerprint
    }

    /// Finished, post-processed buffers.
    pub fn buffers(&self) -> &MeshBuffers {
        &self.buffers
    }

    /// Shape-specific data kept for reshaping.
    pub fn cache(&self) -> &ShapeCache {
        &self.cache
    }

    /// Takes the buffers, dropping the cache.
    pub fn into_buffers(self) -> MeshBuffers {
        self.buffers
    }
}

fn finish(buffers: &mut MeshBuffers, pivot: &PivotSpec) {
    buffers.recompute_bounds();
    adjust_pivot(buffers, pivot);
}

/// Builds a primitive from scratch.
///
/// # Example
///
/// ```rust
/// use metamesh::{generate, PivotSpec, ShapeKind, ShapeParameters};
///
/// let state = generate(&ShapeParameters::default_for(ShapeKind::Sphere), &PivotSpec::default());
/// assert_eq!(state.kind(), ShapeKind::Sphere);
/// assert!(state.buffers().validate().is_ok());
/// ```
pub fn generate(params: &ShapeParameters, pivot: &PivotSpec) -> PrimitiveState {
    let (mut buffers, cache) = primitives::generate(params);
    finish(&mut buffers, pivot);

    let state = PrimitiveState {
        kind: params.kind(),
        fingerprint: params.fingerprint(),
        buffers,
        cache,
    };
    trace!(
        "Generated {}: {} vertices, {} triangles",
        state.kind,
        state.buffers.vertex_count(),
        state.buffers.triangle_count()
    );
    state
}

/// Updates a primitive after a parameter edit.
///
/// Returns `true` when the cached buffers were reshaped in place and `false`
/// when a full generate replaced them: no prior state, a different kind, a
/// changed fingerprint, or a reshaper that found its cached topology stale.
///
/// # Example
///
/// ```rust
/// use metamesh::{reshape, PivotSpec, ShapeParameters};
/// use metamesh::primitives::sphere::SphereParams;
///
/// let pivot = PivotSpec::default();
/// let mut state = None;
/// let small = ShapeParameters::Sphere(SphereParams { radius: 1.0, ..Default::default() });
/// assert!(!reshape(&mut state, &small, &pivot));
///
/// let large = ShapeParameters::Sphere(SphereParams { radius: 2.0, ..Default::default() });
/// assert!(reshape(&mut state, &large, &pivot));
/// ```
pub fn reshape(
    state: &mut Option<PrimitiveState>,
    params: &ShapeParameters,
    pivot: &PivotSpec,
) -> bool {
    let fingerprint = params.fingerprint();

    if let Some(current) = state.as_mut() {
        if current.kind == params.kind() && current.fingerprint == fingerprint {
            match primitives::reshape(params, &current.cache, &mut current.buffers) {
                ReshapeOutcome::Applied => {
                    finish(&mut current.buffers, pivot);
                    debug!("Reshaped {} in place", current.kind);
                    return true;
                }
                ReshapeOutcome::NeedsRebuild => {
                    debug!("Cached {} topology is stale, regenerating", current.kind);
                }
            }
        } else {
            debug!(
                "Regenerating {}: fingerprint {:?} -> {:?}",
                params.kind(),
                current.fingerprint,
                fingerprint
            );
        }
    } else {
        debug!("No cached state for {}, generating", params.kind());
    }

    *state = Some(generate(params, pivot));
    false
}

// =============================================================================
// PRIMITIVE
// =============================================================================

/// A scene primitive: its parameters, its pivot and its cached state.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    params: ShapeParameters,
    pivot: PivotSpec,
    state: Option<PrimitiveState>,
}

impl Primitive {
    /// Creates a primitive with no generated state yet.
    pub fn new(params: ShapeParameters, pivot: PivotSpec) -> Self {
        Self {
            params,
            pivot,
            state: None,
        }
    }

    /// Current parameters.
    pub fn parameters(&self) -> &ShapeParameters {
        &self.params
    }

    /// Current pivot.
    pub fn pivot(&self) -> &PivotSpec {
        &self.pivot
    }

    /// Cached state, if any generate has run.
    pub fn state(&self) -> Option<&PrimitiveState> {
        self.state.as_ref()
    }

    /// Replaces the parameters. A different shape kind drops the cached state.
    pub fn set_parameters(&mut self, params: ShapeParameters) {
        if params.kind() != self.params.kind() {
            self.state = None;
        }
        self.params = params;
    }

    /// Replaces the pivot; takes effect on the next refresh.
    pub fn set_pivot(&mut self, pivot: PivotSpec) {
        self.pivot = pivot;
    }

    /// Unconditionally regenerates the buffers.
    pub fn regenerate(&mut self) -> &MeshBuffers {
        self.state
            .insert(generate(&self.params, &self.pivot))
            .buffers()
    }

    /// Brings the buffers up to date; see [`reshape`] for the return value.
    pub fn refresh(&mut self) -> bool {
        reshape(&mut self.state, &self.params, &self.pivot)
    }

    /// Refreshes and hands the finished buffers to `sink`.
    pub fn upload(&mut self, sink: &mut impl MeshSink) -> bool {
        let reshaped = self.refresh();
        if let Some(state) = &self.state {
            sink.upload(state.buffers());
        }
        reshaped
    }
}
