// vtxsmear-models: Gaussian, beam-profile and flat vertex models, registry and presets.

//! Interaction-region vertex models.
//!
//! Each model turns draws from a [`RandomSource`](vtxsmear_core::random::RandomSource)
//! into one [`DisplacementVector`](vtxsmear_core::types::DisplacementVector)
//! per call. Sampling always takes the source explicitly, so the same seed
//! reproduces the same vertices.
//!
//! # Architecture
//!
//! - [`VertexModel`](model::VertexModel) is an enum over the Gaussian,
//!   beam-profile and flat models. All dispatch is static via `match`.
//! - [`ModelRegistry`](registry::ModelRegistry) maps a configured name to a
//!   constructor.
//! - [`presets`] holds the standard parameter sets.
//!
//! # Quick Start
//!
//! ```
//! use vtxsmear_core::prelude::*;
//! use vtxsmear_models::prelude::*;
//!
//! let registry = ModelRegistry::with_defaults();
//! let model = registry.create("gaussian", &presets::gauss_smearing()).unwrap();
//! let mut source = SeedHierarchy::new(42).module_source(SMEARED_LABEL);
//! let shift = model.new_vertex(&mut source);
//! assert!(shift.z.is_finite());
//! ```

pub mod beam_profile;
pub mod flat;
pub mod gaussian;
pub mod model;
pub mod presets;
pub mod registry;

/// Crate version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::beam_profile::{BeamProfileVertexModel, TransverseProfile, theta_from_eta};
    pub use crate::flat::FlatVertexModel;
    pub use crate::gaussian::GaussianVertexModel;
    pub use crate::model::VertexModel;
    pub use crate::presets;
    pub use crate::registry::{ModelConstructor, ModelRegistry};
}
