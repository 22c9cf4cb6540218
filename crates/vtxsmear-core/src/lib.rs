// vtxsmear-core: Types, errors, config, events, random sources and seeding for vertex smearing.

//! Shared building blocks for event-vertex smearing.
//!
//! `vtxsmear-core` holds what every other crate in the workspace needs: the
//! [`RandomSource`](random::RandomSource) contract the vertex models sample
//! through, geometric value types, the event-record container, errors, the
//! TOML job configuration, length units, and seed derivation.
//!
//! # Quick Start
//!
//! ```
//! use vtxsmear_core::prelude::*;
//!
//! let seeds = SeedHierarchy::new(42);
//! let mut source = seeds.module_source(SMEARED_LABEL);
//! let x = 0.15 * CM * source.draw_standard_normal();
//! assert!(x.is_finite());
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod random;
pub mod seed;
pub mod types;
pub mod units;

/// Crate version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::config::{Config, JobConfig, ModelParameters, SMEARED_LABEL, SmearingConfig};
    pub use crate::error::{ConfigError, LogicError, ReferenceError, SmearError, ValidationWarning};
    pub use crate::event::{Event, GenEvent, GenVertex, RecordHandle};
    pub use crate::random::{RandomSource, RngSource};
    pub use crate::seed::SeedHierarchy;
    pub use crate::types::{Axis, DisplacementVector, FourVector};
    pub use crate::units::{CM, DEG, MM};
}
