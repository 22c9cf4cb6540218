// vtxsmear-driver: Per-event vertex application and smearing statistics.

//! Per-event application of a sampled interaction vertex.
//!
//! The [`VertexApplicationDriver`](driver::VertexApplicationDriver) resolves
//! its vertex model from a [`ModelRegistry`](vtxsmear_models::registry::ModelRegistry)
//! at construction, then for every event clones the first upstream record,
//! shifts all of its vertices by one sampled displacement and stores the
//! result under `VtxSmeared`.
//!
//! # Quick Start
//!
//! ```
//! use vtxsmear_core::prelude::*;
//! use vtxsmear_driver::prelude::*;
//! use vtxsmear_models::prelude::*;
//!
//! let config = SmearingConfig::for_model("gaussian", presets::gauss_smearing());
//! let registry = ModelRegistry::with_defaults();
//! let mut driver =
//!     VertexApplicationDriver::from_seeds(&config, &registry, &SeedHierarchy::new(7)).unwrap();
//!
//! let mut record = GenEvent::new(0);
//! record.add_vertex(FourVector::default());
//! let mut event = Event::new(0);
//! event.put("generator", record);
//!
//! driver.produce(&mut event).unwrap();
//! assert!(event.get(SMEARED_LABEL).is_some());
//! ```

pub mod driver;
pub mod stats;

/// Crate version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::driver::{CoordinateMapping, VertexApplicationDriver};
    pub use crate::stats::SmearingStats;
}
