// vtxsmear-test-utils: Seeded RNGs, scripted random sources and event fixtures for tests.

//! Shared test fixtures and utilities for vtxsmear crates.
//!
//! Provides deterministic RNG setup, scripted [`RandomSource`] mocks that
//! force the draws a model sees, and builders for upstream event records.
//!
//! [`RandomSource`]: vtxsmear_core::random::RandomSource

pub mod events;
pub mod mocks;
pub mod rng;

// ---------------------------------------------------------------------------
// Re-exports for convenience
// ---------------------------------------------------------------------------

pub use events::{event_with_record, record_with_vertices, single_vertex_record};
pub use mocks::{ScriptedSource, UniformDraw};
pub use rng::{seeded_rng, seeded_source};
