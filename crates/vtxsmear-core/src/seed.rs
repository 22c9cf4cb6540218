//! Deterministic seed derivation for reproducible smearing jobs.
//!
//! [`SeedHierarchy`] derives one seed per module label from a single run
//! seed:
//!
//! ```text
//! Run seed
//! ├── Module seed ("VtxSmeared")
//! └── Module seed ("generator")
//! ```
//!
//! Each module owns one engine seeded once at startup and draws from it
//! event after event, so a job is reproducible from the run seed and the
//! event order.

use std::hash::{DefaultHasher, Hash, Hasher};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::random::RngSource;

/// Derive a child seed from a parent seed and a string key.
///
/// Uses `DefaultHasher` (SipHash-1-3) for fast, deterministic mixing.
///
/// # Example
///
/// ```
/// use vtxsmear_core::seed::derive_seed;
///
/// let child = derive_seed(42, "VtxSmeared");
/// assert_ne!(child, 42);
/// assert_eq!(child, derive_seed(42, "VtxSmeared"));
/// ```
#[must_use]
pub fn derive_seed(parent: u64, key: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    parent.hash(&mut hasher);
    key.hash(&mut hasher);
    hasher.finish()
}

/// Hierarchical seed manager for a smearing job.
///
/// # Example
///
/// ```
/// use vtxsmear_core::random::RandomSource;
/// use vtxsmear_core::seed::SeedHierarchy;
///
/// let seeds = SeedHierarchy::new(42);
/// let mut source = seeds.module_source("VtxSmeared");
/// let _ = source.draw_standard_normal();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedHierarchy {
    root: u64,
}

impl SeedHierarchy {
    #[must_use]
    pub const fn new(root: u64) -> Self {
        Self { root }
    }

    /// The run-level seed.
    #[must_use]
    pub const fn root(&self) -> u64 {
        self.root
    }

    /// Seed owned by the module with the given label.
    #[must_use]
    pub fn module_seed(&self, label: &str) -> u64 {
        derive_seed(self.root, label)
    }

    /// `ChaCha8Rng` seeded from the module seed.
    #[must_use]
    pub fn module_rng(&self, label: &str) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.module_seed(label))
    }

    /// Module engine wrapped as a [`RandomSource`](crate::random::RandomSource).
    #[must_use]
    pub fn module_source(&self, label: &str) -> RngSource<ChaCha8Rng> {
        RngSource::new(self.module_rng(label))
    }
}

impl Default for SeedHierarchy {
    fn default() -> Self {
        Self::new(0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
