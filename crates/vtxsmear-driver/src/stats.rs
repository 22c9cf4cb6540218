//! Smearing statistics tracking.
//!
//! [`SmearingStats`] records cumulative statistics across processed events:
//! event and vertex counts and the running sum of applied displacements.

use serde::Serialize;
use vtxsmear_core::types::DisplacementVector;

// ---------------------------------------------------------------------------
// SmearingStats
// ---------------------------------------------------------------------------

/// Cumulative statistics of a driver.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SmearingStats {
    /// Events that received a displacement.
    pub events_processed: u64,
    /// Vertices translated across all events.
    pub vertices_shifted: u64,
    /// Events rejected with an error.
    pub events_failed: u64,
    /// Per-axis sum of applied displacements, mm.
    displacement_sum: [f64; 3],
    /// Per-axis sum of squared displacements, mm².
    displacement_sq_sum: [f64; 3],
}

impl SmearingStats {
    /// Create empty stats.
    pub const fn new() -> Self {
        Self {
            events_processed: 0,
            vertices_shifted: 0,
            events_failed: 0,
            displacement_sum: [0.0; 3],
            displacement_sq_sum: [0.0; 3],
        }
    }

    /// Record one successfully smeared event.
    pub fn record(&mut self, shift: DisplacementVector, vertices: usize) {
        self.events_processed += 1;
        self.vertices_shifted += vertices as u64;
        for (i, d) in shift.to_array().into_iter().enumerate() {
            self.displacement_sum[i] += d;
            self.displacement_sq_sum[i] += d * d;
        }
    }

    pub fn record_failure(&mut self) {
        self.events_failed += 1;
    }

    /// Mean applied displacement, `None` before the first event.
    pub fn mean_displacement(&self) -> Option<DisplacementVector> {
        if self.events_processed == 0 {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let n = self.events_processed as f64;
        let [x, y, z] = self.displacement_sum;
        Some(DisplacementVector::new(x / n, y / n, z / n))
    }

    /// Population standard deviation of the applied displacement per axis,
    /// `None` before the first event.
    pub fn displacement_spread(&self) -> Option<DisplacementVector> {
        let mean = self.mean_displacement()?;
        #[allow(clippy::cast_precision_loss)]
        let n = self.events_processed as f64;
        let spread = |i: usize, m: f64| (self.displacement_sq_sum[i] / n - m * m).max(0.0).sqrt();
        Some(DisplacementVector::new(
            spread(0, mean.x),
            spread(1, mean.y),
            spread(2, mean.z),
        ))
    }

    /// Reset all statistics.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
