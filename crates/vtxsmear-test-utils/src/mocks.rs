//! Scripted random sources for exact-value tests.
//!
//! [`ScriptedSource`] replays a fixed list of standard-normal values and
//! answers every uniform request at a chosen point of the interval, so a
//! test can predict a model's output exactly.

use std::collections::VecDeque;

use vtxsmear_core::random::RandomSource;

// ---------------------------------------------------------------------------
// UniformDraw
// ---------------------------------------------------------------------------

/// Where in `[lo, hi]` a scripted uniform draw lands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformDraw {
    /// Always `lo`.
    Low,
    /// Always `hi` (the closed upper bound).
    High,
    /// `lo + fraction * (hi - lo)`.
    Fraction(f64),
}

// ---------------------------------------------------------------------------
// ScriptedSource
// ---------------------------------------------------------------------------

/// A [`RandomSource`] with forced draws.
///
/// Normal draws pop from the script; once it is exhausted they return
/// `fallback_normal`. Every uniform request is recorded.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    normals: VecDeque<f64>,
    fallback_normal: f64,
    uniform: UniformDraw,
    uniform_requests: Vec<(f64, f64)>,
    normal_draws: usize,
}

impl ScriptedSource {
    /// Replay `normals` in order, then return `0.0`.
    pub fn normals(normals: impl IntoIterator<Item = f64>) -> Self {
        Self {
            normals: normals.into_iter().collect(),
            fallback_normal: 0.0,
            uniform: UniformDraw::Fraction(0.5),
            uniform_requests: Vec::new(),
            normal_draws: 0,
        }
    }

    /// Every normal draw returns `value`.
    pub fn constant_normal(value: f64) -> Self {
        Self {
            fallback_normal: value,
            ..Self::normals([])
        }
    }

    /// Every uniform draw lands at `draw`.
    pub fn uniform(draw: UniformDraw) -> Self {
        Self {
            uniform: draw,
            ..Self::normals([])
        }
    }

    /// `(lo, hi)` of every uniform request so far.
    pub fn uniform_requests(&self) -> &[(f64, f64)] {
        &self.uniform_requests
    }

    /// Number of normal draws taken so far.
    pub const fn normal_draws(&self) -> usize {
        self.normal_draws
    }
}

impl RandomSource for ScriptedSource {
    fn draw_uniform(&mut self, lo: f64, hi: f64) -> f64 {
        self.uniform_requests.push((lo, hi));
        match self.uniform {
            UniformDraw::Low => lo,
            UniformDraw::High => hi,
            UniformDraw::Fraction(f) => lo + f * (hi - lo),
        }
    }

    fn draw_standard_normal(&mut self) -> f64 {
        self.normal_draws += 1;
        self.normals.pop_front().unwrap_or(self.fallback_normal)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
