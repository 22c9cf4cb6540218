//! The random-number contract the vertex models sample through.
//!
//! Models never hold an engine themselves: every sampling call takes an
//! explicit `&mut S: RandomSource`, so the driver can own one seeded engine
//! for the whole job and results are reproducible from the seed.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

// ---------------------------------------------------------------------------
// RandomSource
// ---------------------------------------------------------------------------

/// Source of the two draws the vertex models need.
pub trait RandomSource {
    /// A uniform draw in `[lo, hi)`. Returns `lo` when `lo == hi`.
    fn draw_uniform(&mut self, lo: f64, hi: f64) -> f64;

    /// A draw from `N(0, 1)`.
    fn draw_standard_normal(&mut self) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn draw_uniform(&mut self, lo: f64, hi: f64) -> f64 {
        (**self).draw_uniform(lo, hi)
    }

    fn draw_standard_normal(&mut self) -> f64 {
        (**self).draw_standard_normal()
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn draw_uniform(&mut self, lo: f64, hi: f64) -> f64 {
        (**self).draw_uniform(lo, hi)
    }

    fn draw_standard_normal(&mut self) -> f64 {
        (**self).draw_standard_normal()
    }
}

// ---------------------------------------------------------------------------
// RngSource
// ---------------------------------------------------------------------------

/// [`RandomSource`] backed by any `rand` engine.
///
/// The uniform draw is `lo + (hi - lo) * u` with `u` in `[0, 1)`, so a
/// zero-width interval is valid and collapses to `lo`.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn draw_uniform(&mut self, lo: f64, hi: f64) -> f64 {
        let u: f64 = self.rng.r#gen();
        lo + (hi - lo) * u
    }

    fn draw_standard_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.rng)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_source() -> RngSource<ChaCha8Rng> {
        RngSource::new(ChaCha8Rng::seed_from_u64(42))
    }

    #[test]
    fn uniform_within_bounds() {
        let mut source = test_source();
        for _ in 0..1000 {
            let v = source.draw_uniform(-1.0, 1.0);
            assert!((-1.0..1.0).contains(&v), "sample {v} out of range");
        }
    }

    #[test]
    fn uniform_zero_width_returns_lo() {
        let mut source = test_source();
        for _ in 0..10 {
            assert!((source.draw_uniform(3.0, 3.0) - 3.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn standard_normal_has_unit_spread() {
        let mut source = test_source();
        let n = 20_000;
        let samples: Vec<f64> = (0..n).map(|_| source.draw_standard_normal()).collect();
        #[allow(clippy::cast_precision_loss)]
        let mean = samples.iter().sum::<f64>() / n as f64;
        #[allow(clippy::cast_precision_loss)]
        let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.05, "mean {mean}");
        assert!((var - 1.0).abs() < 0.05, "variance {var}");
    }

    #[test]
    fn same_seed_same_draws() {
        let a: Vec<f64> = {
            let mut s = test_source();
            (0..50).map(|_| s.draw_standard_normal()).collect()
        };
        let b: Vec<f64> = {
            let mut s = test_source();
            (0..50).map(|_| s.draw_standard_normal()).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn boxed_and_borrowed_sources_forward() {
        fn draw<S: RandomSource>(mut s: S) -> f64 {
            s.draw_uniform(5.0, 6.0)
        }

        let mut boxed: Box<dyn RandomSource> = Box::new(test_source());
        let v = boxed.draw_uniform(0.0, 1.0);
        assert!((0.0..1.0).contains(&v));

        let mut source = test_source();
        let v = draw(&mut source);
        assert!((5.0..6.0).contains(&v));
    }
}
