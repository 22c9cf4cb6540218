//! Independent per-axis Gaussian smearing.
//!
//! Each coordinate is drawn as `sigma * N(0, 1) + mean`, in x, y, z order.
//! Validation is strict: a negative spread is a [`ConfigError`], both at
//! construction and in the setters. Nothing is clamped.

use tracing::debug;
use vtxsmear_core::config::{ModelParameters, require};
use vtxsmear_core::error::ConfigError;
use vtxsmear_core::random::RandomSource;
use vtxsmear_core::types::{Axis, DisplacementVector, FourVector};
use vtxsmear_core::units::from_cm;

/// Gaussian interaction-region model. Lengths in mm.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianVertexModel {
    mean: DisplacementVector,
    sigma: DisplacementVector,
}

impl GaussianVertexModel {
    /// Create a model with the given per-axis means and spreads.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NegativeSigma`] for the first axis whose
    /// spread is negative.
    pub fn new(mean: DisplacementVector, sigma: DisplacementVector) -> Result<Self, ConfigError> {
        for axis in Axis::ALL {
            check_sigma(axis, sigma.get(axis))?;
        }
        Ok(Self { mean, sigma })
    }

    /// Build from a parameter set (lengths in cm). All six values are
    /// required.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] for an absent parameter and
    /// [`ConfigError::NegativeSigma`] for a negative spread.
    pub fn from_parameters(p: &ModelParameters) -> Result<Self, ConfigError> {
        let mean = DisplacementVector::new(
            from_cm(require(p.mean_x, "mean_x")?),
            from_cm(require(p.mean_y, "mean_y")?),
            from_cm(require(p.mean_z, "mean_z")?),
        );
        let sigma = DisplacementVector::new(
            from_cm(require(p.sigma_x, "sigma_x")?),
            from_cm(require(p.sigma_y, "sigma_y")?),
            from_cm(require(p.sigma_z, "sigma_z")?),
        );
        Self::new(mean, sigma)
    }

    pub const fn mean(&self) -> DisplacementVector {
        self.mean
    }

    pub const fn sigma(&self) -> DisplacementVector {
        self.sigma
    }

    /// Set the spread along `axis`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NegativeSigma`] if `s < 0`; the stored value
    /// is left unchanged.
    pub fn set_sigma(&mut self, axis: Axis, s: f64) -> Result<(), ConfigError> {
        check_sigma(axis, s)?;
        match axis {
            Axis::X => self.sigma.x = s,
            Axis::Y => self.sigma.y = s,
            Axis::Z => self.sigma.z = s,
        }
        Ok(())
    }

    /// # Errors
    ///
    /// See [`set_sigma`](Self::set_sigma).
    pub fn set_sigma_x(&mut self, s: f64) -> Result<(), ConfigError> {
        self.set_sigma(Axis::X, s)
    }

    /// # Errors
    ///
    /// See [`set_sigma`](Self::set_sigma).
    pub fn set_sigma_y(&mut self, s: f64) -> Result<(), ConfigError> {
        self.set_sigma(Axis::Y, s)
    }

    /// # Errors
    ///
    /// See [`set_sigma`](Self::set_sigma).
    pub fn set_sigma_z(&mut self, s: f64) -> Result<(), ConfigError> {
        self.set_sigma(Axis::Z, s)
    }

    /// Draw one displacement. Takes exactly three normal draws.
    pub fn new_vertex<S: RandomSource + ?Sized>(&self, source: &mut S) -> DisplacementVector {
        let x = self.sigma.x * source.draw_standard_normal() + self.mean.x;
        let y = self.sigma.y * source.draw_standard_normal() + self.mean.y;
        let z = self.sigma.z * source.draw_standard_normal() + self.mean.z;
        let vertex = DisplacementVector::new(x, y, z);
        debug!(%vertex, "gaussian vertex created");
        vertex
    }

    /// Draw one displacement as a space-time point with `t = 0`.
    pub fn new_four_vertex<S: RandomSource + ?Sized>(&self, source: &mut S) -> FourVector {
        self.new_vertex(source).with_time(0.0)
    }
}

fn check_sigma(axis: Axis, s: f64) -> Result<(), ConfigError> {
    if s.is_nan() || s < 0.0 {
        return Err(ConfigError::NegativeSigma { axis, value: s });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use vtxsmear_test_utils::{ScriptedSource, seeded_source};

    fn model(mean: [f64; 3], sigma: [f64; 3]) -> Result<GaussianVertexModel, ConfigError> {
        GaussianVertexModel::new(
            DisplacementVector::new(mean[0], mean[1], mean[2]),
            DisplacementVector::new(sigma[0], sigma[1], sigma[2]),
        )
    }

    // -- Constructor validation --

    #[test]
    fn accepts_non_negative_sigmas() {
        for s in [0.0, 1e-9, 0.015, 53.0] {
            assert!(model([0.0; 3], [s, s, s]).is_ok(), "sigma {s}");
        }
    }

    #[test]
    fn rejects_negative_sigma_on_any_axis() {
        for (i, axis) in Axis::ALL.into_iter().enumerate() {
            let mut sigma = [1.0; 3];
            sigma[i] = -0.1;
            let err = model([0.0; 3], sigma).unwrap_err();
            assert!(
                matches!(err, ConfigError::NegativeSigma { axis: a, .. } if a == axis),
                "got {err}"
            );
        }
    }

    #[test]
    fn rejects_nan_sigma() {
        assert!(model([0.0; 3], [f64::NAN, 1.0, 1.0]).is_err());
    }

    #[test]
    fn setter_rejects_negative_and_keeps_value() {
        let mut m = model([0.0; 3], [1.0, 2.0, 3.0]).unwrap();
        assert!(m.set_sigma_y(-1.0).is_err());
        assert!((m.sigma().y - 2.0).abs() < f64::EPSILON);
        m.set_sigma_z(0.5).unwrap();
        assert!((m.sigma().z - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn from_parameters_converts_cm() {
        let p = ModelParameters {
            mean_x: Some(0.1),
            mean_y: Some(0.0),
            mean_z: Some(0.0),
            sigma_x: Some(0.0015),
            sigma_y: Some(0.0015),
            sigma_z: Some(5.3),
            ..ModelParameters::default()
        };
        let m = GaussianVertexModel::from_parameters(&p).unwrap();
        assert!((m.mean().x - 1.0).abs() < 1e-12);
        assert!((m.sigma().z - 53.0).abs() < 1e-12);
    }

    #[test]
    fn from_parameters_requires_every_field() {
        let p = ModelParameters {
            mean_x: Some(0.0),
            mean_y: Some(0.0),
            mean_z: Some(0.0),
            sigma_x: Some(1.0),
            sigma_y: Some(1.0),
            ..ModelParameters::default()
        };
        let err = GaussianVertexModel::from_parameters(&p).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(ref f) if f == "sigma_z"));
    }

    // -- Sampling --

    #[test]
    fn zero_sigma_returns_mean_exactly() {
        let m = model([1.0, 2.0, 3.0], [0.0; 3]).unwrap();
        let mut source = seeded_source(42);
        for _ in 0..20 {
            assert_eq!(m.new_vertex(&mut source), DisplacementVector::new(1.0, 2.0, 3.0));
        }
    }

    #[test]
    fn scales_and_shifts_each_draw_in_axis_order() {
        let m = model([1.0, 2.0, 3.0], [10.0, 20.0, 30.0]).unwrap();
        let mut source = ScriptedSource::normals([0.5, -1.0, 2.0]);
        let v = m.new_vertex(&mut source);
        assert_eq!(v, DisplacementVector::new(6.0, -18.0, 63.0));
        assert_eq!(source.normal_draws(), 3);
    }

    #[test]
    fn four_vertex_has_zero_time() {
        let m = model([1.0, 2.0, 3.0], [1.0; 3]).unwrap();
        let v = m.new_four_vertex(&mut seeded_source(7));
        assert!(v.t.abs() < f64::EPSILON);
    }

    #[test]
    fn same_seed_same_vertices() {
        let m = model([0.0; 3], [0.015, 0.015, 53.0]).unwrap();
        let a: Vec<_> = {
            let mut s = seeded_source(99);
            (0..10).map(|_| m.new_vertex(&mut s)).collect()
        };
        let b: Vec<_> = {
            let mut s = seeded_source(99);
            (0..10).map(|_| m.new_vertex(&mut s)).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn sample_spread_matches_sigma() {
        let m = model([0.0; 3], [1.0, 2.0, 0.0]).unwrap();
        let mut source = seeded_source(3);
        let n = 20_000;
        let ys: Vec<f64> = (0..n).map(|_| m.new_vertex(&mut source).y).collect();
        #[allow(clippy::cast_precision_loss)]
        let var = ys.iter().map(|y| y * y).sum::<f64>() / n as f64;
        assert!((var.sqrt() - 2.0).abs() < 0.1, "std {}", var.sqrt());
    }
}
