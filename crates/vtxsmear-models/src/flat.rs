//! Box-shaped smearing: each coordinate uniform in `[min, max)`.

use tracing::debug;
use vtxsmear_core::config::{ModelParameters, require};
use vtxsmear_core::error::ConfigError;
use vtxsmear_core::random::RandomSource;
use vtxsmear_core::types::{Axis, DisplacementVector};
use vtxsmear_core::units::from_cm;

/// Flat interaction-region model. Lengths in mm.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatVertexModel {
    min: DisplacementVector,
    max: DisplacementVector,
}

impl FlatVertexModel {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvertedRange`] for the first axis with
    /// `min > max`. A zero-width axis is allowed and always yields `min`.
    pub fn new(min: DisplacementVector, max: DisplacementVector) -> Result<Self, ConfigError> {
        for axis in Axis::ALL {
            check_range(axis, min.get(axis), max.get(axis))?;
        }
        Ok(Self { min, max })
    }

    /// Build from a parameter set (lengths in cm). All six bounds are
    /// required.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] for an absent bound and
    /// [`ConfigError::InvertedRange`] for `min > max`.
    pub fn from_parameters(p: &ModelParameters) -> Result<Self, ConfigError> {
        let min = DisplacementVector::new(
            from_cm(require(p.min_x, "min_x")?),
            from_cm(require(p.min_y, "min_y")?),
            from_cm(require(p.min_z, "min_z")?),
        );
        let max = DisplacementVector::new(
            from_cm(require(p.max_x, "max_x")?),
            from_cm(require(p.max_y, "max_y")?),
            from_cm(require(p.max_z, "max_z")?),
        );
        Self::new(min, max)
    }

    pub const fn min(&self) -> DisplacementVector {
        self.min
    }

    pub const fn max(&self) -> DisplacementVector {
        self.max
    }

    /// Re-centre `axis` to a full width of `s` around its current centre.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NegativeSigma`] if `s < 0`.
    pub fn set_sigma(&mut self, axis: Axis, s: f64) -> Result<(), ConfigError> {
        if s.is_nan() || s < 0.0 {
            return Err(ConfigError::NegativeSigma { axis, value: s });
        }
        let centre = 0.5 * (self.min.get(axis) + self.max.get(axis));
        let (lo, hi) = (centre - 0.5 * s, centre + 0.5 * s);
        match axis {
            Axis::X => (self.min.x, self.max.x) = (lo, hi),
            Axis::Y => (self.min.y, self.max.y) = (lo, hi),
            Axis::Z => (self.min.z, self.max.z) = (lo, hi),
        }
        Ok(())
    }

    /// Draw one displacement, x then y then z.
    pub fn new_vertex<S: RandomSource + ?Sized>(&self, source: &mut S) -> DisplacementVector {
        let x = source.draw_uniform(self.min.x, self.max.x);
        let y = source.draw_uniform(self.min.y, self.max.y);
        let z = source.draw_uniform(self.min.z, self.max.z);
        let vertex = DisplacementVector::new(x, y, z);
        debug!(%vertex, "flat vertex created");
        vertex
    }
}

fn check_range(axis: Axis, min: f64, max: f64) -> Result<(), ConfigError> {
    if min.is_nan() || max.is_nan() || min > max {
        return Err(ConfigError::InvertedRange { axis, min, max });
    }
    Ok(())
}
