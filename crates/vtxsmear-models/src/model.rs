//! The vertex-model enum the driver is bound to.
//!
//! [`VertexModel`] dispatches statically via `match` over the concrete
//! models. The sigma setters keep each model's own validation policy:
//! strict for [`Gaussian`](VertexModel::Gaussian) and
//! [`Flat`](VertexModel::Flat), lenient for
//! [`BeamProfile`](VertexModel::BeamProfile).

use std::fmt;

use vtxsmear_core::error::{ConfigError, ValidationWarning};
use vtxsmear_core::random::RandomSource;
use vtxsmear_core::types::{Axis, DisplacementVector};

use crate::beam_profile::BeamProfileVertexModel;
use crate::flat::FlatVertexModel;
use crate::gaussian::GaussianVertexModel;

/// A configured interaction-region model.
#[derive(Debug, Clone, PartialEq)]
pub enum VertexModel {
    Gaussian(GaussianVertexModel),
    BeamProfile(BeamProfileVertexModel),
    Flat(FlatVertexModel),
}

impl VertexModel {
    /// Short name of the variant, as used in the registry.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Gaussian(_) => "gaussian",
            Self::BeamProfile(_) => "beam_profile",
            Self::Flat(_) => "flat",
        }
    }

    /// Draw one displacement.
    pub fn new_vertex<S: RandomSource + ?Sized>(&self, source: &mut S) -> DisplacementVector {
        match self {
            Self::Gaussian(m) => m.new_vertex(source),
            Self::BeamProfile(m) => m.new_vertex(source),
            Self::Flat(m) => m.new_vertex(source),
        }
    }

    /// Set the spread along `axis` under the variant's validation policy.
    ///
    /// Returns the warning recorded when a lenient model clamped the value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a strict model rejects the value, or
    /// when the model has no spread along `axis`.
    pub fn set_sigma(
        &mut self,
        axis: Axis,
        s: f64,
    ) -> Result<Option<ValidationWarning>, ConfigError> {
        match self {
            Self::Gaussian(m) => m.set_sigma(axis, s).map(|()| None),
            Self::BeamProfile(m) => m.set_sigma(axis, s),
            Self::Flat(m) => m.set_sigma(axis, s).map(|()| None),
        }
    }

    /// # Errors
    ///
    /// See [`set_sigma`](Self::set_sigma).
    pub fn set_sigma_x(&mut self, s: f64) -> Result<Option<ValidationWarning>, ConfigError> {
        self.set_sigma(Axis::X, s)
    }

    /// # Errors
    ///
    /// See [`set_sigma`](Self::set_sigma).
    pub fn set_sigma_y(&mut self, s: f64) -> Result<Option<ValidationWarning>, ConfigError> {
        self.set_sigma(Axis::Y, s)
    }

    /// # Errors
    ///
    /// See [`set_sigma`](Self::set_sigma).
    pub fn set_sigma_z(&mut self, s: f64) -> Result<Option<ValidationWarning>, ConfigError> {
        self.set_sigma(Axis::Z, s)
    }

    /// Warnings recorded while configuring the model.
    pub fn warnings(&self) -> &[ValidationWarning] {
        match self {
            Self::BeamProfile(m) => m.warnings(),
            Self::Gaussian(_) | Self::Flat(_) => &[],
        }
    }
}

impl From<GaussianVertexModel> for VertexModel {
    fn from(m: GaussianVertexModel) -> Self {
        Self::Gaussian(m)
    }
}

impl From<BeamProfileVertexModel> for VertexModel {
    fn from(m: BeamProfileVertexModel) -> Self {
        Self::BeamProfile(m)
    }
}

impl From<FlatVertexModel> for VertexModel {
    fn from(m: FlatVertexModel) -> Self {
        Self::Flat(m)
    }
}

impl fmt::Display for VertexModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gaussian(m) => write!(f, "gaussian(mean={}, sigma={})", m.mean(), m.sigma()),
            Self::BeamProfile(m) => write!(
                f,
                "beam_profile(eta={}, phi={}, mean=({}, {}, {}), sigma=({}, {}), {:?})",
                m.eta(),
                m.phi(),
                m.mean_x(),
                m.mean_y(),
                m.mean_z(),
                m.sigma_x(),
                m.sigma_y(),
                m.profile()
            ),
            Self::Flat(m) => write!(f, "flat(min={}, max={})", m.min(), m.max()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use vtxsmear_test_utils::seeded_source;

    fn gaussian() -> VertexModel {
        GaussianVertexModel::new(
            DisplacementVector::new(1.0, 2.0, 3.0),
            DisplacementVector::ZERO,
        )
        .unwrap()
        .into()
    }

    #[test]
    fn dispatches_new_vertex() {
        let m = gaussian();
        assert_eq!(
            m.new_vertex(&mut seeded_source(1)),
            DisplacementVector::new(1.0, 2.0, 3.0)
        );
        assert_eq!(m.kind(), "gaussian");
    }

    #[test]
    fn strict_policy_kept_for_gaussian() {
        let mut m = gaussian();
        assert!(matches!(
            m.set_sigma_x(-1.0),
            Err(ConfigError::NegativeSigma { axis: Axis::X, .. })
        ));
        assert!(m.warnings().is_empty());
    }

    #[test]
    fn lenient_policy_kept_for_beam_profile() {
        let mut m: VertexModel = BeamProfileVertexModel::new().into();
        let warning = m.set_sigma_y(-2.0).unwrap();
        assert!(warning.is_some());
        assert_eq!(m.warnings().len(), 1);
        assert!(m.set_sigma_z(1.0).is_err());
    }

    #[test]
    fn flat_set_sigma_is_strict() {
        let mut m: VertexModel = FlatVertexModel::new(
            DisplacementVector::ZERO,
            DisplacementVector::new(1.0, 1.0, 1.0),
        )
        .unwrap()
        .into();
        assert!(m.set_sigma_z(2.0).unwrap().is_none());
        assert!(m.set_sigma_z(-2.0).is_err());
    }

    #[test]
    fn display_names_the_variant() {
        assert!(gaussian().to_string().starts_with("gaussian("));
        let bp: VertexModel = BeamProfileVertexModel::new().into();
        assert!(bp.to_string().contains("Gaussian"));
    }
}
