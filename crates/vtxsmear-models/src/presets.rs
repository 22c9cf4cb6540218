//! Standard smearing parameter sets.
//!
//! Values are the nominal LHC interaction-region settings, in cm. Each preset
//! returns a [`ModelParameters`] ready for [`ModelRegistry::create`] or for a
//! `[smearing.parameters]` table.
//!
//! [`ModelRegistry::create`]: crate::registry::ModelRegistry::create

use std::f64::consts::PI;

use vtxsmear_core::config::ModelParameters;

/// Transverse spread of the luminous region, cm.
const TRANSVERSE_SIGMA_CM: f64 = 0.0015;
/// Longitudinal spread of the luminous region, cm.
const LONGITUDINAL_SIGMA_CM: f64 = 5.3;

/// Gaussian smearing: zero means, 15 µm transverse and 5.3 cm longitudinal.
pub fn gauss_smearing() -> ModelParameters {
    ModelParameters {
        mean_x: Some(0.0),
        mean_y: Some(0.0),
        mean_z: Some(0.0),
        sigma_x: Some(TRANSVERSE_SIGMA_CM),
        sigma_y: Some(TRANSVERSE_SIGMA_CM),
        sigma_z: Some(LONGITUDINAL_SIGMA_CM),
        ..ModelParameters::default()
    }
}

/// Flat smearing over the same box as [`gauss_smearing`]'s one-sigma region.
pub fn flat_smearing() -> ModelParameters {
    ModelParameters {
        min_x: Some(-TRANSVERSE_SIGMA_CM),
        max_x: Some(TRANSVERSE_SIGMA_CM),
        min_y: Some(-TRANSVERSE_SIGMA_CM),
        max_y: Some(TRANSVERSE_SIGMA_CM),
        min_z: Some(-LONGITUDINAL_SIGMA_CM),
        max_z: Some(LONGITUDINAL_SIGMA_CM),
        ..ModelParameters::default()
    }
}

/// Beam-profile defaults spelled out: a point-like beam at the origin,
/// eta in [-5.5, 5.5], phi in [-pi, pi], Gaussian transverse profile.
pub fn beam_profile_defaults() -> ModelParameters {
    ModelParameters {
        beam_mean_x: Some(0.0),
        beam_mean_y: Some(0.0),
        beam_position: Some(0.0),
        beam_sigma_x: Some(0.0),
        beam_sigma_y: Some(0.0),
        min_eta: Some(-5.5),
        max_eta: Some(5.5),
        min_phi: Some(-PI),
        max_phi: Some(PI),
        gaussian_profile: Some(true),
        ..ModelParameters::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beam_profile::BeamProfileVertexModel;
    use crate::flat::FlatVertexModel;
    use crate::gaussian::GaussianVertexModel;
    use vtxsmear_core::types::DisplacementVector;

    #[test]
    fn gauss_smearing_builds_in_mm() {
        let m = GaussianVertexModel::from_parameters(&gauss_smearing()).unwrap();
        assert_eq!(m.mean(), DisplacementVector::ZERO);
        assert!((m.sigma().x - 0.015).abs() < 1e-12);
        assert!((m.sigma().z - 53.0).abs() < 1e-12);
    }

    #[test]
    fn flat_smearing_is_symmetric() {
        let m = FlatVertexModel::from_parameters(&flat_smearing()).unwrap();
        assert!((m.min().z + m.max().z).abs() < 1e-12);
        assert!((m.max().y - 0.015).abs() < 1e-12);
    }

    #[test]
    fn beam_profile_defaults_match_implicit_defaults() {
        let explicit = BeamProfileVertexModel::from_parameters(&beam_profile_defaults()).unwrap();
        let implicit = BeamProfileVertexModel::from_parameters(&ModelParameters::default()).unwrap();
        assert_eq!(explicit, implicit);
    }

    #[test]
    fn presets_do_not_overlap() {
        assert!(gauss_smearing().min_x.is_none());
        assert!(flat_smearing().sigma_x.is_none());
        assert!(beam_profile_defaults().mean_x.is_none());
    }
}
