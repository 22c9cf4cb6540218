//! Beam-profile smearing along an arbitrary beam axis.
//!
//! The beam axis is given by the pseudorapidity `eta` and azimuth `phi` of
//! the configured ranges' midpoints, with `theta = 2 * atan(exp(-eta))`.
//! A transverse offset `(aX, aY)` is drawn from the selected
//! [`TransverseProfile`], then rotated into the lab frame and combined with
//! the longitudinal beam position `meanZ`:
//!
//! ```text
//! x = -aX cos(theta) cos(phi) + aY sin(phi) + meanZ sin(theta) cos(phi)
//! y = -aX cos(theta) sin(phi) - aY cos(phi) + meanZ sin(theta) sin(phi)
//! z =  aX sin(theta)                        + meanZ cos(theta)
//! ```
//!
//! Validation is lenient: a negative transverse spread is replaced by `0`
//! and a [`ValidationWarning`] is recorded. Construction never fails on a
//! spread.

use std::f64::consts::PI;

use tracing::{debug, info, warn};
use vtxsmear_core::config::ModelParameters;
use vtxsmear_core::error::{ConfigError, ValidationWarning};
use vtxsmear_core::random::RandomSource;
use vtxsmear_core::types::{Axis, DisplacementVector};
use vtxsmear_core::units::{DEG, from_cm};

const DEFAULT_MIN_ETA: f64 = -5.5;
const DEFAULT_MAX_ETA: f64 = 5.5;
const DEFAULT_MIN_PHI: f64 = -PI;
const DEFAULT_MAX_PHI: f64 = PI;

/// Polar angle of the direction with pseudorapidity `eta`.
pub fn theta_from_eta(eta: f64) -> f64 {
    2.0 * (-eta).exp().atan()
}

// ---------------------------------------------------------------------------
// TransverseProfile
// ---------------------------------------------------------------------------

/// Distribution of the transverse offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransverseProfile {
    /// `sigma * N(0, 1) + mean`.
    #[default]
    Gaussian,
    /// `U(-sigma / 2, sigma / 2) + mean`: `sigma` is the full width of the
    /// interval, not a standard deviation.
    Flat,
}

impl TransverseProfile {
    pub const fn from_gaussian_flag(gaussian: bool) -> Self {
        if gaussian { Self::Gaussian } else { Self::Flat }
    }

    pub const fn is_gaussian(self) -> bool {
        matches!(self, Self::Gaussian)
    }

    /// Draw one coordinate with spread `sigma` around `mean`.
    pub fn sample<S: RandomSource + ?Sized>(self, sigma: f64, mean: f64, source: &mut S) -> f64 {
        match self {
            Self::Gaussian => sigma * source.draw_standard_normal() + mean,
            Self::Flat => source.draw_uniform(-0.5 * sigma, 0.5 * sigma) + mean,
        }
    }
}

// ---------------------------------------------------------------------------
// BeamProfileVertexModel
// ---------------------------------------------------------------------------

/// Beam-profile interaction-region model. Lengths in mm, angles in rad.
#[derive(Debug, Clone, PartialEq)]
pub struct BeamProfileVertexModel {
    mean_x: f64,
    mean_y: f64,
    mean_z: f64,
    sigma_x: f64,
    sigma_y: f64,
    eta: f64,
    phi: f64,
    profile: TransverseProfile,
    warnings: Vec<ValidationWarning>,
}

impl Default for BeamProfileVertexModel {
    fn default() -> Self {
        Self {
            mean_x: 0.0,
            mean_y: 0.0,
            mean_z: 0.0,
            sigma_x: 0.0,
            sigma_y: 0.0,
            eta: 0.5 * (DEFAULT_MIN_ETA + DEFAULT_MAX_ETA),
            phi: 0.5 * (DEFAULT_MIN_PHI + DEFAULT_MAX_PHI),
            profile: TransverseProfile::Gaussian,
            warnings: Vec::new(),
        }
    }
}

impl BeamProfileVertexModel {
    /// A Gaussian-profile model centred at the origin with zero spread
    /// along `eta = 0`, `phi = 0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a parameter set (lengths in cm). Every parameter is
    /// optional.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if an eta or phi bound is not
    /// finite. Negative spreads are clamped, not rejected.
    pub fn from_parameters(p: &ModelParameters) -> Result<Self, ConfigError> {
        let min_eta = finite(p.min_eta.unwrap_or(DEFAULT_MIN_ETA), "min_eta")?;
        let max_eta = finite(p.max_eta.unwrap_or(DEFAULT_MAX_ETA), "max_eta")?;
        let min_phi = finite(p.min_phi.unwrap_or(DEFAULT_MIN_PHI), "min_phi")?;
        let max_phi = finite(p.max_phi.unwrap_or(DEFAULT_MAX_PHI), "max_phi")?;

        let mut model = Self::new();
        model.set_mean_x(from_cm(p.beam_mean_x.unwrap_or(0.0)));
        model.set_mean_y(from_cm(p.beam_mean_y.unwrap_or(0.0)));
        model.set_beam_position(from_cm(p.beam_position.unwrap_or(0.0)));
        model.set_sigma_x(from_cm(p.beam_sigma_x.unwrap_or(0.0)));
        model.set_sigma_y(from_cm(p.beam_sigma_y.unwrap_or(0.0)));
        model.set_eta_range(min_eta, max_eta);
        model.set_phi_range(min_phi, max_phi);
        model.set_gaussian(p.gaussian_profile.unwrap_or(true));

        info!(
            eta = model.eta,
            theta_deg = model.theta() / DEG,
            phi_deg = model.phi / DEG,
            mean_x = model.mean_x,
            mean_y = model.mean_y,
            mean_z = model.mean_z,
            sigma_x = model.sigma_x,
            sigma_y = model.sigma_y,
            gaussian = model.profile.is_gaussian(),
            "beam-profile vertex model configured"
        );
        Ok(model)
    }

    // -- Accessors --

    pub const fn mean_x(&self) -> f64 {
        self.mean_x
    }

    pub const fn mean_y(&self) -> f64 {
        self.mean_y
    }

    /// Longitudinal beam position.
    pub const fn mean_z(&self) -> f64 {
        self.mean_z
    }

    pub const fn sigma_x(&self) -> f64 {
        self.sigma_x
    }

    pub const fn sigma_y(&self) -> f64 {
        self.sigma_y
    }

    pub const fn eta(&self) -> f64 {
        self.eta
    }

    /// Polar angle of the beam axis, derived from [`eta`](Self::eta).
    pub fn theta(&self) -> f64 {
        theta_from_eta(self.eta)
    }

    pub const fn phi(&self) -> f64 {
        self.phi
    }

    pub const fn profile(&self) -> TransverseProfile {
        self.profile
    }

    /// Every spread that was clamped, oldest first.
    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    // -- Setters --

    pub fn set_mean_x(&mut self, m: f64) {
        self.mean_x = m;
    }

    pub fn set_mean_y(&mut self, m: f64) {
        self.mean_y = m;
    }

    pub fn set_beam_position(&mut self, z: f64) {
        self.mean_z = z;
    }

    /// Set the x spread. A negative value stores `0` and returns the
    /// recorded warning.
    pub fn set_sigma_x(&mut self, s: f64) -> Option<ValidationWarning> {
        let (value, warning) = self.clamp_sigma(Axis::X, s);
        self.sigma_x = value;
        warning
    }

    /// Set the y spread. A negative value stores `0` and returns the
    /// recorded warning.
    pub fn set_sigma_y(&mut self, s: f64) -> Option<ValidationWarning> {
        let (value, warning) = self.clamp_sigma(Axis::Y, s);
        self.sigma_y = value;
        warning
    }

    /// Per-axis form of the sigma setters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for [`Axis::Z`]: the
    /// longitudinal coordinate is the fixed beam position.
    pub fn set_sigma(
        &mut self,
        axis: Axis,
        s: f64,
    ) -> Result<Option<ValidationWarning>, ConfigError> {
        match axis {
            Axis::X => Ok(self.set_sigma_x(s)),
            Axis::Y => Ok(self.set_sigma_y(s)),
            Axis::Z => Err(ConfigError::InvalidValue {
                field: "sigma_z".into(),
                message: "beam-profile model has no longitudinal spread".into(),
            }),
        }
    }

    pub fn set_eta(&mut self, eta: f64) {
        self.eta = eta;
    }

    /// Beam axis at the midpoint of `[min, max]` in eta.
    pub fn set_eta_range(&mut self, min: f64, max: f64) {
        self.set_eta(0.5 * (min + max));
    }

    pub fn set_phi(&mut self, phi: f64) {
        self.phi = phi;
    }

    /// Beam axis at the midpoint of `[min, max]` in phi.
    pub fn set_phi_range(&mut self, min: f64, max: f64) {
        self.set_phi(0.5 * (min + max));
    }

    /// Install a new transverse profile in place of the current one.
    pub fn set_profile(&mut self, profile: TransverseProfile) {
        self.profile = profile;
    }

    pub fn set_gaussian(&mut self, gaussian: bool) {
        self.set_profile(TransverseProfile::from_gaussian_flag(gaussian));
    }

    // -- Sampling --

    /// Draw the transverse offset `(aX, aY)`, x first.
    pub fn sample_transverse<S: RandomSource + ?Sized>(&self, source: &mut S) -> (f64, f64) {
        let a_x = self.profile.sample(self.sigma_x, self.mean_x, source);
        let a_y = self.profile.sample(self.sigma_y, self.mean_y, source);
        (a_x, a_y)
    }

    /// Rotate a transverse offset into the lab frame of the beam axis and
    /// add the beam position along that axis.
    pub fn orient(&self, a_x: f64, a_y: f64) -> DisplacementVector {
        let (sin_t, cos_t) = self.theta().sin_cos();
        let (sin_p, cos_p) = self.phi.sin_cos();
        let z0 = self.mean_z;
        DisplacementVector::new(
            -a_x * cos_t * cos_p + a_y * sin_p + z0 * sin_t * cos_p,
            -a_x * cos_t * sin_p - a_y * cos_p + z0 * sin_t * sin_p,
            a_x * sin_t + z0 * cos_t,
        )
    }

    /// Draw one displacement.
    pub fn new_vertex<S: RandomSource + ?Sized>(&self, source: &mut S) -> DisplacementVector {
        let (a_x, a_y) = self.sample_transverse(source);
        let vertex = self.orient(a_x, a_y);
        debug!(%vertex, "beam-profile vertex created");
        vertex
    }

    fn clamp_sigma(&mut self, axis: Axis, s: f64) -> (f64, Option<ValidationWarning>) {
        if s >= 0.0 {
            return (s.abs(), None);
        }
        let warning = ValidationWarning {
            axis,
            rejected: s,
            replacement: 0.0,
        };
        warn!("beam-profile vertex model: {warning}");
        self.warnings.push(warning);
        (0.0, Some(warning))
    }
}

fn finite(value: f64, field: &str) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::InvalidValue {
            field: field.into(),
            message: format!("must be finite, got {value}"),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
