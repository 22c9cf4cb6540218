use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The pipeline position the vertex smearing module must occupy.
pub const SMEARED_LABEL: &str = "VtxSmeared";

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_events() -> u32 {
    1
}
fn default_module_label() -> String {
    SMEARED_LABEL.into()
}
fn default_source_label() -> String {
    "generator".into()
}

// ---------------------------------------------------------------------------
// JobConfig
// ---------------------------------------------------------------------------

/// Run-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobConfig {
    /// Master random seed.
    #[serde(default)]
    pub seed: u64,

    /// Number of events to process (default: 1).
    #[serde(default = "default_events")]
    pub events: u32,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            events: default_events(),
        }
    }
}

// ---------------------------------------------------------------------------
// ModelParameters
// ---------------------------------------------------------------------------

/// Parameter set handed to a vertex-model constructor.
///
/// Every field is optional here; each model decides which ones are required
/// and which fall back to defaults. Lengths are in cm, angles in radians.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelParameters {
    // Gaussian
    pub mean_x: Option<f64>,
    pub mean_y: Option<f64>,
    pub mean_z: Option<f64>,
    pub sigma_x: Option<f64>,
    pub sigma_y: Option<f64>,
    pub sigma_z: Option<f64>,

    // Beam profile
    pub beam_mean_x: Option<f64>,
    pub beam_mean_y: Option<f64>,
    pub beam_position: Option<f64>,
    pub beam_sigma_x: Option<f64>,
    pub beam_sigma_y: Option<f64>,
    pub min_eta: Option<f64>,
    pub max_eta: Option<f64>,
    pub min_phi: Option<f64>,
    pub max_phi: Option<f64>,
    pub gaussian_profile: Option<bool>,

    // Flat
    pub min_x: Option<f64>,
    pub max_x: Option<f64>,
    pub min_y: Option<f64>,
    pub max_y: Option<f64>,
    pub min_z: Option<f64>,
    pub max_z: Option<f64>,
}

/// Return a required parameter or a [`ConfigError::MissingField`].
pub fn require(value: Option<f64>, field: &str) -> Result<f64, ConfigError> {
    value.ok_or_else(|| ConfigError::MissingField(field.into()))
}

// ---------------------------------------------------------------------------
// SmearingConfig
// ---------------------------------------------------------------------------

/// Settings of the vertex smearing module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmearingConfig {
    /// Declared label of the module. Must equal [`SMEARED_LABEL`].
    #[serde(default = "default_module_label")]
    pub module_label: String,

    /// Registered name of the vertex model (`gaussian`, `beam_profile`, `flat`).
    pub model_type: String,

    /// Label of the upstream module whose records the synthetic runner fills.
    #[serde(default = "default_source_label")]
    pub source_label: String,

    /// Use the vertex's own y coordinate when translating y.
    ///
    /// Off by default: the translated y is built from the vertex's x.
    #[serde(default)]
    pub correct_y_mapping: bool,

    #[serde(default)]
    pub parameters: ModelParameters,
}

impl SmearingConfig {
    /// Config for `model_type` with every other field at its default.
    pub fn for_model(model_type: impl Into<String>, parameters: ModelParameters) -> Self {
        Self {
            module_label: default_module_label(),
            model_type: model_type.into(),
            source_label: default_source_label(),
            correct_y_mapping: false,
            parameters,
        }
    }

    /// Validate configuration. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model_type.trim().is_empty() {
            return Err(ConfigError::MissingField("model_type".into()));
        }
        if self.source_label == self.module_label {
            return Err(ConfigError::InvalidValue {
                field: "source_label".into(),
                message: "must differ from module_label".into(),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Complete job configuration loaded from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub job: JobConfig,
    pub smearing: SmearingConfig,
}

impl Config {
    /// Validate configuration. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.job.events == 0 {
            return Err(ConfigError::InvalidValue {
                field: "events".into(),
                message: "must be > 0".into(),
            });
        }
        self.smearing.validate()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const GAUSS_TOML: &str = r#"
[job]
seed = 1234
events = 10

[smearing]
model_type = "gaussian"

[smearing.parameters]
mean_x = 0.0
mean_y = 0.0
mean_z = 0.0
sigma_x = 0.0015
sigma_y = 0.0015
sigma_z = 5.3
"#;

    #[test]
    fn job_config_default_values() {
        let cfg = JobConfig::default();
        assert_eq!(cfg.seed, 0);
        assert_eq!(cfg.events, 1);
    }

    #[test]
    fn parse_gaussian_job() {
        let cfg = Config::from_toml_str(GAUSS_TOML).unwrap();
        assert_eq!(cfg.job.seed, 1234);
        assert_eq!(cfg.job.events, 10);
        assert_eq!(cfg.smearing.module_label, SMEARED_LABEL);
        assert_eq!(cfg.smearing.source_label, "generator");
        assert!(!cfg.smearing.correct_y_mapping);
        assert_eq!(cfg.smearing.parameters.sigma_z, Some(5.3));
        assert!(cfg.smearing.parameters.beam_sigma_x.is_none());
    }

    #[test]
    fn job_table_is_optional() {
        let cfg = Config::from_toml_str("[smearing]\nmodel_type = \"beam_profile\"\n").unwrap();
        assert_eq!(cfg.job, JobConfig::default());
        assert_eq!(cfg.smearing.parameters, ModelParameters::default());
    }

    #[test]
    fn missing_model_type_is_parse_error() {
        let err = Config::from_toml_str("[smearing]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn unknown_parameter_is_rejected() {
        let toml = "[smearing]\nmodel_type = \"gaussian\"\n[smearing.parameters]\nsigma_w = 1.0\n";
        let err = Config::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn validate_rejects_zero_events() {
        let mut cfg = Config::from_toml_str(GAUSS_TOML).unwrap();
        cfg.job.events = 0;
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "events"));
    }

    #[test]
    fn validate_rejects_blank_model_type() {
        let cfg = SmearingConfig::for_model("  ", ModelParameters::default());
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(_)));
    }

    #[test]
    fn validate_rejects_self_sourcing() {
        let mut cfg = SmearingConfig::for_model("gaussian", ModelParameters::default());
        cfg.source_label = SMEARED_LABEL.into();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn require_reports_field_name() {
        assert!((require(Some(2.0), "sigma_x").unwrap() - 2.0).abs() < f64::EPSILON);
        let err = require(None, "sigma_x").unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: sigma_x");
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let err = Config::from_file("/nonexistent/vtxsmear.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
