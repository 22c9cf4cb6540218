use std::fmt;

use thiserror::Error;

use crate::types::Axis;

/// Top-level error type for vertex smearing.
#[derive(Debug, Error)]
pub enum SmearError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logic error: {0}")]
    Logic(#[from] LogicError),

    #[error("Invalid reference: {0}")]
    InvalidReference(#[from] ReferenceError),
}

impl SmearError {
    /// Whether this error aborts pipeline startup rather than a single event.
    pub const fn is_startup(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

/// Configuration errors. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Illegal resolution in {axis} ({value} is negative)")]
    NegativeSigma { axis: Axis, value: f64 },

    #[error("Illegal range in {axis}: min {min} > max {max}")]
    InvertedRange { axis: Axis, min: f64, max: f64 },

    #[error("Unable to find the vertex model requested: {0}")]
    UnknownModel(String),

    #[error("Vertex model already registered: {0}")]
    DuplicateModel(String),

    #[error("Invalid module label {got:?}; the label of this module must be {expected:?}")]
    IdentityMismatch { expected: String, got: String },

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Inconsistent pipeline state detected while processing an event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogicError {
    #[error("{label} record already exists in this event")]
    AlreadyApplied { label: String },
}

/// Upstream record references that cannot be followed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("invalid reference to event record {index} (produced by {label})")]
    InvalidRecord { index: usize, label: String },

    #[error("no upstream event record in this event")]
    NoUpstreamRecord,
}

/// A recoverable configuration problem: the offending value was replaced
/// and processing continues.
///
/// Implements [`Copy`] so models can hand out their warning log cheaply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationWarning {
    pub axis: Axis,
    pub rejected: f64,
    pub replacement: f64,
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Illegal resolution in {} {} - set to default value {}",
            self.axis, self.rejected, self.replacement
        )
    }
}
