//! Name-to-constructor table for vertex models.
//!
//! The registry is built once at startup and handed to the driver, which
//! resolves its configured `model_type` through [`ModelRegistry::create`].

use std::collections::BTreeMap;
use std::fmt;

use vtxsmear_core::config::ModelParameters;
use vtxsmear_core::error::ConfigError;

use crate::beam_profile::BeamProfileVertexModel;
use crate::flat::FlatVertexModel;
use crate::gaussian::GaussianVertexModel;
use crate::model::VertexModel;

/// Builds a configured model from its parameter set.
pub type ModelConstructor = fn(&ModelParameters) -> Result<VertexModel, ConfigError>;

/// Registered vertex-model constructors, keyed by name.
#[derive(Clone, Default)]
pub struct ModelRegistry {
    constructors: BTreeMap<String, ModelConstructor>,
}

impl fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

impl ModelRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding `gaussian`, `beam_profile` and `flat`.
    pub fn with_defaults() -> Self {
        let mut constructors: BTreeMap<String, ModelConstructor> = BTreeMap::new();
        constructors.insert("gaussian".into(), |p| {
            GaussianVertexModel::from_parameters(p).map(Into::into)
        });
        constructors.insert("beam_profile".into(), |p| {
            BeamProfileVertexModel::from_parameters(p).map(Into::into)
        });
        constructors.insert("flat".into(), |p| {
            FlatVertexModel::from_parameters(p).map(Into::into)
        });
        Self { constructors }
    }

    /// Add a constructor under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateModel`] if `name` is taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        constructor: ModelConstructor,
    ) -> Result<(), ConfigError> {
        let name = name.into();
        if self.constructors.contains_key(&name) {
            return Err(ConfigError::DuplicateModel(name));
        }
        self.constructors.insert(name, constructor);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    /// Construct the model registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownModel`] for an unregistered name, or
    /// whatever the constructor reports for bad parameters.
    pub fn create(&self, name: &str, params: &ModelParameters) -> Result<VertexModel, ConfigError> {
        let constructor = self
            .constructors
            .get(name)
            .ok_or_else(|| ConfigError::UnknownModel(name.into()))?;
        constructor(params)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
