//! The vertex application module.
//!
//! [`VertexApplicationDriver`] owns one configured [`VertexModel`] and the
//! [`RandomSource`] it samples from. For every event it draws a single
//! displacement and emits a translated copy of the first upstream record
//! under [`SMEARED_LABEL`].

use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};
use vtxsmear_core::config::{SMEARED_LABEL, SmearingConfig};
use vtxsmear_core::error::{ConfigError, LogicError, ReferenceError, SmearError};
use vtxsmear_core::event::{Event, GenEvent, RecordHandle};
use vtxsmear_core::random::{RandomSource, RngSource};
use vtxsmear_core::seed::SeedHierarchy;
use vtxsmear_core::types::{DisplacementVector, FourVector};
use vtxsmear_models::model::VertexModel;
use vtxsmear_models::registry::ModelRegistry;

use crate::stats::SmearingStats;

// ---------------------------------------------------------------------------
// CoordinateMapping
// ---------------------------------------------------------------------------

/// How a vertex position and a displacement are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinateMapping {
    /// `y' = x + dy`. Kept for compatibility with existing samples.
    #[default]
    Legacy,
    /// `y' = y + dy`.
    Corrected,
}

impl CoordinateMapping {
    pub const fn from_flag(correct_y_mapping: bool) -> Self {
        if correct_y_mapping { Self::Corrected } else { Self::Legacy }
    }

    /// Translate `position` by `shift`. The time component is unchanged.
    pub fn apply(self, position: FourVector, shift: DisplacementVector) -> FourVector {
        let y_in = match self {
            Self::Legacy => position.x,
            Self::Corrected => position.y,
        };
        FourVector::new(
            position.x + shift.x,
            y_in + shift.y,
            position.z + shift.z,
            position.t,
        )
    }
}

// ---------------------------------------------------------------------------
// VertexApplicationDriver
// ---------------------------------------------------------------------------

/// Applies one sampled vertex per event to every vertex of the upstream record.
#[derive(Debug)]
pub struct VertexApplicationDriver<S> {
    model: VertexModel,
    source: S,
    mapping: CoordinateMapping,
    stats: SmearingStats,
}

impl<S: RandomSource> VertexApplicationDriver<S> {
    /// Resolve the configured model and bind it to `source`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IdentityMismatch`] if the module label is not
    /// [`SMEARED_LABEL`], [`ConfigError::UnknownModel`] for an unregistered
    /// model type, or the model constructor's error.
    pub fn new(
        config: &SmearingConfig,
        registry: &ModelRegistry,
        source: S,
    ) -> Result<Self, ConfigError> {
        if config.module_label != SMEARED_LABEL {
            return Err(ConfigError::IdentityMismatch {
                expected: SMEARED_LABEL.into(),
                got: config.module_label.clone(),
            });
        }
        let model = registry.create(&config.model_type, &config.parameters)?;
        let mapping = CoordinateMapping::from_flag(config.correct_y_mapping);

        info!(model = %model, label = %config.module_label, "vertex smearing configured");
        if !model.warnings().is_empty() {
            info!(count = model.warnings().len(), "vertex model configured with replaced values");
        }
        if mapping == CoordinateMapping::Legacy {
            warn!(
                "translated y is built from the vertex x coordinate; \
                 set correct_y_mapping to use y"
            );
        }

        Ok(Self::from_parts(model, source, mapping))
    }

    /// Bind an already configured model.
    pub fn from_parts(model: VertexModel, source: S, mapping: CoordinateMapping) -> Self {
        Self {
            model,
            source,
            mapping,
            stats: SmearingStats::new(),
        }
    }

    pub const fn model(&self) -> &VertexModel {
        &self.model
    }

    /// Mutable access for runtime reconfiguration (e.g. `set_sigma_x`).
    pub fn model_mut(&mut self) -> &mut VertexModel {
        &mut self.model
    }

    pub const fn mapping(&self) -> CoordinateMapping {
        self.mapping
    }

    pub const fn stats(&self) -> &SmearingStats {
        &self.stats
    }

    /// Smear one event.
    ///
    /// On success exactly one record labelled [`SMEARED_LABEL`] has been
    /// added to `event`. On error `event` is left untouched.
    ///
    /// # Errors
    ///
    /// - [`ReferenceError::NoUpstreamRecord`] if the event holds no records.
    /// - [`ReferenceError::InvalidRecord`] if any record is invalid.
    /// - [`LogicError::AlreadyApplied`] if a smeared record already exists.
    pub fn produce(&mut self, event: &mut Event) -> Result<(), SmearError> {
        let smeared = match self.smear(event) {
            Ok(smeared) => smeared,
            Err(e) => {
                self.stats.record_failure();
                return Err(e);
            }
        };
        event.put(SMEARED_LABEL, smeared);
        Ok(())
    }

    fn smear(&mut self, event: &Event) -> Result<GenEvent, SmearError> {
        let upstream = upstream_record(event)?;

        let mut record = upstream.clone();
        let shift = self.model.new_vertex(&mut self.source);
        for vertex in record.vertices_mut() {
            vertex.position = self.mapping.apply(vertex.position, shift);
        }

        debug!(event = event.id, %shift, vertices = record.vertex_count(), "event smeared");
        self.stats.record(shift, record.vertex_count());
        Ok(record)
    }
}

impl VertexApplicationDriver<RngSource<ChaCha8Rng>> {
    /// Build a driver whose source is seeded from `seeds` and the module label.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn from_seeds(
        config: &SmearingConfig,
        registry: &ModelRegistry,
        seeds: &SeedHierarchy,
    ) -> Result<Self, ConfigError> {
        Self::new(config, registry, seeds.module_source(&config.module_label))
    }
}

/// Check every record of `event` and return the first one.
fn upstream_record(event: &Event) -> Result<&GenEvent, SmearError> {
    for (index, handle) in event.records().iter().enumerate() {
        if !handle.is_valid() {
            return Err(ReferenceError::InvalidRecord {
                index,
                label: handle.label().into(),
            }
            .into());
        }
        if handle.label() == SMEARED_LABEL {
            return Err(LogicError::AlreadyApplied {
                label: SMEARED_LABEL.into(),
            }
            .into());
        }
    }
    event
        .records()
        .first()
        .and_then(RecordHandle::record)
        .ok_or_else(|| ReferenceError::NoUpstreamRecord.into())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use vtxsmear_core::config::ModelParameters;
    use vtxsmear_test_utils::{ScriptedSource, event_with_record, single_vertex_record};

    fn gaussian_config(mean_cm: [f64; 3]) -> SmearingConfig {
        SmearingConfig::for_model(
            "gaussian",
            ModelParameters {
                mean_x: Some(mean_cm[0]),
                mean_y: Some(mean_cm[1]),
                mean_z: Some(mean_cm[2]),
                sigma_x: Some(0.0),
                sigma_y: Some(0.0),
                sigma_z: Some(0.0),
                ..ModelParameters::default()
            },
        )
    }

    fn driver(config: &SmearingConfig) -> VertexApplicationDriver<ScriptedSource> {
        VertexApplicationDriver::new(
            config,
            &ModelRegistry::with_defaults(),
            ScriptedSource::constant_normal(0.0),
        )
        .unwrap()
    }

    #[test]
    fn legacy_mapping_takes_y_from_x() {
        let p = FourVector::new(1.0, 5.0, 0.0, 2.0);
        let out = CoordinateMapping::Legacy.apply(p, DisplacementVector::new(0.0, 0.5, 0.0));
        assert_eq!(out, FourVector::new(1.0, 1.5, 0.0, 2.0));
    }

    #[test]
    fn corrected_mapping_takes_y_from_y() {
        let p = FourVector::new(1.0, 5.0, 0.0, 2.0);
        let out = CoordinateMapping::Corrected.apply(p, DisplacementVector::new(0.0, 0.5, 0.0));
        assert_eq!(out, FourVector::new(1.0, 5.5, 0.0, 2.0));
    }

    #[test]
    fn mapping_follows_config_flag() {
        let mut config = gaussian_config([0.0; 3]);
        assert_eq!(driver(&config).mapping(), CoordinateMapping::Legacy);
        config.correct_y_mapping = true;
        assert_eq!(driver(&config).mapping(), CoordinateMapping::Corrected);
    }

    #[test]
    fn rejects_foreign_module_label() {
        let mut config = gaussian_config([0.0; 3]);
        config.module_label = "VG".into();
        let err = VertexApplicationDriver::new(
            &config,
            &ModelRegistry::with_defaults(),
            ScriptedSource::constant_normal(0.0),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::IdentityMismatch { ref got, .. } if got == "VG"));
    }

    #[test]
    fn empty_event_has_no_upstream_record() {
        let mut d = driver(&gaussian_config([0.0; 3]));
        let mut event = Event::new(0);
        let err = d.produce(&mut event).unwrap_err();
        assert!(matches!(
            err,
            SmearError::InvalidReference(ReferenceError::NoUpstreamRecord)
        ));
        assert!(event.records().is_empty());
        assert_eq!(d.stats().events_failed, 1);
    }

    #[test]
    fn invalid_record_anywhere_is_rejected() {
        let mut d = driver(&gaussian_config([0.0; 3]));
        let mut event = event_with_record("generator", single_vertex_record(0, FourVector::default()));
        event.put_handle(RecordHandle::invalid("mixer"));
        let err = d.produce(&mut event).unwrap_err();
        assert!(matches!(
            err,
            SmearError::InvalidReference(ReferenceError::InvalidRecord { index: 1, .. })
        ));
        assert_eq!(event.records().len(), 2);
    }

    #[test]
    fn smears_first_record_only() {
        let mut d = driver(&gaussian_config([0.1, 0.0, 0.0]));
        let mut event = event_with_record("generator", single_vertex_record(0, FourVector::default()));
        event.put("other", single_vertex_record(0, FourVector::new(9.0, 9.0, 9.0, 0.0)));
        d.produce(&mut event).unwrap();
        let out = event.get(SMEARED_LABEL).unwrap();
        assert!((out.vertices()[0].position.x - 1.0).abs() < 1e-12);
        assert_eq!(d.stats().events_processed, 1);
        assert_eq!(d.stats().vertices_shifted, 1);
    }

    #[test]
    fn draws_once_per_event() {
        let mut source = ScriptedSource::constant_normal(0.0);
        let mut d = VertexApplicationDriver::new(
            &gaussian_config([0.0; 3]),
            &ModelRegistry::with_defaults(),
            &mut source,
        )
        .unwrap();
        for n in 0..2 {
            let mut event =
                event_with_record("generator", single_vertex_record(n, FourVector::default()));
            d.produce(&mut event).unwrap();
        }
        assert_eq!(source.normal_draws(), 6);
    }
}
