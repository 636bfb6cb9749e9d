//! Journey service: binds a directory, catalog and config
//!
//! Every call builds its own ChaCha RNG, so the service is safe to share
//! across threads. With a seed set, item `i` of a batch uses stream `i` of
//! that seed, so results do not depend on how rayon schedules the batch.
//! Single-item calls use a stream derived from the entity name, so
//! different entities under one seed get independent draws. Repeated calls
//! with the same inputs are identical.
//!
//! Coordinates are checked for finiteness where they enter; a NaN or
//! infinite component is reported instead of generated.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::config::{self, GeneratorConfig};
use crate::core::error::{JourneyError, Result};
use crate::core::types::GeoLocation;
use crate::directory::{Entity, EntityDirectory};
use crate::journey::{Journey, JourneyGenerator};
use crate::species::SpeciesCatalog;

/// Name and home coordinate of one journey to generate
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JourneyRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl JourneyRequest {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }
}

impl JourneyRequest {
    pub fn home(&self) -> Result<GeoLocation> {
        GeoLocation::try_new(self.latitude, self.longitude)
    }
}

impl From<&Entity> for JourneyRequest {
    fn from(entity: &Entity) -> Self {
        Self::new(entity.display_name(), entity.latitude, entity.longitude)
    }
}

/// Per-item result of a batch lookup
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum JourneyOutcome {
    Generated { journey: Journey },
    NotFound { name: String },
    InvalidLocation { name: String, reason: String },
}

impl JourneyOutcome {
    pub fn journey(&self) -> Option<&Journey> {
        match self {
            JourneyOutcome::Generated { journey } => Some(journey),
            JourneyOutcome::NotFound { .. } | JourneyOutcome::InvalidLocation { .. } => None,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, JourneyOutcome::Generated { .. })
    }

    pub fn into_result(self) -> Result<Journey> {
        match self {
            JourneyOutcome::Generated { journey } => Ok(journey),
            JourneyOutcome::NotFound { name } => Err(JourneyError::EntityNotFound(name)),
            JourneyOutcome::InvalidLocation { reason, .. } => {
                Err(JourneyError::InvalidLocation(reason))
            }
        }
    }
}

pub struct JourneyService<D> {
    directory: D,
    catalog: Cow<'static, SpeciesCatalog>,
    config: GeneratorConfig,
    seed: Option<u64>,
    fixed_now: Option<DateTime<Utc>>,
}

impl<D: EntityDirectory> JourneyService<D> {
    /// Service over the built-in catalog and the global config
    pub fn new(directory: D) -> Result<Self> {
        let catalog = SpeciesCatalog::builtin()?;
        Self::with_parts(directory, Cow::Borrowed(catalog), config::config().clone())
    }

    pub fn with_parts(
        directory: D,
        catalog: Cow<'static, SpeciesCatalog>,
        config: GeneratorConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            directory,
            catalog,
            config,
            seed: None,
            fixed_now: None,
        })
    }

    /// Make generation deterministic for `seed`
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use `now` instead of the wall clock
    pub fn with_fixed_time(mut self, now: DateTime<Utc>) -> Self {
        self.fixed_now = Some(now);
        self
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn catalog(&self) -> &SpeciesCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generator(&self) -> JourneyGenerator<'_> {
        JourneyGenerator::new(&self.catalog, &self.config)
    }

    fn now(&self) -> DateTime<Utc> {
        self.fixed_now.unwrap_or_else(Utc::now)
    }

    fn rng_for(&self, stream: u64) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                rng.set_stream(stream);
                rng
            }
            None => ChaCha8Rng::from_entropy(),
        }
    }

    /// Generate one journey from an explicit name and home coordinate
    ///
    /// Fails with [`JourneyError::InvalidLocation`] for a NaN or infinite
    /// coordinate.
    pub fn generate_journey(&self, name: &str, latitude: f64, longitude: f64) -> Result<Journey> {
        let home = GeoLocation::try_new(latitude, longitude)?;
        let mut rng = self.rng_for(name_stream(name));
        Ok(self.generator().build_journey(name, home, self.now(), &mut rng))
    }

    /// Generate journeys for a batch, in input order
    ///
    /// Every request is checked before any journey is generated; one bad
    /// coordinate fails the whole batch.
    pub fn generate_journeys(&self, batch: &[JourneyRequest]) -> Result<Vec<Journey>> {
        let homes = batch
            .iter()
            .map(JourneyRequest::home)
            .collect::<Result<Vec<_>>>()?;
        let now = self.now();
        let generator = self.generator();

        let journeys: Vec<Journey> = batch
            .par_iter()
            .zip(homes.par_iter())
            .enumerate()
            .map(|(index, (request, home))| {
                let mut rng = self.rng_for(index as u64);
                generator.build_journey(&request.name, *home, now, &mut rng)
            })
            .collect();

        tracing::info!(count = journeys.len(), "generated journey batch");
        Ok(journeys)
    }

    /// Look `name` up in the directory and generate its journey
    pub fn journey_for(&self, name: &str) -> Result<Journey> {
        let entity = self
            .directory
            .find(name)
            .ok_or_else(|| JourneyError::EntityNotFound(name.to_string()))?;
        self.generate_journey(entity.display_name(), entity.latitude, entity.longitude)
    }

    /// Look up each name and generate journeys for those found
    ///
    /// Missing names yield [`JourneyOutcome::NotFound`] and entities with a
    /// non-finite home yield [`JourneyOutcome::InvalidLocation`] in their
    /// slot; the rest of the batch is unaffected.
    pub fn journeys_for<S: AsRef<str> + Sync>(&self, names: &[S]) -> Vec<JourneyOutcome> {
        let now = self.now();
        let generator = self.generator();

        names
            .par_iter()
            .enumerate()
            .map(|(index, name)| {
                let name = name.as_ref();
                let Some(entity) = self.directory.find(name) else {
                    tracing::warn!(name, "entity not found in directory");
                    return JourneyOutcome::NotFound { name: name.to_string() };
                };
                match entity.home() {
                    Ok(home) => {
                        let mut rng = self.rng_for(index as u64);
                        let journey =
                            generator.build_journey(entity.display_name(), home, now, &mut rng);
                        JourneyOutcome::Generated { journey }
                    }
                    Err(e) => {
                        tracing::warn!(name, error = %e, "entity has an unusable home");
                        JourneyOutcome::InvalidLocation {
                            name: name.to_string(),
                            reason: e.to_string(),
                        }
                    }
                }
            })
            .collect()
    }

    /// Journeys for every entity in the directory
    pub fn all_journeys(&self) -> Result<Vec<Journey>> {
        let requests: Vec<JourneyRequest> = self
            .directory
            .entities()
            .iter()
            .map(JourneyRequest::from)
            .collect();
        self.generate_journeys(&requests)
    }
}

/// Stable RNG stream for an entity name (64-bit FNV-1a)
fn name_stream(name: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0100_0000_01b3;
    name.bytes()
        .fold(OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME))
}
