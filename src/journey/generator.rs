//! Journey assembly

use chrono::{DateTime, Duration, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{activity, health, path, Journey};
use crate::core::config::GeneratorConfig;
use crate::core::error::Result;
use crate::core::types::GeoLocation;
use crate::species::SpeciesCatalog;

/// Runs the generator stages against a catalog and config
///
/// Holds no mutable state; one generator can serve any number of threads as
/// long as each call brings its own RNG.
#[derive(Debug, Clone, Copy)]
pub struct JourneyGenerator<'a> {
    catalog: &'a SpeciesCatalog,
    config: &'a GeneratorConfig,
}

impl<'a> JourneyGenerator<'a> {
    pub fn new(catalog: &'a SpeciesCatalog, config: &'a GeneratorConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &'a SpeciesCatalog {
        self.catalog
    }

    pub fn config(&self) -> &'a GeneratorConfig {
        self.config
    }

    /// Build a journey for `entity_name` living at `home`
    ///
    /// `home` must be finite; entry points taking raw coordinates check this
    /// with [`GeoLocation::try_new`] before calling here.
    ///
    /// Stages run in a fixed order (profile, path, activities, health, end
    /// time) so the same RNG state and `now` always give the same journey.
    pub fn build_journey<R: Rng>(
        &self,
        entity_name: &str,
        home: GeoLocation,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Journey {
        let profile = self.catalog.resolve(entity_name);

        let path_points = path::generate_path(home, profile, now, self.config, rng);
        let activities = activity::attach_activities(
            &path_points,
            profile,
            self.catalog.common_activities(),
            self.config,
            rng,
        );
        let health_stats = health::synthesize_health(profile, self.config, rng);

        let start_time = path_points.first().map_or(now, |p| p.timestamp);
        let minutes_per_point = rng.gen_range(
            self.config.end_minutes_per_point_min..=self.config.end_minutes_per_point_max,
        );
        let end_time =
            start_time + Duration::minutes(path_points.len() as i64 * minutes_per_point);

        tracing::debug!(
            entity = entity_name,
            profile = %profile.key,
            points = path_points.len(),
            activities = activities.len(),
            "generated journey"
        );

        Journey {
            entity_name: entity_name.to_string(),
            profile_key: profile.key.clone(),
            start_location: home,
            start_time,
            end_time,
            path_points,
            activities,
            health_stats,
        }
    }

    /// Unseeded generation with a fresh RNG and the current time
    ///
    /// Fails only when a coordinate is NaN or infinite.
    pub fn generate_journey(
        &self,
        entity_name: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Journey> {
        let home = GeoLocation::try_new(latitude, longitude)?;
        let mut rng = ChaCha8Rng::from_entropy();
        Ok(self.build_journey(entity_name, home, Utc::now(), &mut rng))
    }
}
