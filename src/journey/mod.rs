//! Journey generation
//!
//! A journey is a synthetic movement-and-behavior history for one animal:
//! a timestamped path walked away from its home coordinate, activities
//! anchored to points on that path, and a health snapshot. Each generator
//! stage lives in its own module and draws from a caller-supplied RNG, so a
//! seeded ChaCha generator plus a fixed clock reproduces a journey exactly.

pub mod activity;
pub mod generator;
pub mod health;
pub mod path;

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::core::types::GeoLocation;

pub use activity::{attach_activities, select_template};
pub use generator::JourneyGenerator;
pub use health::synthesize_health;
pub use path::generate_path;

/// One timestamped location along a journey
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub location: GeoLocation,
    pub timestamp: DateTime<Utc>,
}

/// A materialized activity anchored to a path point
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type")]
    pub activity_type: String,
    pub description: String,
    /// Index into the journey's path points; never 0
    pub path_index: usize,
    pub location: GeoLocation,
    pub timestamp: DateTime<Utc>,
    pub duration_minutes: u32,
    pub energy_change: i32,
}

/// Health snapshot, nominally each in [0, 100]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStats {
    pub energy: i32,
    pub happiness: i32,
    /// Higher = hungrier
    pub hunger: i32,
    pub social: i32,
    /// Higher = more stressed
    pub stress: i32,
    pub health: i32,
}

/// Generated journey for one entity
///
/// Serializes with two extra read-only fields, `total_duration_minutes` and
/// `total_distance_km`, which are ignored when deserializing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Journey {
    pub entity_name: String,
    /// Key of the behavior profile the name resolved to
    pub profile_key: String,
    pub start_location: GeoLocation,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub path_points: Vec<PathPoint>,
    pub activities: Vec<Activity>,
    pub health_stats: HealthStats,
}

impl Journey {
    pub fn total_duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    pub fn total_duration_minutes(&self) -> i64 {
        self.total_duration().num_minutes()
    }

    /// Sum of great-circle distances between consecutive path points
    pub fn total_distance_km(&self) -> f64 {
        self.path_points
            .windows(2)
            .map(|pair| pair[0].location.distance_to(&pair[1].location))
            .sum()
    }

    /// Number of activities of each type
    pub fn activity_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for activity in &self.activities {
            *counts.entry(activity.activity_type.as_str()).or_insert(0) += 1;
        }
        counts
    }

    pub fn summary(&self) -> String {
        format!(
            "{}: {} activities over {:.1} hours, {:.2} km",
            self.entity_name,
            self.activities.len(),
            self.total_duration_minutes() as f64 / 60.0,
            self.total_distance_km(),
        )
    }
}

impl Serialize for Journey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Journey", 10)?;
        state.serialize_field("entity_name", &self.entity_name)?;
        state.serialize_field("profile_key", &self.profile_key)?;
        state.serialize_field("start_location", &self.start_location)?;
        state.serialize_field("start_time", &self.start_time)?;
        state.serialize_field("end_time", &self.end_time)?;
        state.serialize_field("path_points", &self.path_points)?;
        state.serialize_field("activities", &self.activities)?;
        state.serialize_field("health_stats", &self.health_stats)?;
        state.serialize_field("total_duration_minutes", &self.total_duration_minutes())?;
        state.serialize_field("total_distance_km", &self.total_distance_km())?;
        state.end()
    }
}
