//! Species behavior profiles
//!
//! A profile carries the parameters the journey generators read: how far the
//! animal roams, what terrain it favours, its baseline energy and sociability,
//! and the activities it prefers. Profiles live in an ordered
//! [`SpeciesCatalog`] and are matched against entity names by substring.

mod builtin;
pub mod catalog;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use catalog::{SpeciesCatalog, DEFAULT_PROFILE_KEY};

/// Terrain a species prefers; affects step length on the path
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Forest,
    Savanna,
    Mountain,
    Rainforest,
    Mangrove,
    Urban,
    #[serde(rename = "Desert Urban")]
    DesertUrban,
    #[serde(rename = "Atlantic Forest")]
    AtlanticForest,
}

impl Terrain {
    /// Multiplier applied to every sampled step distance
    pub fn step_modifier(&self) -> f64 {
        match self {
            Terrain::Forest => 0.7,
            Terrain::Mountain => 1.2,
            _ => 1.0,
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Terrain::Forest => "Forest",
            Terrain::Savanna => "Savanna",
            Terrain::Mountain => "Mountain",
            Terrain::Rainforest => "Rainforest",
            Terrain::Mangrove => "Mangrove",
            Terrain::Urban => "Urban",
            Terrain::DesertUrban => "Desert Urban",
            Terrain::AtlanticForest => "Atlantic Forest",
        };
        f.write_str(name)
    }
}

/// Blueprint for an activity that can be materialized on a path point
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityTemplate {
    #[serde(rename = "type")]
    pub activity_type: String,
    pub description: String,
    /// Minutes, inclusive
    pub min_duration: u32,
    /// Minutes, inclusive
    pub max_duration: u32,
    pub base_energy_change: i32,
}

impl ActivityTemplate {
    pub fn new(
        activity_type: impl Into<String>,
        description: impl Into<String>,
        min_duration: u32,
        max_duration: u32,
        base_energy_change: i32,
    ) -> Self {
        Self {
            activity_type: activity_type.into(),
            description: description.into(),
            min_duration,
            max_duration,
            base_energy_change,
        }
    }
}

/// Generation parameters for one species
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BehaviorProfile {
    /// Name fragment this profile is matched by
    pub key: String,
    pub max_movement_radius: f64,
    pub terrain: Terrain,
    pub base_energy: i32,
    pub base_social: i32,
    #[serde(default)]
    pub preferred_activities: Vec<ActivityTemplate>,
}
