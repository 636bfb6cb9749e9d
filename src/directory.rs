//! Entity directory: the named animals journeys are generated for
//!
//! The dataset is fetched and cached elsewhere; this module only reads the
//! cached JSON and answers lookups.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::GeoLocation;

/// Name used for entities that carry none
pub const UNKNOWN_ENTITY_NAME: &str = "Unknown";

/// One record of the upstream dataset
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Entity {
    pub name: Option<String>,
    pub location: Option<String>,
    pub details: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub population: i64,
    pub latitude: f64,
    pub longitude: f64,
}

impl Entity {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_ENTITY_NAME)
    }

    /// Home coordinate; fails for NaN or infinite components
    pub fn home(&self) -> Result<GeoLocation> {
        GeoLocation::try_new(self.latitude, self.longitude)
    }
}

/// Source of named entities with home coordinates
pub trait EntityDirectory: Send + Sync {
    fn entities(&self) -> &[Entity];

    /// Case-insensitive exact name lookup; the first match wins
    fn find(&self, name: &str) -> Option<&Entity> {
        let wanted = name.to_lowercase();
        self.entities()
            .iter()
            .find(|e| e.name.as_deref().is_some_and(|n| n.to_lowercase() == wanted))
    }
}

/// Directory backed by an in-memory list
#[derive(Clone, Debug, Default)]
pub struct StaticDirectory {
    entities: Vec<Entity>,
}

impl StaticDirectory {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    /// Parse a JSON array of entity records
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let entities: Vec<Entity> = serde_json::from_str(contents)?;
        Ok(Self::new(entities))
    }

    /// Load a cached dataset file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let directory = Self::from_json_str(&contents)?;
        tracing::info!(
            path = %path.as_ref().display(),
            entities = directory.entities.len(),
            "loaded entity directory"
        );
        Ok(directory)
    }
}

impl EntityDirectory for StaticDirectory {
    fn entities(&self) -> &[Entity] {
        &self.entities
    }
}
