//! Ordered species catalog with first-match name resolution

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;

use super::{builtin, ActivityTemplate, BehaviorProfile};
use crate::core::config::MAX_STAT_MAGNITUDE;
use crate::core::error::{JourneyError, Result};

/// Key of the fallback profile every catalog must carry
pub const DEFAULT_PROFILE_KEY: &str = "Default";

static BUILTIN: OnceLock<SpeciesCatalog> = OnceLock::new();

/// Immutable, validated table of behavior profiles
///
/// Profiles are kept in authored order. [`SpeciesCatalog::resolve`] walks them
/// top to bottom, so a specific key must come before any broader key that it
/// contains; construction rejects tables where that is not the case.
#[derive(Debug, Clone)]
pub struct SpeciesCatalog {
    profiles: Vec<BehaviorProfile>,
    /// Lowercased keys, parallel to `profiles`
    match_keys: Vec<String>,
    default_index: usize,
    common: Vec<ActivityTemplate>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    species: Vec<BehaviorProfile>,
    #[serde(default)]
    common: Vec<ActivityTemplate>,
}

impl SpeciesCatalog {
    /// Build and validate a catalog from ordered profiles and a common pool
    pub fn new(profiles: Vec<BehaviorProfile>, common: Vec<ActivityTemplate>) -> Result<Self> {
        if common.is_empty() {
            return Err(JourneyError::InvalidCatalog(
                "common activity pool is empty".into(),
            ));
        }
        for template in &common {
            validate_template("common pool", template)?;
        }

        let mut match_keys: Vec<String> = Vec::with_capacity(profiles.len());
        for profile in &profiles {
            let key = profile.key.trim();
            if key.is_empty() {
                return Err(JourneyError::InvalidCatalog("profile with empty key".into()));
            }
            if !profile.max_movement_radius.is_finite() || profile.max_movement_radius < 0.0 {
                return Err(JourneyError::InvalidCatalog(format!(
                    "{}: max_movement_radius ({}) must be a non-negative number",
                    profile.key, profile.max_movement_radius
                )));
            }
            check_magnitude(&profile.key, "base_energy", profile.base_energy)?;
            check_magnitude(&profile.key, "base_social", profile.base_social)?;
            for template in &profile.preferred_activities {
                validate_template(&profile.key, template)?;
            }

            let lowered = profile.key.to_lowercase();
            if let Some(earlier) = match_keys.iter().find(|k| lowered.contains(k.as_str())) {
                // Covers exact duplicates as well
                return Err(JourneyError::InvalidCatalog(format!(
                    "key \"{}\" is shadowed by earlier key \"{}\"",
                    profile.key, earlier
                )));
            }
            match_keys.push(lowered);
        }

        let default_index = profiles
            .iter()
            .position(|p| p.key == DEFAULT_PROFILE_KEY)
            .ok_or(JourneyError::MissingDefaultProfile)?;

        Ok(Self {
            profiles,
            match_keys,
            default_index,
            common,
        })
    }

    /// The built-in catalog, constructed and validated once per process
    pub fn builtin() -> Result<&'static SpeciesCatalog> {
        if let Some(catalog) = BUILTIN.get() {
            return Ok(catalog);
        }
        let catalog = Self::new(builtin::profiles(), builtin::common_activities())?;
        tracing::debug!(profiles = catalog.len(), "built-in species catalog ready");
        Ok(BUILTIN.get_or_init(|| catalog))
    }

    /// Parse a catalog from TOML
    ///
    /// `[[species]]` tables are kept in file order. When no `[[common]]`
    /// tables are given the built-in common pool is used.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(contents)?;
        let common = if file.common.is_empty() {
            builtin::common_activities()
        } else {
            file.common
        };
        Self::new(file.species, common)
    }

    /// Load a catalog from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Find the profile for an entity name
    ///
    /// Case-insensitive substring match against each key in order; the first
    /// key contained in `name` wins. Falls back to the "Default" profile.
    pub fn resolve(&self, name: &str) -> &BehaviorProfile {
        let name = name.to_lowercase();
        let index = self
            .match_keys
            .iter()
            .position(|key| name.contains(key.as_str()))
            .unwrap_or(self.default_index);
        &self.profiles[index]
    }

    pub fn default_profile(&self) -> &BehaviorProfile {
        &self.profiles[self.default_index]
    }

    pub fn profiles(&self) -> &[BehaviorProfile] {
        &self.profiles
    }

    pub fn common_activities(&self) -> &[ActivityTemplate] {
        &self.common
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn validate_template(owner: &str, template: &ActivityTemplate) -> Result<()> {
    if template.min_duration > template.max_duration {
        return Err(JourneyError::InvalidCatalog(format!(
            "{}: activity \"{}\" has min_duration {} > max_duration {}",
            owner, template.activity_type, template.min_duration, template.max_duration
        )));
    }
    check_magnitude(owner, "base_energy_change", template.base_energy_change)
}

fn check_magnitude(owner: &str, field: &str, value: i32) -> Result<()> {
    if value.unsigned_abs() > MAX_STAT_MAGNITUDE.unsigned_abs() {
        return Err(JourneyError::InvalidCatalog(format!(
            "{}: {} ({}) is outside [-{}, {}]",
            owner, field, value, MAX_STAT_MAGNITUDE, MAX_STAT_MAGNITUDE
        )));
    }
    Ok(())
}
