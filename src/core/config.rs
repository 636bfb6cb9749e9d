//! Journey generation configuration with documented constants
//!
//! All magic numbers used by the generators are collected here. Every range
//! is inclusive on both ends.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::core::error::{JourneyError, Result};

/// Longest span any configured time offset may cover (one century, minutes)
///
/// Applies to the lookback, to the last path point's offset and to the
/// journey end time, keeping every timestamp well inside chrono's range.
pub const MAX_TIME_SPAN_MINUTES: i64 = 100 * 366 * 24 * 60;

/// Upper bound on the number of steps in a path
pub const MAX_PATH_STEPS: usize = 10_000;

/// Largest magnitude allowed for stat baselines, energy changes and jitter
///
/// Baseline plus spread stays far from `i32` overflow.
pub const MAX_STAT_MAGNITUDE: i32 = 1_000_000;

/// Configuration for the journey generators
///
/// The defaults reproduce the canonical generator behavior. Load a TOML file
/// to override individual fields; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    // === PATH ===
    /// How far before "now" the first path point is placed (hours)
    pub lookback_hours_min: i64,
    pub lookback_hours_max: i64,

    /// Number of steps taken away from home (the path has one more point)
    pub min_path_steps: usize,
    pub max_path_steps: usize,

    /// Time between consecutive path points (minutes)
    ///
    /// One interval is drawn per path and point `i` sits at `i * interval`
    /// after the first point. The minimum must be positive so timestamps
    /// strictly increase.
    pub step_interval_minutes_min: i64,
    pub step_interval_minutes_max: i64,

    /// Converts a movement radius sample into degrees of lat/lon
    ///
    /// Applied on a flat plane. With radii around 2.0 a step is at most a few
    /// hundred meters, small enough that ignoring spherical distortion is fine.
    pub coordinate_scale: f64,

    // === ACTIVITIES ===
    /// Chance that a path point (other than home) gets an activity
    pub activity_chance: f64,

    /// Chance an activity is drawn from the species' preferred templates
    /// rather than the common pool
    pub preferred_activity_chance: f64,

    /// Maximum random deviation applied to a template's energy change
    pub energy_jitter: i32,

    // === JOURNEY ===
    /// Minutes per path point used to place the journey end time
    ///
    /// A single value is drawn and multiplied by the point count.
    pub end_minutes_per_point_min: i64,
    pub end_minutes_per_point_max: i64,

    // === HEALTH ===
    /// Clamp every health stat into [0, 100]
    ///
    /// Off by default: energy and social are baseline +/- spread and may
    /// leave the range for high-baseline species.
    pub clamp_health_stats: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            lookback_hours_min: 1,
            lookback_hours_max: 11,
            min_path_steps: 10,
            max_path_steps: 20,
            step_interval_minutes_min: 10,
            step_interval_minutes_max: 29,
            coordinate_scale: 0.001,
            activity_chance: 0.3,
            preferred_activity_chance: 0.4,
            energy_jitter: 5,
            end_minutes_per_point_min: 5,
            end_minutes_per_point_max: 14,
            clamp_health_stats: false,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML and validate it
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: GeneratorConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file and validate it
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        check_range("lookback_hours", self.lookback_hours_min, self.lookback_hours_max)?;
        check_range(
            "path_steps",
            self.min_path_steps as i64,
            self.max_path_steps as i64,
        )?;
        check_range(
            "step_interval_minutes",
            self.step_interval_minutes_min,
            self.step_interval_minutes_max,
        )?;
        check_range(
            "end_minutes_per_point",
            self.end_minutes_per_point_min,
            self.end_minutes_per_point_max,
        )?;

        if self.lookback_hours_min < 0 || self.end_minutes_per_point_min < 0 {
            return Err(JourneyError::InvalidConfig(
                "time offsets must not be negative".into(),
            ));
        }

        if self.max_path_steps > MAX_PATH_STEPS {
            return Err(JourneyError::InvalidConfig(format!(
                "max_path_steps ({}) exceeds {}",
                self.max_path_steps, MAX_PATH_STEPS
            )));
        }

        // Steps are bounded above, so the point count fits an i64
        let points = self.max_path_steps as i64 + 1;
        check_span("lookback_hours_max", self.lookback_hours_max.checked_mul(60))?;
        check_span(
            "step_interval_minutes_max * max_path_steps",
            self.step_interval_minutes_max
                .checked_mul(self.max_path_steps as i64),
        )?;
        check_span(
            "end_minutes_per_point_max * path points",
            self.end_minutes_per_point_max.checked_mul(points),
        )?;

        if self.step_interval_minutes_min < 1 {
            return Err(JourneyError::InvalidConfig(format!(
                "step_interval_minutes_min ({}) must be at least 1",
                self.step_interval_minutes_min
            )));
        }

        for (name, p) in [
            ("activity_chance", self.activity_chance),
            ("preferred_activity_chance", self.preferred_activity_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(JourneyError::InvalidConfig(format!(
                    "{} ({}) must lie in [0, 1]",
                    name, p
                )));
            }
        }

        if !self.coordinate_scale.is_finite() || self.coordinate_scale <= 0.0 {
            return Err(JourneyError::InvalidConfig(format!(
                "coordinate_scale ({}) must be positive",
                self.coordinate_scale
            )));
        }

        if !(0..=MAX_STAT_MAGNITUDE).contains(&self.energy_jitter) {
            return Err(JourneyError::InvalidConfig(format!(
                "energy_jitter ({}) must lie in [0, {}]",
                self.energy_jitter, MAX_STAT_MAGNITUDE
            )));
        }

        Ok(())
    }
}

fn check_range(name: &str, min: i64, max: i64) -> Result<()> {
    if min > max {
        return Err(JourneyError::InvalidConfig(format!(
            "{}: min ({}) exceeds max ({})",
            name, min, max
        )));
    }
    Ok(())
}

/// `minutes` is `None` when computing it overflowed
fn check_span(name: &str, minutes: Option<i64>) -> Result<()> {
    match minutes {
        Some(m) if m <= MAX_TIME_SPAN_MINUTES => Ok(()),
        _ => Err(JourneyError::InvalidConfig(format!(
            "{} spans more than {} minutes",
            name, MAX_TIME_SPAN_MINUTES
        ))),
    }
}

// === GLOBAL CONFIG ACCESS ===

static CONFIG: OnceLock<GeneratorConfig> = OnceLock::new();

/// Get the global generator config (initializes with defaults if not set)
pub fn config() -> &'static GeneratorConfig {
    CONFIG.get_or_init(GeneratorConfig::default)
}

/// Set the global generator config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: GeneratorConfig) -> std::result::Result<(), GeneratorConfig> {
    CONFIG.set(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_path_length_range() {
        let config = GeneratorConfig::default();
        // 11 to 21 points including home
        assert_eq!(config.min_path_steps + 1, 11);
        assert_eq!(config.max_path_steps + 1, 21);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GeneratorConfig::from_toml_str(
            "activity_chance = 0.4\nclamp_health_stats = true\n",
        )
        .expect("partial config should parse");

        assert_eq!(config.activity_chance, 0.4);
        assert!(config.clamp_health_stats);
        assert_eq!(config.min_path_steps, 10);
        assert_eq!(config.coordinate_scale, 0.001);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let config = GeneratorConfig {
            min_path_steps: 30,
            ..GeneratorConfig::default()
        };
        assert!(matches!(config.validate(), Err(JourneyError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_step_interval_rejected() {
        let config = GeneratorConfig {
            step_interval_minutes_min: 0,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_probability_out_of_range_rejected() {
        let err = GeneratorConfig::from_toml_str("preferred_activity_chance = 1.5")
            .expect_err("probability above 1 should fail");
        assert!(err.to_string().contains("preferred_activity_chance"));
    }

    #[test]
    fn test_huge_lookback_rejected() {
        let err = GeneratorConfig::from_toml_str(
            "lookback_hours_min = 10000000000\nlookback_hours_max = 10000000000",
        )
        .expect_err("lookback beyond a century should fail");
        assert!(matches!(err, JourneyError::InvalidConfig(_)));
        assert!(err.to_string().contains("lookback_hours_max"));
    }

    #[test]
    fn test_lookback_overflowing_minutes_rejected() {
        let config = GeneratorConfig {
            lookback_hours_max: i64::MAX,
            ..GeneratorConfig::default()
        };
        assert!(matches!(config.validate(), Err(JourneyError::InvalidConfig(_))));
    }

    #[test]
    fn test_path_span_rejected() {
        // 10_000 steps of a year each
        let config = GeneratorConfig {
            max_path_steps: MAX_PATH_STEPS,
            step_interval_minutes_max: 366 * 24 * 60,
            ..GeneratorConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("step_interval_minutes_max"));
    }

    #[test]
    fn test_end_time_span_rejected() {
        let config = GeneratorConfig {
            end_minutes_per_point_max: i64::MAX / 2,
            ..GeneratorConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("end_minutes_per_point_max"));
    }

    #[test]
    fn test_too_many_steps_rejected() {
        let config = GeneratorConfig {
            max_path_steps: usize::MAX,
            ..GeneratorConfig::default()
        };
        assert!(matches!(config.validate(), Err(JourneyError::InvalidConfig(_))));
    }

    #[test]
    fn test_extreme_jitter_rejected() {
        let config = GeneratorConfig {
            energy_jitter: i32::MAX,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_large_but_bounded_spans_accepted() {
        let config = GeneratorConfig {
            lookback_hours_min: 24 * 365,
            lookback_hours_max: 24 * 365 * 50,
            step_interval_minutes_max: 24 * 60,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_global_config_defaults() {
        assert!(config().validate().is_ok());
    }
}
