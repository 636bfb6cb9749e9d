//! Path generation: a random walk away from home

use std::f64::consts::TAU;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use super::PathPoint;
use crate::core::config::GeneratorConfig;
use crate::core::types::GeoLocation;
use crate::species::BehaviorProfile;

/// Generate the ordered path for one journey
///
/// Point 0 is `home`, placed a random number of hours before `now`. Each of
/// the following N points moves a random distance (scaled by the profile's
/// movement radius and terrain) in a random direction from the previous one.
/// Steps are applied on a flat lat/lon plane.
///
/// Point `i` is timestamped `i * interval` after point 0, where the interval
/// is drawn once per path, so timestamps strictly increase.
pub fn generate_path<R: Rng>(
    home: GeoLocation,
    profile: &BehaviorProfile,
    now: DateTime<Utc>,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<PathPoint> {
    let lookback = rng.gen_range(config.lookback_hours_min..=config.lookback_hours_max);
    let start = now - Duration::hours(lookback);

    let steps = rng.gen_range(config.min_path_steps..=config.max_path_steps);
    let interval = Duration::minutes(
        rng.gen_range(config.step_interval_minutes_min..=config.step_interval_minutes_max),
    );
    let terrain_modifier = profile.terrain.step_modifier();

    let mut points = Vec::with_capacity(steps + 1);
    points.push(PathPoint { location: home, timestamp: start });

    let mut current = home;
    for i in 1..=steps {
        let distance = profile.max_movement_radius * rng.gen::<f64>() * terrain_modifier;
        let angle = rng.gen_range(0.0..TAU);

        current = current.offset(
            distance * angle.cos() * config.coordinate_scale,
            distance * angle.sin() * config.coordinate_scale,
        );
        points.push(PathPoint {
            location: current,
            timestamp: start + interval * i as i32,
        });
    }

    points
}
