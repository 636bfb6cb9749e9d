//! Activity selection along a path

use rand::seq::SliceRandom;
use rand::Rng;

use super::{Activity, PathPoint};
use crate::core::config::GeneratorConfig;
use crate::species::{ActivityTemplate, BehaviorProfile};

/// Pick a template for one activity
///
/// Two tiers: with `preferred_chance` a template is drawn uniformly from the
/// profile's preferred list (when it has any), otherwise uniformly from the
/// common pool. Returns `None` only if both lists are empty.
pub fn select_template<'a, R: Rng>(
    profile: &'a BehaviorProfile,
    common: &'a [ActivityTemplate],
    preferred_chance: f64,
    rng: &mut R,
) -> Option<&'a ActivityTemplate> {
    if rng.gen::<f64>() < preferred_chance && !profile.preferred_activities.is_empty() {
        return profile.preferred_activities.choose(rng);
    }
    common.choose(rng)
}

/// Materialize activities on the path's points
///
/// Every point except home rolls once against `activity_chance`; a hit
/// produces exactly one activity there, so the result is in path order with
/// distinct, strictly increasing path indices.
pub fn attach_activities<R: Rng>(
    path: &[PathPoint],
    profile: &BehaviorProfile,
    common: &[ActivityTemplate],
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<Activity> {
    let mut activities = Vec::new();

    for (index, point) in path.iter().enumerate().skip(1) {
        if rng.gen::<f64>() >= config.activity_chance {
            continue;
        }
        let Some(template) = select_template(profile, common, config.preferred_activity_chance, rng)
        else {
            continue;
        };

        activities.push(Activity {
            activity_type: template.activity_type.clone(),
            description: template.description.clone(),
            path_index: index,
            location: point.location,
            timestamp: point.timestamp,
            duration_minutes: rng.gen_range(template.min_duration..=template.max_duration),
            energy_change: template.base_energy_change
                + rng.gen_range(-config.energy_jitter..=config.energy_jitter),
        });
    }

    activities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::GeoLocation;
    use crate::journey::path::generate_path;
    use crate::species::SpeciesCatalog;
    use chrono::{TimeZone, Utc};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn path(seed: u64) -> Vec<PathPoint> {
        let catalog = SpeciesCatalog::builtin().unwrap();
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        generate_path(
            GeoLocation::new(-1.2921, 36.8219),
            catalog.resolve("Olive Baboon"),
            now,
            &GeneratorConfig::default(),
            &mut ChaCha8Rng::seed_from_u64(seed),
        )
    }

    fn find_template<'a>(
        profile: &'a BehaviorProfile,
        common: &'a [ActivityTemplate],
        activity: &Activity,
    ) -> Vec<&'a ActivityTemplate> {
        profile
            .preferred_activities
            .iter()
            .chain(common.iter())
            .filter(|t| {
                t.activity_type == activity.activity_type && t.description == activity.description
            })
            .collect()
    }

    #[test]
    fn test_home_point_never_annotated() {
        let catalog = SpeciesCatalog::builtin().unwrap();
        let config = GeneratorConfig { activity_chance: 1.0, ..GeneratorConfig::default() };
        let path = path(1);
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let baboon = catalog.resolve("Baboon");
        let activities =
            attach_activities(&path, baboon, catalog.common_activities(), &config, &mut rng);

        // Every point but home gets one
        assert_eq!(activities.len(), path.len() - 1);
        let indices: Vec<usize> = activities.iter().map(|a| a.path_index).collect();
        assert_eq!(indices, (1..path.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_zero_chance_produces_nothing() {
        let catalog = SpeciesCatalog::builtin().unwrap();
        let config = GeneratorConfig { activity_chance: 0.0, ..GeneratorConfig::default() };
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let activities = attach_activities(
            &path(3),
            catalog.default_profile(),
            catalog.common_activities(),
            &config,
            &mut rng,
        );
        assert!(activities.is_empty());
    }

    #[test]
    fn test_activities_anchor_to_their_points() {
        let catalog = SpeciesCatalog::builtin().unwrap();
        let config = GeneratorConfig::default();
        for seed in 0..30 {
            let path = path(seed);
            let mut rng = ChaCha8Rng::seed_from_u64(seed + 100);
            let baboon = catalog.resolve("Baboon");
            let activities =
                attach_activities(&path, baboon, catalog.common_activities(), &config, &mut rng);

            for pair in activities.windows(2) {
                assert!(pair[1].path_index > pair[0].path_index);
            }
            for activity in &activities {
                assert!(activity.path_index >= 1 && activity.path_index < path.len());
                assert_eq!(activity.location, path[activity.path_index].location);
                assert_eq!(activity.timestamp, path[activity.path_index].timestamp);
            }
        }
    }

    #[test]
    fn test_duration_and_energy_within_template_bounds() {
        let catalog = SpeciesCatalog::builtin().unwrap();
        let profile = catalog.resolve("Olive Baboon");
        let config = GeneratorConfig { activity_chance: 1.0, ..GeneratorConfig::default() };

        for seed in 0..30 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let common = catalog.common_activities();
            let activities = attach_activities(&path(seed), profile, common, &config, &mut rng);
            for activity in &activities {
                let candidates = find_template(profile, catalog.common_activities(), activity);
                assert!(!candidates.is_empty(), "unknown activity {:?}", activity.activity_type);
                assert!(candidates.iter().any(|t| {
                    (t.min_duration..=t.max_duration).contains(&activity.duration_minutes)
                        && (t.base_energy_change - 5..=t.base_energy_change + 5)
                            .contains(&activity.energy_change)
                }));
            }
        }
    }

    #[test]
    fn test_preferred_chance_one_uses_only_preferred() {
        let catalog = SpeciesCatalog::builtin().unwrap();
        let profile = catalog.resolve("Japanese Macaque");
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        for _ in 0..100 {
            let template =
                select_template(profile, catalog.common_activities(), 1.0, &mut rng).unwrap();
            assert!(profile.preferred_activities.contains(template));
        }
    }

    #[test]
    fn test_preferred_chance_zero_uses_only_common() {
        let catalog = SpeciesCatalog::builtin().unwrap();
        let profile = catalog.resolve("Japanese Macaque");
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..100 {
            let template =
                select_template(profile, catalog.common_activities(), 0.0, &mut rng).unwrap();
            assert!(catalog.common_activities().contains(template));
        }
    }

    #[test]
    fn test_empty_preferred_falls_back_to_common() {
        let catalog = SpeciesCatalog::builtin().unwrap();
        let mut profile = catalog.default_profile().clone();
        profile.preferred_activities.clear();
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        let template =
            select_template(&profile, catalog.common_activities(), 1.0, &mut rng).unwrap();
        assert!(catalog.common_activities().contains(template));
    }

    #[test]
    fn test_nothing_to_choose_from() {
        let mut profile = SpeciesCatalog::builtin().unwrap().default_profile().clone();
        profile.preferred_activities.clear();
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        assert!(select_template(&profile, &[], 0.4, &mut rng).is_none());
    }

    #[test]
    fn test_preferred_weighting_is_roughly_forty_percent() {
        let catalog = SpeciesCatalog::builtin().unwrap();
        let profile = catalog.resolve("Japanese Macaque");
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let draws = 10_000;
        let preferred = (0..draws)
            .filter_map(|_| select_template(profile, catalog.common_activities(), 0.4, &mut rng))
            .filter(|t| profile.preferred_activities.contains(*t))
            .count();
        let share = preferred as f64 / draws as f64;
        assert!((0.36..0.44).contains(&share), "preferred share {}", share);
    }
}
