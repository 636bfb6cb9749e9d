//! Health snapshot synthesis

use rand::Rng;

use super::HealthStats;
use crate::core::config::GeneratorConfig;
use crate::species::BehaviorProfile;

/// Maximum deviation of energy from the profile baseline
pub const ENERGY_SPREAD: i32 = 20;
/// Maximum deviation of sociability from the profile baseline
pub const SOCIAL_SPREAD: i32 = 15;

/// Draw a health snapshot seeded by the profile's baselines
///
/// Energy and social are baseline +/- spread; the remaining stats are drawn
/// from fixed ranges. Without `clamp_health_stats`, energy and social may
/// leave [0, 100].
pub fn synthesize_health<R: Rng>(
    profile: &BehaviorProfile,
    config: &GeneratorConfig,
    rng: &mut R,
) -> HealthStats {
    let stats = HealthStats {
        energy: spread(profile.base_energy, ENERGY_SPREAD, rng),
        happiness: rng.gen_range(60..=100),
        hunger: rng.gen_range(20..=79),
        social: spread(profile.base_social, SOCIAL_SPREAD, rng),
        stress: rng.gen_range(10..=49),
        health: rng.gen_range(80..=100),
    };

    if config.clamp_health_stats {
        stats.clamped()
    } else {
        stats
    }
}

fn spread<R: Rng>(base: i32, spread: i32, rng: &mut R) -> i32 {
    rng.gen_range(base - spread..=base + spread)
}

impl HealthStats {
    /// Copy with every stat clamped into [0, 100]
    pub fn clamped(self) -> Self {
        let c = |v: i32| v.clamp(0, 100);
        Self {
            energy: c(self.energy),
            happiness: c(self.happiness),
            hunger: c(self.hunger),
            social: c(self.social),
            stress: c(self.stress),
            health: c(self.health),
        }
    }
}
