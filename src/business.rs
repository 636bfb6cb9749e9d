//! Monkey business: a short random emoji string

use rand::seq::SliceRandom;
use rand::Rng;

pub const MONKEY_EMOJIS: [&str; 12] = [
    "🐵", "🐒", "🦍", "🦧", "🙈", "🙉", "🙊", "🍌", "🌴", "🥥", "🌿", "🐾",
];

/// Concatenate 3 to 6 random picks from [`MONKEY_EMOJIS`]
pub fn monkey_business<R: Rng>(rng: &mut R) -> String {
    let count = rng.gen_range(3..=6);
    (0..count)
        .filter_map(|_| MONKEY_EMOJIS.choose(rng).copied())
        .collect()
}
