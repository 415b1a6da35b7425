//! Constrained random sampling over pool slices.
//!
//! Every function takes the generator by `&mut impl Rng` so callers thread
//! one process-wide source through all draws; tests inject a seeded
//! `ChaCha8Rng` for determinism.

use rand::seq::SliceRandom;
use rand::Rng;

use character_rules::AttributeSet;

/// Lower bound of a rolled base attribute, inclusive.
pub const ATTRIBUTE_MIN: i32 = 1;

/// Upper bound of a rolled base attribute, inclusive.
pub const ATTRIBUTE_MAX: i32 = 10;

/// Draw `count` distinct elements from `pool` uniformly at random.
///
/// Element order in the result is not significant. If `count` exceeds the
/// pool size the draw degrades gracefully to the full slice; callers that
/// care can inspect the returned length.
pub fn sample<T: Clone>(rng: &mut impl Rng, pool: &[T], count: usize) -> Vec<T> {
    pool.choose_multiple(rng, count).cloned().collect()
}

/// Roll a fresh attribute set, each field drawn independently and uniformly
/// from `[ATTRIBUTE_MIN, ATTRIBUTE_MAX]`.
pub fn sample_attributes(rng: &mut impl Rng) -> AttributeSet {
    let mut roll = || rng.gen_range(ATTRIBUTE_MIN..=ATTRIBUTE_MAX);
    AttributeSet {
        strength: roll(),
        dexterity: roll(),
        constitution: roll(),
        intelligence: roll(),
        wisdom: roll(),
        charisma: roll(),
    }
}
