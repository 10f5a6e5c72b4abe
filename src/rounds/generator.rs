//! Random round generation.
//!
//! 1. Draw the target uniformly from the configured range
//! 2. Draw more values, rejecting duplicates (the target included), until
//!    there are `option_count` distinct options
//! 3. Shuffle the options so the target's position carries no information

use crate::core::{RandomSource, SessionConfig};

use super::Round;

/// Generate a fresh round.
///
/// `config` must have passed [`SessionConfig::validate`]; otherwise the
/// rejection loop may never find enough distinct values.
pub fn generate_round<R: RandomSource + ?Sized>(config: &SessionConfig, rng: &mut R) -> Round {
    debug_assert!(config.validate().is_ok(), "round generation needs a valid config");

    let (min, max) = (config.min_number, config.max_number);
    let target = rng.gen_inclusive(min, max);

    let mut options = Vec::with_capacity(config.option_count);
    options.push(target);

    while options.len() < config.option_count {
        let candidate = rng.gen_inclusive(min, max);
        if !options.contains(&candidate) {
            options.push(candidate);
        }
    }

    rng.shuffle(&mut options);

    Round::new(target, options)
}
