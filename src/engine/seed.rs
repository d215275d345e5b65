use std::ops::RangeInclusive;

use rand::Rng;

/// Range a seed is drawn from when the caller does not provide one.
pub const RANDOM_SEED_RANGE: RangeInclusive<i64> = 0..=32767;

/// Supplier of seeds for invocations that did not receive one explicitly.
pub trait SeedSource {
    fn next_seed(&mut self) -> i64;
}

/// Draws seeds uniformly from [`RANDOM_SEED_RANGE`] with the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSeedSource;

impl SeedSource for RandomSeedSource {
    fn next_seed(&mut self) -> i64 {
        rand::thread_rng().gen_range(RANDOM_SEED_RANGE)
    }
}

/// Always yields the same seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSeedSource(pub i64);

impl SeedSource for FixedSeedSource {
    fn next_seed(&mut self) -> i64 {
        self.0
    }
}

/// Return `explicit` if set, otherwise draw once from `source`.
pub fn resolve_seed<S: SeedSource + ?Sized>(explicit: Option<i64>, source: &mut S) -> i64 {
    match explicit {
        Some(seed) => seed,
        None => source.next_seed(),
    }
}
