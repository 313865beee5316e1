use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::config::MatchConfig;
use crate::engine::RandomSource;

/// Системный RNG (thread_rng).
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut rand::thread_rng());
    }

    fn index_below(&mut self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же матчи при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: rand::rngs::StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            inner: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    fn index_below(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }
}

/// RNG матча, выбранный по конфигу: seed задан – детерминированный, иначе системный.
#[derive(Clone, Debug)]
pub enum MatchRng {
    System(SystemRng),
    Seeded(DeterministicRng),
}

impl MatchRng {
    pub fn from_config(config: &MatchConfig) -> Self {
        match config.seed {
            Some(seed) => MatchRng::Seeded(DeterministicRng::from_seed(seed)),
            None => MatchRng::System(SystemRng),
        }
    }
}

impl RandomSource for MatchRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        match self {
            MatchRng::System(rng) => rng.shuffle(slice),
            MatchRng::Seeded(rng) => rng.shuffle(slice),
        }
    }

    fn index_below(&mut self, upper: usize) -> usize {
        match self {
            MatchRng::System(rng) => rng.index_below(upper),
            MatchRng::Seeded(rng) => rng.index_below(upper),
        }
    }
}
