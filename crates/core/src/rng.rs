use rand::{rngs::StdRng, seq::SliceRandom, RngCore, SeedableRng};

/// Seedable random source for the whole run. Every nondeterministic decision
/// (shuffles, lucky trials, boss discards, shop draws) routes through this so
/// a fixed seed replays identically.
#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Uniform index into a collection of `len` items. `len` must be nonzero.
    pub fn index(&mut self, len: usize) -> usize {
        (self.next_u64() % len as u64) as usize
    }

    /// One-in-`sides` trial.
    pub fn roll(&mut self, sides: u64) -> bool {
        if sides == 0 {
            return false;
        }
        self.next_u64() % sides == 0
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.index(items.len());
        items.get(idx)
    }
}
