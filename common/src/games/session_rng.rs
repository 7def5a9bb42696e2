use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Match-scoped RNG. A fixed seed replays the same medium-bot choices.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_random, Self::new)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        Some(items[self.random_range(0..items.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(1234);
        let mut b = SessionRng::new(1234);
        let items = [0usize, 1, 2, 3, 4, 5, 6, 7, 8];
        for _ in 0..32 {
            assert_eq!(a.pick(&items), b.pick(&items));
        }
        assert_eq!(a.seed(), 1234);
    }

    #[test]
    fn test_pick_from_empty_slice() {
        let mut rng = SessionRng::new(0);
        let empty: [usize; 0] = [];
        assert_eq!(rng.pick(&empty), None);
    }

    #[test]
    fn test_optional_seed() {
        assert_eq!(SessionRng::from_optional_seed(Some(99)).seed(), 99);
    }
}
