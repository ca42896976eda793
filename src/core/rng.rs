//! Deterministic random number generation for automated players.
//!
//! - **Deterministic**: the same seed picks the same moves
//! - **Forkable**: each side of a match gets an independent stream
//!
//! ```
//! use amazons::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut white = rng.fork();
//! let mut black = rng.fork();
//!
//! // Sibling forks draw from different streams
//! let a: Vec<_> = (0..8).filter_map(|_| white.choose_iter(0..1000)).collect();
//! let b: Vec<_> = (0..8).filter_map(|_| black.choose_iter(0..1000)).collect();
//! assert_ne!(a, b);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG into an independent, deterministic stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Uniformly sample one item from an iterator of unknown length.
    ///
    /// Reservoir sampling: consumes the iterator once without collecting it.
    pub fn choose_iter<I: IntoIterator>(&mut self, items: I) -> Option<I::Item> {
        use rand::seq::IteratorRandom;
        items.into_iter().choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(rng: &mut GameRng, n: usize) -> Vec<u32> {
        (0..n).filter_map(|_| rng.choose_iter(0..1000u32)).collect()
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        assert_eq!(draws(&mut rng1, 100), draws(&mut rng2, 100));
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        assert_ne!(draws(&mut rng1, 10), draws(&mut rng2, 10));
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut root1 = GameRng::new(42);
        let mut root2 = GameRng::new(42);

        let mut forked1 = root1.fork();
        let mut forked2 = root2.fork();
        assert_eq!(draws(&mut forked1, 20), draws(&mut forked2, 20));

        // Second fork differs from the first
        let mut sibling = root1.fork();
        let mut first = GameRng::new(42).fork();
        assert_ne!(draws(&mut sibling, 20), draws(&mut first, 20));
    }

    #[test]
    fn test_fork_leaves_parent_stream() {
        let mut plain = GameRng::new(9);
        let mut forking = GameRng::new(9);
        let _child = forking.fork();

        assert_eq!(draws(&mut plain, 20), draws(&mut forking, 20));
    }

    #[test]
    fn test_choose_iter() {
        let mut rng = GameRng::new(7);
        let chosen = rng.choose_iter(10..20).unwrap();
        assert!((10..20).contains(&chosen));
        assert!(rng.choose_iter(std::iter::empty::<u8>()).is_none());
    }

    #[test]
    fn test_choose_iter_covers_all_items() {
        let mut rng = GameRng::new(3);
        let seen: std::collections::HashSet<_> =
            (0..200).filter_map(|_| rng.choose_iter(0..4)).collect();
        assert_eq!(seen.len(), 4);
    }
}
