use lineage_types::DISAMBIGUATION_MARKER;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Upper bound (inclusive) of generated suffixes.
pub const MAX_SUFFIX: u64 = 10_000_000_000;

/// Source of random disambiguation suffixes for node names.
///
/// Uniqueness is probabilistic: two equal suffixes on equal labels would merge
/// two diagram nodes, which only affects the picture.
#[derive(Debug, Clone)]
pub struct SuffixGenerator {
    rng: StdRng,
}

impl SuffixGenerator {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence, used for stable diagrams (`--seed`).
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn next_suffix(&mut self) -> u64 {
        self.rng.gen_range(0..=MAX_SUFFIX)
    }

    /// `name#<random>`
    pub fn disambiguate(&mut self, name: &str) -> String {
        format!("{}{}{}", name, DISAMBIGUATION_MARKER, self.next_suffix())
    }
}

impl Default for SuffixGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}
