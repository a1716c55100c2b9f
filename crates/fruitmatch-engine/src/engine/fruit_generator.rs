use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::FruitSource;

/// Seed for deterministic fruit generation.
///
/// Two boards created from the same seed (and driven by the same swaps) see
/// exactly the same initial fill and the same refills, which makes sessions
/// replayable and tests reproducible.
///
/// Serialized as a 16-character lowercase hex string.
///
/// # Example
///
/// ```
/// use fruitmatch_engine::{BoardSeed, FruitGenerator, FruitSource as _};
/// use rand::Rng as _;
///
/// let seed: BoardSeed = rand::rng().random();
/// let mut a = FruitGenerator::with_seed(seed);
/// let mut b = FruitGenerator::with_seed(seed);
/// assert_eq!(a.uniform(6), b.uniform(6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSeed(u64);

impl BoardSeed {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid seed '{input}': expected 16 hex digits")]
pub struct ParseBoardSeedError {
    #[error(not(source))]
    input: String,
}

impl FromStr for BoardSeed {
    type Err = ParseBoardSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseBoardSeedError {
            input: s.to_owned(),
        };
        if s.len() != 16 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        u64::from_str_radix(s, 16).map(Self).map_err(|_| err())
    }
}

impl Serialize for BoardSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BoardSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

impl Distribution<BoardSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BoardSeed {
        BoardSeed(rng.random())
    }
}

/// Seeded [`FruitSource`] backed by PCG32.
#[derive(Debug, Clone)]
pub struct FruitGenerator {
    rng: Pcg32,
    seed: BoardSeed,
}

impl Default for FruitGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl FruitGenerator {
    /// Creates a generator with a fresh random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(seed: BoardSeed) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed.0),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> BoardSeed {
        self.seed
    }
}

impl FruitSource for FruitGenerator {
    fn uniform(&mut self, upper: u8) -> u8 {
        self.rng.random_range(0..upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_format_is_16_char_hex() {
        let seed = BoardSeed::new(0x0123_4567_89ab_cdef);
        let serialized = serde_json::to_string(&seed).unwrap();
        assert_eq!(serialized, "\"0123456789abcdef\"");

        let deserialized: BoardSeed = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, seed);
    }

    #[test]
    fn test_seed_zero_is_padded() {
        assert_eq!(BoardSeed::new(0).to_string(), "0000000000000000");
    }

    #[test]
    fn test_seed_accepts_uppercase() {
        let seed: BoardSeed = "FFFFFFFFFFFFFFFF".parse().unwrap();
        assert_eq!(seed.value(), u64::MAX);
    }

    #[test]
    fn test_seed_rejects_bad_input() {
        for input in ["", "0123", "0123456789abcdef0", "ghijklmnopqrstuv"] {
            let result: Result<BoardSeed, _> = serde_json::from_str(&format!("\"{input}\""));
            let err_msg = result.unwrap_err().to_string();
            assert!(err_msg.contains("invalid seed"), "{err_msg}");
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let seed = BoardSeed::new(42);
        let mut a = FruitGenerator::with_seed(seed);
        let mut b = FruitGenerator::with_seed(seed);
        for _ in 0..50 {
            assert_eq!(a.uniform(6), b.uniform(6));
        }
    }

    #[test]
    fn test_uniform_stays_in_range() {
        let mut generator = FruitGenerator::with_seed(BoardSeed::new(7));
        for _ in 0..500 {
            assert!(generator.uniform(4) < 4);
        }
    }
}
