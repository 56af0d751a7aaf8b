use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;

use crate::PieceKind;

/// Seed for deterministic piece generation.
///
/// Using the same seed produces the same sequence of piece kinds, which
/// makes games reproducible for debugging and tests.
///
/// # Example
///
/// ```
/// use blockfall_engine::{PieceGenerator, PieceSeed};
///
/// let mut a = PieceGenerator::with_seed(PieceSeed::from(42));
/// let mut b = PieceGenerator::with_seed(PieceSeed::from(42));
/// assert_eq!(a.next_kind(), b.next_kind());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("{_0:016x}")]
pub struct PieceSeed(u64);

impl From<u64> for PieceSeed {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Allows generating random `PieceSeed` values with `rng.random()`.
impl Distribution<PieceSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceSeed {
        PieceSeed(rng.random())
    }
}

/// Source of piece kinds for spawning.
///
/// Every draw is an independent uniform choice among the seven kinds; there
/// is no bag or drought protection.
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: Pcg32,
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceGenerator {
    /// Creates a generator seeded from the thread-local random source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic generation.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed.0),
        }
    }

    /// Draws the next piece kind.
    pub fn next_kind(&mut self) -> PieceKind {
        self.rng.random()
    }
}
