//! RNG module - piece sources for the engine
//!
//! The engine never reaches for global randomness. It draws every new piece
//! from a [`PieceSource`] handed to it at construction:
//!
//! - [`UniformSource`]: independent uniform draws over the 7 kinds (repeats
//!   allowed, no bag guarantee), backed by a seeded LCG.
//! - [`SequenceSource`]: replays a fixed list of kinds, for tests and demos.

use crate::types::PieceKind;

/// Supplies the kind of each newly queued piece
pub trait PieceSource {
    fn next_piece(&mut self) -> PieceKind;
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_piece(&mut self) -> PieceKind {
        (**self).next_piece()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of a power-of-two LCG
    /// cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        (self.next_u32() >> 16) % max
    }
}

/// Uniform, independent piece draws
#[derive(Debug, Clone)]
pub struct UniformSource {
    rng: SimpleRng,
}

impl UniformSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl Default for UniformSource {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for UniformSource {
    fn next_piece(&mut self) -> PieceKind {
        PieceKind::from_index(self.rng.next_range(PieceKind::ALL.len() as u32) as usize)
    }
}

/// Replays a fixed sequence of kinds, cycling when exhausted
#[derive(Debug, Clone)]
pub struct SequenceSource {
    kinds: Vec<PieceKind>,
    index: usize,
}

impl SequenceSource {
    /// Panics if `kinds` is empty.
    pub fn new(kinds: impl IntoIterator<Item = PieceKind>) -> Self {
        let kinds: Vec<PieceKind> = kinds.into_iter().collect();
        assert!(!kinds.is_empty(), "sequence source needs at least one kind");
        Self { kinds, index: 0 }
    }

    /// Source that always yields the same kind
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new([kind])
    }
}

impl PieceSource for SequenceSource {
    fn next_piece(&mut self) -> PieceKind {
        let kind = self.kinds[self.index % self.kinds.len()];
        self.index += 1;
        kind
    }
}
