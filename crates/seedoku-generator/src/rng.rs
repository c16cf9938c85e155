//! Deterministic random number generation.
//!
//! Every generation run is keyed by a 32-bit seed fed to [`Mulberry32`].
//! The same seed therefore produces the same puzzle on every platform,
//! which is what makes seeds shareable. The generator implements
//! [`TryRng`] (and, being infallible, [`Rng`](rand::Rng) through the
//! blanket impl) and [`SeedableRng`] so it can stand in wherever a
//! rand-compatible source is expected, though the puzzle pipeline itself
//! only draws raw words and shuffles slices.
//!
//! # Examples
//!
//! ```
//! use rand::Rng as _;
//! use seedoku_generator::Mulberry32;
//!
//! let mut rng = Mulberry32::new(1);
//! assert_eq!(rng.next_u32(), 2_693_262_067);
//!
//! let mut slots = [0, 1, 2, 3, 4, 5, 6, 7, 8];
//! Mulberry32::new(1).shuffle(&mut slots);
//! assert_eq!(slots, [2, 8, 1, 7, 6, 4, 3, 0, 5]);
//! ```

use core::convert::Infallible;

use rand::rand_core::utils;
use rand::{Rng, SeedableRng, TryRng};

/// A Mulberry32 pseudorandom number generator.
///
/// Mulberry32 keeps 32 bits of state and mixes them with a handful of
/// shifts and wrapping multiplies per draw. The draws here are
/// bit-compatible with the widely circulated C and JavaScript
/// implementations, so seeds exported from those stay valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Creates a generator whose state starts at `seed`.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Shuffles `slice` in place.
    ///
    /// This is a Fisher-Yates walk from the last index down to 1, with the
    /// partner index drawn as `next_u32() / ((2^32 + 1) / i)` in 64-bit
    /// arithmetic. The divisor uses `i` rather than `i + 1`, so the draw
    /// is slightly biased and can land on `i` itself. Both quirks are part
    /// of the seed format and are preserved bit for bit.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        const DRAW_SPAN: u64 = 1 << 32;
        for i in (1..slice.len()).rev() {
            let divisor = (DRAW_SPAN + 1) / i as u64;
            #[expect(clippy::cast_possible_truncation)]
            let j = (u64::from(self.next_u32()) / divisor) as usize;
            slice.swap(i, j);
        }
    }
}

impl TryRng for Mulberry32 {
    type Error = Infallible;

    fn try_next_u32(&mut self) -> Result<u32, Infallible> {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut z = self.state;
        z = (z ^ (z >> 15)).wrapping_mul(z | 1);
        z ^= z.wrapping_add((z ^ (z >> 7)).wrapping_mul(z | 61));
        Ok(z ^ (z >> 14))
    }

    fn try_next_u64(&mut self) -> Result<u64, Infallible> {
        utils::next_u64_via_u32(self)
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Infallible> {
        utils::fill_bytes_via_next_word(dst, || self.try_next_u32())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
