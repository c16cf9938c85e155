//! A set of sudoku digits, backed by a 9-bit mask.
//!
//! This module provides [`DigitSet`], the candidate-set representation used
//! by the backtracking fill and the uniqueness solver: bit `d - 1` is set
//! when digit `d` is still legal for a cell.
//!
//! # Examples
//!
//! ```
//! use seedoku_core::{Digit, DigitSet};
//!
//! let mut set = DigitSet::new();
//! set.insert(Digit::D1);
//! set.insert(Digit::D5);
//! set.insert(Digit::D9);
//!
//! assert_eq!(set.len(), 3);
//! assert!(set.contains(Digit::D5));
//! ```

use std::fmt;

use crate::digit::Digit;

/// A set of digits 1-9, represented as a bitset.
///
/// The implementation uses a 16-bit integer where bits 0-8 represent digits
/// 1-9 respectively, providing efficient storage and fast membership tests.
///
/// # Examples
///
/// ```
/// use seedoku_core::{Digit, DigitSet};
///
/// // Start from the full candidate set and strike out placed peers
/// let mut candidates = DigitSet::FULL;
/// candidates.remove(Digit::D5);
/// candidates.remove(Digit::D7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::D5));
/// assert!(candidates.contains(Digit::D1));
///
/// // Iteration yields digits in ascending order
/// let remaining: Vec<_> = DigitSet::from_iter([Digit::D9, Digit::D2]).iter().collect();
/// assert_eq!(remaining, vec![Digit::D2, Digit::D9]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all nine digits.
    pub const FULL: Self = Self {
        bits: 0b1_1111_1111,
    };

    /// Creates a new empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Adds a digit to the set.
    pub fn insert(&mut self, digit: Digit) {
        self.bits |= 1 << digit.index();
    }

    /// Removes a digit from the set.
    pub fn remove(&mut self, digit: Digit) {
        self.bits &= !(1 << digit.index());
    }

    /// Returns `true` if the set contains the digit.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & (1 << digit.index()) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|d| d.value())).finish()
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Digit::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl std::iter::FusedIterator for Iter {}
