//! The digits 1-9 that fill sudoku cells.
//!
//! [`Digit`] is a fieldless enum rather than a bare `u8`, so a cell either
//! holds a valid digit or is `None`; there is no in-band zero to guard
//! against. The digit also carries its 0-based bit position for
//! [`DigitSet`](crate::DigitSet), where digit `d` occupies bit `d - 1`.

use std::fmt::{self, Display};

/// A single sudoku digit, 1 through 9.
///
/// The discriminant is the digit value itself, so conversions to `u8` are
/// free.
///
/// # Examples
///
/// ```
/// use seedoku_core::Digit;
///
/// assert_eq!(Digit::from_value(3), Digit::D3);
/// assert_eq!(u8::from(Digit::D3), 3);
/// assert_eq!(Digit::D3.to_string(), "3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// All nine digits in ascending order.
    ///
    /// The backtracking fill shuffles a copy of this array to randomize its
    /// trial order.
    ///
    /// # Examples
    ///
    /// ```
    /// use seedoku_core::Digit;
    ///
    /// let values: Vec<u8> = Digit::ALL.into_iter().map(u8::from).collect();
    /// assert_eq!(values, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// ```
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates the digit with the given value, 1 through 9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is 0 or greater than 9.
    ///
    /// # Examples
    ///
    /// ```
    /// use seedoku_core::Digit;
    ///
    /// assert_eq!(Digit::from_value(9), Digit::D9);
    /// ```
    ///
    /// ```should_panic
    /// use seedoku_core::Digit;
    ///
    /// let _ = Digit::from_value(0); // panics, 0 marks a blank cell
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match value {
            1 => Self::D1,
            2 => Self::D2,
            3 => Self::D3,
            4 => Self::D4,
            5 => Self::D5,
            6 => Self::D6,
            7 => Self::D7,
            8 => Self::D8,
            9 => Self::D9,
            _ => panic!("Invalid digit value: {value}"),
        }
    }

    /// Creates the digit stored at bit `index` of a
    /// [`DigitSet`](crate::DigitSet), i.e. the digit `index + 1`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 9 or greater.
    ///
    /// # Examples
    ///
    /// ```
    /// use seedoku_core::Digit;
    ///
    /// assert_eq!(Digit::from_index(0), Digit::D1);
    /// assert_eq!(Digit::from_index(8), Digit::D9);
    /// ```
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        assert!(index < 9, "Invalid digit index: {index}");
        Self::from_value(index + 1)
    }

    /// Returns the digit value, 1 through 9.
    #[must_use]
    pub const fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the bit position of this digit in a
    /// [`DigitSet`](crate::DigitSet), 0 through 8.
    #[must_use]
    pub const fn index(&self) -> u8 {
        *self as u8 - 1
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_round_trip() {
        for (i, digit) in Digit::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(digit.value()), i + 1);
            assert_eq!(Digit::from_value(digit.value()), digit);
        }
    }

    #[test]
    fn test_bit_index_round_trip() {
        for digit in Digit::ALL {
            assert_eq!(digit.index(), digit.value() - 1);
            assert_eq!(Digit::from_index(digit.index()), digit);
        }
    }

    #[test]
    fn test_display_matches_value() {
        assert_eq!(Digit::D1.to_string(), "1");
        assert_eq!(Digit::D5.to_string(), "5");
        assert_eq!(Digit::D9.to_string(), "9");
    }

    #[test]
    fn test_u8_conversion() {
        let value: u8 = Digit::D7.into();
        assert_eq!(value, 7);
    }

    #[test]
    #[should_panic(expected = "Invalid digit value: 0")]
    fn test_from_value_rejects_zero() {
        let _ = Digit::from_value(0);
    }

    #[test]
    #[should_panic(expected = "Invalid digit value: 10")]
    fn test_from_value_rejects_ten() {
        let _ = Digit::from_value(10);
    }

    #[test]
    #[should_panic(expected = "Invalid digit index: 9")]
    fn test_from_index_rejects_nine() {
        let _ = Digit::from_index(9);
    }
}
