//! Difficulty presets mapping to clue targets.

use core::fmt;
use core::str::FromStr;

/// A named clue target for puzzle generation.
///
/// The discriminant of each preset is its clue target: fewer clues make a
/// harder puzzle. These are targets, not guarantees; carving stops early
/// when its retry budget runs out, so a generated puzzle can hold a few
/// more clues than the preset asks for.
///
/// # Examples
///
/// ```
/// use seedoku_generator::Difficulty;
///
/// assert_eq!(Difficulty::default(), Difficulty::Medium);
/// assert_eq!(Difficulty::Hard.clue_target(), 27);
/// assert_eq!("very-hard".parse(), Ok(Difficulty::VeryHard));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Difficulty {
    /// 34 clues.
    Easy = 34,
    /// 30 clues.
    #[default]
    Medium = 30,
    /// 27 clues.
    Hard = 27,
    /// 24 clues.
    VeryHard = 24,
    /// 17 clues, the fewest any proper puzzle can have. Carving rarely
    /// gets that far before the budget runs out.
    Evil = 17,
}

impl Difficulty {
    /// All presets, from most to fewest clues.
    pub const ALL: [Self; 5] = [
        Self::Easy,
        Self::Medium,
        Self::Hard,
        Self::VeryHard,
        Self::Evil,
    ];

    /// Returns the number of clues this preset aims to leave in place.
    #[must_use]
    pub const fn clue_target(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::VeryHard => "Very Hard",
            Self::Evil => "Evil",
        };
        f.write_str(name)
    }
}

/// Error returned when parsing an unknown difficulty name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty {name:?}, expected easy, medium, hard, very-hard, or evil")]
pub struct ParseDifficultyError {
    name: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "very-hard" | "very_hard" | "veryhard" => Ok(Self::VeryHard),
            "evil" => Ok(Self::Evil),
            _ => Err(ParseDifficultyError { name: s.to_owned() }),
        }
    }
}
