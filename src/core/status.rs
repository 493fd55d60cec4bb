//! Per-letter feedback status

use std::fmt;

/// Feedback for a single letter of a guess
///
/// Variants are declared in aggregation order, so the derived `Ord` gives
/// `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterStatus {
    /// Letter is not in the secret (or all its occurrences are already credited)
    #[default]
    Absent,
    /// Letter is in the secret at another position
    Present,
    /// Letter is in the secret at this exact position
    Correct,
}

impl LetterStatus {
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a single feedback symbol: `G`/🟩, `Y`/🟨 or `-`/`_`/⬜
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}
