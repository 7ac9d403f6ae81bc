//! Value types produced by the strength scorer.

use std::fmt;

/// Highest score a password can reach: one point per satisfied criterion.
pub const MAX_SCORE: u8 = 5;

const PALETTE: [&str; 5] = ["#ff4d4d", "#ff944d", "#ffd11a", "#9fdb4d", "#28a745"];

/// Number of strength criteria a password satisfies, always in `0..=5`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrengthScore(u8);

impl StrengthScore {
    /// Creates a score, clamping anything above [`MAX_SCORE`].
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_SCORE))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn level(&self) -> StrengthLevel {
        StrengthLevel::from_score(*self)
    }

    /// Fill percentage of the strength bar.
    pub fn percent(&self) -> u8 {
        self.0 * 20
    }
}

impl fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_SCORE)
    }
}

/// Qualitative strength bucket shown next to the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    pub const ALL: [StrengthLevel; 5] = [
        StrengthLevel::VeryWeak,
        StrengthLevel::Weak,
        StrengthLevel::Fair,
        StrengthLevel::Strong,
        StrengthLevel::VeryStrong,
    ];

    /// Maps a score onto the five-slot table at `max(0, score - 1)`.
    ///
    /// A score of 0 lands in the same slot as a score of 1; there is no
    /// separate "unrated" level.
    pub fn from_score(score: StrengthScore) -> Self {
        Self::ALL[usize::from(score.value().saturating_sub(1))]
    }

    /// Position in the label and colour tables.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Bar colour as a CSS hex string.
    pub fn color(&self) -> &'static str {
        PALETTE[self.index()]
    }
}

/// A single strength criterion. Each satisfied criterion adds one point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    MinLength,
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

/// Result of scoring one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthEvaluation {
    pub score: StrengthScore,
    /// Criteria the password did not satisfy, in evaluation order.
    pub missing: Vec<Criterion>,
}

impl StrengthEvaluation {
    pub fn strength(&self) -> StrengthLevel {
        self.score.level()
    }

    pub fn color(&self) -> &'static str {
        self.strength().color()
    }
}
