//! Reputation score categories, totals, and deltas.
//!
//! The category set is closed: every playthrough tracks the same three
//! reputation counters. Choices carry a [`ScoreDeltas`] that a session folds
//! into its running [`Scores`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the fixed reputation categories.
///
/// Declaration order doubles as verdict priority: when totals tie,
/// [`Scores::leading`] prefers the category declared first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreCategory {
    /// Standing within the harem.
    Harem,
    /// Standing with Sultan Süleyman.
    Suleyman,
    /// Standing with the imperial council.
    Divan,
}

impl ScoreCategory {
    /// All categories, in verdict-priority order.
    pub const ALL: [ScoreCategory; 3] = [
        ScoreCategory::Harem,
        ScoreCategory::Suleyman,
        ScoreCategory::Divan,
    ];
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScoreCategory::Harem => "Harem",
            ScoreCategory::Suleyman => "Süleyman",
            ScoreCategory::Divan => "Divan",
        };
        write!(f, "{name}")
    }
}

/// Signed per-category adjustments carried by a choice.
///
/// Categories absent from the authored document deserialize as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDeltas {
    /// Harem adjustment.
    #[serde(default)]
    pub harem: i32,
    /// Süleyman adjustment.
    #[serde(default)]
    pub suleyman: i32,
    /// Divan adjustment.
    #[serde(default)]
    pub divan: i32,
}

impl ScoreDeltas {
    /// Create deltas from per-category values in declaration order.
    pub fn new(harem: i32, suleyman: i32, divan: i32) -> Self {
        Self {
            harem,
            suleyman,
            divan,
        }
    }

    /// The adjustment for one category.
    pub fn get(&self, category: ScoreCategory) -> i32 {
        match category {
            ScoreCategory::Harem => self.harem,
            ScoreCategory::Suleyman => self.suleyman,
            ScoreCategory::Divan => self.divan,
        }
    }

    /// Whether every adjustment is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Running reputation totals for one playthrough.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    /// Harem total.
    pub harem: i32,
    /// Süleyman total.
    pub suleyman: i32,
    /// Divan total.
    pub divan: i32,
}

impl Scores {
    /// All-zero totals, the state every session starts and resets to.
    pub fn new() -> Self {
        Self::default()
    }

    /// The running total for one category.
    pub fn get(&self, category: ScoreCategory) -> i32 {
        match category {
            ScoreCategory::Harem => self.harem,
            ScoreCategory::Suleyman => self.suleyman,
            ScoreCategory::Divan => self.divan,
        }
    }

    /// Fold a choice's deltas into the totals.
    pub fn apply(&mut self, deltas: &ScoreDeltas) {
        self.harem += deltas.harem;
        self.suleyman += deltas.suleyman;
        self.divan += deltas.divan;
    }

    /// The category holding the maximum total.
    ///
    /// Ties break by declaration order: Harem, then Süleyman, then Divan.
    pub fn leading(&self) -> ScoreCategory {
        let mut best = ScoreCategory::ALL[0];
        for category in ScoreCategory::ALL {
            if self.get(category) > self.get(best) {
                best = category;
            }
        }
        best
    }
}
