//! Common types used throughout the rating and matchmaking code

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a queued pool entry
pub type EntryId = Uuid;

/// Rating a standard player starts with unless told otherwise
pub const STANDARD_INITIAL_RATING: f64 = 400.0;

/// Rating every blitz player starts with
pub const BLITZ_INITIAL_RATING: f64 = 1200.0;

/// K-factor for standard play
pub const STANDARD_K_FACTOR: f64 = 32.0;

/// K-factor for blitz play (4x standard)
pub const BLITZ_K_FACTOR: f64 = 4.0 * STANDARD_K_FACTOR;

/// Search range a queued player gets when none is given
pub const DEFAULT_SEARCH_RANGE: u32 = 100;

/// Width of one matchmaking level in rating points
pub const LEVEL_WIDTH: u32 = 100;

/// Rating-update variant of a competing player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingVariant {
    Standard,
    Blitz,
}

impl RatingVariant {
    /// K-factor applied when this variant's rating is updated
    pub fn k_factor(&self) -> f64 {
        match self {
            RatingVariant::Standard => STANDARD_K_FACTOR,
            RatingVariant::Blitz => BLITZ_K_FACTOR,
        }
    }

    /// Starting rating for a new player of this variant
    pub fn initial_rating(&self) -> f64 {
        match self {
            RatingVariant::Standard => STANDARD_INITIAL_RATING,
            RatingVariant::Blitz => BLITZ_INITIAL_RATING,
        }
    }
}

impl std::fmt::Display for RatingVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RatingVariant::Standard => write!(f, "Standard"),
            RatingVariant::Blitz => write!(f, "Blitz"),
        }
    }
}

impl FromStr for RatingVariant {
    type Err = crate::error::MatchmakingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(RatingVariant::Standard),
            "blitz" => Ok(RatingVariant::Blitz),
            other => Err(crate::error::MatchmakingError::InvalidArgument {
                reason: format!("Unknown rating variant: {}", other),
            }),
        }
    }
}

/// Outcome of a finished match from one player's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    /// Score fed into the Elo update
    pub fn score(&self) -> f64 {
        match self {
            MatchOutcome::Win => 1.0,
            MatchOutcome::Draw => 0.5,
            MatchOutcome::Loss => 0.0,
        }
    }

    /// The same match seen from the opponent's side
    pub fn reversed(&self) -> Self {
        match self {
            MatchOutcome::Win => MatchOutcome::Loss,
            MatchOutcome::Draw => MatchOutcome::Draw,
            MatchOutcome::Loss => MatchOutcome::Win,
        }
    }
}

/// Rating change information for a player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingChange {
    pub name: String,
    pub old_rating: f64,
    pub new_rating: f64,
}

impl RatingChange {
    /// Signed rating delta (+/-)
    pub fn delta(&self) -> f64 {
        self.new_rating - self.old_rating
    }
}
