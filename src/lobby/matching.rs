//! Level-band opponent eligibility
//!
//! Ratings are bucketed into hundred-point levels before comparison. A queued
//! entry's range is measured in rating points and reaches `ceil(range / 100)`
//! levels above its own; the band never extends below the entry's own level.

use crate::lobby::queued::QueuedPlayer;
use crate::utils::{range_levels, rating_level};
use serde::Serialize;

/// Inclusive range of matchmaking levels an entry accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelBand {
    pub min_level: i64,
    pub max_level: i64,
}

impl LevelBand {
    /// Band for a queued entry: `[level, level + ceil(range / 100)]`
    pub fn for_entry(player: &QueuedPlayer) -> Self {
        let min_level = player.level();
        Self {
            min_level,
            max_level: min_level + range_levels(player.range()),
        }
    }

    pub fn contains(&self, level: i64) -> bool {
        self.min_level <= level && level <= self.max_level
    }

    /// Whether a rating falls inside the band once bucketed
    pub fn admits_rating(&self, rating: f64) -> bool {
        self.contains(rating_level(rating))
    }
}

/// Check whether `candidate` may be matched against `player`
///
/// An entry never matches itself; two distinct entries with the same name do.
pub fn is_eligible_opponent(player: &QueuedPlayer, candidate: &QueuedPlayer) -> bool {
    player.id() != candidate.id() && player.level_band().contains(candidate.level())
}
