//! Queued player snapshots
//!
//! A `QueuedPlayer` is a value copy of a player's name and rating taken when
//! the player enters a pool, plus the search range used for matchmaking. It
//! never tracks the source player afterwards.

use crate::error::{MatchmakingError, Result};
use crate::lobby::matching::LevelBand;
use crate::rating::player::Ratable;
use crate::types::{EntryId, DEFAULT_SEARCH_RANGE};
use crate::utils::{current_timestamp, generate_entry_id, rating_level};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

/// Snapshot of a player waiting in a matchmaking pool
#[derive(Debug, Clone, Serialize)]
pub struct QueuedPlayer {
    id: EntryId,
    name: String,
    rating: f64,
    range: u32,
    queued_at: DateTime<Utc>,
}

impl QueuedPlayer {
    /// Snapshot `player` with the given search range
    ///
    /// Fails with `InvalidArgument` when `range` is negative.
    pub fn new(player: &dyn Ratable, range: i64) -> Result<Self> {
        let range = validate_range(range)?;

        Ok(Self {
            id: generate_entry_id(),
            name: player.name().to_string(),
            rating: player.rating(),
            range,
            queued_at: current_timestamp(),
        })
    }

    /// Snapshot `player` with the default range of 100
    pub fn with_default_range(player: &dyn Ratable) -> Self {
        Self::with_valid_range(player, DEFAULT_SEARCH_RANGE)
    }

    pub(crate) fn with_valid_range(player: &dyn Ratable, range: u32) -> Self {
        Self {
            id: generate_entry_id(),
            name: player.name().to_string(),
            rating: player.rating(),
            range,
            queued_at: current_timestamp(),
        }
    }

    /// Unique entry ID; identity within a pool
    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn range(&self) -> u32 {
        self.range
    }

    /// Change the search range; the entry is left untouched on failure
    pub fn set_range(&mut self, range: i64) -> Result<()> {
        self.range = validate_range(range)?;
        Ok(())
    }

    pub fn queued_at(&self) -> DateTime<Utc> {
        self.queued_at
    }

    /// Matchmaking level of the snapshot rating
    pub fn level(&self) -> i64 {
        rating_level(self.rating)
    }

    /// Levels this entry is willing to be matched against
    pub fn level_band(&self) -> LevelBand {
        LevelBand::for_entry(self)
    }
}

impl PartialEq for QueuedPlayer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for QueuedPlayer {}

impl Ratable for QueuedPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn rating(&self) -> f64 {
        self.rating
    }

    /// Queued snapshots are a matchmaking-time view and never take part in a
    /// live rating update.
    fn update_rating_against(&mut self, opponent: &dyn Ratable, _result: f64) -> Result<()> {
        warn!(
            player = %self.name,
            opponent = opponent.name(),
            "Rejected rating update on queued player"
        );

        Err(MatchmakingError::UnsupportedOperation {
            operation: "update_rating_against".to_string(),
            reason: format!(
                "queued player {} is a matchmaking snapshot, not a competitor",
                self.name
            ),
        }
        .into())
    }
}

/// Check a caller-supplied search range
fn validate_range(range: i64) -> Result<u32> {
    if range < 0 {
        return Err(MatchmakingError::InvalidArgument {
            reason: format!("Range must be non-negative, got {}", range),
        }
        .into());
    }

    u32::try_from(range).map_err(|_| {
        MatchmakingError::InvalidArgument {
            reason: format!("Range {} exceeds the maximum of {}", range, u32::MAX),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::player::RatedPlayer;

    #[test]
    fn test_snapshot_copies_name_and_rating() {
        let greg = RatedPlayer::standard("Greg");
        let queued = QueuedPlayer::new(&greg, 50).unwrap();

        assert_eq!(queued.name(), "Greg");
        assert_eq!(queued.rating(), 400.0);
        assert_eq!(queued.range(), 50);
        assert_eq!(queued.level(), 4);
    }

    #[test]
    fn test_default_range() {
        let jade = RatedPlayer::blitz("Jade");
        let queued = QueuedPlayer::with_default_range(&jade);
        assert_eq!(queued.range(), 100);
        assert_eq!(queued.rating(), 1200.0);
    }

    #[test]
    fn test_snapshot_is_decoupled_from_source() {
        let mut greg = RatedPlayer::standard("Greg");
        let opponent = RatedPlayer::standard("Opponent");
        let queued = QueuedPlayer::with_default_range(&greg);

        greg.update_rating_against(&opponent, 1.0).unwrap();

        assert_eq!(greg.rating(), 416.0);
        assert_eq!(queued.rating(), 400.0);
    }

    #[test]
    fn test_negative_range_rejected() {
        let greg = RatedPlayer::standard("Greg");
        let err = QueuedPlayer::new(&greg, -1).unwrap_err();
        assert!(MatchmakingError::is_invalid_argument(&err));
    }

    #[test]
    fn test_oversized_range_rejected() {
        let greg = RatedPlayer::standard("Greg");
        let err = QueuedPlayer::new(&greg, i64::from(u32::MAX) + 1).unwrap_err();
        assert!(MatchmakingError::is_invalid_argument(&err));
    }

    #[test]
    fn test_zero_range_allowed() {
        let greg = RatedPlayer::standard("Greg");
        let queued = QueuedPlayer::new(&greg, 0).unwrap();
        assert_eq!(queued.range(), 0);
    }

    #[test]
    fn test_set_range_validates_before_mutating() {
        let greg = RatedPlayer::standard("Greg");
        let mut queued = QueuedPlayer::new(&greg, 10).unwrap();

        assert!(queued.set_range(-5).is_err());
        assert_eq!(queued.range(), 10);

        queued.set_range(3).unwrap();
        assert_eq!(queued.range(), 3);
    }

    #[test]
    fn test_rating_update_unsupported() {
        let greg = RatedPlayer::standard("Greg");
        let jade = RatedPlayer::blitz("Jade");
        let mut queued = QueuedPlayer::with_default_range(&greg);

        let err = queued.update_rating_against(&jade, 1.0).unwrap_err();
        assert!(MatchmakingError::is_unsupported_operation(&err));
        assert_eq!(queued.rating(), 400.0);
    }

    #[test]
    fn test_identity_is_entry_id() {
        let greg = RatedPlayer::standard("Greg");
        let first = QueuedPlayer::with_default_range(&greg);
        let second = QueuedPlayer::with_default_range(&greg);

        assert_ne!(first, second);
        assert_eq!(first, first.clone());
    }
}
