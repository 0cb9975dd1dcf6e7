//! Settling finished matches between two rated players
//!
//! `Ratable::update_rating_against` reads the opponent's live rating, so the
//! order in which the two sides are updated matters. Settlement scores both
//! sides from pre-match snapshots instead, which makes the outcome independent
//! of update order.

use crate::rating::elo;
use crate::rating::player::{Ratable, RatedPlayer};
use crate::types::{MatchOutcome, RatingChange};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of settling one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementResult {
    /// Rating change of the player the outcome is reported for
    pub player: RatingChange,
    /// Rating change of the opponent
    pub opponent: RatingChange,
    /// Outcome from `player`'s side
    pub outcome: MatchOutcome,
}

/// Settle a match, updating both players from their pre-match ratings
///
/// # Arguments
/// * `player` - The side `outcome` is reported for
/// * `opponent` - The other side
/// * `outcome` - Result from `player`'s point of view
pub fn settle_match(
    player: &mut RatedPlayer,
    opponent: &mut RatedPlayer,
    outcome: MatchOutcome,
) -> SettlementResult {
    let player_before = player.rating();
    let opponent_before = opponent.rating();

    let player_delta = elo::rating_delta(
        player.k_factor(),
        player_before,
        opponent_before,
        outcome.score(),
    );
    let opponent_delta = elo::rating_delta(
        opponent.k_factor(),
        opponent_before,
        player_before,
        outcome.reversed().score(),
    );

    player.apply_delta(player_delta);
    opponent.apply_delta(opponent_delta);

    debug!(
        player = player.name(),
        opponent = opponent.name(),
        ?outcome,
        player_delta,
        opponent_delta,
        "Settled match"
    );

    SettlementResult {
        player: RatingChange {
            name: player.name().to_string(),
            old_rating: player_before,
            new_rating: player.rating(),
        },
        opponent: RatingChange {
            name: opponent.name().to_string(),
            old_rating: opponent_before,
            new_rating: opponent.rating(),
        },
        outcome,
    }
}
