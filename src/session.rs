//! One matchmaking session: enqueue a roster, search, then settle matches
//!
//! The pool is filled from the roster before any match is settled, so the
//! opponent lists reflect ratings at enqueue time.

use crate::config::AppConfig;
use crate::error::{MatchmakingError, Result};
use crate::lobby::pool::MatchmakingPool;
use crate::lobby::LevelBand;
use crate::rating::calculator::{settle_match, SettlementResult};
use crate::rating::player::{Ratable, RatedPlayer};
use crate::roster::Roster;
use crate::types::{EntryId, RatingVariant};
use serde::Serialize;
use tracing::{debug, info};

/// Opponents found for one queued entry
#[derive(Debug, Clone, Serialize)]
pub struct OpponentReport {
    pub entry_id: EntryId,
    pub name: String,
    pub rating: f64,
    pub range: u32,
    pub band: LevelBand,
    pub opponents: Vec<String>,
}

/// Rating of a player at the end of the session
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSummary {
    pub name: String,
    pub variant: RatingVariant,
    pub rating: f64,
}

/// Everything a session produced
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub opponents: Vec<OpponentReport>,
    pub settlements: Vec<SettlementResult>,
    pub final_ratings: Vec<PlayerSummary>,
}

/// Run a roster through a fresh pool and settle its matches
pub fn run_session(roster: &Roster, config: &AppConfig) -> Result<SessionReport> {
    roster.validate()?;

    let mut players = roster.build_players(&config.rating);
    let default_range = config.default_range()?;
    let mut pool = MatchmakingPool::with_default_range(default_range);

    for (player, entry) in players.iter().zip(&roster.players) {
        let range = entry.range.unwrap_or(i64::from(default_range));
        pool.add_player(player, range)?;
    }
    info!(queued = pool.len(), "Queued roster players");

    let opponents = pool
        .iter()
        .map(|entry| OpponentReport {
            entry_id: entry.id(),
            name: entry.name().to_string(),
            rating: entry.rating(),
            range: entry.range(),
            band: entry.level_band(),
            opponents: pool
                .find_opponents(entry)
                .into_iter()
                .map(|opponent| opponent.name().to_string())
                .collect(),
        })
        .collect();

    let mut settlements = Vec::with_capacity(roster.matches.len());
    for game in &roster.matches {
        let player_index = position_of(&players, &game.player)?;
        let opponent_index = position_of(&players, &game.opponent)?;
        let (player, opponent) = pair_mut(&mut players, player_index, opponent_index)?;

        let settlement = settle_match(player, opponent, game.outcome);
        debug!(
            player = %settlement.player.name,
            delta = settlement.player.delta(),
            opponent = %settlement.opponent.name,
            opponent_delta = settlement.opponent.delta(),
            "Applied match result"
        );
        settlements.push(settlement);
    }
    info!(settled = settlements.len(), "Settled roster matches");

    let final_ratings = players
        .iter()
        .map(|player| PlayerSummary {
            name: player.name().to_string(),
            variant: player.variant(),
            rating: player.rating(),
        })
        .collect();

    Ok(SessionReport {
        opponents,
        settlements,
        final_ratings,
    })
}

fn position_of(players: &[RatedPlayer], name: &str) -> Result<usize> {
    players
        .iter()
        .position(|player| player.name() == name)
        .ok_or_else(|| {
            MatchmakingError::PlayerNotFound {
                name: name.to_string(),
            }
            .into()
        })
}

/// Two distinct mutable players out of one slice
fn pair_mut(
    players: &mut [RatedPlayer],
    first: usize,
    second: usize,
) -> Result<(&mut RatedPlayer, &mut RatedPlayer)> {
    if first == second {
        return Err(MatchmakingError::InvalidArgument {
            reason: format!("{} cannot play against themselves", players[first].name()),
        }
        .into());
    }

    if first < second {
        let (head, tail) = players.split_at_mut(second);
        Ok((&mut head[first], &mut tail[0]))
    } else {
        let (head, tail) = players.split_at_mut(first);
        Ok((&mut tail[0], &mut head[second]))
    }
}
