//! Test fixtures shared by the integration tests

#![allow(dead_code)]

use elo_lobby::lobby::MatchmakingPool;
use elo_lobby::rating::{Ratable, RatedPlayer};
use elo_lobby::types::EntryId;

/// Standard players spread over several levels
pub fn create_test_players() -> Vec<RatedPlayer> {
    vec![
        RatedPlayer::standard_with_rating("beginner_1", 120.0),
        RatedPlayer::standard_with_rating("beginner_2", 180.0),
        RatedPlayer::standard("club_1"),
        RatedPlayer::standard_with_rating("club_2", 430.0),
        RatedPlayer::standard_with_rating("club_3", 470.0),
        RatedPlayer::standard_with_rating("strong_1", 900.0),
        RatedPlayer::blitz("blitz_1"),
        RatedPlayer::blitz("blitz_2"),
    ]
}

/// Pool holding every player with the given range, plus their entry IDs
pub fn create_test_pool(players: &[RatedPlayer], range: i64) -> (MatchmakingPool, Vec<EntryId>) {
    let mut pool = MatchmakingPool::new();
    let ids = players
        .iter()
        .map(|player| {
            pool.add_player(player, range)
                .expect("non-negative range is always accepted")
        })
        .collect();
    (pool, ids)
}

/// Names of the opponents found for `id`
pub fn opponent_names(pool: &MatchmakingPool, id: EntryId) -> Vec<String> {
    let entry = pool.get(id).expect("entry is queued");
    pool.find_opponents(entry)
        .into_iter()
        .map(|opponent| opponent.name().to_string())
        .collect()
}
