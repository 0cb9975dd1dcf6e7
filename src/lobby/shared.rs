//! Thread-safe handle to a single matchmaking pool
//!
//! All insertions and searches against one pool are serialized through a
//! read/write lock. Searches return owned snapshots taken under the read
//! lock, so an insertion can never be observed halfway through a scan.

use crate::error::{MatchmakingError, Result};
use crate::lobby::pool::MatchmakingPool;
use crate::lobby::queued::QueuedPlayer;
use crate::rating::player::Ratable;
use crate::types::EntryId;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared, clonable handle to one matchmaking pool
#[derive(Debug, Clone, Default)]
pub struct SharedMatchmakingPool {
    pool: Arc<RwLock<MatchmakingPool>>,
}

impl SharedMatchmakingPool {
    /// Wrap an existing pool
    pub fn new(pool: MatchmakingPool) -> Self {
        Self {
            pool: Arc::new(RwLock::new(pool)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MatchmakingPool>> {
        self.pool.read().map_err(|_| {
            MatchmakingError::InternalError {
                message: "Failed to acquire pool read lock".to_string(),
            }
            .into()
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MatchmakingPool>> {
        self.pool.write().map_err(|_| {
            MatchmakingError::InternalError {
                message: "Failed to acquire pool write lock".to_string(),
            }
            .into()
        })
    }

    /// Snapshot `player` with `range` and append it
    pub fn add_player(&self, player: &dyn Ratable, range: i64) -> Result<EntryId> {
        self.write()?.add_player(player, range)
    }

    /// Snapshot every player with the default range, as one atomic insertion
    pub fn add_players(&self, players: &[&dyn Ratable]) -> Result<Vec<EntryId>> {
        Ok(self.write()?.add_players(players))
    }

    /// Eligible opponents for `player`, copied out of the pool
    pub fn find_opponents(&self, player: &QueuedPlayer) -> Result<Vec<QueuedPlayer>> {
        let pool = self.read()?;
        Ok(pool.find_opponents(player).into_iter().cloned().collect())
    }

    /// Eligible opponents for the entry with `id`, or `None` if it is not queued
    pub fn find_opponents_for(&self, id: EntryId) -> Result<Option<Vec<QueuedPlayer>>> {
        let pool = self.read()?;
        Ok(pool
            .get(id)
            .map(|player| pool.find_opponents(player).into_iter().cloned().collect()))
    }

    pub fn remove(&self, id: EntryId) -> Result<Option<QueuedPlayer>> {
        Ok(self.write()?.remove(id))
    }

    /// Copy of every entry in insertion order
    pub fn snapshot(&self) -> Result<Vec<QueuedPlayer>> {
        Ok(self.read()?.entries().to_vec())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }
}

impl From<MatchmakingPool> for SharedMatchmakingPool {
    fn from(pool: MatchmakingPool) -> Self {
        Self::new(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::player::RatedPlayer;
    use std::thread;

    #[test]
    fn test_shared_pool_basic_operations() {
        let shared = SharedMatchmakingPool::default();
        let a = RatedPlayer::standard("A");
        let b = RatedPlayer::standard("B");

        let ids = shared.add_players(&[&a, &b]).unwrap();
        assert_eq!(shared.len().unwrap(), 2);

        let opponents = shared.find_opponents_for(ids[0]).unwrap().unwrap();
        assert_eq!(opponents.len(), 1);
        assert_eq!(opponents[0].name(), "B");

        shared.remove(ids[1]).unwrap();
        assert!(shared.find_opponents_for(ids[0]).unwrap().unwrap().is_empty());
        assert!(shared.find_opponents_for(ids[1]).unwrap().is_none());
    }

    #[test]
    fn test_shared_pool_rejects_negative_range() {
        let shared = SharedMatchmakingPool::default();
        let a = RatedPlayer::standard("A");

        let err = shared.add_player(&a, -10).unwrap_err();
        assert!(MatchmakingError::is_invalid_argument(&err));
        assert!(shared.is_empty().unwrap());
    }

    #[test]
    fn test_concurrent_insertions_and_searches() {
        let shared = SharedMatchmakingPool::default();
        let seeker = RatedPlayer::standard("Seeker");
        let seeker_id = shared.add_player(&seeker, 0).unwrap();

        let writers: Vec<_> = (0..8)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        let player =
                            RatedPlayer::standard_with_rating(format!("player_{}_{}", t, i), 400.0);
                        shared.add_player(&player, 100).unwrap();
                    }
                })
            })
            .collect();

        let reader = {
            let shared = shared.clone();
            thread::spawn(move || {
                let mut last_seen = 0;
                for _ in 0..50 {
                    let found = shared.find_opponents_for(seeker_id).unwrap().unwrap();
                    // Pool is append-only here, so searches never shrink
                    assert!(found.len() >= last_seen);
                    last_seen = found.len();
                }
            })
        };

        for writer in writers {
            writer.join().unwrap();
        }
        reader.join().unwrap();

        assert_eq!(shared.len().unwrap(), 201);
        let found = shared.find_opponents_for(seeker_id).unwrap().unwrap();
        assert_eq!(found.len(), 200);
    }
}
