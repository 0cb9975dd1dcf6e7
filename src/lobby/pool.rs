//! Matchmaking pool
//!
//! The pool holds queued snapshots in insertion order and answers opponent
//! searches against them. Insertions are validated before anything is
//! appended, so a rejected call leaves the pool unchanged.

use crate::error::Result;
use crate::lobby::matching::is_eligible_opponent;
use crate::lobby::queued::QueuedPlayer;
use crate::rating::player::Ratable;
use crate::types::{EntryId, DEFAULT_SEARCH_RANGE};
use tracing::{debug, warn};

/// Ordered collection of players waiting for an opponent
#[derive(Debug, Clone)]
pub struct MatchmakingPool {
    entries: Vec<QueuedPlayer>,
    default_range: u32,
}

impl MatchmakingPool {
    /// Create an empty pool with the default search range of 100
    pub fn new() -> Self {
        Self::with_default_range(DEFAULT_SEARCH_RANGE)
    }

    /// Create an empty pool whose batch insertions use `default_range`
    pub fn with_default_range(default_range: u32) -> Self {
        Self {
            entries: Vec::new(),
            default_range,
        }
    }

    pub fn default_range(&self) -> u32 {
        self.default_range
    }

    /// Snapshot `player` with `range` and append it
    ///
    /// Fails with `InvalidArgument` when `range` is negative; the pool is not
    /// modified in that case.
    pub fn add_player(&mut self, player: &dyn Ratable, range: i64) -> Result<EntryId> {
        let entry = QueuedPlayer::new(player, range).inspect_err(|e| {
            warn!(player = player.name(), range, "Rejected pool insertion: {}", e);
        })?;

        Ok(self.push(entry))
    }

    /// Snapshot every player with the pool's default range and append them
    pub fn add_players(&mut self, players: &[&dyn Ratable]) -> Vec<EntryId> {
        // Every entry is built before any is appended
        let entries: Vec<QueuedPlayer> = players
            .iter()
            .map(|player| QueuedPlayer::with_valid_range(*player, self.default_range))
            .collect();

        entries.into_iter().map(|entry| self.push(entry)).collect()
    }

    fn push(&mut self, entry: QueuedPlayer) -> EntryId {
        let id = entry.id();
        debug!(
            entry_id = %id,
            player = entry.name(),
            rating = entry.rating(),
            level = entry.level(),
            range = entry.range(),
            "Added player to pool"
        );
        self.entries.push(entry);
        id
    }

    /// Every pool entry eligible to be matched against `player`
    ///
    /// Results keep insertion order. The queried entry itself is never
    /// returned, even when `player` is a clone of a pool entry.
    pub fn find_opponents(&self, player: &QueuedPlayer) -> Vec<&QueuedPlayer> {
        let opponents: Vec<&QueuedPlayer> = self
            .entries
            .iter()
            .filter(|candidate| is_eligible_opponent(player, candidate))
            .collect();

        debug!(
            player = player.name(),
            band = ?player.level_band(),
            pool_size = self.entries.len(),
            found = opponents.len(),
            "Searched pool for opponents"
        );

        opponents
    }

    /// Remove an entry, e.g. once it has been matched or has left
    pub fn remove(&mut self, id: EntryId) -> Option<QueuedPlayer> {
        let index = self.entries.iter().position(|entry| entry.id() == id)?;
        let removed = self.entries.remove(index);
        debug!(entry_id = %id, player = removed.name(), "Removed player from pool");
        Some(removed)
    }

    pub fn get(&self, id: EntryId) -> Option<&QueuedPlayer> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Mutable access to an entry, e.g. to widen its range
    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut QueuedPlayer> {
        self.entries.iter_mut().find(|entry| entry.id() == id)
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[QueuedPlayer] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QueuedPlayer> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MatchmakingPool {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a MatchmakingPool {
    type Item = &'a QueuedPlayer;
    type IntoIter = std::slice::Iter<'a, QueuedPlayer>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
