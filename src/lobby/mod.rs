//! Matchmaking pool for waiting players
//!
//! This module handles queued player snapshots, level-band eligibility and
//! opponent search, plus a lock-guarded pool handle for shared use.

pub mod matching;
pub mod pool;
pub mod queued;
pub mod shared;

// Re-export commonly used types
pub use matching::{is_eligible_opponent, LevelBand};
pub use pool::MatchmakingPool;
pub use queued::QueuedPlayer;
pub use shared::SharedMatchmakingPool;
