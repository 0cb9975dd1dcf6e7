//! Elo Lobby - skill ratings and level-band matchmaking
//!
//! This crate provides an Elo rating model with per-format update speed
//! (standard and blitz) and a matchmaking pool that groups waiting players
//! into compatible opponents by hundred-point rating levels.

pub mod config;
pub mod error;
pub mod lobby;
pub mod rating;
pub mod roster;
pub mod session;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{MatchmakingError, Result};
pub use types::*;

// Re-export key components
pub use lobby::{MatchmakingPool, QueuedPlayer, SharedMatchmakingPool};
pub use rating::{settle_match, Ratable, RatedPlayer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
