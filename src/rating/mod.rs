//! Elo rating system
//!
//! This module provides the rated player abstraction, the Elo update rule
//! with per-variant K-factors, and match settlement.

pub mod calculator;
pub mod elo;
pub mod player;

// Re-export commonly used types
pub use calculator::{settle_match, SettlementResult};
pub use elo::expected_score;
pub use player::{Ratable, RatedPlayer};
