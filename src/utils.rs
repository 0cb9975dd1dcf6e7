//! Utility functions shared by the rating and matchmaking code

use crate::types::{EntryId, LEVEL_WIDTH};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a new unique pool entry ID
pub fn generate_entry_id() -> EntryId {
    Uuid::new_v4()
}

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Bucket a rating into its matchmaking level (hundred-point band)
///
/// Halves round away from zero, so 450.0 is level 5 and 449.9 is level 4.
pub fn rating_level(rating: f64) -> i64 {
    (rating / f64::from(LEVEL_WIDTH)).round() as i64
}

/// Number of levels a search range (in rating points) reaches above a player
///
/// Partial levels count, so any non-zero range reaches at least one level up.
pub fn range_levels(range: u32) -> i64 {
    i64::from(range.div_ceil(LEVEL_WIDTH))
}

/// Clamp a rating to the non-negative domain
pub fn clamp_rating(rating: f64) -> f64 {
    rating.max(0.0)
}
