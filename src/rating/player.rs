//! Rated players and the shared rating capability
//!
//! `Ratable` is the capability every participant exposes: read access to a
//! name and a rating, plus an in-place update after a match. `RatedPlayer`
//! implements it for the competing variants; the queued snapshot in
//! `lobby::queued` implements it as a non-competing player.

use crate::error::Result;
use crate::rating::elo;
use crate::types::RatingVariant;
use crate::utils::clamp_rating;
use serde::Serialize;
use tracing::debug;

/// Capability shared by every player representation
pub trait Ratable: Send + Sync + std::fmt::Debug {
    /// Immutable player name
    fn name(&self) -> &str;

    /// Current rating
    fn rating(&self) -> f64;

    /// Update this player's rating after a match against `opponent`
    ///
    /// # Arguments
    /// * `opponent` - The other side of the match; its current rating is read
    /// * `result` - 1.0 for a win, 0.0 for a loss, fractional values allowed
    fn update_rating_against(&mut self, opponent: &dyn Ratable, result: f64) -> Result<()>;
}

/// A competing player with a variant-specific update rule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatedPlayer {
    name: String,
    rating: f64,
    variant: RatingVariant,
}

impl RatedPlayer {
    /// Create a player starting at its variant's initial rating
    pub fn new(name: impl Into<String>, variant: RatingVariant) -> Self {
        Self {
            name: name.into(),
            rating: variant.initial_rating(),
            variant,
        }
    }

    /// Create a standard player at the default 400.0
    pub fn standard(name: impl Into<String>) -> Self {
        Self::new(name, RatingVariant::Standard)
    }

    /// Create a standard player with a caller-supplied rating
    ///
    /// Negative ratings are clamped to zero.
    pub fn standard_with_rating(name: impl Into<String>, rating: f64) -> Self {
        Self {
            name: name.into(),
            rating: clamp_rating(rating),
            variant: RatingVariant::Standard,
        }
    }

    /// Create a blitz player; blitz always starts at 1200.0
    pub fn blitz(name: impl Into<String>) -> Self {
        Self::new(name, RatingVariant::Blitz)
    }

    pub fn variant(&self) -> RatingVariant {
        self.variant
    }

    pub fn k_factor(&self) -> f64 {
        self.variant.k_factor()
    }

    /// Expected score of this player against `opponent`
    pub fn expected_score_against(&self, opponent: &dyn Ratable) -> f64 {
        elo::expected_score(self.rating, opponent.rating())
    }

    /// Apply a precomputed delta; used when both sides were scored from snapshots
    pub(crate) fn apply_delta(&mut self, delta: f64) {
        self.rating += delta;
    }
}

impl Ratable for RatedPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn rating(&self) -> f64 {
        self.rating
    }

    fn update_rating_against(&mut self, opponent: &dyn Ratable, result: f64) -> Result<()> {
        let old_rating = self.rating;
        let delta = elo::rating_delta(self.k_factor(), old_rating, opponent.rating(), result);
        self.rating += delta;

        debug!(
            player = %self.name,
            opponent = opponent.name(),
            variant = %self.variant,
            result,
            old_rating,
            new_rating = self.rating,
            "Updated rating"
        );

        Ok(())
    }
}
