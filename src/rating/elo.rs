//! Elo expected-score model
//!
//! Thin layer over the skillratings Elo implementation. The K-factor is kept
//! out of here so each rating variant can apply its own update speed.

use skillratings::elo::{expected_score as elo_expected_score, EloRating};

/// Probability that a player rated `rating` beats one rated `opponent_rating`
///
/// `1 / (1 + 10 ^ ((opponent_rating - rating) / 400))`
pub fn expected_score(rating: f64, opponent_rating: f64) -> f64 {
    let player = EloRating { rating };
    let opponent = EloRating {
        rating: opponent_rating,
    };

    let (expected, _opponent_expected) = elo_expected_score(&player, &opponent);
    expected
}

/// Rating change for one side of a match
///
/// `score` is 1.0 for a win, 0.0 for a loss; fractional scores are accepted.
pub fn rating_delta(k_factor: f64, rating: f64, opponent_rating: f64, score: f64) -> f64 {
    k_factor * (score - expected_score(rating, opponent_rating))
}
