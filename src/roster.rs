//! Player rosters for the host program
//!
//! A roster lists the players to enqueue and, optionally, finished matches
//! whose results should be applied afterwards. Rosters are read from TOML.

use crate::config::RatingSettings;
use crate::error::{MatchmakingError, Result};
use crate::rating::player::RatedPlayer;
use crate::types::{MatchOutcome, RatingVariant};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// One player to create and enqueue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterPlayer {
    pub name: String,
    #[serde(default = "default_variant")]
    pub variant: RatingVariant,
    /// Starting rating; standard players only
    #[serde(default)]
    pub rating: Option<f64>,
    /// Search range; falls back to the configured default
    #[serde(default)]
    pub range: Option<i64>,
}

fn default_variant() -> RatingVariant {
    RatingVariant::Standard
}

/// A finished match, reported from `player`'s side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterMatch {
    pub player: String,
    pub opponent: String,
    pub outcome: MatchOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub players: Vec<RosterPlayer>,
    #[serde(default)]
    pub matches: Vec<RosterMatch>,
}

impl Roster {
    /// Greg (standard, 400) and Jade (blitz) with default ranges
    pub fn demo() -> Self {
        Self {
            players: vec![
                RosterPlayer {
                    name: "Greg".to_string(),
                    variant: RatingVariant::Standard,
                    rating: Some(400.0),
                    range: None,
                },
                RosterPlayer {
                    name: "Jade".to_string(),
                    variant: RatingVariant::Blitz,
                    rating: None,
                    range: None,
                },
            ],
            matches: Vec::new(),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster file {}", path.display()))?;

        Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid roster file {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let roster: Self = toml::from_str(contents)?;
        roster.validate()?;
        Ok(roster)
    }

    /// Reject rosters that cannot be turned into players and matches
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for player in &self.players {
            if player.name.is_empty() {
                return Err(configuration_error("Player names cannot be empty"));
            }
            if !seen.insert(player.name.as_str()) {
                return Err(configuration_error(format!(
                    "Duplicate player name in roster: {}",
                    player.name
                )));
            }
            if player.variant == RatingVariant::Blitz && player.rating.is_some() {
                return Err(configuration_error(format!(
                    "Blitz player {} cannot set a rating; blitz always starts at {}",
                    player.name,
                    RatingVariant::Blitz.initial_rating()
                )));
            }
            if let Some(rating) = player.rating {
                if !rating.is_finite() {
                    return Err(configuration_error(format!(
                        "Rating for {} must be a finite number",
                        player.name
                    )));
                }
            }
        }

        for game in &self.matches {
            for name in [&game.player, &game.opponent] {
                if !seen.contains(name.as_str()) {
                    return Err(MatchmakingError::PlayerNotFound { name: name.clone() }.into());
                }
            }
            if game.player == game.opponent {
                return Err(MatchmakingError::InvalidArgument {
                    reason: format!("{} cannot play a match against themselves", game.player),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Build rated players in roster order
    pub fn build_players(&self, settings: &RatingSettings) -> Vec<RatedPlayer> {
        self.players
            .iter()
            .map(|entry| match entry.variant {
                RatingVariant::Standard => RatedPlayer::standard_with_rating(
                    entry.name.clone(),
                    entry.rating.unwrap_or(settings.standard_initial_rating),
                ),
                RatingVariant::Blitz => RatedPlayer::blitz(entry.name.clone()),
            })
            .collect()
    }
}

fn configuration_error(message: impl Into<String>) -> anyhow::Error {
    MatchmakingError::ConfigurationError {
        message: message.into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::player::Ratable;

    #[test]
    fn test_demo_roster() {
        let roster = Roster::demo();
        assert!(roster.validate().is_ok());

        let players = roster.build_players(&RatingSettings::default());
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].name(), "Greg");
        assert_eq!(players[0].rating(), 400.0);
        assert_eq!(players[1].variant(), RatingVariant::Blitz);
        assert_eq!(players[1].rating(), 1200.0);
    }

    #[test]
    fn test_parse_roster() {
        let roster = Roster::from_toml_str(
            r#"
            [[players]]
            name = "Ann"
            rating = 1530.0
            range = 2

            [[players]]
            name = "Bo"
            variant = "blitz"

            [[players]]
            name = "Cy"

            [[matches]]
            player = "Ann"
            opponent = "Cy"
            outcome = "draw"
            "#,
        )
        .unwrap();

        assert_eq!(roster.players.len(), 3);
        assert_eq!(roster.players[0].range, Some(2));
        assert_eq!(roster.players[1].variant, RatingVariant::Blitz);
        assert_eq!(roster.players[2].variant, RatingVariant::Standard);
        assert_eq!(roster.matches[0].outcome, MatchOutcome::Draw);

        let settings = RatingSettings {
            standard_initial_rating: 1000.0,
        };
        let players = roster.build_players(&settings);
        assert_eq!(players[0].rating(), 1530.0);
        assert_eq!(players[2].rating(), 1000.0);
    }

    #[test]
    fn test_negative_roster_rating_is_clamped() {
        let roster = Roster::from_toml_str(
            r#"
            [[players]]
            name = "Low"
            rating = -40.0
            "#,
        )
        .unwrap();

        let players = roster.build_players(&RatingSettings::default());
        assert_eq!(players[0].rating(), 0.0);
    }

    #[test]
    fn test_invalid_rosters() {
        let duplicate = r#"
            [[players]]
            name = "Ann"
            [[players]]
            name = "Ann"
        "#;
        assert!(Roster::from_toml_str(duplicate).is_err());

        let blitz_rating = r#"
            [[players]]
            name = "Bo"
            variant = "blitz"
            rating = 1500.0
        "#;
        assert!(Roster::from_toml_str(blitz_rating).is_err());

        let unknown_variant = r#"
            [[players]]
            name = "Bo"
            variant = "bullet"
        "#;
        assert!(Roster::from_toml_str(unknown_variant).is_err());

        let self_match = r#"
            [[players]]
            name = "Ann"
            [[matches]]
            player = "Ann"
            opponent = "Ann"
            outcome = "win"
        "#;
        let err = Roster::from_toml_str(self_match).unwrap_err();
        assert!(MatchmakingError::is_invalid_argument(&err));
    }

    #[test]
    fn test_match_with_unknown_player() {
        let roster = r#"
            [[players]]
            name = "Ann"
            [[matches]]
            player = "Ann"
            opponent = "Ghost"
            outcome = "loss"
        "#;
        let err = Roster::from_toml_str(roster).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MatchmakingError>(),
            Some(MatchmakingError::PlayerNotFound { name }) if name == "Ghost"
        ));
    }
}
