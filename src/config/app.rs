//! Main application configuration
//!
//! This module defines the configuration for the elo-lobby host program,
//! including TOML file and environment variable loading and validation.

use crate::types::{DEFAULT_SEARCH_RANGE, STANDARD_INITIAL_RATING};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub rating: RatingSettings,
    pub matchmaking: MatchmakingSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Rating settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingSettings {
    /// Rating given to standard players whose roster entry has none
    pub standard_initial_rating: f64,
}

/// Matchmaking-specific settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchmakingSettings {
    /// Search range for players queued without an explicit one
    pub default_range: i64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "elo-lobby".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            standard_initial_rating: STANDARD_INITIAL_RATING,
        }
    }
}

impl Default for MatchmakingSettings {
    fn default() -> Self {
        Self {
            default_range: i64::from(DEFAULT_SEARCH_RANGE),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(name) = env::var("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.service.log_level = log_level;
        }
        if let Ok(rating) = env::var("STANDARD_INITIAL_RATING") {
            config.rating.standard_initial_rating = rating
                .parse()
                .map_err(|_| anyhow!("Invalid STANDARD_INITIAL_RATING value: {}", rating))?;
        }
        if let Ok(range) = env::var("DEFAULT_RANGE") {
            config.matchmaking.default_range = range
                .parse()
                .map_err(|_| anyhow!("Invalid DEFAULT_RANGE value: {}", range))?;
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file; missing keys use defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Default range as the pool's unsigned range; call after validation
    pub fn default_range(&self) -> Result<u32> {
        u32::try_from(self.matchmaking.default_range).map_err(|_| {
            anyhow!(
                "Default range out of bounds: {}",
                self.matchmaking.default_range
            )
        })
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    // Validate rating settings
    let rating = config.rating.standard_initial_rating;
    if !rating.is_finite() || rating < 0.0 {
        return Err(anyhow!(
            "Standard initial rating must be a non-negative number, got {}",
            rating
        ));
    }

    // Validate matchmaking settings
    if config.matchmaking.default_range < 0 {
        return Err(anyhow!(
            "Default range must be non-negative, got {}",
            config.matchmaking.default_range
        ));
    }
    if config.matchmaking.default_range > i64::from(u32::MAX) {
        return Err(anyhow!(
            "Default range must not exceed {}, got {}",
            u32::MAX,
            config.matchmaking.default_range
        ));
    }

    Ok(())
}
