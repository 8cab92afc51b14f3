//! Optional gameplay tuning loaded from a RON file
//!
//! The shooter runs fine with no file at all; `wordfall.ron` next to the
//! binary can override pacing and the word pool. Malformed files are
//! rejected with a logged error and the defaults are used instead, so a bad
//! config can never keep the game from starting.

use crate::game::words::DEFAULT_WORDS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tuning knobs for a game session. Every field has a sensible default;
/// a config file only needs the fields it wants to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Per-tick descent rate at level 1.
    pub start_speed: f32,
    /// Added to the descent rate on each level advance.
    pub speed_step: f32,
    /// Enemy count at level 1.
    pub start_enemies: usize,
    /// Added to the enemy count on each level advance.
    pub enemies_step: usize,
    /// Points awarded per destroyed word.
    pub score_bonus: u32,
    /// Seconds the between-level banner is shown.
    pub transition_time: f32,
    /// Clearing this level wins the game.
    pub final_level: u32,
    /// Word pool; enemies draw from it cyclically after a shuffle.
    pub words: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_speed: 0.002,
            speed_step: 0.0005,
            start_enemies: 5,
            enemies_step: 2,
            score_bonus: 10,
            transition_time: 2.0,
            final_level: 10,
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

/// Reject configs that would produce a degenerate or unplayable session.
pub fn validate_config(config: &GameConfig) -> Result<(), ConfigError> {
    if !config.start_speed.is_finite() || config.start_speed <= 0.0 {
        return Err(ConfigError::ValidationError(
            "start_speed must be finite and positive".to_string(),
        ));
    }
    if !config.speed_step.is_finite() || config.speed_step < 0.0 {
        return Err(ConfigError::ValidationError(
            "speed_step must be finite and non-negative".to_string(),
        ));
    }
    if config.start_enemies == 0 {
        return Err(ConfigError::ValidationError(
            "start_enemies must be at least 1".to_string(),
        ));
    }
    if !config.transition_time.is_finite() || config.transition_time <= 0.0 {
        return Err(ConfigError::ValidationError(
            "transition_time must be finite and positive".to_string(),
        ));
    }
    if config.final_level == 0 {
        return Err(ConfigError::ValidationError(
            "final_level must be at least 1".to_string(),
        ));
    }
    if config.words.is_empty() {
        return Err(ConfigError::ValidationError(
            "word pool must not be empty".to_string(),
        ));
    }
    if let Some(bad) = config.words.iter().find(|w| w.is_empty()) {
        return Err(ConfigError::ValidationError(format!(
            "word pool contains an empty word: {:?}",
            bad
        )));
    }
    Ok(())
}

/// Load and validate a config from a RON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GameConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: GameConfig = ron::from_str(&contents)?;
    validate_config(&config)?;
    Ok(config)
}

/// Load the config if the file exists, otherwise fall back to defaults.
/// A present-but-broken file logs the error and still falls back.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> GameConfig {
    let path = path.as_ref();
    match load_config(path) {
        Ok(config) => {
            println!("Loaded config from {}", path.display());
            config
        }
        Err(ConfigError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            GameConfig::default()
        }
        Err(e) => {
            eprintln!("Ignoring config {}: {}", path.display(), e);
            GameConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_config(&GameConfig::default()).is_ok());
    }

    #[test]
    fn test_partial_ron_overrides() {
        let config: GameConfig = ron::from_str("(start_enemies: 3, final_level: 2)").unwrap();
        assert_eq!(config.start_enemies, 3);
        assert_eq!(config.final_level, 2);
        // Untouched fields keep their defaults
        assert_eq!(config.score_bonus, 10);
        assert!(!config.words.is_empty());
    }

    #[test]
    fn test_rejects_empty_word_pool() {
        let config = GameConfig {
            words: Vec::new(),
            ..GameConfig::default()
        };
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_rejects_zero_speed() {
        let config = GameConfig {
            start_speed: 0.0,
            ..GameConfig::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = load_or_default("definitely/not/here.ron");
        assert_eq!(config.start_enemies, GameConfig::default().start_enemies);
    }
}
