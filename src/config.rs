use std::path::{Path, PathBuf};
use std::str::FromStr;

use ratatui::style::Color;

use crate::error::ConfigError;
use crate::game::Player;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub logging: LoggingConfig,
}

/// Where [`AppConfig::load_or_default`] got its values from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// The file was missing.
    Defaults,
}

/// How each side is shown on screen.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub first: PlayerStyle,
    pub second: PlayerStyle,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerStyle {
    /// Shown in the turn indicator and result message.
    pub name: String,
    /// Any colour ratatui can parse: a name ("magenta", "lightgreen"),
    /// an ANSI index, or "#rrggbb".
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Log destination. Logging is off when unset since the terminal belongs
    /// to the UI.
    pub file: Option<PathBuf>,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            first: PlayerStyle {
                name: "Purple".into(),
                color: "magenta".into(),
            },
            second: PlayerStyle {
                name: "Lime".into(),
                color: "lightgreen".into(),
            },
        }
    }
}

impl PlayersConfig {
    pub fn style(&self, player: Player) -> &PlayerStyle {
        match player {
            Player::First => &self.first,
            Player::Second => &self.second,
        }
    }
}

impl PlayerStyle {
    /// The configured colour. Falls back to white for values that fail to
    /// parse, which [`AppConfig::validate`] rejects up front.
    pub fn color(&self) -> Color {
        Color::from_str(&self.color).unwrap_or(Color::White)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".into(),
            file: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist. The returned [`ConfigSource`] tells the caller which
    /// happened, so it can warn before the terminal is taken over.
    pub fn load_or_default(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if path.exists() {
            Ok((Self::load(path)?, ConfigSource::File(path.to_path_buf())))
        } else {
            Ok((Self::default(), ConfigSource::Defaults))
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, style) in [("first", &self.players.first), ("second", &self.players.second)] {
            if style.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "players.{key}.name must not be empty"
                )));
            }
            if Color::from_str(&style.color).is_err() {
                return Err(ConfigError::Validation(format!(
                    "players.{key}.color '{}' is not a colour",
                    style.color
                )));
            }
        }

        let (first, second) = (&self.players.first, &self.players.second);
        if first.name.eq_ignore_ascii_case(&second.name) {
            return Err(ConfigError::Validation(
                "players must have different names".into(),
            ));
        }
        if first.color() == second.color() {
            return Err(ConfigError::Validation(
                "players must have different colours".into(),
            ));
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.level must not be empty".into(),
            ));
        }
        if let Err(e) = tracing_subscriber::EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is invalid: {e}",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
