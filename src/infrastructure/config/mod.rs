//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;

/// Bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    #[serde(default)]
    pub cooldowns: CooldownConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    /// Login of the bot account, used to drop its own echoed lines
    pub username: String,
    #[serde(default = "default_prefix")]
    pub prefix: String,
    pub channels: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CooldownConfig {
    /// Period of the expired-entry sweep; 0 disables it
    pub sweep_interval_seconds: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LoggingConfig {
    pub debug: bool,
}

fn default_prefix() -> String {
    "!".to_string()
}

impl Default for CooldownConfig {
    fn default() -> Self {
        Self {
            sweep_interval_seconds: 60,
        }
    }
}

/// Defaults leave the login and channels unset; `validate` rejects them
impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                username: String::new(),
                prefix: default_prefix(),
                channels: Vec::new(),
            },
            cooldowns: CooldownConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Template written by `init-config`, with placeholder login and channel
    pub fn example() -> Self {
        let mut config = Self::default();
        config.bot.username = "your_bot_login".to_string();
        config.bot.channels = vec!["#your_channel".to_string()];
        config
    }

    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Defaults overridden by the environment and an optional `.env` file
    pub fn load_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("Failed to read .env: {}", e);
            }
        }

        let mut config = Config::default();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Apply overrides from a variable lookup
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(username) = lookup("BOT_USERNAME") {
            self.bot.username = username.trim().to_string();
        }

        if let Some(channels) = lookup("BOT_CHANNELS") {
            self.bot.channels = parse_channels(&channels);
        }

        if let Some(prefix) = lookup("COMMAND_PREFIX") {
            if !prefix.is_empty() {
                self.bot.prefix = prefix;
            }
        }

        if let Some(debug) = lookup("DEBUG") {
            self.logging.debug = debug.eq_ignore_ascii_case("true");
        }
    }

    /// Reject settings the bot cannot start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot.username.trim().is_empty() {
            return Err(ConfigError::MissingField("bot.username".to_string()));
        }

        if self.bot.channels.is_empty() {
            return Err(ConfigError::MissingField("bot.channels".to_string()));
        }

        if self.bot.prefix.is_empty() || self.bot.prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidValue(format!(
                "bot.prefix must be non-empty and contain no whitespace: {:?}",
                self.bot.prefix
            )));
        }

        Ok(())
    }
}

/// Split a comma separated channel list, dropping empty entries
pub fn parse_channels(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_default_requires_login_and_channels() {
        let config = Config::default();
        assert_eq!(config.bot.prefix, "!");
        assert_eq!(config.cooldowns.sweep_interval_seconds, 60);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingField(field)) if field == "bot.username"
        ));
    }

    #[test]
    fn test_example_is_valid() {
        assert!(Config::example().validate().is_ok());
    }

    #[test]
    fn test_unset_environment_fails_validation() {
        let mut config = Config::default();
        config.apply_env(env(&[("COMMAND_PREFIX", "?")]));
        assert!(matches!(config.validate(), Err(ConfigError::MissingField(_))));

        config.apply_env(env(&[("BOT_USERNAME", "envbot")]));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingField(field)) if field == "bot.channels"
        ));

        config.apply_env(env(&[("BOT_CHANNELS", "#envchan")]));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_yaml_with_defaults() {
        let config = Config::from_yaml(
            "bot:\n  username: mybot\n  channels:\n    - '#one'\n    - '#two'\n",
        )
        .unwrap();

        assert_eq!(config.bot.username, "mybot");
        assert_eq!(config.bot.prefix, "!");
        assert_eq!(config.bot.channels, vec!["#one", "#two"]);
        assert_eq!(config.cooldowns.sweep_interval_seconds, 60);
        assert!(!config.logging.debug);
    }

    #[test]
    fn test_from_yaml_kebab_case() {
        let config = Config::from_yaml(
            "bot:\n  username: mybot\n  prefix: '?'\n  channels: ['#a']\n\
             cooldowns:\n  sweep-interval-seconds: 0\n\
             logging:\n  debug: true\n",
        )
        .unwrap();

        assert_eq!(config.bot.prefix, "?");
        assert_eq!(config.cooldowns.sweep_interval_seconds, 0);
        assert!(config.logging.debug);
    }

    #[test]
    fn test_from_yaml_rejects_garbage() {
        assert!(matches!(
            Config::from_yaml("bot: [1, 2"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_yaml_round_trip_of_example() {
        let yaml = serde_yaml::to_string(&Config::example()).unwrap();
        assert!(yaml.contains("sweep-interval-seconds"));
        let config = Config::from_yaml(&yaml).unwrap();
        assert_eq!(config.bot.username, "your_bot_login");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_apply_env() {
        let mut config = Config::default();
        config.apply_env(env(&[
            ("BOT_USERNAME", " envbot "),
            ("BOT_CHANNELS", "#a, #b,,  "),
            ("COMMAND_PREFIX", "?"),
            ("DEBUG", "TRUE"),
        ]));

        assert_eq!(config.bot.username, "envbot");
        assert_eq!(config.bot.channels, vec!["#a", "#b"]);
        assert_eq!(config.bot.prefix, "?");
        assert!(config.logging.debug);
    }

    #[test]
    fn test_apply_env_empty_prefix_keeps_default() {
        let mut config = Config::default();
        config.apply_env(env(&[("COMMAND_PREFIX", "")]));
        assert_eq!(config.bot.prefix, "!");
    }

    #[test]
    fn test_validate() {
        let mut config = Config::example();
        config.bot.channels.clear();
        assert!(matches!(config.validate(), Err(ConfigError::MissingField(_))));

        let mut config = Config::example();
        config.bot.username = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::MissingField(_))));

        let mut config = Config::example();
        config.bot.prefix = "! ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue(_))));
    }
}
