//! Environment-based bot configuration.
//!
//! Two values are read once at startup: the bot token, which is required, and
//! the target channel id, which selects the operating mode. When the channel
//! id is absent the bot runs in discovery mode and lists the channels it can
//! see instead of moderating.

use serenity::all::ChannelId;

use crate::error::config::ConfigError;

/// Environment variable holding the Discord bot token.
pub const DISCORD_BOT_TOKEN: &str = "DISCORD_BOT_TOKEN";

/// Environment variable holding the id of the channel to moderate.
pub const DISCORD_CHANNEL_ID: &str = "DISCORD_CHANNEL_ID";

/// Operating mode selected by the presence of a target channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No channel configured: list guilds and text channels, then exit.
    Discovery,
    /// Delete imageless messages in the given channel until interrupted.
    Moderation(ChannelId),
}

pub struct Config {
    pub discord_bot_token: String,
    pub discord_channel_id: Option<ChannelId>,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// A `.env` file in the working directory is applied first if present;
    /// variables already set in the environment take precedence over it.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as unset ones.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value for a variable name, if any
    ///
    /// # Returns
    /// - `Ok(Config)` - Token present and valid, channel id absent or a valid snowflake
    /// - `Err(ConfigError::MissingEnvVar)` - No bot token
    /// - `Err(ConfigError::InvalidToken)` - Token is not structurally valid
    /// - `Err(ConfigError::InvalidChannelId)` - Channel id is set but not a snowflake
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let discord_bot_token = non_empty(DISCORD_BOT_TOKEN)
            .ok_or_else(|| ConfigError::MissingEnvVar(DISCORD_BOT_TOKEN.to_string()))?;

        serenity::utils::token::validate(&discord_bot_token).map_err(ConfigError::InvalidToken)?;

        let discord_channel_id = non_empty(DISCORD_CHANNEL_ID)
            .map(|value| parse_channel_id(&value))
            .transpose()?;

        Ok(Self {
            discord_bot_token,
            discord_channel_id,
        })
    }

    pub fn mode(&self) -> Mode {
        match self.discord_channel_id {
            Some(channel_id) => Mode::Moderation(channel_id),
            None => Mode::Discovery,
        }
    }
}

fn parse_channel_id(value: &str) -> Result<ChannelId, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .map(ChannelId::new)
        .ok_or_else(|| ConfigError::InvalidChannelId {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const TOKEN: &str = "Mjg4NzYwMjQxMzYzODc3ODg4.C_ikow.j3VupLBuE1QWZng3TMGH0z_UAwg";

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    /// Tests loading configuration without a bot token.
    ///
    /// Verifies that a missing token is reported by name and that no config
    /// is produced, so no client can be constructed afterwards.
    ///
    /// Expected: Err(MissingEnvVar("DISCORD_BOT_TOKEN"))
    #[test]
    fn fails_without_token() {
        let result = Config::from_lookup(lookup(&[(DISCORD_CHANNEL_ID, "123")]));

        match result {
            Err(ConfigError::MissingEnvVar(name)) => assert_eq!(name, DISCORD_BOT_TOKEN),
            _ => panic!("expected missing token error"),
        }
    }

    /// Tests that an empty token is treated as missing.
    ///
    /// Expected: Err(MissingEnvVar)
    #[test]
    fn treats_empty_token_as_missing() {
        let result = Config::from_lookup(lookup(&[(DISCORD_BOT_TOKEN, "")]));

        assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
    }

    /// Tests rejecting a structurally invalid token.
    ///
    /// Expected: Err(InvalidToken)
    #[test]
    fn rejects_malformed_token() {
        let result = Config::from_lookup(lookup(&[(DISCORD_BOT_TOKEN, "not-a-token")]));

        assert!(matches!(result, Err(ConfigError::InvalidToken(_))));
    }

    /// Tests selecting discovery mode when no channel is configured.
    ///
    /// Expected: Ok with Mode::Discovery
    #[test]
    fn selects_discovery_without_channel() {
        let config = Config::from_lookup(lookup(&[(DISCORD_BOT_TOKEN, TOKEN)])).unwrap();

        assert_eq!(config.discord_bot_token, TOKEN);
        assert_eq!(config.mode(), Mode::Discovery);
    }

    /// Tests that an empty channel id selects discovery mode rather than failing.
    ///
    /// Expected: Ok with Mode::Discovery
    #[test]
    fn selects_discovery_with_empty_channel() {
        let config = Config::from_lookup(lookup(&[
            (DISCORD_BOT_TOKEN, TOKEN),
            (DISCORD_CHANNEL_ID, ""),
        ]))
        .unwrap();

        assert_eq!(config.mode(), Mode::Discovery);
    }

    /// Tests selecting moderation mode for a configured channel.
    ///
    /// Expected: Ok with Mode::Moderation for the parsed channel id
    #[test]
    fn selects_moderation_with_channel() {
        let config = Config::from_lookup(lookup(&[
            (DISCORD_BOT_TOKEN, TOKEN),
            (DISCORD_CHANNEL_ID, "987654321098765432"),
        ]))
        .unwrap();

        assert_eq!(
            config.mode(),
            Mode::Moderation(ChannelId::new(987654321098765432))
        );
    }

    /// Tests rejecting a channel id that is not a snowflake.
    ///
    /// Expected: Err(InvalidChannelId) carrying the raw value
    #[test]
    fn rejects_non_numeric_channel() {
        let result = Config::from_lookup(lookup(&[
            (DISCORD_BOT_TOKEN, TOKEN),
            (DISCORD_CHANNEL_ID, "general"),
        ]));

        match result {
            Err(ConfigError::InvalidChannelId { value }) => assert_eq!(value, "general"),
            _ => panic!("expected invalid channel id error"),
        }
    }

    /// Tests rejecting a zero channel id, which serenity cannot represent.
    ///
    /// Expected: Err(InvalidChannelId)
    #[test]
    fn rejects_zero_channel() {
        let result = Config::from_lookup(lookup(&[
            (DISCORD_BOT_TOKEN, TOKEN),
            (DISCORD_CHANNEL_ID, "0"),
        ]));

        assert!(matches!(result, Err(ConfigError::InvalidChannelId { .. })));
    }
}
