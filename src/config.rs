use serenity::all::GuildId;

use crate::error::{config::ConfigError, AppError};

const DISCORD_TOKEN: &str = "DISCORD_TOKEN";
const GUILD_ID: &str = "GUILD_ID";

pub struct Config {
    pub discord_bot_token: String,

    /// Registers commands in this guild only, which applies instantly while
    /// global registration can take a while to propagate.
    pub command_guild_id: Option<GuildId>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any source of variables.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, `None` when unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let discord_bot_token = lookup(DISCORD_TOKEN)
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(DISCORD_TOKEN.to_string()))?;

        let command_guild_id = match lookup(GUILD_ID).filter(|id| !id.trim().is_empty()) {
            Some(value) => Some(parse_guild_id(value)?),
            None => None,
        };

        Ok(Self {
            discord_bot_token,
            command_guild_id,
        })
    }
}

fn parse_guild_id(value: String) -> Result<GuildId, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(id) if id != 0 => Ok(GuildId::new(id)),
        _ => Err(ConfigError::InvalidEnvVar {
            name: GUILD_ID.to_string(),
            value,
        }),
    }
}
