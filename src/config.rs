use std::collections::HashSet;

use crate::error::{config::ConfigError, AppError};

/// Public price endpoint queried by the `bitcoin` command.
const BITCOIN_PRICE_URL: &str = "https://api.coindesk.com/v1/bpi/currentprice/BTC.json";

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,
    pub prefix: String,
    pub application_id: u64,
    pub permissions: u64,

    pub owners: HashSet<u64>,
    pub support_guild_url: Option<String>,
    pub sync_commands_globally: bool,

    pub bitcoin_price_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            prefix: required("PREFIX")?,
            application_id: parse_u64("APPLICATION_ID", &required("APPLICATION_ID")?)?,
            permissions: parse_u64("PERMISSIONS_INTEGER", &required("PERMISSIONS_INTEGER")?)?,
            owners: parse_owners(&required("OWNERS")?)?,
            support_guild_url: std::env::var("SUPPORT_GUILD_URL").ok(),
            sync_commands_globally: match std::env::var("SYNC_COMMANDS_GLOBALLY") {
                Ok(value) => parse_bool("SYNC_COMMANDS_GLOBALLY", &value)?,
                Err(_) => false,
            },
            bitcoin_price_url: BITCOIN_PRICE_URL.to_string(),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_u64(name: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

/// Parses a comma-separated list of Discord user IDs into the owners set.
fn parse_owners(value: &str) -> Result<HashSet<u64>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| parse_u64("OWNERS", id))
        .collect()
}
