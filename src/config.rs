use std::collections::HashSet;
use std::path::PathBuf;

use serenity::all::{ChannelId, RoleId};

use crate::error::{config::ConfigError, AppError};
use crate::util::parse::parse_id_from_string;

/// Directory name used under the user's config directory when `STATE_DIRECTORY` is unset.
const DEFAULT_STATE_DIRECTORY_NAME: &str = "herald";

/// Default minimum gap between two announcements, in seconds (4 hours).
const DEFAULT_MIN_ANNOUNCE_GAP_SECS: i64 = 4 * 60 * 60;

/// Process-level configuration, loaded once at startup.
pub struct Config {
    pub discord_token: String,
    pub state_directory: PathBuf,
    pub bot: BotConfig,
}

/// Immutable settings the control loop runs with.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Channel announcements are posted to.
    pub target_channel_id: ChannelId,
    /// Holders of any of these roles may issue commands.
    pub allowed_role_ids: HashSet<RoleId>,
    /// Minimum time between two successful announcements.
    pub min_announce_gap: chrono::Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// `DISCORD_TOKEN` is checked before anything else so a missing credential is
    /// always the reported error.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` if unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - A variable is missing or malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = required(&lookup, "DISCORD_TOKEN")?;

        let state_directory = match lookup("STATE_DIRECTORY").filter(|v| !v.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => default_state_directory(),
        };

        let raw_channel = required(&lookup, "TARGET_CHANNEL_ID")?;
        let target_channel_id = ChannelId::new(parse_snowflake("TARGET_CHANNEL_ID", &raw_channel)?);

        let raw_roles = required(&lookup, "ALLOWED_ROLE_IDS")?;
        let allowed_role_ids = raw_roles
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| parse_snowflake("ALLOWED_ROLE_IDS", id).map(RoleId::new))
            .collect::<Result<HashSet<_>, _>>()?;
        if allowed_role_ids.is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                name: "ALLOWED_ROLE_IDS".to_string(),
                value: raw_roles,
                reason: "at least one role ID is required".to_string(),
            }
            .into());
        }

        let min_announce_gap = match lookup("MIN_ANNOUNCE_GAP_SECS").filter(|v| !v.is_empty()) {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u32>()
                    .map_err(|e| ConfigError::InvalidEnvVar {
                        name: "MIN_ANNOUNCE_GAP_SECS".to_string(),
                        value: raw.clone(),
                        reason: e.to_string(),
                    })?;
                chrono::Duration::seconds(i64::from(secs))
            }
            None => chrono::Duration::seconds(DEFAULT_MIN_ANNOUNCE_GAP_SECS),
        };

        Ok(Self {
            discord_token,
            state_directory,
            bot: BotConfig {
                target_channel_id,
                allowed_role_ids,
                min_announce_gap,
            },
        })
    }
}

fn required<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_snowflake(name: &str, value: &str) -> Result<u64, ConfigError> {
    parse_id_from_string(value)
        .map(|id| id.get())
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

fn default_state_directory() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join(DEFAULT_STATE_DIRECTORY_NAME),
        None => {
            tracing::warn!(
                "Bot could not get the user's config directory. It will use the current directory instead."
            );
            PathBuf::from(".").join(DEFAULT_STATE_DIRECTORY_NAME)
        }
    }
}
