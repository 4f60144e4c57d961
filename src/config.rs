//! Environment-backed configuration for the assistant bot.
//!
//! Everything is sourced from environment variables (usually via a `.env`
//! file). Only the bot token is mandatory; all other values have working
//! defaults so a bare `TELEGRAM_BOT_TOKEN=...` is enough to run the bot.

use std::env;

/// Default link targets baked into the menu when no override is configured.
pub const DEFAULT_TIMETABLE_URL: &str = "https://timetable.spbu.ru/GSOM";
pub const DEFAULT_LOST_AND_FOUND_URL: &str = "https://t.me/+CzTrsVUbavM5YzNi";
pub const DEFAULT_NEWS_URL: &str = "https://spbu.ru/news-events/novosti";

/// Seconds to wait before deleting the user's triggering command message.
const DEFAULT_COMMAND_CLEANUP_SECS: u64 = 30;

/// Runtime configuration assembled from the environment
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Telegram bot API token (`<bot id>:<secret>`)
    pub token: String,
    /// Link opened by the timetable button
    pub timetable_url: String,
    /// Link opened by the lost-and-found button
    pub lost_and_found_url: String,
    /// Link opened by the news button
    pub news_url: String,
    /// When set, the welcome screen is rendered as a photo card with this image
    pub welcome_photo_url: Option<String>,
    /// Path of the flat JSON session file; `None` keeps sessions in memory only
    pub session_file: Option<String>,
    /// Delay before the user's command message is deleted; 0 disables cleanup
    pub command_cleanup_secs: u64,
}

/// Fatal configuration problems detected at startup
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// `TELEGRAM_BOT_TOKEN` is not set
    MissingToken,
    /// The token does not look like `<digits>:<secret>`
    MalformedToken,
    /// An optional variable is set but cannot be parsed
    InvalidValue { key: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingToken => write!(f, "TELEGRAM_BOT_TOKEN must be set"),
            ConfigError::MalformedToken => {
                write!(f, "TELEGRAM_BOT_TOKEN must look like '<bot id>:<secret>'")
            }
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value for {key}: {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl BotConfig {
    /// Read the configuration from the environment.
    ///
    /// A missing or malformed token is fatal; every other variable falls back
    /// to a default when absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = env::var("TELEGRAM_BOT_TOKEN").map_err(|_| ConfigError::MissingToken)?;
        validate_token(&token)?;

        let command_cleanup_secs = match env::var("COMMAND_CLEANUP_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                key: "COMMAND_CLEANUP_SECS",
                value: raw,
            })?,
            Err(_) => DEFAULT_COMMAND_CLEANUP_SECS,
        };

        Ok(Self {
            token,
            timetable_url: env_or("TIMETABLE_URL", DEFAULT_TIMETABLE_URL),
            lost_and_found_url: env_or("LOST_AND_FOUND_URL", DEFAULT_LOST_AND_FOUND_URL),
            news_url: env_or("NEWS_URL", DEFAULT_NEWS_URL),
            welcome_photo_url: env::var("WELCOME_PHOTO_URL").ok().filter(|v| !v.is_empty()),
            session_file: env::var("SESSION_FILE").ok().filter(|v| !v.is_empty()),
            command_cleanup_secs,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).ok().filter(|v| !v.is_empty()).unwrap_or_else(|| default.to_string())
}

/// Check that a token has the `<numeric bot id>:<secret>` shape Telegram uses.
///
/// The secret itself is never echoed back in errors.
pub fn validate_token(token: &str) -> Result<(), ConfigError> {
    let mut parts = token.splitn(2, ':');
    match (parts.next(), parts.next()) {
        (Some(id), Some(secret))
            if !id.is_empty()
                && id.chars().all(|c| c.is_ascii_digit())
                && !secret.is_empty() =>
        {
            Ok(())
        }
        _ => Err(ConfigError::MalformedToken),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_validation_accepts_bot_api_shape() {
        assert!(validate_token("123456:AAH-abcDEF_ghi").is_ok());
        assert!(validate_token("1:x").is_ok());
    }

    #[test]
    fn test_token_validation_rejects_malformed_tokens() {
        assert!(validate_token("").is_err());
        assert!(validate_token("no-colon-here").is_err());
        assert!(validate_token(":secret-only").is_err());
        assert!(validate_token("123456:").is_err());
        assert!(validate_token("abc:secret").is_err());
    }

    #[test]
    fn test_config_error_formatting_never_leaks_secret() {
        let msg = format!("{}", ConfigError::MalformedToken);
        assert!(!msg.contains("AAH"));
        assert!(msg.contains("TELEGRAM_BOT_TOKEN"));
    }
}
