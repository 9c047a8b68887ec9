use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

use crate::error::{AppError, AppResult};

/// Configuration constants for the bot
/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// Public base URL Telegram posts updates to
/// Read from WEBHOOK_URL environment variable
/// The webhook path (`/webhook/<token>`) is appended to it
pub static WEBHOOK_URL: Lazy<String> =
    Lazy::new(|| env::var("WEBHOOK_URL").unwrap_or_else(|_| "https://pcos-bot.onrender.com".to_string()));

/// Port for the HTTP server in webhook mode
/// Read from PORT environment variable
/// Default: 10000
pub static PORT: Lazy<u16> = Lazy::new(|| {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(10000)
});

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: app.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "app.log".to_string()));

/// Base URL for topic lookups, the topic slug is appended verbatim
/// Read from WIKI_BASE_URL environment variable
pub static WIKI_BASE_URL: Lazy<String> =
    Lazy::new(|| env::var("WIKI_BASE_URL").unwrap_or_else(|_| "https://en.wikipedia.org/wiki/".to_string()));

/// Returns the bot token or a configuration error when it is not set
pub fn require_bot_token() -> AppResult<&'static str> {
    let token = BOT_TOKEN.as_str();
    if token.is_empty() {
        return Err(AppError::Config(
            "BOT_TOKEN environment variable is not set".to_string(),
        ));
    }
    Ok(token)
}

/// Path Telegram delivers updates to, keyed by the bot token
pub fn webhook_path(token: &str) -> String {
    format!("/webhook/{}", token)
}

/// Full webhook URL: public base joined with [`webhook_path`]
pub fn webhook_url(base: &str, token: &str) -> AppResult<url::Url> {
    let url = url::Url::parse(&format!("{}{}", base.trim_end_matches('/'), webhook_path(token)))?;
    Ok(url)
}

/// Replaces every occurrence of the token so it can be logged
pub fn redact_token(text: &str, token: &str) -> String {
    if token.is_empty() {
        return text.to_string();
    }
    text.replace(token, "<redacted>")
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for Bot API calls (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Topic lookup configuration
pub mod lookup {
    use super::Duration;

    /// Timeout for a single lookup request (in seconds)
    pub const TIMEOUT_SECS: u64 = 5;

    /// Header sent with lookup requests
    pub const USER_AGENT: &str = "Mozilla/5.0";

    /// A paragraph must be longer than this (in characters) to be used
    pub const MIN_PARAGRAPH_CHARS: usize = 120;

    /// Summaries are cut to this many characters before the disclaimer
    pub const MAX_SUMMARY_CHARS: usize = 900;

    /// Lookup timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(TIMEOUT_SECS)
    }
}
