//! Logging initialization and startup diagnostics
//!
//! This module provides:
//! - Logger initialization (console + file)
//! - A configuration summary logged once at startup

use simplelog::*;
use std::fs::File;

use crate::config;
use crate::error::{AppError, AppResult};

/// Initialize logger for both console and file output
///
/// # Arguments
/// * `log_file_path` - Path to the log file
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(AppError)` - Log file could not be created or a logger is already installed
pub fn init_logger(log_file_path: &str) -> AppResult<()> {
    let log_file = File::create(log_file_path)?;

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, Config::default(), log_file),
    ])
    .map_err(|e| AppError::Logger(e.to_string()))?;

    Ok(())
}

/// Logs the effective configuration at application startup
///
/// The bot token is never printed; the webhook URL is shown with the token redacted.
pub fn log_startup_configuration(use_webhook: bool) {
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("🌸 PCOS Care configuration");
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let token = config::BOT_TOKEN.as_str();
    if token.is_empty() {
        log::error!("❌ BOT_TOKEN: not set (startup will fail)");
    } else {
        log::info!("✅ BOT_TOKEN: set");
    }

    if use_webhook {
        log::info!("📡 Mode: webhook on 0.0.0.0:{}", *config::PORT);
        match config::webhook_url(&config::WEBHOOK_URL, token) {
            Ok(url) => log::info!("   Webhook URL: {}", config::redact_token(url.as_str(), token)),
            Err(e) => log::error!("❌ WEBHOOK_URL is invalid: {}", e),
        }
    } else {
        log::info!("📡 Mode: long polling");
    }

    log::info!("📚 Topic lookups: {}", *config::WIKI_BASE_URL);
    log::info!("📝 Log file: {}", *config::LOG_FILE_PATH);
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::NamedTempFile;

    #[test]
    fn test_init_logger_creates_log_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        // A second init in the same process fails with Logger, never panics
        let first = init_logger(path);
        let second = init_logger(path);

        assert!(first.is_ok() || matches!(first, Err(AppError::Logger(_))));
        assert!(matches!(second, Err(AppError::Logger(_))));
        assert!(temp_file.path().exists());
    }

    #[test]
    fn test_init_logger_reports_unwritable_path() {
        let result = init_logger("/nonexistent-dir/pcos/app.log");
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
