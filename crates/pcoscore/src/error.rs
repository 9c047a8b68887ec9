use thiserror::Error;

/// Centralized error types for the application
///
/// Scoring and state handling never fail; these cover the plumbing around
/// them (configuration, HTTP, logging, Telegram).
///
/// # Example
///
/// ```no_run
/// use pcoscore::error::AppError;
///
/// fn handle_error(err: AppError) {
///     eprintln!("Error: {}", err);
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP/Fetch errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Telegram API errors
    #[cfg(feature = "telegram")]
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Logger could not be installed
    #[error("Logger error: {0}")]
    Logger(String),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = AppError::Config("BOT_TOKEN is not set".to_string());
        assert_eq!(err.to_string(), "Configuration error: BOT_TOKEN is not set");
    }

    #[test]
    fn test_url_error_converts() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err: AppError = parse_err.into();
        assert!(matches!(err, AppError::Url(_)));
    }
}
