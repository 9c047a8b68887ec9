//! PCOS Care core - questionnaire engine without any Telegram types
//!
//! # Module Structure
//!
//! - `assessment`: answer model, conversation state store, risk scorer
//! - `replies`: transport-independent replies and the questionnaire driver
//! - `lookup`: informational topic summaries with a canned fallback
//! - `config`, `error`, `logging`: environment, error types, logger setup

pub mod assessment;
pub mod config;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod markdown;
pub mod replies;

// Re-export commonly used types for convenience
pub use assessment::{score, Answers, ConversationStateStore, RiskCategory, ScoreResult, Stage, UserKey};
pub use error::{AppError, AppResult};
pub use logging::{init_logger, log_startup_configuration};
pub use lookup::{SummaryOutcome, TopicSummaryProvider, WikipediaSummary};
pub use replies::{Questionnaire, Reply};
