//! Handler types and dependencies

use std::sync::Arc;

use pcoscore::{Questionnaire, TopicSummaryProvider};

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub questionnaire: Arc<Questionnaire>,
    pub topics: Arc<dyn TopicSummaryProvider>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(questionnaire: Arc<Questionnaire>, topics: Arc<dyn TopicSummaryProvider>) -> Self {
        Self { questionnaire, topics }
    }
}
