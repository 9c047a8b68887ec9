//! Informational topic summaries for `/about` and `/help`.
//!
//! Lookups never fail from the caller's point of view: any network, status
//! or parse problem yields [`SummaryOutcome::Fallback`] carrying a canned
//! text and the reason, so the user always gets an answer.

use std::time::Duration;

use async_trait::async_trait;
use indoc::indoc;
use select::document::Document;
use select::predicate::Name;
use thiserror::Error;

use crate::config;
use crate::error::AppResult;

/// Topic shown by `/about`
pub const ABOUT_TOPIC: &str = "Polycystic ovary syndrome";

/// Topic shown by `/help`
pub const HELP_TOPIC: &str = "PCOS management";

/// Appended to every fetched summary
pub const DISCLAIMER: &str = "\n\n⚠️ Not medical advice.";

/// Shown whenever a lookup fails
pub const FALLBACK_TEXT: &str = indoc! {"
    PCOS is a hormonal disorder affecting reproductive-age women.

    Symptoms include irregular periods, acne, facial hair, and weight gain.

    ⚠️ Not medical advice."};

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("HTTP request failed with status: {0}")]
    Status(reqwest::StatusCode),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error("no paragraph longer than {} characters", config::lookup::MIN_PARAGRAPH_CHARS)]
    NoParagraph,
}

/// Result of a lookup: either fetched text or the fallback with its cause
#[derive(Debug)]
pub enum SummaryOutcome {
    Fetched(String),
    Fallback { text: String, reason: LookupError },
}

impl SummaryOutcome {
    pub fn fallback(reason: LookupError) -> Self {
        SummaryOutcome::Fallback {
            text: FALLBACK_TEXT.to_string(),
            reason,
        }
    }

    /// The text to show the user, whichever way it was produced
    pub fn text(&self) -> &str {
        match self {
            SummaryOutcome::Fetched(text) => text,
            SummaryOutcome::Fallback { text, .. } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            SummaryOutcome::Fetched(text) => text,
            SummaryOutcome::Fallback { text, .. } => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, SummaryOutcome::Fallback { .. })
    }
}

/// Source of short informational texts about a topic
#[async_trait]
pub trait TopicSummaryProvider: Send + Sync {
    async fn summary(&self, topic: &str) -> SummaryOutcome;
}

/// Picks the first paragraph long enough to be an article lead.
///
/// The paragraph is trimmed, cut to [`config::lookup::MAX_SUMMARY_CHARS`]
/// characters and followed by [`DISCLAIMER`].
pub fn extract_summary(html: &str) -> Option<String> {
    let document = Document::from(html);

    document
        .find(Name("p"))
        .map(|node| node.text().trim().to_string())
        .find(|text| text.chars().count() > config::lookup::MIN_PARAGRAPH_CHARS)
        .map(|text| {
            let mut summary: String = text.chars().take(config::lookup::MAX_SUMMARY_CHARS).collect();
            summary.push_str(DISCLAIMER);
            summary
        })
}

/// Fetches article leads from Wikipedia (or any base URL serving HTML)
#[derive(Debug, Clone)]
pub struct WikipediaSummary {
    client: reqwest::Client,
    base_url: String,
}

impl WikipediaSummary {
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        Self::with_timeout(base_url, config::lookup::timeout())
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(config::lookup::USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Uses `WIKI_BASE_URL`
    pub fn from_config() -> AppResult<Self> {
        Self::new(config::WIKI_BASE_URL.as_str())
    }

    /// Article URL for a topic: spaces become underscores
    pub fn article_url(&self, topic: &str) -> String {
        format!("{}{}", self.base_url, topic.replace(' ', "_"))
    }

    async fn fetch(&self, topic: &str) -> Result<String, LookupError> {
        let resp = self.client.get(self.article_url(topic)).send().await?;

        if !resp.status().is_success() {
            return Err(LookupError::Status(resp.status()));
        }

        let body = resp.text().await?;
        extract_summary(&body).ok_or(LookupError::NoParagraph)
    }
}

#[async_trait]
impl TopicSummaryProvider for WikipediaSummary {
    async fn summary(&self, topic: &str) -> SummaryOutcome {
        match self.fetch(topic).await {
            Ok(text) => SummaryOutcome::Fetched(text),
            Err(e) => {
                log::warn!("Topic lookup for {:?} failed, using fallback: {}", topic, e);
                SummaryOutcome::fallback(e)
            }
        }
    }
}
