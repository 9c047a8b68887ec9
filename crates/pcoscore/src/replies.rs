//! Outbound replies and the questionnaire that produces them.
//!
//! Replies carry no chat id; the transport attaches it when sending.

use strum::IntoEnumIterator;

use crate::assessment::{score, Advance, ConversationStateStore, CycleRegularity, ScoreResult, Stage, UserKey};
use crate::markdown::{bold, escape_markdown_v2};

/// How the transport should interpret [`Reply::text`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Plain,
    /// Telegram MarkdownV2, already escaped
    MarkdownV2,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// Quick-reply options, rendered as a one-time keyboard
    pub options: Option<Vec<String>>,
    pub format: TextFormat,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: None,
            format: TextFormat::Plain,
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: None,
            format: TextFormat::MarkdownV2,
        }
    }

    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = Some(options);
        self
    }
}

/// Welcome shown by `/start`
pub fn welcome() -> Reply {
    Reply::markdown(format!(
        "🌸 {} 🌸\n\n{}",
        bold("Welcome to PCOS Care AI"),
        escape_markdown_v2(
            "/assess – PCOS risk assessment\n\
             /about – About PCOS\n\
             /help – Guidance\n\n\
             Type /assess to begin."
        )
    ))
}

/// Hint for plain text outside an assessment
pub fn not_in_assessment() -> Reply {
    Reply::plain("Type /assess to start a PCOS risk assessment, or /start for the menu.")
}

/// Prompt for the question the user now has to answer
pub fn question(stage: Stage) -> Option<Reply> {
    match stage {
        Stage::Cycle => Some(
            Reply::markdown(format!("🩺 {} Menstrual cycle?", bold("Question 1/3:")))
                .with_options(CycleRegularity::iter().map(|r| r.to_string()).collect()),
        ),
        Stage::Length => Some(Reply::plain("Enter cycle length (days):")),
        Stage::Symptoms => Some(Reply::plain("Enter symptoms (comma-separated):")),
        Stage::Done => None,
    }
}

/// Final report
pub fn report(result: &ScoreResult) -> Reply {
    Reply::markdown(format!(
        "📊 {}\n\n{}",
        bold("PCOS Risk Report"),
        escape_markdown_v2(&format!(
            "Score: {}%\nRisk: {}\n\n⚠️ Not a diagnosis.",
            result.score, result.risk
        ))
    ))
}

/// Drives assessments: owns the state store and turns answers into replies
#[derive(Debug, Default)]
pub struct Questionnaire {
    store: ConversationStateStore,
}

impl Questionnaire {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &ConversationStateStore {
        &self.store
    }

    /// Whether `user_id` has an assessment in progress
    pub fn is_active(&self, user_id: UserKey) -> bool {
        self.store.contains(user_id)
    }

    /// Starts an assessment and returns the first question
    pub fn begin(&self, user_id: UserKey) -> Reply {
        let state = self.store.start(user_id);
        log::info!("User {} started an assessment", user_id);
        question(state.stage).unwrap_or_else(welcome)
    }

    /// Drops any assessment in progress
    pub fn reset(&self, user_id: UserKey) {
        if self.store.clear(user_id) {
            log::info!("User {} abandoned an assessment", user_id);
        }
    }

    /// Feeds one answer. `None` when the user has no assessment.
    pub fn answer(&self, user_id: UserKey, text: &str) -> Option<Reply> {
        match self.store.advance(user_id, text)? {
            Advance::Next(stage) => question(stage),
            Advance::Complete(answers) => {
                let result = score(&answers);
                self.store.clear(user_id);

                if !result.defaulted.is_empty() {
                    log::debug!("User {} answers scored with defaults: {:?}", user_id, result.defaulted);
                }
                log::info!(
                    "User {} completed an assessment: score={} risk={}",
                    user_id,
                    result.score,
                    result.risk
                );

                Some(report(&result))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_question_offers_regularity_options() {
        let reply = question(Stage::Cycle).unwrap();
        assert_eq!(
            reply.options,
            Some(vec!["Regular".to_string(), "Irregular".to_string(), "None".to_string()])
        );
        assert_eq!(reply.format, TextFormat::MarkdownV2);
        assert_eq!(reply.text, "🩺 *Question 1/3:* Menstrual cycle?");
    }

    #[test]
    fn test_no_question_after_done() {
        assert_eq!(question(Stage::Done), None);
    }

    #[test]
    fn test_welcome_is_escaped() {
        let reply = welcome();
        assert!(reply.text.starts_with("🌸 *Welcome to PCOS Care AI* 🌸"));
        assert!(reply.text.ends_with("Type /assess to begin\\."));
    }

    #[test]
    fn test_report_text() {
        let result = score(&crate::assessment::Answers::from_replies("Irregular", "15", "Acne, Facial Hair"));
        let reply = report(&result);
        assert_eq!(
            reply.text,
            "📊 *PCOS Risk Report*\n\nScore: 70%\nRisk: Medium\n\n⚠️ Not a diagnosis\\."
        );
        assert_eq!(reply.options, None);
    }

    #[test]
    fn test_answer_without_assessment() {
        let questionnaire = Questionnaire::new();
        assert_eq!(questionnaire.answer(1, "Regular"), None);
    }

    #[test]
    fn test_reset_drops_assessment() {
        let questionnaire = Questionnaire::new();
        questionnaire.begin(1);
        questionnaire.reset(1);
        assert!(!questionnaire.is_active(1));
        // Resetting again is harmless
        questionnaire.reset(1);
    }
}
