//! Command handler implementations (/start, /assess, /about, /help)

use teloxide::prelude::*;
use teloxide::types::Message;

use pcoscore::replies::{self, Reply};
use pcoscore::TopicSummaryProvider;

use super::types::{HandlerDeps, HandlerError};
use crate::telegram::bot::sender_key;
use crate::telegram::markup::send_reply;

/// Handle /start: show the welcome and drop any assessment in progress
pub(super) async fn handle_start_command(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), HandlerError> {
    if let Some(user) = sender_key(msg) {
        deps.questionnaire.reset(user);
    }
    send_reply(bot, msg.chat.id, &replies::welcome()).await?;
    Ok(())
}

/// Handle /assess: start over at question 1
pub(super) async fn handle_assess_command(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), HandlerError> {
    let Some(user) = sender_key(msg) else {
        log::warn!("Ignoring /assess without a sender in chat {}", msg.chat.id);
        return Ok(());
    };

    let reply = deps.questionnaire.begin(user);
    send_reply(bot, msg.chat.id, &reply).await?;
    Ok(())
}

/// Handle /about and /help: send a topic summary, falling back to canned text
pub(super) async fn handle_topic_command(
    bot: &Bot,
    msg: &Message,
    deps: &HandlerDeps,
    topic: &str,
) -> Result<(), HandlerError> {
    let outcome = deps.topics.summary(topic).await;
    if outcome.is_fallback() {
        log::info!("Sending fallback text for {:?} to chat {}", topic, msg.chat.id);
    }

    send_reply(bot, msg.chat.id, &Reply::plain(outcome.into_text())).await?;
    Ok(())
}
