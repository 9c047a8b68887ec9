//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use pcoscore::lookup::{ABOUT_TOPIC, HELP_TOPIC};
use pcoscore::replies;

use super::commands::{handle_assess_command, handle_start_command, handle_topic_command};
use super::types::{HandlerDeps, HandlerError};
use crate::telegram::bot::{sender_key, Command};
use crate::telegram::markup::send_reply;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// Branch order matters: known commands win over an assessment in
/// progress, so `/about` mid-assessment shows the summary and keeps the
/// user's state. Any other text from a user with an assessment is taken as
/// the answer to the current question.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();
    let deps_assessment = deps.clone();

    dptree::entry()
        .branch(command_handler(deps_commands))
        .branch(assessment_handler(deps_assessment))
        .branch(idle_text_handler())
}

/// Handler for bot commands (/start, /assess, /about, /help)
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move { run_command(&bot, &msg, &deps, cmd).await }
        },
    ))
}

async fn run_command(bot: &Bot, msg: &Message, deps: &HandlerDeps, cmd: Command) -> Result<(), HandlerError> {
    log::info!("🎯 Received command: {:?} from chat {}", cmd, msg.chat.id);

    match cmd {
        Command::Start(_) => handle_start_command(bot, msg, deps).await,
        Command::Assess(_) => handle_assess_command(bot, msg, deps).await,
        Command::About(_) => handle_topic_command(bot, msg, deps, ABOUT_TOPIC).await,
        Command::Help(_) => handle_topic_command(bot, msg, deps, HELP_TOPIC).await,
    }
}

/// Handler for answers from users with an assessment in progress
fn assessment_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_filter = deps.clone();

    Update::filter_message()
        .filter(move |msg: Message| {
            msg.text().is_some()
                && sender_key(&msg)
                    .map(|user| deps_filter.questionnaire.is_active(user))
                    .unwrap_or(false)
        })
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move { handle_answer(&bot, &msg, &deps).await }
        })
}

async fn handle_answer(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), HandlerError> {
    let (Some(user), Some(text)) = (sender_key(msg), msg.text()) else {
        return Ok(());
    };

    // The state may have been cleared between filter and endpoint
    match deps.questionnaire.answer(user, text) {
        Some(reply) => {
            send_reply(bot, msg.chat.id, &reply).await?;
        }
        None => log::debug!("User {} has no assessment anymore, dropping message", user),
    }
    Ok(())
}

/// Handler for plain text in private chats outside an assessment
fn idle_text_handler() -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.chat.is_private() && msg.text().is_some())
        .endpoint(|bot: Bot, msg: Message| async move { send_idle_hint(&bot, &msg).await })
}

async fn send_idle_hint(bot: &Bot, msg: &Message) -> Result<(), HandlerError> {
    send_reply(bot, msg.chat.id, &replies::not_in_assessment()).await?;
    Ok(())
}
