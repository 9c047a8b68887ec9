//! Bot initialization and command definitions
//!
//! This module contains:
//! - Command enum definition
//! - Bot instance creation
//! - Mapping a message to the user key assessments are stored under

use reqwest::ClientBuilder;
use teloxide::prelude::*;
use teloxide::types::Message;
use teloxide::utils::command::BotCommands;

use pcoscore::config;
use pcoscore::error::AppResult;
use pcoscore::UserKey;

/// Bot commands enum with descriptions
///
/// Each variant keeps whatever follows the command so `/assess now` still
/// parses; the handlers ignore it.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "PCOS Care AI commands:")]
pub enum Command {
    #[command(description = "show the main menu")]
    Start(String),
    #[command(description = "PCOS risk assessment")]
    Assess(String),
    #[command(description = "about PCOS")]
    About(String),
    #[command(description = "guidance")]
    Help(String),
}

/// Creates a Bot instance with the configured token
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(AppError)` - BOT_TOKEN missing or the HTTP client could not be built
pub fn create_bot() -> AppResult<Bot> {
    let token = config::require_bot_token()?;
    let client = ClientBuilder::new().timeout(config::network::timeout()).build()?;
    Ok(Bot::with_client(token, client))
}

/// Sets up bot commands in Telegram UI
pub async fn setup_bot_commands(bot: &Bot) -> AppResult<()> {
    bot.set_my_commands(Command::bot_commands()).await?;
    Ok(())
}

/// Key of the user who sent `msg`, `None` for anonymous senders (channel posts)
pub fn sender_key(msg: &Message) -> Option<UserKey> {
    msg.from.as_ref().map(|user| user.id.0)
}
