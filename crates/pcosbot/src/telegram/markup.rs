//! Rendering core replies as Telegram messages

use teloxide::prelude::*;
use teloxide::types::{KeyboardButton, KeyboardMarkup, ParseMode};
use teloxide::RequestError;

use pcoscore::replies::{Reply, TextFormat};

fn is_markdown_parse_error(err: &RequestError) -> bool {
    err.to_string().to_lowercase().contains("can't parse entities")
}

/// One-row reply keyboard that shrinks to fit and hides after a tap
pub fn reply_keyboard(options: &[String]) -> KeyboardMarkup {
    let row: Vec<KeyboardButton> = options.iter().map(|option| KeyboardButton::new(option.clone())).collect();
    KeyboardMarkup::new(vec![row]).resize_keyboard().one_time_keyboard()
}

/// Sends a reply to `chat_id`, attaching its options as a keyboard.
///
/// MarkdownV2 replies that Telegram refuses to parse are resent as plain text.
pub async fn send_reply(bot: &Bot, chat_id: ChatId, reply: &Reply) -> ResponseResult<Message> {
    let keyboard = reply.options.as_deref().map(reply_keyboard);

    let mut req = bot.send_message(chat_id, reply.text.clone());
    if reply.format == TextFormat::MarkdownV2 {
        req = req.parse_mode(ParseMode::MarkdownV2);
    }
    if let Some(kb) = keyboard.clone() {
        req = req.reply_markup(kb);
    }

    match req.await {
        Ok(msg) => Ok(msg),
        Err(e) if reply.format == TextFormat::MarkdownV2 && is_markdown_parse_error(&e) => {
            log::warn!("MarkdownV2 rejected for chat {}, resending as plain text: {}", chat_id, e);
            let mut retry = bot.send_message(chat_id, reply.text.clone());
            if let Some(kb) = keyboard {
                retry = retry.reply_markup(kb);
            }
            retry.await
        }
        Err(e) => Err(e),
    }
}
