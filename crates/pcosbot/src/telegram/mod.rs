//! Telegram bot integration and handlers

pub mod bot;
pub mod handlers;
pub mod markup;

// Re-exports for convenience
pub use bot::{create_bot, sender_key, setup_bot_commands, Command};
pub use handlers::{schema, HandlerDeps, HandlerError};
pub use markup::{reply_keyboard, send_reply};
