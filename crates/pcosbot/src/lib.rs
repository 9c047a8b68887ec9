//! PCOS Care - Telegram bot running a three-question PCOS risk assessment
//!
//! # Module Structure
//!
//! - `cli`: command line interface
//! - `telegram`: bot construction, handler tree, reply rendering
//! - `webhook`: HTTP server receiving Telegram updates
//!
//! Scoring and conversation state live in the `pcoscore` crate.

pub mod cli;
pub mod telegram;
pub mod webhook;

pub use telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};
