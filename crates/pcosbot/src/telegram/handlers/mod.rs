//! Telegram bot handler tree configuration
//!
//! The handlers are organized so that integration tests can build the same
//! handler tree as production code.

mod commands;
mod schema;
mod types;

pub use schema::schema;
pub use types::{HandlerDeps, HandlerError};
