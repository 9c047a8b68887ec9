use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;

use pcosbot::cli::{Cli, Commands};
use pcosbot::webhook;
use pcosbot::{create_bot, schema, setup_bot_commands, HandlerDeps};

use pcoscore::{config, init_logger, log_startup_configuration};
use pcoscore::{score, Answers, Questionnaire, WikipediaSummary};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, bot creation, webhook setup).
#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Load environment variables from .env if present, before config is read
    let _ = dotenv();

    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {:?}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!("Panic at {}:{}:{}", location.file(), location.line(), location.column());
        }
    }));

    match cli.command {
        Some(Commands::Run { webhook }) => {
            init_logger(&config::LOG_FILE_PATH)?;
            log::info!("Running bot (webhook: {})", webhook);
            run_bot(webhook).await
        }
        Some(Commands::Score {
            cycle,
            length,
            symptoms,
            json,
        }) => run_score(&cycle, &length, &symptoms, json),
        None => {
            init_logger(&config::LOG_FILE_PATH)?;
            log::info!("No command specified, running bot in long polling mode");
            run_bot(false).await
        }
    }
}

/// Score answers given on the command line
fn run_score(cycle: &str, length: &str, symptoms: &str, json: bool) -> Result<()> {
    let result = score(&Answers::from_replies(cycle, length, symptoms));

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Score: {}%", result.score);
        println!("Risk: {}", result.risk);
        for defaulted in &result.defaulted {
            println!("  (default weight used for {:?})", defaulted);
        }
    }

    Ok(())
}

/// Run the Telegram bot
async fn run_bot(use_webhook: bool) -> Result<()> {
    log_startup_configuration(use_webhook);

    let token = config::require_bot_token()?;
    let bot = create_bot()?;

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}", e);
    }

    let handler_deps = HandlerDeps::new(
        Arc::new(Questionnaire::new()),
        Arc::new(WikipediaSummary::from_config()?),
    );
    let handler = schema(handler_deps);

    let mut dispatcher = Dispatcher::builder(bot.clone(), handler)
        .enable_ctrlc_handler()
        .build();

    if use_webhook {
        let listener = webhook::listen(bot.clone(), token).await?;
        log::info!("📡 Ready to receive updates via webhook");

        dispatcher
            .dispatch_with_listener(
                listener,
                LoggingErrorHandler::with_custom_text("An error from the update listener"),
            )
            .await;
    } else {
        // Polling fails while a webhook is registered
        if let Err(e) = bot.delete_webhook().await {
            log::warn!("Failed to delete webhook: {}", e);
        }

        let listener = Polling::builder(bot.clone()).drop_pending_updates().build();
        log::info!("📡 Ready to receive updates via long polling");

        dispatcher
            .dispatch_with_listener(
                listener,
                LoggingErrorHandler::with_custom_text("An error from the update listener"),
            )
            .await;
    }

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}
