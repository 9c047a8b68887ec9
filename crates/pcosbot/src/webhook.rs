//! HTTP server for webhook mode.
//!
//! Serves the Telegram webhook at `/webhook/<token>` next to a `/`
//! liveness route for the hosting platform's health checks.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::{http::StatusCode, routing::get, Router};
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks;
use teloxide::update_listeners::UpdateListener;
use tokio::net::TcpListener;

use pcoscore::config;

/// Body of the liveness route
pub const HEALTH_TEXT: &str = "PCOS Care AI Bot is running";

async fn health_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, HEALTH_TEXT)
}

/// Routes served alongside the webhook
pub fn health_router() -> Router {
    Router::new().route("/", get(health_handler))
}

/// Registers the webhook with Telegram and starts the HTTP server.
///
/// Returns the update listener to hand to the dispatcher. The server stops
/// once the listener is stopped.
pub async fn listen(bot: Bot, token: &str) -> anyhow::Result<impl UpdateListener<Err = Infallible>> {
    let addr = SocketAddr::from(([0, 0, 0, 0], *config::PORT));
    let url = config::webhook_url(&config::WEBHOOK_URL, token)?;

    let options = webhooks::Options::new(addr, url);
    let (listener, stop_flag, router) = webhooks::axum_to_router(bot, options).await?;
    let app = router.merge(health_router());

    log::info!("Starting webhook server on http://{}", addr);
    log::info!("  /                  - Health check");
    log::info!("  {} - Telegram updates", config::webhook_path("<token>"));

    let tcp = TcpListener::bind(&addr).await?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(tcp, app).with_graceful_shutdown(stop_flag).await {
            log::error!("Webhook server failed: {}", e);
        }
    });

    Ok(listener)
}
