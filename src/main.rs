//! # Translate Bridge
//!
//! Webhook endpoint bridging the WhatsApp Business webhook protocol to
//! the Google Translate API: verifies subscription handshakes, receives
//! inbound text messages, translates them and replies to the sender.

pub mod config;
pub mod consts;
pub mod errors;
pub mod services;
pub mod webhook;

use anyhow::Context;
use ntex::web;

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    // Initialize configuration
    config::init_config()?;

    // Initialize logging
    let shutdown_handler = logfire::configure()
        .install_panic_handler()
        .send_to_logfire(logfire::config::SendToLogfire::IfTokenPresent)
        .finish()?;

    let app_config = config::APP_CONFIG
        .get()
        .context("failed to get app config")?;
    let server_addr = (app_config.web_server_host.as_str(), app_config.web_server_port);

    web::server(move || {
        web::App::new()
            .wrap(web::middleware::Logger::default())
            .state(create_app_state())
            .configure(webhook::routes::whatsapp)
            .default_service(web::route().to(webhook::routes::unsupported_method))
    })
    .bind(server_addr)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    shutdown_handler.shutdown()?;

    Ok(())
}

/// Creates the per-worker application state with live API clients
fn create_app_state() -> webhook::AppState {
    webhook::AppState {
        translator: Box::new(services::translate::GoogleTranslateClient::default()),
        reply_sender: Box::new(webhook::whatsapp::client::WhatsAppClient::default()),
    }
}
