//! Webhook handlers for external integrations
//!
//! This module contains the webhook endpoint handlers that bridge the
//! WhatsApp Business API to the translation service.
//!
//! ## Modules
//!
//! - [`whatsapp`] - WhatsApp Business API webhook handlers
//! - [`routes`] - Route wiring for the webhook endpoints

pub mod routes;
pub mod whatsapp;

use crate::services;

/// Shared per-worker state handed to the webhook handlers.
pub struct AppState {
    pub translator: services::ImplTranslator,
    pub reply_sender: whatsapp::client::ImplReplySender,
}
