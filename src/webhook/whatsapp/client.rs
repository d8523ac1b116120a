//! # WhatsApp API Client
//!
//! Client for sending reply messages through the WhatsApp Business
//! (Graph) API. Fire-and-forget: the API response is logged, never
//! tracked.

use super::outgoing_schemas::OutgoingTextMessage;
use crate::config;
use anyhow::{Context, Result};
use async_trait::async_trait;

/// Sends a text reply back to a WhatsApp user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplySender {
    async fn send_text_reply(
        &self,
        phone_number_id: &str,
        to: &str,
        body: &str,
    ) -> anyhow::Result<()>;
}

pub type ImplReplySender = Box<dyn ReplySender>;

/// WhatsApp API client for sending messages
pub struct WhatsAppClient {
    /// HTTP client for making API requests
    client: reqwest::Client,
    /// Graph API access token
    access_token: String,
}

impl WhatsAppClient {
    /// Creates a new WhatsApp client from the global configuration
    pub fn new() -> Result<Self> {
        let app_config = config::APP_CONFIG
            .get()
            .context("failed to get app config")?;

        Ok(Self {
            client: reqwest::Client::new(),
            access_token: app_config.whatsapp_access_token.clone(),
        })
    }
}

#[async_trait]
impl ReplySender for WhatsAppClient {
    /// Sends a text message
    ///
    /// The endpoint is addressed with the `phone_number_id` carried in the
    /// webhook payload, so the reply always goes out through the business
    /// number the message arrived on.
    async fn send_text_reply(&self, phone_number_id: &str, to: &str, body: &str) -> Result<()> {
        let app_config = config::APP_CONFIG
            .get()
            .context("failed to get app config")?;
        let endpoint = app_config.whatsapp_send_msg_endpoint(phone_number_id);

        let message = OutgoingTextMessage::new(to.to_string(), body.to_string());

        let response = self
            .client
            .post(&endpoint)
            .query(&[("access_token", self.access_token.as_str())])
            .json(&message)
            .send()
            .await
            .context("Failed to send request to WhatsApp API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());

            anyhow::bail!("WhatsApp API returned error status {}: {}", status, body);
        }

        let api_response = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read response body".to_string());
        logfire::info!(
            "Sent reply to whatsapp with the following response: {response}",
            response = api_response
        );

        Ok(())
    }
}

impl Default for WhatsAppClient {
    fn default() -> Self {
        Self::new().expect("Failed to create WhatsApp client")
    }
}
