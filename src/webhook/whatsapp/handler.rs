//! # WhatsApp Webhook Handler
//!
//! Business logic for inbound webhook events: filters qualifying text
//! messages, translates them, and replies to the sender.

use super::{client, schemas::WebhookPayload};
use crate::{consts, services};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

/// A message that qualified for translation, paired with the business
/// number it arrived on.
#[derive(Debug, PartialEq)]
pub struct PendingReply<'a> {
    /// Business phone number ID the reply must be sent from
    pub phone_number_id: &'a str,
    /// Sender's WhatsApp ID, the reply recipient
    pub to: &'a str,
    /// Original message text
    pub body: &'a str,
}

/// Whether a string-encoded unix timestamp falls within the staleness
/// window ending at `now`.
///
/// Webhook deliveries are retried by Meta, so anything older than the
/// window is treated as a duplicate and skipped. Unparseable timestamps
/// never qualify.
pub fn is_fresh(timestamp: &str, now: DateTime<Utc>) -> bool {
    let Ok(secs) = timestamp.parse::<i64>() else {
        logfire::warn!("Unparseable message timestamp: {timestamp}", timestamp = timestamp.to_string());
        return false;
    };
    let Some(message_time) = DateTime::from_timestamp(secs, 0) else {
        return false;
    };

    message_time > now - consts::MESSAGE_STALENESS_WINDOW
}

/// Extracts every message that should be translated and answered.
///
/// Walks all entries and all changes; a message qualifies if the change
/// carries the "messages" field, the message type is "text", and its
/// timestamp is fresh relative to `now`.
pub fn fresh_text_messages<'a>(
    payload: &'a WebhookPayload,
    now: DateTime<Utc>,
) -> Vec<PendingReply<'a>> {
    let mut replies = Vec::new();

    for change in payload.entry.iter().flat_map(|entry| &entry.changes) {
        if change.field != "messages" {
            continue;
        }
        let Some(messages) = &change.value.messages else {
            continue;
        };

        for message in messages {
            if message.msg_type != "text" || !is_fresh(&message.timestamp, now) {
                continue;
            }
            let Some(text) = &message.text else {
                continue;
            };

            replies.push(PendingReply {
                phone_number_id: &change.value.metadata.phone_number_id,
                to: &message.from,
                body: &text.body,
            });
        }
    }

    replies
}

/// Processes a webhook payload end to end.
///
/// Every qualifying message is translated and the translation sent back
/// to its sender. A downstream failure aborts the batch and propagates to
/// the caller; Meta's own webhook retry combined with the staleness
/// filter bounds duplicate processing.
pub async fn process_webhook(
    payload: &WebhookPayload,
    translator: &services::ImplTranslator,
    reply_sender: &client::ImplReplySender,
) -> Result<()> {
    let status_count = payload
        .entry
        .iter()
        .flat_map(|entry| &entry.changes)
        .filter_map(|change| change.value.statuses.as_ref())
        .flatten()
        .count();
    if status_count > 0 {
        logfire::info!(
            "Ignoring {count} status update(s)",
            count = status_count.to_string()
        );
    }

    for reply in fresh_text_messages(payload, Utc::now()) {
        let translated = translator
            .translate(reply.body)
            .await
            .with_context(|| format!("Failed to translate message from {}", reply.to))?;

        reply_sender
            .send_text_reply(reply.phone_number_id, reply.to, &translated)
            .await
            .with_context(|| format!("Failed to send reply to {}", reply.to))?;
    }

    Ok(())
}
