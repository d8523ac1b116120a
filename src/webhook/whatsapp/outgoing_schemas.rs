//! # WhatsApp Outgoing Message Schemas
//!
//! Data structures for sending messages to WhatsApp Business API.

use serde::{Deserialize, Serialize};

/// Text message to send to WhatsApp
#[derive(Debug, Serialize, Deserialize)]
pub struct OutgoingTextMessage {
    /// Messaging product, always "whatsapp"
    pub messaging_product: String,
    /// Recipient's WhatsApp ID (phone number)
    pub to: String,
    /// Message type
    #[serde(rename = "type")]
    pub msg_type: String,
    /// Text content
    pub text: OutgoingTextContent,
}

impl OutgoingTextMessage {
    /// Creates a new text message
    pub fn new(to: String, body: String) -> Self {
        Self {
            messaging_product: "whatsapp".to_string(),
            to,
            msg_type: "text".to_string(),
            text: OutgoingTextContent { body },
        }
    }
}

/// Text content for outgoing messages
#[derive(Debug, Serialize, Deserialize)]
pub struct OutgoingTextContent {
    /// Message body text
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outgoing_text_message_serialization() {
        let message = OutgoingTextMessage::new("123".to_string(), "where".to_string());
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "messaging_product": "whatsapp",
                "to": "123",
                "type": "text",
                "text": {"body": "where"}
            })
        );
    }
}
