//! WhatsApp webhook endpoint handlers
//!
//! Implements both the verification endpoint (GET) and the webhook
//! receiver (POST) for the WhatsApp Business API.

use super::{handler, schemas};
use crate::{config, errors, webhook::AppState};
use ntex::{util::Bytes, web};
use serde::Deserialize;

/// Query parameters for webhook verification
///
/// All fields are optional at the wire level so missing parameters can be
/// reported explicitly instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct VerifyQuery {
    /// The mode parameter, should be "subscribe"
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,
    /// The verification token from WhatsApp
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    /// The challenge string to echo back
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}

/// Decides the outcome of a verification request.
///
/// Returns the numeric challenge to echo on success.
///
/// # Errors
/// - [`errors::UserError::NoQueryParameters`] when no parameters came at all
/// - [`errors::UserError::WrongMode`] when `hub.mode` is not "subscribe"
/// - [`errors::UserError::WrongVerifyToken`] on a token mismatch
/// - [`errors::UserError::InvalidChallenge`] when the challenge is absent
///   or not an unsigned integer
pub fn verify_subscription(
    query: &VerifyQuery,
    expected_token: &str,
) -> Result<u64, errors::UserError> {
    if query.mode.is_none() && query.verify_token.is_none() && query.challenge.is_none() {
        return Err(errors::UserError::NoQueryParameters);
    }

    if query.mode.as_deref() != Some("subscribe") {
        return Err(errors::UserError::WrongMode);
    }

    if query.verify_token.as_deref() != Some(expected_token) {
        return Err(errors::UserError::WrongVerifyToken);
    }

    query
        .challenge
        .as_deref()
        .and_then(|challenge| challenge.parse().ok())
        .ok_or(errors::UserError::InvalidChallenge)
}

/// Webhook verification endpoint (GET)
///
/// WhatsApp sends a GET request to verify the webhook URL. This endpoint
/// validates the verify token and echoes the challenge back as a number.
#[web::get("")]
pub async fn verify(
    query: web::types::Query<VerifyQuery>,
) -> Result<impl web::Responder, web::Error> {
    let app_config = config::APP_CONFIG
        .get()
        .expect("APP_CONFIG should be initialized before starting web server");

    let challenge = verify_subscription(&query, &app_config.whatsapp_verify_token)?;

    Ok(web::HttpResponse::Ok().json(&challenge))
}

/// Webhook receiver endpoint (POST)
///
/// Receives webhook events from the WhatsApp Business API, translates
/// qualifying text messages and replies to their senders.
///
/// Processing is synchronous; WhatsApp gives us 20 seconds to respond,
/// which is sufficient for one translate plus one send round trip.
#[web::post("")]
pub async fn receive(
    body: Bytes,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let payload: schemas::WebhookPayload = serde_json::from_slice(&body)
        .map_err(|e| errors::UserError::MalformedPayload(e.to_string()))?;

    handler::process_webhook(&payload, &app_state.translator, &app_state.reply_sender)
        .await
        .map_err(|e| errors::ServerError::ExternalServiceError(format!("{e:#}")))?;

    Ok(web::HttpResponse::Ok().json(&"Done"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_query(mode: &str, token: &str, challenge: &str) -> VerifyQuery {
        VerifyQuery {
            mode: Some(mode.to_string()),
            verify_token: Some(token.to_string()),
            challenge: Some(challenge.to_string()),
        }
    }

    #[test]
    fn test_verify_query_deserialization() {
        let json = r#"{"hub.mode":"subscribe","hub.verify_token":"test123","hub.challenge":"challenge123"}"#;
        let query: VerifyQuery = serde_json::from_str(json).unwrap();
        assert_eq!(query.mode.as_deref(), Some("subscribe"));
        assert_eq!(query.verify_token.as_deref(), Some("test123"));
        assert_eq!(query.challenge.as_deref(), Some("challenge123"));
    }

    #[test]
    fn test_verify_subscription_success() {
        let query = full_query("subscribe", "T", "1234567890");

        assert_eq!(verify_subscription(&query, "T").unwrap(), 1234567890);
    }

    #[test]
    fn test_verify_subscription_no_query_parameters() {
        let result = verify_subscription(&VerifyQuery::default(), "T");

        assert!(matches!(result, Err(errors::UserError::NoQueryParameters)));
    }

    #[test]
    fn test_verify_subscription_wrong_mode() {
        let query = full_query("unsubscribe", "T", "1234567890");

        assert!(matches!(
            verify_subscription(&query, "T"),
            Err(errors::UserError::WrongMode)
        ));
    }

    #[test]
    fn test_verify_subscription_missing_mode() {
        let query = VerifyQuery {
            mode: None,
            verify_token: Some("T".to_string()),
            challenge: Some("1234567890".to_string()),
        };

        assert!(matches!(
            verify_subscription(&query, "T"),
            Err(errors::UserError::WrongMode)
        ));
    }

    #[test]
    fn test_verify_subscription_wrong_token() {
        let query = full_query("subscribe", "wrong", "1234567890");

        assert!(matches!(
            verify_subscription(&query, "T"),
            Err(errors::UserError::WrongVerifyToken)
        ));
    }

    #[test]
    fn test_verify_subscription_non_numeric_challenge() {
        let query = full_query("subscribe", "T", "not-a-number");

        assert!(matches!(
            verify_subscription(&query, "T"),
            Err(errors::UserError::InvalidChallenge)
        ));
    }
}
