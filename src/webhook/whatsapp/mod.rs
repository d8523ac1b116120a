//! WhatsApp webhook integration module
//!
//! Handles the WhatsApp Business API webhook: the subscription
//! verification handshake (GET) and inbound message processing (POST).
//!
//! ## Submodules
//!
//! - [`handler`] - Business logic for processing webhook events
//! - [`routes`] - HTTP endpoint handlers for the webhook
//! - [`schemas`] - Data structures for incoming webhook payloads
//! - [`outgoing_schemas`] - Data structures for outgoing messages
//! - [`client`] - WhatsApp API client for sending replies

pub mod client;
pub mod handler;
pub mod outgoing_schemas;
pub mod routes;
pub mod schemas;

// Re-export commonly used items for convenience
pub use routes::{receive, verify};
