//! Application configuration.
//!
//! All configuration comes from environment variables, loaded once at
//! startup. Sensitive fields (tokens, API keys) should come from a secret
//! manager in production and must never be logged.

use envconfig::Envconfig;
use std::sync::OnceLock;

/// Environment-driven configuration for the webhook bridge.
#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// 🔒 SENSITIVE: shared secret echoed by Meta during webhook verification
    pub whatsapp_verify_token: String,

    /// 🔒 SENSITIVE: WhatsApp Business (Graph API) access token
    pub whatsapp_access_token: String,

    /// 🔒 SENSITIVE: Google Translate v2 API key
    pub translation_api_key: String,

    /// Language inbound messages are written in
    #[envconfig(default = "es")]
    pub translation_source_lang: String,

    /// Language replies are translated into
    #[envconfig(default = "en")]
    pub translation_target_lang: String,

    /// Graph API version segment used when addressing the send endpoint
    #[envconfig(default = "v12.0")]
    pub graph_api_version: String,

    /// Host address for web server binding (NON-SENSITIVE)
    #[envconfig(default = "0.0.0.0")]
    pub web_server_host: String,

    /// Port for web server binding (NON-SENSITIVE)
    #[envconfig(default = "8080")]
    pub web_server_port: u16,
}

impl AppConfig {
    /// Graph API endpoint for sending messages from the given business number.
    pub fn whatsapp_send_msg_endpoint(&self, phone_number_id: &str) -> String {
        format!(
            "https://graph.facebook.com/{version}/{id}/messages",
            version = self.graph_api_version,
            id = phone_number_id,
        )
    }
}

/// Global application configuration, set once by [`init_config`].
pub static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Loads configuration from the environment into [`APP_CONFIG`].
pub fn init_config() -> anyhow::Result<()> {
    let app_config = AppConfig::init_from_env()?;
    APP_CONFIG
        .set(app_config)
        .map_err(|_| anyhow::anyhow!("app config already initialized"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            whatsapp_verify_token: "verify".into(),
            whatsapp_access_token: "access".into(),
            translation_api_key: "key".into(),
            translation_source_lang: "es".into(),
            translation_target_lang: "en".into(),
            graph_api_version: "v12.0".into(),
            web_server_host: "0.0.0.0".into(),
            web_server_port: 8080,
        }
    }

    #[test]
    fn test_send_endpoint_includes_version_and_phone_number_id() {
        let config = test_config();
        assert_eq!(
            config.whatsapp_send_msg_endpoint("9876"),
            "https://graph.facebook.com/v12.0/9876/messages"
        );
    }
}
