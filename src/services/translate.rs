//! # Google Translate Client
//!
//! Thin client for the Google Translate v2 API. One request in, one
//! translated string out; no caching, no retries.

use super::Translator;
use crate::{config, consts};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

/// Response from the translate API
///
/// ```json
/// {"data": {"translations": [{"translatedText": "where"}]}}
/// ```
#[derive(Debug, Deserialize)]
pub struct TranslationResponse {
    pub data: TranslationData,
}

#[derive(Debug, Deserialize)]
pub struct TranslationData {
    pub translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
pub struct Translation {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

/// Replaces spaces with `%20` so the text can travel as the `q` query
/// parameter.
pub fn percent_encode_spaces(text: &str) -> String {
    text.replace(' ', "%20")
}

/// Builds the translate request URL with the query text already encoded.
pub fn build_translate_url(
    endpoint: &str,
    api_key: &str,
    source: &str,
    target: &str,
    text: &str,
) -> String {
    format!(
        "{endpoint}?key={api_key}&source={source}&target={target}&q={q}",
        q = percent_encode_spaces(text),
    )
}

/// Client for the Google Translate v2 API
pub struct GoogleTranslateClient {
    /// HTTP client for making API requests
    client: reqwest::Client,
    /// Translate API endpoint
    endpoint: String,
    /// API key
    api_key: String,
    /// Language inbound messages are written in
    source_lang: String,
    /// Language to translate into
    target_lang: String,
}

impl GoogleTranslateClient {
    /// Creates a new translate client from the global configuration
    pub fn new() -> Result<Self> {
        let app_config = config::APP_CONFIG
            .get()
            .context("failed to get app config")?;

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: consts::GOOGLE_TRANSLATE_ENDPOINT.to_string(),
            api_key: app_config.translation_api_key.clone(),
            source_lang: app_config.translation_source_lang.clone(),
            target_lang: app_config.translation_target_lang.clone(),
        })
    }
}

#[async_trait]
impl Translator for GoogleTranslateClient {
    async fn translate(&self, text: &str) -> Result<String> {
        let url = build_translate_url(
            &self.endpoint,
            &self.api_key,
            &self.source_lang,
            &self.target_lang,
            text,
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send request to translate API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());

            anyhow::bail!("Translate API returned error status {}: {}", status, body);
        }

        let translation: TranslationResponse = response
            .json()
            .await
            .context("Failed to parse translate API response")?;

        let translated_text = translation
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .context("Translate API response contained no translations")?;

        logfire::info!(
            "Translation received: {translated}",
            translated = translated_text.clone()
        );

        Ok(translated_text)
    }
}

impl Default for GoogleTranslateClient {
    fn default() -> Self {
        Self::new().expect("Failed to create translate client")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_encode_spaces() {
        assert_eq!(percent_encode_spaces("hola"), "hola");
        assert_eq!(percent_encode_spaces("hola mundo"), "hola%20mundo");
        assert_eq!(percent_encode_spaces("a b c"), "a%20b%20c");
    }

    #[test]
    fn test_build_translate_url_encodes_query_text() {
        let url = build_translate_url(
            "https://translation.googleapis.com/language/translate/v2",
            "secret-key",
            "es",
            "en",
            "hola mundo",
        );

        assert_eq!(
            url,
            "https://translation.googleapis.com/language/translate/v2\
             ?key=secret-key&source=es&target=en&q=hola%20mundo"
        );
    }

    #[test]
    fn test_translation_response_deserialization() {
        let json = r#"{"data":{"translations":[{"translatedText":"where"}]}}"#;
        let response: TranslationResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.data.translations.len(), 1);
        assert_eq!(response.data.translations[0].translated_text, "where");
    }

    #[test]
    fn test_translation_response_empty_translations() {
        let json = r#"{"data":{"translations":[]}}"#;
        let response: TranslationResponse = serde_json::from_str(json).unwrap();

        assert!(response.data.translations.is_empty());
    }
}
