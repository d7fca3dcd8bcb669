//! HTTP Translator - LibreTranslate-compatible translation client.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpTranslatorConfig::new("https://translate.example.org")
//!     .with_api_key("secret")
//!     .with_timeout(Duration::from_secs(5));
//!
//! let translator = HttpTranslator::new(config)?;
//! ```
//!
//! Requests are `POST {base_url}/translate` with a JSON body of
//! `q`, `source`, `target`, `format` and optionally `api_key`; the response
//! carries `translatedText`. Every failure falls back to the input text.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Language;
use crate::ports::{TranslationError, Translator};

/// Configuration for the HTTP translator.
#[derive(Debug, Clone)]
pub struct HttpTranslatorConfig {
    /// Service root, without the `/translate` suffix.
    pub base_url: String,
    api_key: Option<Secret<String>>,
    pub timeout: Duration,
}

impl HttpTranslatorConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(api_key.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Translator backed by a LibreTranslate-style HTTP service.
pub struct HttpTranslator {
    config: HttpTranslatorConfig,
    client: Client,
}

impl HttpTranslator {
    pub fn new(config: HttpTranslatorConfig) -> Result<Self, TranslationError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TranslationError::Request(format!("Failed to build client: {}", e)))?;
        Ok(Self { config, client })
    }

    fn translate_url(&self) -> String {
        format!("{}/translate", self.config.base_url.trim_end_matches('/'))
    }

    fn request_body<'a>(
        &'a self,
        text: &'a str,
        source: Language,
        target: Language,
    ) -> TranslateRequest<'a> {
        TranslateRequest {
            q: text,
            source: source.code(),
            target: target.code(),
            format: "text",
            api_key: self.config.api_key.as_ref().map(|k| k.expose_secret().as_str()),
        }
    }

    async fn try_translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, TranslationError> {
        let response = self
            .client
            .post(self.translate_url())
            .json(&self.request_body(text, source, target))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TranslationError::Request(format!(
                        "Timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else {
                    TranslationError::Request(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslationError::Status(status.as_u16()));
        }

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::Decode(e.to_string()))?;
        Ok(body.translated_text)
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(&self, text: &str, source: Language, target: Language) -> String {
        if source == target || text.trim().is_empty() {
            return text.to_string();
        }

        match self.try_translate(text, source, target).await {
            Ok(translated) => translated,
            Err(e) => {
                tracing::warn!(
                    source = source.code(),
                    target = target.code(),
                    error = %e,
                    "Translation failed, using original text"
                );
                text.to_string()
            }
        }
    }
}
