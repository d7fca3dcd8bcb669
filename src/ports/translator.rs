//! Translation port.

use async_trait::async_trait;

use crate::domain::foundation::Language;

/// Failures inside a translation adapter.
///
/// Never crosses the port: adapters log it and fall back to the input text.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TranslationError {
    #[error("Translation request failed: {0}")]
    Request(String),

    #[error("Translation service returned status {0}")]
    Status(u16),

    #[error("Unreadable translation response: {0}")]
    Decode(String),
}

/// Best-effort text translation.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translates `text` from `source` to `target`.
    ///
    /// Infallible by contract: on any failure the original text is returned
    /// unchanged. Same-language requests return the input.
    async fn translate(&self, text: &str, source: Language, target: Language) -> String;
}
