//! Identity translator used when translation is disabled.

use async_trait::async_trait;

use crate::domain::foundation::Language;
use crate::ports::Translator;

/// Returns every text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughTranslator;

#[async_trait]
impl Translator for PassthroughTranslator {
    async fn translate(&self, text: &str, _source: Language, _target: Language) -> String {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_input_unchanged() {
        let t = PassthroughTranslator;
        assert_eq!(t.translate("vanakkam", Language::Ta, Language::En).await, "vanakkam");
    }
}
