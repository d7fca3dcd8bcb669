//! Translation adapters.

mod http_translator;
mod passthrough;

pub use http_translator::{HttpTranslator, HttpTranslatorConfig};
pub use passthrough::PassthroughTranslator;
