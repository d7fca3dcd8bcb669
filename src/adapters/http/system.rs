//! Liveness and reference-data endpoints.

use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Language;

/// One entry of GET /api/languages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageResponse {
    pub code: String,
    pub name: String,
}

/// GET /health
async fn health() -> &'static str {
    "ok"
}

/// GET /api/languages - Languages the assistant can chat in
async fn languages() -> Json<Vec<LanguageResponse>> {
    Json(
        Language::ALL
            .iter()
            .map(|language| LanguageResponse {
                code: language.code().to_string(),
                name: language.display_name().to_string(),
            })
            .collect(),
    )
}

pub fn system_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/languages", get(languages))
}
