//! Assembles the full HTTP application.

use std::time::Duration;

use axum::Router;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::chat::{chat_routes, ChatHandlers};
use super::dashboard::{dashboard_routes, DashboardHandlers};
use super::system::system_routes;

/// Cross-cutting HTTP settings.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub request_timeout: Duration,
    /// Allowed browser origins; empty allows any.
    pub cors_origins: Vec<String>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            cors_origins: Vec::new(),
        }
    }
}

impl From<&ServerConfig> for HttpSettings {
    fn from(config: &ServerConfig) -> Self {
        Self {
            request_timeout: config.request_timeout(),
            cors_origins: config.cors_origins_list(),
        }
    }
}

/// Builds the router with every endpoint and the tracing, CORS and
/// timeout layers.
pub fn api_router(
    chat: ChatHandlers,
    dashboard: DashboardHandlers,
    settings: &HttpSettings,
) -> Router {
    Router::new()
        .nest("/api/chat", chat_routes(chat))
        .nest("/api/dashboard", dashboard_routes(dashboard))
        .merge(system_routes())
        .layer(TimeoutLayer::new(settings.request_timeout))
        .layer(cors_layer(&settings.cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}
