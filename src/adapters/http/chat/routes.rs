//! HTTP routes for chat endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_session, send_message, ChatHandlers};

/// Creates the chat router, mounted under `/api/chat`.
pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/", post(send_message))
        .route("/sessions/:id", get(get_session))
        .with_state(handlers)
}
