//! HTTP handlers for chat endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::error_response;
use crate::application::{
    ChatError, GetChatSessionHandler, GetChatSessionQuery, SendChatMessageCommand,
    SendChatMessageHandler,
};
use crate::domain::foundation::{ErrorCode, Language, SessionId};

use super::dto::{ChatRequest, ChatResponse, SessionResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ChatHandlers {
    send_handler: Arc<SendChatMessageHandler>,
    get_handler: Arc<GetChatSessionHandler>,
}

impl ChatHandlers {
    pub fn new(
        send_handler: Arc<SendChatMessageHandler>,
        get_handler: Arc<GetChatSessionHandler>,
    ) -> Self {
        Self {
            send_handler,
            get_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/chat - Process one visitor message
pub async fn send_message(
    State(handlers): State<ChatHandlers>,
    Json(req): Json<ChatRequest>,
) -> Response {
    let language = match req.language.as_deref() {
        None => Language::default(),
        Some(code) => match code.parse::<Language>() {
            Ok(language) => language,
            Err(e) => return error_response(e.code, e.message),
        },
    };

    let session_id = match req.session_id.as_deref().map(str::parse::<SessionId>) {
        None => None,
        Some(Ok(id)) => Some(id),
        Some(Err(_)) => {
            return error_response(ErrorCode::ValidationFailed, "Invalid session ID");
        }
    };

    let cmd = SendChatMessageCommand {
        session_id,
        message: req.message,
        language,
    };

    match handlers.send_handler.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(ChatResponse::from(result))).into_response(),
        Err(e) => handle_chat_error(e),
    }
}

/// GET /api/chat/sessions/:id - Session snapshot
pub async fn get_session(
    State(handlers): State<ChatHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match session_id.parse::<SessionId>() {
        Ok(id) => id,
        Err(_) => return error_response(ErrorCode::ValidationFailed, "Invalid session ID"),
    };

    match handlers
        .get_handler
        .handle(GetChatSessionQuery { session_id })
        .await
    {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(session))).into_response(),
        Err(e) => handle_chat_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error mapping
// ════════════════════════════════════════════════════════════════════════════

fn handle_chat_error(error: ChatError) -> Response {
    let code = error.code();
    if code.is_infrastructure() {
        tracing::error!(error = %error, code = %code, "Chat request failed");
        let message = match error {
            ChatError::Internal(_) => "Something went wrong. Please start a new booking.",
            _ => "The booking service is temporarily unavailable. Please try again.",
        };
        return error_response(code, message);
    }
    error_response(code, error.to_string())
}
