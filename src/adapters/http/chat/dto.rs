//! Request and response bodies for the chat endpoints.

use serde::{Deserialize, Serialize};

use crate::application::SendChatMessageResult;
use crate::domain::booking::TicketType;
use crate::domain::conversation::{BookingPhase, ConversationState};
use crate::domain::session::{ChatExchange, ChatSession};

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/chat
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Visitor language code; English when absent.
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub response: String,
    pub phase: BookingPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
}

impl From<SendChatMessageResult> for ChatResponse {
    fn from(result: SendChatMessageResult) -> Self {
        Self {
            session_id: result.session_id.to_string(),
            response: result.reply,
            phase: result.phase,
            booking_id: result.booking_id.map(|id| id.to_string()),
        }
    }
}

/// Answers collected so far in the current booking flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDraftResponse {
    pub booking_date: Option<String>,
    pub ticket_count: Option<u32>,
    pub ticket_type: Option<TicketType>,
    pub price: Option<String>,
}

impl From<&ConversationState> for BookingDraftResponse {
    fn from(state: &ConversationState) -> Self {
        Self {
            booking_date: state.booking_date.map(|d| d.to_string()),
            ticket_count: state.ticket_count.map(|c| c.get()),
            ticket_type: state.ticket_type,
            price: state.price.map(|p| p.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeResponse {
    pub user_message: String,
    pub bot_response: String,
    pub language: String,
    pub timestamp: String,
}

impl From<&ChatExchange> for ExchangeResponse {
    fn from(exchange: &ChatExchange) -> Self {
        Self {
            user_message: exchange.user_message.clone(),
            bot_response: exchange.bot_response.clone(),
            language: exchange.language.code().to_string(),
            timestamp: exchange.timestamp.as_datetime().to_rfc3339(),
        }
    }
}

/// GET /api/chat/sessions/:id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub phase: BookingPhase,
    pub booking: BookingDraftResponse,
    pub history: Vec<ExchangeResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ChatSession> for SessionResponse {
    fn from(session: ChatSession) -> Self {
        Self {
            session_id: session.id().to_string(),
            phase: session.state().phase,
            booking: BookingDraftResponse::from(session.state()),
            history: session.history().iter().map(ExchangeResponse::from).collect(),
            created_at: session.created_at().as_datetime().to_rfc3339(),
            updated_at: session.updated_at().as_datetime().to_rfc3339(),
        }
    }
}
