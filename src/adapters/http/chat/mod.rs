//! Chat HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::{BookingDraftResponse, ChatRequest, ChatResponse, ExchangeResponse, SessionResponse};
pub use handlers::ChatHandlers;
pub use routes::chat_routes;
