//! Application handlers.
//!
//! Command and query handlers that sit between the HTTP adapter and the
//! dialogue engine.

pub mod chat;
pub mod dashboard;

pub use chat::{
    ChatError, GetChatSessionHandler, GetChatSessionQuery, SendChatMessageCommand,
    SendChatMessageHandler, SendChatMessageResult, SessionLocks, SessionTurnGuard,
};
pub use dashboard::GetAnalyticsHandler;
