//! Application layer - the dialogue engine and the use cases around it.
//!
//! The engine and availability checker hold the booking rules; the
//! handlers add what a web turn needs on top (sessions, translation,
//! length limits, logging).

mod availability;
mod dialogue;
pub mod handlers;

pub use availability::AvailabilityChecker;
pub use dialogue::{DialogueEngine, DialogueError, RecoveredError, Turn};
pub use handlers::{
    ChatError, GetAnalyticsHandler, GetChatSessionHandler, GetChatSessionQuery,
    SendChatMessageCommand, SendChatMessageHandler, SendChatMessageResult,
};
