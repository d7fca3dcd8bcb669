//! Chat command and query handlers.

mod get_session;
mod send_message;
mod session_locks;

pub use get_session::{GetChatSessionHandler, GetChatSessionQuery};
pub use send_message::{
    ChatError, SendChatMessageCommand, SendChatMessageHandler, SendChatMessageResult,
};
pub use session_locks::{SessionLocks, SessionTurnGuard};
