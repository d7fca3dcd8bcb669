//! Conversation domain module.
//!
//! Everything the booking dialogue needs that does not touch storage:
//! intent classification, the per-session state record and its phases,
//! token extraction from free text, and the reply templates.

mod extractor;
mod intent;
mod phase;
mod replies;
mod state;

pub use extractor::{extract_card_number, extract_date_token, extract_ticket_digits};
pub use intent::{Intent, IntentClassifier};
pub use phase::BookingPhase;
pub use replies::{
    fill_confirmation, FixedReply, RandomReplyPicker, ReplyCategory, ReplyPicker,
    SeededReplyPicker,
};
pub use state::ConversationState;
