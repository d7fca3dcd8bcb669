//! Dialogue engine - the booking conversation state machine.
//!
//! One call to [`DialogueEngine::step`] consumes one (English) message and
//! produces the next conversation state and the reply. Dispatch is a fixed
//! priority list; the first rule that applies wins:
//!
//! 1. greeting intent, or phase `init` → `ready`, greeting
//! 2. farewell intent → `init`, farewell
//! 3. help intent → help text, phase unchanged
//! 4. info intent → info text, phase unchanged
//! 5. booking intent while idle → `booking_date`, ask for a date
//! 6. phase `booking_date` → take the date, ask for a count
//! 7. phase `booking_tickets` → take the count, ask for a ticket type
//! 8. phase `booking_type` → price it, check capacity, ask for a card
//! 9. phase `payment` → validate the card, save the booking, confirm
//! 10. anything else → fallback text
//!
//! Input the visitor can fix (bad date, bad count, sold out, bad card) is
//! answered with a clarifying reply and leaves the state as it was. Storage
//! failures are returned as errors and also leave the state untouched,
//! since the caller only adopts the new state from a successful [`Turn`].

use std::sync::Arc;

use thiserror::Error;

use crate::domain::booking::{
    Booking, BookingDate, CardValidator, Price, TicketCount, TicketType,
};
use crate::domain::conversation::{
    extract_card_number, extract_date_token, extract_ticket_digits, fill_confirmation,
    BookingPhase, ConversationState, FixedReply, Intent, IntentClassifier, ReplyCategory,
    ReplyPicker,
};
use crate::ports::{BookingRepository, StorageError};

use super::AvailabilityChecker;

/// Errors that abort a turn. User-correctable input is never one of these.
#[derive(Debug, Clone, Error)]
pub enum DialogueError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The state claims a phase whose earlier answers are missing.
    #[error("Conversation in phase {phase:?} is missing its {field}")]
    IncompleteDraft {
        phase: BookingPhase,
        field: &'static str,
    },
}

/// Input problems the engine answers with a clarifying reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveredError {
    /// No usable date in the answer.
    InvalidDate,
    /// No usable ticket count in the answer.
    InvalidTicketCount,
    /// Not enough capacity left for the date and ticket type.
    CapacityExceeded,
    /// No card number in the answer.
    MissingCard,
    /// The card number failed the checksum.
    PaymentRejected,
}

impl RecoveredError {
    pub fn reply(&self) -> FixedReply {
        match self {
            Self::InvalidDate => FixedReply::InvalidDate,
            Self::InvalidTicketCount => FixedReply::InvalidTicketCount,
            Self::CapacityExceeded => FixedReply::CapacityExceeded,
            Self::MissingCard => FixedReply::MissingCard,
            Self::PaymentRejected => FixedReply::InvalidCard,
        }
    }
}

/// Outcome of one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// State to adopt for the session.
    pub state: ConversationState,
    /// Reply to show the visitor (untruncated, English).
    pub reply: String,
    /// How the message was classified.
    pub intent: Intent,
    /// The booking persisted by this turn, if any.
    pub booking: Option<Booking>,
    /// Set when the reply asks the visitor to correct their input.
    pub recovered: Option<RecoveredError>,
}

/// The booking conversation state machine.
#[derive(Clone)]
pub struct DialogueEngine {
    bookings: Arc<dyn BookingRepository>,
    availability: AvailabilityChecker,
    replies: Arc<dyn ReplyPicker>,
}

impl DialogueEngine {
    pub fn new(
        bookings: Arc<dyn BookingRepository>,
        availability: AvailabilityChecker,
        replies: Arc<dyn ReplyPicker>,
    ) -> Self {
        Self {
            bookings,
            availability,
            replies,
        }
    }

    /// Processes one message against `state`.
    ///
    /// # Errors
    ///
    /// - `Storage` if the capacity query or the booking write fails
    /// - `IncompleteDraft` if `state` was not produced by this engine
    pub async fn step(
        &self,
        state: &ConversationState,
        message: &str,
    ) -> Result<Turn, DialogueError> {
        let intent = IntentClassifier::classify(message);
        let phase = state.phase;
        let mut next = state.clone();

        let turn = if intent == Intent::Greeting || phase == BookingPhase::Init {
            next.phase = BookingPhase::Ready;
            self.reply(next, intent, ReplyCategory::Greeting)
        } else if intent == Intent::Farewell {
            next.phase = BookingPhase::Init;
            self.reply(next, intent, ReplyCategory::Farewell)
        } else if intent == Intent::Help {
            self.reply(next, intent, ReplyCategory::Help)
        } else if intent == Intent::Info {
            self.reply(next, intent, ReplyCategory::Info)
        } else if intent == Intent::Booking && phase.is_idle() {
            next.clear_draft();
            next.phase = BookingPhase::BookingDate;
            self.reply(next, intent, ReplyCategory::BookingStart)
        } else {
            match phase {
                BookingPhase::BookingDate => self.take_date(next, intent, message),
                BookingPhase::BookingTickets => self.take_ticket_count(next, intent, message),
                BookingPhase::BookingType => self.take_ticket_type(next, intent, message).await?,
                BookingPhase::Payment => self.take_payment(next, intent, message).await?,
                BookingPhase::Init | BookingPhase::Ready => {
                    self.reply(next, intent, ReplyCategory::Fallback)
                }
            }
        };

        debug_assert!(phase.can_transition_to(&turn.state.phase));
        tracing::debug!(
            intent = intent.as_str(),
            from = ?phase,
            to = ?turn.state.phase,
            recovered = ?turn.recovered,
            "Dialogue step"
        );

        Ok(turn)
    }

    fn take_date(&self, mut next: ConversationState, intent: Intent, message: &str) -> Turn {
        let parsed = extract_date_token(message).as_deref().map(BookingDate::parse);
        match parsed {
            Some(Ok(date)) => {
                next.booking_date = Some(date);
                next.phase = BookingPhase::BookingTickets;
                self.reply(next, intent, ReplyCategory::AskTicketCount)
            }
            _ => recovered(next, intent, RecoveredError::InvalidDate),
        }
    }

    fn take_ticket_count(
        &self,
        mut next: ConversationState,
        intent: Intent,
        message: &str,
    ) -> Turn {
        let parsed = extract_ticket_digits(message).as_deref().map(TicketCount::parse);
        match parsed {
            Some(Ok(count)) => {
                next.ticket_count = Some(count);
                next.phase = BookingPhase::BookingType;
                self.reply(next, intent, ReplyCategory::AskTicketType)
            }
            _ => recovered(next, intent, RecoveredError::InvalidTicketCount),
        }
    }

    async fn take_ticket_type(
        &self,
        mut next: ConversationState,
        intent: Intent,
        message: &str,
    ) -> Result<Turn, DialogueError> {
        let date = require(next.booking_date, next.phase, "booking date")?;
        let count = require(next.ticket_count, next.phase, "ticket count")?;

        let ticket_type = TicketType::from_message(message);
        let price = Price::for_tickets(count, ticket_type);

        if !self.availability.check(date, count, ticket_type).await? {
            tracing::info!(
                date = %date,
                ticket_type = %ticket_type,
                requested = count.get(),
                "Not enough capacity for booking"
            );
            return Ok(recovered(next, intent, RecoveredError::CapacityExceeded));
        }

        next.ticket_type = Some(ticket_type);
        next.price = Some(price);
        next.phase = BookingPhase::Payment;
        let prompt = self.replies.pick(ReplyCategory::PaymentPrompt);
        Ok(turn(next, intent, format!("Total price: ${}. {}", price, prompt)))
    }

    async fn take_payment(
        &self,
        mut next: ConversationState,
        intent: Intent,
        message: &str,
    ) -> Result<Turn, DialogueError> {
        let Some(card) = extract_card_number(message) else {
            return Ok(recovered(next, intent, RecoveredError::MissingCard));
        };
        if !CardValidator::validate(&card) {
            return Ok(recovered(next, intent, RecoveredError::PaymentRejected));
        }

        let draft = match next.booking_draft() {
            Some(draft) => draft,
            None => {
                return Err(DialogueError::IncompleteDraft {
                    phase: next.phase,
                    field: "booking details",
                })
            }
        };

        let booking = self.bookings.save_booking(draft).await?;
        tracing::info!(
            booking_id = %booking.id(),
            date = %booking.booking_date(),
            tickets = booking.ticket_count().get(),
            ticket_type = %booking.ticket_type(),
            price = %booking.price(),
            "Booking saved"
        );

        next.phase = BookingPhase::Ready;
        let template = self.replies.pick(ReplyCategory::BookingConfirmation);
        let reply = fill_confirmation(template, booking.price(), booking.id());
        Ok(Turn {
            booking: Some(booking),
            ..turn(next, intent, reply)
        })
    }

    fn reply(&self, next: ConversationState, intent: Intent, category: ReplyCategory) -> Turn {
        turn(next, intent, self.replies.pick(category).to_string())
    }
}

fn turn(state: ConversationState, intent: Intent, reply: String) -> Turn {
    Turn {
        state,
        reply,
        intent,
        booking: None,
        recovered: None,
    }
}

fn recovered(state: ConversationState, intent: Intent, error: RecoveredError) -> Turn {
    Turn {
        recovered: Some(error),
        ..turn(state, intent, error.reply().text().to_string())
    }
}

fn require<T>(
    value: Option<T>,
    phase: BookingPhase,
    field: &'static str,
) -> Result<T, DialogueError> {
    value.ok_or(DialogueError::IncompleteDraft { phase, field })
}
