//! Integration tests for complete booking conversations.
//!
//! These drive the chat use case end to end over in-memory adapters:
//! 1. The scripted happy path from greeting to confirmation
//! 2. Capacity shared between sessions
//! 3. Storage failures surfacing as errors without a booking id

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use museum_booking::adapters::{
    InMemoryBookingRepository, InMemoryChatLog, InMemorySessionStore, PassthroughTranslator,
};
use museum_booking::application::{
    AvailabilityChecker, ChatError, DialogueEngine, SendChatMessageCommand, SendChatMessageHandler,
    SendChatMessageResult,
};
use museum_booking::domain::booking::{Booking, BookingDate, NewBooking, TicketType};
use museum_booking::domain::conversation::{BookingPhase, FixedReply, SeededReplyPicker};
use museum_booking::domain::foundation::{Language, SessionId};
use museum_booking::domain::session::MessageLimits;
use museum_booking::ports::{BookingRepository, SessionStore, StorageError};

// =============================================================================
// Test Infrastructure
// =============================================================================

const VALID_CARD: &str = "4532 0151 1283 0366";

struct Chat {
    handler: SendChatMessageHandler,
    sessions: Arc<InMemorySessionStore>,
}

impl Chat {
    fn new(bookings: Arc<dyn BookingRepository>, capacity: u32) -> Self {
        let sessions = Arc::new(InMemorySessionStore::new());
        let engine = DialogueEngine::new(
            bookings.clone(),
            AvailabilityChecker::new(bookings, capacity),
            Arc::new(SeededReplyPicker::new(2024)),
        );
        let handler = SendChatMessageHandler::new(
            engine,
            sessions.clone(),
            Arc::new(InMemoryChatLog::new()),
            Arc::new(PassthroughTranslator),
            MessageLimits::default(),
        );
        Self { handler, sessions }
    }

    async fn say(
        &self,
        session_id: Option<SessionId>,
        message: &str,
    ) -> Result<SendChatMessageResult, ChatError> {
        self.handler
            .handle(SendChatMessageCommand {
                session_id,
                message: message.to_string(),
                language: Language::En,
            })
            .await
    }

    /// Sends every message in order and returns the session id and last result.
    async fn script(&self, messages: &[&str]) -> (SessionId, SendChatMessageResult) {
        let mut session_id = None;
        let mut last = None;
        for message in messages {
            let result = self.say(session_id, message).await.expect("turn succeeds");
            session_id = Some(result.session_id);
            last = Some(result);
        }
        let last = last.expect("at least one message");
        (last.session_id, last)
    }
}

/// Answers capacity queries and fails every write.
struct WriteFailingRepository {
    attempts: AtomicUsize,
}

#[async_trait]
impl BookingRepository for WriteFailingRepository {
    async fn save_booking(&self, _booking: NewBooking) -> Result<Booking, StorageError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::Unavailable("connection reset".to_string()))
    }

    async fn sum_booked_tickets(
        &self,
        _date: BookingDate,
        _ticket_type: TicketType,
    ) -> Result<u64, StorageError> {
        Ok(0)
    }
}

// =============================================================================
// Happy path
// =============================================================================

#[tokio::test]
async fn scripted_conversation_books_four_regular_tickets() {
    let bookings = Arc::new(InMemoryBookingRepository::new());
    let chat = Chat::new(bookings.clone(), 500);

    let (session_id, at_payment) = chat
        .script(&["hi", "book tickets", "15/08/2025", "4 tickets", "regular"])
        .await;
    assert_eq!(at_payment.phase, BookingPhase::Payment);
    assert!(at_payment.reply.starts_with("Total price: $60."));

    let confirmed = chat.say(Some(session_id), VALID_CARD).await.unwrap();
    let booking_id = confirmed.booking_id.expect("booking confirmed");
    assert_eq!(confirmed.phase, BookingPhase::Ready);
    assert!(confirmed.reply.contains("$60"));
    assert!(confirmed.reply.contains(&booking_id.to_string()));

    let stored = bookings.all().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id(), booking_id);
    assert_eq!(stored[0].booking_date().to_string(), "15/08/2025");
    assert_eq!(stored[0].ticket_count().get(), 4);
    assert_eq!(stored[0].ticket_type(), TicketType::Regular);
}

#[tokio::test]
async fn repeating_the_card_after_confirmation_books_nothing_more() {
    let bookings = Arc::new(InMemoryBookingRepository::new());
    let chat = Chat::new(bookings.clone(), 500);

    let (session_id, _) = chat
        .script(&["hi", "book tickets", "15/08/2025", "2", "special", VALID_CARD])
        .await;
    let repeat = chat.say(Some(session_id), VALID_CARD).await.unwrap();

    assert!(repeat.booking_id.is_none());
    assert_eq!(repeat.phase, BookingPhase::Ready);
    assert_eq!(bookings.len().await, 1);
}

#[tokio::test]
async fn correcting_a_bad_date_continues_the_flow() {
    let chat = Chat::new(Arc::new(InMemoryBookingRepository::new()), 500);

    let (session_id, bad) = chat.script(&["hi", "book tickets", "next week"]).await;
    assert_eq!(bad.phase, BookingPhase::BookingDate);
    assert_eq!(bad.reply, FixedReply::InvalidDate.text());

    let good = chat.say(Some(session_id), "20-09-25").await.unwrap();
    assert_eq!(good.phase, BookingPhase::BookingTickets);

    let session = chat.sessions.load(session_id).await.unwrap().unwrap();
    assert_eq!(
        session.state().booking_date.map(|d| d.to_string()),
        Some("20/09/2025".to_string())
    );
}

// =============================================================================
// Capacity
// =============================================================================

#[tokio::test]
async fn capacity_is_shared_across_sessions() {
    let bookings = Arc::new(InMemoryBookingRepository::new());
    let chat = Chat::new(bookings.clone(), 5);

    let (_, first) = chat
        .script(&["hi", "book tickets", "15/08/2025", "4", "regular", VALID_CARD])
        .await;
    assert!(first.booking_id.is_some());

    let (session_id, second) = chat
        .script(&["hi", "book tickets", "15/08/2025", "2", "regular"])
        .await;
    assert_eq!(second.phase, BookingPhase::BookingType);
    assert_eq!(second.reply, FixedReply::CapacityExceeded.text());

    // Special tickets have their own allowance.
    let special = chat.say(Some(session_id), "special please").await.unwrap();
    assert_eq!(special.phase, BookingPhase::Payment);
}

#[tokio::test]
async fn sold_out_visitor_restarts_with_a_new_booking() {
    let chat = Chat::new(Arc::new(InMemoryBookingRepository::new()), 3);

    let (session_id, sold_out) = chat
        .script(&["hi", "book tickets", "15/08/2025", "4", "regular"])
        .await;
    assert_eq!(sold_out.phase, BookingPhase::BookingType);

    // Booking words are read as a ticket type while stuck here...
    let still_stuck = chat.say(Some(session_id), "book").await.unwrap();
    assert_eq!(still_stuck.phase, BookingPhase::BookingType);

    // ...so the way out is a greeting, then a fresh booking.
    chat.say(Some(session_id), "hello").await.unwrap();
    let restarted = chat.say(Some(session_id), "book tickets").await.unwrap();
    assert_eq!(restarted.phase, BookingPhase::BookingDate);

    let session = chat.sessions.load(session_id).await.unwrap().unwrap();
    assert!(session.state().booking_date.is_none());
}

// =============================================================================
// Storage failures
// =============================================================================

#[tokio::test]
async fn failed_booking_write_is_an_error_and_keeps_payment_phase() {
    let repo = Arc::new(WriteFailingRepository {
        attempts: AtomicUsize::new(0),
    });
    let chat = Chat::new(repo.clone(), 500);

    let (session_id, at_payment) = chat
        .script(&["hi", "book tickets", "15/08/2025", "4", "regular"])
        .await;
    assert_eq!(at_payment.phase, BookingPhase::Payment);

    let result = chat.say(Some(session_id), VALID_CARD).await;
    assert!(matches!(result, Err(ChatError::Storage(StorageError::Unavailable(_)))));
    assert_eq!(repo.attempts.load(Ordering::SeqCst), 1);

    let session = chat.sessions.load(session_id).await.unwrap().unwrap();
    assert_eq!(session.state().phase, BookingPhase::Payment);
    assert_eq!(session.history().len(), 5);
}
