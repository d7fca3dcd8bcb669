//! Reply templates for the booking assistant.
//!
//! Each category has a small fixed set of interchangeable wordings; which
//! one is used is left to a [`ReplyPicker`], so tests can pin the choice.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::domain::booking::Price;
use crate::domain::foundation::BookingId;

/// A family of interchangeable reply wordings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplyCategory {
    Greeting,
    Farewell,
    BookingStart,
    AskTicketCount,
    AskTicketType,
    PaymentPrompt,
    BookingConfirmation,
    Info,
    Help,
    Fallback,
}

impl ReplyCategory {
    /// Returns the wordings for this category. Never empty.
    pub fn templates(&self) -> &'static [&'static str] {
        match self {
            Self::Greeting => GREETING,
            Self::Farewell => FAREWELL,
            Self::BookingStart => BOOKING_START,
            Self::AskTicketCount => ASK_TICKET_COUNT,
            Self::AskTicketType => ASK_TICKET_TYPE,
            Self::PaymentPrompt => PAYMENT_PROMPT,
            Self::BookingConfirmation => BOOKING_CONFIRMATION,
            Self::Info => INFO,
            Self::Help => HELP,
            Self::Fallback => FALLBACK,
        }
    }
}

/// Single-wording replies used when the visitor's answer cannot be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedReply {
    InvalidDate,
    InvalidTicketCount,
    CapacityExceeded,
    MissingCard,
    InvalidCard,
}

impl FixedReply {
    pub fn text(&self) -> &'static str {
        match self {
            Self::InvalidDate => "Please provide a valid date (DD/MM/YYYY).",
            Self::InvalidTicketCount => "Please specify the number of tickets you need.",
            Self::CapacityExceeded => {
                "Sorry, we don't have enough tickets available for that date. Please choose another date."
            }
            Self::MissingCard => {
                "Please provide a valid credit card number to complete the booking."
            }
            Self::InvalidCard => "Invalid credit card. Please provide a valid card number.",
        }
    }
}

const GREETING: &[&str] = &[
    "Welcome to Museum Booking Assistant! How can I help you today?",
    "Hello! I'm here to help with museum tickets and information.",
];

const FAREWELL: &[&str] = &[
    "Thank you for using Museum Booking Assistant. Have a great day!",
    "Goodbye! We hope to see you at the museum soon.",
];

const BOOKING_START: &[&str] = &[
    "I can help you book tickets. What date are you planning to visit? (DD/MM/YYYY)",
    "Sure, let's book your tickets. When would you like to visit? (DD/MM/YYYY)",
];

const ASK_TICKET_COUNT: &[&str] = &[
    "Great! How many tickets would you like to book?",
    "Excellent choice! How many people will be visiting?",
];

const ASK_TICKET_TYPE: &[&str] = &[
    "Would you like regular admission or a special exhibition?",
    "Do you want to add any special shows or exhibitions to your visit?",
];

const PAYMENT_PROMPT: &[&str] = &[
    "Please enter your credit card details to complete the payment.",
    "To finalize your booking, I'll need your credit card information.",
];

const BOOKING_CONFIRMATION: &[&str] = &[
    "Your booking is confirmed! Total: ${price}. Your booking ID is {booking_id}.",
    "Tickets booked successfully! Total: ${price}. Booking reference: {booking_id}.",
];

const INFO: &[&str] = &[
    "The museum is open from 9 AM to 5 PM. Regular tickets are $15, children $8.",
    "We have various exhibits currently running. Entry fees start at $15.",
];

const HELP: &[&str] = &[
    "I can help with bookings, provide information, or assist with cancellations.",
    "How can I assist you? I can book tickets, provide information, or help with other queries.",
];

const FALLBACK: &[&str] = &[
    "I'm not sure I understand. Could you rephrase that?",
    "I didn't quite catch that. How else can I help you with museum tickets?",
];

/// Fills a confirmation template with the booking's price and id.
pub fn fill_confirmation(template: &str, price: Price, booking_id: BookingId) -> String {
    template
        .replace("{price}", &price.to_string())
        .replace("{booking_id}", &booking_id.to_string())
}

/// Source of the "which wording" choice.
pub trait ReplyPicker: Send + Sync {
    /// Returns one of `category.templates()`.
    fn pick(&self, category: ReplyCategory) -> &'static str;
}

/// Uniform choice from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomReplyPicker;

impl ReplyPicker for RandomReplyPicker {
    fn pick(&self, category: ReplyCategory) -> &'static str {
        let templates = category.templates();
        templates
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(templates[0])
    }
}

/// Deterministic choice from a seeded RNG, for reproducible conversations.
#[derive(Debug)]
pub struct SeededReplyPicker {
    rng: Mutex<StdRng>,
}

impl SeededReplyPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ReplyPicker for SeededReplyPicker {
    fn pick(&self, category: ReplyCategory) -> &'static str {
        let templates = category.templates();
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        templates.choose(&mut *rng).copied().unwrap_or(templates[0])
    }
}
