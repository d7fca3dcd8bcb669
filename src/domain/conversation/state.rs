//! Per-session conversation state.

use serde::{Deserialize, Serialize};

use crate::domain::booking::{BookingDate, NewBooking, Price, TicketCount, TicketType};

use super::phase::BookingPhase;

/// Mutable record of where one conversation stands.
///
/// The optional fields fill in as the phase advances; each is written by
/// the phase that asks for it and only read by later phases. Starting a
/// new booking flow clears them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConversationState {
    pub phase: BookingPhase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_date: Option<BookingDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_count: Option<TicketCount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<TicketType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
}

impl ConversationState {
    /// Creates the state of a brand-new session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state sitting in the given phase with no booking data.
    #[cfg(test)]
    pub fn in_phase(phase: BookingPhase) -> Self {
        Self {
            phase,
            ..Self::default()
        }
    }

    /// Drops any booking data left over from an earlier flow.
    pub fn clear_draft(&mut self) {
        self.booking_date = None;
        self.ticket_count = None;
        self.ticket_type = None;
        self.price = None;
    }

    /// Returns the booking to persist, once every field has been supplied.
    pub fn booking_draft(&self) -> Option<NewBooking> {
        Some(NewBooking {
            booking_date: self.booking_date?,
            ticket_count: self.ticket_count?,
            ticket_type: self.ticket_type?,
            price: self.price?,
        })
    }
}
