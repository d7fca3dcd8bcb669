//! Persisted booking record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BookingId, Timestamp};

use super::{BookingDate, Price, TicketCount, TicketType};

/// The caller-supplied part of a booking, before storage assigns an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    pub booking_date: BookingDate,
    pub ticket_count: TicketCount,
    pub ticket_type: TicketType,
    pub price: Price,
}

/// A completed, paid booking. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    id: BookingId,
    booking_date: BookingDate,
    ticket_count: TicketCount,
    ticket_type: TicketType,
    price: Price,
    created_at: Timestamp,
}

impl Booking {
    /// Assembles a stored booking from its draft and storage-assigned fields.
    pub fn new(id: BookingId, draft: NewBooking, created_at: Timestamp) -> Self {
        Self {
            id,
            booking_date: draft.booking_date,
            ticket_count: draft.ticket_count,
            ticket_type: draft.ticket_type,
            price: draft.price,
            created_at,
        }
    }

    pub fn id(&self) -> BookingId {
        self.id
    }

    pub fn booking_date(&self) -> BookingDate {
        self.booking_date
    }

    pub fn ticket_count(&self) -> TicketCount {
        self.ticket_count
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
