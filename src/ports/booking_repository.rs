//! Booking storage port.
//!
//! The only persistence the dialogue engine depends on: writing a paid
//! booking and summing what has already been sold for a date.

use async_trait::async_trait;

use crate::domain::booking::{Booking, BookingDate, NewBooking, TicketType};

/// Errors from the persistence layer.
///
/// These are never turned into a reply by the engine; they propagate to the
/// boundary so it can decide between a generic error and a retry.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage query failed: {0}")]
    QueryFailed(String),

    #[error("Stored row is malformed: {0}")]
    CorruptRow(String),
}

/// Port for persisting bookings.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persists a booking, assigning it a globally unique id and a creation
    /// timestamp.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write does not complete. No booking id
    /// exists in that case.
    async fn save_booking(&self, booking: NewBooking) -> Result<Booking, StorageError>;

    /// Sums the ticket counts of every booking on `date` with `ticket_type`.
    ///
    /// Returns 0 when nothing matches.
    async fn sum_booked_tickets(
        &self,
        date: BookingDate,
        ticket_type: TicketType,
    ) -> Result<u64, StorageError>;
}
