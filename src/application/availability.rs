//! Capacity check for a prospective booking.

use std::sync::Arc;

use crate::domain::booking::{BookingDate, TicketCount, TicketType};
use crate::ports::{BookingRepository, StorageError};

/// Answers "is there room for `count` more tickets of this type on this date?"
///
/// The check reads the running total and compares; it does not reserve
/// anything. Two sessions checking the same date at the same moment can
/// both be told yes.
#[derive(Clone)]
pub struct AvailabilityChecker {
    bookings: Arc<dyn BookingRepository>,
    capacity: u32,
}

impl AvailabilityChecker {
    pub fn new(bookings: Arc<dyn BookingRepository>, capacity: u32) -> Self {
        Self { bookings, capacity }
    }

    /// Returns true iff already-booked plus `count` stays within capacity.
    ///
    /// # Errors
    ///
    /// Propagates `StorageError` when the total cannot be read, so callers
    /// can tell "sold out" apart from "could not check".
    pub async fn check(
        &self,
        date: BookingDate,
        count: TicketCount,
        ticket_type: TicketType,
    ) -> Result<bool, StorageError> {
        let booked = self.bookings.sum_booked_tickets(date, ticket_type).await?;
        let requested = booked.saturating_add(u64::from(count.get()));
        let available = requested <= u64::from(self.capacity);

        tracing::debug!(
            date = %date,
            ticket_type = %ticket_type,
            booked,
            requested = count.get(),
            capacity = self.capacity,
            available,
            "Checked ticket availability"
        );

        Ok(available)
    }
}
