//! Booking domain module.
//!
//! Value objects for a ticket booking (date, count, type, price), the
//! persisted booking record, and the card checksum used at payment time.

mod booking;
mod booking_date;
mod card;
mod errors;
mod ticket;

pub use booking::{Booking, NewBooking};
pub use booking_date::BookingDate;
pub use card::{CardValidator, MAX_CARD_LENGTH, MIN_CARD_LENGTH};
pub use errors::BookingValidationError;
pub use ticket::{Price, TicketCount, TicketType, DEFAULT_DAILY_CAPACITY};
