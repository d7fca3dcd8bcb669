//! Validation errors for booking values.

use thiserror::Error;

/// Errors raised when a user-supplied token cannot become a booking value.
///
/// These never reach the HTTP boundary: the dialogue engine turns each of
/// them into a clarifying reply and leaves the conversation where it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookingValidationError {
    #[error("'{0}' is not a valid DD/MM/YYYY date")]
    InvalidDate(String),

    #[error("Ticket count must be a positive whole number, got '{0}'")]
    InvalidTicketCount(String),

    #[error("Unknown ticket type '{0}'")]
    UnknownTicketType(String),
}
