//! Museum Booking - Conversational ticket-booking assistant
//!
//! Visitors chat in one of several Indian languages; messages are routed
//! through English to a rule-based dialogue engine that collects a visit
//! date, ticket count and ticket type, checks capacity, validates a card
//! number and records the booking.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod server;
