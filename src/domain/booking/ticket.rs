//! Ticket type, ticket count, and price value objects.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::BookingValidationError;

/// Maximum tickets sellable per date per ticket type.
pub const DEFAULT_DAILY_CAPACITY: u32 = 500;

/// Admission category chosen by the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketType {
    /// General admission.
    Regular,
    /// Admission including special exhibitions or shows.
    Special,
}

impl TicketType {
    /// Picks the ticket type named by a free-text answer.
    ///
    /// Anything that does not mention "regular" is a special ticket.
    pub fn from_message(message: &str) -> Self {
        if message.to_lowercase().contains("regular") {
            Self::Regular
        } else {
            Self::Special
        }
    }

    /// Price of one ticket in dollars.
    pub fn unit_price(&self) -> Decimal {
        match self {
            Self::Regular => Decimal::from(15),
            Self::Special => Decimal::from(25),
        }
    }

    /// Returns the storage/wire name of the ticket type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Special => "special",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = BookingValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(Self::Regular),
            "special" => Ok(Self::Special),
            other => Err(BookingValidationError::UnknownTicketType(other.to_string())),
        }
    }
}

/// Number of tickets in one booking. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TicketCount(u32);

impl TicketCount {
    /// Creates a ticket count, rejecting zero.
    pub fn new(count: u32) -> Result<Self, BookingValidationError> {
        if count == 0 {
            return Err(BookingValidationError::InvalidTicketCount(count.to_string()));
        }
        Ok(Self(count))
    }

    /// Parses a run of ASCII digits.
    pub fn parse(digits: &str) -> Result<Self, BookingValidationError> {
        let count: u32 = digits
            .parse()
            .map_err(|_| BookingValidationError::InvalidTicketCount(digits.to_string()))?;
        Self::new(count)
    }

    /// Returns the count.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for TicketCount {
    type Error = BookingValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TicketCount> for u32 {
    fn from(count: TicketCount) -> Self {
        count.0
    }
}

impl fmt::Display for TicketCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Total price of a booking in dollars. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Computes count × unit price for the ticket type.
    pub fn for_tickets(count: TicketCount, ticket_type: TicketType) -> Self {
        Self(Decimal::from(count.get()) * ticket_type.unit_price())
    }

    /// Returns the amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod ticket_type {
        use super::*;

        #[test]
        fn regular_when_message_mentions_it() {
            assert_eq!(TicketType::from_message("Regular please"), TicketType::Regular);
            assert_eq!(TicketType::from_message("just REGULAR"), TicketType::Regular);
        }

        #[test]
        fn anything_else_is_special() {
            assert_eq!(TicketType::from_message("the dinosaur show"), TicketType::Special);
            assert_eq!(TicketType::from_message(""), TicketType::Special);
        }

        #[test]
        fn unit_prices() {
            assert_eq!(TicketType::Regular.unit_price(), Decimal::from(15));
            assert_eq!(TicketType::Special.unit_price(), Decimal::from(25));
        }

        #[test]
        fn round_trips_through_str() {
            for t in [TicketType::Regular, TicketType::Special] {
                assert_eq!(t.as_str().parse::<TicketType>().unwrap(), t);
            }
            assert!("vip".parse::<TicketType>().is_err());
        }

        #[test]
        fn serializes_to_snake_case() {
            assert_eq!(serde_json::to_string(&TicketType::Special).unwrap(), "\"special\"");
        }
    }

    mod ticket_count {
        use super::*;

        #[test]
        fn zero_is_rejected() {
            assert!(TicketCount::new(0).is_err());
            assert!(TicketCount::parse("0").is_err());
        }

        #[test]
        fn overflow_is_rejected() {
            assert!(TicketCount::parse("99999999999999999999").is_err());
        }

        #[test]
        fn parses_leading_zeros() {
            assert_eq!(TicketCount::parse("004").unwrap().get(), 4);
        }

        #[test]
        fn deserialization_enforces_positive() {
            assert!(serde_json::from_str::<TicketCount>("0").is_err());
            assert_eq!(serde_json::from_str::<TicketCount>("3").unwrap().get(), 3);
        }
    }

    mod price {
        use super::*;

        #[test]
        fn four_regular_tickets_cost_sixty() {
            let price = Price::for_tickets(TicketCount::new(4).unwrap(), TicketType::Regular);
            assert_eq!(price.amount(), Decimal::from(60));
            assert_eq!(price.to_string(), "60");
        }

        #[test]
        fn special_tickets_cost_twenty_five_each() {
            let price = Price::for_tickets(TicketCount::new(3).unwrap(), TicketType::Special);
            assert_eq!(price.amount(), Decimal::from(75));
        }

        #[test]
        fn large_counts_do_not_overflow() {
            let price = Price::for_tickets(TicketCount::new(u32::MAX).unwrap(), TicketType::Special);
            assert_eq!(price.amount(), Decimal::from(u32::MAX) * Decimal::from(25));
        }
    }
}
