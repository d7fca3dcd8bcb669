//! Visit date supplied during the booking dialogue.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::BookingValidationError;

const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Calendar date of the visit, day-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingDate(NaiveDate);

impl BookingDate {
    /// Parses a `D/M/YY`-style token as matched by the date extractor.
    ///
    /// `/` and `-` are both accepted as separators. Two-digit years are
    /// read as 20YY; any other year width than 2 or 4 is rejected, as are
    /// dates that do not exist on the calendar.
    pub fn parse(token: &str) -> Result<Self, BookingValidationError> {
        let invalid = || BookingValidationError::InvalidDate(token.to_string());

        let parts: Vec<&str> = token.split(['/', '-']).collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(invalid());
        };

        let day: u32 = day.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let year: i32 = match year.len() {
            2 => 2000 + year.parse::<i32>().map_err(|_| invalid())?,
            4 => year.parse().map_err(|_| invalid())?,
            _ => return Err(invalid()),
        };

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Wraps an already-valid calendar date.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the inner date.
    pub fn as_naive(&self) -> &NaiveDate {
        &self.0
    }
}

impl fmt::Display for BookingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_day_first_with_slashes() {
        let date = BookingDate::parse("15/08/2025").unwrap();
        assert_eq!(*date.as_naive(), NaiveDate::from_ymd_opt(2025, 8, 15).unwrap());
        assert_eq!(date.to_string(), "15/08/2025");
    }

    #[test]
    fn accepts_dashes_and_single_digit_parts() {
        let date = BookingDate::parse("3-9-2025").unwrap();
        assert_eq!(date.to_string(), "03/09/2025");
    }

    #[test]
    fn two_digit_year_is_this_century() {
        let date = BookingDate::parse("01/12/26").unwrap();
        assert_eq!(date.to_string(), "01/12/2026");
    }

    #[test]
    fn three_digit_year_is_rejected() {
        assert_eq!(
            BookingDate::parse("01/12/202"),
            Err(BookingValidationError::InvalidDate("01/12/202".to_string()))
        );
    }

    #[test]
    fn impossible_dates_are_rejected() {
        assert!(BookingDate::parse("31/02/2025").is_err());
        assert!(BookingDate::parse("15/13/2025").is_err());
        assert!(BookingDate::parse("00/01/2025").is_err());
    }

    #[test]
    fn wrong_shape_is_rejected() {
        assert!(BookingDate::parse("15/08").is_err());
        assert!(BookingDate::parse("tomorrow").is_err());
    }
}
