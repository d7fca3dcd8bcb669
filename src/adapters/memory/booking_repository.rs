//! In-Memory Booking Repository
//!
//! Keeps bookings in a vector. Used when no database is configured, and by
//! tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::domain::booking::{Booking, BookingDate, NewBooking, TicketType};
use crate::domain::foundation::{BookingId, Timestamp};
use crate::ports::{
    AnalyticsReader, BookingAnalytics, BookingRepository, DateSales, StorageError,
    TicketTypeCount, POPULAR_DATES_LIMIT,
};

/// In-memory storage for bookings
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookingRepository {
    bookings: Arc<RwLock<Vec<Booking>>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored bookings
    pub async fn len(&self) -> usize {
        self.bookings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.bookings.read().await.is_empty()
    }

    /// Snapshot of every stored booking, oldest first
    pub async fn all(&self) -> Vec<Booking> {
        self.bookings.read().await.clone()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn save_booking(&self, booking: NewBooking) -> Result<Booking, StorageError> {
        let booking = Booking::new(BookingId::new(), booking, Timestamp::now());
        self.bookings.write().await.push(booking.clone());
        Ok(booking)
    }

    async fn sum_booked_tickets(
        &self,
        date: BookingDate,
        ticket_type: TicketType,
    ) -> Result<u64, StorageError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .iter()
            .filter(|b| b.booking_date() == date && b.ticket_type() == ticket_type)
            .map(|b| u64::from(b.ticket_count().get()))
            .sum())
    }
}

#[async_trait]
impl AnalyticsReader for InMemoryBookingRepository {
    async fn summary(&self) -> Result<BookingAnalytics, StorageError> {
        let bookings = self.bookings.read().await;

        let total_revenue = bookings
            .iter()
            .map(|b| b.price().amount())
            .fold(Decimal::ZERO, |acc, amount| acc + amount);

        let bookings_by_type = [TicketType::Regular, TicketType::Special]
            .into_iter()
            .map(|ticket_type| TicketTypeCount {
                ticket_type,
                count: bookings.iter().filter(|b| b.ticket_type() == ticket_type).count() as u64,
            })
            .filter(|entry| entry.count > 0)
            .collect();

        let mut per_date: BTreeMap<BookingDate, u64> = BTreeMap::new();
        for booking in bookings.iter() {
            *per_date.entry(booking.booking_date()).or_default() +=
                u64::from(booking.ticket_count().get());
        }
        let mut popular_dates: Vec<DateSales> = per_date
            .into_iter()
            .map(|(booking_date, tickets_sold)| DateSales {
                booking_date,
                tickets_sold,
            })
            .collect();
        // Stable sort keeps earlier dates first among ties.
        popular_dates.sort_by(|a, b| b.tickets_sold.cmp(&a.tickets_sold));
        popular_dates.truncate(POPULAR_DATES_LIMIT);

        Ok(BookingAnalytics {
            total_bookings: bookings.len() as u64,
            total_revenue,
            bookings_by_type,
            popular_dates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::{Price, TicketCount};

    fn draft(date: &str, n: u32, ticket_type: TicketType) -> NewBooking {
        let count = TicketCount::new(n).unwrap();
        NewBooking {
            booking_date: BookingDate::parse(date).unwrap(),
            ticket_count: count,
            ticket_type,
            price: Price::for_tickets(count, ticket_type),
        }
    }

    mod bookings {
        use super::*;

        #[tokio::test]
        async fn save_assigns_distinct_ids() {
            let repo = InMemoryBookingRepository::new();
            let a = repo.save_booking(draft("15/08/2025", 1, TicketType::Regular)).await.unwrap();
            let b = repo.save_booking(draft("15/08/2025", 1, TicketType::Regular)).await.unwrap();

            assert_ne!(a.id(), b.id());
            assert_eq!(repo.len().await, 2);
        }

        #[tokio::test]
        async fn sum_is_zero_when_nothing_matches() {
            let repo = InMemoryBookingRepository::new();
            let total = repo
                .sum_booked_tickets(BookingDate::parse("15/08/2025").unwrap(), TicketType::Regular)
                .await
                .unwrap();
            assert_eq!(total, 0);
        }

        #[tokio::test]
        async fn sum_filters_by_date_and_type() {
            let repo = InMemoryBookingRepository::new();
            repo.save_booking(draft("15/08/2025", 3, TicketType::Regular)).await.unwrap();
            repo.save_booking(draft("15/08/2025", 4, TicketType::Regular)).await.unwrap();
            repo.save_booking(draft("15/08/2025", 9, TicketType::Special)).await.unwrap();
            repo.save_booking(draft("16/08/2025", 9, TicketType::Regular)).await.unwrap();

            let total = repo
                .sum_booked_tickets(BookingDate::parse("15/08/2025").unwrap(), TicketType::Regular)
                .await
                .unwrap();
            assert_eq!(total, 7);
        }
    }

    mod analytics {
        use super::*;

        #[tokio::test]
        async fn counts_bookings_per_type() {
            let repo = InMemoryBookingRepository::new();
            repo.save_booking(draft("15/08/2025", 3, TicketType::Regular)).await.unwrap();
            repo.save_booking(draft("15/08/2025", 4, TicketType::Regular)).await.unwrap();
            repo.save_booking(draft("16/08/2025", 1, TicketType::Special)).await.unwrap();

            let summary = repo.summary().await.unwrap();
            assert_eq!(
                summary.bookings_by_type,
                vec![
                    TicketTypeCount { ticket_type: TicketType::Regular, count: 2 },
                    TicketTypeCount { ticket_type: TicketType::Special, count: 1 },
                ]
            );
            assert_eq!(summary.total_revenue, Decimal::from(130));
        }

        #[tokio::test]
        async fn popular_dates_are_top_five_by_tickets() {
            let repo = InMemoryBookingRepository::new();
            for (day, tickets) in [(1, 5), (2, 30), (3, 10), (4, 20), (5, 1), (6, 40), (7, 2)] {
                let date = format!("{:02}/09/2025", day);
                repo.save_booking(draft(&date, tickets, TicketType::Regular)).await.unwrap();
            }

            let summary = repo.summary().await.unwrap();
            let sold: Vec<u64> = summary.popular_dates.iter().map(|d| d.tickets_sold).collect();
            assert_eq!(sold, vec![40, 30, 20, 10, 5]);
            assert_eq!(summary.popular_dates[0].booking_date.to_string(), "06/09/2025");
        }

        #[tokio::test]
        async fn ties_list_the_earlier_date_first() {
            let repo = InMemoryBookingRepository::new();
            repo.save_booking(draft("20/09/2025", 5, TicketType::Regular)).await.unwrap();
            repo.save_booking(draft("10/09/2025", 5, TicketType::Special)).await.unwrap();

            let summary = repo.summary().await.unwrap();
            assert_eq!(summary.popular_dates[0].booking_date.to_string(), "10/09/2025");
        }
    }
}
