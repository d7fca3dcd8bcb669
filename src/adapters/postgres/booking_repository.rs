//! PostgreSQL implementation of BookingRepository and AnalyticsReader.
//!
//! Bookings live in a single `bookings` table (see `migrations/`).

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{PgPool, Row};

use crate::domain::booking::{Booking, BookingDate, NewBooking, TicketType};
use crate::domain::foundation::{BookingId, Timestamp};
use crate::ports::{
    AnalyticsReader, BookingAnalytics, BookingRepository, DateSales, StorageError,
    TicketTypeCount, POPULAR_DATES_LIMIT,
};

/// PostgreSQL implementation of BookingRepository.
#[derive(Clone)]
pub struct PostgresBookingRepository {
    pool: PgPool,
}

impl PostgresBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepository {
    async fn save_booking(&self, booking: NewBooking) -> Result<Booking, StorageError> {
        let booking = Booking::new(BookingId::new(), booking, Timestamp::now());
        let ticket_count = i32::try_from(booking.ticket_count().get()).map_err(|_| {
            StorageError::QueryFailed(format!(
                "Ticket count {} does not fit the bookings table",
                booking.ticket_count()
            ))
        })?;

        sqlx::query(
            r#"
            INSERT INTO bookings (
                id, booking_date, ticket_count, ticket_type, price, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(booking.id().as_uuid())
        .bind(booking.booking_date().as_naive())
        .bind(ticket_count)
        .bind(booking.ticket_type().as_str())
        .bind(booking.price().amount())
        .bind(booking.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to insert booking", e))?;

        Ok(booking)
    }

    async fn sum_booked_tickets(
        &self,
        date: BookingDate,
        ticket_type: TicketType,
    ) -> Result<u64, StorageError> {
        let (total,): (i64,) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(ticket_count), 0)::BIGINT
            FROM bookings
            WHERE booking_date = $1 AND ticket_type = $2
            "#,
        )
        .bind(date.as_naive())
        .bind(ticket_type.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to sum booked tickets", e))?;

        non_negative(total, "ticket total")
    }
}

#[async_trait]
impl AnalyticsReader for PostgresBookingRepository {
    async fn summary(&self) -> Result<BookingAnalytics, StorageError> {
        let (total_bookings, total_revenue): (i64, Decimal) = sqlx::query_as(
            "SELECT COUNT(*), COALESCE(SUM(price), 0) FROM bookings",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to load booking totals", e))?;

        let type_rows = sqlx::query(
            r#"
            SELECT ticket_type, COUNT(*) AS bookings
            FROM bookings
            GROUP BY ticket_type
            ORDER BY ticket_type
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to count bookings by type", e))?;

        let mut bookings_by_type = Vec::with_capacity(type_rows.len());
        for row in type_rows {
            let raw: String = row
                .try_get("ticket_type")
                .map_err(|e| corrupt("ticket_type", e))?;
            let count: i64 = row.try_get("bookings").map_err(|e| corrupt("bookings", e))?;
            bookings_by_type.push(TicketTypeCount {
                ticket_type: raw
                    .parse()
                    .map_err(|_| StorageError::CorruptRow(format!("Unknown ticket type: {}", raw)))?,
                count: non_negative(count, "booking count")?,
            });
        }

        let date_rows = sqlx::query(
            r#"
            SELECT booking_date, SUM(ticket_count)::BIGINT AS tickets_sold
            FROM bookings
            GROUP BY booking_date
            ORDER BY tickets_sold DESC, booking_date ASC
            LIMIT $1
            "#,
        )
        .bind(POPULAR_DATES_LIMIT as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to rank booking dates", e))?;

        let mut popular_dates = Vec::with_capacity(date_rows.len());
        for row in date_rows {
            let date: chrono::NaiveDate = row
                .try_get("booking_date")
                .map_err(|e| corrupt("booking_date", e))?;
            let sold: i64 = row
                .try_get("tickets_sold")
                .map_err(|e| corrupt("tickets_sold", e))?;
            popular_dates.push(DateSales {
                booking_date: BookingDate::from_naive(date),
                tickets_sold: non_negative(sold, "tickets sold")?,
            });
        }

        Ok(BookingAnalytics {
            total_bookings: non_negative(total_bookings, "booking count")?,
            total_revenue,
            bookings_by_type,
            popular_dates,
        })
    }
}

/// Maps a sqlx error, telling connection trouble apart from query failures.
pub(crate) fn storage_error(context: &str, err: sqlx::Error) -> StorageError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            StorageError::Unavailable(format!("{}: {}", context, err))
        }
        other => StorageError::QueryFailed(format!("{}: {}", context, other)),
    }
}

fn corrupt(column: &str, err: sqlx::Error) -> StorageError {
    StorageError::CorruptRow(format!("Failed to get {}: {}", column, err))
}

fn non_negative(value: i64, what: &str) -> Result<u64, StorageError> {
    u64::try_from(value)
        .map_err(|_| StorageError::CorruptRow(format!("Negative {}: {}", what, value)))
}
