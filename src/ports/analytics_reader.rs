//! Dashboard analytics port.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::booking::{BookingDate, TicketType};

use super::StorageError;

/// Number of dates listed in `BookingAnalytics::popular_dates`.
pub const POPULAR_DATES_LIMIT: usize = 5;

/// Bookings made for one ticket type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketTypeCount {
    pub ticket_type: TicketType,
    pub count: u64,
}

/// Tickets sold for one visit date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateSales {
    pub booking_date: BookingDate,
    pub tickets_sold: u64,
}

/// Summary figures across every stored booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingAnalytics {
    pub total_bookings: u64,
    pub total_revenue: Decimal,
    pub bookings_by_type: Vec<TicketTypeCount>,
    /// Best-selling dates, most tickets first, at most `POPULAR_DATES_LIMIT`.
    pub popular_dates: Vec<DateSales>,
}

/// Read-side port for the dashboard.
#[async_trait]
pub trait AnalyticsReader: Send + Sync {
    async fn summary(&self) -> Result<BookingAnalytics, StorageError>;
}
