//! Response bodies for the dashboard endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::booking::TicketType;
use crate::ports::BookingAnalytics;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketTypeCountResponse {
    pub ticket_type: TicketType,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopularDateResponse {
    /// `DD/MM/YYYY`
    pub date: String,
    pub tickets_sold: u64,
}

/// GET /api/dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub total_bookings: u64,
    /// Decimal amount without trailing zeros.
    pub total_revenue: String,
    pub bookings_by_type: Vec<TicketTypeCountResponse>,
    pub popular_dates: Vec<PopularDateResponse>,
}

impl From<BookingAnalytics> for DashboardResponse {
    fn from(summary: BookingAnalytics) -> Self {
        Self {
            total_bookings: summary.total_bookings,
            total_revenue: summary.total_revenue.normalize().to_string(),
            bookings_by_type: summary
                .bookings_by_type
                .into_iter()
                .map(|entry| TicketTypeCountResponse {
                    ticket_type: entry.ticket_type,
                    count: entry.count,
                })
                .collect(),
            popular_dates: summary
                .popular_dates
                .into_iter()
                .map(|entry| PopularDateResponse {
                    date: entry.booking_date.to_string(),
                    tickets_sold: entry.tickets_sold,
                })
                .collect(),
        }
    }
}
