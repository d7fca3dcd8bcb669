//! GetAnalyticsHandler - Query handler for the booking dashboard.

use std::sync::Arc;

use crate::ports::{AnalyticsReader, BookingAnalytics, StorageError};

/// Handler for the dashboard summary.
pub struct GetAnalyticsHandler {
    reader: Arc<dyn AnalyticsReader>,
}

impl GetAnalyticsHandler {
    pub fn new(reader: Arc<dyn AnalyticsReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self) -> Result<BookingAnalytics, StorageError> {
        let summary = self.reader.summary().await?;
        tracing::debug!(
            total_bookings = summary.total_bookings,
            total_revenue = %summary.total_revenue,
            "Loaded booking analytics"
        );
        Ok(summary)
    }
}
