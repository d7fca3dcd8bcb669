//! HTTP handlers for the dashboard endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::error_response;
use crate::application::GetAnalyticsHandler;
use crate::domain::foundation::ErrorCode;

use super::dto::DashboardResponse;

#[derive(Clone)]
pub struct DashboardHandlers {
    analytics_handler: Arc<GetAnalyticsHandler>,
}

impl DashboardHandlers {
    pub fn new(analytics_handler: Arc<GetAnalyticsHandler>) -> Self {
        Self { analytics_handler }
    }
}

/// GET /api/dashboard - Booking figures
pub async fn get_dashboard(State(handlers): State<DashboardHandlers>) -> Response {
    match handlers.analytics_handler.handle().await {
        Ok(summary) => (StatusCode::OK, Json(DashboardResponse::from(summary))).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load dashboard");
            error_response(
                ErrorCode::DatabaseError,
                "Dashboard figures are temporarily unavailable",
            )
        }
    }
}
