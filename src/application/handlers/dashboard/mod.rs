//! Dashboard query handlers.

mod get_analytics;

pub use get_analytics::GetAnalyticsHandler;
