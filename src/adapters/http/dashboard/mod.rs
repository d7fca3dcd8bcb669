//! Dashboard HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::{DashboardResponse, PopularDateResponse, TicketTypeCountResponse};
pub use handlers::DashboardHandlers;
pub use routes::dashboard_routes;
