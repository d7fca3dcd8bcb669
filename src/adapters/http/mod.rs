//! HTTP adapter - axum endpoints for the booking assistant.
//!
//! - `POST /api/chat` - one chat turn
//! - `GET /api/chat/sessions/:id` - session snapshot
//! - `GET /api/dashboard` - booking figures
//! - `GET /api/languages` - supported languages
//! - `GET /health` - liveness

pub mod chat;
pub mod dashboard;
mod error;
mod router;
mod system;

pub use chat::{chat_routes, ChatHandlers};
pub use dashboard::{dashboard_routes, DashboardHandlers};
pub use error::{error_response, status_for, ErrorResponse};
pub use router::{api_router, HttpSettings};
pub use system::{system_routes, LanguageResponse};
