//! Services module - the HTTP service handlers.
//!
//! Each sub-module owns the endpoints of one feature area.

pub mod auth;
pub mod booking;
pub mod report;
pub mod room;

// Re-exports for easier imports
pub use auth::{login_user, register_user};
pub use booking::{list_reservations, make_reservation};
pub use report::get_reservations_report;
pub use room::{create_room, delete_room, list_rooms, update_room};

use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
