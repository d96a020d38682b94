//! Meeting-room booking server library - exposes the main modules for the
//! integration tests.

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export the main types for easier imports
pub use crate::core::{AppError, AppState, auth};
pub use crate::services::root;

use axum::{
    Router, middleware,
    routing::{get, patch, post},
};
use std::sync::Arc;

/// Builds the application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/auth", configure_auth_routes())
        .nest("/booking", configure_booking_routes(state.clone()))
        .nest("/rooms", configure_room_routes(state.clone()))
        .with_state(state)
}

/// Authentication routes (login, register) - the only unauthenticated ones
fn configure_auth_routes() -> Router<Arc<AppState>> {
    use services::*;
    Router::new()
        .route("/login", post(login_user))
        .route("/register", post(register_user))
}

/// Booking routes: create a reservation, list by period, generate a report
fn configure_booking_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    Router::new()
        .route("/reservation", post(make_reservation))
        .route("/reservations", get(list_reservations))
        .route("/report", get(get_reservations_report))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

/// Room administration routes
fn configure_room_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    Router::new()
        .route("/", get(list_rooms).post(create_room))
        .route("/{room_id}", patch(update_room).delete(delete_room))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}
