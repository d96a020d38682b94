//! Booking services - reservation creation and period listing.

use crate::core::{AppError, AppState};
use crate::dtos::{CreateReservationDTO, ReservationDTO, ReservationsQueryDTO};
use crate::entities::{Reservation, User};
use axum::{
    Extension,
    extract::{Json, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// Books a room for the half-open window `[reserved_from, reserved_to)`
/// on behalf of `user_id`.
///
/// Validation order matters: a malformed interval fails before any query
/// is issued, and a conflict fails before anything is written. The
/// conflict check and the insert run inside the room's critical section,
/// so concurrent overlapping requests for one room serialize and exactly
/// one of them wins.
pub async fn reserve(
    state: &AppState,
    user_id: i64,
    data: &CreateReservationDTO,
) -> Result<Reservation, AppError> {
    data.validate()?;

    if data.reserved_from >= data.reserved_to {
        warn!("Rejecting reservation with inverted or empty interval");
        return Err(AppError::ReservationTime);
    }

    let _room_guard = state.room_locks.acquire(data.room_id).await;

    if state
        .reservation
        .has_active_overlap(data.room_id, &data.reserved_from, &data.reserved_to)
        .await?
    {
        warn!("Room {} is busy in the requested window", data.room_id);
        return Err(AppError::ReservationBusy);
    }

    let reservation = state.reservation.create_active(user_id, data).await?;
    info!(
        "Reservation {} created for room {}",
        reservation.reservation_id, reservation.room_id
    );
    Ok(reservation)
}

#[instrument(skip(state, current_user, body), fields(user_id = %current_user.user_id, room_id = %body.room_id))]
pub async fn make_reservation(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<CreateReservationDTO>,
) -> Result<StatusCode, AppError> {
    debug!("Creating reservation");
    reserve(&state, current_user.user_id, &body).await?;
    Ok(StatusCode::CREATED)
}

/// Lists the ACTIVE reservations of one room overlapping the window, in
/// start-time order. Deliberately does not re-validate the window: an
/// inverted range can overlap nothing and simply yields an empty list.
#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id, room_id = %params.room_id))]
pub async fn list_reservations(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Query(params): Query<ReservationsQueryDTO>,
) -> Result<Json<Vec<ReservationDTO>>, AppError> {
    debug!("Listing reservations by period");
    let reservations = state
        .reservation
        .find_active_overlapping(params.room_id, &params.reserved_from, &params.reserved_to)
        .await?;

    info!("Found {} reservations in period", reservations.len());

    let reservations_dto: Vec<ReservationDTO> =
        reservations.into_iter().map(ReservationDTO::from).collect();

    Ok(Json(reservations_dto))
}
