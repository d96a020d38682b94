//! Room services - administrative management of bookable rooms.

use crate::core::{AppError, AppState};
use crate::dtos::{CreateRoomDTO, RoomDTO, UpdateRoomDTO};
use crate::entities::User;
use crate::repositories::{Create, Delete, Read, Update};
use axum::{
    Extension,
    extract::{Json, Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};
use validator::Validate;

#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id))]
pub async fn list_rooms(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
) -> Result<Json<Vec<RoomDTO>>, AppError> {
    debug!("Listing rooms");
    let rooms = state.room.list_all().await?;

    let rooms_dto: Vec<RoomDTO> = rooms.into_iter().map(RoomDTO::from).collect();
    Ok(Json(rooms_dto))
}

#[instrument(skip(state, current_user, body), fields(user_id = %current_user.user_id, number = %body.number))]
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<CreateRoomDTO>,
) -> Result<(StatusCode, Json<RoomDTO>), AppError> {
    debug!("Creating room");
    body.validate()?;

    let room = state.room.create(&body).await?;
    info!("Room {} created", room.room_id);

    Ok((StatusCode::CREATED, Json(RoomDTO::from(room))))
}

#[instrument(skip(state, current_user, body), fields(user_id = %current_user.user_id, room_id = %room_id))]
pub async fn update_room(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(room_id): Path<i64>,
    Json(body): Json<UpdateRoomDTO>,
) -> Result<Json<RoomDTO>, AppError> {
    debug!("Updating room");
    body.validate()?;

    let room = state.room.update(&room_id, &body).await?;
    Ok(Json(RoomDTO::from(room)))
}

/// Deletes the room; the store cascades the delete to its reservations.
#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id, room_id = %room_id))]
pub async fn delete_room(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(room_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!("Deleting room");
    state
        .room
        .read(&room_id)
        .await?
        .ok_or_else(|| AppError::not_found("Room not found"))?;

    state.room.delete(&room_id).await?;
    info!("Room {} deleted", room_id);
    Ok(StatusCode::NO_CONTENT)
}
