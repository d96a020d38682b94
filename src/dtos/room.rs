use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::Room;

#[derive(Deserialize, Debug, Validate)]
pub struct CreateRoomDTO {
    pub number: i64,
    #[validate(length(min = 1, max = 32))]
    pub name: String,
}

/// Partial update; only `Some(_)` fields are written.
#[derive(Deserialize, Debug, Validate)]
pub struct UpdateRoomDTO {
    pub number: Option<i64>,
    #[validate(length(min = 1, max = 32))]
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RoomDTO {
    pub id: Option<i64>,
    pub number: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Room> for RoomDTO {
    fn from(value: Room) -> Self {
        Self {
            id: Some(value.room_id),
            number: value.number,
            name: value.name,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
