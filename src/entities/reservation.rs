use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ReservationStatus;

/// A booking of one room by one user over the half-open interval
/// `[reserved_from, reserved_to)`.
#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Reservation {
    pub reservation_id: i64,
    pub purpose_of_booking: String,
    pub reserved_from: DateTime<Utc>,
    pub reserved_to: DateTime<Utc>,
    pub status: ReservationStatus,
    pub user_id: i64,
    pub room_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
