use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::{Reservation, ReservationStatus};

/// Body of POST /booking/reservation. The interval ordering itself is not
/// a field-level constraint; the booking service checks it and answers
/// with the dedicated time-error payload.
#[derive(Deserialize, Debug, Validate)]
pub struct CreateReservationDTO {
    pub reserved_from: DateTime<Utc>,
    pub reserved_to: DateTime<Utc>,
    pub room_id: i64,
    #[validate(length(max = 256))]
    pub purpose_of_booking: String,
}

/// Query parameters of GET /booking/reservations.
#[derive(Deserialize, Debug)]
pub struct ReservationsQueryDTO {
    pub reserved_from: DateTime<Utc>,
    pub reserved_to: DateTime<Utc>,
    pub room_id: i64,
}

/// Query parameters of GET /booking/report; the room filter is optional.
#[derive(Deserialize, Debug)]
pub struct ReportQueryDTO {
    pub reserved_from: DateTime<Utc>,
    pub reserved_to: DateTime<Utc>,
    pub room_id: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ReservationDTO {
    pub id: Option<i64>,
    pub purpose_of_booking: String,
    pub reserved_from: DateTime<Utc>,
    pub reserved_to: DateTime<Utc>,
    pub status: ReservationStatus,
    pub user_id: i64,
    pub room_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationDTO {
    fn from(value: Reservation) -> Self {
        Self {
            id: Some(value.reservation_id),
            purpose_of_booking: value.purpose_of_booking,
            reserved_from: value.reserved_from,
            reserved_to: value.reserved_to,
            status: value.status,
            user_id: value.user_id,
            room_id: value.room_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
