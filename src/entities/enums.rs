use serde::{Deserialize, Serialize};

/// Lifecycle state of a reservation.
///
/// Only `Active` reservations participate in the conflict check. The
/// booking path always writes `Active`; `Cancelled` and `Completed` are
/// kept in the schema for forward compatibility and no in-scope operation
/// transitions into them.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Active,
    Cancelled,
    Completed,
}
