use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bookable meeting room. Created and updated through the room
/// administration endpoints, otherwise an immutable reservation target.
#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Room {
    pub room_id: i64,
    pub number: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
