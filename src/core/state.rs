//! Application state shared across routes and middleware.

use crate::core::locks::RoomLockMap;
use crate::repositories::{ReservationRepository, RoomRepository, UserRepository};
use sqlx::SqlitePool;
use std::path::PathBuf;

/// Global application state shared between all routes and middleware.
pub struct AppState {
    /// Repository for user records
    pub user: UserRepository,

    /// Repository for room records
    pub room: RoomRepository,

    /// Repository for reservation records
    pub reservation: ReservationRepository,

    /// Secret key for JWT tokens
    pub jwt_secret: String,

    /// Per-room critical sections serializing the conflict-check + insert
    /// sequence of the booking path
    pub room_locks: RoomLockMap,

    /// Directory where generated booking reports are written
    pub report_dir: PathBuf,
}

impl AppState {
    /// Creates a new AppState wiring every repository to the given
    /// connection pool.
    pub fn new(pool: SqlitePool, jwt_secret: String, report_dir: PathBuf) -> Self {
        Self {
            user: UserRepository::new(pool.clone()),
            room: RoomRepository::new(pool.clone()),
            reservation: ReservationRepository::new(pool),
            jwt_secret,
            room_locks: RoomLockMap::new(),
            report_dir,
        }
    }
}
