use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, instrument};

/// Per-room critical sections for the booking path.
///
/// The conflict check and the insert in `services::booking::reserve` must
/// run as one atomic unit per room, otherwise two concurrent requests can
/// both observe "no conflict" and both commit overlapping reservations.
/// Bookings for different rooms never contend with each other.
///
/// Entries are created on first use and kept for the life of the process;
/// the key space is the set of rooms, which stays small.
pub struct RoomLockMap {
    locks: DashMap<i64, Arc<Mutex<()>>>,
}

impl RoomLockMap {
    pub fn new() -> Self {
        RoomLockMap {
            locks: DashMap::new(),
        }
    }

    /// Acquires the lock for `room_id`, waiting if another booking for the
    /// same room is in flight. The guard releases the room on drop.
    #[instrument(skip(self))]
    pub async fn acquire(&self, room_id: i64) -> OwnedMutexGuard<()> {
        // Clone the Arc out of the map entry before awaiting so the shard
        // lock is not held across the await point.
        let lock = self.locks.entry(room_id).or_default().clone();
        debug!("Waiting for room lock");
        lock.lock_owned().await
    }
}

impl Default for RoomLockMap {
    fn default() -> Self {
        Self::new()
    }
}
