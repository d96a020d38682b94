//! Repositories module - one repository per persisted entity.
//!
//! Every repository owns a clone of the SQLite connection pool and is the
//! only place that issues SQL for its entity.

pub mod reservation;
pub mod room;
pub mod traits;
pub mod user;

// Re-export the traits for easier imports
pub use traits::{Create, Delete, Read, Update};

// Re-export the repository structs for easier imports
pub use reservation::ReservationRepository;
pub use room::RoomRepository;
pub use user::UserRepository;
