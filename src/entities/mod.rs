//! Persistent entities mapped 1:1 onto the database tables.

pub mod enums;
pub mod reservation;
pub mod room;
pub mod user;

pub use enums::ReservationStatus;
pub use reservation::Reservation;
pub use room::Room;
pub use user::User;
