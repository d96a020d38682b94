//! Request and response shapes exchanged with clients.

pub mod reservation;
pub mod room;
pub mod user;

pub use reservation::{
    CreateReservationDTO, ReportQueryDTO, ReservationDTO, ReservationsQueryDTO,
};
pub use room::{CreateRoomDTO, RoomDTO, UpdateRoomDTO};
pub use user::{CreateUserDTO, LoginDTO, UserDTO};
