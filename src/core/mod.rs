//! Cross-cutting concerns: configuration, error type, auth, shared state.

pub mod auth;
pub mod config;
pub mod error;
pub mod locks;
pub mod state;

pub use auth::{authentication_middleware, decode_jwt, encode_jwt};
pub use error::AppError;
pub use state::AppState;
