use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// Literal wire payloads for the two booking failures. The busy payload is
/// wrapped in an extra sequence level while the time payload is a bare
/// pair; existing clients depend on both shapes exactly as they are.
pub const BOOKING_TIME_IS_BUSY: (&str, &str) =
    ("Время бронирования недоступно", "booking_time_is_busy");
pub const INCORRECT_RESERVATION_TIME: (&str, &str) =
    ("Время бронирования указано неверно", "incorrect_reservation_time");

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

/// Application error returned by handlers and services.
///
/// The two booking variants are user-facing validation failures rendered
/// with their literal payloads; everything else is an infrastructure error
/// rendered as `{error, details}`.
#[derive(Debug)]
pub enum AppError {
    /// `reserved_from >= reserved_to` on a booking request.
    ReservationTime,
    /// The requested interval overlaps an ACTIVE reservation for the room.
    ReservationBusy,
    Infra {
        status: StatusCode,
        message: &'static str,
        details: Option<String>,
    },
}

impl AppError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self::Infra {
            status,
            message,
            details: None,
        }
    }

    pub fn with_details(self, details: impl Into<String>) -> Self {
        match self {
            Self::Infra {
                status, message, ..
            } => Self::Infra {
                status,
                message,
                details: Some(details.into()),
            },
            other => other,
        }
    }

    // Common error constructors
    pub fn not_found(message: &'static str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: &'static str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: &'static str) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: &'static str) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn conflict(message: &'static str) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn internal_server_error(message: &'static str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn service_unavailable(message: &'static str) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::not_found("Resource not found"),

            sqlx::Error::Database(e) => {
                Self::bad_request("Database error").with_details(e.to_string())
            }

            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                Self::service_unavailable("Database unavailable")
            }

            _ => Self::internal_server_error("Internal server error"),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::bad_request("Validation error").with_details(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal_server_error("Report file error").with_details(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            // Busy: one level deeper than the time error, [[message, code]].
            Self::ReservationBusy => {
                (StatusCode::BAD_REQUEST, Json([BOOKING_TIME_IS_BUSY])).into_response()
            }
            // Time: a bare [message, code] pair.
            Self::ReservationTime => {
                (StatusCode::BAD_REQUEST, Json(INCORRECT_RESERVATION_TIME)).into_response()
            }
            Self::Infra {
                status,
                message,
                details,
            } => {
                let body = Json(ErrorResponse {
                    error: message,
                    details,
                });
                (status, body).into_response()
            }
        }
    }
}
