//! Public API types

use axum::response::{IntoResponse, Response};
use http::StatusCode;

use crate::availability::BookingError;
use crate::checkout::CheckoutError;
use crate::insights::WithdrawalError;
use crate::marketplace::ClientError;
use crate::payout::PayoutError;

// Errors

pub struct ApiError(anyhow::Error);

fn client_status(err: &ClientError) -> StatusCode {
    match err.status() {
        Some(401 | 403) => StatusCode::UNAUTHORIZED,
        Some(404) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ApiError {
    /// Status for the first cause in the chain that has one.
    pub fn status(&self) -> StatusCode {
        for cause in self.0.chain() {
            if let Some(err) = cause.downcast_ref::<CheckoutError>() {
                return match err {
                    CheckoutError::Client(err) => client_status(err),
                    CheckoutError::PaymentFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                    _ => StatusCode::UNPROCESSABLE_ENTITY,
                };
            }
            if let Some(err) = cause.downcast_ref::<PayoutError>() {
                return match err {
                    PayoutError::Client(err) => client_status(err),
                    _ => StatusCode::UNPROCESSABLE_ENTITY,
                };
            }
            if cause.is::<BookingError>() || cause.is::<WithdrawalError>() {
                return StatusCode::UNPROCESSABLE_ENTITY;
            }
            if let Some(err) = cause.downcast_ref::<ClientError>() {
                return client_status(err);
            }
        }
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Always log the error
        tracing::error!("{}", self.0);

        let status = self.status();
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            format!("Something went wrong: {}", self.0)
        } else {
            self.0.to_string()
        };
        (status, message).into_response()
    }
}

/// Enables using `?` on functions that return `Result<_,
/// anyhow::Error>` to turn them into `Result<_, ApiError>`
impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

// Re-export public types from each route

pub mod availability {
    pub use crate::api::routes::availability::public::*;
}

pub mod dashboard {
    pub use crate::api::routes::dashboard::public::*;
}

pub mod reservations {
    pub use crate::api::routes::reservations::public::*;
}

pub mod reviews {
    pub use crate::api::routes::reviews::public::*;
}

pub mod search {
    pub use crate::api::routes::search::public::*;
}

pub mod withdrawals {
    pub use crate::api::routes::withdrawals::public::*;
}
