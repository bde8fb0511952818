//! Application error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::delivery::DeliveryError;
use crate::models::ContactResponse;
use crate::validation::ValidationFailure;

pub const NOT_CONFIGURED_MESSAGE: &str = "Email service is not configured.";
pub const DELIVERY_FALLBACK_MESSAGE: &str = "Failed to send email.";
pub const UNEXPECTED_MESSAGE: &str = "Something went wrong. Please try again.";
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body.";

pub type Result<T> = std::result::Result<T, ContactError>;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationFailure),

    #[error("Email delivery is not configured")]
    ServiceUnavailable,

    #[error("Delivery error: {0}")]
    Delivery(DeliveryError),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<DeliveryError> for ContactError {
    fn from(err: DeliveryError) -> Self {
        match err {
            DeliveryError::Provider { .. } => ContactError::Delivery(err),
            // No provider verdict to report; treated like any other fault.
            DeliveryError::Transport(source) => ContactError::Unexpected(source.into()),
        }
    }
}

impl ContactError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContactError::Validation(_) | ContactError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ContactError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ContactError::Delivery(_) | ContactError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The text shown to the caller. Never includes internal detail.
    pub fn public_message(&self) -> String {
        match self {
            ContactError::Validation(failure) => failure.message().to_string(),
            ContactError::ServiceUnavailable => NOT_CONFIGURED_MESSAGE.to_string(),
            ContactError::Delivery(DeliveryError::Provider { message, .. }) if !message.trim().is_empty() => {
                message.clone()
            }
            ContactError::Delivery(_) => DELIVERY_FALLBACK_MESSAGE.to_string(),
            ContactError::InvalidBody(_) => INVALID_BODY_MESSAGE.to_string(),
            ContactError::Unexpected(_) => UNEXPECTED_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        match &self {
            ContactError::Validation(failure) => {
                tracing::warn!("Rejected contact submission: {}", failure);
            }
            ContactError::ServiceUnavailable => {
                tracing::warn!("Contact submission refused: email delivery is not configured");
            }
            ContactError::Delivery(err) => {
                tracing::error!("Email provider error: {}", err);
            }
            ContactError::InvalidBody(detail) => {
                tracing::warn!("Unreadable contact request body: {}", detail);
            }
            ContactError::Unexpected(err) => {
                tracing::error!("Contact API error: {:?}", err);
            }
        }

        let status = self.status_code();
        let body = Json(ContactResponse::failed(self.public_message()));

        (status, body).into_response()
    }
}
