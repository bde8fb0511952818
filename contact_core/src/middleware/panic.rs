//! Converts handler panics into the generic contact error response

use axum::response::{IntoResponse, Response};
use std::any::Any;

use crate::error::ContactError;

pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ContactError::Unexpected(anyhow::anyhow!("handler panicked: {}", detail)).into_response()
}
