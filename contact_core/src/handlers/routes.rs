use axum::{
    routing::{get, post},
    Router,
};

use super::{contact::handle_contact, health::handle_health};
use crate::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handle_health))
        .route("/api/contact", post(handle_contact))
}
