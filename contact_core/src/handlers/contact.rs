//! Contact form submission handler

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::info;

use crate::{
    delivery::build_outbound_email,
    error::{ContactError, Result},
    extractors::ContactJson,
    models::{ContactRequest, ContactResponse, ContactSubmission},
    AppState,
};

/// `POST /api/contact`
///
/// Checks run in a fixed order: required fields, then email shape, then
/// whether delivery is configured. Only a submission that passes all three
/// reaches the provider, and it is sent exactly once.
pub async fn handle_contact(
    State(state): State<AppState>,
    ContactJson(request): ContactJson<ContactRequest>,
) -> Result<impl IntoResponse> {
    let submission = ContactSubmission::parse(request)?;

    let sender = state
        .sender
        .as_ref()
        .ok_or(ContactError::ServiceUnavailable)?;

    info!(
        reply_to = %submission.email,
        subject_len = submission.subject.chars().count(),
        message_len = submission.message.chars().count(),
        "POST /api/contact - relaying submission"
    );

    let email = build_outbound_email(&submission, &state.config.delivery);
    let receipt = sender.send(email).await?;

    info!(id = ?receipt.id, "Contact email sent");

    Ok((StatusCode::OK, Json(ContactResponse::sent(receipt.id))))
}
