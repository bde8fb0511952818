//! JSON extractor whose rejections use the contact response shape

use axum::{
    async_trait,
    body::Body,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::ContactError;

/// Like `axum::Json`, but a bad body is answered with
/// `{ "success": false, "error": ... }` instead of axum's plain-text rejection.
pub struct ContactJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ContactJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ContactError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ContactJson(value)),
            Err(rejection) => Err(ContactError::InvalidBody(rejection.body_text())),
        }
    }
}
