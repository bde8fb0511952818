//! Outbound email delivery
//!
//! The contact handler only sees the [`EmailSender`] trait. [`ResendClient`]
//! is the production implementation, talking to a Resend-compatible HTTP API.

pub mod message;
pub mod resend;

pub use message::build_outbound_email;
pub use resend::ResendClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A fully rendered email, ready to hand to a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
}

/// What the provider returned for an accepted email.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendReceipt {
    pub id: Option<String>,
}

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Email provider rejected the message ({status}): {message}")]
    Provider { status: u16, message: String },

    #[error("Email provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: OutboundEmail) -> Result<SendReceipt, DeliveryError>;
}
