//! Resend HTTP API client

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::DeliveryConfig;

use super::{DeliveryError, EmailSender, OutboundEmail, SendReceipt};

#[derive(Debug, Default, Deserialize)]
struct SendEmailResponse {
    id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ProviderErrorBody {
    message: Option<String>,
}

#[derive(Clone)]
pub struct ResendClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl ResendClient {
    pub fn new(api_url: &str, api_key: &str) -> Result<Self, DeliveryError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("contact_core/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Builds a client when a credential is configured, `None` otherwise.
    pub fn from_config(config: &DeliveryConfig) -> Result<Option<Self>, DeliveryError> {
        match config.credential() {
            Some(key) => Ok(Some(Self::new(&config.api_url, key)?)),
            None => Ok(None),
        }
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.api_url)
    }
}

#[async_trait]
impl EmailSender for ResendClient {
    async fn send(&self, email: OutboundEmail) -> Result<SendReceipt, DeliveryError> {
        let response = self
            .http
            .post(self.emails_url())
            .bearer_auth(&self.api_key)
            .json(&email)
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "Email provider responded");

        if status.is_success() {
            let body = response.json::<SendEmailResponse>().await.unwrap_or_default();
            return Ok(SendReceipt { id: body.id });
        }

        let body = response.json::<ProviderErrorBody>().await.unwrap_or_default();
        Err(DeliveryError::Provider {
            status: status.as_u16(),
            message: body.message.unwrap_or_default(),
        })
    }
}
