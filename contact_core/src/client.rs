//! Contact form client: local checks, submission, and form state
//!
//! [`ContactForm`] holds what the user typed and where the submission stands.
//! [`ContactClient`] performs the single POST to the contact endpoint.
//!
//! A submission is split into [`ContactForm::begin_submit`] and
//! [`ContactForm::finish_submit`] so a UI can keep the form responsive while
//! the request is in flight; [`ContactForm::submit`] does both in one call.

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{ContactRequest, ContactResponse};
use crate::validation::{is_valid_email, ValidationFailure};

pub const SUCCESS_NOTICE: &str = "Message sent! I'll get back to you soon.";
pub const FAILURE_FALLBACK: &str = "Failed to send message. Please try again.";
pub const NETWORK_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    Success,
    Error(String),
}

impl FormState {
    /// Text of the transient notification for this state, if any.
    pub fn notification(&self) -> Option<&str> {
        match self {
            FormState::Success => Some(SUCCESS_NOTICE),
            FormState::Error(message) => Some(message.as_str()),
            FormState::Idle | FormState::Submitting => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Server rejected the submission ({status})")]
    Rejected { status: u16, message: Option<String> },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct ContactClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one submission. A non-2xx answer becomes
    /// [`ClientError::Rejected`] carrying the server's `error` text when the
    /// body had one.
    pub async fn send(&self, request: &ContactRequest) -> Result<ContactResponse, ClientError> {
        let response = self.http.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        let body = response.json::<ContactResponse>().await.ok();

        if status.is_success() {
            return Ok(body.unwrap_or_else(|| ContactResponse::sent(None)));
        }

        Err(ClientError::Rejected {
            status: status.as_u16(),
            message: body.and_then(|b| b.error),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    email_error: Option<ValidationFailure>,
    state: FormState,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
            email_error: None,
            state: FormState::Idle,
        }
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    /// Updates a field. Editing the email clears its inline error.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => {
                self.email = value;
                self.email_error = None;
            }
            FormField::Subject => self.subject = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Inline message shown under the email field.
    pub fn email_error(&self) -> Option<&'static str> {
        self.email_error.map(|failure| failure.message())
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    /// Runs the local email check and, if it passes, moves to `Submitting`
    /// and returns the trimmed payload. Returns `None` when the email is
    /// malformed or a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactRequest> {
        self.email_error = None;

        if !is_valid_email(&self.email) {
            self.email_error = Some(ValidationFailure::InvalidEmail);
            return None;
        }

        if self.is_submitting() {
            debug!("Ignoring duplicate submit while a request is in flight");
            return None;
        }

        self.state = FormState::Submitting;

        Some(ContactRequest::new(
            self.name.trim(),
            self.email.trim(),
            self.subject.trim(),
            self.message.trim(),
        ))
    }

    /// Applies the outcome of a request started with [`begin_submit`].
    ///
    /// [`begin_submit`]: ContactForm::begin_submit
    pub fn finish_submit(&mut self, outcome: Result<ContactResponse, ClientError>) {
        match outcome {
            Ok(_) => {
                self.name.clear();
                self.email.clear();
                self.subject.clear();
                self.message.clear();
                self.state = FormState::Success;
            }
            Err(ClientError::Rejected { status, message }) => {
                warn!(status, "Contact submission rejected");
                let message = message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| FAILURE_FALLBACK.to_string());
                self.state = FormState::Error(message);
            }
            Err(ClientError::Transport(err)) => {
                warn!("Contact submission failed: {}", err);
                self.state = FormState::Error(NETWORK_FAILURE.to_string());
            }
        }
    }

    pub async fn submit(&mut self, client: &ContactClient) {
        let Some(request) = self.begin_submit() else {
            return;
        };

        let outcome = client.send(&request).await;
        self.finish_submit(outcome);
    }
}
