//! Contact form request and response models

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{validate_email_shape, ValidationFailure};

/// Body of `POST /api/contact` as it arrives on the wire.
///
/// Every field is optional so that a missing key is reported as a
/// validation failure rather than a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ContactRequest {
    pub fn new(name: &str, email: &str, subject: &str, message: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            subject: Some(subject.to_string()),
            message: Some(message.to_string()),
        }
    }
}

/// A validated submission. All fields are trimmed and non-empty, and
/// `email` has the `local@domain.tld` shape. The shape is checked on the
/// address exactly as submitted, so surrounding whitespace is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ContactSubmission {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1))]
    #[validate(custom(function = "validate_email_shape"))]
    pub email: String,

    #[validate(length(min = 1))]
    pub subject: String,

    #[validate(length(min = 1))]
    pub message: String,
}

impl ContactSubmission {
    pub fn parse(request: ContactRequest) -> Result<Self, ValidationFailure> {
        let raw_email = request.email.unwrap_or_default();
        let submission = Self {
            name: trimmed(request.name),
            email: raw_email.trim().to_string(),
            subject: trimmed(request.subject),
            message: trimmed(request.message),
        };

        submission.validate()?;
        validate_email_shape(&raw_email).map_err(|_| ValidationFailure::InvalidEmail)?;

        Ok(submission)
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Body returned by `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    pub fn sent(id: Option<String>) -> Self {
        Self {
            success: true,
            id,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            id: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_fields() {
        let request = ContactRequest::new("  Ann ", "ann@example.com", "\tHi\n", " Hello there ");
        let submission = ContactSubmission::parse(request).unwrap();

        assert_eq!(submission.name, "Ann");
        assert_eq!(submission.email, "ann@example.com");
        assert_eq!(submission.subject, "Hi");
        assert_eq!(submission.message, "Hello there");
    }

    #[test]
    fn test_missing_or_blank_fields_are_required() {
        let blank = ContactRequest::new("", "a@b.com", "x", "y");
        assert_eq!(
            ContactSubmission::parse(blank),
            Err(ValidationFailure::AllFieldsRequired)
        );

        let whitespace = ContactRequest::new("Ann", "a@b.com", "   ", "y");
        assert_eq!(
            ContactSubmission::parse(whitespace),
            Err(ValidationFailure::AllFieldsRequired)
        );

        let missing = ContactRequest {
            message: None,
            ..ContactRequest::new("Ann", "a@b.com", "x", "y")
        };
        assert_eq!(
            ContactSubmission::parse(missing),
            Err(ValidationFailure::AllFieldsRequired)
        );
    }

    #[test]
    fn test_required_check_runs_before_email_check() {
        let request = ContactRequest::new("", "not-an-email", "x", "y");
        assert_eq!(
            ContactSubmission::parse(request),
            Err(ValidationFailure::AllFieldsRequired)
        );

        let blank_email = ContactRequest::new("Ann", "   ", "x", "y");
        assert_eq!(
            ContactSubmission::parse(blank_email),
            Err(ValidationFailure::AllFieldsRequired)
        );
    }

    #[test]
    fn test_invalid_email_shape() {
        for email in ["not-an-email", "bob@example", "bob smith@example.com", "bob@exa mple.com"] {
            let request = ContactRequest::new("Bob", email, "x", "y");
            assert_eq!(
                ContactSubmission::parse(request),
                Err(ValidationFailure::InvalidEmail),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn test_padded_email_is_rejected() {
        for email in [" ann@example.com", "ann@example.com ", "\tann@example.com\n"] {
            let request = ContactRequest::new("Ann", email, "x", "y");
            assert_eq!(
                ContactSubmission::parse(request),
                Err(ValidationFailure::InvalidEmail),
                "{email:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_request_tolerates_missing_keys() {
        let request: ContactRequest = serde_json::from_str(r#"{"name":"Ann"}"#).unwrap();
        assert_eq!(request.name.as_deref(), Some("Ann"));
        assert!(request.email.is_none());
    }

    #[test]
    fn test_response_omits_absent_fields() {
        let sent = serde_json::to_value(ContactResponse::sent(None)).unwrap();
        assert_eq!(sent, serde_json::json!({ "success": true }));

        let failed = serde_json::to_value(ContactResponse::failed("nope")).unwrap();
        assert_eq!(failed, serde_json::json!({ "success": false, "error": "nope" }));
    }
}
