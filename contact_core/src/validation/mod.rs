//! Input validation for contact submissions

pub mod rules;

pub use rules::{is_valid_email, validate_email_shape};

use thiserror::Error;
use validator::ValidationErrors;

/// Why a submission was rejected. The checks run in a fixed order, so a
/// submission that is both incomplete and malformed always reports
/// `AllFieldsRequired`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("All fields are required.")]
    AllFieldsRequired,

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

impl ValidationFailure {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationFailure::AllFieldsRequired => "All fields are required.",
            ValidationFailure::InvalidEmail => "Please enter a valid email address.",
        }
    }
}

impl From<ValidationErrors> for ValidationFailure {
    fn from(errors: ValidationErrors) -> Self {
        let missing_field = errors
            .field_errors()
            .values()
            .flat_map(|field_errors| field_errors.iter())
            .any(|error| error.code == "length");

        if missing_field {
            ValidationFailure::AllFieldsRequired
        } else {
            ValidationFailure::InvalidEmail
        }
    }
}
