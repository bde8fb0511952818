pub mod contact;

pub use contact::{ContactRequest, ContactResponse, ContactSubmission};
