use crate::config::DeliveryConfig;
use crate::models::ContactSubmission;
use crate::sanitize::quote_header_label;
use crate::template::render_contact_email;

use super::OutboundEmail;

/// Turns a validated submission into the email sent to the site owner.
///
/// The recipient always comes from configuration. Replies go to the
/// submitter, not to the relay address.
pub fn build_outbound_email(submission: &ContactSubmission, config: &DeliveryConfig) -> OutboundEmail {
    let sender_label = format!("{} ({})", submission.name, submission.email);

    OutboundEmail {
        from: format!(
            "\"{}\" <{}>",
            quote_header_label(&sender_label),
            config.from_address
        ),
        to: vec![config.recipient.clone()],
        reply_to: submission.email.clone(),
        subject: format!("{} {}", config.subject_tag, submission.subject),
        html: render_contact_email(submission),
    }
}
