//! HTML body of the relayed contact email

use crate::models::ContactSubmission;
use crate::sanitize::{escape_markup, escape_message};

const LABEL_STYLE: &str = "padding: 10px 0; border-bottom: 1px solid #e5e7eb; font-size: 12px; text-transform: uppercase; letter-spacing: 0.05em; color: #6b7280; font-weight: 600;";
const VALUE_STYLE: &str = "padding: 10px 0; border-bottom: 1px solid #e5e7eb; font-weight: 500; color: #111827;";

/// Renders the notification email for a validated submission.
///
/// Every field is escaped before it is embedded. The `mailto:` target is the
/// one exception: it carries the raw trimmed address, which validation has
/// already restricted to a whitespace-free `local@domain.tld`.
pub fn render_contact_email(submission: &ContactSubmission) -> String {
    let name = escape_markup(&submission.name);
    let email = escape_markup(&submission.email);
    let subject = escape_markup(&submission.subject);
    let message = escape_message(&submission.message);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Portfolio Contact</title>
</head>
<body style="margin: 0; padding: 0; background-color: #f4f4f5; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif; font-size: 16px; line-height: 1.6; color: #1a1a1a;">
  <table role="presentation" width="100%" cellspacing="0" cellpadding="0" style="background-color: #f4f4f5; padding: 40px 20px;">
    <tr>
      <td align="center">
        <table role="presentation" width="100%" cellspacing="0" cellpadding="0" style="max-width: 560px; background-color: #ffffff; border-radius: 12px; box-shadow: 0 2px 8px rgba(0,0,0,0.06); overflow: hidden;">
          <tr>
            <td style="padding: 28px 32px; background: linear-gradient(135deg, #0d9488 0%, #0f766e 100%);">
              <h1 style="margin: 0; font-size: 20px; font-weight: 600; color: #ffffff;">New message from your portfolio</h1>
              <p style="margin: 6px 0 0 0; font-size: 13px; color: rgba(255,255,255,0.85);">Someone reached out via your contact form</p>
            </td>
          </tr>
          <tr>
            <td style="padding: 24px 32px 16px 32px;">
              <table role="presentation" width="100%" cellspacing="0" cellpadding="0" style="border-collapse: collapse;">
                <tr>
                  <td style="{label_style} width: 100px;">From</td>
                  <td style="{value_style}">{name}</td>
                </tr>
                <tr>
                  <td style="{label_style}">Email</td>
                  <td style="padding: 10px 0; border-bottom: 1px solid #e5e7eb;">
                    <a href="mailto:{raw_email}" style="color: #0d9488; text-decoration: none;">{email}</a>
                  </td>
                </tr>
                <tr>
                  <td style="{label_style}">Subject</td>
                  <td style="{value_style}">{subject}</td>
                </tr>
              </table>
            </td>
          </tr>
          <tr>
            <td style="padding: 20px 32px 32px 32px;">
              <p style="margin: 0 0 8px 0; font-size: 12px; text-transform: uppercase; letter-spacing: 0.05em; color: #6b7280; font-weight: 600;">Message</p>
              <div style="padding: 16px; background-color: #f8fafc; border-radius: 8px; border-left: 4px solid #0d9488; font-size: 15px; color: #374151; line-height: 1.7;">
                {message}
              </div>
            </td>
          </tr>
          <tr>
            <td style="padding: 16px 32px; background-color: #f8fafc; border-top: 1px solid #e5e7eb; font-size: 12px; color: #6b7280;">
              This email was sent from your portfolio contact form. Reply to respond directly to the sender.
            </td>
          </tr>
        </table>
      </td>
    </tr>
  </table>
</body>
</html>"#,
        label_style = LABEL_STYLE,
        value_style = VALUE_STYLE,
        name = name,
        raw_email = submission.email,
        email = email,
        subject = subject,
        message = message,
    )
}
