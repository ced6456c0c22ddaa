//! Notification email built from a contact submission

use serde::Serialize;
use super::form::{validate_email, ContactRequest};

/// Message handed to the mail provider
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailPayload {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

/// Escape text for interpolation into HTML
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Build the notification for `request`.
///
/// `reply_to` is only set when the visitor's address passes
/// [`validate_email`], so replies never go to a malformed address.
pub fn build_email(request: &ContactRequest, from: &str, to: &str) -> EmailPayload {
    let phone = request.phone.as_deref().unwrap_or("-");
    let message = request.message.as_deref().unwrap_or("");

    let html = format!(
        "<h2>New {subject} inquiry</h2>\
         <p><strong>Name:</strong> {name}</p>\
         <p><strong>Email:</strong> {email}</p>\
         <p><strong>Phone:</strong> {phone}</p>\
         <p><strong>Message:</strong></p>\
         <p style=\"white-space:pre-wrap\">{message}</p>",
        subject = escape_html(request.subject.label()),
        name = escape_html(&request.name),
        email = escape_html(&request.email),
        phone = escape_html(phone),
        message = escape_html(message),
    );

    let text = format!(
        "New {} inquiry\n\nName: {}\nEmail: {}\nPhone: {}\n\n{}\n",
        request.subject.label(),
        request.name,
        request.email,
        phone,
        message,
    );

    EmailPayload {
        from: from.to_string(),
        to: vec![to.to_string()],
        subject: format!("[{}] New message from {}", request.subject.label(), request.name),
        html,
        text,
        reply_to: validate_email(&request.email).then(|| request.email.clone()),
    }
}
