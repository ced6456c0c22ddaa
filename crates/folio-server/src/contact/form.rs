//! Contact form parsing and validation

use serde::{Deserialize, Serialize};
use crate::error::ApiError;

const MAX_NAME_LEN: usize = 120;
const MAX_EMAIL_LEN: usize = 254;
const MAX_PHONE_LEN: usize = 40;
const MAX_MESSAGE_LEN: usize = 5000;

/// What the visitor wants to talk about
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Speaking,
    Work,
    Other,
}

impl Subject {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "speaking" => Some(Subject::Speaking),
            "work" => Some(Subject::Work),
            "other" => Some(Subject::Other),
            _ => None,
        }
    }

    /// Human label used in the email subject line
    pub fn label(self) -> &'static str {
        match self {
            Subject::Speaking => "Speaking",
            Subject::Work => "Work",
            Subject::Other => "Other",
        }
    }
}

/// Raw request body; every field is optional until validated
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub verification_token: Option<String>,
}

/// A validated submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Subject,
    pub message: Option<String>,
    pub verification_token: String,
}

/// Loose structural check: one `@`, a non-empty local part, a dotted
/// domain, and no whitespace
pub fn validate_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LEN || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl ContactForm {
    pub fn validate(self) -> Result<ContactRequest, ApiError> {
        let name = non_empty(self.name).ok_or_else(|| invalid("Name is required."))?;
        if name.chars().count() > MAX_NAME_LEN {
            return Err(invalid("Name is too long."));
        }

        let email = non_empty(self.email).ok_or_else(|| invalid("Email is required."))?;
        if !validate_email(&email) {
            return Err(invalid("Please enter a valid email address."));
        }

        let phone = non_empty(self.phone);
        if phone.as_ref().is_some_and(|p| p.chars().count() > MAX_PHONE_LEN) {
            return Err(invalid("Phone number is too long."));
        }

        let subject = non_empty(self.subject)
            .as_deref()
            .and_then(Subject::parse)
            .ok_or_else(|| invalid("Please choose a subject."))?;

        let message = non_empty(self.message);
        if message.as_ref().is_some_and(|m| m.chars().count() > MAX_MESSAGE_LEN) {
            return Err(invalid("Message is too long."));
        }

        let verification_token =
            non_empty(self.verification_token).ok_or_else(|| invalid("Verification is required."))?;

        Ok(ContactRequest {
            name,
            email,
            phone,
            subject,
            message,
            verification_token,
        })
    }
}

fn invalid(message: &str) -> ApiError {
    ApiError::Validation(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: Some("Ada".into()),
            email: Some("ada@example.com".into()),
            phone: None,
            subject: Some("work".into()),
            message: Some("Hello".into()),
            verification_token: Some("token".into()),
        }
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ada@example.com"));
        assert!(validate_email("a.b+c@mail.example.co.uk"));
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("ada@localhost"));
        assert!(!validate_email("ada@example..com"));
        assert!(!validate_email("ada@@example.com"));
        assert!(!validate_email("ada @example.com"));
    }

    #[test]
    fn test_valid_form() {
        let request = form().validate().unwrap();
        assert_eq!(request.subject, Subject::Work);
        assert_eq!(request.phone, None);
    }

    #[test]
    fn test_missing_fields() {
        let mut f = form();
        f.name = Some("   ".into());
        assert!(matches!(f.validate(), Err(ApiError::Validation(_))));

        let mut f = form();
        f.subject = Some("sales".into());
        assert!(matches!(f.validate(), Err(ApiError::Validation(_))));

        let mut f = form();
        f.verification_token = None;
        assert!(matches!(f.validate(), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_body_uses_camel_case() {
        let f: ContactForm = serde_json::from_str(
            r#"{"name":"Ada","email":"ada@example.com","subject":"speaking","verificationToken":"t"}"#,
        )
        .unwrap();
        let request = f.validate().unwrap();
        assert_eq!(request.verification_token, "t");
        assert_eq!(request.subject, Subject::Speaking);
    }
}
