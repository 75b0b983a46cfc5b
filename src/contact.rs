//! Contact Form Validation
//!
//! Required-field checks only. The form is never sent anywhere.

use regex::Regex;
use std::sync::OnceLock;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

/// Submitted field values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    NameRequired,
    EmailRequired,
    EmailInvalid,
    MessageRequired,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::NameRequired => "お名前は必須項目です。",
            FieldError::EmailRequired => "メールアドレスは必須項目です。",
            FieldError::EmailInvalid => "有効なメールアドレスを入力してください。",
            FieldError::MessageRequired => "お問い合わせ内容は必須項目です。",
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    email_re().is_match(email)
}

/// Every problem with the form, in field order
pub fn validate(form: &ContactForm) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if form.name.trim().is_empty() {
        errors.push(FieldError::NameRequired);
    }
    if form.email.trim().is_empty() {
        errors.push(FieldError::EmailRequired);
    } else if !is_valid_email(&form.email) {
        errors.push(FieldError::EmailInvalid);
    }
    if form.message.trim().is_empty() {
        errors.push(FieldError::MessageRequired);
    }
    errors
}

/// One line per error, as shown in the notification
pub fn error_summary(errors: &[FieldError]) -> String {
    errors.iter().map(FieldError::message).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(validate(&form("山田", "taro@example.com", "こんにちは")).is_empty());
    }

    #[test]
    fn test_all_missing() {
        let errors = validate(&form("  ", "", "\n"));
        assert_eq!(
            errors,
            vec![FieldError::NameRequired, FieldError::EmailRequired, FieldError::MessageRequired]
        );
    }

    #[test]
    fn test_invalid_email() {
        for email in ["taro", "taro@example", "ta ro@example.com", "@example.com"] {
            assert_eq!(validate(&form("a", email, "b")), vec![FieldError::EmailInvalid], "{}", email);
        }
    }

    #[test]
    fn test_error_summary_lines() {
        let summary = error_summary(&[FieldError::NameRequired, FieldError::EmailInvalid]);
        assert_eq!(summary, "お名前は必須項目です。\n有効なメールアドレスを入力してください。");
    }
}
