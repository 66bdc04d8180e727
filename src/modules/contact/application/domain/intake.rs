// src/modules/contact/application/domain/intake.rs
//
// Validation and normalization of inbound contact submissions. Checks run in
// a fixed order and the first failure wins, so callers always get one
// specific, actionable message.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use utoipa::ToSchema;

/// Local part and domain free of '@'/whitespace, at least one dot in the
/// domain, alphabetic top-level segment of two or more letters. Nothing
/// fancier: deliverability is not this layer's problem.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[A-Za-z]{2,}$").expect("email pattern is valid")
});

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A submission that passed validation: fields trimmed, email lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("Field '{0}' is required")]
    MissingField(&'static str),

    #[error("Please provide a valid email address")]
    InvalidEmail,
}

/// Required-field presence is checked first, in declaration order; only then
/// is the email format examined.
pub fn validate(submission: &ContactSubmission) -> Result<NormalizedSubmission, IntakeError> {
    let fields: [(&'static str, &str); 4] = [
        ("name", &submission.name),
        ("email", &submission.email),
        ("subject", &submission.subject),
        ("message", &submission.message),
    ];

    for (field, value) in fields {
        if value.trim().is_empty() {
            return Err(IntakeError::MissingField(field));
        }
    }

    let email = submission.email.trim().to_lowercase();
    if !EMAIL_RE.is_match(&email) {
        return Err(IntakeError::InvalidEmail);
    }

    Ok(NormalizedSubmission {
        name: submission.name.trim().to_string(),
        email,
        subject: submission.subject.trim().to_string(),
        message: submission.message.trim().to_string(),
    })
}
