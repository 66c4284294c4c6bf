//! Field validators shared by every entity group.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::errors::ModelError;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@.]+$").expect("email pattern compiles")
});

/// Required text: present and not blank.
pub fn require_text(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Optional text in a patch: absent is fine, present must not be blank.
pub fn require_text_if_present(field: &str, value: Option<&str>) -> Result<(), ModelError> {
    match value {
        Some(v) => require_text(field, v),
        None => Ok(()),
    }
}

pub fn validate_email(field: &str, value: &str) -> Result<(), ModelError> {
    if !EMAIL_RE.is_match(value) {
        return Err(ModelError::validation(format!("{field} must be a valid email address")));
    }
    Ok(())
}

pub fn validate_url(field: &str, value: &str) -> Result<(), ModelError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| ModelError::validation(format!("{field} must be a valid URL: {e}")))
}
