//! Pure field validation for the submission form.
//!
//! Each rule is an independent function of one field value that returns a
//! human-readable message on violation, or `None`. The aggregator runs every
//! rule and collects all messages in display order rather than stopping at
//! the first failure, so the caller can surface every problem at once.
//!
//! Nothing here is aware of the request, the store, or the response; the HTTP
//! layer is a thin adapter over these functions.

use lazy_static::lazy_static;

lazy_static! {
    /// `local@domain.tld` with no whitespace and no second `@` in any part.
    static ref EMAIL_REGEX: regex::Regex =
        regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Minimum length of a trimmed full name.
pub const MIN_FULL_NAME_LEN: usize = 5;

/// Full name: required, and at least [`MIN_FULL_NAME_LEN`] characters after trimming.
pub fn validate_full_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Some("Full name is required".to_string());
    }
    if trimmed.chars().count() < MIN_FULL_NAME_LEN {
        return Some("Full name must be at least 5 characters".to_string());
    }
    None
}

/// Email: required, and must match the `local@domain.tld` shape after trimming.
pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Email is required".to_string());
    }
    if !EMAIL_REGEX.is_match(trimmed) {
        return Some("Please enter a valid email address".to_string());
    }
    None
}

/// GitHub username: required, and non-empty once a single leading `@` is stripped.
pub fn validate_github_username(username: &str) -> Option<String> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Some("GitHub username is required".to_string());
    }
    if strip_github_at(trimmed).is_empty() {
        return Some("Please enter a valid GitHub username".to_string());
    }
    None
}

/// Avatar: an accepted image must be selected. Type and size were already
/// enforced when the file was collected, so presence is the only rule left.
pub fn validate_avatar(has_avatar: bool) -> Option<String> {
    if !has_avatar {
        return Some("Please upload an avatar image".to_string());
    }
    None
}

/// Removes at most one leading `@` from a GitHub handle.
pub fn strip_github_at(username: &str) -> &str {
    username.strip_prefix('@').unwrap_or(username)
}

/// Runs every rule and returns the complete violation list in display order:
/// full name, email, GitHub username, avatar. Empty means the submission is
/// acceptable; non-empty rejects it as a whole, with no partial pass.
pub fn validate_submission(
    full_name: &str,
    email: &str,
    github_username: &str,
    has_avatar: bool,
) -> Vec<String> {
    [
        validate_full_name(full_name),
        validate_email(email),
        validate_github_username(github_username),
        validate_avatar(has_avatar),
    ]
    .into_iter()
    .flatten()
    .collect()
}
