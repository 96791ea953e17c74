//! Input validation for notification dispatch.
//!
//! Validates the reminder sender address. The recipient address is
//! deliberately never validated; it is used as provided by the user tag.

use crate::error::{Error, Result, ValidationError};

/// Validate a reminder sender address.
///
/// Accepts the `local@domain.tld` shape:
/// - exactly one `@`
/// - non-empty local part of ASCII letters, digits, and `_.+-`
/// - domain with a first label of letters, digits, and `-`, a dot, and a
///   non-empty remainder of letters, digits, `-`, and `.`
///
/// # Errors
///
/// Returns `ValidationError` naming the first violated rule.
pub fn validate_sender_address(addr: &str) -> Result<()> {
    let invalid = |reason: &str| -> Error {
        ValidationError::InvalidSenderAddress {
            addr: addr.to_string(),
            reason: reason.to_string(),
        }
        .into()
    };

    let mut parts = addr.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        (_, None, _) => return Err(invalid("missing '@'")),
        _ => return Err(invalid("more than one '@'")),
    };

    if local.is_empty() {
        return Err(invalid("empty local part"));
    }
    if !local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '+' | '-'))
    {
        return Err(invalid(
            "local part may only contain letters, digits, and _.+-",
        ));
    }

    let (label, rest) = match domain.split_once('.') {
        Some(pair) => pair,
        None => return Err(invalid("domain has no dot")),
    };
    if label.is_empty() {
        return Err(invalid("empty first domain label"));
    }
    if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(invalid(
            "first domain label may only contain letters, digits, and -",
        ));
    }
    if rest.is_empty() {
        return Err(invalid("domain ends with a dot"));
    }
    if !rest
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
    {
        return Err(invalid("domain may only contain letters, digits, -, and ."));
    }

    Ok(())
}
