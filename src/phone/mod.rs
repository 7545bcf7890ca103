//! Phone number normalization for the Bolivian numbering plan.

use thiserror::Error;

/// International prefix every outbound number is canonicalized to.
pub const COUNTRY_PREFIX: &str = "+591";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhoneError {
    #[error("phone number is required")]
    Empty,
}

/// Normalize an arbitrarily formatted phone number to `+591XXXXXXXX`.
///
/// Whitespace, hyphens, and parentheses are stripped. Input already carrying
/// the country prefix (with or without the leading `+`) is preserved;
/// anything else gets the full prefix prepended. Idempotent.
pub fn normalize(raw: &str) -> Result<String, PhoneError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '(' && *c != ')')
        .collect();

    if cleaned.is_empty() {
        return Err(PhoneError::Empty);
    }

    if cleaned.starts_with(COUNTRY_PREFIX) {
        Ok(cleaned)
    } else if cleaned.starts_with("591") {
        Ok(format!("+{}", cleaned))
    } else {
        Ok(format!("{}{}", COUNTRY_PREFIX, cleaned))
    }
}

/// Mask a phone number for logs and events: country prefix and last three
/// digits stay visible, everything in between is starred out.
pub fn mask(number: &str) -> String {
    let chars: Vec<char> = number.chars().collect();
    if chars.len() <= 7 {
        return "*".repeat(chars.len());
    }

    let prefix: String = chars[..4].iter().collect();
    let suffix: String = chars[chars.len() - 3..].iter().collect();
    format!("{}{}{}", prefix, "*".repeat(chars.len() - 7), suffix)
}
