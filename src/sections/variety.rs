//! Character variety section - checks for lowercase, uppercase, digits and symbols.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::types::Criterion;

/// Checks which ASCII character classes appear anywhere in the password.
///
/// A symbol is any character outside `[A-Za-z0-9]`, which includes spaces
/// and every non-ASCII character.
pub fn character_variety_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_symbol = pwd.chars().any(|c| !c.is_ascii_alphanumeric());

    vec![
        (Criterion::Lowercase, has_lower),
        (Criterion::Uppercase, has_upper),
        (Criterion::Digit, has_digit),
        (Criterion::Symbol, has_symbol),
    ]
}
