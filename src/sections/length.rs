//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::types::Criterion;

/// Minimum length, in characters, that earns the length point.
pub const MIN_LENGTH: usize = 8;

/// Checks if the password meets the minimum length.
///
/// Length is counted in Unicode scalar values, so `"pässwörd"` is 8 long.
pub fn length_section(password: &SecretString) -> SectionResult {
    let long_enough = password.expose_secret().chars().count() >= MIN_LENGTH;
    vec![(Criterion::MinLength, long_enough)]
}
