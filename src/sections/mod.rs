//! Password scoring sections
//!
//! Each section checks one group of strength criteria.

mod length;
mod variety;

pub use length::{length_section, MIN_LENGTH};
pub use variety::character_variety_section;

use crate::types::Criterion;

/// Result type for section evaluation functions: every criterion the
/// section checked, paired with whether the password satisfied it.
pub type SectionResult = Vec<(Criterion, bool)>;
