//! Password strength evaluator - main scoring logic.

use secrecy::SecretString;

use crate::sections::{character_variety_section, length_section, SectionResult};
use crate::types::{StrengthEvaluation, StrengthScore};

/// Evaluates password strength and returns the score with unmet criteria.
///
/// One point per satisfied criterion: length of at least 8, a lowercase
/// letter, an uppercase letter, a digit, and a symbol. There is no weighting,
/// no position sensitivity and no dictionary penalty.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthEvaluation {
    let mut points = 0u8;
    let mut missing = Vec::new();

    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&SecretString) -> SectionResult); 2] = [
        ("length", length_section),
        ("variety", character_variety_section),
    ];

    for (_section_name, section_fn) in sections {
        for (criterion, met) in section_fn(password) {
            if met {
                points += 1;
            } else {
                missing.push(criterion);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(section = _section_name, points, "section evaluated");
    }

    StrengthEvaluation {
        score: StrengthScore::new(points),
        missing,
    }
}

/// Scores a password in `0..=5`.
pub fn score_password(password: &SecretString) -> StrengthScore {
    evaluate_password_strength(password).score
}
