//! Strength scorer - additive length and character-class rules.

use secrecy::{ExposeSecret, SecretString};

use crate::sections::{
    digit_section, length_section, lowercase_section, special_section, uppercase_section,
    PasswordProfile, SectionResult,
};
use crate::types::{StrengthLevel, StrengthResult, MAX_SCORE};

/// Scoring sections in evaluation order.
const SECTIONS: [fn(&PasswordProfile) -> SectionResult; 5] = [
    length_section,
    lowercase_section,
    uppercase_section,
    digit_section,
    special_section,
];

/// Scores the password and maps the score to a strength level.
pub fn calculate_strength(password: &SecretString) -> StrengthResult {
    strength_of(password.expose_secret())
}

pub(crate) fn strength_of(pwd: &str) -> StrengthResult {
    let profile = PasswordProfile::of(pwd);
    let mut score = 0;
    let mut reasons = Vec::new();

    for section_fn in SECTIONS {
        if let Some((delta, reason)) = section_fn(&profile) {
            score += delta;
            reasons.push(reason.to_string());
        }
    }

    let level = StrengthLevel::from_score(score);

    StrengthResult {
        level,
        score,
        max_score: MAX_SCORE,
        reasons,
        color: level.color(),
    }
}
