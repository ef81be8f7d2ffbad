//! Password analysis sections
//!
//! Each section checks a single aspect of the password.

mod length;
mod pattern;
mod variety;

pub use length::{length_section, password_length, GOOD_LENGTH};
pub use pattern::{matched_patterns, WeakPattern, WeakPatternRule, WEAK_PATTERNS};
pub use variety::{
    digit_section, lowercase_section, special_section, uppercase_section, CharClasses,
};

/// Result type for scoring sections.
/// - `Some((delta, reason))` - Rule fired, adds `delta` to the score
/// - `None` - Rule did not apply
pub type SectionResult = Option<(u32, &'static str)>;

/// Length and character classes of a password, gathered in one pass each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordProfile {
    /// Length in UTF-16 code units.
    pub length: usize,
    pub classes: CharClasses,
}

impl PasswordProfile {
    pub fn of(password: &str) -> Self {
        Self {
            length: password_length(password),
            classes: CharClasses::of(password),
        }
    }
}
