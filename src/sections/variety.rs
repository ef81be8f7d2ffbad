//! Character variety section - lowercase, uppercase, digits and special chars.
//!
//! Classes follow ASCII ranges: anything outside `[A-Za-z0-9]`, including
//! every non-ASCII character, counts as special.

use super::{PasswordProfile, SectionResult};

/// Which character classes appear in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharClasses {
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl CharClasses {
    pub fn of(password: &str) -> Self {
        password.chars().fold(Self::default(), |mut classes, c| {
            if c.is_ascii_lowercase() {
                classes.has_lower = true;
            } else if c.is_ascii_uppercase() {
                classes.has_upper = true;
            } else if c.is_ascii_digit() {
                classes.has_digit = true;
            } else {
                classes.has_special = true;
            }
            classes
        })
    }

    /// Brute-force alphabet size: 26 + 26 + 10 + 32 for the classes present.
    pub fn charset_size(&self) -> u32 {
        let mut size = 0;
        if self.has_lower {
            size += 26;
        }
        if self.has_upper {
            size += 26;
        }
        if self.has_digit {
            size += 10;
        }
        if self.has_special {
            size += 32;
        }
        size
    }
}

pub fn lowercase_section(profile: &PasswordProfile) -> SectionResult {
    profile
        .classes
        .has_lower
        .then_some((1, "Contains lowercase letters"))
}

pub fn uppercase_section(profile: &PasswordProfile) -> SectionResult {
    profile
        .classes
        .has_upper
        .then_some((1, "Contains uppercase letters"))
}

pub fn digit_section(profile: &PasswordProfile) -> SectionResult {
    profile.classes.has_digit.then_some((1, "Contains numbers"))
}

pub fn special_section(profile: &PasswordProfile) -> SectionResult {
    profile
        .classes
        .has_special
        .then_some((2, "Contains special characters"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classes_all_categories() {
        let classes = CharClasses::of("HasAll123!@#");
        assert!(classes.has_lower && classes.has_upper && classes.has_digit && classes.has_special);
        assert_eq!(classes.charset_size(), 94);
    }

    #[test]
    fn test_char_classes_empty() {
        let classes = CharClasses::of("");
        assert_eq!(classes, CharClasses::default());
        assert_eq!(classes.charset_size(), 0);
    }

    #[test]
    fn test_non_ascii_is_special() {
        let classes = CharClasses::of("é");
        assert!(!classes.has_lower);
        assert!(classes.has_special);
        assert_eq!(classes.charset_size(), 32);
    }

    fn profile(pwd: &str) -> PasswordProfile {
        PasswordProfile::of(pwd)
    }

    #[test]
    fn test_variety_sections_missing_uppercase() {
        assert_eq!(uppercase_section(&profile("lowercase123!")), None);
        assert_eq!(
            lowercase_section(&profile("lowercase123!")),
            Some((1, "Contains lowercase letters"))
        );
    }

    #[test]
    fn test_variety_sections_digits_and_special() {
        assert_eq!(digit_section(&profile("NoNumbers!")), None);
        assert_eq!(digit_section(&profile("abc1")), Some((1, "Contains numbers")));
        assert_eq!(special_section(&profile("NoSpecial123")), None);
        assert_eq!(
            special_section(&profile("space here")),
            Some((2, "Contains special characters"))
        );
    }

    #[test]
    fn test_astral_chars_are_special() {
        let classes = CharClasses::of("😀");
        assert!(classes.has_special);
        assert!(!classes.has_lower && !classes.has_upper && !classes.has_digit);
        assert_eq!(classes.charset_size(), 32);
    }
}
