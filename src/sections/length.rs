//! Length section - buckets the password by length.

use super::{PasswordProfile, SectionResult};

/// Length at which a password earns the top length bonus.
pub const GOOD_LENGTH: usize = 12;
/// Length below which a password is considered too short.
pub const MIN_LENGTH: usize = 8;

/// Password length in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane counts twice.
pub fn password_length(password: &str) -> usize {
    password.encode_utf16().count()
}

/// Scores the password length. Exactly one bucket always fires.
///
/// # Returns
/// - `Some((3, ..))` for length 12+
/// - `Some((2, ..))` for length 8 to 11
/// - `Some((0, ..))` below 8
pub fn length_section(profile: &PasswordProfile) -> SectionResult {
    if profile.length >= GOOD_LENGTH {
        Some((3, "Good length (12+ characters)"))
    } else if profile.length >= MIN_LENGTH {
        Some((2, "Decent length (8+ characters)"))
    } else {
        Some((0, "Too short (less than 8 characters)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(pwd: &str) -> SectionResult {
        length_section(&PasswordProfile::of(pwd))
    }

    #[test]
    fn test_length_section_too_short() {
        assert_eq!(section("Short1!"), Some((0, "Too short (less than 8 characters)")));
    }

    #[test]
    fn test_length_section_empty() {
        assert_eq!(section("").map(|(delta, _)| delta), Some(0));
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(section("12345678"), Some((2, "Decent length (8+ characters)")));
    }

    #[test]
    fn test_length_section_eleven() {
        assert_eq!(section("abcdefghijk").map(|(delta, _)| delta), Some(2));
    }

    #[test]
    fn test_length_section_good() {
        assert_eq!(section("LongEnough12"), Some((3, "Good length (12+ characters)")));
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        // 7 characters, 14 bytes, 7 code units
        assert_eq!(password_length("ééééééé"), 7);
        // 4 characters, 16 bytes, 8 code units
        assert_eq!(password_length("😀😀😀😀"), 8);
        assert_eq!(password_length(""), 0);
    }

    #[test]
    fn test_length_section_astral_chars() {
        assert_eq!(section("ééééééé").map(|(delta, _)| delta), Some(0));
        assert_eq!(section("😀😀😀😀").map(|(delta, _)| delta), Some(2));
    }
}
