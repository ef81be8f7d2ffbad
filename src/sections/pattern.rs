//! Pattern analysis section - predictable shapes attackers guess early.

use secrecy::{ExposeSecret, SecretString};

use crate::types::VulnerabilityKind;

/// A recognizable weak shape in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeakPattern {
    /// Only `[0-9]`.
    AllNumbers,
    /// Only `[a-z]`.
    AllLowercase,
    /// Only `[A-Z]`.
    AllUppercase,
    /// The same UTF-16 code unit three or more times in a row.
    RepeatedCharacters,
    /// `123`, `abc` or `qwe`, any case.
    Sequential,
    /// `password`, `admin` or `user`, any case.
    CommonWord,
    /// A year between 1950 and 2029.
    BirthYear,
}

const SEQUENCES: [&str; 3] = ["123", "abc", "qwe"];
const COMMON_WORDS: [&str; 3] = ["password", "admin", "user"];

impl WeakPattern {
    pub fn matches(&self, password: &str) -> bool {
        match self {
            WeakPattern::AllNumbers => all_nonempty(password, |c| c.is_ascii_digit()),
            WeakPattern::AllLowercase => all_nonempty(password, |c| c.is_ascii_lowercase()),
            WeakPattern::AllUppercase => all_nonempty(password, |c| c.is_ascii_uppercase()),
            WeakPattern::RepeatedCharacters => has_repeated_run(password, 3),
            WeakPattern::Sequential => contains_any_ignore_case(password, &SEQUENCES),
            WeakPattern::CommonWord => contains_any_ignore_case(password, &COMMON_WORDS),
            WeakPattern::BirthYear => has_birth_year(password),
        }
    }
}

/// A pattern and the vulnerability it is reported as, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeakPatternRule {
    pub pattern: WeakPattern,
    pub reported_as: Option<VulnerabilityKind>,
}

/// Evaluation order of the pattern checks.
///
/// `AllUppercase`, `Sequential` and `CommonWord` are detected but never
/// reported as vulnerabilities.
pub const WEAK_PATTERNS: [WeakPatternRule; 7] = [
    WeakPatternRule {
        pattern: WeakPattern::AllNumbers,
        reported_as: Some(VulnerabilityKind::AllNumbers),
    },
    WeakPatternRule {
        pattern: WeakPattern::AllLowercase,
        reported_as: Some(VulnerabilityKind::AllLowercase),
    },
    WeakPatternRule {
        pattern: WeakPattern::AllUppercase,
        reported_as: None,
    },
    WeakPatternRule {
        pattern: WeakPattern::RepeatedCharacters,
        reported_as: Some(VulnerabilityKind::RepeatedCharacters),
    },
    WeakPatternRule {
        pattern: WeakPattern::Sequential,
        reported_as: None,
    },
    WeakPatternRule {
        pattern: WeakPattern::CommonWord,
        reported_as: None,
    },
    WeakPatternRule {
        pattern: WeakPattern::BirthYear,
        reported_as: Some(VulnerabilityKind::BirthYear),
    },
];

/// Every pattern in [`WEAK_PATTERNS`] that the password matches, in table order.
pub fn matched_patterns(password: &SecretString) -> Vec<WeakPattern> {
    let password = password.expose_secret();
    WEAK_PATTERNS
        .iter()
        .map(|rule| rule.pattern)
        .filter(|pattern| pattern.matches(password))
        .collect()
}

fn all_nonempty(password: &str, pred: impl Fn(char) -> bool) -> bool {
    !password.is_empty() && password.chars().all(pred)
}

fn is_line_terminator(unit: u16) -> bool {
    matches!(unit, 0x000A | 0x000D | 0x2028 | 0x2029)
}

/// Scans UTF-16 code units, so the two halves of a surrogate pair never
/// form a run and consecutive astral characters do not count as repeats.
fn has_repeated_run(password: &str, min_run: usize) -> bool {
    let mut prev: Option<u16> = None;
    let mut run = 0;
    for unit in password.encode_utf16() {
        if is_line_terminator(unit) {
            prev = None;
            run = 0;
            continue;
        }
        if prev == Some(unit) {
            run += 1;
        } else {
            prev = Some(unit);
            run = 1;
        }
        if run >= min_run {
            return true;
        }
    }
    false
}

fn contains_any_ignore_case(password: &str, needles: &[&str]) -> bool {
    let lowered = password.to_ascii_lowercase();
    needles.iter().any(|needle| lowered.contains(needle))
}

fn has_birth_year(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(4).any(|w| match w {
        ['1', '9', c, d] => ('5'..='9').contains(c) && d.is_ascii_digit(),
        ['2', '0', c, d] => ('0'..='2').contains(c) && d.is_ascii_digit(),
        _ => false,
    })
}
