//! Report types produced by the analyzer.
//!
//! Every value is built fresh per analysis and never mutated afterwards.

use std::collections::BTreeMap;
use std::fmt;

use secrecy::SecretString;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Highest score the strength rules are designed around (3 + 1 + 1 + 1 + 2).
pub const MAX_SCORE: u32 = 8;

/// Overall strength bucket derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    /// Maps a score to its level: `>= 7` strong, `>= 4` medium, otherwise weak.
    pub fn from_score(score: u32) -> Self {
        if score >= 7 {
            StrengthLevel::Strong
        } else if score >= 4 {
            StrengthLevel::Medium
        } else {
            StrengthLevel::Weak
        }
    }

    pub fn color(&self) -> ColorHint {
        match self {
            StrengthLevel::Weak => ColorHint::Red,
            StrengthLevel::Medium => ColorHint::Orange,
            StrengthLevel::Strong => ColorHint::Green,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "WEAK",
            StrengthLevel::Medium => "MEDIUM",
            StrengthLevel::Strong => "STRONG",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display color suggested for a strength level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "lowercase"))]
pub enum ColorHint {
    Red,
    Orange,
    Green,
}

impl ColorHint {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorHint::Red => "red",
            ColorHint::Orange => "orange",
            ColorHint::Green => "green",
        }
    }
}

impl fmt::Display for ColorHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the additive strength rules.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct StrengthResult {
    pub level: StrengthLevel,
    /// Sum of every rule that fired. Not clamped to `max_score`.
    pub score: u32,
    pub max_score: u32,
    /// One entry per fired rule, in rule-evaluation order.
    pub reasons: Vec<String>,
    pub color: ColorHint,
}

/// Kind of weakness reported by the vulnerability detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum VulnerabilityKind {
    CommonPassword,
    AllNumbers,
    AllLowercase,
    RepeatedCharacters,
    BirthYear,
}

impl VulnerabilityKind {
    pub fn risk(&self) -> RiskLevel {
        match self {
            VulnerabilityKind::CommonPassword => RiskLevel::Critical,
            VulnerabilityKind::AllNumbers | VulnerabilityKind::BirthYear => RiskLevel::High,
            VulnerabilityKind::AllLowercase | VulnerabilityKind::RepeatedCharacters => {
                RiskLevel::Medium
            }
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            VulnerabilityKind::CommonPassword => {
                "This is one of the most common passwords! Hackers try these first."
            }
            VulnerabilityKind::AllNumbers => {
                "Password contains only numbers - easy for computers to guess"
            }
            VulnerabilityKind::AllLowercase => "Using only lowercase letters reduces security",
            VulnerabilityKind::RepeatedCharacters => {
                "Repeated characters (like 'aaa' or '111') are predictable"
            }
            VulnerabilityKind::BirthYear => {
                "Password might contain a birth year - easy to guess from social media"
            }
        }
    }

    pub fn remediation(&self) -> &'static str {
        match self {
            VulnerabilityKind::CommonPassword => "Use a completely different, unique password",
            VulnerabilityKind::AllNumbers => "Mix letters, numbers, and symbols",
            VulnerabilityKind::AllLowercase => "Add uppercase letters, numbers, and symbols",
            VulnerabilityKind::RepeatedCharacters => {
                "Avoid repeating the same character multiple times"
            }
            VulnerabilityKind::BirthYear => "Avoid using personal dates or information",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VulnerabilityKind::CommonPassword => "COMMON_PASSWORD",
            VulnerabilityKind::AllNumbers => "ALL_NUMBERS",
            VulnerabilityKind::AllLowercase => "ALL_LOWERCASE",
            VulnerabilityKind::RepeatedCharacters => "REPEATED_CHARACTERS",
            VulnerabilityKind::BirthYear => "BIRTH_YEAR",
        }
    }
}

impl fmt::Display for VulnerabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum RiskLevel {
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected weakness with its risk rating and advice.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Vulnerability {
    pub kind: VulnerabilityKind,
    pub risk: RiskLevel,
    pub description: String,
    pub remediation: String,
}

impl From<VulnerabilityKind> for Vulnerability {
    fn from(kind: VulnerabilityKind) -> Self {
        Self {
            kind,
            risk: kind.risk(),
            description: kind.description().to_string(),
            remediation: kind.remediation().to_string(),
        }
    }
}

/// Illustrative brute-force attack scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "lowercase"))]
pub enum AttackModel {
    /// Guessing through a login form.
    Online,
    /// Guessing against a stolen password database.
    Offline,
}

impl AttackModel {
    pub const ALL: [AttackModel; 2] = [AttackModel::Online, AttackModel::Offline];

    pub fn attempts_per_second(&self) -> f64 {
        match self {
            AttackModel::Online => 100.0,
            AttackModel::Offline => 1_000_000.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AttackModel::Online => "online",
            AttackModel::Offline => "offline",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttackModel::Online => "Online attack (slow)",
            AttackModel::Offline => "Offline attack (fast)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AttackModel::Online => "Hacker trying to login to your account online",
            AttackModel::Offline => "Hacker has stolen the password database",
        }
    }
}

impl fmt::Display for AttackModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Crack time under a single attack model.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CrackTime {
    /// Average-case seconds; `f64::INFINITY` once the combinations overflow.
    pub seconds: f64,
    pub human_readable: String,
    pub description: String,
}

/// Crack times for every attack model, ordered online then offline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CrackTimeEstimate {
    pub charset_size: u32,
    pub combinations: f64,
    pub attacks: BTreeMap<AttackModel, CrackTime>,
}

impl CrackTimeEstimate {
    pub fn get(&self, model: AttackModel) -> Option<&CrackTime> {
        self.attacks.get(&model)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AttackModel, &CrackTime)> {
        self.attacks.iter()
    }
}

/// Full analysis of one password.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SecurityReport {
    #[cfg_attr(feature = "serde", serde(skip))]
    pub password: SecretString,
    /// Length in UTF-16 code units.
    pub length: usize,
    pub strength: StrengthResult,
    pub vulnerabilities: Vec<Vulnerability>,
    pub crack_time: CrackTimeEstimate,
    pub tips: Vec<String>,
}
