//! Report assembler - runs every analysis on one password.

use std::sync::LazyLock;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::blacklist::{Blacklist, BlacklistError};
use crate::crack_time::crack_time_of;
use crate::sections::password_length;
use crate::strength::strength_of;
use crate::tips::security_tips;
use crate::types::{CrackTimeEstimate, SecurityReport, StrengthResult, Vulnerability};
use crate::vulnerability::detect_vulnerabilities;

/// Delay before [`analyze_tx`] runs, so that rapid input can cancel it first.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

static DEFAULT_ANALYZER: LazyLock<Analyzer> = LazyLock::new(Analyzer::default);

/// Password analyzer bound to a common-password blacklist.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    blacklist: Blacklist,
}

impl Analyzer {
    pub fn new(blacklist: Blacklist) -> Self {
        Self { blacklist }
    }

    /// Analyzer using the blacklist configured by `PWD_BLACKLIST_PATH`.
    pub fn from_env() -> Result<Self, BlacklistError> {
        Ok(Self::new(Blacklist::from_env()?))
    }

    pub fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }

    pub fn calculate_strength(&self, password: &SecretString) -> StrengthResult {
        strength_of(password.expose_secret())
    }

    pub fn find_vulnerabilities(&self, password: &SecretString) -> Vec<Vulnerability> {
        detect_vulnerabilities(&self.blacklist, password)
    }

    pub fn estimate_crack_time(&self, password: &SecretString) -> CrackTimeEstimate {
        crack_time_of(password.expose_secret())
    }

    pub fn security_tips(&self, password: &SecretString) -> Vec<String> {
        security_tips(&self.blacklist, password)
    }

    /// Runs the four analyses independently and packages them.
    pub fn analyze(&self, password: &SecretString) -> SecurityReport {
        let pwd = password.expose_secret();

        let report = SecurityReport {
            password: SecretString::new(pwd.into()),
            length: password_length(pwd),
            strength: self.calculate_strength(password),
            vulnerabilities: self.find_vulnerabilities(password),
            crack_time: self.estimate_crack_time(password),
            tips: self.security_tips(password),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "password analyzed: length={} score={}/{} level={} vulnerabilities={}",
            report.length,
            report.strength.score,
            report.strength.max_score,
            report.strength.level,
            report.vulnerabilities.len()
        );

        report
    }

    /// Async version that sends the report via channel unless cancelled.
    #[cfg(feature = "async")]
    pub async fn analyze_tx(
        &self,
        password: &SecretString,
        token: CancellationToken,
        tx: mpsc::Sender<SecurityReport>,
    ) {
        #[cfg(feature = "tracing")]
        tracing::info!("analysis is about to start...");

        tokio::time::sleep(DEBOUNCE).await;
        if token.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::debug!("analysis cancelled before start");
            return;
        }

        let report = self.analyze(password);

        if let Err(e) = tx.send(report).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password report: {}", e);
            #[cfg(not(feature = "tracing"))]
            let _ = e;
        }
    }
}

/// Process-wide analyzer using the built-in blacklist.
pub fn default_analyzer() -> &'static Analyzer {
    &DEFAULT_ANALYZER
}

/// Checks the password against the built-in blacklist and weak patterns.
pub fn find_vulnerabilities(password: &SecretString) -> Vec<Vulnerability> {
    default_analyzer().find_vulnerabilities(password)
}

/// Improvement tips using the built-in blacklist.
pub fn get_security_tips(password: &SecretString) -> Vec<String> {
    default_analyzer().security_tips(password)
}

/// Full report using the built-in blacklist.
pub fn analyze(password: &SecretString) -> SecurityReport {
    default_analyzer().analyze(password)
}

/// [`Analyzer::analyze_tx`] with the built-in blacklist.
#[cfg(feature = "async")]
pub async fn analyze_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<SecurityReport>,
) {
    default_analyzer().analyze_tx(password, token, tx).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tips::{BREACH_TIP, PASSWORD_MANAGER_TIP};
    use crate::types::{AttackModel, StrengthLevel, VulnerabilityKind};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[test]
    fn test_analyze_empty_password() {
        let report = analyze(&secret(""));
        assert_eq!(report.password.expose_secret(), "");
        assert_eq!(report.length, 0);
        assert_eq!(report.strength.score, 0);
        assert_eq!(report.strength.level, StrengthLevel::Weak);
        assert!(report.vulnerabilities.is_empty());
        assert_eq!(report.crack_time.charset_size, 0);
        for (_, time) in report.crack_time.iter() {
            assert_eq!(time.human_readable, "Less than 1 second");
        }
        assert_eq!(report.tips.last().map(String::as_str), Some(PASSWORD_MANAGER_TIP));
    }

    #[test]
    fn test_analyze_common_password() {
        let report = analyze(&secret("123456"));
        assert_eq!(report.length, 6);
        assert_eq!(report.strength.level, StrengthLevel::Weak);
        let kinds: Vec<_> = report.vulnerabilities.iter().map(|v| v.kind).collect();
        assert_eq!(kinds, vec![VulnerabilityKind::CommonPassword, VulnerabilityKind::AllNumbers]);
        assert!(report.tips.iter().any(|t| t == BREACH_TIP));
    }

    #[test]
    fn test_analyze_strong_password() {
        let report = analyze(&secret("P@ssw0rd123!"));
        assert_eq!(report.length, 12);
        assert_eq!(report.strength.score, 8);
        assert_eq!(report.strength.level, StrengthLevel::Strong);
        assert_eq!(report.crack_time.charset_size, 94);
        assert_eq!(
            report.crack_time.get(AttackModel::Offline).unwrap().human_readable,
            "More than 1000 years"
        );
    }

    #[test]
    fn test_analyze_length_counts_utf16_units() {
        let report = analyze(&secret("pässwörd"));
        assert_eq!(report.length, 8);
    }

    #[test]
    fn test_analyze_astral_password() {
        let report = analyze(&secret("😀😀😀😀"));
        assert_eq!(report.length, 8);
        assert_eq!(report.strength.score, 4);
        assert_eq!(report.strength.level, StrengthLevel::Medium);
        assert_eq!(report.crack_time.combinations, 32f64.powi(8));
        assert!(report.vulnerabilities.is_empty());

        // no surrogate-pair repeats
        assert!(find_vulnerabilities(&secret("😀😀😀")).is_empty());
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let pwd = secret("Summer1999!!!");
        let first = analyze(&pwd);
        let second = analyze(&pwd);

        assert_eq!(first.password.expose_secret(), second.password.expose_secret());
        assert_eq!(first.length, second.length);
        assert_eq!(first.strength, second.strength);
        assert_eq!(first.vulnerabilities, second.vulnerabilities);
        assert_eq!(first.crack_time, second.crack_time);
        assert_eq!(first.tips, second.tips);
    }

    #[test]
    fn test_report_debug_redacts_password() {
        let report = analyze(&secret("hunter2-secret"));
        let debug = format!("{:?}", report);
        assert!(!debug.contains("hunter2-secret"));
    }

    #[test]
    fn test_free_functions_match_default_analyzer() {
        let pwd = secret("letmein");
        assert_eq!(find_vulnerabilities(&pwd), default_analyzer().find_vulnerabilities(&pwd));
        assert_eq!(get_security_tips(&pwd), default_analyzer().security_tips(&pwd));
    }

    #[test]
    fn test_analyzer_with_custom_blacklist() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "CorrectHorseBatteryStaple").expect("Failed to write");
        let analyzer = Analyzer::new(Blacklist::from_path(temp_file.path()).expect("load"));

        let pwd = secret("correcthorsebatterystaple");
        let report = analyzer.analyze(&pwd);
        assert_eq!(report.vulnerabilities[0].kind, VulnerabilityKind::CommonPassword);
        assert!(report.tips.iter().any(|t| t == BREACH_TIP));

        // the built-in analyzer does not know it
        assert!(!find_vulnerabilities(&pwd)
            .iter()
            .any(|v| v.kind == VulnerabilityKind::CommonPassword));
    }
}
