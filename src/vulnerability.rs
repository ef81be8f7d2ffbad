//! Vulnerability detector - common passwords and weak patterns.

use secrecy::{ExposeSecret, SecretString};

use crate::blacklist::Blacklist;
use crate::sections::WEAK_PATTERNS;
use crate::types::{Vulnerability, VulnerabilityKind};

/// Lists every weakness found, in detection order.
///
/// The blacklist check runs first, then the reported rules of
/// [`WEAK_PATTERNS`]. Findings never suppress each other.
pub fn detect_vulnerabilities(blacklist: &Blacklist, password: &SecretString) -> Vec<Vulnerability> {
    let pwd = password.expose_secret();
    let mut vulnerabilities = Vec::new();

    if blacklist.contains(pwd) {
        vulnerabilities.push(Vulnerability::from(VulnerabilityKind::CommonPassword));
    }

    for rule in WEAK_PATTERNS {
        if !rule.pattern.matches(pwd) {
            continue;
        }
        match rule.reported_as {
            Some(kind) => vulnerabilities.push(Vulnerability::from(kind)),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Weak pattern {:?} matched but not reported", rule.pattern);
            }
        }
    }

    vulnerabilities
}
