//! Password security analysis library
//!
//! This library scores a password, lists its known weaknesses, estimates
//! how long a brute-force attack would take and suggests improvements.
//! The heuristics are educational; attack speeds are illustrative.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async analysis with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Derives `Serialize` for every report type (the password is skipped)
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Extra common-password file read by
//!   [`Blacklist::from_env`] and [`Analyzer::from_env`]
//!
//! # Example
//!
//! ```rust
//! use pwd_security::{analyze, StrengthLevel};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = analyze(&password);
//!
//! assert_eq!(report.strength.level, StrengthLevel::Strong);
//! for vulnerability in &report.vulnerabilities {
//!     println!("{} risk: {}", vulnerability.risk, vulnerability.description);
//! }
//! for (model, time) in report.crack_time.iter() {
//!     println!("{}: {}", model.label(), time.human_readable);
//! }
//! ```

// Internal modules
mod blacklist;
mod crack_time;
mod evaluator;
mod sections;
mod strength;
mod tips;
mod types;
mod vulnerability;

// Public API
pub use blacklist::{
    blacklist_path_from_env, Blacklist, BlacklistError, BLACKLIST_PATH_ENV, COMMON_PASSWORDS,
};
pub use crack_time::{estimate_crack_time, seconds_to_human_time};
pub use evaluator::{analyze, default_analyzer, find_vulnerabilities, get_security_tips, Analyzer};
pub use sections::{matched_patterns, CharClasses, WeakPattern, WeakPatternRule, WEAK_PATTERNS};
pub use strength::calculate_strength;
pub use types::{
    AttackModel, ColorHint, CrackTime, CrackTimeEstimate, RiskLevel, SecurityReport,
    StrengthLevel, StrengthResult, Vulnerability, VulnerabilityKind, MAX_SCORE,
};

#[cfg(feature = "async")]
pub use evaluator::{analyze_tx, DEBOUNCE};
