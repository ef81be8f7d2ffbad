//! Crack-time estimator - average-case brute force under fixed attack rates.

use std::collections::BTreeMap;

use secrecy::{ExposeSecret, SecretString};

use crate::sections::PasswordProfile;
use crate::types::{AttackModel, CrackTime, CrackTimeEstimate};

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;
const MILLENNIUM: f64 = 1_000.0 * YEAR;

/// Estimates how long each attack model needs to guess the password.
pub fn estimate_crack_time(password: &SecretString) -> CrackTimeEstimate {
    crack_time_of(password.expose_secret())
}

pub(crate) fn crack_time_of(pwd: &str) -> CrackTimeEstimate {
    let profile = PasswordProfile::of(pwd);
    let charset_size = profile.classes.charset_size();
    let combinations = combinations(charset_size, profile.length);

    let attacks = AttackModel::ALL
        .into_iter()
        .map(|model| {
            // Half the keyspace on average before a hit
            let seconds = combinations / (2.0 * model.attempts_per_second());
            let crack_time = CrackTime {
                seconds,
                human_readable: seconds_to_human_time(seconds),
                description: model.description().to_string(),
            };
            (model, crack_time)
        })
        .collect::<BTreeMap<_, _>>();

    CrackTimeEstimate {
        charset_size,
        combinations,
        attacks,
    }
}

/// `charset_size ^ length`, saturating to infinity. An empty charset yields 0.
fn combinations(charset_size: u32, length: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    i32::try_from(length)
        .map(|exp| f64::from(charset_size).powi(exp))
        .unwrap_or(f64::INFINITY)
}

/// Renders a duration in the largest fitting unit, rounded to the nearest whole unit.
pub fn seconds_to_human_time(seconds: f64) -> String {
    if seconds < 1.0 {
        "Less than 1 second".to_string()
    } else if seconds < MINUTE {
        format!("{} seconds", seconds.round() as u64)
    } else if seconds < HOUR {
        format!("{} minutes", (seconds / MINUTE).round() as u64)
    } else if seconds < DAY {
        format!("{} hours", (seconds / HOUR).round() as u64)
    } else if seconds < YEAR {
        format!("{} days", (seconds / DAY).round() as u64)
    } else if seconds < MILLENNIUM {
        format!("{} years", (seconds / YEAR).round() as u64)
    } else {
        "More than 1000 years".to_string()
    }
}
