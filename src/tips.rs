//! Tip generator - advice for improving a password.

use secrecy::{ExposeSecret, SecretString};

use crate::blacklist::Blacklist;
use crate::sections::{PasswordProfile, GOOD_LENGTH};

pub const LENGTH_TIP: &str =
    "💡 Make it longer! Every extra character makes it exponentially harder to crack.";
pub const UPPERCASE_TIP: &str = "💡 Add some capital letters to increase complexity.";
pub const SPECIAL_TIP: &str = "💡 Include special characters like !@#$%^&* for extra security.";
pub const BREACH_TIP: &str =
    "🚨 This password appears in hacker databases! Choose something unique.";
pub const PASSWORD_MANAGER_TIP: &str =
    "🛡️ Pro tip: Use a password manager to generate and store unique passwords!";

/// Collects tips in a fixed order. The password manager tip is always last.
pub fn security_tips(blacklist: &Blacklist, password: &SecretString) -> Vec<String> {
    let pwd = password.expose_secret();
    let profile = PasswordProfile::of(pwd);
    let classes = profile.classes;
    let mut tips = Vec::new();

    if profile.length < GOOD_LENGTH {
        tips.push(LENGTH_TIP.to_string());
    }
    if !classes.has_upper {
        tips.push(UPPERCASE_TIP.to_string());
    }
    if !classes.has_special {
        tips.push(SPECIAL_TIP.to_string());
    }
    if blacklist.contains(pwd) {
        tips.push(BREACH_TIP.to_string());
    }

    tips.push(PASSWORD_MANAGER_TIP.to_string());
    tips
}
