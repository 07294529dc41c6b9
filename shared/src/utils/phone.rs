//! Helpers for handling phone numbers in logs and the mock lookup

use once_cell::sync::Lazy;
use regex::Regex;

/// `+` followed by 7 to 15 digits
static E164_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[0-9]{7,15}$").expect("E.164 pattern is valid"));

/// Drop separators such as spaces, dashes and parentheses
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| matches!(c, '+' | '0'..='9'))
        .collect()
}

/// Whether the number, once normalized, looks like an E.164 number
pub fn is_international_format(phone: &str) -> bool {
    E164_SHAPE.is_match(&normalize_phone_number(phone))
}

/// Keep the first three and last four characters, e.g. `+18****1234`.
/// Inputs too short to hide at least one digit are masked entirely.
pub fn mask_phone_number(phone: &str) -> String {
    let chars: Vec<char> = normalize_phone_number(phone).chars().collect();
    if chars.len() < 8 {
        return "****".to_string();
    }

    let head: String = chars[..3].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}****{tail}")
}
