// Input validation for form fields
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+()\-\s]+$").expect("phone regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Allowed punctuation only, and at least ten digits once stripped.
pub fn is_valid_phone(phone: &str) -> bool {
    if !PHONE_RE.is_match(phone) {
        return false;
    }
    phone.chars().filter(|c| c.is_ascii_digit()).count() >= 10
}
