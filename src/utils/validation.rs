use once_cell::sync::Lazy;
use regex::Regex;

/// Safaricom/Airtel mobile formats: +254712345678, 0712345678, 0110000000.
static KENYAN_MOBILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+254|0)[17]\d{8}$").expect("invalid phone regex"));

/// Strip the spaces and hyphens people type into phone numbers.
/// Idempotent: normalizing an already-normalized number is a no-op.
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| *c != ' ' && *c != '-').collect()
}

pub fn is_valid_kenyan_mobile(phone: &str) -> bool {
    KENYAN_MOBILE.is_match(phone)
}

pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
        && domain.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_standard_kenyan_formats() {
        assert!(is_valid_kenyan_mobile("0712345678"));
        assert!(is_valid_kenyan_mobile("+254712345678"));
        assert!(is_valid_kenyan_mobile("0110000000"));
        assert!(is_valid_kenyan_mobile("+254110000000"));
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert!(!is_valid_kenyan_mobile("12345"));
        assert!(!is_valid_kenyan_mobile("0812345678"));
        assert!(!is_valid_kenyan_mobile("+25571234567"));
        assert!(!is_valid_kenyan_mobile("07123456789"));
        assert!(!is_valid_kenyan_mobile("071234567"));
        assert!(!is_valid_kenyan_mobile(""));
    }

    #[test]
    fn normalization_strips_spaces_and_hyphens() {
        assert_eq!(normalize_phone("0712 345 678"), "0712345678");
        assert_eq!(normalize_phone("+254-712-345-678"), "+254712345678");
        assert!(is_valid_kenyan_mobile(&normalize_phone("0712 345 678")));
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_phone("0712 345-678");
        assert_eq!(normalize_phone(&once), once);
    }

    #[test]
    fn email_syntax_checks() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("j.doe+quotes@sub.example.co.ke"));
        assert!(!is_valid_email("jane"));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane doe@example.com"));
        assert!(!is_valid_email("jane@exa..mple.com"));
        assert!(!is_valid_email("jane@ex@ample.com"));
    }
}
