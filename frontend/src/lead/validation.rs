use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\d\s()\-+]+$").expect("valid phone pattern"));

/// Required means non-empty once surrounding whitespace is removed.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Basic `local@domain.tld` shape check. No DNS or RFC 5322 parsing.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Digits, spaces, parentheses, hyphens and `+` only.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("ana@x.com"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("bad"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("a@@b.com"));
    }

    #[test]
    fn phone_charset() {
        assert!(is_valid_phone("(11) 99999-9999"));
        assert!(is_valid_phone("11999999999"));
        assert!(is_valid_phone("+55 11 99999-9999"));
        assert!(!is_valid_phone("abc"));
        assert!(!is_valid_phone("11 9999x9999"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn blank_ignores_whitespace() {
        assert!(is_blank(""));
        assert!(is_blank("   \t"));
        assert!(!is_blank(" Ana "));
    }
}
