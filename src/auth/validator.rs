//! Syntactic checks applied before any storage or hashing work.

use regex::Regex;

/// Usernames are letters, digits and underscores only.
pub fn valid_username(username: &str) -> bool {
    if username.trim().is_empty() {
        return false;
    }

    Regex::new(r"^[A-Za-z0-9_]+$").is_ok_and(|re| re.is_match(username))
}

/// Sanity check for `local@domain.tld`, not full address-grammar compliance.
pub fn valid_email(email: &str) -> bool {
    if email.trim().is_empty() {
        return false;
    }

    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .is_ok_and(|re| re.is_match(email))
}

/// Passwords must be 8 to 255 characters and not whitespace-only.
pub fn valid_password(password: &str) -> bool {
    if password.trim().is_empty() {
        return false;
    }

    (8..=255).contains(&password.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_username_accepts_letters_digits_underscore() {
        assert!(valid_username("ab_12"));
        assert!(valid_username("alice"));
        assert!(valid_username("_"));
    }

    #[test]
    fn valid_username_rejects_spaces_and_empty() {
        assert!(!valid_username("ab 12"));
        assert!(!valid_username(""));
        assert!(!valid_username("   "));
        assert!(!valid_username("alice!"));
    }

    #[test]
    fn valid_email_accepts_basic_format() {
        assert!(valid_email("a@b.co"));
        assert!(valid_email("name.surname+tag@example.co.uk"));
    }

    #[test]
    fn valid_email_rejects_malformed_input() {
        assert!(!valid_email("a@b"));
        assert!(!valid_email("not-an-email"));
        assert!(!valid_email(""));
        assert!(!valid_email("  "));
        assert!(!valid_email("a@b.c"));
    }

    #[test]
    fn valid_password_enforces_length_bounds() {
        assert!(!valid_password("short"));
        assert!(valid_password(&"x".repeat(8)));
        assert!(valid_password(&"x".repeat(255)));
        assert!(!valid_password(&"x".repeat(256)));
    }

    #[test]
    fn valid_password_rejects_whitespace_only() {
        assert!(!valid_password(""));
        assert!(!valid_password("         "));
    }

    #[test]
    fn valid_password_counts_characters_not_bytes() {
        // 8 multibyte characters are within bounds even though they are more bytes
        assert!(valid_password("ĝĝĝĝĝĝĝĝ"));
    }
}
