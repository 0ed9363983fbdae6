/// Validate a display name: 1-20 ASCII letters or digits, nothing else.
/// Returns the accepted name, or None for anything that fails.
pub fn sanitize_username(raw: &str) -> Option<&str> {
    let value = raw.trim();
    if value.is_empty() || value.len() > 20 {
        return None;
    }

    if value.chars().all(|ch| ch.is_ascii_alphanumeric()) {
        Some(value)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::sanitize_username;

    #[test]
    fn accepts_plain_alphanumerics() {
        assert_eq!(sanitize_username("JohnDoe"), Some("JohnDoe"));
        assert_eq!(sanitize_username("user42"), Some("user42"));
        assert_eq!(sanitize_username("  padded  "), Some("padded"));
        assert_eq!(sanitize_username("abcdefghij0123456789"), Some("abcdefghij0123456789"));
    }

    #[test]
    fn rejects_punctuation_and_spaces() {
        assert_eq!(sanitize_username("John_Doe!"), None);
        assert_eq!(sanitize_username("john doe"), None);
        assert_eq!(sanitize_username("j.doe"), None);
    }

    #[test]
    fn rejects_empty_and_overlong() {
        assert_eq!(sanitize_username(""), None);
        assert_eq!(sanitize_username("   "), None);
        assert_eq!(sanitize_username("abcdefghij01234567890"), None);
    }

    #[test]
    fn rejects_non_ascii() {
        assert_eq!(sanitize_username("Jöhn"), None);
        assert_eq!(sanitize_username("Джон"), None);
    }
}
