//! Input URL cleanup.

/// Trims whitespace and prepends `https://` when the URL carries no scheme.
///
/// Returns an empty string for blank input; the checker turns that into a
/// skipped record rather than attempting a request. URLs that already have a
/// scheme of any kind (`http:`, `mailto:`, ...) are left untouched.
pub fn normalize_url(raw: &str) -> String {
    let url = raw.trim();
    if url.is_empty() {
        return String::new();
    }
    if has_scheme(url) {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// True when the input starts with an RFC 3986 scheme followed by `:`
/// (ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )).
fn has_scheme(url: &str) -> bool {
    match url.split_once(':') {
        Some((scheme, _)) => {
            let mut chars = scheme.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemeless_gets_https() {
        assert_eq!(
            normalize_url("www.rmit.edu.au/study"),
            "https://www.rmit.edu.au/study"
        );
    }

    #[test]
    fn explicit_scheme_unchanged() {
        assert_eq!(
            normalize_url("http://www.rmit.edu.au/"),
            "http://www.rmit.edu.au/"
        );
        assert_eq!(
            normalize_url("https://study.rmit.edu.au/x"),
            "https://study.rmit.edu.au/x"
        );
    }

    #[test]
    fn non_http_scheme_left_alone() {
        // Not prefixed; it fails the allow-list downstream instead.
        assert_eq!(normalize_url("mailto:someone@rmit.edu.au"), "mailto:someone@rmit.edu.au");
        assert_eq!(normalize_url("ftp://files.rmit.edu.au/"), "ftp://files.rmit.edu.au/");
    }

    #[test]
    fn leading_non_alpha_is_not_a_scheme() {
        assert_eq!(normalize_url("127.0.0.1:8080/x"), "https://127.0.0.1:8080/x");
    }

    #[test]
    fn whitespace_trimmed() {
        assert_eq!(normalize_url("  https://a.rmit.edu.au \n"), "https://a.rmit.edu.au");
    }

    #[test]
    fn blank_stays_empty() {
        assert_eq!(normalize_url(""), "");
        assert_eq!(normalize_url("   "), "");
    }
}
