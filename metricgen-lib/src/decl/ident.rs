use regex::Regex;
use std::sync::LazyLock;

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("invalid identifier regex"));

/// Whether `token` is usable as a metric name, label name, or label value.
#[must_use]
pub fn is_identifier(token: &str) -> bool {
    IDENTIFIER.is_match(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_identifiers() {
        for token in ["a", "requests_total", "x9", "ok_", "a_b_c_1"] {
            assert!(is_identifier(token), "{token} should be accepted");
        }
    }

    #[test]
    fn test_rejects_non_identifiers() {
        for token in ["", "_a", "9lives", "Upper", "has-dash", "has space", "caf\u{e9}", "a\n"] {
            assert!(!is_identifier(token), "{token:?} should be rejected");
        }
    }
}
