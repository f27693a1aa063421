//! Structural token validation
//!
//! The backend issues opaque bearer credentials shaped as three
//! dot-delimited segments. The client never verifies signatures; it only
//! rejects values that cannot possibly be such a credential before they
//! reach persistent storage.

/// Number of dot-delimited segments a well-formed token carries
pub const TOKEN_SEGMENTS: usize = 3;

/// Check whether a candidate token has the expected 3-segment shape.
///
/// Blank strings are rejected. No cryptographic verification is performed.
pub fn is_well_formed(token: &str) -> bool {
    if token.trim().is_empty() {
        return false;
    }
    token.split('.').count() == TOKEN_SEGMENTS
}

/// Build the value of an `Authorization` header for a bearer token
pub fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_three_segment_tokens() {
        assert!(is_well_formed("header.payload.signature"));
        assert!(is_well_formed("a.b.c"));
    }

    #[test]
    fn rejects_wrong_segment_counts() {
        assert!(!is_well_formed("a.b"));
        assert!(!is_well_formed("a.b.c.d"));
        assert!(!is_well_formed("no-dots-at-all"));
    }

    #[test]
    fn rejects_blank_input() {
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("   "));
    }

    #[test]
    fn bearer_value_uses_bearer_scheme() {
        assert_eq!(bearer_value("a.b.c"), "Bearer a.b.c");
    }
}
