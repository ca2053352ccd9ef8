//! Deterministic short-code derivation.

use sha2::{Digest, Sha256};

/// Base length of a short code in hex characters.
pub const CODE_LEN: usize = 6;

/// How many times the shorten flow widens the code on a collision before
/// giving up. Lengths tried: 6, 8, 10, 12.
pub const MAX_CODE_ATTEMPTS: usize = 4;

/// Derives a short code as a hex prefix of the URL's SHA-256 digest.
///
/// The same input always yields the same code; no randomness, no state.
/// `len` is clamped to the full digest length (64 hex characters).
pub fn derive_code(url: &str, len: usize) -> String {
    let digest = Sha256::digest(url.as_bytes());
    let full = hex::encode(digest);
    let len = len.min(full.len());
    full[..len].to_string()
}

/// Code length for the n-th collision-retry attempt (0-based).
pub fn code_len_for_attempt(attempt: usize) -> usize {
    CODE_LEN + 2 * attempt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_is_deterministic() {
        let a = derive_code("https://example.com", CODE_LEN);
        let b = derive_code("https://example.com", CODE_LEN);
        assert_eq!(a, b);
    }

    #[test]
    fn test_derive_has_requested_length() {
        assert_eq!(derive_code("https://example.com", 6).len(), 6);
        assert_eq!(derive_code("https://example.com", 10).len(), 10);
    }

    #[test]
    fn test_derive_is_lowercase_hex() {
        let code = derive_code("https://example.com", CODE_LEN);
        assert!(code.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_longer_code_extends_shorter_one() {
        let short = derive_code("https://example.com", 6);
        let long = derive_code("https://example.com", 8);
        assert!(long.starts_with(&short));
    }

    #[test]
    fn test_distinct_urls_get_distinct_codes() {
        let a = derive_code("https://example.com/a", CODE_LEN);
        let b = derive_code("https://example.com/b", CODE_LEN);
        assert_ne!(a, b);
    }

    #[test]
    fn test_length_clamped_to_digest() {
        assert_eq!(derive_code("https://example.com", 1000).len(), 64);
    }

    #[test]
    fn test_attempt_lengths() {
        assert_eq!(code_len_for_attempt(0), 6);
        assert_eq!(code_len_for_attempt(1), 8);
        assert_eq!(code_len_for_attempt(MAX_CODE_ATTEMPTS - 1), 12);
    }
}
