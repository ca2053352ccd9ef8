//! URL normalization: every stored URL carries an explicit scheme.

use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("Please enter a valid URL")]
    Empty,
    #[error("Invalid URL: {0}")]
    Invalid(String),
}

/// Prepends `https://` when the input has no `http://`/`https://` prefix,
/// leaving already-prefixed input byte-for-byte unchanged.
///
/// The result is parsed with the `url` crate purely as validation; the
/// parser's own rewriting (trailing slashes, percent-encoding) is not
/// applied to the stored value.
pub fn normalize_url(input: &str) -> Result<String, NormalizeError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(NormalizeError::Empty);
    }

    let normalized = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let parsed = Url::parse(&normalized).map_err(|e| NormalizeError::Invalid(e.to_string()))?;
    if parsed.host_str().is_none() {
        return Err(NormalizeError::Invalid("missing host".to_string()));
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_host_gets_https_prefix() {
        assert_eq!(
            normalize_url("example.com").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_http_input_unchanged() {
        assert_eq!(
            normalize_url("http://example.com").unwrap(),
            "http://example.com"
        );
    }

    #[test]
    fn test_https_input_unchanged() {
        assert_eq!(
            normalize_url("https://example.com/Path?q=1").unwrap(),
            "https://example.com/Path?q=1"
        );
    }

    #[test]
    fn test_path_and_query_preserved_when_prefixing() {
        assert_eq!(
            normalize_url("example.com/a/b?q=rust").unwrap(),
            "https://example.com/a/b?q=rust"
        );
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(
            normalize_url("  example.com  ").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(normalize_url(""), Err(NormalizeError::Empty)));
    }

    #[test]
    fn test_whitespace_only_rejected() {
        assert!(matches!(normalize_url("   "), Err(NormalizeError::Empty)));
    }

    #[test]
    fn test_unparseable_input_rejected() {
        assert!(matches!(
            normalize_url("not a valid url"),
            Err(NormalizeError::Invalid(_))
        ));
    }

    #[test]
    fn test_scheme_without_host_rejected() {
        assert!(matches!(
            normalize_url("http://"),
            Err(NormalizeError::Invalid(_))
        ));
    }

    #[test]
    fn test_empty_error_message_is_user_facing() {
        assert_eq!(
            NormalizeError::Empty.to_string(),
            "Please enter a valid URL"
        );
    }
}
