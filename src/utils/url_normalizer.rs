//! URL normalization and sanitization utilities.
//!
//! Ensures consistent URL representation so that the same destination always
//! deduplicates to the same mapping row.

use url::Url;

/// Maximum accepted length of a (normalized) long URL, matching the
/// `VARCHAR(400)` column in the schema.
pub const MAX_URL_LEN: usize = 400;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL exceeds {MAX_URL_LEN} characters")]
    TooLong,

    #[error("Failed to normalize URL: {0}")]
    NormalizationFailed(String),
}

/// Normalizes a URL to a canonical form.
///
/// # Normalization Rules
///
/// 1. **Protocol**: Only HTTP and HTTPS are allowed
/// 2. **Hostname**: Converted to lowercase
/// 3. **Default ports**: Removed (80 for HTTP, 443 for HTTPS)
/// 4. **Fragments**: Removed (e.g., `#section`)
/// 5. **Query parameters and path**: Preserved as-is
///
/// Rejects dangerous protocols like `javascript:`, `data:`, `file:`, and
/// anything longer than [`MAX_URL_LEN`] after normalization.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for malformed URLs,
/// [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes,
/// and [`UrlNormalizationError::TooLong`] for oversized inputs.
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let mut url =
        Url::parse(input).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    if let Some(host) = url.host_str() {
        let host_lowercase = host.to_ascii_lowercase();
        url.set_host(Some(&host_lowercase)).map_err(|_| {
            UrlNormalizationError::NormalizationFailed("Failed to set normalized host".to_string())
        })?;
    }

    url.set_fragment(None);

    let is_default_port = matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    );
    if is_default_port {
        url.set_port(None).map_err(|_| {
            UrlNormalizationError::NormalizationFailed("Failed to remove default port".to_string())
        })?;
    }

    let normalized = url.to_string();
    if normalized.len() > MAX_URL_LEN {
        return Err(UrlNormalizationError::TooLong);
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_simple_https() {
        let result = normalize_url("https://example.com");
        assert_eq!(result.unwrap(), "https://example.com/");
    }

    #[test]
    fn test_normalize_uppercase_host() {
        let result = normalize_url("https://EXAMPLE.COM/path");
        assert_eq!(result.unwrap(), "https://example.com/path");
    }

    #[test]
    fn test_normalize_remove_default_https_port() {
        let result = normalize_url("https://example.com:443/path");
        assert_eq!(result.unwrap(), "https://example.com/path");
    }

    #[test]
    fn test_normalize_keep_custom_port() {
        let result = normalize_url("http://example.com:8080/path");
        assert_eq!(result.unwrap(), "http://example.com:8080/path");
    }

    #[test]
    fn test_normalize_remove_fragment() {
        let result = normalize_url("https://example.com/page#section");
        assert_eq!(result.unwrap(), "https://example.com/page");
    }

    #[test]
    fn test_normalize_preserve_query_params() {
        let result = normalize_url("https://example.com/search?q=rust&lang=en");
        assert_eq!(result.unwrap(), "https://example.com/search?q=rust&lang=en");
    }

    #[test]
    fn test_normalize_complex_url() {
        let result = normalize_url("HTTPS://EXAMPLE.COM:443/Path?key=VALUE#anchor");
        assert_eq!(result.unwrap(), "https://example.com/Path?key=VALUE");
    }

    #[test]
    fn test_normalize_invalid_url() {
        let result = normalize_url("not a valid url");
        assert!(matches!(
            result.unwrap_err(),
            UrlNormalizationError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_normalize_no_protocol() {
        let result = normalize_url("example.com");
        assert!(matches!(
            result.unwrap_err(),
            UrlNormalizationError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_normalize_javascript_protocol() {
        let result = normalize_url("javascript:alert('xss')");
        assert!(matches!(
            result.unwrap_err(),
            UrlNormalizationError::UnsupportedProtocol
        ));
    }

    #[test]
    fn test_normalize_file_protocol() {
        let result = normalize_url("file:///home/user/document.txt");
        assert!(matches!(
            result.unwrap_err(),
            UrlNormalizationError::UnsupportedProtocol
        ));
    }

    #[test]
    fn test_normalize_rejects_oversized_url() {
        let long_path = "a".repeat(MAX_URL_LEN);
        let url = format!("https://example.com/{}", long_path);
        let result = normalize_url(&url);
        assert!(matches!(result.unwrap_err(), UrlNormalizationError::TooLong));
    }

    #[test]
    fn test_normalize_accepts_url_at_limit() {
        // "https://example.com/" is 20 characters.
        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_LEN - 20));
        let result = normalize_url(&url);
        assert_eq!(result.unwrap().len(), MAX_URL_LEN);
    }
}
