//! Input validation for identifiers and endpoints.
//!
//! Both helpers hand back the parser's own error so callers can surface it
//! verbatim in diagnostics.

use url::Url;
use uuid::Uuid;

/// Checks that `value` parses as a UUID.
pub fn is_valid_uuid(value: &str) -> Result<(), uuid::Error> {
    Uuid::parse_str(value).map(|_| ())
}

/// Base that absolute-path request URIs are resolved against.
const REQUEST_URI_BASE: &str = "http://localhost";

/// Checks that `value` is a valid request URI: an absolute URL, or an
/// absolute path such as `/api/v1/orgs`.
pub fn is_valid_url(value: &str) -> Result<(), url::ParseError> {
    if value.starts_with('/') {
        return Url::parse(REQUEST_URI_BASE)?.join(value).map(|_| ());
    }
    Url::parse(value).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_accepts_well_formed() {
        assert!(is_valid_uuid("9e4a7d2b-3c1f-4b6e-8a5d-0f1e2d3c4b5a").is_ok());
        assert!(is_valid_uuid("9E4A7D2B3C1F4B6E8A5D0F1E2D3C4B5A").is_ok());
        assert!(is_valid_uuid("urn:uuid:9e4a7d2b-3c1f-4b6e-8a5d-0f1e2d3c4b5a").is_ok());
    }

    #[test]
    fn uuid_rejects_malformed() {
        assert!(is_valid_uuid("not-a-uuid").is_err());
        assert!(is_valid_uuid("").is_err());
        assert!(is_valid_uuid("9e4a7d2b-3c1f-4b6e-8a5d-0f1e2d3c4b5").is_err());
    }

    #[test]
    fn url_accepts_absolute() {
        assert!(is_valid_url("https://example.com/path").is_ok());
        assert!(is_valid_url("https://nsx-1-2-3-4.rp.vmwarevmc.com/vmc/reverse-proxy").is_ok());
    }

    #[test]
    fn url_accepts_absolute_path() {
        assert!(is_valid_url("/api/v1/orgs").is_ok());
        assert!(is_valid_url("/").is_ok());
    }

    #[test]
    fn url_rejects_relative_path() {
        assert_eq!(
            is_valid_url("api/v1/orgs"),
            Err(url::ParseError::RelativeUrlWithoutBase)
        );
    }

    #[test]
    fn url_rejects_garbage() {
        assert_eq!(
            is_valid_url("not a url"),
            Err(url::ParseError::RelativeUrlWithoutBase)
        );
        assert!(is_valid_url("").is_err());
        assert!(is_valid_url("https://exa mple.com").is_err());
    }
}
