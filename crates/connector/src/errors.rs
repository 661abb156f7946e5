//! Error type for connector construction and authenticated API calls.

use thiserror::Error;

/// Failures while building a [`crate::Connector`] or calling through one.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// The reverse proxy URL argument was empty.
    #[error("NSX reverse proxy url is required for public IP resource creation")]
    MissingReverseProxyUrl,

    /// The environment variable holding the API token was unset or empty.
    #[error("API token environment variable '{var}' is not set")]
    MissingApiToken {
        /// Name of the variable that was read.
        var: String,
    },

    /// A service or CSP URL could not be parsed.
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Transport-level failure (connect, TLS, timeout, body decode).
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// CSP refused to exchange the refresh token.
    #[error("token exchange rejected with status {status}: {message}")]
    Authorization {
        status: u16,
        /// Response body as returned by CSP.
        message: String,
    },

    /// An authenticated API call returned a non-success status.
    #[error("request to {url} failed with status {status}: {message}")]
    Api {
        url: String,
        status: u16,
        message: String,
    },

    /// Building a named connector failed.
    #[error("error while creating {resource}: {source}")]
    Create {
        /// What was being created (e.g. `"NSXT reverse proxy URL connector"`).
        resource: &'static str,
        #[source]
        source: Box<ConnectorError>,
    },
}

impl ConnectorError {
    /// Wraps `source` with the name of the connector being created.
    pub fn create(resource: &'static str, source: ConnectorError) -> Self {
        ConnectorError::Create {
            resource,
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_message_includes_resource_and_cause() {
        let err = ConnectorError::create(
            "NSXT reverse proxy URL connector",
            ConnectorError::Authorization {
                status: 400,
                message: "invalid_grant".into(),
            },
        );
        assert_eq!(
            err.to_string(),
            "error while creating NSXT reverse proxy URL connector: \
             token exchange rejected with status 400: invalid_grant"
        );
    }
}
