//! Connector configuration.

use std::time::Duration;

use provider::{API_TOKEN_ENV, DEFAULT_CSP_URL};

use crate::ConnectorError;

/// Settings shared by every connector built in a process.
#[derive(Debug, Clone)]
pub struct ConnectorConfig {
    /// Cloud Services Platform root used for token exchange.
    pub csp_url: String,
    /// Name of the environment variable holding the API token.
    pub api_token_var: String,
    /// Per-request timeout applied to the HTTP client.
    pub timeout: Duration,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            csp_url: DEFAULT_CSP_URL.to_string(),
            api_token_var: API_TOKEN_ENV.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ConnectorConfig {
    /// Set the CSP URL
    pub fn with_csp_url(mut self, csp_url: impl Into<String>) -> Self {
        self.csp_url = csp_url.into();
        self
    }

    /// Set the API token variable name
    pub fn with_api_token_var(mut self, var: impl Into<String>) -> Self {
        self.api_token_var = var.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads the API token from the configured environment variable.
    ///
    /// An empty value is treated the same as an unset one.
    pub fn api_token(&self) -> Result<String, ConnectorError> {
        match std::env::var(&self.api_token_var) {
            Ok(token) if !token.is_empty() => Ok(token),
            _ => Err(ConnectorError::MissingApiToken {
                var: self.api_token_var.clone(),
            }),
        }
    }

    /// Builds the HTTP client used for token exchange and API calls.
    pub fn http_client(&self) -> Result<reqwest::Client, ConnectorError> {
        Ok(reqwest::Client::builder().timeout(self.timeout).build()?)
    }
}
