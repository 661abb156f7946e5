//! CSP refresh-token exchange.
//!
//! VMC and NSX-T both authenticate with a short-lived access token minted by
//! the Cloud Services Platform from a long-lived API (refresh) token. The
//! access token is then sent on every request in the `csp-auth-token` header.

use model::Timestamp;
use serde::Deserialize;

use crate::ConnectorError;

/// CSP path that exchanges an API token for an access token.
pub const AUTHORIZE_PATH: &str = "/csp/gateway/am/api/auth/api-tokens/authorize";

/// Header carrying the access token on authenticated requests.
pub const AUTH_HEADER: &str = "csp-auth-token";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    scope: Option<String>,
    expires_in: i64,
}

/// An authenticated CSP session.
#[derive(Clone)]
pub struct Session {
    access_token: String,
    token_type: Option<String>,
    scope: Option<String>,
    expires_at: Timestamp,
}

impl Session {
    fn from_response(response: TokenResponse) -> Self {
        Self {
            access_token: response.access_token,
            token_type: response.token_type,
            scope: response.scope,
            expires_at: Timestamp::after_secs(response.expires_in),
        }
    }

    /// The bearer value for [`AUTH_HEADER`].
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn token_type(&self) -> Option<&str> {
        self.token_type.as_deref()
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// When CSP stops accepting the access token.
    pub fn expires_at(&self) -> Timestamp {
        self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at.has_passed()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("scope", &self.scope)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Exchanges `refresh_token` for a [`Session`] at `csp_url`.
#[tracing::instrument(skip(client, refresh_token))]
pub async fn exchange_refresh_token(
    client: &reqwest::Client,
    csp_url: &str,
    refresh_token: &str,
) -> Result<Session, ConnectorError> {
    let url = format!("{}{}", csp_url.trim_end_matches('/'), AUTHORIZE_PATH);

    let response = client
        .post(&url)
        .form(&[("refresh_token", refresh_token)])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "csp token exchange rejected");
        return Err(ConnectorError::Authorization {
            status: status.as_u16(),
            message,
        });
    }

    let token: TokenResponse = response.json().await?;
    let session = Session::from_response(token);
    tracing::debug!(expires_at = %session.expires_at, "csp session established");
    Ok(session)
}
