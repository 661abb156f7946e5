//! Authenticated connector to a VMC or NSX-T endpoint.

use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::{self, Session, AUTH_HEADER};
use crate::ConnectorError;

/// An HTTP client bound to one service root and one CSP session.
///
/// Connectors are built per operation and never refresh their session; build
/// a new one once [`Session::is_expired`] reports `true`.
#[derive(Debug, Clone)]
pub struct Connector {
    client: reqwest::Client,
    base_url: Url,
    session: Session,
}

impl Connector {
    /// Exchanges `refresh_token` at `csp_url` and binds the resulting session
    /// to `service_url`.
    #[tracing::instrument(skip(refresh_token, client))]
    pub async fn by_refresh_token(
        refresh_token: &str,
        service_url: &str,
        csp_url: &str,
        client: reqwest::Client,
    ) -> Result<Self, ConnectorError> {
        let base_url = Url::parse(service_url).map_err(|source| ConnectorError::InvalidUrl {
            url: service_url.to_string(),
            source,
        })?;

        let session = auth::exchange_refresh_token(&client, csp_url, refresh_token).await?;

        Ok(Self {
            client,
            base_url,
            session,
        })
    }

    /// Service root every request path is appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Absolute URL for `path` (which should start with `/`).
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// Sends an authenticated `GET` and decodes the JSON body.
    #[tracing::instrument(skip(self), fields(base = %self.base_url))]
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ConnectorError> {
        if self.session.is_expired() {
            tracing::warn!("csp session has expired; request will likely be rejected");
        }

        let url = self.endpoint(path);
        let response = self
            .client
            .get(&url)
            .header(AUTH_HEADER, self.session.access_token())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ConnectorError::Api {
                url,
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}
