//! Connector construction for VMC and the NSX-T reverse proxy.

use provider::SKS_NSXT_MANAGER;

use crate::{Connector, ConnectorConfig, ConnectorError};

const REVERSE_PROXY_RESOURCE: &str = "NSXT reverse proxy URL connector";
const VMC_RESOURCE: &str = "VMC connector";

/// Builds a connector to the NSX-T reverse proxy using the default
/// configuration (API token from `API_TOKEN`, public CSP).
pub async fn nsxt_reverse_proxy_connector(
    reverse_proxy_url: &str,
) -> Result<Connector, ConnectorError> {
    nsxt_reverse_proxy_connector_with(&ConnectorConfig::default(), reverse_proxy_url).await
}

/// Builds a connector to the NSX-T reverse proxy.
///
/// `reverse_proxy_url` is the endpoint reported by the SDDC; the
/// `/sks-nsxt-manager` suffix is removed before use.
///
/// # Errors
///
/// - [`ConnectorError::MissingReverseProxyUrl`] if `reverse_proxy_url` is empty.
/// - [`ConnectorError::Create`] wrapping any construction failure: an unset
///   token variable, HTTP client setup, or the token exchange.
#[tracing::instrument(skip(config))]
pub async fn nsxt_reverse_proxy_connector_with(
    config: &ConnectorConfig,
    reverse_proxy_url: &str,
) -> Result<Connector, ConnectorError> {
    if reverse_proxy_url.is_empty() {
        return Err(ConnectorError::MissingReverseProxyUrl);
    }
    let service_url = reverse_proxy_url.replace(SKS_NSXT_MANAGER, "");

    connect(config, &service_url)
        .await
        .map_err(|e| ConnectorError::create(REVERSE_PROXY_RESOURCE, e))
}

/// Builds a connector to the VMC API at `vmc_url`.
///
/// Failures are wrapped in [`ConnectorError::Create`].
#[tracing::instrument(skip(config))]
pub async fn vmc_connector_with(
    config: &ConnectorConfig,
    vmc_url: &str,
) -> Result<Connector, ConnectorError> {
    connect(config, vmc_url)
        .await
        .map_err(|e| ConnectorError::create(VMC_RESOURCE, e))
}

async fn connect(
    config: &ConnectorConfig,
    service_url: &str,
) -> Result<Connector, ConnectorError> {
    let api_token = config.api_token()?;
    let client = config.http_client()?;

    Connector::by_refresh_token(&api_token, service_url, &config.csp_url, client).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_reverse_proxy_url_is_rejected() {
        let err = nsxt_reverse_proxy_connector("").await.unwrap_err();
        assert!(matches!(err, ConnectorError::MissingReverseProxyUrl));
        assert_eq!(
            err.to_string(),
            "NSX reverse proxy url is required for public IP resource creation"
        );
    }
}
