//! [`SddcReader`] over the VMC REST API.

use async_trait::async_trait;
use model::{OrgId, Sddc, SddcId, SddcReader};

use crate::{Connector, ConnectorError};

/// Reads SDDCs through a [`Connector`] bound to the VMC API.
#[derive(Debug, Clone, Copy)]
pub struct SddcsClient<'a> {
    connector: &'a Connector,
}

impl<'a> SddcsClient<'a> {
    pub fn new(connector: &'a Connector) -> Self {
        Self { connector }
    }
}

#[async_trait]
impl SddcReader for SddcsClient<'_> {
    type Error = ConnectorError;

    async fn get_sddc(&self, org_id: &OrgId, sddc_id: &SddcId) -> Result<Sddc, ConnectorError> {
        let path = format!("/vmc/api/orgs/{org_id}/sddcs/{sddc_id}");
        self.connector.get_json(&path).await
    }
}
