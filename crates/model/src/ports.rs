//! Port traits implemented by infrastructure crates.
//!
//! The helpers only need to read SDDC descriptors; how the request reaches the
//! VMC API (authentication, transport, base URL) is the implementor's concern.

use async_trait::async_trait;

use crate::{OrgId, Sddc, SddcId};

/// Read access to SDDC descriptors.
#[async_trait]
pub trait SddcReader: Send + Sync {
    /// Error produced by the underlying transport.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetches a single SDDC.
    async fn get_sddc(&self, org_id: &OrgId, sddc_id: &SddcId) -> Result<Sddc, Self::Error>;
}
