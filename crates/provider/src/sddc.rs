//! SDDC lookups and host aggregation.

use model::{OrgId, Sddc, SddcId, SddcReader};

/// Fetches an SDDC through `reader`.
pub async fn get_sddc<R>(
    reader: &R,
    org_id: &OrgId,
    sddc_id: &SddcId,
) -> Result<Sddc, R::Error>
where
    R: SddcReader + ?Sized,
{
    reader.get_sddc(org_id, sddc_id).await
}

/// Total number of ESX hosts across every cluster of `sddc`.
///
/// Returns `0` for `None`, for an SDDC without a resource config or cluster
/// list, and counts clusters without a host list as empty.
pub fn total_sddc_hosts(sddc: Option<&Sddc>) -> usize {
    sddc.and_then(|s| s.resource_config.as_ref())
        .and_then(|rc| rc.clusters.as_ref())
        .map_or(0, |clusters| clusters.iter().map(|c| c.host_count()).sum())
}

/// Fetches an SDDC and returns its total host count.
#[tracing::instrument(skip_all, fields(%org_id, %sddc_id))]
pub async fn total_hosts_for<R>(
    reader: &R,
    org_id: &OrgId,
    sddc_id: &SddcId,
) -> Result<usize, R::Error>
where
    R: SddcReader + ?Sized,
{
    let sddc = get_sddc(reader, org_id, sddc_id).await?;
    let total = total_sddc_hosts(Some(&sddc));
    tracing::debug!(total, "aggregated sddc hosts");
    Ok(total)
}
