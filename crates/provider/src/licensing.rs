//! Expansion of the `microsoft_licensing_config` block.
//!
//! The block arrives as a list holding at most one key/value record. Values are
//! case-normalised to the upper-case forms the API accepts.

use model::{ModelError, MsftLicensingConfig};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct LicensingBlock {
    mssql_licensing: String,
    windows_licensing: String,
}

/// Builds an [`MsftLicensingConfig`] from the first record of `config`.
///
/// Returns `Ok(None)` when `config` is empty. Any further records are ignored.
///
/// # Errors
///
/// [`ModelError::InvalidLicensingConfig`] if the record is not an object or
/// either field is missing or not a string.
pub fn expand_msft_license_config(
    config: &[Value],
) -> Result<Option<MsftLicensingConfig>, ModelError> {
    let Some(record) = config.first() else {
        return Ok(None);
    };

    let block = LicensingBlock::deserialize(record)
        .map_err(|source| ModelError::InvalidLicensingConfig { source })?;

    Ok(Some(MsftLicensingConfig {
        mssql_licensing: Some(block.mssql_licensing.to_uppercase()),
        windows_licensing: Some(block.windows_licensing.to_uppercase()),
    }))
}
