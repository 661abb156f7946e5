//! Label and enum conversions between provider state and the VMC API.

use model::{DeploymentType, StorageCapacity};

/// Converts a storage capacity label (`"15TB"` .. `"35TB"`) to the numeric
/// code the API expects.
///
/// Labels outside the table yield `0`; this is not reported as an error.
pub fn convert_storage_capacity_to_int(label: &str) -> i64 {
    match StorageCapacity::from_label(label) {
        Some(capacity) => capacity.code(),
        None => {
            tracing::debug!(label, "unknown storage capacity label, using 0");
            0
        }
    }
}

/// Maps the API `deployment_type` value to the form stored in provider state.
///
/// `SINGLE_AZ` becomes `SingleAZ`, `MULTI_AZ` becomes `MultiAZ`; anything else
/// becomes the empty string.
pub fn convert_deploy_type(value: &str) -> &'static str {
    match DeploymentType::from_wire(value) {
        Some(dt) => dt.as_display(),
        None => {
            tracing::debug!(value, "unrecognised deployment type");
            ""
        }
    }
}
