//! VMC data model types.
//!
//! These mirror the subset of the VMC REST data model that the provider reads:
//! the SDDC descriptor with its clusters and hosts, and the Microsoft licensing
//! configuration. Field names follow the VMC JSON wire format. Every field the
//! API may omit is an `Option` and deserializes to `None` when absent.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::{OrgId, SddcId};

// ---------------------------------------------------------------------------
// SDDC descriptor
// ---------------------------------------------------------------------------

/// A Software-Defined Data Center as returned by
/// `GET /vmc/api/orgs/{org}/sddcs/{sddc}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sddc {
    /// SDDC identifier.
    #[serde(default)]
    pub id: Option<SddcId>,

    /// Display name chosen at creation.
    #[serde(default)]
    pub name: Option<String>,

    /// Owning organisation.
    #[serde(default)]
    pub org_id: Option<OrgId>,

    /// Lifecycle state (e.g. `"READY"`, `"DEPLOYING"`).
    #[serde(default)]
    pub sddc_state: Option<String>,

    /// Hosting provider (e.g. `"AWS"`, `"ZEROCLOUD"`).
    #[serde(default)]
    pub provider: Option<String>,

    /// Resource configuration. `None` while the SDDC is still being deployed.
    #[serde(default)]
    pub resource_config: Option<SddcResourceConfig>,
}

/// Resource configuration of an [`Sddc`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SddcResourceConfig {
    /// Clusters making up the SDDC.
    #[serde(default)]
    pub clusters: Option<Vec<Cluster>>,

    /// Public endpoint of the NSX-T reverse proxy, including the
    /// `/sks-nsxt-manager` suffix.
    #[serde(default)]
    pub nsx_api_public_endpoint_url: Option<String>,

    /// Deployment type in wire format (`"SINGLE_AZ"` / `"MULTI_AZ"`).
    ///
    /// Kept as a raw string so unknown values from newer API versions still
    /// deserialize; see [`DeploymentType::from_wire`].
    #[serde(default)]
    pub deployment_type: Option<String>,

    /// Microsoft licensing settings applied to the SDDC.
    #[serde(default)]
    pub msft_license_config: Option<MsftLicensingConfig>,
}

/// A vSphere cluster within an SDDC.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    #[serde(default)]
    pub cluster_id: Option<String>,

    #[serde(default)]
    pub cluster_name: Option<String>,

    #[serde(default)]
    pub cluster_state: Option<String>,

    /// ESX hosts provisioned in this cluster.
    #[serde(default)]
    pub esx_host_list: Option<Vec<EsxHost>>,
}

impl Cluster {
    /// Number of ESX hosts in the cluster; `0` when the host list is absent.
    pub fn host_count(&self) -> usize {
        self.esx_host_list.as_ref().map_or(0, Vec::len)
    }
}

/// An ESX host within a [`Cluster`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EsxHost {
    #[serde(default)]
    pub esx_id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub hostname: Option<String>,

    #[serde(default)]
    pub esx_state: Option<String>,

    #[serde(default)]
    pub availability_zone: Option<String>,
}

// ---------------------------------------------------------------------------
// Licensing
// ---------------------------------------------------------------------------

/// Microsoft licensing configuration for an SDDC.
///
/// Values are the upper-case API forms, e.g. `"ENABLED"` / `"DISABLED"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsftLicensingConfig {
    #[serde(default)]
    pub mssql_licensing: Option<String>,

    #[serde(default)]
    pub windows_licensing: Option<String>,
}

// ---------------------------------------------------------------------------
// Deployment type
// ---------------------------------------------------------------------------

/// SDDC deployment topology.
///
/// The API speaks `SINGLE_AZ` / `MULTI_AZ`; provider state stores the upper
/// camel case forms `SingleAZ` / `MultiAZ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeploymentType {
    /// All hosts in one availability zone.
    SingleAz,
    /// Stretched cluster across two availability zones.
    MultiAz,
}

impl DeploymentType {
    /// Parses the API wire form. Returns `None` for anything else.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "SINGLE_AZ" => Some(Self::SingleAz),
            "MULTI_AZ" => Some(Self::MultiAz),
            _ => None,
        }
    }

    /// Parses the display form. Returns `None` for anything else.
    pub fn from_display(value: &str) -> Option<Self> {
        match value {
            "SingleAZ" => Some(Self::SingleAz),
            "MultiAZ" => Some(Self::MultiAz),
            _ => None,
        }
    }

    /// Returns the API wire form.
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::SingleAz => "SINGLE_AZ",
            Self::MultiAz => "MULTI_AZ",
        }
    }

    /// Returns the display form.
    pub fn as_display(self) -> &'static str {
        match self {
            Self::SingleAz => "SingleAZ",
            Self::MultiAz => "MultiAZ",
        }
    }
}

impl std::fmt::Display for DeploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_display())
    }
}

// ---------------------------------------------------------------------------
// Storage capacity
// ---------------------------------------------------------------------------

/// Per-host storage capacity offered for i3en and similar host types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StorageCapacity {
    Tb15,
    Tb20,
    Tb25,
    Tb30,
    Tb35,
}

impl StorageCapacity {
    /// Every capacity, smallest first.
    pub const ALL: [StorageCapacity; 5] = [
        Self::Tb15,
        Self::Tb20,
        Self::Tb25,
        Self::Tb30,
        Self::Tb35,
    ];

    /// Looks up a capacity by its exact label (`"15TB"` .. `"35TB"`).
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// The user-facing label, e.g. `"25TB"`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Tb15 => "15TB",
            Self::Tb20 => "20TB",
            Self::Tb25 => "25TB",
            Self::Tb30 => "30TB",
            Self::Tb35 => "35TB",
        }
    }

    /// The numeric code the API expects for this capacity.
    pub fn code(self) -> i64 {
        match self {
            Self::Tb15 => 15003,
            Self::Tb20 => 20004,
            Self::Tb25 => 25005,
            Self::Tb30 => 30006,
            Self::Tb35 => 35007,
        }
    }
}

impl std::fmt::Display for StorageCapacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// A UTC wall-clock timestamp.
///
/// Wraps [`chrono::DateTime<Utc>`] so callers never depend on `chrono` types
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the time `secs` seconds from now. Negative values lie in the past.
    ///
    /// Saturates at the representable range instead of overflowing.
    pub fn after_secs(secs: i64) -> Self {
        let now = Utc::now();
        let shifted = Duration::try_seconds(secs).and_then(|d| now.checked_add_signed(d));
        Self(shifted.unwrap_or(if secs < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        }))
    }

    /// Returns `true` if this instant is at or before the current time.
    pub fn has_passed(self) -> bool {
        self.0 <= Utc::now()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deployment_type_maps_both_directions() {
        for dt in [DeploymentType::SingleAz, DeploymentType::MultiAz] {
            assert_eq!(DeploymentType::from_wire(dt.as_wire()), Some(dt));
            assert_eq!(DeploymentType::from_display(dt.as_display()), Some(dt));
        }
        assert_eq!(DeploymentType::from_wire("SingleAZ"), None);
        assert_eq!(DeploymentType::from_display("SINGLE_AZ"), None);
    }

    #[test]
    fn deployment_type_serializes_as_wire_form() {
        let json = serde_json::to_string(&DeploymentType::MultiAz).unwrap();
        assert_eq!(json, "\"MULTI_AZ\"");
    }

    #[test]
    fn storage_capacity_table() {
        let expected = [
            ("15TB", 15003),
            ("20TB", 20004),
            ("25TB", 25005),
            ("30TB", 30006),
            ("35TB", 35007),
        ];
        for (label, code) in expected {
            let capacity = StorageCapacity::from_label(label).unwrap();
            assert_eq!(capacity.code(), code);
            assert_eq!(capacity.to_string(), label);
        }
        assert_eq!(StorageCapacity::from_label("15tb"), None);
        assert_eq!(StorageCapacity::from_label("40TB"), None);
    }

    #[test]
    fn sddc_tolerates_missing_fields() {
        let sddc: Sddc = serde_json::from_str(r#"{"name": "prod"}"#).unwrap();
        assert_eq!(sddc.name.as_deref(), Some("prod"));
        assert!(sddc.resource_config.is_none());

        let sddc: Sddc = serde_json::from_str(
            r#"{"resource_config": {"clusters": [{"cluster_id": "c1", "esx_host_list": null}]}}"#,
        )
        .unwrap();
        let clusters = sddc.resource_config.unwrap().clusters.unwrap();
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].host_count(), 0);
    }

    #[test]
    fn timestamp_after_secs_orders_against_now() {
        assert!(Timestamp::after_secs(-1).has_passed());
        assert!(!Timestamp::after_secs(3600).has_passed());
        assert!(!Timestamp::after_secs(i64::MAX).has_passed());
    }
}
