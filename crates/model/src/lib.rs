//! Domain model for the VMC provider helpers.
//!
//! This crate contains the VMC data model types, newtype identifiers, enum
//! mappings and the port trait used to read SDDCs. Infrastructure crates
//! implement the traits defined here; they never add domain rules.
//!
//! ## Architectural Layer
//!
//! **Domain types + port definitions.** This crate has no I/O dependencies.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | UUID-backed identifiers (`OrgId`, `SddcId`) |
//! | [`types`] | `Sddc`, `Cluster`, `EsxHost`, `MsftLicensingConfig`, `DeploymentType`, `StorageCapacity`, `Timestamp` |
//! | [`errors`] | [`ModelError`] |
//! | [`ports`] | [`SddcReader`] |

pub mod errors;
pub mod identifiers;
pub mod ports;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use errors::ModelError;
pub use identifiers::{OrgId, SddcId};
pub use ports::SddcReader;
pub use types::{
    Cluster, DeploymentType, EsxHost, MsftLicensingConfig, Sddc, SddcResourceConfig,
    StorageCapacity, Timestamp,
};
