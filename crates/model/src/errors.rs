//! Error types for the VMC domain model.
//!
//! [`ModelError`] covers malformed input handed to the domain helpers. Transport
//! and authentication failures are defined in the `connector` crate.

use thiserror::Error;

/// Errors raised while interpreting provider input against the VMC data model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A licensing block did not have the expected shape: it was not an
    /// object, or `mssql_licensing` / `windows_licensing` was missing or not
    /// a string.
    #[error("invalid msft license config: {source}")]
    InvalidLicensingConfig {
        /// Decoder error describing the offending field.
        #[source]
        source: serde_json::Error,
    },
}
