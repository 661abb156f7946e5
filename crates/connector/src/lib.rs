//! VMC connector infrastructure.
//!
//! Implements the [`model::SddcReader`] port over the VMC REST API and builds
//! the authenticated connectors used to reach VMC and the NSX-T reverse proxy.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** Token exchange, HTTP transport and response decoding
//! live here. The [`model`] and [`provider`] crates never see them.
//!
//! ## Authentication
//!
//! A long-lived API token (read from the environment) is exchanged at the
//! Cloud Services Platform for a short-lived access token; see [`auth`].
//! Connectors do not refresh their session.

pub mod auth;
pub mod config;
pub mod connector;
pub mod errors;
pub mod reverse_proxy;
pub mod sddcs;

pub use auth::{exchange_refresh_token, Session};
pub use config::ConnectorConfig;
pub use connector::Connector;
pub use errors::ConnectorError;
pub use reverse_proxy::{
    nsxt_reverse_proxy_connector, nsxt_reverse_proxy_connector_with, vmc_connector_with,
};
pub use sddcs::SddcsClient;
