//! Helper functions for the VMC provider.
//!
//! Each helper is independent and stateless. They translate between provider
//! state and the VMC data model defined in the [`model`] crate.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`constants`] | Environment variable name, NSX-T manager suffix, default endpoints |
//! | [`convert`] | Storage capacity and deployment type conversions |
//! | [`validate`] | UUID and URL validation |
//! | [`licensing`] | Microsoft licensing block expansion |
//! | [`sddc`] | SDDC fetch and host aggregation |

pub mod constants;
pub mod convert;
pub mod licensing;
pub mod sddc;
pub mod validate;

pub use constants::{API_TOKEN_ENV, DEFAULT_CSP_URL, DEFAULT_VMC_URL, SKS_NSXT_MANAGER};
pub use convert::{convert_deploy_type, convert_storage_capacity_to_int};
pub use licensing::expand_msft_license_config;
pub use sddc::{get_sddc, total_hosts_for, total_sddc_hosts};
pub use validate::{is_valid_url, is_valid_uuid};
