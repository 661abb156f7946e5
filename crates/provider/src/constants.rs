//! Provider-wide constants.

/// Environment variable holding the VMC API (refresh) token.
pub const API_TOKEN_ENV: &str = "API_TOKEN";

/// Path suffix carried by the NSX-T reverse proxy URL reported in the SDDC
/// resource config. The NSX-T SDK expects the proxy root without it.
pub const SKS_NSXT_MANAGER: &str = "/sks-nsxt-manager";

/// Default Cloud Services Platform endpoint used for token exchange.
pub const DEFAULT_CSP_URL: &str = "https://console.cloud.vmware.com";

/// Default VMC API endpoint.
pub const DEFAULT_VMC_URL: &str = "https://vmc.vmware.com";
