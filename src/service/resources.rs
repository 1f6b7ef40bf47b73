//! Client constructor for the Resources API (v1).
//!
//! NOTE: This targets the same `"resources"` service type as
//! [`super::limes`] and builds an identical client. Both entry points are kept
//! so existing call sites keep working; see DESIGN.md for the flag on this
//! duplication.

use super::support::new_suffixed_client;
use crate::{EndpointOptions, ProviderClient, Result, ServiceClient};

/// Service-type tag under which the Resources API registers in the catalog.
pub const SERVICE_TYPE: &str = "resources";

const RESOURCE_PATH: &str = "v1/";

/// Create a client for the Resources v1 API.
///
/// The returned client's endpoint is the catalog URL with `v1/` appended; no
/// separate resource base is set.
pub fn new_v1(provider: &ProviderClient, options: EndpointOptions) -> Result<ServiceClient> {
	new_suffixed_client(provider, options, SERVICE_TYPE, RESOURCE_PATH)
}
