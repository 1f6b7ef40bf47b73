//! Client constructor for the Limes resources API (v1).

use super::support::new_suffixed_client;
use crate::{EndpointOptions, ProviderClient, Result, ServiceClient};

/// Service-type tag under which Limes registers in the catalog.
pub const SERVICE_TYPE: &str = "resources";

const RESOURCE_PATH: &str = "v1/";

/// Create a client for the Limes v1 API.
///
/// The returned client's endpoint is the catalog URL with `v1/` appended; no
/// separate resource base is set.
pub fn new_v1(provider: &ProviderClient, options: EndpointOptions) -> Result<ServiceClient> {
	new_suffixed_client(provider, options, SERVICE_TYPE, RESOURCE_PATH)
}
