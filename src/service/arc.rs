//! Client constructor for the Arc API (v1).

use super::support::new_rooted_client;
use crate::{EndpointOptions, ProviderClient, Result, ServiceClient};

/// Service-type tag under which Arc registers in the catalog.
pub const SERVICE_TYPE: &str = "arc";

const RESOURCE_PATH: &str = "api/v1/";

/// Create a client for the Arc v1 API.
///
/// The returned client's endpoint is the catalog URL unchanged; resource
/// operations are rooted at `<endpoint>api/v1/`.
pub fn new_v1(provider: &ProviderClient, options: EndpointOptions) -> Result<ServiceClient> {
	new_rooted_client(provider, options, SERVICE_TYPE, RESOURCE_PATH)
}
