//! Client constructor for the Billing API.

use super::support::new_rooted_client;
use crate::{EndpointOptions, ProviderClient, Result, ServiceClient};

/// Service-type tag under which Billing registers in the catalog.
pub const SERVICE_TYPE: &str = "sapcc-billing";

const RESOURCE_PATH: &str = "masterdata/";

/// Create a client for the Billing masterdata API.
///
/// The returned client's endpoint is the catalog URL unchanged; resource
/// operations are rooted at `<endpoint>masterdata/`.
pub fn new_v1(provider: &ProviderClient, options: EndpointOptions) -> Result<ServiceClient> {
	new_rooted_client(provider, options, SERVICE_TYPE, RESOURCE_PATH)
}
