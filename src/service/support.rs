//! Support constructors shared by the per-API modules.

use crate::{EndpointOptions, ProviderClient, Result, ServiceClient};

/// Build a client whose `endpoint` keeps the raw locator URL and whose
/// `resource_base` is the endpoint extended with `resource_path`.
pub(super) fn new_rooted_client(
	provider: &ProviderClient,
	mut options: EndpointOptions,
	service_type: &str,
	resource_path: &str,
) -> Result<ServiceClient> {
	options.apply_default_service_type(service_type);
	let endpoint = provider.locate_endpoint(&options)?;
	let resource_base = endpoint.join(resource_path);
	Ok(ServiceClient::new(provider.clone(), endpoint, service_type).with_resource_base(resource_base))
}

/// Build a client whose `endpoint` is the locator URL extended with
/// `resource_path`; the raw URL is discarded and no resource base is set.
pub(super) fn new_suffixed_client(
	provider: &ProviderClient,
	mut options: EndpointOptions,
	service_type: &str,
	resource_path: &str,
) -> Result<ServiceClient> {
	options.apply_default_service_type(service_type);
	let endpoint = provider.locate_endpoint(&options)?.join(resource_path);
	Ok(ServiceClient::new(provider.clone(), endpoint, service_type))
}
