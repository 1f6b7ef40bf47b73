use crate::ProviderClient;
use crate::resolver::Endpoint;

/// A `ServiceClient` represents a ready-to-use handle on one backend sub-API.
///
/// This structure contains:
/// - `provider`: The session it was built from.
/// - `endpoint`: The base URL at which the service is reachable.
/// - `service_type`: The service-type tag the client targets.
/// - `resource_base`: When set, the endpoint extended with the fixed sub-path
///   under which the API's resource operations are rooted.
#[derive(Debug, Clone)]
pub struct ServiceClient {
	provider: ProviderClient,
	endpoint: Endpoint,
	service_type: String,
	resource_base: Option<Endpoint>,
}

/// Constructors
impl ServiceClient {
	pub(crate) fn new(provider: ProviderClient, endpoint: Endpoint, service_type: &str) -> Self {
		Self {
			provider,
			endpoint,
			service_type: service_type.to_string(),
			resource_base: None,
		}
	}

	pub(crate) fn with_resource_base(mut self, resource_base: Endpoint) -> Self {
		self.resource_base = Some(resource_base);
		self
	}
}

/// Getters
impl ServiceClient {
	#[must_use]
	pub fn provider(&self) -> &ProviderClient {
		&self.provider
	}

	#[must_use]
	pub fn endpoint(&self) -> &Endpoint {
		&self.endpoint
	}

	#[must_use]
	pub fn service_type(&self) -> &str {
		&self.service_type
	}

	#[must_use]
	pub fn resource_base(&self) -> Option<&Endpoint> {
		self.resource_base.as_ref()
	}

	/// The session's HTTP client (shared, cheap to hand out).
	#[must_use]
	pub fn web_client(&self) -> &reqwest::Client {
		self.provider.web_client()
	}
}

/// URL building
impl ServiceClient {
	/// The full URL for a resource path, rooted at the resource base when one
	/// is set, otherwise at the endpoint.
	#[must_use]
	pub fn resource_url(&self, path: &str) -> String {
		let base = self.resource_base.as_ref().unwrap_or(&self.endpoint);
		format!("{}{path}", base.base_url())
	}
}
