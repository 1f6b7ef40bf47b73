use crate::catalog::ServiceCatalog;
use crate::resolver::{AuthData, Endpoint, EndpointResolver};
use crate::{EndpointOptions, Result};
use std::sync::Arc;

/// The authenticated provider session handle.
///
/// It is designed to be efficiently clonable and shareable across threads.
/// Service client constructors (see [`crate::service`]) borrow it to resolve
/// their endpoints, and each returned [`crate::ServiceClient`] keeps a clone.
#[derive(Debug, Clone)]
pub struct ProviderClient {
	inner: Arc<ProviderClientInner>,
}

#[derive(Debug)]
struct ProviderClientInner {
	catalog: ServiceCatalog,
	auth: Option<AuthData>,
	endpoint_resolver: Option<EndpointResolver>,
	web_client: reqwest::Client,
}

/// Constructors
impl ProviderClient {
	#[must_use]
	pub fn builder() -> ProviderClientBuilder {
		ProviderClientBuilder::default()
	}
}

/// Getters
impl ProviderClient {
	#[must_use]
	pub fn catalog(&self) -> &ServiceCatalog {
		&self.inner.catalog
	}

	#[must_use]
	pub fn auth(&self) -> Option<&AuthData> {
		self.inner.auth.as_ref()
	}

	/// The session's HTTP client, shared by all service clients.
	#[must_use]
	pub fn web_client(&self) -> &reqwest::Client {
		&self.inner.web_client
	}
}

/// Endpoint location
impl ProviderClient {
	/// Resolve the endpoint URL for the given options.
	///
	/// This is the sole fallible step of service client construction. A custom
	/// [`EndpointResolver`], when installed, takes precedence over the catalog.
	/// Failures are returned verbatim, never retried.
	pub fn locate_endpoint(&self, options: &EndpointOptions) -> Result<Endpoint> {
		let endpoint = match self.inner.endpoint_resolver.as_ref() {
			Some(resolver) => resolver.resolve(options)?,
			None => self.inner.catalog.endpoint_for(options)?,
		};
		tracing::debug!(url = endpoint.base_url(), service_type = ?options.service_type, "located endpoint");
		Ok(endpoint)
	}
}

// region:    --- ProviderClientBuilder

#[derive(Debug, Default)]
pub struct ProviderClientBuilder {
	catalog: Option<ServiceCatalog>,
	auth: Option<AuthData>,
	endpoint_resolver: Option<EndpointResolver>,
}

impl ProviderClientBuilder {
	#[must_use]
	pub fn with_catalog(mut self, catalog: ServiceCatalog) -> Self {
		self.catalog = Some(catalog);
		self
	}

	#[must_use]
	pub fn with_auth(mut self, auth: AuthData) -> Self {
		self.auth = Some(auth);
		self
	}

	#[must_use]
	pub fn with_endpoint_resolver(mut self, endpoint_resolver: EndpointResolver) -> Self {
		self.endpoint_resolver = Some(endpoint_resolver);
		self
	}

	pub fn build(self) -> Result<ProviderClient> {
		let web_client = reqwest::Client::builder().build()?;
		Ok(ProviderClient {
			inner: Arc::new(ProviderClientInner {
				catalog: self.catalog.unwrap_or_default(),
				auth: self.auth,
				endpoint_resolver: self.endpoint_resolver,
				web_client,
			}),
		})
	}
}

// endregion: --- ProviderClientBuilder
