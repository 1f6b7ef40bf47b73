use crate::resolver::Endpoint;
use crate::{EndpointOptions, Result};
use std::sync::Arc;

/// A caller-supplied endpoint locator.
///
/// When set on a [`crate::ProviderClient`], it replaces the catalog lookup
/// entirely: every `locate_endpoint` call is delegated to the wrapped
/// function, which maps the [`EndpointOptions`] to a concrete URL or fails.
#[derive(Clone)]
pub struct EndpointResolver {
	resolver_fn: Arc<dyn Fn(&EndpointOptions) -> Result<Endpoint> + Send + Sync>,
}

/// Constructors
impl EndpointResolver {
	pub fn from_resolver_fn(resolver_fn: impl Fn(&EndpointOptions) -> Result<Endpoint> + Send + Sync + 'static) -> Self {
		Self {
			resolver_fn: Arc::new(resolver_fn),
		}
	}
}

impl EndpointResolver {
	pub fn resolve(&self, options: &EndpointOptions) -> Result<Endpoint> {
		(self.resolver_fn)(options)
	}
}

impl std::fmt::Debug for EndpointResolver {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "EndpointResolver(resolver_fn)")
	}
}
