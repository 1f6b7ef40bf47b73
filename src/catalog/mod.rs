//! The service catalog is the default endpoint locator backing a
//! [`crate::ProviderClient`]. It is the (typically auth-time) list of backend
//! services and the URLs at which they are reachable, per region and
//! availability interface.

use crate::resolver::Endpoint;
use crate::{Availability, EndpointOptions, Error, Result};
use serde::{Deserialize, Serialize};

/// One reachable URL for a service, qualified by region and interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEndpoint {
	#[serde(default)]
	pub region: Option<String>,
	#[serde(default)]
	pub interface: Availability,
	pub url: String,
}

/// One service entry, keyed by its service-type tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
	#[serde(rename = "type")]
	pub service_type: String,
	#[serde(default)]
	pub name: Option<String>,
	pub endpoints: Vec<CatalogEndpoint>,
}

/// The full catalog of a provider session.
/// Serializes as a plain list of entries, matching the auth-response shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceCatalog {
	entries: Vec<CatalogEntry>,
}

/// Constructors
impl ServiceCatalog {
	#[must_use]
	pub fn new(entries: Vec<CatalogEntry>) -> Self {
		Self { entries }
	}

	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}
}

/// Lookup
impl ServiceCatalog {
	/// Resolve the endpoint URL for the given options.
	///
	/// Selection: first entry whose service type matches, then the first of its
	/// endpoints matching the requested availability interface and (when set)
	/// region. The returned URL is normalized to end with a `/` so resource
	/// paths concatenate cleanly.
	pub fn endpoint_for(&self, options: &EndpointOptions) -> Result<Endpoint> {
		let service_type = options.service_type.as_deref().ok_or(Error::MissingServiceType)?;

		let found = self
			.entries
			.iter()
			.filter(|entry| entry.service_type == service_type)
			.flat_map(|entry| entry.endpoints.iter())
			.find(|endpoint| {
				if endpoint.interface != options.availability {
					return false;
				}
				match (&options.region, &endpoint.region) {
					(Some(wanted), Some(region)) => wanted == region,
					(Some(_), None) => false,
					(None, _) => true,
				}
			});

		match found {
			Some(endpoint) => Ok(Endpoint::from_owned(normalize_url(&endpoint.url))),
			None => Err(Error::EndpointNotFound {
				service_type: service_type.to_string(),
				region: options.region.clone(),
				availability: options.availability,
			}),
		}
	}
}

/// Ensures the URL ends with a `/`.
fn normalize_url(url: &str) -> String {
	if url.ends_with('/') {
		url.to_string()
	} else {
		format!("{url}/")
	}
}
