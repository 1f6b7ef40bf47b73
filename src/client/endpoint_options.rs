use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The availability interface of an endpoint.
#[derive(Debug, Clone, Copy, Default, Display, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
	#[default]
	Public,
	Internal,
	Admin,
}

/// Serialization implementations
impl Availability {
	/// Serialize to a static str
	#[must_use]
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Public => "public",
			Self::Internal => "internal",
			Self::Admin => "admin",
		}
	}
}

/// Selection criteria passed to the endpoint locator.
///
/// Service constructors fill in their default service type when the caller
/// left it unset; an explicit caller value is never overridden.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointOptions {
	pub service_type: Option<String>,
	pub region: Option<String>,
	pub availability: Availability,
}

/// Constructors
impl EndpointOptions {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_service_type(mut self, service_type: impl Into<String>) -> Self {
		self.service_type = Some(service_type.into());
		self
	}

	#[must_use]
	pub fn with_region(mut self, region: impl Into<String>) -> Self {
		self.region = Some(region.into());
		self
	}

	#[must_use]
	pub fn with_availability(mut self, availability: Availability) -> Self {
		self.availability = availability;
		self
	}
}

/// Defaults
impl EndpointOptions {
	/// Set the service type only if the caller has not set one.
	pub fn apply_default_service_type(&mut self, service_type: &str) {
		if self.service_type.is_none() {
			self.service_type = Some(service_type.to_string());
		}
	}
}
