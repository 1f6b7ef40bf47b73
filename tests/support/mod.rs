//! Some support utilities for the tests
//! Note: Must be imported in each test file

#![allow(unused)] // For test support

use ccloud::catalog::ServiceCatalog;
use ccloud::resolver::{Endpoint, EndpointResolver};
use ccloud::{EndpointOptions, ProviderClient};

pub type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

// region:    --- Common Constants

pub const ARC_URL: &str = "https://arc.qa-de-1.example.cloud/";
pub const BILLING_URL: &str = "https://billing.qa-de-1.example.cloud/";
pub const RESOURCES_URL: &str = "https://limes.qa-de-1.example.cloud/";
pub const RESOURCES_URL_EU: &str = "https://limes.eu-nl-1.example.cloud/";
pub const RESOURCES_URL_INTERNAL: &str = "https://limes-internal.qa-de-1.example.cloud/";

pub const CATALOG_JSON: &str = r#"[
	{
		"type": "arc",
		"name": "arc",
		"endpoints": [
			{"region": "qa-de-1", "interface": "public", "url": "https://arc.qa-de-1.example.cloud/"}
		]
	},
	{
		"type": "sapcc-billing",
		"endpoints": [
			{"region": "qa-de-1", "interface": "public", "url": "https://billing.qa-de-1.example.cloud"}
		]
	},
	{
		"type": "resources",
		"name": "limes",
		"endpoints": [
			{"region": "qa-de-1", "interface": "public", "url": "https://limes.qa-de-1.example.cloud/"},
			{"region": "qa-de-1", "interface": "internal", "url": "https://limes-internal.qa-de-1.example.cloud/"},
			{"region": "eu-nl-1", "interface": "public", "url": "https://limes.eu-nl-1.example.cloud/"}
		]
	}
]"#;

// endregion: --- Common Constants

// region:    --- Common Providers

pub fn common_catalog() -> ServiceCatalog {
	ServiceCatalog::from_json(CATALOG_JSON).expect("seed catalog should parse")
}

pub fn common_provider() -> ProviderClient {
	ProviderClient::builder()
		.with_catalog(common_catalog())
		.build()
		.expect("provider should build")
}

/// A provider whose locator always answers with `url`, ignoring the options.
pub fn common_provider_with_static_url(url: &'static str) -> ProviderClient {
	ProviderClient::builder()
		.with_endpoint_resolver(EndpointResolver::from_resolver_fn(move |_options: &EndpointOptions| {
			Ok(Endpoint::from_static(url))
		}))
		.build()
		.expect("provider should build")
}

pub fn init_test_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.try_init();
}

// endregion: --- Common Providers
