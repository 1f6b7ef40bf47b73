mod support;

use ccloud::catalog::ServiceCatalog;
use ccloud::{Availability, EndpointOptions, Error};
use support::Result;

#[test]
fn test_catalog_resolve_by_type() -> Result<()> {
	let catalog = support::common_catalog();

	let endpoint = catalog.endpoint_for(&EndpointOptions::new().with_service_type("arc"))?;

	assert_eq!(endpoint.base_url(), support::ARC_URL);

	Ok(())
}

#[test]
fn test_catalog_resolve_by_region() -> Result<()> {
	let catalog = support::common_catalog();

	let options = EndpointOptions::new().with_service_type("resources").with_region("eu-nl-1");
	let endpoint = catalog.endpoint_for(&options)?;

	assert_eq!(endpoint.base_url(), support::RESOURCES_URL_EU);

	Ok(())
}

#[test]
fn test_catalog_resolve_by_availability() -> Result<()> {
	let catalog = support::common_catalog();

	let options = EndpointOptions::new()
		.with_service_type("resources")
		.with_availability(Availability::Internal);
	let endpoint = catalog.endpoint_for(&options)?;

	assert_eq!(endpoint.base_url(), support::RESOURCES_URL_INTERNAL);

	Ok(())
}

#[test]
fn test_catalog_defaults_to_public_interface() -> Result<()> {
	let catalog = support::common_catalog();

	let endpoint = catalog.endpoint_for(&EndpointOptions::new().with_service_type("resources"))?;

	assert_eq!(endpoint.base_url(), support::RESOURCES_URL);

	Ok(())
}

#[test]
fn test_catalog_normalizes_trailing_slash() -> Result<()> {
	// The billing seed URL has no trailing slash.
	let catalog = support::common_catalog();

	let endpoint = catalog.endpoint_for(&EndpointOptions::new().with_service_type("sapcc-billing"))?;

	assert_eq!(endpoint.base_url(), support::BILLING_URL);

	Ok(())
}

#[test]
fn test_catalog_unknown_type_fails() -> Result<()> {
	let catalog = support::common_catalog();

	let res = catalog.endpoint_for(&EndpointOptions::new().with_service_type("no-such-service"));

	match res {
		Err(Error::EndpointNotFound {
			service_type,
			region,
			availability,
		}) => {
			assert_eq!(service_type, "no-such-service");
			assert_eq!(region, None);
			assert_eq!(availability, Availability::Public);
		}
		other => panic!("expected EndpointNotFound, got {other:?}"),
	}

	Ok(())
}

#[test]
fn test_catalog_missing_service_type_fails() -> Result<()> {
	let catalog = support::common_catalog();

	let res = catalog.endpoint_for(&EndpointOptions::new());

	assert!(matches!(res, Err(Error::MissingServiceType)));

	Ok(())
}

#[test]
fn test_catalog_empty_resolves_nothing() -> Result<()> {
	let catalog = ServiceCatalog::default();

	let res = catalog.endpoint_for(&EndpointOptions::new().with_service_type("arc"));

	assert!(matches!(res, Err(Error::EndpointNotFound { .. })));

	Ok(())
}

#[test]
fn test_catalog_invalid_json_fails() -> Result<()> {
	let res = ServiceCatalog::from_json("{not json");

	assert!(matches!(res, Err(Error::SerdeJson(_))));

	Ok(())
}
