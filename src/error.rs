use crate::Availability;
use derive_more::From;

pub type Result<T> = core::result::Result<T, Error>;

/// Main ccloud error type.
#[derive(Debug, From)]
pub enum Error {
	// -- Endpoint resolution
	/// The catalog has no endpoint matching the requested
	/// service type / region / availability combination.
	EndpointNotFound {
		service_type: String,
		region: Option<String>,
		availability: Availability,
	},
	/// The locator was invoked without a service-type selector.
	MissingServiceType,

	// -- Auth
	AuthEnvVarNotFound {
		env_name: String,
	},

	// -- Externals
	#[from]
	SerdeJson(serde_json::Error),
	#[from]
	Reqwest(reqwest::Error),
}

// region:    --- Error Boilerplate

impl core::fmt::Display for Error {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
		write!(fmt, "{self:?}")
	}
}

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
