//! The resolver module holds the constructs used to resolve where and how a
//! service call is made: the [`Endpoint`] URL value, the session [`AuthData`],
//! and the optional caller-supplied [`EndpointResolver`] override.

// region:    --- Modules

mod auth_data;
mod endpoint;
mod endpoint_resolver;

// -- Flatten
pub use auth_data::*;
pub use endpoint::*;
pub use endpoint_resolver::*;

// endregion: --- Modules
