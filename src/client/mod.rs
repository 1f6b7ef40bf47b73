// region:    --- Modules

mod endpoint_options;
mod provider_client;
mod service_client;

// -- Flatten
pub use endpoint_options::*;
pub use provider_client::*;
pub use service_client::*;

// endregion: --- Modules
