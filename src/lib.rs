//! The ccloud crate provides ready-to-use service clients for the
//! Converged Cloud sub-APIs (Arc, Billing, Limes, Resources).
//!
//! The entry points are:
//! - [`ProviderClient`] - the authenticated session handle, built with `ProviderClient::builder()`.
//! - `service::{arc, billing, limes, resources}::new_v1` - per-API service client constructors.
//!
//! Each constructor applies the API's default service-type tag to the caller's
//! [`EndpointOptions`], resolves a base URL through the provider's endpoint
//! locator, and attaches the API's fixed resource path.

// region:    --- Modules

mod client;
mod error;

pub mod catalog;
pub mod resolver;
pub mod service;

// -- Flatten
pub use client::*;
pub use error::{Error, Result};

// endregion: --- Modules
