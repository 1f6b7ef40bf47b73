//! Per-API service client constructors.
//!
//! Each sub-module exposes a `new_v1` constructor with the same shape:
//! apply the API's default service-type tag, locate the endpoint through the
//! provider session, and attach the API's fixed resource path.

// region:    --- Modules

mod support;

pub mod arc;
pub mod billing;
pub mod limes;
pub mod resources;

// endregion: --- Modules
