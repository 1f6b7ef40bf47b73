use std::sync::Arc;

/// A construct to store the base URL of a service.
/// It is designed to be efficiently clonable.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Endpoint {
	inner: Arc<str>,
}

/// Constructors
impl Endpoint {
	#[must_use]
	pub fn from_static(url: &'static str) -> Self {
		Self { inner: Arc::from(url) }
	}

	pub fn from_owned(url: impl Into<Arc<str>>) -> Self {
		Self { inner: url.into() }
	}
}

/// Getters
impl Endpoint {
	#[must_use]
	pub fn base_url(&self) -> &str {
		&self.inner
	}
}

/// Transformers
impl Endpoint {
	/// Returns a new `Endpoint` with `path` appended to this one.
	/// Plain concatenation; the base URL is expected to be slash-terminated.
	#[must_use]
	pub fn join(&self, path: &str) -> Self {
		Self {
			inner: Arc::from(format!("{}{path}", self.inner)),
		}
	}
}
