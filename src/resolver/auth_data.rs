use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// The authentication data carried by a provider session.
///
/// Either a literal token, or the name of an environment variable holding one.
#[derive(Clone, Serialize, Deserialize)]
pub enum AuthData {
	FromEnv(String),
	Token(String),
}

/// Constructors
impl AuthData {
	pub fn from_env(env_name: impl Into<String>) -> Self {
		Self::FromEnv(env_name.into())
	}

	pub fn from_token(token: impl Into<String>) -> Self {
		Self::Token(token.into())
	}
}

/// Getters
impl AuthData {
	/// Resolve the token value, reading the environment when needed.
	pub fn token_value(&self) -> Result<String> {
		match self {
			Self::FromEnv(env_name) => std::env::var(env_name).map_err(|_| Error::AuthEnvVarNotFound {
				env_name: env_name.to_string(),
			}),
			Self::Token(value) => Ok(value.to_string()),
		}
	}
}

// Token values must not leak into logs.
impl std::fmt::Debug for AuthData {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::FromEnv(env_name) => write!(f, "AuthData::FromEnv({env_name})"),
			Self::Token(_) => write!(f, "AuthData::Token(REDACTED)"),
		}
	}
}
