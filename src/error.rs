//! Error types for navigation helpers.

use crate::target::TargetKind;
use thiserror::Error;

/// Errors raised by a router context while performing a navigation or
/// reading the current location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
	/// The underlying history rejected the navigation.
	#[error("Navigation failed: {0}")]
	NavigationFailed(String),

	/// The router context is not reachable (e.g. no `window` object).
	#[error("Router unavailable: {0}")]
	Unavailable(String),
}

/// Errors returned by [`Navigator`](crate::Navigator) and the shortcut functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
	/// A required path or URL argument was missing, not a string, or blank.
	#[error("Invalid {kind} provided: must be a non-empty string")]
	InvalidArgument {
		/// Which argument was rejected.
		kind: TargetKind,
	},

	/// The router context failed; passed through untouched.
	#[error(transparent)]
	Router(#[from] RouterError),

	/// Query parameters could not be serialized.
	#[error("Query encoding error: {0}")]
	QueryEncoding(String),

	/// The current search string could not be deserialized.
	#[error("Query decoding error: {0}")]
	QueryDecoding(String),

	/// Navigator configuration could not be loaded.
	#[error("Configuration error: {0}")]
	Config(String),
}

impl NavigationError {
	/// Returns `true` if this is an [`InvalidArgument`](Self::InvalidArgument) error.
	pub fn is_invalid_argument(&self) -> bool {
		matches!(self, Self::InvalidArgument { .. })
	}
}

impl From<serde_urlencoded::ser::Error> for NavigationError {
	fn from(err: serde_urlencoded::ser::Error) -> Self {
		Self::QueryEncoding(err.to_string())
	}
}

impl From<serde_urlencoded::de::Error> for NavigationError {
	fn from(err: serde_urlencoded::de::Error) -> Self {
		Self::QueryDecoding(err.to_string())
	}
}

impl From<toml::de::Error> for NavigationError {
	fn from(err: toml::de::Error) -> Self {
		Self::Config(err.to_string())
	}
}

/// Result type alias for navigation operations.
pub type NavigationResult<T> = Result<T, NavigationError>;
