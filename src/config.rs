//! Navigator configuration.
//!
//! Configuration can be built in code or loaded from a TOML fragment:
//!
//! ```
//! use reinhardt_navigation::{EmptyQueryPolicy, NavigationType, NavigatorConfig};
//!
//! let config = NavigatorConfig::from_toml_str(
//!     r#"
//!     empty_query = "omit"
//!     redirect = "replace"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.empty_query, EmptyQueryPolicy::Omit);
//! assert_eq!(config.redirect, NavigationType::Replace);
//! ```

use crate::error::NavigationResult;
use crate::history::NavigationType;
use serde::{Deserialize, Serialize};

/// What to do with the `?` separator when there are no query parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyQueryPolicy {
	/// Always write `?`, producing `"/path?"` for empty parameters.
	#[default]
	KeepSeparator,
	/// Drop the `?` when the query string is empty.
	Omit,
}

/// Settings for a [`Navigator`](crate::Navigator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
	/// Separator handling for empty query strings.
	pub empty_query: EmptyQueryPolicy,
	/// History operation used by `redirect_to`.
	pub redirect: NavigationType,
}

impl NavigatorConfig {
	/// Creates the default configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the empty query policy.
	pub fn with_empty_query(mut self, policy: EmptyQueryPolicy) -> Self {
		self.empty_query = policy;
		self
	}

	/// Sets the history operation used by redirects.
	pub fn with_redirect(mut self, redirect: NavigationType) -> Self {
		self.redirect = redirect;
		self
	}

	/// Loads configuration from a TOML document. Missing keys take defaults.
	///
	/// # Errors
	///
	/// Returns [`NavigationError::Config`](crate::NavigationError::Config) if
	/// the document is malformed or holds unknown values.
	pub fn from_toml_str(source: &str) -> NavigationResult<Self> {
		Ok(toml::from_str(source)?)
	}
}
