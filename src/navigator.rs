//! The navigation helper.
//!
//! [`Navigator`] validates its inputs, builds the target string, and hands it
//! to the router context it was constructed with. It holds no state of its
//! own beyond that context and its configuration.

use crate::config::NavigatorConfig;
use crate::error::NavigationResult;
use crate::history::{History, Location, NavigationType};
use crate::query::{self, QueryParams};
use crate::target::{self, TargetInput, TargetKind};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Navigation helper bound to an explicit router context.
///
/// # Example
///
/// ```
/// use reinhardt_navigation::{MemoryHistory, Navigator, QueryParams};
///
/// let navigator = Navigator::new(MemoryHistory::new());
///
/// navigator
///     .navigate_with_params("/search/", QueryParams::new().with("q", "rust lang"))
///     .unwrap();
///
/// assert_eq!(navigator.history().current(), "/search/?q=rust+lang");
/// assert_eq!(
///     navigator.get_query_param("q").unwrap().as_deref(),
///     Some("rust lang")
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Navigator<H> {
	history: H,
	config: NavigatorConfig,
}

impl<H: History> Navigator<H> {
	/// Creates a navigator with the default configuration.
	pub fn new(history: H) -> Self {
		Self::with_config(history, NavigatorConfig::default())
	}

	/// Creates a navigator with the given configuration.
	pub fn with_config(history: H, config: NavigatorConfig) -> Self {
		Self { history, config }
	}

	/// Returns the router context.
	pub fn history(&self) -> &H {
		&self.history
	}

	/// Returns the configuration.
	pub fn config(&self) -> &NavigatorConfig {
		&self.config
	}

	/// Consumes the navigator and returns the router context.
	pub fn into_inner(self) -> H {
		self.history
	}

	/// Pushes `path` as the new location.
	///
	/// # Errors
	///
	/// Returns [`NavigationError::InvalidArgument`](crate::NavigationError::InvalidArgument)
	/// without touching the router if `path` is missing or blank. Router
	/// failures are returned as [`NavigationError::Router`](crate::NavigationError::Router).
	pub fn navigate_to<T: TargetInput + ?Sized>(&self, path: &T) -> NavigationResult<()> {
		let path = target::validate(TargetKind::Path, path)?;
		self.dispatch(path, NavigationType::Push)
	}

	/// Replaces the current location with `path`.
	///
	/// Validation matches [`navigate_to`](Self::navigate_to).
	pub fn replace_to<T: TargetInput + ?Sized>(&self, path: &T) -> NavigationResult<()> {
		let path = target::validate(TargetKind::Path, path)?;
		self.dispatch(path, NavigationType::Replace)
	}

	/// Pushes `path` with `params` encoded as its query string.
	///
	/// Under the default configuration the `?` is always written, so empty
	/// params push `"{path}?"`.
	pub fn navigate_with_params<T, I, K, V>(&self, path: &T, params: I) -> NavigationResult<()>
	where
		T: TargetInput + ?Sized,
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let path = target::validate(TargetKind::Path, path)?;
		let params: QueryParams = params.into_iter().collect();
		let target = query::join(path, &params.encode(), self.config.empty_query);
		self.dispatch(&target, NavigationType::Push)
	}

	/// Pushes `path` with a serializable value encoded as its query string.
	///
	/// # Errors
	///
	/// In addition to the errors of [`navigate_to`](Self::navigate_to), returns
	/// [`NavigationError::QueryEncoding`](crate::NavigationError::QueryEncoding)
	/// if `query` cannot be form-encoded. Nothing is pushed in that case.
	pub fn navigate_with_query<T, S>(&self, path: &T, query: &S) -> NavigationResult<()>
	where
		T: TargetInput + ?Sized,
		S: Serialize + ?Sized,
	{
		let path = target::validate(TargetKind::Path, path)?;
		let params = QueryParams::from_serialize(query)?;
		let target = query::join(path, &params.encode(), self.config.empty_query);
		self.dispatch(&target, NavigationType::Push)
	}

	/// Redirects to `url`.
	///
	/// The URL is passed through unchanged; no scheme or host checks are made.
	/// Uses push unless the configuration selects replace.
	pub fn redirect_to<T: TargetInput + ?Sized>(&self, url: &T) -> NavigationResult<()> {
		let url = target::validate(TargetKind::Url, url)?;
		self.dispatch(url, self.config.redirect)
	}

	/// Returns the current location.
	pub fn location(&self) -> NavigationResult<Location> {
		Ok(self.history.location()?)
	}

	/// Returns the parsed query parameters of the current location.
	pub fn search_params(&self) -> NavigationResult<QueryParams> {
		Ok(QueryParams::parse(&self.history.location()?.search))
	}

	/// Returns the first value bound to `key` in the current location's
	/// query string, or `None` if the key is absent.
	///
	/// `key` is matched literally; the empty string is a valid key.
	pub fn get_query_param(&self, key: &str) -> NavigationResult<Option<String>> {
		Ok(self.search_params()?.get(key).map(str::to_string))
	}

	/// Returns every value bound to `key` in the current query string.
	pub fn get_query_params(&self, key: &str) -> NavigationResult<Vec<String>> {
		Ok(self
			.search_params()?
			.get_all(key)
			.into_iter()
			.map(str::to_string)
			.collect())
	}

	/// Decodes the current query string into `T`.
	pub fn query<T: DeserializeOwned>(&self) -> NavigationResult<T> {
		self.search_params()?.deserialize()
	}

	fn dispatch(&self, target: &str, nav_type: NavigationType) -> NavigationResult<()> {
		tracing::debug!(to = %target, ?nav_type, "navigating");
		self.history.navigate(target, nav_type)?;
		Ok(())
	}
}
