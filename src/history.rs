//! The router context contract.
//!
//! Navigation helpers never reach for an ambient router. Whatever owns the
//! history stack implements [`History`] and is handed to the helpers
//! explicitly.

use crate::error::RouterError;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use std::sync::Arc;

/// How a navigation affects the history stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationType {
	/// Add a new entry.
	#[default]
	Push,
	/// Overwrite the current entry.
	Replace,
}

/// A snapshot of the current location.
///
/// `search` is empty or starts with `?`, `hash` is empty or starts with `#`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
	/// Everything before the query and fragment.
	pub pathname: String,
	/// The query portion including its leading `?`.
	pub search: String,
	/// The fragment including its leading `#`.
	pub hash: String,
}

impl Location {
	/// Splits a navigation target into its components.
	///
	/// A bare `?` or `#` produces an empty component, the same way
	/// `window.location` reports it.
	///
	/// ```
	/// use reinhardt_navigation::Location;
	///
	/// let loc = Location::parse("/search?q=rust#results");
	/// assert_eq!(loc.pathname, "/search");
	/// assert_eq!(loc.search, "?q=rust");
	/// assert_eq!(loc.hash, "#results");
	/// ```
	pub fn parse(target: &str) -> Self {
		let (rest, hash) = match target.find('#') {
			Some(idx) => target.split_at(idx),
			None => (target, ""),
		};
		let (pathname, search) = match rest.find('?') {
			Some(idx) => rest.split_at(idx),
			None => (rest, ""),
		};

		Self {
			pathname: pathname.to_string(),
			search: non_trivial(search),
			hash: non_trivial(hash),
		}
	}

	/// Reassembles the location into a single target string.
	pub fn href(&self) -> String {
		format!("{}{}{}", self.pathname, self.search, self.hash)
	}
}

fn non_trivial(component: &str) -> String {
	if component.len() <= 1 {
		String::new()
	} else {
		component.to_string()
	}
}

/// A router context capable of changing and reporting the current location.
pub trait History {
	/// Adds `target` as a new history entry and makes it current.
	fn push(&self, target: &str) -> Result<(), RouterError>;

	/// Replaces the current history entry with `target`.
	fn replace(&self, target: &str) -> Result<(), RouterError>;

	/// Returns the current location.
	fn location(&self) -> Result<Location, RouterError>;

	/// Performs a navigation of the given type.
	fn navigate(&self, target: &str, nav_type: NavigationType) -> Result<(), RouterError> {
		match nav_type {
			NavigationType::Push => self.push(target),
			NavigationType::Replace => self.replace(target),
		}
	}
}

impl<H: History + ?Sized> History for &H {
	fn push(&self, target: &str) -> Result<(), RouterError> {
		(**self).push(target)
	}

	fn replace(&self, target: &str) -> Result<(), RouterError> {
		(**self).replace(target)
	}

	fn location(&self) -> Result<Location, RouterError> {
		(**self).location()
	}
}

impl<H: History + ?Sized> History for Arc<H> {
	fn push(&self, target: &str) -> Result<(), RouterError> {
		(**self).push(target)
	}

	fn replace(&self, target: &str) -> Result<(), RouterError> {
		(**self).replace(target)
	}

	fn location(&self) -> Result<Location, RouterError> {
		(**self).location()
	}
}

impl<H: History + ?Sized> History for Rc<H> {
	fn push(&self, target: &str) -> Result<(), RouterError> {
		(**self).push(target)
	}

	fn replace(&self, target: &str) -> Result<(), RouterError> {
		(**self).replace(target)
	}

	fn location(&self) -> Result<Location, RouterError> {
		(**self).location()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("/", "/", "", "")]
	#[case("/users/42/", "/users/42/", "", "")]
	#[case("/p?x=1#h", "/p", "?x=1", "#h")]
	#[case("/p?", "/p", "", "")]
	#[case("/p#", "/p", "", "")]
	#[case("/p#frag?not-a-query", "/p", "", "#frag?not-a-query")]
	#[case("?only=query", "", "?only=query", "")]
	#[case(
		"https://example.com/docs?v=2#intro",
		"https://example.com/docs",
		"?v=2",
		"#intro"
	)]
	fn test_location_parse(
		#[case] target: &str,
		#[case] pathname: &str,
		#[case] search: &str,
		#[case] hash: &str,
	) {
		let loc = Location::parse(target);
		assert_eq!(loc.pathname, pathname);
		assert_eq!(loc.search, search);
		assert_eq!(loc.hash, hash);
	}

	#[rstest]
	fn test_location_href() {
		assert_eq!(Location::parse("/p?x=1#h").href(), "/p?x=1#h");
		assert_eq!(Location::parse("/p?").href(), "/p");
	}

	#[rstest]
	fn test_navigation_type_default() {
		assert_eq!(NavigationType::default(), NavigationType::Push);
	}
}
