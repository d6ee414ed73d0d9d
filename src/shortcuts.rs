//! Shortcut functions over an explicit router context.
//!
//! Each function behaves like the [`Navigator`] method of the same name
//! under the default configuration.
//!
//! ```
//! use reinhardt_navigation::MemoryHistory;
//! use reinhardt_navigation::shortcuts::{get_query_param, navigate_to, redirect_to};
//!
//! let history = MemoryHistory::new();
//!
//! navigate_to(&history, "/users/?page=2").unwrap();
//! assert_eq!(get_query_param(&history, "page").unwrap().as_deref(), Some("2"));
//!
//! assert!(redirect_to(&history, "   ").is_err());
//! ```

use crate::error::NavigationResult;
use crate::history::History;
use crate::navigator::Navigator;
use crate::target::TargetInput;

/// Pushes `path` onto `history`.
///
/// See [`Navigator::navigate_to`].
pub fn navigate_to<H, T>(history: &H, path: &T) -> NavigationResult<()>
where
	H: History + ?Sized,
	T: TargetInput + ?Sized,
{
	Navigator::new(history).navigate_to(path)
}

/// Pushes `path` with `params` as its query string onto `history`.
///
/// See [`Navigator::navigate_with_params`].
pub fn navigate_with_params<H, T, I, K, V>(history: &H, path: &T, params: I) -> NavigationResult<()>
where
	H: History + ?Sized,
	T: TargetInput + ?Sized,
	I: IntoIterator<Item = (K, V)>,
	K: Into<String>,
	V: Into<String>,
{
	Navigator::new(history).navigate_with_params(path, params)
}

/// Reads a query parameter from `history`'s current location.
///
/// See [`Navigator::get_query_param`].
pub fn get_query_param<H>(history: &H, key: &str) -> NavigationResult<Option<String>>
where
	H: History + ?Sized,
{
	Navigator::new(history).get_query_param(key)
}

/// Redirects `history` to `url`.
///
/// See [`Navigator::redirect_to`].
pub fn redirect_to<H, T>(history: &H, url: &T) -> NavigationResult<()>
where
	H: History + ?Sized,
	T: TargetInput + ?Sized,
{
	Navigator::new(history).redirect_to(url)
}
