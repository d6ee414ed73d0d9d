//! Query string encoding and search string parsing.
//!
//! Encoding follows `application/x-www-form-urlencoded`, the same rules the
//! browser's `URLSearchParams` uses: spaces become `+` and every byte outside
//! `*-._0-9A-Za-z` is percent-encoded.

use crate::config::EmptyQueryPolicy;
use crate::error::NavigationResult;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use url::form_urlencoded;

/// An ordered list of query parameters.
///
/// Insertion order is preserved and duplicate keys are kept, so
/// `a=1&a=2` round-trips as two separate pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
	pairs: Vec<(String, String)>,
}

impl QueryParams {
	/// Creates an empty parameter list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a key/value pair.
	pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.pairs.push((key.into(), value.into()));
	}

	/// Builder form of [`append`](Self::append).
	pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.append(key, value);
		self
	}

	/// Builds parameters from any value `serde_urlencoded` can serialize.
	///
	/// # Errors
	///
	/// Returns [`NavigationError::QueryEncoding`](crate::NavigationError::QueryEncoding)
	/// if `value` is not a flat key/value structure.
	pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> NavigationResult<Self> {
		let encoded = serde_urlencoded::to_string(value)?;
		Ok(Self::parse(&encoded))
	}

	/// Parses a raw query string. A single leading `?` is ignored.
	pub fn parse(search: &str) -> Self {
		let raw = search.strip_prefix('?').unwrap_or(search);
		let pairs = form_urlencoded::parse(raw.as_bytes())
			.map(|(k, v)| (k.into_owned(), v.into_owned()))
			.collect();
		Self { pairs }
	}

	/// Returns the first value bound to `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.pairs
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	/// Returns every value bound to `key`, in order.
	pub fn get_all(&self, key: &str) -> Vec<&str> {
		self.pairs
			.iter()
			.filter(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
			.collect()
	}

	/// Returns `true` if `key` appears at least once.
	pub fn contains_key(&self, key: &str) -> bool {
		self.pairs.iter().any(|(k, _)| k == key)
	}

	/// Returns the number of pairs.
	pub fn len(&self) -> usize {
		self.pairs.len()
	}

	/// Returns whether there are no pairs.
	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}

	/// Iterates over the pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Serializes the pairs without a leading `?`.
	pub fn encode(&self) -> String {
		form_urlencoded::Serializer::new(String::new())
			.extend_pairs(self.pairs.iter())
			.finish()
	}

	/// Decodes the pairs into `T`.
	///
	/// # Errors
	///
	/// Returns [`NavigationError::QueryDecoding`](crate::NavigationError::QueryDecoding)
	/// if the pairs do not fit `T`.
	pub fn deserialize<T: DeserializeOwned>(&self) -> NavigationResult<T> {
		Ok(serde_urlencoded::from_str(&self.encode())?)
	}
}

impl fmt::Display for QueryParams {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.encode())
	}
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
		}
	}
}

impl IntoIterator for QueryParams {
	type Item = (String, String);
	type IntoIter = std::vec::IntoIter<(String, String)>;

	fn into_iter(self) -> Self::IntoIter {
		self.pairs.into_iter()
	}
}

impl<K, V> Extend<(K, V)> for QueryParams
where
	K: Into<String>,
	V: Into<String>,
{
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		self.pairs
			.extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
	}
}

/// Joins a path and an encoded query string with `?`.
///
/// With [`EmptyQueryPolicy::KeepSeparator`] the `?` is always written, so an
/// empty query yields `"{path}?"`.
pub fn join(path: &str, query: &str, policy: EmptyQueryPolicy) -> String {
	if query.is_empty() && policy == EmptyQueryPolicy::Omit {
		return path.to_string();
	}
	format!("{}?{}", path, query)
}
