//! Navigation property-based tests
//!
//! Universally quantified behavior of the navigation shortcuts.

use proptest::prelude::*;
use reinhardt_navigation::prelude::*;
use reinhardt_navigation::TargetKind;
use std::fmt::Write;

/// Reference `application/x-www-form-urlencoded` byte serializer, written
/// out from the WHATWG URL standard independently of the crate's encoder.
fn form_encode(input: &str) -> String {
	let mut out = String::new();
	for byte in input.bytes() {
		match byte {
			b'*' | b'-' | b'.' | b'_' => out.push(byte as char),
			b if b.is_ascii_alphanumeric() => out.push(b as char),
			b' ' => out.push('+'),
			b => write!(out, "%{:02X}", b).unwrap(),
		}
	}
	out
}

/// Strings made only of characters the browser's `trim()` strips.
const BLANK_TARGET: &str =
	"[ \\t\\r\\n\\x{0B}\\x{0C}\\x{A0}\\x{FEFF}\\x{2028}\\x{2029}\\x{3000}]{0,16}";

proptest! {
	/// Test: Any non-blank path is pushed exactly once, verbatim
	///
	/// Category: Property
	#[test]
	fn prop_navigate_to_pushes_non_blank(path in "\\PC*[^\\s\\x{FEFF}]\\PC*") {
		let history = MemoryHistory::new();

		navigate_to(&history, &path).unwrap();

		prop_assert_eq!(history.pushed(), vec![path]);
	}

	/// Test: Whitespace-only paths never reach the router
	///
	/// Category: Property
	#[test]
	fn prop_blank_targets_rejected(path in BLANK_TARGET) {
		let history = MemoryHistory::new();

		prop_assert_eq!(
			navigate_to(&history, &path).unwrap_err(),
			NavigationError::InvalidArgument { kind: TargetKind::Path }
		);
		prop_assert_eq!(
			redirect_to(&history, &path).unwrap_err(),
			NavigationError::InvalidArgument { kind: TargetKind::Url }
		);
		prop_assert!(history.navigations().is_empty());
	}

	/// Test: redirect_to and navigate_to push the same target
	///
	/// Category: Property
	#[test]
	fn prop_redirect_matches_navigate(target in "\\PC{0,32}") {
		let navigated = MemoryHistory::new();
		let redirected = MemoryHistory::new();

		let a = navigate_to(&navigated, &target);
		let b = redirect_to(&redirected, &target);

		prop_assert_eq!(a.is_ok(), b.is_ok());
		prop_assert_eq!(navigated.pushed(), redirected.pushed());
	}

	/// Test: Parameters pushed with a path are read back unchanged
	///
	/// Category: Property
	#[test]
	fn prop_params_read_back(
		params in prop::collection::btree_map("[a-z]{1,8}", "\\PC{0,16}", 0..6)
	) {
		let history = MemoryHistory::new();
		let expected_query = params
			.iter()
			.map(|(k, v)| format!("{}={}", form_encode(k), form_encode(v)))
			.collect::<Vec<_>>()
			.join("&");

		navigate_with_params(&history, "/p", params.clone()).unwrap();

		prop_assert_eq!(history.pushed(), vec![format!("/p?{}", expected_query)]);
		for (key, value) in &params {
			prop_assert_eq!(get_query_param(&history, key).unwrap(), Some(value.clone()));
		}
	}

	/// Test: Only alphanumerics and `*-._` pass through unescaped
	///
	/// Category: Property
	#[test]
	fn prop_unreserved_set(c in any::<char>()) {
		let value = c.to_string();
		let encoded = QueryParams::new().with("k", value.clone()).encode();
		let encoded_value = encoded.strip_prefix("k=").unwrap();

		prop_assert_eq!(encoded_value, form_encode(&value));
		if c.is_ascii_alphanumeric() || "*-._".contains(c) {
			prop_assert_eq!(encoded_value, value.as_str());
		} else if c == ' ' {
			prop_assert_eq!(encoded_value, "+");
		} else {
			prop_assert!(encoded_value.starts_with('%'));
			prop_assert_eq!(encoded_value.len(), 3 * c.len_utf8());
		}
	}
}
