//! Navigation target validation.
//!
//! A target is accepted when it is a string with at least one character
//! outside the ECMAScript whitespace and line terminator set, the set
//! `String.prototype.trim` strips in the browser. The untrimmed string is
//! what gets handed to the router.

use crate::error::{NavigationError, NavigationResult};
use serde_json::Value;
use std::fmt;

/// Which kind of argument a target was supplied as.
///
/// Only affects the wording of [`NavigationError::InvalidArgument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
	/// An in-app path (`navigate_to`, `navigate_with_params`).
	Path,
	/// A URL (`redirect_to`).
	Url,
}

impl fmt::Display for TargetKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Path => f.write_str("path"),
			Self::Url => f.write_str("URL"),
		}
	}
}

/// Values that can be offered as a navigation target.
///
/// Besides plain strings this covers inputs whose shape is only known at
/// runtime: `None` and non-string JSON values yield no target and are
/// rejected the same way an empty string is.
///
/// # Example
///
/// ```
/// use reinhardt_navigation::TargetInput;
/// use serde_json::json;
///
/// assert_eq!("/users/".target_str(), Some("/users/"));
/// assert_eq!(None::<&str>.target_str(), None);
/// assert_eq!(json!(123).target_str(), None);
/// ```
pub trait TargetInput {
	/// Returns the target string, or `None` if the input is not a string.
	fn target_str(&self) -> Option<&str>;
}

impl TargetInput for str {
	fn target_str(&self) -> Option<&str> {
		Some(self)
	}
}

impl TargetInput for String {
	fn target_str(&self) -> Option<&str> {
		Some(self.as_str())
	}
}

impl TargetInput for Value {
	fn target_str(&self) -> Option<&str> {
		self.as_str()
	}
}

impl<T: TargetInput + ?Sized> TargetInput for &T {
	fn target_str(&self) -> Option<&str> {
		(**self).target_str()
	}
}

impl<T: TargetInput> TargetInput for Option<T> {
	fn target_str(&self) -> Option<&str> {
		self.as_ref().and_then(TargetInput::target_str)
	}
}

/// ECMAScript `WhiteSpace` and `LineTerminator`: Unicode White_Space
/// without U+0085, plus U+FEFF.
fn is_js_whitespace(c: char) -> bool {
	(c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Returns `true` if `target` is empty after ECMAScript-style trimming.
pub fn is_blank(target: &str) -> bool {
	target.trim_matches(is_js_whitespace).is_empty()
}

/// Validates a navigation target and returns it unchanged.
///
/// # Errors
///
/// Returns [`NavigationError::InvalidArgument`] if `input` is not a string or
/// contains only whitespace.
pub fn validate<T: TargetInput + ?Sized>(kind: TargetKind, input: &T) -> NavigationResult<&str> {
	match input.target_str() {
		Some(target) if !is_blank(target) => Ok(target),
		_ => {
			tracing::warn!(%kind, "rejected navigation target");
			Err(NavigationError::InvalidArgument { kind })
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case("/")]
	#[case("/users/42/")]
	#[case("  /padded  ")]
	#[case("relative")]
	#[case("https://example.com/path")]
	#[case("\u{85}")]
	#[case(" \u{85} ")]
	fn test_validate_accepts_non_blank(#[case] input: &str) {
		assert_eq!(validate(TargetKind::Path, input).unwrap(), input);
	}

	#[rstest]
	#[case("")]
	#[case("   ")]
	#[case("\t\n")]
	#[case("\u{FEFF}")]
	#[case("\u{FEFF} \u{FEFF}")]
	#[case("\u{A0}\u{2028}\u{2029}\u{3000}\u{B}\u{C}")]
	fn test_validate_rejects_blank(#[case] input: &str) {
		let err = validate(TargetKind::Path, input).unwrap_err();
		assert_eq!(err, NavigationError::InvalidArgument { kind: TargetKind::Path });
	}

	#[rstest]
	#[case(json!(null))]
	#[case(json!(123))]
	#[case(json!(true))]
	#[case(json!(["/a"]))]
	#[case(json!({"path": "/a"}))]
	fn test_validate_rejects_non_string_values(#[case] input: Value) {
		let err = validate(TargetKind::Url, &input).unwrap_err();
		assert_eq!(err, NavigationError::InvalidArgument { kind: TargetKind::Url });
	}

	#[rstest]
	fn test_validate_option() {
		assert!(validate(TargetKind::Path, &None::<String>).is_err());
		assert_eq!(
			validate(TargetKind::Path, &Some("/home")).unwrap(),
			"/home"
		);
	}

	#[rstest]
	fn test_target_kind_display() {
		assert_eq!(TargetKind::Path.to_string(), "path");
		assert_eq!(TargetKind::Url.to_string(), "URL");
	}
}
