//! Browser History API router context.
//!
//! Only compiled for `wasm32` targets.

use crate::error::RouterError;
use crate::history::{History, Location};
use wasm_bindgen::JsValue;

/// A [`History`] backed by `window.history` and `window.location`.
///
/// Pushing a cross-origin URL is rejected by the browser with a
/// `SecurityError`, which surfaces as [`RouterError::NavigationFailed`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHistory;

impl BrowserHistory {
	/// Creates a handle to the browser history.
	pub fn new() -> Self {
		Self
	}
}

fn window() -> Result<web_sys::Window, RouterError> {
	web_sys::window().ok_or_else(|| RouterError::Unavailable("no global `window`".to_string()))
}

fn browser_history() -> Result<web_sys::History, RouterError> {
	window()?.history().map_err(js_failure)
}

fn js_failure(err: JsValue) -> RouterError {
	RouterError::NavigationFailed(format!("{:?}", err))
}

impl History for BrowserHistory {
	fn push(&self, target: &str) -> Result<(), RouterError> {
		browser_history()?
			.push_state_with_url(&JsValue::NULL, "", Some(target))
			.map_err(js_failure)
	}

	fn replace(&self, target: &str) -> Result<(), RouterError> {
		browser_history()?
			.replace_state_with_url(&JsValue::NULL, "", Some(target))
			.map_err(js_failure)
	}

	fn location(&self) -> Result<Location, RouterError> {
		let location = window()?.location();
		Ok(Location {
			pathname: location.pathname().map_err(js_failure)?,
			search: location.search().map_err(js_failure)?,
			hash: location.hash().map_err(js_failure)?,
		})
	}
}
