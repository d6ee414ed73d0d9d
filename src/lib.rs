//! # Reinhardt Navigation
//!
//! Client-side navigation shortcuts for Reinhardt applications.
//!
//! The helpers validate their input, build the target URL, and delegate to a
//! router context implementing [`History`]. The context is always passed in
//! explicitly, either to the [`shortcuts`] functions or once to a
//! [`Navigator`].
//!
//! ## Router Contexts
//!
//! - [`MemoryHistory`] - in-memory, for SSR, native hosts, and tests
//! - `BrowserHistory` - `window.history` / `window.location` (`wasm32` only)
//!
//! ## Quick Example
//!
//! ```
//! use reinhardt_navigation::prelude::*;
//!
//! let navigator = Navigator::new(MemoryHistory::new());
//!
//! navigator.navigate_to("/users/").unwrap();
//! navigator
//!     .navigate_with_params("/search/", [("q", "reinhardt"), ("page", "2")])
//!     .unwrap();
//!
//! assert_eq!(navigator.get_query_param("page").unwrap().as_deref(), Some("2"));
//!
//! let err = navigator.redirect_to("   ").unwrap_err();
//! assert_eq!(err.to_string(), "Invalid URL provided: must be a non-empty string");
//! ```
//!
//! ## Empty Query Strings
//!
//! `navigate_with_params` always writes the `?` separator by default, so
//! navigating to `/a` with no parameters pushes `/a?`. Set
//! [`EmptyQueryPolicy::Omit`] in [`NavigatorConfig`] to drop it.

#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(target_arch = "wasm32")]
#[cfg_attr(docsrs, doc(cfg(target_arch = "wasm32")))]
pub mod browser;
pub mod config;
pub mod error;
pub mod history;
pub mod memory;
pub mod navigator;
pub mod query;
pub mod shortcuts;
pub mod target;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserHistory;
pub use config::{EmptyQueryPolicy, NavigatorConfig};
pub use error::{NavigationError, NavigationResult, RouterError};
pub use history::{History, Location, NavigationType};
pub use memory::{MemoryHistory, Navigation};
pub use navigator::Navigator;
pub use query::QueryParams;
pub use target::{TargetInput, TargetKind};

/// Commonly used types and shortcut functions.
pub mod prelude {
	#[cfg(target_arch = "wasm32")]
	pub use crate::browser::BrowserHistory;
	pub use crate::config::{EmptyQueryPolicy, NavigatorConfig};
	pub use crate::error::{NavigationError, NavigationResult, RouterError};
	pub use crate::history::{History, Location, NavigationType};
	pub use crate::memory::MemoryHistory;
	pub use crate::navigator::Navigator;
	pub use crate::query::QueryParams;
	pub use crate::shortcuts::{get_query_param, navigate_to, navigate_with_params, redirect_to};
}
