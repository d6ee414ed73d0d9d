//! In-memory router context.
//!
//! [`MemoryHistory`] stands in for the browser where there is no `window`:
//! server-side rendering, native hosts, and tests. It records every
//! navigation it receives so callers can assert on exactly what was pushed.

use crate::error::RouterError;
use crate::history::{History, Location, NavigationType};
use parking_lot::Mutex;

/// A navigation received by a [`MemoryHistory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
	/// Push or replace.
	pub kind: NavigationType,
	/// The target exactly as it was handed over.
	pub target: String,
}

#[derive(Debug)]
struct State {
	entries: Vec<String>,
	navigations: Vec<Navigation>,
	pending_failure: Option<String>,
}

/// A thread-safe, in-memory [`History`].
///
/// Push appends an entry, replace overwrites the last one. There is no
/// back/forward traversal.
///
/// # Example
///
/// ```
/// use reinhardt_navigation::{History, MemoryHistory};
///
/// let history = MemoryHistory::new();
/// history.push("/users/?page=2").unwrap();
///
/// assert_eq!(history.location().unwrap().search, "?page=2");
/// assert_eq!(history.pushed(), vec!["/users/?page=2".to_string()]);
/// ```
#[derive(Debug)]
pub struct MemoryHistory {
	state: Mutex<State>,
}

impl Default for MemoryHistory {
	fn default() -> Self {
		Self::new()
	}
}

impl MemoryHistory {
	/// Creates a history positioned at `/`.
	pub fn new() -> Self {
		Self::with_initial("/")
	}

	/// Creates a history positioned at `initial`.
	pub fn with_initial(initial: impl Into<String>) -> Self {
		Self {
			state: Mutex::new(State {
				entries: vec![initial.into()],
				navigations: Vec::new(),
				pending_failure: None,
			}),
		}
	}

	/// Makes the next push or replace fail with `message`.
	///
	/// The failing navigation is neither applied nor recorded.
	pub fn fail_next(&self, message: impl Into<String>) {
		self.state.lock().pending_failure = Some(message.into());
	}

	/// Returns the current target.
	pub fn current(&self) -> String {
		self.state
			.lock()
			.entries
			.last()
			.cloned()
			.unwrap_or_default()
	}

	/// Returns every entry in the stack, oldest first.
	pub fn entries(&self) -> Vec<String> {
		self.state.lock().entries.clone()
	}

	/// Returns every navigation received, in order.
	pub fn navigations(&self) -> Vec<Navigation> {
		self.state.lock().navigations.clone()
	}

	/// Returns the targets of push navigations only.
	pub fn pushed(&self) -> Vec<String> {
		self.state
			.lock()
			.navigations
			.iter()
			.filter(|n| n.kind == NavigationType::Push)
			.map(|n| n.target.clone())
			.collect()
	}

	/// Returns the targets of replace navigations only.
	pub fn replaced(&self) -> Vec<String> {
		self.state
			.lock()
			.navigations
			.iter()
			.filter(|n| n.kind == NavigationType::Replace)
			.map(|n| n.target.clone())
			.collect()
	}

	fn apply(&self, target: &str, kind: NavigationType) -> Result<(), RouterError> {
		let mut state = self.state.lock();
		if let Some(message) = state.pending_failure.take() {
			return Err(RouterError::NavigationFailed(message));
		}

		match kind {
			NavigationType::Push => state.entries.push(target.to_string()),
			NavigationType::Replace => match state.entries.last_mut() {
				Some(last) => *last = target.to_string(),
				None => state.entries.push(target.to_string()),
			},
		}
		state.navigations.push(Navigation {
			kind,
			target: target.to_string(),
		});
		Ok(())
	}
}

impl History for MemoryHistory {
	fn push(&self, target: &str) -> Result<(), RouterError> {
		self.apply(target, NavigationType::Push)
	}

	fn replace(&self, target: &str) -> Result<(), RouterError> {
		self.apply(target, NavigationType::Replace)
	}

	fn location(&self) -> Result<Location, RouterError> {
		Ok(Location::parse(&self.current()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_initial_location() {
		let history = MemoryHistory::new();
		assert_eq!(history.current(), "/");
		assert_eq!(history.location().unwrap(), Location::parse("/"));
		assert!(history.navigations().is_empty());
	}

	#[rstest]
	fn test_with_initial() {
		let history = MemoryHistory::with_initial("/items?id=42&x=y");
		assert_eq!(history.location().unwrap().search, "?id=42&x=y");
	}

	#[rstest]
	fn test_push_appends() {
		let history = MemoryHistory::new();
		history.push("/a").unwrap();
		history.push("/b").unwrap();

		assert_eq!(history.entries(), vec!["/", "/a", "/b"]);
		assert_eq!(history.current(), "/b");
		assert_eq!(history.pushed(), vec!["/a", "/b"]);
		assert!(history.replaced().is_empty());
	}

	#[rstest]
	fn test_replace_overwrites() {
		let history = MemoryHistory::new();
		history.push("/a").unwrap();
		history.replace("/login").unwrap();

		assert_eq!(history.entries(), vec!["/", "/login"]);
		assert_eq!(history.replaced(), vec!["/login"]);
		assert_eq!(
			history.navigations(),
			vec![
				Navigation {
					kind: NavigationType::Push,
					target: "/a".to_string(),
				},
				Navigation {
					kind: NavigationType::Replace,
					target: "/login".to_string(),
				},
			]
		);
	}

	#[rstest]
	fn test_navigate_dispatches_on_type() {
		let history = MemoryHistory::new();
		history.navigate("/x", NavigationType::Push).unwrap();
		history.navigate("/y", NavigationType::Replace).unwrap();
		assert_eq!(history.entries(), vec!["/", "/y"]);
	}

	#[rstest]
	fn test_fail_next_is_one_shot() {
		let history = MemoryHistory::new();
		history.fail_next("quota exceeded");

		let err = history.push("/a").unwrap_err();
		assert_eq!(err, RouterError::NavigationFailed("quota exceeded".to_string()));
		assert!(history.navigations().is_empty());
		assert_eq!(history.current(), "/");

		history.push("/a").unwrap();
		assert_eq!(history.current(), "/a");
	}

	#[rstest]
	fn test_shared_across_threads() {
		use std::sync::Arc;

		let history = Arc::new(MemoryHistory::new());
		let handles: Vec<_> = (0..4)
			.map(|i| {
				let history = Arc::clone(&history);
				std::thread::spawn(move || history.push(&format!("/t/{}", i)).unwrap())
			})
			.collect();
		for handle in handles {
			handle.join().unwrap();
		}

		assert_eq!(history.pushed().len(), 4);
	}
}
