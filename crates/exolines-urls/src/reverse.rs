use exolines_core::{Error, Result};
use std::collections::HashMap;

/// Name-to-pattern table for URL reversal
///
/// Kept separate from the dispatching [`Router`](crate::Router) so code
/// that only builds URLs (the table value getters rendering hyperlink
/// cells) does not need handlers in hand.
#[derive(Debug, Clone, Default)]
pub struct UrlReverser {
	patterns: HashMap<String, String>,
}

impl UrlReverser {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a named pattern; later registrations win
	pub fn register(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
		self.patterns.insert(name.into(), pattern.into());
	}

	/// Build a URL from a registered pattern
	pub fn reverse(&self, name: &str, params: &HashMap<String, String>) -> Result<String> {
		let pattern = self
			.patterns
			.get(name)
			.ok_or_else(|| Error::NotFound(format!("route '{name}'")))?;
		fill_pattern(pattern, params)
			.ok_or_else(|| Error::NotFound(format!("params for route '{name}'")))
	}

	/// Reverse with positional pairs, for call sites with literal params
	///
	/// # Examples
	///
	/// ```
	/// use exolines_urls::UrlReverser;
	///
	/// let mut reverser = UrlReverser::new();
	/// reverser.register("state-list", "/molecule/{slug}/states/");
	///
	/// let url = reverser.reverse_with("state-list", &[("slug", "AlH")]).unwrap();
	/// assert_eq!(url, "/molecule/AlH/states/");
	/// ```
	pub fn reverse_with<S: AsRef<str>>(&self, name: &str, params: &[(S, S)]) -> Result<String> {
		let params = params
			.iter()
			.map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
			.collect();
		self.reverse(name, &params)
	}
}

/// Substitute `{param}` segments; `None` when a param is missing
pub(crate) fn fill_pattern(pattern: &str, params: &HashMap<String, String>) -> Option<String> {
	let mut url = String::from("/");
	for segment in pattern.split('/').filter(|s| !s.is_empty()) {
		let filled = match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
			Some(name) => params.get(name)?.as_str(),
			None => segment,
		};
		url.push_str(filled);
		url.push('/');
	}
	Some(url)
}
