use exolines_http::Handler;
use std::collections::HashMap;
use std::sync::Arc;

/// One URL pattern bound to a handler
///
/// Patterns are segment-wise: `/molecule/{slug}/states/` matches any value
/// in the `{slug}` position and hands it to the request as a path param.
#[derive(Clone)]
pub struct Route {
	pub(crate) pattern: String,
	pub(crate) handler: Arc<dyn Handler>,
	pub(crate) name: Option<String>,
}

/// Shorthand for `Route::new`, mirroring URL-conf style route tables
pub fn path(pattern: impl Into<String>, handler: Arc<dyn Handler>) -> Route {
	Route::new(pattern, handler)
}

impl Route {
	pub fn new(pattern: impl Into<String>, handler: Arc<dyn Handler>) -> Self {
		Self {
			pattern: pattern.into(),
			handler,
			name: None,
		}
	}

	/// Name the route for URL reversal
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Match a request path against the pattern, extracting `{param}` values
	pub(crate) fn matches(&self, request_path: &str) -> Option<HashMap<String, String>> {
		let pattern_segments: Vec<&str> =
			self.pattern.split('/').filter(|s| !s.is_empty()).collect();
		let path_segments: Vec<&str> =
			request_path.split('/').filter(|s| !s.is_empty()).collect();

		if pattern_segments.len() != path_segments.len() {
			return None;
		}

		let mut params = HashMap::new();
		for (pattern_segment, path_segment) in pattern_segments.iter().zip(&path_segments) {
			if let Some(name) = pattern_segment
				.strip_prefix('{')
				.and_then(|s| s.strip_suffix('}'))
			{
				params.insert(name.to_string(), path_segment.to_string());
			} else if pattern_segment != path_segment {
				return None;
			}
		}
		Some(params)
	}

	/// Substitute params back into the pattern
	pub(crate) fn fill(&self, params: &HashMap<String, String>) -> Option<String> {
		crate::reverse::fill_pattern(&self.pattern, params)
	}
}
