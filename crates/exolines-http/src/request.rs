use bytes::Bytes;
use hyper::{HeaderMap, Method, Uri};
use indexmap::IndexMap;
use percent_encoding::percent_decode_str;
use std::collections::HashMap;

/// HTTP Request representation
///
/// Query parameters are stored in an [`IndexMap`] so the flat key-value
/// pairs keep the order in which the client serialized them. The data-table
/// parser sorts its index groups numerically either way, but the consumed-key
/// bookkeeping matches the wire exactly.
#[derive(Debug, Clone)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub headers: HeaderMap,
	pub body: Bytes,
	pub query_params: IndexMap<String, String>,
	pub path_params: HashMap<String, String>,
}

impl Request {
	/// Create a request builder
	///
	/// # Examples
	///
	/// ```
	/// use exolines_http::Request;
	/// use hyper::Method;
	///
	/// let request = Request::builder()
	///     .method(Method::GET)
	///     .uri("/molecules/")
	///     .build();
	/// assert_eq!(request.path(), "/molecules/");
	/// ```
	pub fn builder() -> RequestBuilder {
		RequestBuilder::default()
	}

	/// Get the request path
	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// Parse query parameters from a URI, preserving pair order
	pub(crate) fn parse_query_params(uri: &Uri) -> IndexMap<String, String> {
		uri.query()
			.map(|q| {
				q.split('&')
					.filter(|pair| !pair.is_empty())
					.filter_map(|pair| {
						// Split on first '=' only to preserve '=' in values
						let mut parts = pair.splitn(2, '=');
						let key = parts.next()?;
						let value = parts.next().unwrap_or("");
						Some((
							percent_decode_str(key).decode_utf8_lossy().replace('+', " "),
							percent_decode_str(value).decode_utf8_lossy().replace('+', " "),
						))
					})
					.collect()
			})
			.unwrap_or_default()
	}

	/// Returns true when the request is tagged as an XMLHttpRequest
	///
	/// The data-table endpoints reject anything else before decoding a
	/// single query key.
	///
	/// # Examples
	///
	/// ```
	/// use exolines_http::Request;
	/// use hyper::{HeaderMap, Method};
	///
	/// let mut headers = HeaderMap::new();
	/// headers.insert("x-requested-with", "XMLHttpRequest".parse().unwrap());
	///
	/// let request = Request::builder()
	///     .method(Method::GET)
	///     .uri("/ajax/molecules/?draw=1")
	///     .headers(headers)
	///     .build();
	/// assert!(request.is_xhr());
	/// ```
	pub fn is_xhr(&self) -> bool {
		self.headers
			.get("x-requested-with")
			.and_then(|h| h.to_str().ok())
			.is_some_and(|v| v.eq_ignore_ascii_case("XMLHttpRequest"))
	}

	/// Set a path parameter (used by the router for `{param}` extraction)
	pub fn set_path_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.path_params.insert(key.into(), value.into());
	}

	/// Get a path parameter extracted by the router
	pub fn path_param(&self, key: &str) -> Option<&str> {
		self.path_params.get(key).map(String::as_str)
	}
}

/// Builder for [`Request`]
#[derive(Default)]
pub struct RequestBuilder {
	method: Option<Method>,
	uri: Option<Uri>,
	headers: HeaderMap,
	body: Bytes,
}

impl RequestBuilder {
	pub fn method(mut self, method: Method) -> Self {
		self.method = Some(method);
		self
	}

	/// Set the URI; invalid input falls back to `/`
	pub fn uri(mut self, uri: impl AsRef<str>) -> Self {
		self.uri = uri.as_ref().parse().ok();
		self
	}

	pub fn headers(mut self, headers: HeaderMap) -> Self {
		self.headers = headers;
		self
	}

	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	pub fn build(self) -> Request {
		let uri = self.uri.unwrap_or_else(|| Uri::from_static("/"));
		let query_params = Request::parse_query_params(&uri);
		Request {
			method: self.method.unwrap_or(Method::GET),
			uri,
			headers: self.headers,
			body: self.body,
			query_params,
			path_params: HashMap::new(),
		}
	}
}
