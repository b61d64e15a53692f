use bytes::Bytes;
use exolines_core::{Error, Result};
use hyper::{HeaderMap, StatusCode};
use serde::Serialize;

/// HTTP Response representation
#[derive(Debug)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Create a new Response with the given status code
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	/// Create a Response with HTTP 200 OK status
	///
	/// # Examples
	///
	/// ```
	/// use exolines_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::ok();
	/// assert_eq!(response.status, StatusCode::OK);
	/// ```
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	/// Create a Response with HTTP 404 Not Found status
	pub fn not_found() -> Self {
		Self::new(StatusCode::NOT_FOUND)
	}

	/// Create a Response with HTTP 405 Method Not Allowed status
	pub fn method_not_allowed() -> Self {
		Self::new(StatusCode::METHOD_NOT_ALLOWED)
	}

	/// Create a Response with HTTP 500 Internal Server Error status
	pub fn internal_server_error() -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR)
	}

	/// Set the body to the JSON encoding of `value`
	///
	/// # Examples
	///
	/// ```
	/// use exolines_http::Response;
	/// use serde_json::json;
	///
	/// let response = Response::ok().with_json(&json!({"draw": "1"})).unwrap();
	/// assert_eq!(
	///     response.headers.get("content-type").unwrap(),
	///     "application/json"
	/// );
	/// ```
	pub fn with_json<T: Serialize>(mut self, value: &T) -> Result<Self> {
		let body = serde_json::to_vec(value).map_err(|e| Error::Http(e.to_string()))?;
		self.headers.insert(
			hyper::header::CONTENT_TYPE,
			hyper::header::HeaderValue::from_static("application/json"),
		);
		self.body = Bytes::from(body);
		Ok(self)
	}

	/// Set the body to an HTML document
	pub fn with_html(mut self, html: impl Into<String>) -> Self {
		self.headers.insert(
			hyper::header::CONTENT_TYPE,
			hyper::header::HeaderValue::from_static("text/html; charset=utf-8"),
		);
		self.body = Bytes::from(html.into());
		self
	}

	/// Set a plain body
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_with_json_sets_body_and_content_type() {
		// Arrange
		let payload = json!({"recordsTotal": 5});

		// Act
		let response = Response::ok().with_json(&payload).unwrap();

		// Assert
		let decoded: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
		assert_eq!(decoded, payload);
		assert_eq!(response.status, StatusCode::OK);
	}

	#[test]
	fn test_with_html_sets_content_type() {
		let response = Response::ok().with_html("<html></html>");
		assert_eq!(
			response.headers.get("content-type").unwrap(),
			"text/html; charset=utf-8"
		);
	}
}
