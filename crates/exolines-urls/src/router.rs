use crate::Route;
use async_trait::async_trait;
use exolines_core::{Error, Result};
use exolines_http::{Handler, Request, Response};
use std::collections::HashMap;

/// Route table with first-match dispatch and URL reversal
pub struct Router {
	routes: Vec<Route>,
}

impl Router {
	pub fn new() -> Self {
		Self { routes: Vec::new() }
	}

	pub fn add_route(&mut self, route: Route) {
		self.routes.push(route);
	}

	/// Dispatch a request to the first matching route
	///
	/// Extracted `{param}` values are attached to the request before the
	/// handler runs. No match renders a 404 response (not an error).
	pub async fn route(&self, mut request: Request) -> Result<Response> {
		for route in &self.routes {
			if let Some(params) = route.matches(request.path()) {
				for (key, value) in params {
					request.set_path_param(key, value);
				}
				return route.handler.handle(request).await;
			}
		}
		Ok(Response::not_found().with_body(format!("Not found: {}", request.path())))
	}

	/// Reverse a route name into a URL
	///
	/// # Examples
	///
	/// ```
	/// use exolines_urls::{Router, path};
	/// use std::sync::Arc;
	/// # use async_trait::async_trait;
	/// # use exolines_http::{Handler, Request, Response};
	/// # struct Dummy;
	/// # #[async_trait]
	/// # impl Handler for Dummy {
	/// #     async fn handle(&self, _req: Request) -> exolines_core::Result<Response> {
	/// #         Ok(Response::ok())
	/// #     }
	/// # }
	///
	/// let mut router = Router::new();
	/// router.add_route(
	///     path("/molecule/{slug}/states/", Arc::new(Dummy)).with_name("state-list")
	/// );
	///
	/// let url = router.reverse_with("state-list", &[("slug", "AlH")]).unwrap();
	/// assert_eq!(url, "/molecule/AlH/states/");
	/// ```
	pub fn reverse(&self, name: &str, params: &HashMap<String, String>) -> Result<String> {
		self.routes
			.iter()
			.find(|route| route.name.as_deref() == Some(name))
			.and_then(|route| route.fill(params))
			.ok_or_else(|| Error::NotFound(format!("route '{name}'")))
	}

	/// Reverse with positional pairs, for call sites with literal params
	pub fn reverse_with<S: AsRef<str>>(&self, name: &str, params: &[(S, S)]) -> Result<String> {
		let params = params
			.iter()
			.map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
			.collect();
		self.reverse(name, &params)
	}
}

impl Default for Router {
	fn default() -> Self {
		Self::new()
	}
}

/// A router is itself a handler, so it can be mounted on a server directly
#[async_trait]
impl Handler for Router {
	async fn handle(&self, request: Request) -> Result<Response> {
		self.route(request).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::path;
	use async_trait::async_trait;
	use exolines_http::Handler;
	use hyper::Method;
	use std::sync::Arc;

	struct Echo(&'static str);

	#[async_trait]
	impl Handler for Echo {
		async fn handle(&self, request: Request) -> Result<Response> {
			let slug = request.path_param("slug").unwrap_or("-").to_string();
			Ok(Response::ok().with_body(format!("{}:{}", self.0, slug)))
		}
	}

	#[tokio::test]
	async fn test_first_match_wins_and_params_flow_through() {
		// Arrange
		let mut router = Router::new();
		router.add_route(path("/molecule/", Arc::new(Echo("list"))));
		router.add_route(path("/molecule/{slug}/", Arc::new(Echo("detail"))));

		// Act
		let request = Request::builder()
			.method(Method::GET)
			.uri("/molecule/AlH/")
			.build();
		let response = router.route(request).await.unwrap();

		// Assert
		assert_eq!(&response.body[..], b"detail:AlH");
	}

	#[tokio::test]
	async fn test_unmatched_path_is_404() {
		let router = Router::new();
		let request = Request::builder().method(Method::GET).uri("/nowhere/").build();
		let response = router.route(request).await.unwrap();
		assert_eq!(response.status, hyper::StatusCode::NOT_FOUND);
	}

	#[test]
	fn test_reverse_unknown_name_errors() {
		let router = Router::new();
		let err = router.reverse_with::<&str>("missing", &[]).unwrap_err();
		assert!(matches!(err, Error::NotFound(_)));
	}
}
