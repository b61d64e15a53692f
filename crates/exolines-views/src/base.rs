use async_trait::async_trait;
use exolines_core::{Error, Result};
use exolines_http::{Handler, Request, Response};
use once_cell::sync::Lazy;
use std::sync::Arc;
use tera::{Context, Tera};

/// Base trait for all views
///
/// A view decides what to do with an already-matched request. Method
/// filtering happens one level up, in [`ViewHandler`], so `dispatch`
/// only ever sees methods the view declared.
#[async_trait]
pub trait View: Send + Sync {
	async fn dispatch(&self, request: Request) -> Result<Response>;

	/// HTTP methods this view accepts
	fn allowed_methods(&self) -> Vec<&'static str> {
		vec!["GET", "HEAD"]
	}
}

/// Adapter plugging a [`View`] into the router's [`Handler`] seam
///
/// Requests with a method outside [`View::allowed_methods`] are answered
/// with 405 before the view runs.
pub struct ViewHandler<V: View>(pub V);

#[async_trait]
impl<V: View> Handler for ViewHandler<V> {
	async fn handle(&self, request: Request) -> Result<Response> {
		if !self.0.allowed_methods().contains(&request.method.as_str()) {
			return Ok(Response::method_not_allowed());
		}
		self.0.dispatch(request).await
	}
}

/// Wrap a view for registration in a route table
pub fn as_handler<V: View + 'static>(view: V) -> Arc<dyn Handler> {
	Arc::new(ViewHandler(view))
}

/// Compiled template set, embedded so the binary carries its own pages
static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
	let mut tera = Tera::default();
	let result = tera.add_raw_templates(vec![
		("base.html", include_str!("../templates/base.html")),
		("molecule_list.html", include_str!("../templates/molecule_list.html")),
		("molecule_detail.html", include_str!("../templates/molecule_detail.html")),
		("state_list.html", include_str!("../templates/state_list.html")),
		("transition_list.html", include_str!("../templates/transition_list.html")),
	]);
	if let Err(error) = result {
		panic!("embedded templates failed to compile: {error}");
	}
	tera
});

/// Render a template into an HTML response
pub fn render(template_name: &str, context: &Context) -> Result<Response> {
	let html = TEMPLATES
		.render(template_name, context)
		.map_err(|e| Error::Template(e.to_string()))?;
	Ok(Response::ok().with_html(html))
}

#[cfg(test)]
mod tests {
	use super::*;
	use hyper::Method;

	struct Fixed;

	#[async_trait]
	impl View for Fixed {
		async fn dispatch(&self, _request: Request) -> Result<Response> {
			Ok(Response::ok().with_body("dispatched"))
		}

		fn allowed_methods(&self) -> Vec<&'static str> {
			vec!["GET"]
		}
	}

	#[tokio::test]
	async fn test_disallowed_method_is_405() {
		// Arrange
		let handler = ViewHandler(Fixed);
		let request = Request::builder().method(Method::POST).uri("/x/").build();

		// Act
		let response = handler.handle(request).await.unwrap();

		// Assert
		assert_eq!(response.status, hyper::StatusCode::METHOD_NOT_ALLOWED);
	}

	#[tokio::test]
	async fn test_allowed_method_reaches_dispatch() {
		let handler = ViewHandler(Fixed);
		let request = Request::builder().method(Method::GET).uri("/x/").build();
		let response = handler.handle(request).await.unwrap();
		assert_eq!(&response.body[..], b"dispatched");
	}

	#[test]
	fn test_base_template_renders() {
		let mut context = Context::new();
		context.insert("title", "Molecules");
		let response = render("base.html", &context).unwrap();
		let html = String::from_utf8(response.body.to_vec()).unwrap();
		assert!(html.contains("<title>Molecules</title>"));
	}
}
