use crate::base::{View, render};
use async_trait::async_trait;
use exolines_core::Result;
use exolines_http::{Request, Response};
use serde::Serialize;
use tera::Context;

/// Render a template over a fixed collection of records
///
/// The records land in the template context under `object_list` (or a
/// custom name); anything else the template needs goes in through
/// [`extra`](ListView::extra).
pub struct ListView<M> {
	template_name: &'static str,
	context_object_name: &'static str,
	objects: Vec<M>,
	extra_context: Context,
}

impl<M> ListView<M>
where
	M: Serialize + Send + Sync,
{
	pub fn new(template_name: &'static str, objects: Vec<M>) -> Self {
		Self {
			template_name,
			context_object_name: "object_list",
			objects,
			extra_context: Context::new(),
		}
	}

	pub fn with_context_object_name(mut self, name: &'static str) -> Self {
		self.context_object_name = name;
		self
	}

	/// Add a fixed context value available to the template
	pub fn extra(mut self, key: &str, value: impl Serialize) -> Self {
		self.extra_context.insert(key, &value);
		self
	}
}

#[async_trait]
impl<M> View for ListView<M>
where
	M: Serialize + Send + Sync,
{
	async fn dispatch(&self, _request: Request) -> Result<Response> {
		let mut context = self.extra_context.clone();
		context.insert(self.context_object_name, &self.objects);
		render(self.template_name, &context)
	}
}

/// Render a template over one record looked up from a path parameter
///
/// The resolver maps the raw parameter value to a record; `None` renders
/// a 404. Context that depends on the resolved record (page titles,
/// reversed AJAX URLs) is supplied by the `extra_context` closure.
pub struct DetailView<M> {
	template_name: &'static str,
	context_object_name: &'static str,
	lookup_param: &'static str,
	resolver: Box<dyn Fn(&str) -> Option<M> + Send + Sync>,
	extra_context: Box<dyn Fn(&M) -> Context + Send + Sync>,
}

impl<M> DetailView<M>
where
	M: Serialize + Send + Sync,
{
	pub fn new(
		template_name: &'static str,
		lookup_param: &'static str,
		resolver: impl Fn(&str) -> Option<M> + Send + Sync + 'static,
	) -> Self {
		Self {
			template_name,
			context_object_name: "object",
			lookup_param,
			resolver: Box::new(resolver),
			extra_context: Box::new(|_| Context::new()),
		}
	}

	pub fn with_context_object_name(mut self, name: &'static str) -> Self {
		self.context_object_name = name;
		self
	}

	pub fn with_extra_context(
		mut self,
		extra: impl Fn(&M) -> Context + Send + Sync + 'static,
	) -> Self {
		self.extra_context = Box::new(extra);
		self
	}
}

#[async_trait]
impl<M> View for DetailView<M>
where
	M: Serialize + Send + Sync,
{
	async fn dispatch(&self, request: Request) -> Result<Response> {
		let lookup = request.path_param(self.lookup_param).unwrap_or("");
		let Some(object) = (self.resolver)(lookup) else {
			return Ok(Response::not_found().with_body(format!("Not found: {}", request.path())));
		};
		let mut context = (self.extra_context)(&object);
		context.insert(self.context_object_name, &object);
		render(self.template_name, &context)
	}
}
