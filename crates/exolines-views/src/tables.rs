use crate::base::View;
use async_trait::async_trait;
use exolines_core::Result;
use exolines_datatables::{DataTableServer, ValueGetters};
use exolines_http::{Request, Response};
use exolines_orm::{FieldAccess, Model, QuerySet};

/// AJAX endpoint feeding one server-side table
///
/// The queryset closure rebuilds the backing collection per request, so
/// path-scoped tables (states of one molecule) resolve their scope from
/// the extracted path params. Everything after that — decoding, filtering,
/// ordering, paging, projection — is [`DataTableServer`]'s job, and its
/// error payloads come back as HTTP 200 like any other table reply.
pub struct ServerSideDataTableView<M>
where
	M: Model + FieldAccess,
{
	server: DataTableServer<M>,
	queryset_for: Box<dyn Fn(&Request) -> QuerySet<M> + Send + Sync>,
}

impl<M> ServerSideDataTableView<M>
where
	M: Model + FieldAccess,
{
	pub fn new(
		value_getters: ValueGetters<M>,
		queryset_for: impl Fn(&Request) -> QuerySet<M> + Send + Sync + 'static,
	) -> Self {
		Self {
			server: DataTableServer::with_value_getters(value_getters),
			queryset_for: Box::new(queryset_for),
		}
	}
}

#[async_trait]
impl<M> View for ServerSideDataTableView<M>
where
	M: Model + FieldAccess + 'static,
{
	async fn dispatch(&self, request: Request) -> Result<Response> {
		let queryset = (self.queryset_for)(&request);
		let payload = self.server.serve(request.is_xhr(), &request.query_params, queryset);
		Response::ok().with_json(&payload)
	}

	fn allowed_methods(&self) -> Vec<&'static str> {
		vec!["GET"]
	}
}
