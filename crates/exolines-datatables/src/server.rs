use crate::{QueryDescriptor, ValueGetters, apply, project};
use exolines_core::Result;
use exolines_orm::{FieldAccess, Model, QuerySet};
use indexmap::IndexMap;
use serde_json::{Value, json};

/// One-shot server side of a DataTables-style AJAX table
///
/// Holds the per-field [`ValueGetters`] for its table and turns one request
/// (the decoded flat query pairs plus the XHR transport flag) into one reply
/// payload. No state survives across calls; concurrent requests each get
/// their own descriptor.
pub struct DataTableServer<M> {
	value_getters: ValueGetters<M>,
}

impl<M> DataTableServer<M>
where
	M: Model + FieldAccess,
{
	pub fn new() -> Self {
		Self {
			value_getters: ValueGetters::new(),
		}
	}

	pub fn with_value_getters(value_getters: ValueGetters<M>) -> Self {
		Self { value_getters }
	}

	/// Serve one table request
	///
	/// `xhr` is the transport precondition: non-XHR requests are rejected
	/// before a single key is decoded. Every failure ends up as a
	/// payload-level `{"error": ...}` object in an otherwise well-formed
	/// reply; on the error path no count, filter, or projection work runs.
	pub fn serve(&self, xhr: bool, params: &IndexMap<String, String>, queryset: QuerySet<M>) -> Value {
		match self.build_payload(xhr, params, queryset) {
			Ok(payload) => payload,
			Err(error) => {
				tracing::warn!(%error, "table request rejected");
				json!({ "error": error.to_string() })
			}
		}
	}

	fn build_payload(
		&self,
		xhr: bool,
		params: &IndexMap<String, String>,
		queryset: QuerySet<M>,
	) -> Result<Value> {
		if !xhr {
			return Err(exolines_core::Error::UnexpectedRequestType);
		}

		let descriptor = QueryDescriptor::parse(params)?;
		let applied = apply(&descriptor, queryset)?;
		let data = project(&applied.records, &descriptor.columns, &self.value_getters);

		Ok(json!({
			"draw": descriptor.draw.to_string(),
			"recordsTotal": applied.total,
			"recordsFiltered": applied.filtered,
			"data": data,
		}))
	}
}

impl<M> Default for DataTableServer<M>
where
	M: Model + FieldAccess,
{
	fn default() -> Self {
		Self::new()
	}
}
