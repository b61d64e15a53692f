use crate::{FieldAccess, Model, OrderBy, Q, SortDirection};
use serde_json::Value;
use std::cmp::Ordering;
use std::sync::Arc;

/// Lazily-evaluated view over an in-memory collection of records
///
/// A `QuerySet` accumulates filters, ordering, and a slice range, and only
/// walks the underlying records when [`count`](QuerySet::count) or
/// [`iterate`](QuerySet::iterate) is called. Cloning is cheap: the backing
/// records are shared behind an [`Arc`].
///
/// These five operations (count / filter / order_by / slice / iterate) are
/// the whole contract the data-table engine relies on; a store backed by a
/// real database would satisfy it the same way.
#[derive(Clone)]
pub struct QuerySet<M>
where
	M: Model + FieldAccess,
{
	source: Arc<Vec<M>>,
	filters: Vec<Q>,
	ordering: Vec<OrderBy>,
	range: Option<(usize, usize)>,
}

impl<M> QuerySet<M>
where
	M: Model + FieldAccess,
{
	/// Wrap a collection of records
	pub fn from_records(records: Vec<M>) -> Self {
		Self {
			source: Arc::new(records),
			filters: Vec::new(),
			ordering: Vec::new(),
			range: None,
		}
	}

	/// Narrow the set with a filter expression
	pub fn filter(mut self, q: Q) -> Self {
		self.filters.push(q);
		self
	}

	/// Replace the ordering with a multi-key sort
	///
	/// The first key is primary; later keys break ties. An empty slice
	/// leaves the collection's natural order untouched.
	pub fn order_by(mut self, keys: &[OrderBy]) -> Self {
		self.ordering = keys.to_vec();
		self
	}

	/// Restrict to the contiguous range `[start, end)`
	///
	/// A start past the end of the set yields an empty result, not an error.
	pub fn slice(mut self, start: usize, end: usize) -> Self {
		self.range = Some((start, end));
		self
	}

	/// Number of records the current view would yield, ignoring the slice
	pub fn count(&self) -> usize {
		self.source
			.iter()
			.filter(|record| self.filters.iter().all(|q| q.matches(*record)))
			.count()
	}

	/// Materialize the view: filter, sort, then slice
	pub fn iterate(&self) -> Vec<M> {
		let mut records: Vec<M> = self
			.source
			.iter()
			.filter(|record| self.filters.iter().all(|q| q.matches(*record)))
			.cloned()
			.collect();

		if !self.ordering.is_empty() {
			// sort_by is stable, so equal keys keep their relative order
			records.sort_by(|a, b| compare_records(a, b, &self.ordering));
		}

		match self.range {
			Some((start, end)) => {
				let start = start.min(records.len());
				let end = end.clamp(start, records.len());
				records[start..end].to_vec()
			}
			None => records,
		}
	}
}

/// Multi-key comparison over dynamic field values
fn compare_records<M: FieldAccess>(a: &M, b: &M, keys: &[OrderBy]) -> Ordering {
	for key in keys {
		let ord = compare_values(
			a.field_value(&key.field).as_ref(),
			b.field_value(&key.field).as_ref(),
		);
		let ord = match key.direction {
			SortDirection::Ascending => ord,
			SortDirection::Descending => ord.reverse(),
		};
		if ord != Ordering::Equal {
			return ord;
		}
	}
	Ordering::Equal
}

/// Order JSON values: numbers numerically, strings lexicographically,
/// missing/null sorts last in ascending order
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
	match (a, b) {
		(Some(Value::Number(x)), Some(Value::Number(y))) => {
			let (x, y) = (x.as_f64().unwrap_or(f64::NAN), y.as_f64().unwrap_or(f64::NAN));
			x.partial_cmp(&y).unwrap_or(Ordering::Equal)
		}
		(Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
		(Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
		(Some(Value::Null) | None, Some(Value::Null) | None) => Ordering::Equal,
		(Some(Value::Null) | None, Some(_)) => Ordering::Greater,
		(Some(_), Some(Value::Null) | None) => Ordering::Less,
		(Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
	}
}
