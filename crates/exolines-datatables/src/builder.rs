use crate::{ColumnSpec, QueryDescriptor};
use exolines_core::{Error, Result};
use exolines_orm::{FieldAccess, Model, OrderBy, Q, QuerySet};
use std::collections::HashMap;

/// The outcome of running one descriptor against a collection
#[derive(Debug)]
pub struct AppliedQuery<M> {
	/// Records of the requested page, filtered and sorted
	pub records: Vec<M>,
	/// Cardinality of the unfiltered collection
	pub total: usize,
	/// Cardinality after the filter step only
	pub filtered: usize,
}

/// Run the descriptor's filter, sort, and slice against a collection
///
/// The global search OR-combines containment predicates over all searchable
/// columns; per-column searches AND-combine over their own fields; both
/// groups narrow the collection. Ordering resolves each clause's column
/// index through the descriptor's `data_index -> name` mapping and applies
/// them as one multi-key sort. The page slice `[start, start + length)` is
/// taken last.
pub fn apply<M>(descriptor: &QueryDescriptor, queryset: QuerySet<M>) -> Result<AppliedQuery<M>>
where
	M: Model + FieldAccess,
{
	let total = queryset.count();

	let mut filtered_set = queryset;
	if let Some(global) = global_filter(descriptor) {
		filtered_set = filtered_set.filter(global);
	}
	if let Some(local) = local_filter(descriptor) {
		filtered_set = filtered_set.filter(local);
	}
	let filtered = filtered_set.count();

	let ordering = resolve_ordering(descriptor)?;
	let mut page_set = filtered_set;
	if !ordering.is_empty() {
		page_set = page_set.order_by(&ordering);
	}
	page_set = page_set.slice(
		descriptor.start,
		descriptor.start.saturating_add(descriptor.length),
	);

	Ok(AppliedQuery {
		records: page_set.iterate(),
		total,
		filtered,
	})
}

/// OR group: one containment predicate per searchable column, driven by the
/// global search value. Empty value or no searchable columns -> no group.
fn global_filter(descriptor: &QueryDescriptor) -> Option<Q> {
	if descriptor.search.value.is_empty() {
		return None;
	}
	let predicates: Vec<Q> = descriptor
		.columns
		.iter()
		.filter(|column| column.searchable)
		.map(|column| Q::contains(&column.name, &descriptor.search.value))
		.collect();
	if predicates.is_empty() {
		None
	} else {
		Some(Q::any(predicates))
	}
}

/// AND group: one containment predicate per column with a non-empty
/// per-column search value, regardless of its `searchable` flag.
fn local_filter(descriptor: &QueryDescriptor) -> Option<Q> {
	let predicates: Vec<Q> = descriptor
		.columns
		.iter()
		.filter(|column| !column.search.value.is_empty())
		.map(|column| Q::contains(&column.name, &column.search.value))
		.collect();
	if predicates.is_empty() {
		None
	} else {
		Some(Q::all(predicates))
	}
}

/// Resolve order clauses to field sort keys through the columns' data indices
fn resolve_ordering(descriptor: &QueryDescriptor) -> Result<Vec<OrderBy>> {
	let index_to_field: HashMap<i64, &ColumnSpec> = descriptor
		.columns
		.iter()
		.map(|column| (column.data_index, column))
		.collect();

	descriptor
		.order
		.iter()
		.map(|clause| {
			let column = index_to_field
				.get(&clause.column_index)
				.ok_or(Error::InvalidColumnReference(clause.column_index))?;
			Ok(OrderBy {
				field: column.name.clone(),
				direction: clause.direction,
			})
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{OrderClause, SearchSpec};
	use exolines_orm::SortDirection;
	use rstest::rstest;
	use serde_json::{Value, json};

	#[derive(Debug, Clone)]
	struct Row {
		name: String,
		energy: f64,
	}

	impl Model for Row {
		fn table_name() -> &'static str {
			"rows"
		}
	}

	impl FieldAccess for Row {
		fn field_value(&self, name: &str) -> Option<Value> {
			match name {
				"name" => Some(json!(self.name)),
				"energy" => Some(json!(self.energy)),
				_ => None,
			}
		}
	}

	fn rows() -> QuerySet<Row> {
		QuerySet::from_records(
			[("ab", 3.0), ("bc", 1.0), ("abc", 2.0), ("xx", 5.0), ("ba", 4.0)]
				.into_iter()
				.map(|(name, energy)| Row {
					name: name.into(),
					energy,
				})
				.collect(),
		)
	}

	fn column(data_index: i64, name: &str, searchable: bool, search: &str) -> ColumnSpec {
		ColumnSpec {
			data_index,
			name: name.into(),
			searchable,
			orderable: true,
			search: SearchSpec {
				value: search.into(),
				regex: false,
			},
		}
	}

	fn descriptor(columns: Vec<ColumnSpec>) -> QueryDescriptor {
		QueryDescriptor {
			draw: 1,
			start: 0,
			length: 10,
			search: SearchSpec::default(),
			order: Vec::new(),
			columns,
		}
	}

	#[rstest]
	fn test_global_search_ors_over_searchable_columns() {
		// Arrange
		let mut d = descriptor(vec![
			column(0, "name", true, ""),
			column(1, "energy", true, ""),
		]);
		d.search.value = "a".into();

		// Act
		let applied = apply(&d, rows()).unwrap();

		// Assert
		assert_eq!(applied.total, 5);
		assert_eq!(applied.filtered, 3);
		let names: Vec<String> = applied.records.into_iter().map(|r| r.name).collect();
		assert_eq!(names, vec!["ab", "abc", "ba"]);
	}

	#[rstest]
	fn test_unsearchable_column_never_feeds_global_filter() {
		// Arrange: only the energy column is searchable; "a" matches no energy
		let mut d = descriptor(vec![
			column(0, "name", false, ""),
			column(1, "energy", true, ""),
		]);
		d.search.value = "a".into();

		// Act
		let applied = apply(&d, rows()).unwrap();

		// Assert
		assert_eq!(applied.filtered, 0);
		assert!(applied.records.is_empty());
	}

	#[rstest]
	fn test_local_search_applies_regardless_of_searchable_flag() {
		let d = descriptor(vec![column(0, "name", false, "ab")]);
		let applied = apply(&d, rows()).unwrap();
		assert_eq!(applied.filtered, 2);
	}

	#[rstest]
	fn test_local_searches_and_combine() {
		let d = descriptor(vec![
			column(0, "name", true, "a"),
			column(1, "energy", true, "3"),
		]);
		let applied = apply(&d, rows()).unwrap();
		// name contains "a" AND energy contains "3" -> only ab(3.0)
		assert_eq!(applied.filtered, 1);
		assert_eq!(applied.records[0].name, "ab");
	}

	#[rstest]
	fn test_global_and_local_groups_both_narrow() {
		let mut d = descriptor(vec![
			column(0, "name", true, ""),
			column(1, "energy", false, "4"),
		]);
		d.search.value = "a".into();
		let applied = apply(&d, rows()).unwrap();
		// global: name contains "a" -> {ab, abc, ba}; local: energy contains "4" -> {ba}
		assert_eq!(applied.filtered, 1);
		assert_eq!(applied.records[0].name, "ba");
	}

	#[rstest]
	fn test_sort_resolves_through_data_index() {
		let mut d = descriptor(vec![
			column(3, "name", true, ""),
			column(7, "energy", true, ""),
		]);
		d.order = vec![OrderClause {
			column_index: 7,
			direction: SortDirection::Descending,
		}];
		let applied = apply(&d, rows()).unwrap();
		let energies: Vec<f64> = applied.records.into_iter().map(|r| r.energy).collect();
		assert_eq!(energies, vec![5.0, 4.0, 3.0, 2.0, 1.0]);
	}

	#[rstest]
	fn test_unknown_order_index_is_invalid_column_reference() {
		let mut d = descriptor(vec![column(0, "name", true, "")]);
		d.order = vec![OrderClause {
			column_index: 9,
			direction: SortDirection::Ascending,
		}];
		let err = apply(&d, rows()).unwrap_err();
		assert!(matches!(err, Error::InvalidColumnReference(9)));
	}

	#[rstest]
	#[case(0, 2, 2)]
	#[case(4, 2, 1)]
	#[case(9, 2, 0)]
	#[case(0, 0, 0)]
	fn test_pagination_bounds(
		#[case] start: usize,
		#[case] length: usize,
		#[case] expected: usize,
	) {
		let mut d = descriptor(vec![column(0, "name", true, "")]);
		d.start = start;
		d.length = length;
		let applied = apply(&d, rows()).unwrap();
		assert_eq!(applied.records.len(), expected);
		assert_eq!(applied.total, 5);
		assert_eq!(applied.filtered, 5);
	}

	#[rstest]
	fn test_counts_are_taken_before_slicing() {
		let mut d = descriptor(vec![column(0, "name", true, "")]);
		d.search.value = "a".into();
		d.length = 1;
		let applied = apply(&d, rows()).unwrap();
		assert_eq!(applied.total, 5);
		assert_eq!(applied.filtered, 3);
		assert_eq!(applied.records.len(), 1);
	}
}
