use exolines_core::{Error, Result};
use exolines_orm::SortDirection;
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashSet};

/// A search term with its regex flag
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSpec {
	pub value: String,
	pub regex: bool,
}

/// One entry of the multi-column ordering
#[derive(Debug, Clone)]
pub struct OrderClause {
	/// Client-side column ordinal, resolved through the columns' data indices
	pub column_index: i64,
	pub direction: SortDirection,
}

/// One column as described by the client
#[derive(Debug, Clone)]
pub struct ColumnSpec {
	/// Client-side column ordinal (`columns[i][data]`)
	pub data_index: i64,
	/// Field identifier used against the data source
	pub name: String,
	pub searchable: bool,
	pub orderable: bool,
	pub search: SearchSpec,
}

/// Fully parsed representation of one table query request
///
/// Built once per request from the decoded flat key-value pairs, used
/// read-only by the query builder and projector, and discarded with the
/// response.
#[derive(Debug, Clone)]
pub struct QueryDescriptor {
	/// Opaque sequence number echoed back so the client can discard stale replies
	pub draw: i64,
	/// Zero-based offset of the requested page
	pub start: usize,
	/// Page size; zero yields an empty page
	pub length: usize,
	/// Global search, matched across all searchable columns with OR semantics
	pub search: SearchSpec,
	pub order: Vec<OrderClause>,
	pub columns: Vec<ColumnSpec>,
}

/// Boolean wire decoding: the literal `"false"` is false, anything else
/// (including `""`, `"FALSE"`, `"0"`) is true.
fn decode_bool(raw: &str) -> bool {
	raw != "false"
}

impl QueryDescriptor {
	/// Decode the flat wire encoding into a descriptor
	///
	/// Keys not recognized by the decoding rules are silently ignored.
	/// Index groups (`order[i][...]`, `columns[i][...]`) are collected
	/// per-index, checked for completeness, and constructed in numeric
	/// order of `i`, terminating at the first gap. Any regex search flag
	/// decoding to true aborts the parse with an unsupported-feature error.
	pub fn parse(params: &IndexMap<String, String>) -> Result<QueryDescriptor> {
		let mut consumed: HashSet<&str> = HashSet::new();

		let draw = Self::required_int(params, "draw", &mut consumed)?;
		let start = Self::required_int(params, "start", &mut consumed)?;
		let length = Self::required_int(params, "length", &mut consumed)?;

		let search = Self::parse_global_search(params, &mut consumed)?;
		if search.regex {
			return Err(Error::UnsupportedFeature("Regex search".into()));
		}

		let order = Self::parse_order_groups(params, &mut consumed)?;
		let columns = Self::parse_column_groups(params, &mut consumed)?;

		for key in params.keys() {
			if !consumed.contains(key.as_str()) {
				tracing::debug!(key, "ignoring unrecognized table request key");
			}
		}

		let descriptor = QueryDescriptor {
			draw,
			start: usize::try_from(start).map_err(|_| Error::InvalidParameter {
				name: "start".into(),
				value: start.to_string(),
			})?,
			length: usize::try_from(length).map_err(|_| Error::InvalidParameter {
				name: "length".into(),
				value: length.to_string(),
			})?,
			search,
			order,
			columns,
		};
		tracing::debug!(
			draw = descriptor.draw,
			start = descriptor.start,
			length = descriptor.length,
			columns = descriptor.columns.len(),
			order = descriptor.order.len(),
			"parsed table query descriptor"
		);
		Ok(descriptor)
	}

	fn required_int<'a>(
		params: &'a IndexMap<String, String>,
		key: &str,
		consumed: &mut HashSet<&'a str>,
	) -> Result<i64> {
		let (key, raw) = params
			.get_key_value(key)
			.ok_or_else(|| Error::MissingParameter(key.to_string()))?;
		consumed.insert(key.as_str());
		raw.parse().map_err(|_| Error::InvalidParameter {
			name: key.clone(),
			value: raw.clone(),
		})
	}

	fn parse_global_search<'a>(
		params: &'a IndexMap<String, String>,
		consumed: &mut HashSet<&'a str>,
	) -> Result<SearchSpec> {
		let mut search = SearchSpec::default();
		if let Some((key, value)) = params.get_key_value("search[value]") {
			consumed.insert(key.as_str());
			search.value = value.clone();
		}
		if let Some((key, raw)) = params.get_key_value("search[regex]") {
			consumed.insert(key.as_str());
			search.regex = decode_bool(raw);
		}
		Ok(search)
	}

	/// Group `prefix[i]...` keys by numeric index
	///
	/// Returns index -> (member suffix -> value), sorted numerically by
	/// index. Keys whose index is not an integer are left unconsumed and
	/// fall under the silently-ignored rule.
	fn group_by_index<'a>(
		params: &'a IndexMap<String, String>,
		prefix: &str,
		consumed: &mut HashSet<&'a str>,
	) -> BTreeMap<usize, IndexMap<&'a str, &'a str>> {
		let mut groups: BTreeMap<usize, IndexMap<&str, &str>> = BTreeMap::new();
		for (key, value) in params {
			let Some(rest) = key.strip_prefix(prefix) else {
				continue;
			};
			let Some((index, member)) = rest.split_once(']') else {
				continue;
			};
			let Ok(index) = index.parse::<usize>() else {
				continue;
			};
			consumed.insert(key.as_str());
			groups.entry(index).or_default().insert(member, value);
		}
		groups
	}

	fn parse_order_groups<'a>(
		params: &'a IndexMap<String, String>,
		consumed: &mut HashSet<&'a str>,
	) -> Result<Vec<OrderClause>> {
		let groups = Self::group_by_index(params, "order[", consumed);
		let mut order = Vec::with_capacity(groups.len());
		// Contiguous from 0; groups past the first gap are ignored
		for i in 0.. {
			let Some(group) = groups.get(&i) else { break };
			let column_raw = group
				.get("[column]")
				.ok_or_else(|| Error::MissingParameter(format!("order[{i}][column]")))?;
			let column_index: i64 =
				column_raw.parse().map_err(|_| Error::InvalidParameter {
					name: format!("order[{i}][column]"),
					value: column_raw.to_string(),
				})?;
			let dir_raw = group
				.get("[dir]")
				.ok_or_else(|| Error::MissingParameter(format!("order[{i}][dir]")))?;
			let direction = match *dir_raw {
				"asc" => SortDirection::Ascending,
				"desc" => SortDirection::Descending,
				other => {
					return Err(Error::InvalidParameter {
						name: format!("order[{i}][dir]"),
						value: other.to_string(),
					});
				}
			};
			order.push(OrderClause {
				column_index,
				direction,
			});
		}
		Ok(order)
	}

	fn parse_column_groups<'a>(
		params: &'a IndexMap<String, String>,
		consumed: &mut HashSet<&'a str>,
	) -> Result<Vec<ColumnSpec>> {
		let groups = Self::group_by_index(params, "columns[", consumed);
		let mut columns = Vec::with_capacity(groups.len());
		for i in 0.. {
			let Some(group) = groups.get(&i) else { break };
			let member = |name: &str| -> Result<&str> {
				group
					.get(name)
					.copied()
					.ok_or_else(|| Error::MissingParameter(format!("columns[{i}]{name}")))
			};
			let data_raw = member("[data]")?;
			let data_index: i64 = data_raw.parse().map_err(|_| Error::InvalidParameter {
				name: format!("columns[{i}][data]"),
				value: data_raw.to_string(),
			})?;
			let search = SearchSpec {
				value: member("[search][value]")?.to_string(),
				regex: decode_bool(member("[search][regex]")?),
			};
			if search.regex {
				return Err(Error::UnsupportedFeature("Regex search".into()));
			}
			columns.push(ColumnSpec {
				data_index,
				name: member("[name]")?.to_string(),
				searchable: decode_bool(member("[searchable]")?),
				orderable: decode_bool(member("[orderable]")?),
				search,
			});
		}
		Ok(columns)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn params(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	fn column_pairs(i: usize, name: &str) -> Vec<(String, String)> {
		vec![
			(format!("columns[{i}][data]"), i.to_string()),
			(format!("columns[{i}][name]"), name.to_string()),
			(format!("columns[{i}][searchable]"), "true".to_string()),
			(format!("columns[{i}][orderable]"), "true".to_string()),
			(format!("columns[{i}][search][value]"), String::new()),
			(format!("columns[{i}][search][regex]"), "false".to_string()),
		]
	}

	fn base_params() -> IndexMap<String, String> {
		let mut map = params(&[("draw", "1"), ("start", "0"), ("length", "10")]);
		for (k, v) in column_pairs(0, "name") {
			map.insert(k, v);
		}
		map
	}

	#[rstest]
	fn test_minimal_request_parses() {
		let map = params(&[("draw", "3"), ("start", "20"), ("length", "10")]);
		let descriptor = QueryDescriptor::parse(&map).unwrap();
		assert_eq!(descriptor.draw, 3);
		assert_eq!(descriptor.start, 20);
		assert_eq!(descriptor.length, 10);
		assert!(descriptor.columns.is_empty());
		assert!(descriptor.order.is_empty());
		assert_eq!(descriptor.search, SearchSpec::default());
	}

	#[rstest]
	#[case("draw")]
	#[case("start")]
	#[case("length")]
	fn test_missing_required_key_fails(#[case] missing: &str) {
		// Arrange
		let mut map = params(&[("draw", "1"), ("start", "0"), ("length", "10")]);
		map.shift_remove(missing);

		// Act
		let err = QueryDescriptor::parse(&map).unwrap_err();

		// Assert
		assert!(matches!(err, Error::MissingParameter(ref k) if k == missing));
	}

	#[rstest]
	fn test_unparseable_integer_fails() {
		let map = params(&[("draw", "1"), ("start", "zero"), ("length", "10")]);
		let err = QueryDescriptor::parse(&map).unwrap_err();
		assert!(matches!(err, Error::InvalidParameter { ref name, .. } if name == "start"));
	}

	#[rstest]
	fn test_global_regex_search_is_unsupported() {
		let mut map = base_params();
		map.insert("search[value]".into(), "H2O".into());
		map.insert("search[regex]".into(), "true".into());
		let err = QueryDescriptor::parse(&map).unwrap_err();
		assert!(matches!(err, Error::UnsupportedFeature(_)));
	}

	#[rstest]
	#[case("FALSE")]
	#[case("0")]
	#[case("")]
	fn test_regex_flag_anything_but_false_is_true(#[case] raw: &str) {
		// Only the literal "false" decodes to false
		let mut map = base_params();
		map.insert("search[regex]".into(), raw.into());
		let err = QueryDescriptor::parse(&map).unwrap_err();
		assert!(matches!(err, Error::UnsupportedFeature(_)));
	}

	#[rstest]
	fn test_per_column_regex_search_is_unsupported() {
		let mut map = base_params();
		map.insert("columns[0][search][regex]".into(), "1".into());
		let err = QueryDescriptor::parse(&map).unwrap_err();
		assert!(matches!(err, Error::UnsupportedFeature(_)));
	}

	#[rstest]
	fn test_searchable_boolean_decoding() {
		let mut map = base_params();
		map.insert("columns[0][searchable]".into(), "false".into());
		for (k, v) in column_pairs(1, "energy") {
			map.insert(k, v);
		}
		map.insert("columns[1][searchable]".into(), "FALSE".into());

		let descriptor = QueryDescriptor::parse(&map).unwrap();
		assert!(!descriptor.columns[0].searchable);
		assert!(descriptor.columns[1].searchable);
	}

	#[rstest]
	fn test_column_groups_sorted_numerically_regardless_of_wire_order() {
		// Arrange: column 1 serialized before column 0, members interleaved
		let mut map = params(&[("draw", "1"), ("start", "0"), ("length", "10")]);
		let mut pairs = column_pairs(1, "energy");
		pairs.extend(column_pairs(0, "name"));
		for (k, v) in pairs {
			map.insert(k, v);
		}

		// Act
		let descriptor = QueryDescriptor::parse(&map).unwrap();

		// Assert
		let names: Vec<&str> = descriptor.columns.iter().map(|c| c.name.as_str()).collect();
		assert_eq!(names, vec!["name", "energy"]);
		assert_eq!(descriptor.columns[0].data_index, 0);
	}

	#[rstest]
	fn test_index_groups_terminate_at_first_gap() {
		// columns[0] and columns[2] present, columns[1] absent
		let mut map = base_params();
		for (k, v) in column_pairs(2, "energy") {
			map.insert(k, v);
		}
		let descriptor = QueryDescriptor::parse(&map).unwrap();
		assert_eq!(descriptor.columns.len(), 1);
	}

	#[rstest]
	fn test_partial_column_group_is_missing_parameter() {
		let mut map = base_params();
		map.shift_remove("columns[0][orderable]");
		let err = QueryDescriptor::parse(&map).unwrap_err();
		assert!(
			matches!(err, Error::MissingParameter(ref k) if k == "columns[0][orderable]")
		);
	}

	#[rstest]
	fn test_order_groups_parse() {
		let mut map = base_params();
		map.insert("order[0][column]".into(), "0".into());
		map.insert("order[0][dir]".into(), "desc".into());
		map.insert("order[1][column]".into(), "1".into());
		map.insert("order[1][dir]".into(), "asc".into());

		let descriptor = QueryDescriptor::parse(&map).unwrap();
		assert_eq!(descriptor.order.len(), 2);
		assert_eq!(descriptor.order[0].column_index, 0);
		assert_eq!(descriptor.order[0].direction, SortDirection::Descending);
		assert_eq!(descriptor.order[1].direction, SortDirection::Ascending);
	}

	#[rstest]
	fn test_partial_order_group_is_missing_parameter() {
		let mut map = base_params();
		map.insert("order[0][column]".into(), "0".into());
		let err = QueryDescriptor::parse(&map).unwrap_err();
		assert!(matches!(err, Error::MissingParameter(ref k) if k == "order[0][dir]"));
	}

	#[rstest]
	fn test_bad_order_direction_is_invalid_parameter() {
		let mut map = base_params();
		map.insert("order[0][column]".into(), "0".into());
		map.insert("order[0][dir]".into(), "sideways".into());
		let err = QueryDescriptor::parse(&map).unwrap_err();
		assert!(matches!(err, Error::InvalidParameter { ref name, .. } if name == "order[0][dir]"));
	}

	#[rstest]
	fn test_unrecognized_keys_are_ignored() {
		let mut map = base_params();
		map.insert("_".into(), "1693412345".into());
		map.insert("columns[x][data]".into(), "9".into());
		let descriptor = QueryDescriptor::parse(&map).unwrap();
		assert_eq!(descriptor.columns.len(), 1);
	}

	#[rstest]
	fn test_negative_start_is_invalid() {
		let map = params(&[("draw", "1"), ("start", "-5"), ("length", "10")]);
		let err = QueryDescriptor::parse(&map).unwrap_err();
		assert!(matches!(err, Error::InvalidParameter { ref name, .. } if name == "start"));
	}
}
